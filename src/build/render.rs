//! Template rendering, wrapping Tera.

use std::path::Path;

use serde::Serialize;
use tera::{Context, Tera};

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    #[error("templates directory not found: {0}")]
    TemplatesNotFound(String),
}

/// The template renderer.
///
/// Loads every `*.html` under the site's `templates/` directory. Two
/// templates are expected: `post.html` for individual posts and
/// `index.html` for the homepage.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Create a new renderer loading templates from the given directory.
    pub fn new(templates_dir: &Path) -> Result<Self, RenderError> {
        if !templates_dir.is_dir() {
            return Err(RenderError::TemplatesNotFound(
                templates_dir.display().to_string(),
            ));
        }

        let glob = templates_dir.join("**/*.html");
        let glob_str = glob.to_string_lossy();
        let tera = Tera::new(&glob_str)?;

        Ok(Self { tera })
    }

    /// Render one post with the `post.html` template.
    ///
    /// All five recognized fields (`title`, `date`, `description`, `image`,
    /// `content`) are always present in the context, so a template is free
    /// to omit any of them. `content` is trusted HTML straight from the
    /// converter; the template inserts it with `| safe`, everything else
    /// goes through Tera's autoescaping.
    pub fn render_post(&self, context: &PostContext) -> Result<String, RenderError> {
        let mut tera_context = Context::new();
        tera_context.insert("site", &context.site);
        tera_context.insert("title", &context.title);
        tera_context.insert("date", &context.date);
        tera_context.insert("description", &context.description);
        tera_context.insert("image", &context.image);
        tera_context.insert("content", &context.content);

        Ok(self.tera.render("post.html", &tera_context)?)
    }

    /// Render the homepage with the `index.html` template.
    pub fn render_index(&self, context: &IndexContext) -> Result<String, RenderError> {
        let mut tera_context = Context::new();
        tera_context.insert("site", &context.site);
        tera_context.insert("posts", &context.posts);

        Ok(self.tera.render("index.html", &tera_context)?)
    }
}

/// Site-level information available to every template.
#[derive(Debug, Clone, Serialize)]
pub struct SiteContext {
    pub name: String,
    pub url: Option<String>,
}

/// The render context for one post.
#[derive(Debug, Serialize)]
pub struct PostContext {
    pub site: SiteContext,
    pub title: String,
    pub date: String,
    pub description: String,
    pub image: String,
    /// Converted HTML fragment, inserted unescaped
    pub content: String,
}

/// The render context for the homepage.
#[derive(Debug, Serialize)]
pub struct IndexContext {
    pub site: SiteContext,
    pub posts: Vec<PostPreview>,
}

/// One entry in the homepage post list.
#[derive(Debug, Clone, Serialize)]
pub struct PostPreview {
    pub title: String,
    pub date: String,
    /// Link target relative to the output root, e.g. "hello-world/"
    pub url: String,
}
