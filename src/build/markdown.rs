//! Markdown to HTML conversion.
//!
//! The converter is a pure function from markdown text to an HTML
//! fragment, so the pipeline never depends on its internals and tests can
//! exercise it directly.

use pulldown_cmark::{Options, Parser, html};

use crate::config::MarkdownConfig;

#[derive(thiserror::Error, Debug)]
pub enum ConversionError {
    #[error("invalid markdown extension: {0}")]
    InvalidExtension(String),
}

/// Convert a markdown document to an HTML fragment using pulldown-cmark.
pub fn render_markdown(
    markdown: &str,
    config: &MarkdownConfig,
) -> Result<String, ConversionError> {
    let mut options = Options::empty();
    for extension in &config.extensions {
        match extension.as_str() {
            "definition_lists" => options.insert(Options::ENABLE_DEFINITION_LIST),
            "footnotes" => options.insert(Options::ENABLE_FOOTNOTES),
            "gfm" => options.insert(Options::ENABLE_GFM),
            "heading_attributes" => options.insert(Options::ENABLE_HEADING_ATTRIBUTES),
            "strikethrough" => options.insert(Options::ENABLE_STRIKETHROUGH),
            "tables" => options.insert(Options::ENABLE_TABLES),
            "tasklists" => options.insert(Options::ENABLE_TASKLISTS),
            other => return Err(ConversionError::InvalidExtension(other.to_string())),
        }
    }

    let parser = Parser::new_ext(markdown, options);

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    Ok(html_output)
}
