//! Front-matter parsing.
//!
//! The schema is deliberately small: a YAML block delimited by `---` lines
//! at the top of the markdown file, carrying the fields the post template
//! knows about. Dates are opaque strings and are compared lexically, so
//! ISO dates (`2024-01-31`) sort correctly.

use serde::{Deserialize, Serialize};

/// Front matter metadata parsed from a post's markdown file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrontMatter {
    /// Post title (overrides the folder-derived title)
    pub title: Option<String>,
    /// Publication date as an opaque string, used for homepage ordering
    pub date: Option<String>,
    /// Post description for SEO/previews
    pub description: Option<String>,
    /// Cover image URL or path
    pub image: Option<String>,
    /// Additional arbitrary metadata
    #[serde(flatten)]
    pub extra: std::collections::HashMap<String, serde_yaml::Value>,
}

/// Result of parsing front matter from markdown content.
#[derive(Debug)]
pub struct ParsedContent {
    /// The parsed front matter (empty if none found)
    pub front_matter: FrontMatter,
    /// The markdown content without the front matter block
    pub content: String,
}

/// Parse front matter from markdown content.
///
/// Front matter is a YAML block delimited by `---` at the start of the file:
///
/// ```markdown
/// ---
/// title: My Post
/// date: 2024-01-31
/// ---
///
/// # Content starts here
/// ```
///
/// A missing block, an unclosed block, or unparseable YAML all degrade to
/// default front matter rather than failing the post; a parse failure is
/// reported as a warning.
pub fn parse_front_matter(content: &str) -> ParsedContent {
    let content = content.trim_start();

    if !content.starts_with("---") {
        return ParsedContent {
            front_matter: FrontMatter::default(),
            content: content.to_string(),
        };
    }

    let after_opening = &content[3..];
    // The opening delimiter is a bare `---` line. A longer dash run
    // (e.g. `----------`) is a markdown thematic break, not front matter.
    if !after_opening.is_empty() && !after_opening.starts_with('\n') {
        return ParsedContent {
            front_matter: FrontMatter::default(),
            content: content.to_string(),
        };
    }
    let Some(closing_pos) = after_opening.find("\n---") else {
        // No closing delimiter, treat the entire content as markdown
        return ParsedContent {
            front_matter: FrontMatter::default(),
            content: content.to_string(),
        };
    };

    let yaml_content = after_opening[..closing_pos].trim_start_matches('\n');

    // Skip past "---" + yaml + "\n---"
    let markdown_start = 3 + closing_pos + 4;
    let markdown_content = if markdown_start < content.len() {
        content[markdown_start..].trim_start_matches('\n').to_string()
    } else {
        String::new()
    };

    let front_matter = match serde_yaml::from_str(yaml_content) {
        Ok(fm) => fm,
        Err(e) => {
            eprintln!("Warning: failed to parse front matter: {}", e);
            FrontMatter::default()
        }
    };

    ParsedContent {
        front_matter,
        content: markdown_content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_front_matter_basic() {
        let content = r#"---
title: My Post
date: 2024-01-31
description: A test post
image: cover.png
---

# Hello World
"#;
        let parsed = parse_front_matter(content);
        assert_eq!(parsed.front_matter.title, Some("My Post".to_string()));
        assert_eq!(parsed.front_matter.date, Some("2024-01-31".to_string()));
        assert_eq!(
            parsed.front_matter.description,
            Some("A test post".to_string())
        );
        assert_eq!(parsed.front_matter.image, Some("cover.png".to_string()));
        assert_eq!(parsed.content.trim(), "# Hello World");
    }

    #[test]
    fn test_parse_front_matter_with_custom_fields() {
        let content = r#"---
title: Custom Post
author: Jane Doe
tags:
  - rust
  - blogging
---

Content here
"#;
        let parsed = parse_front_matter(content);
        assert_eq!(parsed.front_matter.title, Some("Custom Post".to_string()));
        assert!(parsed.front_matter.extra.contains_key("author"));
        assert!(parsed.front_matter.extra.contains_key("tags"));
    }

    #[test]
    fn test_parse_front_matter_no_front_matter() {
        let content = "# Just Markdown\n\nNo front matter here.";
        let parsed = parse_front_matter(content);
        assert_eq!(parsed.front_matter.title, None);
        assert!(parsed.content.starts_with("# Just Markdown"));
    }

    #[test]
    fn test_parse_front_matter_leading_thematic_break() {
        let content = "----------\nintro paragraph\n\n---\n\nbody text";
        let parsed = parse_front_matter(content);
        assert_eq!(parsed.front_matter.title, None);
        assert!(parsed.content.starts_with("----------"));
        assert!(parsed.content.contains("intro paragraph"));
        assert!(parsed.content.contains("body text"));
    }

    #[test]
    fn test_parse_front_matter_unclosed_block() {
        let content = "---\ntitle: Oops\n\n# Not closed";
        let parsed = parse_front_matter(content);
        assert_eq!(parsed.front_matter.title, None);
        assert!(parsed.content.starts_with("---"));
    }

    #[test]
    fn test_parse_front_matter_empty_front_matter() {
        let content = "---\n---\n\n# Content";
        let parsed = parse_front_matter(content);
        assert_eq!(parsed.front_matter.title, None);
        assert!(parsed.content.starts_with("# Content"));
    }
}
