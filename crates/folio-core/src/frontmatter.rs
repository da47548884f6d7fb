//! Frontmatter extraction for content files.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{CoreError, Result};

/// Delimiter types for frontmatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontmatterFormat {
    /// YAML frontmatter delimited by `---`.
    Yaml,
    /// TOML frontmatter delimited by `+++`.
    Toml,
}

impl FrontmatterFormat {
    /// Get the delimiter string for this format.
    pub fn delimiter(&self) -> &'static str {
        match self {
            Self::Yaml => "---",
            Self::Toml => "+++",
        }
    }
}

/// Split content into frontmatter and body.
///
/// The closing delimiter must start a line, so `---` inside a value does not
/// end the block.
pub fn split_frontmatter(content: &str) -> Option<(FrontmatterFormat, &str, &str)> {
    let content = content.trim_start_matches('\u{feff}').trim_start();

    // Detect format based on opening delimiter
    let format = if content.starts_with("---") {
        FrontmatterFormat::Yaml
    } else if content.starts_with("+++") {
        FrontmatterFormat::Toml
    } else {
        return None;
    };

    let delimiter = format.delimiter();
    let after_first = &content[delimiter.len()..];
    let closing_pos = after_first.find(&format!("\n{delimiter}"))?;

    let frontmatter = after_first[..closing_pos].trim();
    let body = after_first[closing_pos + 1 + delimiter.len()..].trim_start();

    Some((format, frontmatter, body))
}

/// Parse the frontmatter of `content` into the schema type `T`.
///
/// Returns the typed frontmatter and the remaining body. A file without a
/// frontmatter block is an error: every collection schema requires a title.
pub fn parse_frontmatter<T: DeserializeOwned>(content: &str, path: &Path) -> Result<(T, String)> {
    let Some((format, fm_str, body)) = split_frontmatter(content) else {
        return Err(CoreError::frontmatter(path, "no frontmatter block found"));
    };

    let frontmatter: T = match format {
        FrontmatterFormat::Yaml => {
            serde_yaml::from_str(fm_str).map_err(|e| CoreError::frontmatter(path, e.to_string()))?
        }
        FrontmatterFormat::Toml => {
            toml::from_str(fm_str).map_err(|e| CoreError::frontmatter(path, e.to_string()))?
        }
    };

    Ok((frontmatter, body.to_string()))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Minimal {
        title: String,
        #[serde(default)]
        tags: Vec<String>,
    }

    #[test]
    fn test_split_yaml_frontmatter() {
        let content = r#"---
title: "Hello World"
date: 2024-01-14
---

This is the body content."#;

        let (format, fm, body) = split_frontmatter(content).expect("split");
        assert_eq!(format, FrontmatterFormat::Yaml);
        assert!(fm.contains("title:"));
        assert!(body.starts_with("This is the body"));
    }

    #[test]
    fn test_split_toml_frontmatter() {
        let content = r#"+++
title = "Hello World"
date = 2024-01-14
+++

This is the body content."#;

        let (format, fm, body) = split_frontmatter(content).expect("split");
        assert_eq!(format, FrontmatterFormat::Toml);
        assert!(fm.contains("title ="));
        assert!(body.starts_with("This is the body"));
    }

    #[test]
    fn test_split_ignores_inline_dashes() {
        let content = "---\ntitle: \"a --- b\"\n---\nBody";

        let (_, fm, body) = split_frontmatter(content).expect("split");
        assert_eq!(fm, "title: \"a --- b\"");
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "Just some content without frontmatter.";
        assert!(split_frontmatter(content).is_none());
    }

    #[test]
    fn test_unclosed_frontmatter() {
        assert!(split_frontmatter("---\ntitle: x\n").is_none());
    }

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: "Test Post"
tags:
  - rust
  - test
---

Content here."#;

        let (fm, body): (Minimal, _) =
            parse_frontmatter(content, Path::new("test.md")).expect("parse");

        assert_eq!(fm.title, "Test Post");
        assert_eq!(fm.tags, vec!["rust", "test"]);
        assert_eq!(body, "Content here.");
    }

    #[test]
    fn test_parse_toml_frontmatter() {
        let content = r#"+++
title = "Test Post"
tags = ["rust", "test"]
+++

Content here."#;

        let (fm, body): (Minimal, _) =
            parse_frontmatter(content, Path::new("test.md")).expect("parse");

        assert_eq!(fm.title, "Test Post");
        assert_eq!(fm.tags, vec!["rust", "test"]);
        assert_eq!(body, "Content here.");
    }

    #[test]
    fn test_parse_missing_frontmatter_is_error() {
        let result: Result<(Minimal, String)> =
            parse_frontmatter("No block here", Path::new("about.md"));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("about.md"));
        assert!(err.contains("no frontmatter"));
    }

    #[test]
    fn test_parse_missing_required_field() {
        let result: Result<(Minimal, String)> =
            parse_frontmatter("---\ntags: [a]\n---\n", Path::new("post.md"));
        assert!(result.unwrap_err().to_string().contains("title"));
    }

    #[test]
    fn test_malformed_blocks_are_frontmatter_errors() {
        for content in ["---\ntitle: [unclosed\n---\n", "+++\ntitle = \n+++\n"] {
            let result: Result<(Minimal, String)> =
                parse_frontmatter(content, Path::new("post.md"));
            let err = result.unwrap_err();
            assert!(matches!(err, CoreError::Frontmatter { .. }), "{err:?}");
        }
    }
}
