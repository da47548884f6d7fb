//! Site configuration management.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Main configuration structure for Folio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide metadata.
    pub site: SiteConfig,

    /// Header logo and navigation.
    #[serde(default)]
    pub header: HeaderConfig,

    /// Links shown on content pages.
    #[serde(default)]
    pub page: PageConfig,

    /// Footer navigation.
    #[serde(default)]
    pub footer: FooterConfig,

    /// Filesystem layout.
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Site-wide metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site author name.
    pub author: String,

    /// Site title.
    pub title: String,

    /// Tagline shown under the title.
    #[serde(default)]
    pub subtitle: Option<String>,

    /// Site description for meta tags.
    #[serde(default)]
    pub description: Option<String>,

    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,

    /// Social profile links.
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

/// A social profile link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub text: String,
    pub href: String,
    /// Icon class used in the footer.
    pub icon: String,
    /// Icon class used when the link is also shown in the header.
    #[serde(default)]
    pub header: Option<String>,
}

/// A plain navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub text: String,
    pub href: String,
}

/// An image reference with alt text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
}

/// Header configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeaderConfig {
    /// Logo image.
    #[serde(default)]
    pub logo: Option<ImageRef>,

    /// Main navigation links.
    #[serde(default)]
    pub nav_links: Vec<NavLink>,
}

/// Content page configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageConfig {
    /// Links back to the blog index.
    #[serde(default)]
    pub blog_links: Vec<NavLink>,
}

/// Footer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FooterConfig {
    #[serde(default)]
    pub nav_links: Vec<NavLink>,
}

/// Filesystem layout, relative to the project root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Public assets root that carousel folders are resolved against.
    #[serde(default = "default_public_dir")]
    pub public_dir: String,

    /// Directory holding one subdirectory per content collection.
    #[serde(default = "default_content_dir")]
    pub content_dir: String,
}

fn default_public_dir() -> String {
    "public".to_string()
}

fn default_content_dir() -> String {
    "src/content".to_string()
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            public_dir: default_public_dir(),
            content_dir: default_content_dir(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `FOLIO__SECTION__KEY` environment overrides.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("FOLIO").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.site.author.trim().is_empty() {
            return Err(CoreError::config("site.author cannot be empty"));
        }

        if self.site.title.trim().is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        for link in &self.site.social_links {
            check_link("site.social_links", &link.text, &link.href)?;
        }
        for (section, link) in self.all_nav_links() {
            check_link(section, &link.text, &link.href)?;
        }

        if let Some(email) = self.site.email.as_deref().filter(|e| !e.contains('@')) {
            tracing::warn!(email, "site.email does not look like an email address");
        }

        if self.site.subtitle.as_deref().is_some_and(|s| s.trim().is_empty()) {
            tracing::warn!("site.subtitle is set but empty");
        }

        Ok(())
    }

    /// All navigation links, tagged with the section they come from.
    ///
    /// Order: header, page, footer.
    pub fn all_nav_links(&self) -> impl Iterator<Item = (&'static str, &NavLink)> {
        let header = self.header.nav_links.iter().map(|l| ("header.nav_links", l));
        let page = self.page.blog_links.iter().map(|l| ("page.blog_links", l));
        let footer = self.footer.nav_links.iter().map(|l| ("footer.nav_links", l));
        header.chain(page).chain(footer)
    }

    /// Public assets directory resolved against `root`.
    pub fn public_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.paths.public_dir)
    }

    /// Content directory resolved against `root`.
    pub fn content_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.paths.content_dir)
    }
}

fn check_link(section: &str, text: &str, href: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(CoreError::config(format!(
            "{section}: link text cannot be empty (href: {href})"
        )));
    }
    if href.trim().is_empty() {
        return Err(CoreError::config(format!(
            "{section}: link '{text}' has an empty href"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn create_test_config() -> String {
        r#"
[site]
author = "Ada Lovelace"
title = "Portfolio of Ada"
subtitle = "Engines, notes and the occasional program."
email = "ada@example.com"

[[site.social_links]]
text = "GitHub"
href = "https://github.com/ada"
icon = "i-simple-icons-github"
header = "i-ri-github-line"

[[site.social_links]]
text = "LinkedIn"
href = "https://www.linkedin.com/in/ada/"
icon = "i-simple-icons-linkedin"

[header.logo]
src = "/favicon.svg"
alt = "Logo Image"

[[header.nav_links]]
text = "Blog"
href = "/blog"

[[header.nav_links]]
text = "Projects"
href = "/projects"

[[page.blog_links]]
text = "Blog"
href = "/blog"

[[footer.nav_links]]
text = "GitHub Repository"
href = "https://github.com/ada/portfolio"

[paths]
public_dir = "static"
"#
        .to_string()
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("folio.toml");
        let mut file = std::fs::File::create(&config_path).expect("create file");
        file.write_all(create_test_config().as_bytes())
            .expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config.site.author, "Ada Lovelace");
        assert_eq!(config.site.title, "Portfolio of Ada");
        assert_eq!(config.site.social_links.len(), 2);
        assert_eq!(
            config.site.social_links[0].header.as_deref(),
            Some("i-ri-github-line")
        );
        assert!(config.site.social_links[1].header.is_none());
        assert_eq!(
            config.header.logo,
            Some(ImageRef {
                src: "/favicon.svg".to_string(),
                alt: "Logo Image".to_string(),
            })
        );
        assert_eq!(config.header.nav_links.len(), 2);
        assert_eq!(config.page.blog_links[0].href, "/blog");
        assert_eq!(config.footer.nav_links.len(), 1);
        assert_eq!(config.paths.public_dir, "static");
        assert_eq!(config.paths.content_dir, "src/content");
    }

    #[test]
    fn test_config_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("folio.toml");
        let minimal_config = r#"
[site]
author = "Ada"
title = "Minimal Site"
"#;
        std::fs::write(&config_path, minimal_config).expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert!(config.site.social_links.is_empty());
        assert!(config.header.logo.is_none());
        assert!(config.header.nav_links.is_empty());
        assert_eq!(config.paths.public_dir, "public");
        assert_eq!(config.paths.content_dir, "src/content");
    }

    #[test]
    fn test_all_nav_links_order() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("folio.toml");
        std::fs::write(&config_path, create_test_config()).expect("write");

        let config = Config::load(&config_path).expect("load config");
        let sections: Vec<_> = config.all_nav_links().map(|(s, l)| (s, l.text.as_str())).collect();

        assert_eq!(
            sections,
            vec![
                ("header.nav_links", "Blog"),
                ("header.nav_links", "Projects"),
                ("page.blog_links", "Blog"),
                ("footer.nav_links", "GitHub Repository"),
            ]
        );
    }

    #[test]
    fn test_resolved_dirs() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("folio.toml");
        std::fs::write(&config_path, create_test_config()).expect("write");

        let config = Config::load(&config_path).expect("load config");
        let root = Path::new("/srv/site");

        assert_eq!(config.public_dir(root), PathBuf::from("/srv/site/static"));
        assert_eq!(
            config.content_dir(root),
            PathBuf::from("/srv/site/src/content")
        );
    }

    #[test]
    fn test_config_validation_empty_title() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("folio.toml");
        let config_content = r#"
[site]
author = "Ada"
title = ""
"#;
        std::fs::write(&config_path, config_content).expect("write");

        let result = Config::load(&config_path);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("title cannot be empty")
        );
    }

    #[test]
    fn test_config_validation_empty_href() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("folio.toml");
        let config_content = r#"
[site]
author = "Ada"
title = "Site"

[[footer.nav_links]]
text = "Broken"
href = ""
"#;
        std::fs::write(&config_path, config_content).expect("write");

        let err = Config::load(&config_path).unwrap_err().to_string();
        assert!(err.contains("footer.nav_links"));
        assert!(err.contains("Broken"));
    }

    #[test]
    fn test_config_missing_author() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("folio.toml");
        std::fs::write(&config_path, "[site]\ntitle = \"Site\"\n").expect("write");

        let err = Config::load(&config_path).unwrap_err().to_string();
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_config_not_found() {
        let result = Config::load(Path::new("/nonexistent/folio.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_load_with_env_overrides_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("folio.toml");
        std::fs::write(&config_path, create_test_config()).expect("write");

        // Only this test sets FOLIO__ variables; tests run in parallel.
        unsafe { std::env::set_var("FOLIO__SITE__TITLE", "Title From Env") };
        let result = Config::load_with_env(&config_path);
        unsafe { std::env::remove_var("FOLIO__SITE__TITLE") };

        let config = result.expect("load config");
        assert_eq!(config.site.title, "Title From Env");
        assert_eq!(config.site.author, "Ada Lovelace");
        assert_eq!(config.header.nav_links.len(), 2);
    }

    #[test]
    fn test_malformed_config_keeps_parse_source() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("folio.toml");
        std::fs::write(&config_path, "[site\nauthor = ").expect("write");

        let err = Config::load(&config_path).unwrap_err();
        assert!(matches!(err, CoreError::Config { source: Some(_), .. }), "{err:?}");
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
