//! Frontmatter schemas for the `pages`, `blog` and `projects` collections.
//!
//! Unknown keys are ignored. Validation beyond what serde enforces lives in
//! [`ContentSchema::validate`].

use std::{fmt, path::Path, str::FromStr};

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::DeserializeOwned};

use crate::{
    carousel::Carousel,
    config::ImageRef,
    error::{CoreError, Result},
};

/// A content collection and the directory it lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Pages,
    Blog,
    Projects,
}

impl Collection {
    pub const ALL: [Collection; 3] = [Self::Pages, Self::Blog, Self::Projects];

    /// Directory name under the content root.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Pages => "pages",
            Self::Blog => "blog",
            Self::Projects => "projects",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.dir_name())
    }
}

impl FromStr for Collection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pages" | "page" => Ok(Self::Pages),
            "blog" | "posts" => Ok(Self::Blog),
            "projects" | "project" => Ok(Self::Projects),
            other => Err(CoreError::UnknownCollection(other.to_string())),
        }
    }
}

/// Publication date of a post or project.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS`
/// and TOML date literals. Only the calendar date is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PublishDate(NaiveDate);

impl PublishDate {
    /// Parse a date string in any of the accepted forms.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(input).ok().map(|dt| dt.date_naive()))
            .or_else(|| {
                NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S")
                    .ok()
                    .map(|dt| dt.date())
            })
            .map(Self)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// en-US short form, e.g. `Jan 5, 2024`.
    pub fn display(&self) -> String {
        self.0.format("%b %-d, %Y").to_string()
    }
}

impl Serialize for PublishDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PublishDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawDate {
            Text(String),
            Toml(toml::value::Datetime),
        }

        let raw = match RawDate::deserialize(deserializer)? {
            RawDate::Text(text) => text,
            RawDate::Toml(datetime) => datetime.to_string(),
        };

        PublishDate::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {raw}")))
    }
}

/// Behaviour shared by all collection schemas.
pub trait ContentSchema: DeserializeOwned + Send {
    /// The collection this schema describes.
    const COLLECTION: Collection;

    fn title(&self) -> &str;

    fn draft(&self) -> bool {
        false
    }

    fn date(&self) -> Option<PublishDate> {
        None
    }

    fn carousel(&self) -> Option<&Carousel> {
        None
    }

    /// Check constraints serde cannot express.
    fn validate(&self, path: &Path) -> Result<()>;
}

fn require(path: &Path, field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CoreError::frontmatter(path, format!("{field} is required")));
    }
    Ok(())
}

fn check_image(path: &Path, image: Option<&ImageRef>) -> Result<()> {
    if let Some(image) = image {
        require(path, "image.src", &image.src)?;
    }
    Ok(())
}

fn check_carousel(path: &Path, carousel: Option<&Carousel>) -> Result<()> {
    carousel.map_or(Ok(()), |carousel| carousel.validate(path))
}

/// Frontmatter of a standalone page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageFrontmatter {
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub image: Option<ImageRef>,

    #[serde(default)]
    pub carousel: Option<Carousel>,
}

impl ContentSchema for PageFrontmatter {
    const COLLECTION: Collection = Collection::Pages;

    fn title(&self) -> &str {
        &self.title
    }

    fn carousel(&self) -> Option<&Carousel> {
        self.carousel.as_ref()
    }

    fn validate(&self, path: &Path) -> Result<()> {
        require(path, "title", &self.title)?;
        check_image(path, self.image.as_ref())?;
        check_carousel(path, self.carousel.as_ref())
    }
}

fn default_lang() -> String {
    "en-US".to_string()
}

/// Frontmatter of a blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogFrontmatter {
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Reading or watching time, free text (e.g. "5 min").
    #[serde(default)]
    pub duration: Option<String>,

    #[serde(default)]
    pub image: Option<ImageRef>,

    pub date: PublishDate,

    #[serde(default)]
    pub draft: bool,

    #[serde(default = "default_lang")]
    pub lang: String,

    #[serde(default)]
    pub tag: Option<String>,

    /// External URL the post redirects to.
    #[serde(default)]
    pub redirect: Option<String>,

    /// Whether the post is a video post.
    #[serde(default)]
    pub video: bool,
}

impl ContentSchema for BlogFrontmatter {
    const COLLECTION: Collection = Collection::Blog;

    fn title(&self) -> &str {
        &self.title
    }

    fn draft(&self) -> bool {
        self.draft
    }

    fn date(&self) -> Option<PublishDate> {
        Some(self.date)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        require(path, "title", &self.title)?;
        require(path, "lang", &self.lang)?;
        check_image(path, self.image.as_ref())?;
        if let Some(redirect) = &self.redirect {
            require(path, "redirect", redirect)?;
        }
        Ok(())
    }
}

/// Frontmatter of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFrontmatter {
    pub title: String,

    pub description: String,

    pub date: PublishDate,

    /// Project homepage.
    #[serde(default)]
    pub href: Option<String>,

    #[serde(default)]
    pub github: Option<String>,

    #[serde(default)]
    pub demo: Option<String>,

    #[serde(default)]
    pub carousel: Option<Carousel>,

    #[serde(default)]
    pub image: Option<ImageRef>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub draft: bool,
}

impl ContentSchema for ProjectFrontmatter {
    const COLLECTION: Collection = Collection::Projects;

    fn title(&self) -> &str {
        &self.title
    }

    fn draft(&self) -> bool {
        self.draft
    }

    fn date(&self) -> Option<PublishDate> {
        Some(self.date)
    }

    fn carousel(&self) -> Option<&Carousel> {
        self.carousel.as_ref()
    }

    fn validate(&self, path: &Path) -> Result<()> {
        require(path, "title", &self.title)?;
        require(path, "description", &self.description)?;
        check_image(path, self.image.as_ref())?;
        check_carousel(path, self.carousel.as_ref())
    }
}
