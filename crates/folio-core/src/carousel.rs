//! Image carousel settings and resolution to display URLs.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    images::{ImageDiagnostics, ImageLister},
};

/// Default carousel height (CSS length).
pub const DEFAULT_HEIGHT: &str = "400px";

/// Default delay between slides in milliseconds.
pub const DEFAULT_AUTOPLAY_INTERVAL: u64 = 5000;

/// Carousel declared in a page or project frontmatter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Carousel {
    /// Folder under the public assets root, e.g. `/projects/demo`.
    pub folder: String,

    /// Explicit image list; when absent the folder is listed.
    #[serde(default)]
    pub images: Option<Vec<String>>,

    /// CSS height of the carousel.
    #[serde(default)]
    pub height: Option<String>,

    #[serde(default)]
    pub autoplay: Option<bool>,

    /// Delay between slides in milliseconds.
    #[serde(default, rename = "autoplayInterval", alias = "autoplay_interval")]
    pub autoplay_interval: Option<u64>,
}

impl Carousel {
    /// Carousel over `folder` with every other setting left to defaults.
    pub fn from_folder(folder: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            images: None,
            height: None,
            autoplay: None,
            autoplay_interval: None,
        }
    }

    pub fn height(&self) -> &str {
        self.height.as_deref().unwrap_or(DEFAULT_HEIGHT)
    }

    pub fn autoplay(&self) -> bool {
        self.autoplay.unwrap_or(false)
    }

    pub fn autoplay_interval(&self) -> u64 {
        self.autoplay_interval.unwrap_or(DEFAULT_AUTOPLAY_INTERVAL)
    }

    /// Validate the carousel settings for the file at `path`.
    pub fn validate(&self, path: &Path) -> Result<()> {
        if self.folder.trim().is_empty() {
            return Err(CoreError::frontmatter(path, "carousel.folder cannot be empty"));
        }
        if self.autoplay_interval == Some(0) {
            return Err(CoreError::frontmatter(
                path,
                "carousel.autoplayInterval must be positive",
            ));
        }
        let blank_entry = self
            .images
            .as_ref()
            .is_some_and(|images| images.iter().any(|i| i.trim().is_empty()));
        if blank_entry {
            return Err(CoreError::frontmatter(
                path,
                "carousel.images cannot contain empty entries",
            ));
        }
        Ok(())
    }

    /// Resolve the carousel to display URLs.
    ///
    /// An explicit `images` list wins, even when empty; otherwise the folder
    /// is listed through `lister`. Filenames are joined to the folder.
    pub fn resolve<D: ImageDiagnostics>(&self, lister: &ImageLister<D>) -> Vec<String> {
        match &self.images {
            Some(images) => images.iter().map(|i| image_url(&self.folder, i)).collect(),
            None => lister
                .list_images(&self.folder)
                .iter()
                .map(|name| image_url(&self.folder, name))
                .collect(),
        }
    }
}

/// Build the display URL of `name` inside `folder`.
///
/// Entries that are already absolute (`/...` or `scheme://...`) are kept.
pub fn image_url(folder: &str, name: &str) -> String {
    if name.starts_with('/') || name.contains("://") {
        return name.to_string();
    }

    let folder = folder.trim_matches('/');
    if folder.is_empty() {
        format!("/{name}")
    } else {
        format!("/{folder}/{name}")
    }
}
