//! Image folder listing for carousels.
//!
//! Content front-matter names a folder under the public assets root; the
//! lister turns it into the sorted list of image filenames directly inside
//! that folder. Every failure mode collapses into an empty list, reported
//! through an [`ImageDiagnostics`] sink instead of an error value.

use std::{
    fs, io,
    path::{Component, Path, PathBuf},
};

use tracing::{error, warn};

/// Recognized image extensions, compared against the lower-cased extension.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "svg", "avif"];

/// Check whether a filename carries an allow-listed image extension.
pub fn is_image_file(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

/// Sink for the diagnostics produced while listing a folder.
pub trait ImageDiagnostics: Send + Sync {
    /// The resolved folder does not exist.
    fn folder_not_found(&self, folder: &str, path: &Path);

    /// The folder path tries to leave the assets root and was not resolved.
    fn folder_rejected(&self, folder: &str);

    /// Checking or reading the folder failed.
    fn read_failed(&self, folder: &str, path: &Path, err: &io::Error);
}

impl<D: ImageDiagnostics + ?Sized> ImageDiagnostics for &D {
    fn folder_not_found(&self, folder: &str, path: &Path) {
        (**self).folder_not_found(folder, path);
    }

    fn folder_rejected(&self, folder: &str) {
        (**self).folder_rejected(folder);
    }

    fn read_failed(&self, folder: &str, path: &Path, err: &io::Error) {
        (**self).read_failed(folder, path, err);
    }
}

/// Default sink: emits `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl ImageDiagnostics for TracingDiagnostics {
    fn folder_not_found(&self, folder: &str, path: &Path) {
        warn!(folder, path = %path.display(), "image folder not found");
    }

    fn folder_rejected(&self, folder: &str) {
        warn!(folder, "image folder escapes the assets root, ignoring");
    }

    fn read_failed(&self, folder: &str, path: &Path, err: &io::Error) {
        error!(folder, path = %path.display(), error = %err, "failed to read image folder");
    }
}

/// Lists image files in folders under a public assets root.
#[derive(Debug, Clone)]
pub struct ImageLister<D = TracingDiagnostics> {
    base_dir: PathBuf,
    diagnostics: D,
}

impl ImageLister {
    /// Create a lister rooted at `base_dir` that reports through `tracing`.
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self::with_diagnostics(base_dir, TracingDiagnostics)
    }
}

impl<D: ImageDiagnostics> ImageLister<D> {
    /// Create a lister with a custom diagnostics sink.
    #[must_use]
    pub fn with_diagnostics(base_dir: impl Into<PathBuf>, diagnostics: D) -> Self {
        Self {
            base_dir: base_dir.into(),
            diagnostics,
        }
    }

    /// The public assets root folders are resolved against.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Resolve a folder path against the assets root.
    ///
    /// One leading separator is stripped. Returns `None` when what remains
    /// contains `..`, a root or a drive prefix, since joining those would
    /// point outside the root.
    #[must_use]
    pub fn resolve(&self, folder_path: &str) -> Option<PathBuf> {
        let relative = Path::new(strip_leading_separator(folder_path));
        let contained = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));

        contained.then(|| self.base_dir.join(relative))
    }

    /// List the image filenames directly inside `folder_path`, sorted.
    ///
    /// Never fails: a missing, rejected or unreadable folder yields an empty
    /// list and a diagnostic.
    #[must_use]
    pub fn list_images(&self, folder_path: &str) -> Vec<String> {
        let Some(target) = self.resolve(folder_path) else {
            self.diagnostics.folder_rejected(folder_path);
            return Vec::new();
        };

        match read_images(&target) {
            Ok(Some(images)) => images,
            Ok(None) => {
                self.diagnostics.folder_not_found(folder_path, &target);
                Vec::new()
            }
            Err(err) => {
                self.diagnostics.read_failed(folder_path, &target, &err);
                Vec::new()
            }
        }
    }
}

fn strip_leading_separator(folder_path: &str) -> &str {
    let rest = folder_path.strip_prefix('/');
    let rest = if cfg!(windows) {
        rest.or_else(|| folder_path.strip_prefix('\\'))
    } else {
        rest
    };
    rest.unwrap_or(folder_path)
}

/// `Ok(None)` when the target does not exist.
fn read_images(target: &Path) -> io::Result<Option<Vec<String>>> {
    if !target.try_exists()? {
        return Ok(None);
    }

    let mut images = Vec::new();
    for entry in fs::read_dir(target)? {
        let entry = entry?;
        // Non-UTF-8 names cannot be turned into display URLs.
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if is_image_file(&name) {
            images.push(name);
        }
    }

    images.sort();
    Ok(Some(images))
}
