//! Content collection and organization.
//!
//! Walks each collection directory, parses frontmatter against the
//! collection schema and resolves carousels to image URLs.

use std::{
    cmp::Ordering,
    fs,
    path::{Path, PathBuf},
};

use folio_core::{
    BlogFrontmatter, Collection, Config, ContentSchema, CoreError, ImageLister, PageFrontmatter,
    ProjectFrontmatter, frontmatter::parse_frontmatter,
};
use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Content collection errors.
#[derive(Debug, Error)]
pub enum CollectorError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory walk error.
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Frontmatter or schema error.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Path that cannot be turned into a slug.
    #[error("invalid content path: {0}")]
    InvalidPath(PathBuf),
}

/// Result type for collector operations.
pub type Result<T> = std::result::Result<T, CollectorError>;

/// File extensions treated as content.
const CONTENT_EXTENSIONS: &[&str] = &["md", "markdown", "mdx"];

/// A parsed content entry.
#[derive(Debug, Clone, Serialize)]
pub struct Entry<T> {
    /// Slug relative to the collection, e.g. `hello` or `guides/setup`.
    pub slug: String,

    /// Source file path.
    pub path: PathBuf,

    /// Typed frontmatter.
    pub data: T,

    /// Raw body without the frontmatter block.
    #[serde(skip)]
    pub body: String,

    /// Display URLs of the carousel images, empty without a carousel.
    pub images: Vec<String>,
}

/// A file that could not be collected.
#[derive(Debug, Clone, Serialize)]
pub struct CollectIssue {
    pub collection: Collection,
    pub path: PathBuf,
    pub message: String,
}

/// Entries of one collection plus the files that failed.
#[derive(Debug)]
pub struct CollectionContent<T> {
    pub entries: Vec<Entry<T>>,
    pub issues: Vec<CollectIssue>,
    /// Number of drafts left out.
    pub skipped_drafts: usize,
}

/// Collected site content.
#[derive(Debug, Default)]
pub struct SiteContent {
    pub pages: Vec<Entry<PageFrontmatter>>,
    pub blog: Vec<Entry<BlogFrontmatter>>,
    pub projects: Vec<Entry<ProjectFrontmatter>>,
    pub issues: Vec<CollectIssue>,
}

impl SiteContent {
    /// Total number of collected entries.
    pub fn len(&self) -> usize {
        self.pages.len() + self.blog.len() + self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Content collector that walks collection directories and parses files.
#[derive(Debug)]
pub struct ContentCollector {
    content_dir: PathBuf,
    lister: ImageLister,
    include_drafts: bool,
}

impl ContentCollector {
    /// Create a collector for the project at `root`.
    #[must_use]
    pub fn new(config: &Config, root: &Path) -> Self {
        Self {
            content_dir: config.content_dir(root),
            lister: ImageLister::new(config.public_dir(root)),
            include_drafts: false,
        }
    }

    /// Include entries marked as drafts.
    #[must_use]
    pub fn with_drafts(mut self, include_drafts: bool) -> Self {
        self.include_drafts = include_drafts;
        self
    }

    /// Collect all three collections.
    pub fn collect(&self) -> Result<SiteContent> {
        info!(dir = %self.content_dir.display(), "collecting content");

        let pages = self.collect_collection::<PageFrontmatter>()?;
        let blog = self.collect_collection::<BlogFrontmatter>()?;
        let projects = self.collect_collection::<ProjectFrontmatter>()?;

        let mut issues = pages.issues;
        issues.extend(blog.issues);
        issues.extend(projects.issues);

        let content = SiteContent {
            pages: pages.entries,
            blog: blog.entries,
            projects: projects.entries,
            issues,
        };

        info!(
            pages = content.pages.len(),
            posts = content.blog.len(),
            projects = content.projects.len(),
            issues = content.issues.len(),
            "content collection complete"
        );

        Ok(content)
    }

    /// Collect a single collection, parsing files in parallel.
    pub fn collect_collection<T: ContentSchema>(&self) -> Result<CollectionContent<T>> {
        let collection = T::COLLECTION;
        let dir = self.content_dir.join(collection.dir_name());
        let files = find_content_files(&dir)?;
        debug!(%collection, count = files.len(), "found content files");

        let parsed: Vec<_> = files
            .par_iter()
            .map(|path| (path, self.parse_file::<T>(&dir, path)))
            .collect();

        let mut content = CollectionContent {
            entries: Vec::with_capacity(parsed.len()),
            issues: Vec::new(),
            skipped_drafts: 0,
        };

        for (path, result) in parsed {
            match result {
                Ok(entry) if entry.data.draft() && !self.include_drafts => {
                    debug!(slug = %entry.slug, "skipping draft");
                    content.skipped_drafts += 1;
                }
                Ok(entry) => content.entries.push(entry),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to parse file");
                    content.issues.push(CollectIssue {
                        collection,
                        path: path.clone(),
                        message: e.to_string(),
                    });
                }
            }
        }

        sort_entries(&mut content.entries);
        Ok(content)
    }

    /// Parse a single content file into an entry.
    fn parse_file<T: ContentSchema>(&self, collection_dir: &Path, path: &Path) -> Result<Entry<T>> {
        debug!(path = %path.display(), "parsing file");

        let source = fs::read_to_string(path)?;
        let relative = path.strip_prefix(collection_dir).unwrap_or(path);
        let slug =
            slug_for(relative).ok_or_else(|| CollectorError::InvalidPath(path.to_path_buf()))?;

        let (data, body) = parse_frontmatter::<T>(&source, path)?;
        data.validate(path)?;

        let images = data
            .carousel()
            .map(|carousel| carousel.resolve(&self.lister))
            .unwrap_or_default();

        Ok(Entry {
            slug,
            path: path.to_path_buf(),
            data,
            body,
            images,
        })
    }
}

/// Find all content files under `dir`, skipping hidden entries.
fn find_content_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        debug!(dir = %dir.display(), "collection directory does not exist, skipping");
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'));

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let is_content = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| CONTENT_EXTENSIONS.contains(&ext.to_lowercase().as_str()));
        if is_content {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Derive a slug from a path relative to its collection directory.
///
/// - `hello.md` → `hello`
/// - `guides/setup.md` → `guides/setup`
/// - `guides/index.md` → `guides`
pub fn slug_for(relative: &Path) -> Option<String> {
    let stem = relative.file_stem()?.to_str()?;
    let parent = relative.parent().unwrap_or(Path::new(""));
    let parent = parent
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()?
        .join("/");

    let slug = if stem == "index" {
        parent
    } else if parent.is_empty() {
        stem.to_string()
    } else {
        format!("{parent}/{stem}")
    };

    Some(slug.trim_matches('/').to_string())
}

/// Dated entries newest first (ties by title), undated ones after, by slug.
fn sort_entries<T: ContentSchema>(entries: &mut [Entry<T>]) {
    entries.sort_by(|a, b| match (b.data.date(), a.data.date()) {
        (Some(b_date), Some(a_date)) => b_date
            .cmp(&a_date)
            .then_with(|| a.data.title().cmp(b.data.title())),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => a.slug.cmp(&b.slug),
    });
}
