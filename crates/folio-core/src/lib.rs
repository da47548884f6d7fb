//! Folio Core Library
//!
//! Site configuration, content schemas and the image folder lister behind a
//! portfolio/blog site.

pub mod carousel;
pub mod config;
pub mod error;
pub mod frontmatter;
pub mod images;
pub mod schema;

pub use carousel::Carousel;
pub use config::Config;
pub use error::{CoreError, Result};
pub use images::{ImageDiagnostics, ImageLister, TracingDiagnostics, is_image_file};
pub use schema::{
    BlogFrontmatter, Collection, ContentSchema, PageFrontmatter, ProjectFrontmatter, PublishDate,
};
