//! Folio Content Library
//!
//! Collects the `pages`, `blog` and `projects` collections of a site.
//!
//! # Modules
//!
//! - [`collector`] - Directory walking, frontmatter parsing and carousel resolution

pub mod collector;

pub use collector::{
    CollectIssue, CollectionContent, CollectorError, ContentCollector, Entry, SiteContent,
};
