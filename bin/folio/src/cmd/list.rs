//! List command - print collected content entries

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use folio_content::{ContentCollector, Entry, SiteContent};
use folio_core::{Collection, Config, ContentSchema};
use serde_json::{Value, json};

/// One printed row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub collection: Collection,
    pub slug: String,
    pub title: String,
    pub date: Option<String>,
    pub images: Vec<String>,
}

/// Run the list command.
pub fn run(
    config_path: &Path,
    root: &Path,
    collection: Option<Collection>,
    drafts: bool,
    json: bool,
) -> Result<()> {
    let config = Config::load_with_env(config_path).wrap_err("Failed to load configuration")?;
    let content = ContentCollector::new(&config, root)
        .with_drafts(drafts)
        .collect()
        .wrap_err("Failed to collect content")?;

    for issue in &content.issues {
        tracing::warn!(path = %issue.path.display(), "{}", issue.message);
    }

    let rows = rows(&content, collection);

    if json {
        let values: Vec<Value> = rows.iter().map(to_json).collect();
        println!("{}", serde_json::to_string_pretty(&values)?);
    } else {
        for row in &rows {
            println!(
                "{:<9} {:<13} {:<30} {}",
                row.collection,
                row.date.as_deref().unwrap_or("-"),
                row.slug,
                row.title
            );
        }
    }

    Ok(())
}

/// Flatten collected content into rows, optionally for one collection.
pub fn rows(content: &SiteContent, only: Option<Collection>) -> Vec<Row> {
    let wanted = |c: Collection| only.is_none_or(|o| o == c);

    let mut rows = Vec::new();
    if wanted(Collection::Pages) {
        rows.extend(content.pages.iter().map(row));
    }
    if wanted(Collection::Blog) {
        rows.extend(content.blog.iter().map(row));
    }
    if wanted(Collection::Projects) {
        rows.extend(content.projects.iter().map(row));
    }
    rows
}

fn row<T: ContentSchema>(entry: &Entry<T>) -> Row {
    Row {
        collection: T::COLLECTION,
        slug: entry.slug.clone(),
        title: entry.data.title().to_string(),
        date: entry.data.date().map(|d| d.display()),
        images: entry.images.clone(),
    }
}

fn to_json(row: &Row) -> Value {
    json!({
        "collection": row.collection,
        "slug": row.slug,
        "title": row.title,
        "date": row.date,
        "images": row.images,
    })
}
