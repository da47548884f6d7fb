//! Check command - validate configuration and content

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use folio_content::{ContentCollector, Entry, SiteContent};
use folio_core::{Config, ContentSchema};

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates configuration and all content files.
pub fn run(config_path: &Path, root: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, ?root, strict, "Checking configuration and content");

    let result = validate(config_path, root);

    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Collect every error and warning for the project at `root`.
pub fn validate(config_path: &Path, root: &Path) -> ValidationResult {
    let mut result = ValidationResult::default();

    println!("Checking configuration...");
    let config = match Config::load_with_env(config_path) {
        Ok(c) => {
            println!("  ✓ Configuration valid");
            c
        }
        Err(e) => {
            result.add_error(format!("Configuration error: {e}"));
            println!("  ✗ Configuration invalid: {e}");
            return result;
        }
    };

    println!("\nChecking directories...");
    check_directories(&config, root, &mut result);

    println!("\nChecking content files...");
    match ContentCollector::new(&config, root).with_drafts(true).collect() {
        Ok(content) => check_content(&content, &mut result),
        Err(e) => result.add_error(format!("Content collection failed: {e}")),
    }

    result
}

/// Check that the public and content directories exist.
fn check_directories(config: &Config, root: &Path, result: &mut ValidationResult) {
    let dirs = [
        ("paths.public_dir", config.public_dir(root)),
        ("paths.content_dir", config.content_dir(root)),
    ];

    for (key, path) in dirs {
        if path.is_dir() {
            println!("  ✓ {} exists", path.display());
        } else if path.exists() {
            result.add_error(format!("{key} is not a directory: {}", path.display()));
            println!("  ✗ {} is not a directory", path.display());
        } else {
            result.add_warning(format!("{key} does not exist: {}", path.display()));
            println!("  ⚠ {} missing", path.display());
        }
    }
}

/// Turn collection issues into errors and empty carousels into warnings.
fn check_content(content: &SiteContent, result: &mut ValidationResult) {
    for issue in &content.issues {
        result.add_error(format!("{}: {}", issue.path.display(), issue.message));
    }

    check_carousels(&content.pages, result);
    check_carousels(&content.projects, result);

    let failed = content.issues.len();
    let checked = content.len() + failed;
    if failed == 0 {
        println!("  ✓ All {checked} content files valid");
    } else {
        println!("  ✗ {failed}/{checked} content files have errors");
    }
}

fn check_carousels<T: ContentSchema>(entries: &[Entry<T>], result: &mut ValidationResult) {
    for entry in entries {
        let Some(carousel) = entry.data.carousel() else {
            continue;
        };
        if carousel.images.is_none() && entry.images.is_empty() {
            result.add_warning(format!(
                "{}: carousel folder {} has no images",
                entry.path.display(),
                carousel.folder
            ));
        }
    }
}
