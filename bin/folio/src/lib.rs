//! Folio CLI Library
//!
//! Functionality behind the `folio` binary, exposed as a library so the
//! commands can be driven from tests.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (images, check, list)
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use folio::cmd;
//!
//! // Print the images of a carousel folder
//! let (config, root) = (Path::new("folio.toml"), Path::new("."));
//! cmd::images::run(config, root, None, "/projects/demo", false).unwrap();
//! ```

pub mod cmd;

pub use folio_content::{ContentCollector, SiteContent};
pub use folio_core::{Config, ImageLister};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
