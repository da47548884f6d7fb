//! Folio CLI
//!
//! Companion tool for a portfolio/blog site: lists carousel image folders
//! and validates site configuration and content frontmatter.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;
use folio_core::Collection;

/// Command-line interface for Folio.
#[derive(Parser, Debug)]
#[command(
    name = "folio",
    version,
    about = "Portfolio site helper: image folders and content checks"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "folio.toml")]
    config: std::path::PathBuf,

    /// Project root that configured paths are resolved against
    #[arg(short, long, default_value = ".")]
    root: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// List the image files of a folder under the public directory
    Images {
        /// Folder relative to the public directory (e.g., /projects/demo)
        folder: String,
        /// Public directory, overriding the configuration
        #[arg(long)]
        public: Option<std::path::PathBuf>,
        /// Print a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Validate configuration and content
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
    /// List collected content entries
    List {
        /// Only list one collection (pages, blog, projects)
        #[arg(short = 'C', long)]
        collection: Option<Collection>,
        /// Include draft entries
        #[arg(long)]
        drafts: bool,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    folio::init_tracing(cli.verbose);

    match cli.command {
        Commands::Images {
            folder,
            public,
            json,
        } => {
            folio::cmd::images::run(&cli.config, &cli.root, public.as_deref(), &folder, json)?;
        }
        Commands::Check { strict } => {
            folio::cmd::check::run(&cli.config, &cli.root, strict)?;
        }
        Commands::List {
            collection,
            drafts,
            json,
        } => {
            folio::cmd::list::run(&cli.config, &cli.root, collection, drafts, json)?;
        }
    }

    Ok(())
}
