//! Images command - list the images of a carousel folder

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use folio_core::{Config, ImageLister};

/// Resolve the public assets root, preferring an explicit override.
pub fn public_dir(config_path: &Path, root: &Path, public: Option<&Path>) -> Result<PathBuf> {
    if let Some(public) = public {
        return Ok(root.join(public));
    }
    let config = Config::load_with_env(config_path).wrap_err("Failed to load configuration")?;
    Ok(config.public_dir(root))
}

/// Run the images command.
///
/// Prints one filename per line, or a JSON array with `json`. An absent or
/// unreadable folder prints nothing; the reason goes to the log.
pub fn run(
    config_path: &Path,
    root: &Path,
    public: Option<&Path>,
    folder: &str,
    json: bool,
) -> Result<()> {
    let lister = ImageLister::new(public_dir(config_path, root, public)?);
    tracing::info!(public_dir = %lister.base_dir().display(), folder, "Listing images");

    let images = lister.list_images(folder);

    if json {
        println!("{}", serde_json::to_string_pretty(&images)?);
    } else {
        for image in &images {
            println!("{image}");
        }
    }

    Ok(())
}
