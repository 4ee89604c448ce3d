//! CLI command implementations.

pub mod args;
pub mod deploy;
pub mod servers;

use anyhow::{Context, Result};
use cicsdeploy_config::Settings;
use std::path::Path;
use tracing::debug;

/// Load the settings file named on the command line, or the default one.
///
/// A missing default file means no profiles; a missing explicit file is an
/// error.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let settings = match path {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to load settings file: {}", path.display()))?,
        None => match dirs::home_dir() {
            Some(home) => {
                let path = home.join(".cicsdeploy").join("settings.kdl");
                Settings::load_or_default(&path)
                    .with_context(|| format!("Failed to load settings file: {}", path.display()))?
            }
            None => Settings::default(),
        },
    };

    debug!(servers = settings.servers().len(), "Loaded settings");
    Ok(settings)
}
