//! Deployment errors.

use cicsdeploy_config::ConfigError;
use cicsdeploy_core::{ArtifactError, DeploymentError};
use thiserror::Error;

/// The first failure of a deployment, whichever step raised it.
#[derive(Debug, Error)]
pub enum DeployError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    #[error(transparent)]
    Deployment(#[from] DeploymentError),
}
