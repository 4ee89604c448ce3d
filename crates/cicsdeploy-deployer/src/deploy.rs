//! The deployment sequence.
//!
//! Resolve the server configuration, validate it, pick the bundle file, then
//! dispatch. The first failure stops the sequence and nothing after it runs.

use crate::{DeployDispatcher, DeployError};
use cicsdeploy_config::{resolve_server_config, validate_server_config};
use cicsdeploy_core::{
    BundleDeployer, ProfileDecrypter, ProfileId, ProfileStore, ProjectArtifacts, ServerConfig,
    ServerOverrides,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Inputs for one deployment, fixed before the sequence starts.
#[derive(Debug, Clone, Default)]
pub struct DeployOptions {
    /// Bundle definition that installs the bundle. Must already exist in the CSD.
    pub bunddef: String,
    /// CSD group containing the bundle definition.
    pub csdgroup: String,
    /// Server profile to start from.
    pub server_id: Option<ProfileId>,
    pub overrides: ServerOverrides,
    /// Explicit bundle file. Takes precedence over `classifier`.
    pub bundle: Option<PathBuf>,
    /// Classifier of the attached artifact to deploy.
    pub classifier: Option<String>,
}

/// A validated configuration and the bundle it will deploy.
#[derive(Debug, Clone, Serialize)]
pub struct DeploymentPlan {
    pub server: ServerConfig,
    pub bundle: PathBuf,
    pub bunddef: String,
    pub csdgroup: String,
}

/// Run every step short of dispatching.
pub fn plan_deployment<S, C>(
    options: &DeployOptions,
    store: &S,
    decrypter: &C,
    artifacts: &ProjectArtifacts,
) -> Result<DeploymentPlan, DeployError>
where
    S: ProfileStore + ?Sized,
    C: ProfileDecrypter + ?Sized,
{
    let server = resolve_server_config(
        options.server_id.as_ref(),
        &options.overrides,
        store,
        decrypter,
    )?;
    validate_server_config(&server)?;

    if let (Some(bundle), Some(classifier)) = (&options.bundle, &options.classifier) {
        warn!(
            bundle = %bundle.display(),
            classifier = %classifier,
            "Explicit bundle given, ignoring classifier"
        );
    }

    let source = artifact_source(options);
    let bundle = artifacts.select(options.bundle.as_deref(), options.classifier.as_deref())?;
    debug!(bundle = %bundle.display(), source, "Selected bundle");

    Ok(DeploymentPlan {
        server,
        bundle,
        bunddef: options.bunddef.clone(),
        csdgroup: options.csdgroup.clone(),
    })
}

/// Where the bundle file comes from, in selection order.
fn artifact_source(options: &DeployOptions) -> &'static str {
    match (&options.bundle, &options.classifier) {
        (Some(_), _) => "explicit",
        (None, Some(_)) => "classifier",
        (None, None) => "primary",
    }
}

/// Plan and dispatch a deployment.
pub async fn deploy_bundle<S, C, D>(
    options: &DeployOptions,
    store: &S,
    decrypter: &C,
    artifacts: &ProjectArtifacts,
    dispatcher: &DeployDispatcher<D>,
) -> Result<DeploymentPlan, DeployError>
where
    S: ProfileStore + ?Sized,
    C: ProfileDecrypter + ?Sized,
    D: BundleDeployer,
{
    let plan = plan_deployment(options, store, decrypter, artifacts)?;

    dispatcher
        .dispatch(&plan.server, &plan.bundle, &plan.bunddef, &plan.csdgroup)
        .await?;

    Ok(plan)
}
