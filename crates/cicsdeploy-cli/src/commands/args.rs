//! Deployment options shared by `deploy` and `check`.

use cicsdeploy_core::{ArtifactRef, ProfileId, ProjectArtifacts, ServerOverrides};
use cicsdeploy_deployer::DeployOptions;
use clap::Args;
use std::fmt;
use std::path::PathBuf;

#[derive(Args)]
pub struct DeployArgs {
    /// Bundle definition that installs the bundle, must already exist in the CSD
    #[arg(long, env = "CICSDEPLOY_BUNDDEF")]
    pub bunddef: String,

    /// CSD group containing the bundle definition
    #[arg(long, env = "CICSDEPLOY_CSDGROUP")]
    pub csdgroup: String,

    /// Server profile from the settings file
    #[arg(long, env = "CICSDEPLOY_SERVER_ID")]
    pub server_id: Option<String>,

    /// Endpoint URL, overrides the server profile
    #[arg(long, env = "CICSDEPLOY_URL")]
    pub url: Option<String>,

    /// CICSplex to install into, overrides the server profile
    #[arg(long, env = "CICSDEPLOY_CICSPLEX")]
    pub cicsplex: Option<String>,

    /// Region to install into, overrides the server profile
    #[arg(long, env = "CICSDEPLOY_REGION")]
    pub region: Option<String>,

    /// Username, overrides the server profile
    #[arg(long, env = "CICSDEPLOY_USERNAME")]
    pub username: Option<String>,

    /// Password, overrides the server profile
    #[arg(long, env = "CICSDEPLOY_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Bundle archive to deploy, takes precedence over --classifier
    #[arg(long, env = "CICSDEPLOY_BUNDLE")]
    pub bundle: Option<PathBuf>,

    /// Classifier of the attached artifact to deploy
    #[arg(long, env = "CICSDEPLOY_CLASSIFIER")]
    pub classifier: Option<String>,

    /// Primary artifact of the build
    #[arg(long, env = "CICSDEPLOY_ARTIFACT")]
    pub artifact: Option<PathBuf>,

    /// Attached artifact of the build (repeatable, or comma separated)
    #[arg(
        long = "attach",
        env = "CICSDEPLOY_ATTACH",
        value_name = "CLASSIFIER=PATH",
        value_delimiter = ',',
        value_parser = parse_attached
    )]
    pub attached: Vec<ArtifactRef>,
}

impl fmt::Debug for DeployArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeployArgs")
            .field("bunddef", &self.bunddef)
            .field("csdgroup", &self.csdgroup)
            .field("server_id", &self.server_id)
            .field("url", &self.url)
            .field("cicsplex", &self.cicsplex)
            .field("region", &self.region)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("bundle", &self.bundle)
            .field("classifier", &self.classifier)
            .field("artifact", &self.artifact)
            .field("attached", &self.attached)
            .finish()
    }
}

impl DeployArgs {
    pub fn options(&self) -> DeployOptions {
        DeployOptions {
            bunddef: self.bunddef.clone(),
            csdgroup: self.csdgroup.clone(),
            server_id: self.server_id.as_deref().map(ProfileId::from),
            overrides: ServerOverrides {
                url: self.url.clone(),
                cicsplex: self.cicsplex.clone(),
                region: self.region.clone(),
                username: self.username.clone(),
                password: self.password.clone(),
            },
            bundle: self.bundle.clone(),
            classifier: self.classifier.clone(),
        }
    }

    pub fn artifacts(&self) -> ProjectArtifacts {
        ProjectArtifacts {
            primary: ArtifactRef {
                file: self.artifact.clone(),
                classifier: None,
            },
            attached: self.attached.clone(),
        }
    }
}

fn parse_attached(value: &str) -> Result<ArtifactRef, String> {
    let (classifier, path) = value
        .split_once('=')
        .ok_or_else(|| format!("expected CLASSIFIER=PATH, got '{}'", value))?;
    if classifier.is_empty() {
        return Err("classifier must not be empty".to_string());
    }
    if path.is_empty() {
        return Err(format!("no path given for classifier '{}'", classifier));
    }
    Ok(ArtifactRef::attached(classifier, path))
}
