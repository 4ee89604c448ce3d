//! Deployer trait and deployment request types.
//!
//! A deployer performs the single remote call that installs a bundle into a
//! CICS region through the bundle deployment API.

use async_trait::async_trait;
use std::fmt;
use std::path::PathBuf;
use url::Url;

/// Everything the deploy operation needs.
#[derive(Clone, PartialEq, Eq)]
pub struct DeployRequest {
    /// Base URL of the bundle deployment API.
    pub endpoint: Url,
    /// Bundle archive to upload.
    pub bundle: PathBuf,
    /// Name of the bundle definition, which must already exist in the CSD.
    pub bunddef: String,
    /// CSD group holding the bundle definition.
    pub csdgroup: String,
    pub cicsplex: String,
    pub region: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl fmt::Debug for DeployRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeployRequest")
            .field("endpoint", &self.endpoint.as_str())
            .field("bundle", &self.bundle)
            .field("bunddef", &self.bunddef)
            .field("csdgroup", &self.csdgroup)
            .field("cicsplex", &self.cicsplex)
            .field("region", &self.region)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Trait for deployers.
#[async_trait]
pub trait BundleDeployer: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Name of this deployer.
    fn name(&self) -> &'static str;

    /// Deploy a bundle. Called once per deployment, never retried.
    async fn deploy(&self, request: &DeployRequest) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_debug_redacts_password() {
        let request = DeployRequest {
            endpoint: Url::parse("https://cics.example.com/").unwrap(),
            bundle: PathBuf::from("target/app.zip"),
            bunddef: "MYBUNDLE".to_string(),
            csdgroup: "MYGROUP".to_string(),
            cicsplex: "PLXA".to_string(),
            region: "R1".to_string(),
            username: Some("alice".to_string()),
            password: Some("hunter2".to_string()),
        };

        let debug = format!("{request:?}");
        assert!(debug.contains("MYBUNDLE"));
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("hunter2"));
    }
}
