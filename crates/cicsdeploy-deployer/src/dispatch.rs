//! The single call to the deploy operation.

use cicsdeploy_core::{BundleDeployer, DeployRequest, DeploymentError, ServerConfig};
use std::path::Path;
use tracing::info;

/// Hands a validated configuration and bundle to a [`BundleDeployer`].
pub struct DeployDispatcher<D> {
    deployer: D,
}

impl<D: BundleDeployer> DeployDispatcher<D> {
    pub fn new(deployer: D) -> Self {
        Self { deployer }
    }

    pub fn deployer(&self) -> &D {
        &self.deployer
    }

    /// Call the deploy operation exactly once.
    ///
    /// Whatever the deployer fails with comes back as a [`DeploymentError`]
    /// with the original failure as its source. Nothing is retried.
    pub async fn dispatch(
        &self,
        config: &ServerConfig,
        bundle: &Path,
        bunddef: &str,
        csdgroup: &str,
    ) -> Result<(), DeploymentError> {
        let endpoint = config
            .endpoint_url
            .clone()
            .ok_or_else(|| DeploymentError::msg("no endpoint URL in server configuration"))?;

        let request = DeployRequest {
            endpoint,
            bundle: bundle.to_path_buf(),
            bunddef: bunddef.to_string(),
            csdgroup: csdgroup.to_string(),
            cicsplex: config.cicsplex.clone().unwrap_or_default(),
            region: config.region.clone().unwrap_or_default(),
            username: config.username.clone(),
            password: config.password.clone(),
        };

        info!(
            deployer = self.deployer.name(),
            bundle = %request.bundle.display(),
            bunddef = %request.bunddef,
            cicsplex = %request.cicsplex,
            region = %request.region,
            "Deploying bundle"
        );

        self.deployer
            .deploy(&request)
            .await
            .map_err(DeploymentError::new)?;

        info!(bunddef = %request.bunddef, "Bundle deployed");
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::error::Error as _;
    use std::sync::Mutex;
    use url::Url;

    /// Records every request and fails when given a message to fail with.
    #[derive(Default)]
    pub(crate) struct RecordingDeployer {
        pub(crate) requests: Mutex<Vec<DeployRequest>>,
        pub(crate) fail_with: Option<String>,
    }

    impl RecordingDeployer {
        pub(crate) fn failing(message: &str) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                fail_with: Some(message.to_string()),
            }
        }

        pub(crate) fn calls(&self) -> Vec<DeployRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl BundleDeployer for RecordingDeployer {
        type Error = std::io::Error;

        fn name(&self) -> &'static str {
            "recording"
        }

        async fn deploy(&self, request: &DeployRequest) -> Result<(), Self::Error> {
            self.requests.lock().unwrap().push(request.clone());
            match &self.fail_with {
                Some(message) => Err(std::io::Error::other(message.clone())),
                None => Ok(()),
            }
        }
    }

    fn config() -> ServerConfig {
        ServerConfig {
            endpoint_url: Some(Url::parse("https://cics.example.com:9080/").unwrap()),
            cicsplex: Some("PLXA".to_string()),
            region: Some("REGA".to_string()),
            username: Some("alice".to_string()),
            password: Some("secret".to_string()),
        }
    }

    #[tokio::test]
    async fn test_dispatch_passes_every_parameter_once() {
        let dispatcher = DeployDispatcher::new(RecordingDeployer::default());

        dispatcher
            .dispatch(&config(), Path::new("target/app.zip"), "MYBUNDLE", "MYGROUP")
            .await
            .unwrap();

        let calls = dispatcher.deployer().calls();
        assert_eq!(calls.len(), 1);

        let request = &calls[0];
        assert_eq!(request.endpoint.as_str(), "https://cics.example.com:9080/");
        assert_eq!(request.bundle, Path::new("target/app.zip"));
        assert_eq!(request.bunddef, "MYBUNDLE");
        assert_eq!(request.csdgroup, "MYGROUP");
        assert_eq!(request.cicsplex, "PLXA");
        assert_eq!(request.region, "REGA");
        assert_eq!(request.username.as_deref(), Some("alice"));
        assert_eq!(request.password.as_deref(), Some("secret"));
    }

    #[tokio::test]
    async fn test_dispatch_failure_keeps_cause() {
        let dispatcher = DeployDispatcher::new(RecordingDeployer::failing("region is not active"));

        let err = dispatcher
            .dispatch(&config(), Path::new("target/app.zip"), "MYBUNDLE", "MYGROUP")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "region is not active");
        let source = err.source().unwrap();
        assert!(source.downcast_ref::<std::io::Error>().is_some());
        assert_eq!(dispatcher.deployer().calls().len(), 1);
    }

    #[tokio::test]
    async fn test_dispatch_without_endpoint() {
        let dispatcher = DeployDispatcher::new(RecordingDeployer::default());
        let config = ServerConfig {
            endpoint_url: None,
            ..config()
        };

        let result = dispatcher
            .dispatch(&config, Path::new("target/app.zip"), "MYBUNDLE", "MYGROUP")
            .await;

        assert!(result.is_err());
        assert!(dispatcher.deployer().calls().is_empty());
    }
}
