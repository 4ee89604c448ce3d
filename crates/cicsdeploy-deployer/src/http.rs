//! HTTP deployer for the CICS bundle deployment API.
//!
//! The bundle is uploaded as a multipart form to the `managedcicsbundles`
//! resource under the configured endpoint. The server answers 200 when the
//! bundle is installed and enabled.

use async_trait::async_trait;
use cicsdeploy_core::{BundleDeployer, DeployRequest};
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;
use url::Url;

const MANAGED_BUNDLES: &str = "managedcicsbundles";

#[derive(Debug, Error)]
pub enum HttpDeployError {
    #[error("could not read bundle {}: {source}", .path.display())]
    Bundle {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid deployment URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{message}")]
    Rejected { status: u16, message: String },
}

/// Error body returned by the deployment API.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: Option<String>,
    #[serde(rename = "requestErrors", default)]
    request_errors: BTreeMap<String, String>,
}

/// Deploys bundles over HTTP.
pub struct HttpBundleDeployer {
    client: Client,
}

impl HttpBundleDeployer {
    pub fn new() -> Result<Self, HttpDeployError> {
        let client = Client::builder()
            .user_agent(concat!("cicsdeploy/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

/// The URL bundles are posted to, relative to the configured endpoint.
pub fn deploy_url(endpoint: &Url) -> Result<Url, url::ParseError> {
    endpoint.join(MANAGED_BUNDLES)
}

#[async_trait]
impl BundleDeployer for HttpBundleDeployer {
    type Error = HttpDeployError;

    fn name(&self) -> &'static str {
        "http"
    }

    async fn deploy(&self, request: &DeployRequest) -> Result<(), Self::Error> {
        let target = deploy_url(&request.endpoint)?;

        let content = tokio::fs::read(&request.bundle)
            .await
            .map_err(|source| HttpDeployError::Bundle {
                path: request.bundle.clone(),
                source,
            })?;
        let file_name = request
            .bundle
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "bundle.zip".to_string());

        let bundle = Part::bytes(content)
            .file_name(file_name)
            .mime_str("application/zip")?;
        let form = Form::new()
            .part("bundle", bundle)
            .text("bunddef", request.bunddef.clone())
            .text("csdgroup", request.csdgroup.clone())
            .text("cicsplex", request.cicsplex.clone())
            .text("region", request.region.clone());

        let mut builder = self.client.post(target.clone()).multipart(form);
        if let Some(username) = &request.username {
            builder = builder.basic_auth(username, request.password.as_deref());
        }

        debug!(url = %target, "Posting bundle");
        let response = builder.send().await?;
        let status = response.status();
        if status == StatusCode::OK {
            return Ok(());
        }

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json"));
        let body = response.text().await?;

        Err(HttpDeployError::Rejected {
            status: status.as_u16(),
            message: rejection_message(status, is_json, &body),
        })
    }
}

fn rejection_message(status: StatusCode, is_json: bool, body: &str) -> String {
    let parsed = if is_json {
        serde_json::from_str::<ErrorResponse>(body).ok()
    } else {
        None
    };

    match parsed {
        Some(ErrorResponse {
            message: Some(mut message),
            request_errors,
        }) => {
            for (field, error) in &request_errors {
                message.push_str(&format!("\n - {}: {}", field, error));
            }
            message
        }
        _ => format!("Http response: {}", status),
    }
}
