//! Bundle deployment for cicsdeploy.
//!
//! Provides:
//! - The dispatcher that makes the single deploy call
//! - The full deployment sequence (resolve, validate, select, dispatch)
//! - An HTTP deployer for the CICS bundle deployment API

pub mod deploy;
pub mod dispatch;
pub mod error;
pub mod http;

pub use cicsdeploy_core::deployer::{BundleDeployer, DeployRequest};
pub use deploy::{DeployOptions, DeploymentPlan, deploy_bundle, plan_deployment};
pub use dispatch::DeployDispatcher;
pub use error::DeployError;
pub use http::{HttpBundleDeployer, HttpDeployError};
