//! Core domain types and traits for cicsdeploy.
//!
//! This crate contains:
//! - Server configuration, overrides and credentials
//! - Stored server profiles and the profile store/decrypter traits
//! - Build artifact references and bundle selection
//! - Deployer trait and deployment request types

pub mod artifact;
pub mod deployer;
pub mod error;
pub mod id;
pub mod profile;
pub mod server;

pub use artifact::{ArtifactRef, ProjectArtifacts};
pub use deployer::{BundleDeployer, DeployRequest};
pub use error::{ArtifactError, ArtifactResult, BoxError, DeploymentError};
pub use id::ProfileId;
pub use profile::{ConfigNode, ProfileBlob, ProfileDecrypter, ProfileStore, ServerProfile};
pub use server::{CredentialInfo, ServerConfig, ServerOverrides};
