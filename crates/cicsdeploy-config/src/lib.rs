//! Server profile settings and configuration resolution for cicsdeploy.
//!
//! This crate handles:
//! - Parsing the KDL settings file that stores server profiles
//! - Extracting credentials and target fields from a profile
//! - Merging a profile with explicit overrides
//! - Validating the merged configuration

pub mod decrypt;
pub mod error;
pub mod extract;
pub mod resolve;
pub mod settings;
pub mod validate;

pub use decrypt::PlaintextDecrypter;
pub use error::{ConfigError, ConfigResult};
pub use extract::{ProfileFields, extract_credentials, extract_fields};
pub use resolve::resolve_server_config;
pub use settings::{Settings, parse_settings};
pub use validate::validate_server_config;
