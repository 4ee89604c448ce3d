//! Validation of a resolved server configuration.

use crate::{ConfigError, ConfigResult};
use cicsdeploy_core::ServerConfig;

/// Check that the fields a deployment cannot do without are present.
///
/// Credentials are optional since the deployment API may allow anonymous
/// access.
pub fn validate_server_config(config: &ServerConfig) -> ConfigResult<()> {
    if config.endpoint_url.is_none() {
        return Err(ConfigError::MissingField("url".to_string()));
    }
    if is_blank(config.cicsplex.as_deref()) {
        return Err(ConfigError::MissingField("cicsplex".to_string()));
    }
    if is_blank(config.region.as_deref()) {
        return Err(ConfigError::MissingField("region".to_string()));
    }
    Ok(())
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}
