//! Server configuration resolution.
//!
//! The stored profile is applied first and explicit overrides on top of it,
//! field by field. An override that is set always wins.

use crate::{ConfigError, ConfigResult, extract_credentials, extract_fields};
use cicsdeploy_core::{ProfileDecrypter, ProfileId, ProfileStore, ServerConfig, ServerOverrides};
use tracing::debug;
use url::Url;

/// Merge the profile named by `profile_id` with `overrides`.
///
/// Without a profile id no lookup happens and the result is built from the
/// overrides alone. Fields set nowhere are left unset for validation to
/// report.
pub fn resolve_server_config<S, D>(
    profile_id: Option<&ProfileId>,
    overrides: &ServerOverrides,
    store: &S,
    decrypter: &D,
) -> ConfigResult<ServerConfig>
where
    S: ProfileStore + ?Sized,
    D: ProfileDecrypter + ?Sized,
{
    let mut config = match profile_id {
        Some(id) => from_profile(id, store, decrypter)?,
        None => ServerConfig::default(),
    };

    if let Some(url) = &overrides.url {
        config.endpoint_url = Some(parse_url(url)?);
    }
    if let Some(cicsplex) = &overrides.cicsplex {
        config.cicsplex = Some(cicsplex.clone());
    }
    if let Some(region) = &overrides.region {
        config.region = Some(region.clone());
    }
    if let Some(username) = &overrides.username {
        config.username = Some(username.clone());
    }
    if let Some(password) = &overrides.password {
        config.password = Some(password.clone());
    }

    Ok(config)
}

fn from_profile<S, D>(id: &ProfileId, store: &S, decrypter: &D) -> ConfigResult<ServerConfig>
where
    S: ProfileStore + ?Sized,
    D: ProfileDecrypter + ?Sized,
{
    let stored = store
        .lookup(id)
        .ok_or_else(|| ConfigError::ProfileNotFound(id.to_string()))?;
    let server = decrypter
        .decrypt(&stored)
        .ok_or_else(|| ConfigError::DecryptionFailed(id.to_string()))?;

    debug!(server = %id, "using server profile");

    let credentials = extract_credentials(&server);
    let fields = extract_fields(&server)?;

    Ok(ServerConfig {
        endpoint_url: fields.url.as_deref().map(parse_url).transpose()?,
        cicsplex: fields.cicsplex,
        region: fields.region,
        username: credentials.username,
        password: credentials.password,
    })
}

fn parse_url(input: &str) -> ConfigResult<Url> {
    Url::parse(input).map_err(|source| ConfigError::InvalidUrl {
        input: input.to_string(),
        source,
    })
}
