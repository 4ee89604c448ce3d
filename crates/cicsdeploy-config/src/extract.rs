//! Field extraction from server profiles.

use crate::{ConfigError, ConfigResult};
use cicsdeploy_core::{CredentialInfo, ProfileBlob, ServerProfile};

/// Target fields found in a profile's configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileFields {
    pub url: Option<String>,
    pub cicsplex: Option<String>,
    pub region: Option<String>,
}

/// Pull the credentials out of a decrypted profile.
pub fn extract_credentials(profile: &ServerProfile) -> CredentialInfo {
    CredentialInfo {
        username: profile.username.clone(),
        password: profile.password.clone(),
        private_key: profile.private_key.clone(),
        passphrase: profile.passphrase.clone(),
    }
}

/// Pull `url`, `cicsplex` and `region` out of a profile's configuration.
///
/// Missing fields stay unset. A profile with no configuration yields no
/// fields; a configuration that is not a tree is rejected.
pub fn extract_fields(profile: &ServerProfile) -> ConfigResult<ProfileFields> {
    let nodes = match &profile.configuration {
        None => return Ok(ProfileFields::default()),
        Some(ProfileBlob::Tree(nodes)) => nodes,
        Some(other) => {
            return Err(ConfigError::UnsupportedFormat {
                profile: profile.id.to_string(),
                found: other.kind().to_string(),
            });
        }
    };

    let field = |name: &str| {
        nodes
            .iter()
            .find(|n| n.name == name)
            .and_then(|n| n.value.clone())
    };

    Ok(ProfileFields {
        url: field("url"),
        cicsplex: field("cicsplex"),
        region: field("region"),
    })
}
