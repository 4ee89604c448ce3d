//! Server configuration and credentials.
//!
//! A [`ServerConfig`] is built fresh for every deployment from a stored
//! profile and the explicit [`ServerOverrides`] given by the caller.

use serde::Serialize;
use std::fmt;
use url::Url;

const REDACTED: &str = "<redacted>";

/// Connection settings for the target CICS region.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServerConfig {
    /// Base URL of the bundle deployment API.
    pub endpoint_url: Option<Url>,
    /// CICSplex the bundle is installed into.
    pub cicsplex: Option<String>,
    /// Region the bundle is installed into.
    pub region: Option<String>,
    pub username: Option<String>,
    #[serde(skip_serializing)]
    pub password: Option<String>,
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("endpoint_url", &self.endpoint_url.as_ref().map(Url::as_str))
            .field("cicsplex", &self.cicsplex)
            .field("region", &self.region)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| REDACTED))
            .finish()
    }
}

/// Values supplied explicitly by the caller.
///
/// Each field that is set replaces the value coming from a stored profile.
/// The URL is kept as text and parsed during resolution.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ServerOverrides {
    pub url: Option<String>,
    pub cicsplex: Option<String>,
    pub region: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl fmt::Debug for ServerOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerOverrides")
            .field("url", &self.url)
            .field("cicsplex", &self.cicsplex)
            .field("region", &self.region)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| REDACTED))
            .finish()
    }
}

/// Credentials taken from a decrypted server profile.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CredentialInfo {
    pub username: Option<String>,
    pub password: Option<String>,
    /// Not used for bundle deployment.
    pub private_key: Option<String>,
    /// Not used for bundle deployment.
    pub passphrase: Option<String>,
}

impl fmt::Debug for CredentialInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialInfo")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| REDACTED))
            .field("private_key", &self.private_key)
            .field("passphrase", &self.passphrase.as_ref().map(|_| REDACTED))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password() {
        let config = ServerConfig {
            endpoint_url: Some(Url::parse("https://cics.example.com/").unwrap()),
            cicsplex: Some("PLXA".to_string()),
            region: Some("REGA".to_string()),
            username: Some("alice".to_string()),
            password: Some("hunter2".to_string()),
        };

        let debug = format!("{:?}", config);
        assert!(debug.contains("alice"));
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_credential_debug_redacts_secrets() {
        let credentials = CredentialInfo {
            username: Some("alice".to_string()),
            password: Some("hunter2".to_string()),
            private_key: None,
            passphrase: Some("open-sesame".to_string()),
        };

        let debug = format!("{:?}", credentials);
        assert!(debug.contains("alice"));
        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains("open-sesame"));
    }
}
