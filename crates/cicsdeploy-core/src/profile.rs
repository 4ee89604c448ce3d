//! Stored server profiles.
//!
//! A profile holds credentials plus a free-form configuration blob. Profiles
//! come from a [`ProfileStore`] and have to go through a [`ProfileDecrypter`]
//! before their credentials can be used.

use std::fmt;

use crate::ProfileId;

/// A named node in a profile configuration tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigNode {
    pub name: String,
    pub value: Option<String>,
    pub children: Vec<ConfigNode>,
}

impl ConfigNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            children: Vec::new(),
        }
    }
}

/// The configuration attached to a stored profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileBlob {
    /// A tree of named fields.
    Tree(Vec<ConfigNode>),
    /// A bare value with no named fields.
    Scalar(String),
}

impl ProfileBlob {
    /// Short description of the blob's shape, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            ProfileBlob::Tree(_) => "tree",
            ProfileBlob::Scalar(_) => "scalar value",
        }
    }
}

/// A server entry as held by a profile store, encrypted or decrypted.
#[derive(Clone, PartialEq, Eq)]
pub struct ServerProfile {
    pub id: ProfileId,
    pub username: Option<String>,
    pub password: Option<String>,
    pub private_key: Option<String>,
    pub passphrase: Option<String>,
    /// `None` when the entry has no configuration at all.
    pub configuration: Option<ProfileBlob>,
}

impl ServerProfile {
    pub fn new(id: impl Into<ProfileId>) -> Self {
        Self {
            id: id.into(),
            username: None,
            password: None,
            private_key: None,
            passphrase: None,
            configuration: None,
        }
    }
}

impl fmt::Debug for ServerProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerProfile")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("private_key", &self.private_key)
            .field("passphrase", &self.passphrase.as_ref().map(|_| "<redacted>"))
            .field("configuration", &self.configuration)
            .finish()
    }
}

/// Looks up stored profiles by id.
pub trait ProfileStore {
    fn lookup(&self, id: &ProfileId) -> Option<ServerProfile>;
}

impl<F> ProfileStore for F
where
    F: Fn(&ProfileId) -> Option<ServerProfile>,
{
    fn lookup(&self, id: &ProfileId) -> Option<ServerProfile> {
        self(id)
    }
}

/// Turns a stored profile into one with usable credentials.
///
/// Returns `None` when the profile cannot be decrypted.
pub trait ProfileDecrypter {
    fn decrypt(&self, profile: &ServerProfile) -> Option<ServerProfile>;
}

impl<F> ProfileDecrypter for F
where
    F: Fn(&ServerProfile) -> Option<ServerProfile>,
{
    fn decrypt(&self, profile: &ServerProfile) -> Option<ServerProfile> {
        self(profile)
    }
}
