//! Configuration errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("KDL parse error: {0}")]
    Parse(#[from] kdl::KdlError),

    #[error("server '{0}' does not exist")]
    ProfileNotFound(String),

    #[error("server '{0}' could not be decrypted")]
    DecryptionFailed(String),

    #[error("unknown configuration format for server '{profile}': {found}")]
    UnsupportedFormat { profile: String, found: String },

    #[error("endpoint URL is invalid: {input}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },

    #[error("{0} must be specified either in the deploy options or the server profile")]
    MissingField(String),

    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("duplicate definition: {0}")]
    Duplicate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
