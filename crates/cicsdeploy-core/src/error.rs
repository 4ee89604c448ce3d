//! Error types for artifact selection and deployment.

use thiserror::Error;

/// Boxed error used to carry the original cause of a failed deployment.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("no attached artifact with classifier '{0}'")]
    NotFound(String),

    #[error("bundle artifact has no file, has the project been packaged?")]
    FileMissing,
}

pub type ArtifactResult<T> = std::result::Result<T, ArtifactError>;

/// A failure raised by the deploy operation or the I/O underneath it.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct DeploymentError {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl DeploymentError {
    /// Wrap a failure, keeping its message and the failure itself as the cause.
    pub fn new<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }

    /// A failure with no underlying cause.
    pub fn msg(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_deployment_error_keeps_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "bundle.zip missing");
        let err = DeploymentError::new(io);

        assert_eq!(err.to_string(), "bundle.zip missing");
        let source = err.source().unwrap();
        let io = source.downcast_ref::<std::io::Error>().unwrap();
        assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn test_deployment_error_msg_has_no_source() {
        let err = DeploymentError::msg("endpoint is not set");
        assert_eq!(err.message(), "endpoint is not set");
        assert!(err.source().is_none());
    }
}
