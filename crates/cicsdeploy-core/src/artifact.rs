//! Build artifacts and bundle selection.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{ArtifactError, ArtifactResult};

/// A file produced by the build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactRef {
    /// Location on disk, `None` if the build has not produced it yet.
    pub file: Option<PathBuf>,
    /// Distinguishes attached artifacts from each other.
    pub classifier: Option<String>,
}

impl ArtifactRef {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: Some(file.into()),
            classifier: None,
        }
    }

    pub fn attached(classifier: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            file: Some(file.into()),
            classifier: Some(classifier.into()),
        }
    }
}

/// The outputs of a build project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectArtifacts {
    pub primary: ArtifactRef,
    /// Attached artifacts, in the order the build listed them.
    pub attached: Vec<ArtifactRef>,
}

impl ProjectArtifacts {
    pub fn new(primary: ArtifactRef) -> Self {
        Self {
            primary,
            attached: Vec::new(),
        }
    }

    pub fn attach(mut self, artifact: ArtifactRef) -> Self {
        self.attached.push(artifact);
        self
    }

    /// Pick the file to deploy.
    ///
    /// An explicit `bundle` path wins outright and `classifier` is not
    /// consulted. Otherwise `classifier` picks the first attached artifact
    /// carrying it, and with neither set the primary artifact is used.
    pub fn select(
        &self,
        bundle: Option<&Path>,
        classifier: Option<&str>,
    ) -> ArtifactResult<PathBuf> {
        if let Some(bundle) = bundle {
            return Ok(bundle.to_path_buf());
        }

        let artifact = match classifier {
            Some(classifier) => self
                .attached
                .iter()
                .find(|a| a.classifier.as_deref() == Some(classifier))
                .ok_or_else(|| ArtifactError::NotFound(classifier.to_string()))?,
            None => &self.primary,
        };

        artifact.file.clone().ok_or(ArtifactError::FileMissing)
    }
}
