//! Per-hook release context handed over by the orchestrator.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use mvnrel_util::errors::ReleaseError;

/// A released (or about to be released) version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    pub version: String,
}

impl Release {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}

/// Everything a hook knows about the release in progress.
///
/// Read-only from the hooks' point of view. `env` holds overrides passed to
/// every child process on top of this process's own environment.
#[derive(Debug, Clone)]
pub struct ReleaseContext {
    pub branch: String,
    pub cwd: PathBuf,
    pub env: BTreeMap<String, String>,
    pub next_release: Option<Release>,
    pub last_release: Option<Release>,
}

impl ReleaseContext {
    /// A context for `branch` rooted at `cwd`, with no release information yet.
    pub fn new(branch: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            branch: branch.into(),
            cwd: cwd.into(),
            env: BTreeMap::new(),
            next_release: None,
            last_release: None,
        }
    }

    pub fn with_next_release(mut self, version: impl Into<String>) -> Self {
        self.next_release = Some(Release::new(version));
        self
    }

    pub fn with_last_release(mut self, version: impl Into<String>) -> Self {
        self.last_release = Some(Release::new(version));
        self
    }

    /// Resolve a path relative to the project root.
    pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.cwd.join(relative)
    }

    /// The version being released; an error when the orchestrator didn't supply one.
    pub fn next_version(&self) -> miette::Result<&str> {
        self.next_release
            .as_ref()
            .map(|r| r.version.as_str())
            .ok_or_else(|| {
                ReleaseError::MissingReleaseInfo {
                    what: "next release version".to_string(),
                }
                .into()
            })
    }

    /// The previously released version, if there is one.
    pub fn last_version(&self) -> Option<&str> {
        self.last_release
            .as_ref()
            .map(|r| r.version.as_str())
            .filter(|v| !v.is_empty())
    }
}
