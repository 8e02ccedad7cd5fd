use serde::{Deserialize, Serialize};
use std::path::Path;

use mvnrel_util::errors::ReleaseError;

/// Name of the optional per-project configuration file.
pub const CONFIG_FILE: &str = ".mvnrel.toml";

/// Remote used for pushes when no `repository-url` is configured.
pub const DEFAULT_REMOTE: &str = "origin";

/// Plugin options supplied by the release orchestrator.
///
/// Keys are kebab-case in `.mvnrel.toml`; the camelCase spellings used by
/// JSON release configs are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Do not run `mvn deploy` (and do not require `maven-settings.xml`).
    #[serde(default, rename = "skip-maven-deploy", alias = "skipMavenDeploy")]
    pub skip_maven_deploy: bool,

    /// Remote URL to push release commits to.
    #[serde(default, rename = "repository-url", alias = "repositoryUrl")]
    pub repository_url: Option<String>,

    /// Leave `[ci skip]` off the next-snapshot commit message.
    #[serde(
        default,
        rename = "disable-snapshot-skip-ci",
        alias = "disableSnapshotSkipCi"
    )]
    pub disable_snapshot_skip_ci: bool,

    /// Leave `[ci skip]` off the release-version commit message.
    #[serde(default, rename = "disable-final-skip-ci", alias = "disableFinalSkipCi")]
    pub disable_final_skip_ci: bool,

    /// Commit release and snapshot versions back to git, sync the dev branch,
    /// and treat pom/tag version drift as fatal.
    #[serde(
        default,
        rename = "alternate-workflow",
        alias = "alternateWorkflow",
        alias = "useConveyalWorkflow"
    )]
    pub alternate_workflow: bool,

    /// Branch to merge the release branch into after publishing.
    #[serde(default, rename = "dev-branch", alias = "devBranch")]
    pub dev_branch: Option<String>,

    /// Comma-separated paths committed alongside `pom.xml`.
    #[serde(
        default,
        rename = "additional-files-to-commit",
        alias = "additionalFilesToCommit"
    )]
    pub additional_files_to_commit: Option<String>,
}

impl PluginConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            ReleaseError::Config {
                message: format!("Failed to parse {CONFIG_FILE}: {e}"),
            }
            .into()
        })
    }

    /// Load the configuration from an explicit file.
    pub fn load(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ReleaseError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Load `<dir>/.mvnrel.toml`, or return defaults if the file doesn't exist.
    pub fn load_from_dir(dir: &Path) -> miette::Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.is_file() {
            tracing::debug!("loading configuration from {}", path.display());
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// The configured additional files, split on commas with blanks dropped.
    pub fn additional_files(&self) -> Vec<String> {
        self.additional_files_to_commit
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Where release commits are pushed.
    pub fn push_remote(&self) -> &str {
        self.repository_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_REMOTE)
    }

    /// The development branch, if one is configured and non-empty.
    pub fn dev_branch(&self) -> Option<&str> {
        self.dev_branch.as_deref().filter(|b| !b.is_empty())
    }
}
