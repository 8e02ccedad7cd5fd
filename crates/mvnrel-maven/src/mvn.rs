//! Maven invocation: `versions:set`, `package` and `deploy`.
//!
//! Build output is streamed straight to the terminal since a deploy can run
//! for minutes and CI logs should show progress as it happens. Tests are
//! skipped on every invocation; the pipeline runs them before releasing.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use mvnrel_core::context::ReleaseContext;
use mvnrel_core::{MAVEN_SETTINGS_FILE, MAVEN_WRAPPER};
use mvnrel_util::errors::ReleaseError;
use mvnrel_util::process::CommandBuilder;

/// System-wide Maven executable, used when the project has no wrapper.
pub const SYSTEM_MAVEN: &str = "mvn";

/// The build steps a release needs from the build tool.
pub trait BuildTool {
    /// Rewrite the project version in `pom.xml` (and module POMs).
    fn set_version(&self, version: &str) -> miette::Result<()>;

    /// Build the artifact without deploying it.
    fn package(&self) -> miette::Result<()>;

    /// Build and publish the artifact for `version`.
    fn deploy(&self, version: &str) -> miette::Result<()>;
}

/// `<dir>/mvnw` if the project ships a Maven wrapper, otherwise `mvn` from PATH.
pub fn resolve_command(dir: &Path) -> Result<PathBuf, ReleaseError> {
    let wrapper = dir.join(MAVEN_WRAPPER);
    match std::fs::metadata(&wrapper) {
        Ok(_) => Ok(wrapper),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(PathBuf::from(SYSTEM_MAVEN)),
        Err(e) => Err(ReleaseError::Io(e)),
    }
}

/// Maven, run in the project directory.
#[derive(Debug, Clone)]
pub struct Maven {
    program: PathBuf,
    cwd: PathBuf,
    env: BTreeMap<String, String>,
}

impl Maven {
    /// Resolve the Maven command for the context's project once, up front.
    pub fn new(ctx: &ReleaseContext) -> miette::Result<Self> {
        let program = resolve_command(&ctx.cwd)?;
        tracing::debug!("using maven command {}", program.display());
        Ok(Self {
            program,
            cwd: ctx.cwd.clone(),
            env: ctx.env.clone(),
        })
    }

    fn command(&self) -> CommandBuilder {
        CommandBuilder::new(self.program.to_string_lossy())
            .cwd(&self.cwd)
            .envs(&self.env)
    }
}

/// Arguments for `versions:set` without leaving `pom.xml.versionsBackup` files behind.
pub fn set_version_args(version: &str) -> Vec<String> {
    vec![
        "versions:set".to_string(),
        "-DgenerateBackupPoms=false".to_string(),
        format!("-DnewVersion={version}"),
    ]
}

pub fn package_args() -> Vec<String> {
    vec!["package".to_string(), "-DskipTests".to_string()]
}

pub fn deploy_args() -> Vec<String> {
    vec![
        "deploy".to_string(),
        "-DskipTests".to_string(),
        "--settings".to_string(),
        MAVEN_SETTINGS_FILE.to_string(),
    ]
}

impl BuildTool for Maven {
    fn set_version(&self, version: &str) -> miette::Result<()> {
        tracing::info!("Updating pom.xml to version {version}");
        let status = self.command().args(set_version_args(version)).stream()?;
        if !status.success() {
            return Err(ReleaseError::SetVersionFailed {
                version: version.to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn package(&self) -> miette::Result<()> {
        tracing::info!("Packaging with maven");
        match self.command().args(package_args()).stream() {
            Ok(status) if status.success() => Ok(()),
            Ok(status) => {
                tracing::error!("failed to package with maven: {status}");
                Err(ReleaseError::PackageFailed.into())
            }
            Err(e) => {
                tracing::error!("failed to package with maven: {e}");
                Err(ReleaseError::PackageFailed.into())
            }
        }
    }

    fn deploy(&self, version: &str) -> miette::Result<()> {
        tracing::info!("Deploying version {version} with maven");
        match self.command().args(deploy_args()).stream() {
            Ok(status) if status.success() => Ok(()),
            Ok(status) => {
                tracing::error!("failed to deploy to maven: {status}");
                Err(ReleaseError::DeployFailed.into())
            }
            Err(e) => {
                tracing::error!("failed to deploy to maven: {e}");
                Err(ReleaseError::DeployFailed.into())
            }
        }
    }
}
