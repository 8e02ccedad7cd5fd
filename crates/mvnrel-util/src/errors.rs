use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all mvnrel operations.
///
/// The catalog variants carry a stable diagnostic `code` so release
/// orchestrators can match on them; the `help` text is the remediation shown
/// under the message.
#[derive(Debug, Error, Diagnostic)]
pub enum ReleaseError {
    /// `pom.xml` does not exist in the project root.
    #[error("Missing `pom.xml` file.")]
    #[diagnostic(
        code(ENOPOMXML),
        help(
            "The `pom.xml` file could not be found in this repository. \
             It is required to build and publish this Java package."
        )
    )]
    NoPomXml,

    /// `pom.xml` exists but is not well-formed XML.
    #[error("Error parsing `pom.xml` file.")]
    #[diagnostic(
        code(EREADPOMXML),
        help("Make sure `pom.xml` contains valid XML: {reason}")
    )]
    UnparsablePom { reason: String },

    /// The document root is not a `<project>` element.
    #[error("Missing `project` entry in `pom.xml` file")]
    #[diagnostic(
        code(ENOPOMPROJECT),
        help("The `project` entry must be the root element of the `pom.xml` file.")
    )]
    MissingProjectEntry,

    #[error("Missing `groupId` entry in `project` entry in `pom.xml` file")]
    #[diagnostic(
        code(ENOPOMPROJECTGROUPID),
        help("The `groupId` entry must be included in the `project` entry in the `pom.xml` file.")
    )]
    MissingGroupId,

    #[error("Missing `artifactId` entry in `project` entry in `pom.xml` file")]
    #[diagnostic(
        code(ENOPOMPROJECTARTIFACTID),
        help(
            "The `artifactId` entry must be included in the `project` entry in the `pom.xml` file."
        )
    )]
    MissingArtifactId,

    #[error("Missing `version` entry in `project` entry in `pom.xml` file")]
    #[diagnostic(
        code(ENOPOMPROJECTVERSION),
        help("The `version` entry must be included in the `project` entry in the `pom.xml` file.")
    )]
    MissingVersion,

    /// Every field-level problem found while validating `pom.xml`.
    #[error("`pom.xml` failed validation with {} problem(s)", .problems.len())]
    #[diagnostic(code(EINVALIDPOMXML))]
    InvalidPom {
        #[related]
        problems: Vec<ReleaseError>,
    },

    /// Deploying was requested but there are no credentials to deploy with.
    #[error("Missing the `maven-settings.xml` file.")]
    #[diagnostic(
        code(ENOMAVENSETTINGS),
        help(
            "The `maven-settings.xml` file could not be found in this repository. \
             It is required to publish this Java package to a Maven repository; \
             create one with your repository credentials or pass `--skip-maven-deploy`."
        )
    )]
    MissingMavenSettings,

    #[error("Packaging with maven failed.")]
    #[diagnostic(
        code(EMAVENPACKAGE),
        help("Maven failed to package the project. Check the build output above for the cause.")
    )]
    PackageFailed,

    #[error("Deployment to maven failed.")]
    #[diagnostic(
        code(EMAVENDEPLOY),
        help("The deployment to maven failed. Check the build output above for the cause.")
    )]
    DeployFailed,

    #[error("Setting the version in `pom.xml` to `{version}` failed.")]
    #[diagnostic(
        code(EMAVENVERSIONSET),
        help("`versions:set` did not succeed. Check the build output above for the cause.")
    )]
    SetVersionFailed { version: String },

    /// The pom version strayed too far from the last released git tag.
    #[error("Version mismatch")]
    #[diagnostic(
        code(ETOOLARGELASTRELEASEPOMDIFF),
        help(
            "The pom.xml version of `{pom_version}` differs too much from last git tag \
             version of `{last_release_version}`. Edit the `project` entry in `pom.xml` to have \
             a version number of no more than 1 patch version ahead of `{last_release_version}`."
        )
    )]
    VersionMismatch {
        pom_version: String,
        last_release_version: String,
    },

    /// A hook needs release information the caller did not supply.
    #[error("No {what} available for this release step")]
    #[diagnostic(
        code(ENORELEASEINFO),
        help("Pass the {what} to this hook (see `mvnrel <hook> --help`).")
    )]
    MissingReleaseInfo { what: String },

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A child process could not be started.
    #[error("Failed to run `{program}`: {message}")]
    Command { program: String, message: String },

    /// A git command exited unsuccessfully.
    #[error("Git command `{command}` failed: {stderr}")]
    Git { command: String, stderr: String },

    /// Network request failed.
    #[error("Network error: {message}")]
    Network { message: String },

    /// Invalid or inconsistent configuration.
    #[error("Configuration error: {message}")]
    #[diagnostic(help("Check your .mvnrel.toml and command-line flags"))]
    Config { message: String },

    /// A version string could not be interpreted.
    #[error("Version error: {message}")]
    Version { message: String },
}

impl ReleaseError {
    /// Remediation text for this error, if the catalog has one.
    pub fn details(&self) -> Option<String> {
        self.help().map(|h| h.to_string())
    }
}
