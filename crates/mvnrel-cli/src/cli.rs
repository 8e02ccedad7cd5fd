//! CLI argument definitions for mvnrel.
//!
//! One subcommand per release hook. Plugin options are global so the
//! pipeline can pass the same flags to every hook; each is also readable
//! from an `MVNREL_*` environment variable.

use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "mvnrel",
    version,
    about = "Release hooks for Maven projects",
    long_about = "mvnrel verifies, versions and deploys a Maven project as part of a \
                  semantic-versioning release pipeline. Git tags are the source of truth \
                  for versions; pom.xml is rewritten to match them."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub options: PluginOptions,

    /// Project directory
    #[arg(long, global = true, env = "MVNREL_CWD")]
    pub cwd: Option<PathBuf>,

    /// Branch being released
    #[arg(long, global = true, env = "MVNREL_BRANCH", default_value = "master")]
    pub branch: String,

    /// Configuration file (defaults to <cwd>/.mvnrel.toml if present)
    #[arg(long, global = true, env = "MVNREL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Flags mirroring the `.mvnrel.toml` keys. Boolean flags can only switch a
/// setting on; string flags replace the file's value. Boolean environment
/// variables accept `1`/`0`, `yes`/`no`, `on`/`off` and `true`/`false`.
#[derive(Args, Debug, Default)]
pub struct PluginOptions {
    /// Do not run `mvn deploy`
    #[arg(
        long,
        global = true,
        env = "MVNREL_SKIP_MAVEN_DEPLOY",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub skip_maven_deploy: bool,

    /// Remote URL to push release commits to
    #[arg(long, global = true, env = "MVNREL_REPOSITORY_URL")]
    pub repository_url: Option<String>,

    /// Leave `[ci skip]` off snapshot commits
    #[arg(
        long,
        global = true,
        env = "MVNREL_DISABLE_SNAPSHOT_SKIP_CI",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub disable_snapshot_skip_ci: bool,

    /// Leave `[ci skip]` off release commits
    #[arg(
        long,
        global = true,
        env = "MVNREL_DISABLE_FINAL_SKIP_CI",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub disable_final_skip_ci: bool,

    /// Commit versions back to git and keep a dev branch in sync
    #[arg(
        long,
        global = true,
        env = "MVNREL_ALTERNATE_WORKFLOW",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub alternate_workflow: bool,

    /// Branch to merge the release branch into after publishing
    #[arg(long, global = true, env = "MVNREL_DEV_BRANCH")]
    pub dev_branch: Option<String>,

    /// Comma-separated paths to commit alongside pom.xml
    #[arg(long, global = true, env = "MVNREL_ADDITIONAL_FILES_TO_COMMIT")]
    pub additional_files_to_commit: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check that pom.xml and deploy settings are usable
    VerifyConditions,

    /// Compare the pom version with git history and Maven Central
    VerifyRelease {
        /// Version of the previous release, empty for a first release
        #[arg(long, env = "MVNREL_LAST_RELEASE")]
        last_release: Option<String>,
        /// Version about to be released
        #[arg(long, env = "MVNREL_NEXT_RELEASE")]
        next_release: Option<String>,
    },

    /// Write the release version into pom.xml
    Prepare {
        /// Version about to be released
        #[arg(long, env = "MVNREL_NEXT_RELEASE")]
        next_release: String,
    },

    /// Deploy the release and move on to the next snapshot
    Publish {
        /// Version being released
        #[arg(long, env = "MVNREL_NEXT_RELEASE")]
        next_release: String,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
