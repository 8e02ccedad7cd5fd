//! Git backend that shells out to the system `git`.
//!
//! Credentials, SSH keys and remotes all come from the CI environment's git
//! setup; nothing here configures authentication.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::Output;

use mvnrel_core::config::PluginConfig;
use mvnrel_core::context::ReleaseContext;
use mvnrel_core::POM_FILE;
use mvnrel_util::errors::ReleaseError;
use mvnrel_util::process::CommandBuilder;

use crate::message::commit_message;
use crate::Vcs;

/// Fetch refspec that mirrors every remote branch, not just the one CI checked out.
pub const ALL_BRANCHES_REFSPEC: &str = "+refs/heads/*:refs/remotes/origin/*";

/// Module POMs one directory below the root.
pub const MODULE_POM_PATTERN: &str = "*/pom.xml";

/// Result of a best-effort `git add`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageOutcome {
    /// The paths were added to the index.
    Staged,
    /// The pathspec matched no files; nothing changed.
    NothingMatched,
    /// Git refused the paths for another reason.
    Rejected(String),
}

/// Git commands run in the project directory.
#[derive(Debug, Clone)]
pub struct SystemGit {
    cwd: PathBuf,
    env: BTreeMap<String, String>,
}

impl SystemGit {
    pub fn new(ctx: &ReleaseContext) -> Self {
        Self {
            cwd: ctx.cwd.clone(),
            env: ctx.env.clone(),
        }
    }

    fn git_cmd<'a>(&self, args: impl IntoIterator<Item = &'a str>) -> CommandBuilder {
        CommandBuilder::new("git")
            .args(args)
            .cwd(&self.cwd)
            .envs(&self.env)
    }

    /// Run a git command, turning a non-zero exit into [`ReleaseError::Git`].
    fn run<'a>(&self, args: impl IntoIterator<Item = &'a str>) -> miette::Result<Output> {
        let cmd = self.git_cmd(args);
        let output = cmd.exec()?;
        if !output.status.success() {
            return Err(ReleaseError::Git {
                command: cmd.display(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }
        Ok(output)
    }

    /// Stage `paths`, forcing past `.gitignore`.
    ///
    /// Never fails because of what git thinks of the paths; only a git that
    /// cannot be started is an error.
    pub fn add(&self, paths: &[&str]) -> miette::Result<StageOutcome> {
        let output = self
            .git_cmd(["add", "--force", "--ignore-errors"])
            .args(paths.iter().copied())
            .exec()?;
        if output.status.success() {
            return Ok(StageOutcome::Staged);
        }
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if stderr.contains("did not match any files") {
            Ok(StageOutcome::NothingMatched)
        } else {
            Ok(StageOutcome::Rejected(stderr))
        }
    }

    /// Commit the index. Fails when there is nothing to commit.
    pub fn commit(&self, message: &str) -> miette::Result<()> {
        self.run(["commit", "-m", message])?;
        Ok(())
    }

    /// Push HEAD to `branch` on `remote`, with any annotated tags pointing into it.
    pub fn push(&self, remote: &str, branch: &str) -> miette::Result<()> {
        let refspec = format!("HEAD:{branch}");
        self.run(["push", "--follow-tags", remote, refspec.as_str()])?;
        Ok(())
    }

    pub fn checkout(&self, branch: &str) -> miette::Result<()> {
        self.run(["checkout", branch])?;
        Ok(())
    }

    pub fn merge(&self, branch: &str) -> miette::Result<()> {
        self.run(["merge", branch])?;
        Ok(())
    }

    pub fn fetch(&self) -> miette::Result<()> {
        self.run(["fetch"])?;
        Ok(())
    }

    pub fn pull(&self) -> miette::Result<()> {
        self.run(["pull"])?;
        Ok(())
    }

    /// Stage one path, logging instead of failing when git won't take it.
    fn add_best_effort(&self, path: &str) -> miette::Result<()> {
        match self.add(&[path])? {
            StageOutcome::Staged => {}
            StageOutcome::NothingMatched => tracing::info!("no files matching {path} to add to commit"),
            StageOutcome::Rejected(reason) => tracing::warn!("could not add {path} to commit: {reason}"),
        }
        Ok(())
    }
}

impl Vcs for SystemGit {
    fn configure_for_multi_branch_push(&self, ctx: &ReleaseContext) -> miette::Result<()> {
        // CI checkouts are often single-branch; widen the refspec so the dev
        // branch can be checked out later.
        tracing::info!("configuring git");
        self.run([
            "config",
            "--replace-all",
            "remote.origin.fetch",
            ALL_BRANCHES_REFSPEC,
        ])?;

        tracing::info!("fetching branches");
        self.fetch()?;

        tracing::info!("checking out release branch {}", ctx.branch);
        self.checkout(&ctx.branch)?;

        tracing::info!("pulling");
        self.pull()
    }

    fn commit_descriptor_changes(
        &self,
        config: &PluginConfig,
        ctx: &ReleaseContext,
        version: &str,
    ) -> miette::Result<()> {
        tracing::info!("adding pom.xml files to a commit");
        self.add_best_effort(POM_FILE)?;
        self.add_best_effort(MODULE_POM_PATTERN)?;

        let additional = config.additional_files();
        if !additional.is_empty() {
            tracing::info!("adding additional files to commit: {}", additional.join(","));
            for path in &additional {
                self.add_best_effort(path)?;
            }
        }

        let message = commit_message(config, version);
        tracing::info!("committing changes: {message}");
        self.commit(&message)?;

        tracing::info!("pushing changes to {}", ctx.branch);
        self.push(config.push_remote(), &ctx.branch)?;
        tracing::info!("changes pushed");
        Ok(())
    }

    fn merge_branch_into_dev(
        &self,
        config: &PluginConfig,
        ctx: &ReleaseContext,
    ) -> miette::Result<()> {
        let dev_branch = config.dev_branch().ok_or_else(|| ReleaseError::Config {
            message: "dev-branch must be set to merge the release branch into it".to_string(),
        })?;

        tracing::info!("Merging {} branch into {dev_branch} branch", ctx.branch);
        tracing::info!("checking out dev branch");
        self.checkout(dev_branch)?;

        tracing::info!("merging release branch into dev branch");
        self.merge(&ctx.branch)?;

        tracing::info!("pushing dev branch");
        self.push(config.push_remote(), dev_branch)?;

        tracing::info!("merge and push successful!");
        Ok(())
    }
}
