//! Git operations for mvnrel: committing version bumps back to the release
//! branch and keeping a development branch in sync.

pub mod message;
pub mod system_git;

use mvnrel_core::config::PluginConfig;
use mvnrel_core::context::ReleaseContext;

pub use message::commit_message;
pub use system_git::{StageOutcome, SystemGit};

/// The repository steps of the release workflow.
pub trait Vcs {
    /// Make every remote branch fetchable, then check out and update the
    /// release branch.
    fn configure_for_multi_branch_push(&self, ctx: &ReleaseContext) -> miette::Result<()>;

    /// Commit the POM files (plus configured extras) for `version` and push
    /// them to the release branch.
    fn commit_descriptor_changes(
        &self,
        config: &PluginConfig,
        ctx: &ReleaseContext,
        version: &str,
    ) -> miette::Result<()>;

    /// Merge the release branch into the configured dev branch and push it.
    fn merge_branch_into_dev(
        &self,
        config: &PluginConfig,
        ctx: &ReleaseContext,
    ) -> miette::Result<()>;
}
