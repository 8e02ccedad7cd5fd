//! Operation: write the release version into `pom.xml`.

use mvnrel_core::config::PluginConfig;
use mvnrel_core::context::ReleaseContext;
use mvnrel_git::Vcs;
use mvnrel_maven::mvn::BuildTool;

/// Set the next release version in the POMs; under the alternate workflow,
/// also commit and push that change to the release branch.
pub fn prepare(
    config: &PluginConfig,
    ctx: &ReleaseContext,
    build: &impl BuildTool,
    vcs: &impl Vcs,
) -> miette::Result<()> {
    crate::log_tool_version();
    let next_version = ctx.next_version()?;

    build.set_version(next_version)?;

    if config.alternate_workflow {
        vcs.commit_descriptor_changes(config, ctx, next_version)?;
    }
    Ok(())
}
