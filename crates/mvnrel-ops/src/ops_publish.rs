//! Operation: deploy the release, then move the project on to the next snapshot.

use mvnrel_core::config::PluginConfig;
use mvnrel_core::context::ReleaseContext;
use mvnrel_core::version::next_snapshot_version;
use mvnrel_git::Vcs;
use mvnrel_maven::mvn::BuildTool;

/// What [`publish`] ended up doing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishReport {
    pub deployed: bool,
    pub packaged: bool,
    /// The snapshot version committed after the release, if any.
    pub next_snapshot: Option<String>,
    /// The dev branch the release branch was merged into, if any.
    pub merged_into: Option<String>,
}

/// Publish the release.
///
/// 1. `mvn deploy`, unless deploying is skipped. With deploy skipped, the
///    alternate workflow still packages, since later CI steps may use the
///    artifact built from the release commit.
/// 2. Under the alternate workflow, commit and push the next snapshot
///    version, then merge the release branch into the dev branch if one is
///    configured.
pub fn publish(
    config: &PluginConfig,
    ctx: &ReleaseContext,
    build: &impl BuildTool,
    vcs: &impl Vcs,
) -> miette::Result<PublishReport> {
    crate::log_tool_version();
    let released = ctx.next_version()?;
    let mut report = PublishReport::default();

    if !config.skip_maven_deploy {
        build.deploy(released)?;
        report.deployed = true;
    } else if config.alternate_workflow {
        build.package()?;
        report.packaged = true;
    }

    if !config.alternate_workflow {
        return Ok(report);
    }

    vcs.configure_for_multi_branch_push(ctx)?;

    let snapshot = next_snapshot_version(released)?;
    build.set_version(&snapshot)?;
    vcs.commit_descriptor_changes(config, ctx, &snapshot)?;
    report.next_snapshot = Some(snapshot);

    if let Some(dev_branch) = config.dev_branch() {
        vcs.merge_branch_into_dev(config, ctx)?;
        report.merged_into = Some(dev_branch.to_string());
    }

    Ok(report)
}
