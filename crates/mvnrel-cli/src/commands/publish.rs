use miette::Result;
use mvnrel_core::config::PluginConfig;
use mvnrel_core::context::ReleaseContext;
use mvnrel_git::SystemGit;
use mvnrel_maven::mvn::Maven;
use mvnrel_util::progress;

pub fn exec(config: &PluginConfig, ctx: &ReleaseContext) -> Result<()> {
    let version = ctx.next_version()?;
    progress::status("Publishing", &format!("release {version}"));

    let maven = Maven::new(ctx)?;
    let git = SystemGit::new(ctx);
    let report = mvnrel_ops::ops_publish::publish(config, ctx, &maven, &git)?;

    if report.deployed {
        progress::status("Deployed", version);
    } else if report.packaged {
        progress::status("Packaged", version);
    } else {
        progress::status_info("Skipped", "maven deploy");
    }
    if let Some(snapshot) = &report.next_snapshot {
        progress::status("Committed", &format!("next version {snapshot}"));
    }
    if let Some(dev_branch) = &report.merged_into {
        progress::status("Merged", &format!("{} into {dev_branch}", ctx.branch));
    }
    progress::finished("publish", 0);
    Ok(())
}
