use miette::Result;
use mvnrel_core::config::PluginConfig;
use mvnrel_core::context::ReleaseContext;
use mvnrel_git::SystemGit;
use mvnrel_maven::mvn::Maven;
use mvnrel_util::progress;

pub fn exec(config: &PluginConfig, ctx: &ReleaseContext) -> Result<()> {
    let version = ctx.next_version()?;
    progress::status("Preparing", &format!("release {version}"));

    let maven = Maven::new(ctx)?;
    let git = SystemGit::new(ctx);
    mvnrel_ops::ops_prepare::prepare(config, ctx, &maven, &git)?;

    progress::status("Prepared", &format!("pom.xml set to {version}"));
    progress::finished("prepare", 0);
    Ok(())
}
