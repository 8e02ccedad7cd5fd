use miette::Result;
use mvnrel_core::config::PluginConfig;
use mvnrel_core::context::ReleaseContext;
use mvnrel_util::progress;

pub fn exec(config: &PluginConfig, ctx: &ReleaseContext) -> Result<()> {
    progress::status("Verifying", "pom.xml and deploy settings");
    let pom = mvnrel_ops::ops_verify_conditions::verify_conditions(config, ctx)?;
    progress::status("Verified", &pom.summary());
    progress::finished("verify-conditions", 0);
    Ok(())
}
