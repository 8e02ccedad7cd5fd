use miette::Result;
use mvnrel_core::config::PluginConfig;
use mvnrel_core::context::ReleaseContext;
use mvnrel_maven::central::CentralSearch;
use mvnrel_util::progress;

pub async fn exec(config: &PluginConfig, ctx: &ReleaseContext) -> Result<()> {
    progress::status("Verifying", "pom.xml version against release history");
    let registry = CentralSearch::new()?;
    let advisories =
        mvnrel_ops::ops_verify_release::verify_release(config, ctx, &registry).await?;

    progress::finished("verify-release", advisories.len());
    Ok(())
}
