//! Operation: check the project can be released before anything is changed.

use mvnrel_core::config::PluginConfig;
use mvnrel_core::context::ReleaseContext;
use mvnrel_core::MAVEN_SETTINGS_FILE;
use mvnrel_maven::pom::{self, Pom};
use mvnrel_util::errors::ReleaseError;

/// Validate `pom.xml` and, when deploying, the presence of `maven-settings.xml`.
///
/// Returns the validated project so callers can report on it.
pub fn verify_conditions(config: &PluginConfig, ctx: &ReleaseContext) -> miette::Result<Pom> {
    crate::log_tool_version();

    tracing::info!("validating pom.xml");
    let pom = pom::load_validated_pom(&ctx.cwd)?;
    tracing::info!("pom.xml validation successful for {}", pom.summary());
    if let Some(name) = pom.name.as_deref().filter(|n| !n.is_empty()) {
        tracing::debug!("project name: {name}");
    }
    if !pom.modules.is_empty() {
        tracing::info!("module POMs to version: {}", pom.modules.join(", "));
    }

    if !config.skip_maven_deploy {
        tracing::info!("validating {MAVEN_SETTINGS_FILE}");
        if !ctx.path(MAVEN_SETTINGS_FILE).is_file() {
            return Err(ReleaseError::MissingMavenSettings.into());
        }
        tracing::info!("{MAVEN_SETTINGS_FILE} validation successful");
    }

    Ok(pom)
}
