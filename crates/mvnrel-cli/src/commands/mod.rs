//! Hook dispatch and handler modules.

mod prepare;
mod publish;
mod verify_conditions;
mod verify_release;

use std::path::PathBuf;

use miette::Result;
use mvnrel_core::config::PluginConfig;
use mvnrel_core::context::ReleaseContext;
use mvnrel_util::errors::ReleaseError;

use crate::cli::{Cli, Command, PluginOptions};

/// Route a parsed CLI invocation to the matching release hook.
pub async fn dispatch(cli: Cli) -> Result<()> {
    let cwd = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().map_err(ReleaseError::Io)?,
    };
    let config = load_config(cli.config, &cwd, cli.options)?;
    let ctx = ReleaseContext::new(cli.branch, cwd);
    tracing::debug!("resolved configuration: {config:?}");

    match cli.command {
        Command::VerifyConditions => verify_conditions::exec(&config, &ctx),
        Command::VerifyRelease {
            last_release,
            next_release,
        } => {
            let ctx = with_releases(ctx, last_release, next_release);
            verify_release::exec(&config, &ctx).await
        }
        Command::Prepare { next_release } => {
            prepare::exec(&config, &ctx.with_next_release(next_release))
        }
        Command::Publish { next_release } => {
            publish::exec(&config, &ctx.with_next_release(next_release))
        }
    }
}

/// The config file (explicit, or `<cwd>/.mvnrel.toml` if present) with
/// command-line options layered on top.
fn load_config(
    explicit: Option<PathBuf>,
    cwd: &std::path::Path,
    options: PluginOptions,
) -> Result<PluginConfig> {
    let mut config = match explicit {
        Some(path) => PluginConfig::load(&path)?,
        None => PluginConfig::load_from_dir(cwd)?,
    };

    config.skip_maven_deploy |= options.skip_maven_deploy;
    config.disable_snapshot_skip_ci |= options.disable_snapshot_skip_ci;
    config.disable_final_skip_ci |= options.disable_final_skip_ci;
    config.alternate_workflow |= options.alternate_workflow;
    if options.repository_url.is_some() {
        config.repository_url = options.repository_url;
    }
    if options.dev_branch.is_some() {
        config.dev_branch = options.dev_branch;
    }
    if options.additional_files_to_commit.is_some() {
        config.additional_files_to_commit = options.additional_files_to_commit;
    }
    Ok(config)
}

fn with_releases(
    mut ctx: ReleaseContext,
    last_release: Option<String>,
    next_release: Option<String>,
) -> ReleaseContext {
    if let Some(last) = last_release {
        ctx = ctx.with_last_release(last);
    }
    if let Some(next) = next_release {
        ctx = ctx.with_next_release(next);
    }
    ctx
}
