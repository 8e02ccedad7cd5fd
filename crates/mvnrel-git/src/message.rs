use mvnrel_core::config::PluginConfig;
use mvnrel_core::version::is_snapshot;

/// Marker that tells CI not to build the commit it appears in.
pub const SKIP_CI_MARKER: &str = "[ci skip]";

/// Commit message for a version bump of `pom.xml`.
///
/// Snapshot versions read `Prepare next development iteration <version>`,
/// release versions are just the version. Either gets ` [ci skip]` appended
/// unless the matching `disable-*-skip-ci` option is set.
pub fn commit_message(config: &PluginConfig, version: &str) -> String {
    let (mut message, skip_ci) = if is_snapshot(version) {
        (
            format!("Prepare next development iteration {version}"),
            !config.disable_snapshot_skip_ci,
        )
    } else {
        (version.to_string(), !config.disable_final_skip_ci)
    };
    if skip_ci {
        message.push(' ');
        message.push_str(SKIP_CI_MARKER);
    }
    message
}
