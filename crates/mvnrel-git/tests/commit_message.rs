use mvnrel_core::config::PluginConfig;
use mvnrel_git::commit_message;

#[test]
fn test_release_version_message() {
    let config = PluginConfig::default();
    assert_eq!(commit_message(&config, "1.2.3"), "1.2.3 [ci skip]");
}

#[test]
fn test_snapshot_version_message() {
    let config = PluginConfig::default();
    assert_eq!(
        commit_message(&config, "1.2.4-SNAPSHOT"),
        "Prepare next development iteration 1.2.4-SNAPSHOT [ci skip]"
    );
}

#[test]
fn test_disable_final_skip_ci_only_affects_release_commits() {
    let config = PluginConfig {
        disable_final_skip_ci: true,
        ..Default::default()
    };
    assert_eq!(commit_message(&config, "1.2.3"), "1.2.3");
    assert_eq!(
        commit_message(&config, "1.2.4-SNAPSHOT"),
        "Prepare next development iteration 1.2.4-SNAPSHOT [ci skip]"
    );
}

#[test]
fn test_disable_snapshot_skip_ci_only_affects_snapshot_commits() {
    let config = PluginConfig {
        disable_snapshot_skip_ci: true,
        ..Default::default()
    };
    assert_eq!(commit_message(&config, "1.2.3"), "1.2.3 [ci skip]");
    assert_eq!(
        commit_message(&config, "1.2.4-SNAPSHOT"),
        "Prepare next development iteration 1.2.4-SNAPSHOT"
    );
}
