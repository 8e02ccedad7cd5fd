use mvnrel_core::config::{PluginConfig, CONFIG_FILE, DEFAULT_REMOTE};

#[test]
fn test_default_config_deploys_without_workflow() {
    let config = PluginConfig::default();
    assert!(!config.skip_maven_deploy);
    assert!(!config.alternate_workflow);
    assert!(config.dev_branch().is_none());
    assert!(config.additional_files().is_empty());
}

#[test]
fn test_parse_kebab_case_toml() {
    let toml = r#"
skip-maven-deploy = true
repository-url = "https://github.com/example/lib.git"
disable-snapshot-skip-ci = true
alternate-workflow = true
dev-branch = "dev"
additional-files-to-commit = "CHANGELOG.md, docs/version.txt"
"#;
    let config = PluginConfig::from_toml_str(toml).unwrap();
    assert!(config.skip_maven_deploy);
    assert!(config.disable_snapshot_skip_ci);
    assert!(!config.disable_final_skip_ci);
    assert!(config.alternate_workflow);
    assert_eq!(config.dev_branch(), Some("dev"));
    assert_eq!(config.push_remote(), "https://github.com/example/lib.git");
    assert_eq!(
        config.additional_files(),
        vec!["CHANGELOG.md".to_string(), "docs/version.txt".to_string()]
    );
}

#[test]
fn test_parse_camel_case_aliases() {
    let toml = r#"
skipMavenDeploy = true
useConveyalWorkflow = true
devBranch = "develop"
disableFinalSkipCi = true
"#;
    let config = PluginConfig::from_toml_str(toml).unwrap();
    assert!(config.skip_maven_deploy);
    assert!(config.alternate_workflow);
    assert!(config.disable_final_skip_ci);
    assert_eq!(config.dev_branch(), Some("develop"));
}

#[test]
fn test_push_remote_falls_back_to_origin() {
    let mut config = PluginConfig::default();
    assert_eq!(config.push_remote(), DEFAULT_REMOTE);
    config.repository_url = Some(String::new());
    assert_eq!(config.push_remote(), DEFAULT_REMOTE);
}

#[test]
fn test_empty_dev_branch_counts_as_unset() {
    let config = PluginConfig {
        dev_branch: Some(String::new()),
        ..Default::default()
    };
    assert!(config.dev_branch().is_none());
}

#[test]
fn test_additional_files_ignore_blank_entries() {
    let config = PluginConfig {
        additional_files_to_commit: Some(" ,a.txt,, b.txt ,".to_string()),
        ..Default::default()
    };
    assert_eq!(config.additional_files(), vec!["a.txt", "b.txt"]);
}

#[test]
fn test_invalid_toml_is_config_error() {
    let err = PluginConfig::from_toml_str("skip-maven-deploy = \"yes\"").unwrap_err();
    assert!(err.to_string().contains("Configuration error"), "got: {err}");
}

#[test]
fn test_load_from_dir() {
    let tmp = tempfile::TempDir::new().unwrap();
    assert_eq!(
        PluginConfig::load_from_dir(tmp.path()).unwrap(),
        PluginConfig::default()
    );

    std::fs::write(tmp.path().join(CONFIG_FILE), "alternate-workflow = true\n").unwrap();
    let config = PluginConfig::load_from_dir(tmp.path()).unwrap();
    assert!(config.alternate_workflow);
}
