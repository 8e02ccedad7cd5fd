mod common;

use std::fs;

use mvnrel_core::config::PluginConfig;
use mvnrel_core::context::ReleaseContext;
use mvnrel_ops::ops_verify_conditions::verify_conditions;
use mvnrel_util::errors::ReleaseError;
use tempfile::TempDir;

fn skip_deploy() -> PluginConfig {
    PluginConfig {
        skip_maven_deploy: true,
        ..Default::default()
    }
}

#[test]
fn test_valid_project_without_deploy() {
    let tmp = common::project("1.0.0");
    let ctx = ReleaseContext::new("main", tmp.path());
    let pom = verify_conditions(&skip_deploy(), &ctx).unwrap();
    assert_eq!(pom.coordinates(), "org.example:lib");
}

#[test]
fn test_missing_pom() {
    let tmp = TempDir::new().unwrap();
    let ctx = ReleaseContext::new("main", tmp.path());
    let report = verify_conditions(&skip_deploy(), &ctx).unwrap_err();
    assert!(matches!(
        report.downcast_ref::<ReleaseError>(),
        Some(ReleaseError::NoPomXml)
    ));
}

#[test]
fn test_deploy_requires_maven_settings() {
    let tmp = common::project("1.0.0");
    let ctx = ReleaseContext::new("main", tmp.path());
    let report = verify_conditions(&PluginConfig::default(), &ctx).unwrap_err();
    assert!(matches!(
        report.downcast_ref::<ReleaseError>(),
        Some(ReleaseError::MissingMavenSettings)
    ));

    fs::write(tmp.path().join("maven-settings.xml"), "<settings/>").unwrap();
    verify_conditions(&PluginConfig::default(), &ctx).unwrap();
}

#[test]
fn test_pom_problems_reported_before_settings() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("pom.xml"), "<project><version>1.0.0</version></project>").unwrap();
    let ctx = ReleaseContext::new("main", tmp.path());

    let report = verify_conditions(&PluginConfig::default(), &ctx).unwrap_err();
    match report.downcast_ref::<ReleaseError>() {
        Some(ReleaseError::InvalidPom { problems }) => assert_eq!(problems.len(), 2),
        other => panic!("unexpected error: {other:?}"),
    }
}
