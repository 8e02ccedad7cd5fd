//! End-to-end checks against real repositories: a bare "remote" and a clone
//! acting as the CI checkout.

use std::fs;
use std::path::Path;
use std::process::Command;

use mvnrel_core::config::PluginConfig;
use mvnrel_core::context::ReleaseContext;
use mvnrel_git::{StageOutcome, SystemGit, Vcs};
use tempfile::TempDir;

const IDENTITY: [(&str, &str); 4] = [
    ("GIT_AUTHOR_NAME", "Release Bot"),
    ("GIT_AUTHOR_EMAIL", "release@example.com"),
    ("GIT_COMMITTER_NAME", "Release Bot"),
    ("GIT_COMMITTER_EMAIL", "release@example.com"),
];

fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .envs(IDENTITY)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn pom(version: &str) -> String {
    format!(
        "<project><groupId>org.example</groupId><artifactId>lib</artifactId><version>{version}</version></project>\n"
    )
}

fn context(work: &Path) -> ReleaseContext {
    let mut ctx = ReleaseContext::new("main", work);
    for (k, v) in IDENTITY {
        ctx.env.insert(k.to_string(), v.to_string());
    }
    ctx
}

/// A bare remote with `main` and `dev`, and a clone of it with `main` checked out.
fn setup() -> (TempDir, std::path::PathBuf, std::path::PathBuf) {
    let tmp = TempDir::new().unwrap();
    let remote = tmp.path().join("remote.git");
    let work = tmp.path().join("work");
    fs::create_dir(&remote).unwrap();
    git(&remote, &["init", "--bare"]);
    git(tmp.path(), &["clone", "remote.git", "work"]);

    git(&work, &["checkout", "-b", "main"]);
    fs::write(work.join("pom.xml"), pom("1.0.0-SNAPSHOT")).unwrap();
    git(&work, &["add", "pom.xml"]);
    git(&work, &["commit", "-m", "initial"]);
    git(&work, &["push", "-u", "origin", "main"]);
    git(&work, &["push", "origin", "main:dev"]);

    (tmp, remote, work)
}

#[test]
fn test_add_reports_unmatched_pathspec() {
    let (_tmp, _remote, work) = setup();
    let repo = SystemGit::new(&context(&work));

    assert_eq!(repo.add(&["pom.xml"]).unwrap(), StageOutcome::Staged);
    assert_eq!(
        repo.add(&["*/pom.xml"]).unwrap(),
        StageOutcome::NothingMatched
    );
}

#[test]
fn test_commit_with_nothing_staged_fails() {
    let (_tmp, _remote, work) = setup();
    let repo = SystemGit::new(&context(&work));
    let err = repo.commit("1.0.0").unwrap_err();
    assert!(err.to_string().contains("git commit"), "got: {err}");
}

#[test]
fn test_commit_descriptor_changes_pushes_release_commit() {
    let (_tmp, remote, work) = setup();
    let ctx = context(&work);
    let config = PluginConfig {
        additional_files_to_commit: Some("CHANGELOG.md,missing.txt".to_string()),
        ..Default::default()
    };

    fs::write(work.join("pom.xml"), pom("1.0.0")).unwrap();
    fs::create_dir(work.join("core")).unwrap();
    fs::write(work.join("core/pom.xml"), pom("1.0.0")).unwrap();
    fs::write(work.join("CHANGELOG.md"), "# 1.0.0\n").unwrap();
    fs::write(work.join("untracked.txt"), "not part of the release").unwrap();

    SystemGit::new(&ctx)
        .commit_descriptor_changes(&config, &ctx, "1.0.0")
        .unwrap();

    assert_eq!(git(&remote, &["log", "-1", "--format=%s", "main"]), "1.0.0 [ci skip]");
    let files = git(&remote, &["show", "--name-only", "--format=", "main"]);
    let mut files: Vec<&str> = files.lines().collect();
    files.sort_unstable();
    assert_eq!(files, ["CHANGELOG.md", "core/pom.xml", "pom.xml"]);
}

#[test]
fn test_snapshot_bump_and_merge_into_dev() {
    let (_tmp, remote, work) = setup();
    let ctx = context(&work);
    let config = PluginConfig {
        dev_branch: Some("dev".to_string()),
        ..Default::default()
    };
    let repo = SystemGit::new(&ctx);

    repo.configure_for_multi_branch_push(&ctx).unwrap();

    fs::write(work.join("pom.xml"), pom("1.0.1-SNAPSHOT")).unwrap();
    repo.commit_descriptor_changes(&config, &ctx, "1.0.1-SNAPSHOT")
        .unwrap();
    repo.merge_branch_into_dev(&config, &ctx).unwrap();

    let expected = "Prepare next development iteration 1.0.1-SNAPSHOT [ci skip]";
    assert_eq!(git(&remote, &["log", "-1", "--format=%s", "main"]), expected);
    assert_eq!(git(&remote, &["log", "-1", "--format=%s", "dev"]), expected);
    assert_eq!(git(&work, &["rev-parse", "--abbrev-ref", "HEAD"]), "dev");
}

#[test]
fn test_merge_without_dev_branch_is_config_error() {
    let (_tmp, _remote, work) = setup();
    let ctx = context(&work);
    let err = SystemGit::new(&ctx)
        .merge_branch_into_dev(&PluginConfig::default(), &ctx)
        .unwrap_err();
    assert!(err.to_string().contains("dev-branch"), "got: {err}");
}
