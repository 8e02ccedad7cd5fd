//! Recording stand-ins for Maven, git and Maven Central.

#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::rc::Rc;
use std::sync::Mutex;

use mvnrel_core::config::PluginConfig;
use mvnrel_core::context::ReleaseContext;
use mvnrel_git::Vcs;
use mvnrel_maven::central::Registry;
use mvnrel_maven::mvn::BuildTool;
use mvnrel_util::errors::ReleaseError;
use tempfile::TempDir;

/// Ordered log of every build and git step, shared by the fakes.
pub type Journal = Rc<RefCell<Vec<String>>>;

pub fn journal() -> Journal {
    Rc::new(RefCell::new(Vec::new()))
}

pub struct FakeBuild {
    pub journal: Journal,
    pub fail_deploy: bool,
}

impl FakeBuild {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            fail_deploy: false,
        }
    }
}

impl BuildTool for FakeBuild {
    fn set_version(&self, version: &str) -> miette::Result<()> {
        self.journal
            .borrow_mut()
            .push(format!("mvn set-version {version}"));
        Ok(())
    }

    fn package(&self) -> miette::Result<()> {
        self.journal.borrow_mut().push("mvn package".to_string());
        Ok(())
    }

    fn deploy(&self, version: &str) -> miette::Result<()> {
        self.journal
            .borrow_mut()
            .push(format!("mvn deploy {version}"));
        if self.fail_deploy {
            return Err(ReleaseError::DeployFailed.into());
        }
        Ok(())
    }
}

pub struct FakeVcs {
    pub journal: Journal,
}

impl FakeVcs {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
        }
    }
}

impl Vcs for FakeVcs {
    fn configure_for_multi_branch_push(&self, ctx: &ReleaseContext) -> miette::Result<()> {
        self.journal
            .borrow_mut()
            .push(format!("git configure {}", ctx.branch));
        Ok(())
    }

    fn commit_descriptor_changes(
        &self,
        config: &PluginConfig,
        ctx: &ReleaseContext,
        version: &str,
    ) -> miette::Result<()> {
        self.journal.borrow_mut().push(format!(
            "git commit '{}' -> {}",
            mvnrel_git::commit_message(config, version),
            ctx.branch
        ));
        Ok(())
    }

    fn merge_branch_into_dev(
        &self,
        config: &PluginConfig,
        ctx: &ReleaseContext,
    ) -> miette::Result<()> {
        self.journal.borrow_mut().push(format!(
            "git merge {} -> {}",
            ctx.branch,
            config.dev_branch().unwrap_or("<unset>")
        ));
        Ok(())
    }
}

/// A registry that answers every query with a fixed result.
pub struct FakeRegistry {
    pub latest: Result<Option<String>, String>,
    pub queries: Mutex<Vec<String>>,
}

impl FakeRegistry {
    pub fn published(version: &str) -> Self {
        Self {
            latest: Ok(Some(version.to_string())),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self {
            latest: Ok(None),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            latest: Err("connection refused".to_string()),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn query_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

impl Registry for FakeRegistry {
    async fn latest_published_version(
        &self,
        group_id: &str,
        artifact_id: &str,
    ) -> miette::Result<Option<String>> {
        self.queries
            .lock()
            .unwrap()
            .push(format!("{group_id}:{artifact_id}"));
        match &self.latest {
            Ok(latest) => Ok(latest.clone()),
            Err(message) => Err(ReleaseError::Network {
                message: message.clone(),
            }
            .into()),
        }
    }
}

/// A project directory containing a `pom.xml` at `version`.
pub fn project(version: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("pom.xml"),
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
    <modelVersion>4.0.0</modelVersion>
    <groupId>org.example</groupId>
    <artifactId>lib</artifactId>
    <version>{version}</version>
</project>
"#
        ),
    )
    .unwrap();
    tmp
}
