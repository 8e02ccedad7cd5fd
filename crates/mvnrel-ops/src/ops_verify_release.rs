//! Operation: sanity-check the pom version against the release history.
//!
//! Git tags are the source of truth for versions. The pom is only allowed to
//! drift from the last tag by one patch step, and that is enforced only under
//! the alternate workflow. Maven Central is consulted for information but
//! never blocks a release.

use std::fmt;

use mvnrel_core::config::PluginConfig;
use mvnrel_core::context::ReleaseContext;
use mvnrel_core::version;
use mvnrel_maven::central::{search_term, Registry};
use mvnrel_maven::pom::{self, Pom};
use mvnrel_util::errors::ReleaseError;

/// A non-fatal finding from [`verify_release`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    InvalidPomVersion {
        pom_version: String,
    },
    PomDivergesFromLastRelease {
        pom_version: String,
        last_release_version: String,
    },
    PomAheadOfNextRelease {
        pom_version: String,
        next_release_version: String,
    },
    RegistryUnavailable {
        reason: String,
    },
    NotPublished {
        search_term: String,
    },
    InvalidPublishedVersion {
        published_version: String,
    },
    PublishedDivergesFromPom {
        published_version: String,
        pom_version: String,
    },
    PublishedDiffersFromLastRelease {
        published_version: String,
        last_release_version: String,
    },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::InvalidPomVersion { pom_version } => {
                write!(f, "pom.xml version of {pom_version} is an invalid semver version")
            }
            Advisory::PomDivergesFromLastRelease {
                pom_version,
                last_release_version,
            } => write!(
                f,
                "The pom.xml version of `{pom_version}` differs too much from last git tag version of `{last_release_version}`."
            ),
            Advisory::PomAheadOfNextRelease {
                pom_version,
                next_release_version,
            } => write!(
                f,
                "pom.xml version of {pom_version} is ahead of the next release version {next_release_version}"
            ),
            Advisory::RegistryUnavailable { reason } => {
                write!(f, "could not query maven central: {reason}")
            }
            Advisory::NotPublished { search_term } => {
                write!(f, "No version of package {search_term} found on maven central")
            }
            Advisory::InvalidPublishedVersion { published_version } => write!(
                f,
                "maven central version of {published_version} is an invalid semver version"
            ),
            Advisory::PublishedDivergesFromPom {
                published_version,
                pom_version,
            } => write!(
                f,
                "maven central version of {published_version} differs widely from pom version of {pom_version}"
            ),
            Advisory::PublishedDiffersFromLastRelease {
                published_version,
                last_release_version,
            } => write!(
                f,
                "maven central version of {published_version} differs from last version of {last_release_version} found in git history"
            ),
        }
    }
}

/// Compare the pom version with the last release, the next release and, when
/// deploying, what Maven Central has published.
///
/// Every advisory is logged as a warning as soon as it is found, and the
/// full list is returned. Fails only with
/// [`ReleaseError::VersionMismatch`] under the alternate workflow, or when
/// `pom.xml` cannot be read.
pub async fn verify_release<R: Registry>(
    config: &PluginConfig,
    ctx: &ReleaseContext,
    registry: &R,
) -> miette::Result<Vec<Advisory>> {
    crate::log_tool_version();

    let pom = pom::load_validated_pom(&ctx.cwd)?;
    let pom_version = pom.version().to_string();
    let mut advisories = Advisories::default();

    if !version::is_valid(&pom_version) {
        advisories.push(Advisory::InvalidPomVersion {
            pom_version: pom_version.clone(),
        });
    }

    match ctx.last_version() {
        Some(last) if !version::within_one_patch(last, &pom_version) => {
            if config.alternate_workflow {
                return Err(ReleaseError::VersionMismatch {
                    pom_version,
                    last_release_version: last.to_string(),
                }
                .into());
            }
            advisories.push(Advisory::PomDivergesFromLastRelease {
                pom_version: pom_version.clone(),
                last_release_version: last.to_string(),
            });
        }
        Some(_) => {}
        None => tracing::info!("no previous release; skipping pom.xml version drift check"),
    }

    if let Some(next) = &ctx.next_release {
        if version::is_ahead_of(&pom_version, &next.version) {
            advisories.push(Advisory::PomAheadOfNextRelease {
                pom_version: pom_version.clone(),
                next_release_version: next.version.clone(),
            });
        }
    }

    if !config.skip_maven_deploy {
        check_published_version(ctx, registry, &pom, &mut advisories).await;
    }

    Ok(advisories.0)
}

/// Advisories found so far; each is logged as a warning when recorded.
#[derive(Default)]
struct Advisories(Vec<Advisory>);

impl Advisories {
    fn push(&mut self, advisory: Advisory) {
        tracing::warn!("{advisory}");
        self.0.push(advisory);
    }
}

async fn check_published_version<R: Registry>(
    ctx: &ReleaseContext,
    registry: &R,
    pom: &Pom,
    advisories: &mut Advisories,
) {
    let group_id = pom.group_id.as_deref().unwrap_or_default();
    let artifact_id = pom.artifact_id.as_deref().unwrap_or_default();
    let pom_version = pom.version();

    let published = match registry
        .latest_published_version(group_id, artifact_id)
        .await
    {
        Ok(Some(published)) => published,
        Ok(None) => {
            advisories.push(Advisory::NotPublished {
                search_term: search_term(group_id, artifact_id),
            });
            return;
        }
        Err(e) => {
            advisories.push(Advisory::RegistryUnavailable {
                reason: e.to_string(),
            });
            return;
        }
    };

    if !version::is_valid(&published) {
        advisories.push(Advisory::InvalidPublishedVersion {
            published_version: published.clone(),
        });
    }
    if version::next_patch(&published) != version::next_patch(pom_version) {
        advisories.push(Advisory::PublishedDivergesFromPom {
            published_version: published.clone(),
            pom_version: pom_version.to_string(),
        });
    }
    if let Some(last) = ctx.last_version() {
        if last != published {
            advisories.push(Advisory::PublishedDiffersFromLastRelease {
                published_version: published,
                last_release_version: last.to_string(),
            });
        }
    }
}
