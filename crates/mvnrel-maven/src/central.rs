//! Maven Central search: the latest published version of a project.
//!
//! Only used for advisory checks, so "not found" is an ordinary answer
//! rather than an error.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use mvnrel_util::errors::ReleaseError;

/// Maven Central's Solr search endpoint.
pub const CENTRAL_SEARCH_URL: &str = "https://search.maven.org/solrsearch/select";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const SEARCH_ROWS: u32 = 20;

/// Somewhere published versions of a project can be looked up.
pub trait Registry {
    /// The latest version published for `group:artifact`, or `None` if the
    /// registry has no match.
    fn latest_published_version(
        &self,
        group_id: &str,
        artifact_id: &str,
    ) -> impl Future<Output = miette::Result<Option<String>>> + Send;
}

#[derive(Debug, Default, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    docs: Vec<SearchDoc>,
    #[serde(default)]
    response: Option<SearchResults>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchResults {
    #[serde(default)]
    docs: Vec<SearchDoc>,
}

#[derive(Debug, Deserialize)]
struct SearchDoc {
    #[serde(rename = "latestVersion")]
    latest_version: Option<String>,
}

/// The search term for a project: `groupId.artifactId`.
pub fn search_term(group_id: &str, artifact_id: &str) -> String {
    format!("{group_id}.{artifact_id}")
}

/// Extract the first hit's `latestVersion` from a search response body.
///
/// Hits are read from a top-level `docs` array or from `response.docs`.
pub fn parse_search_response(body: &str) -> Result<Option<String>, ReleaseError> {
    let parsed: SearchResponse =
        serde_json::from_str(body).map_err(|e| ReleaseError::Network {
            message: format!("Unexpected search response from Maven Central: {e}"),
        })?;
    let docs = if parsed.docs.is_empty() {
        parsed.response.map(|r| r.docs).unwrap_or_default()
    } else {
        parsed.docs
    };
    Ok(docs.into_iter().next().and_then(|d| d.latest_version))
}

/// Client for the Maven Central search API.
#[derive(Debug, Clone)]
pub struct CentralSearch {
    client: Client,
    base_url: String,
}

impl CentralSearch {
    /// A client for the public Maven Central search service.
    pub fn new() -> miette::Result<Self> {
        Self::with_base_url(CENTRAL_SEARCH_URL)
    }

    /// A client for a search service at `base_url` (a mirror, or a test server).
    pub fn with_base_url(base_url: impl Into<String>) -> miette::Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("mvnrel/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ReleaseError::Network {
                message: format!("Failed to create HTTP client: {e}"),
            })?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    async fn search(&self, term: &str) -> miette::Result<Option<String>> {
        let rows = SEARCH_ROWS.to_string();
        let resp = self
            .client
            .get(&self.base_url)
            .query(&[("q", term), ("rows", rows.as_str()), ("wt", "json")])
            .send()
            .await
            .map_err(|e| ReleaseError::Network {
                message: format!("Request to {} failed: {e}", self.base_url),
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ReleaseError::Network {
                message: format!("HTTP {status} searching {} for {term}", self.base_url),
            }
            .into());
        }

        let body = resp.text().await.map_err(|e| ReleaseError::Network {
            message: format!("Failed to read response from {}: {e}", self.base_url),
        })?;
        Ok(parse_search_response(&body)?)
    }
}

impl Registry for CentralSearch {
    async fn latest_published_version(
        &self,
        group_id: &str,
        artifact_id: &str,
    ) -> miette::Result<Option<String>> {
        let term = search_term(group_id, artifact_id);
        tracing::info!("searching maven central for term {term}");
        let latest = self.search(&term).await?;
        if latest.is_none() {
            tracing::info!("No version of package {term} found on maven central");
        }
        Ok(latest)
    }
}
