//! `ContentSource` backed by a Prismic-style repository REST API.

use crate::schema::{RawListingPage, RawQueryResponse, RawRecord};
use crate::traits::ContentSource;
use crate::types::{ListingError, Result, SourceConfig};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

/// HTTP client for a headless content repository exposing the Prismic v2 API.
///
/// Each query resolves the current master ref first, then runs a document
/// search against it. The `next_page` URL returned by the repository is the
/// cursor handed back to `fetch_page`. No retries: failures propagate to the
/// caller.
pub struct PrismicSource {
    client: Client,
    api_url: String,
}

#[derive(Debug, Deserialize)]
struct ApiInfo {
    refs: Vec<ApiRef>,
}

#[derive(Debug, Deserialize)]
struct ApiRef {
    #[serde(rename = "ref")]
    reference: String,
    #[serde(rename = "isMasterRef", default)]
    is_master_ref: bool,
}

impl PrismicSource {
    /// `api_url` is the repository API root, e.g.
    /// `https://<repo>.cdn.prismic.io/api/v2`.
    pub fn new(api_url: impl Into<String>, config: SourceConfig) -> Result<Self> {
        let redirect_policy = if config.follow_redirects {
            reqwest::redirect::Policy::limited(config.max_redirects)
        } else {
            reqwest::redirect::Policy::none()
        };

        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .gzip(true)
            .redirect(redirect_policy)
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.into(),
        })
    }

    async fn master_ref(&self) -> Result<String> {
        debug!("Resolving master ref from {}", self.api_url);

        let info: ApiInfo = self
            .client
            .get(&self.api_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        info.refs
            .into_iter()
            .find(|r| r.is_master_ref)
            .map(|r| r.reference)
            .ok_or_else(|| ListingError::Source("repository exposes no master ref".to_string()))
    }

    fn search_url(&self, master_ref: &str) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/documents/search", self.api_url))?;
        url.query_pairs_mut().append_pair("ref", master_ref);
        Ok(url)
    }

    async fn run_query(&self, url: Url) -> Result<RawQueryResponse> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!("Repository query failed with {}: {}", status, url);
            return Err(ListingError::Source(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl ContentSource for PrismicSource {
    async fn fetch_initial_page(
        &self,
        post_type: &str,
        fields: &[&str],
        page_size: usize,
    ) -> Result<RawListingPage> {
        let master_ref = self.master_ref().await?;
        let mut url = self.search_url(&master_ref)?;
        url.query_pairs_mut()
            .append_pair("q", &format!("[[at(document.type,\"{}\")]]", post_type))
            .append_pair("pageSize", &page_size.to_string());
        if !fields.is_empty() {
            url.query_pairs_mut().append_pair("fetch", &fields.join(","));
        }

        info!(
            "Fetching initial {} listing (page size {})",
            post_type, page_size
        );

        let response = self.run_query(url).await?;
        Ok(response.into())
    }

    async fn fetch_page(&self, cursor: &str) -> Result<RawListingPage> {
        // The repository hands back an absolute next-page URL as the cursor.
        let url = Url::parse(cursor)?;

        debug!("Fetching next page: {}", cursor);

        let response = self.run_query(url).await?;
        Ok(response.into())
    }

    async fn fetch_by_uid(&self, post_type: &str, uid: &str) -> Result<RawRecord> {
        let master_ref = self.master_ref().await?;
        let mut url = self.search_url(&master_ref)?;
        url.query_pairs_mut()
            .append_pair("q", &format!("[[at(my.{}.uid,\"{}\")]]", post_type, uid))
            .append_pair("pageSize", "1");

        debug!("Fetching {} record by uid: {}", post_type, uid);

        let response = self.run_query(url).await?;
        response
            .results
            .into_iter()
            .next()
            .ok_or_else(|| ListingError::RecordNotFound {
                uid: uid.to_string(),
            })
    }
}
