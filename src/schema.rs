//! Raw payload shapes returned by the content repository, decoded with serde
//! before any field is trusted. Required fields stay `Option` here; the
//! normalize step decides what is actually mandatory.

use serde::Deserialize;
use serde_json::Value;

/// Envelope returned by the repository's document search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RawQueryResponse {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub results_per_page: u32,
    #[serde(default)]
    pub results_size: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub next_page: Option<String>,
    #[serde(default)]
    pub results: Vec<RawRecord>,
}

/// The slice of the envelope the merger cares about: records plus the
/// next-page cursor.
#[derive(Debug, Clone, Deserialize)]
pub struct RawListingPage {
    #[serde(default)]
    pub results: Vec<RawRecord>,
    #[serde(default)]
    pub next_page: Option<String>,
}

impl From<RawQueryResponse> for RawListingPage {
    fn from(response: RawQueryResponse) -> Self {
        Self {
            results: response.results,
            next_page: response.next_page,
        }
    }
}

/// One raw document record.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    pub uid: Option<String>,
    pub first_publication_date: Option<String>,
    #[serde(default)]
    pub data: RawData,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawData {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub author: Option<String>,
    pub banner: Option<RawBanner>,
    pub content: Option<Vec<RawBlock>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawBanner {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawBlock {
    pub heading: Option<String>,
    #[serde(default)]
    pub body: Vec<RawSpan>,
}

/// A rich-text span. Only `text` survives normalization; `type` and `spans`
/// carry markup we flatten away.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSpan {
    #[serde(rename = "type")]
    pub span_type: Option<String>,
    pub text: Option<String>,
    #[serde(default)]
    pub spans: Vec<Value>,
}
