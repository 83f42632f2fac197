use serde::{Deserialize, Serialize};

/// Normalized post summary as shown on a listing page.
/// Immutable once constructed; produced from a raw repository record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub uid: String,
    /// Display-ready publication date, already formatted for the fixed locale.
    pub published_at: String,
    pub title: String,
    pub subtitle: String,
    pub author: String,
}

/// Full post as shown on a detail page: summary fields plus banner and body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDetail {
    pub uid: String,
    pub published_at: String,
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub banner_url: String,
    pub content: Vec<ContentBlock>,
}

/// A titled section of a post body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub heading: String,
    pub body: Vec<TextSpan>,
}

/// Markup spans flattened to plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSpan {
    pub text: String,
}

/// One normalized page of listing results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPage {
    pub results: Vec<Post>,
    /// Opaque token for the next page; `None` when no further pages exist.
    pub next_cursor: Option<String>,
}

impl ListingPage {
    /// Uids of every post on this page, in source order. Used for path
    /// generation when the renderer pre-builds detail routes.
    pub fn uids(&self) -> Vec<&str> {
        self.results.iter().map(|post| post.uid.as_str()).collect()
    }
}

/// Client-visible listing state for cursor-based pagination.
///
/// `accumulated` is append-only within a session: pages are concatenated in
/// request order and prior entries are never removed or reordered. Duplicate
/// uids across pages are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingState {
    pub accumulated: Vec<Post>,
    pub cursor: Option<String>,
}

/// HTTP client settings for a repository-backed content source.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub follow_redirects: bool,
    pub max_redirects: usize,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            user_agent: "post-listing/0.1".to_string(),
            timeout_seconds: 30,
            follow_redirects: true,
            max_redirects: 5,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    #[error("pagination cursor is exhausted")]
    CursorExhausted,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to decode repository payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("malformed record {uid}: missing field `{field}`")]
    MalformedRecord { uid: String, field: &'static str },

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("record not found: {uid}")]
    RecordNotFound { uid: String },

    #[error("content source error: {0}")]
    Source(String),
}

pub type Result<T> = std::result::Result<T, ListingError>;
