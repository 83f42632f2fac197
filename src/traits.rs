use crate::schema::{RawListingPage, RawRecord};
use crate::types::Result;
use async_trait::async_trait;

/// Trait for pulling paginated post records from a content repository.
///
/// Implementations return raw payloads; normalization happens on the caller's
/// side of the boundary. Fetch failures propagate unmodified, with no retry.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch the first page of a listing for `post_type`, requesting the given
    /// fields and at most `page_size` records.
    async fn fetch_initial_page(
        &self,
        post_type: &str,
        fields: &[&str],
        page_size: usize,
    ) -> Result<RawListingPage>;

    /// Fetch the page identified by an opaque cursor taken from a previous
    /// page's `next_page`.
    async fn fetch_page(&self, cursor: &str) -> Result<RawListingPage>;

    /// Resolve a single record by its uid.
    async fn fetch_by_uid(&self, post_type: &str, uid: &str) -> Result<RawRecord>;
}
