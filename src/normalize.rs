//! Boundary between raw repository payloads and the normalized types the rest
//! of the crate works with. Missing required fields fail fast here with
//! `MalformedRecord` instead of surfacing as an unrelated error downstream.

use crate::date_format;
use crate::schema::{RawBlock, RawListingPage, RawRecord};
use crate::types::{
    ContentBlock, ListingError, ListingPage, Post, PostDetail, Result, TextSpan,
};
use tracing::debug;

fn require<T>(field: Option<T>, uid: &str, name: &'static str) -> Result<T> {
    field.ok_or_else(|| ListingError::MalformedRecord {
        uid: uid.to_string(),
        field: name,
    })
}

fn record_uid(record: &RawRecord) -> Result<String> {
    record.uid.clone().ok_or(ListingError::MalformedRecord {
        uid: "<missing>".to_string(),
        field: "uid",
    })
}

/// Normalize a raw record into a listing summary.
pub fn post_from_record(record: &RawRecord) -> Result<Post> {
    let uid = record_uid(record)?;
    let title = require(record.data.title.clone(), &uid, "data.title")?;
    let subtitle = require(record.data.subtitle.clone(), &uid, "data.subtitle")?;
    let author = require(record.data.author.clone(), &uid, "data.author")?;
    let published = require(
        record.first_publication_date.clone(),
        &uid,
        "first_publication_date",
    )?;

    Ok(Post {
        uid,
        published_at: date_format::display_date(&published),
        title,
        subtitle,
        author,
    })
}

/// Normalize a raw record into a detail post, banner and content included.
/// Detail pages use the abbreviated date form.
pub fn detail_from_record(record: &RawRecord) -> Result<PostDetail> {
    let uid = record_uid(record)?;
    let title = require(record.data.title.clone(), &uid, "data.title")?;
    let subtitle = require(record.data.subtitle.clone(), &uid, "data.subtitle")?;
    let author = require(record.data.author.clone(), &uid, "data.author")?;
    let published = require(
        record.first_publication_date.clone(),
        &uid,
        "first_publication_date",
    )?;
    let banner = require(record.data.banner.clone(), &uid, "data.banner")?;
    let banner_url = require(banner.url, &uid, "data.banner.url")?;
    let blocks = require(record.data.content.as_deref(), &uid, "data.content")?;

    Ok(PostDetail {
        uid,
        published_at: date_format::display_date_abbrev(&published),
        title,
        subtitle,
        author,
        banner_url,
        content: blocks.iter().map(block_from_raw).collect(),
    })
}

// Headings and span text may be null in rich-text payloads; both flatten to
// empty strings rather than rejecting the record.
fn block_from_raw(block: &RawBlock) -> ContentBlock {
    ContentBlock {
        heading: block.heading.clone().unwrap_or_default(),
        body: block
            .body
            .iter()
            .map(|span| TextSpan {
                text: span.text.clone().unwrap_or_default(),
            })
            .collect(),
    }
}

/// Normalize a full raw page into a `ListingPage` of summaries.
/// Any malformed record rejects the whole page.
pub fn listing_page(raw: &RawListingPage) -> Result<ListingPage> {
    let mut results = Vec::with_capacity(raw.results.len());
    for record in &raw.results {
        results.push(post_from_record(record)?);
    }

    debug!(
        "Normalized page with {} records (next cursor: {:?})",
        results.len(),
        raw.next_page
    );

    Ok(ListingPage {
        results,
        next_cursor: raw.next_page.clone(),
    })
}
