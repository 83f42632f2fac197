//! Pagination state and its transitions.
//!
//! Two modes share one contract. Cursor mode re-fetches: every "load more"
//! issues exactly one request through the [`ContentSource`] and appends the
//! returned page. Reveal mode fetches everything once up front and "load more"
//! only widens an index threshold, with no further I/O. State values are
//! single-owner and transitions return new values; a failed fetch leaves the
//! input state untouched.

use crate::normalize;
use crate::traits::ContentSource;
use crate::types::{ListingError, ListingPage, ListingState, Post, Result};
use tracing::{debug, info};

/// Seed listing state from the first, already-fetched page. No I/O.
pub fn initialize(page: ListingPage) -> ListingState {
    ListingState {
        accumulated: page.results,
        cursor: page.next_cursor,
    }
}

/// Fetch the next page through `source` and append it to the accumulated list.
///
/// Errors with [`ListingError::CursorExhausted`] when no cursor is left;
/// callers are expected to gate the triggering affordance on
/// [`ListingState::cursor`] being present rather than relying on the error.
/// Existing order is preserved and new posts are appended in source order.
/// No deduplication is performed.
pub async fn load_next(state: &ListingState, source: &dyn ContentSource) -> Result<ListingState> {
    let cursor = state
        .cursor
        .as_deref()
        .ok_or(ListingError::CursorExhausted)?;

    debug!("Loading next page with cursor: {}", cursor);

    let raw = source.fetch_page(cursor).await?;
    let page = normalize::listing_page(&raw)?;

    let mut accumulated = state.accumulated.clone();
    accumulated.extend(page.results);

    info!(
        "Appended page: {} posts accumulated, next cursor: {:?}",
        accumulated.len(),
        page.next_cursor
    );

    Ok(ListingState {
        accumulated,
        cursor: page.next_cursor,
    })
}

/// Pagination state for the reveal variant: all posts are held in memory and a
/// threshold index decides which are visible (`index < threshold`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealWindow {
    posts: Vec<Post>,
    threshold: usize,
}

impl RevealWindow {
    pub fn new(posts: Vec<Post>, initial_threshold: usize) -> Self {
        let threshold = initial_threshold.min(posts.len());
        Self { posts, threshold }
    }

    /// Posts currently visible, in source order.
    pub fn visible(&self) -> &[Post] {
        &self.posts[..self.threshold]
    }

    pub fn hidden_count(&self) -> usize {
        self.posts.len() - self.threshold
    }

    pub fn is_exhausted(&self) -> bool {
        self.threshold >= self.posts.len()
    }

    /// Advance the threshold by `step`, clamped to the post count. Pure; never
    /// performs I/O.
    pub fn reveal(&self, step: usize) -> RevealWindow {
        RevealWindow {
            posts: self.posts.clone(),
            threshold: (self.threshold + step).min(self.posts.len()),
        }
    }

    /// Make every post visible at once.
    pub fn reveal_all(&self) -> RevealWindow {
        self.reveal(self.hidden_count())
    }
}

/// Listing configuration. `exhaustive_initial_fetch` selects the reveal
/// variant: the initial fetch is sized to cover every record (via `page_size`)
/// and later "load more" calls never touch the source again.
#[derive(Debug, Clone)]
pub struct ListingConfig {
    pub post_type: String,
    pub fields: Vec<String>,
    pub page_size: usize,
    pub exhaustive_initial_fetch: bool,
    /// Reveal mode: posts visible before the first "load more".
    pub initial_threshold: usize,
    /// Reveal mode: posts uncovered per "load more".
    pub reveal_step: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            post_type: "post".to_string(),
            fields: vec![
                "post.title".to_string(),
                "post.subtitle".to_string(),
                "post.author".to_string(),
            ],
            page_size: 20,
            exhaustive_initial_fetch: false,
            initial_threshold: 5,
            reveal_step: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Pagination {
    Cursor(ListingState),
    Reveal(RevealWindow),
}

/// One caller-facing contract over both pagination modes.
#[derive(Debug, Clone)]
pub struct PostListing {
    config: ListingConfig,
    pagination: Pagination,
}

impl PostListing {
    /// Perform the initial fetch and seed pagination state per `config`.
    pub async fn open(config: ListingConfig, source: &dyn ContentSource) -> Result<Self> {
        let fields: Vec<&str> = config.fields.iter().map(String::as_str).collect();

        info!(
            "Opening {} listing (page size {}, exhaustive: {})",
            config.post_type, config.page_size, config.exhaustive_initial_fetch
        );

        let raw = source
            .fetch_initial_page(&config.post_type, &fields, config.page_size)
            .await?;
        let page = normalize::listing_page(&raw)?;

        let pagination = if config.exhaustive_initial_fetch {
            Pagination::Reveal(RevealWindow::new(page.results, config.initial_threshold))
        } else {
            Pagination::Cursor(initialize(page))
        };

        Ok(Self { config, pagination })
    }

    /// Posts the renderer should currently show.
    pub fn visible(&self) -> &[Post] {
        match &self.pagination {
            Pagination::Cursor(state) => &state.accumulated,
            Pagination::Reveal(window) => window.visible(),
        }
    }

    /// Whether another `load_more` is available. The UI gates its "load more"
    /// affordance on this.
    pub fn has_more(&self) -> bool {
        match &self.pagination {
            Pagination::Cursor(state) => state.cursor.is_some(),
            Pagination::Reveal(window) => !window.is_exhausted(),
        }
    }

    /// Advance pagination: one fetch in cursor mode, a pure threshold advance
    /// in reveal mode. On failure the listing is left exactly as it was.
    pub async fn load_more(&mut self, source: &dyn ContentSource) -> Result<()> {
        match &self.pagination {
            Pagination::Cursor(state) => {
                let next = load_next(state, source).await?;
                self.pagination = Pagination::Cursor(next);
            }
            Pagination::Reveal(window) => {
                if window.is_exhausted() {
                    return Err(ListingError::CursorExhausted);
                }
                self.pagination = Pagination::Reveal(window.reveal(self.config.reveal_step));
            }
        }
        Ok(())
    }
}
