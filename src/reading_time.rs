use crate::types::{ContentBlock, PostDetail};

/// Fixed reading speed the estimate is derived from.
pub const WORDS_PER_MINUTE: usize = 200;

/// Estimated reading time in whole minutes for a post's content blocks.
///
/// Each block's spans are flattened to plain text and words are counted by
/// whitespace splitting. The running total is rounded up after every block,
/// so a block never carries a fraction of a minute over into the next one.
/// Headings are not counted. Empty content yields 0; this never fails.
pub fn estimate(content: &[ContentBlock]) -> u32 {
    content.iter().fold(0, |total, block| {
        let words: usize = block
            .body
            .iter()
            .map(|span| span.text.split_whitespace().count())
            .sum();
        total + words.div_ceil(WORDS_PER_MINUTE) as u32
    })
}

impl PostDetail {
    /// Reading-time estimate for this post, in minutes.
    pub fn reading_time(&self) -> u32 {
        estimate(&self.content)
    }
}
