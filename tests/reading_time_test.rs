use post_listing::reading_time::{estimate, WORDS_PER_MINUTE};
use post_listing::{ContentBlock, TextSpan};

fn words(count: usize) -> String {
    vec!["palavra"; count].join(" ")
}

fn block(word_count: usize) -> ContentBlock {
    ContentBlock {
        heading: "Section heading".to_string(),
        body: vec![TextSpan {
            text: words(word_count),
        }],
    }
}

#[test]
fn empty_content_is_zero_minutes() {
    assert_eq!(estimate(&[]), 0);
}

#[test]
fn exactly_one_reading_speed_of_words_is_one_minute() {
    assert_eq!(estimate(&[block(WORDS_PER_MINUTE)]), 1);
}

#[test]
fn one_word_over_rounds_up() {
    assert_eq!(estimate(&[block(WORDS_PER_MINUTE + 1)]), 2);
}

#[test]
fn rounding_is_applied_per_block() {
    // Two half-minute blocks round up to a minute each, not to one in total.
    assert_eq!(estimate(&[block(100), block(100)]), 2);
}

#[test]
fn spans_within_a_block_share_one_count() {
    let split = ContentBlock {
        heading: "Section heading".to_string(),
        body: vec![
            TextSpan { text: words(150) },
            TextSpan { text: words(150) },
        ],
    };
    assert_eq!(estimate(&[split]), 2);
}

#[test]
fn headings_are_not_counted() {
    let heading_only = ContentBlock {
        heading: words(500),
        body: Vec::new(),
    };
    assert_eq!(estimate(&[heading_only]), 0);
}

#[test]
fn adding_a_block_never_decreases_the_estimate() {
    let mut content = Vec::new();
    let mut previous = 0;

    for word_count in [0, 1, 73, 200, 201, 999] {
        content.push(block(word_count));
        let current = estimate(&content);
        assert!(current >= previous, "estimate must be monotonic");
        previous = current;
    }
}

#[test]
fn blank_spans_contribute_nothing() {
    let blank = ContentBlock {
        heading: String::new(),
        body: vec![
            TextSpan { text: String::new() },
            TextSpan { text: "   \n\t  ".to_string() },
        ],
    };
    assert_eq!(estimate(&[blank]), 0);
}
