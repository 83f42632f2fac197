use post_listing::date_format::{display_date, display_date_abbrev};
use post_listing::schema::{RawListingPage, RawRecord};
use post_listing::{normalize, ListingError, Result};
use serde_json::json;

fn detail_record() -> RawRecord {
    serde_json::from_value(json!({
        "uid": "como-utilizar-hooks",
        "first_publication_date": "2021-03-15T19:25:28+0000",
        "data": {
            "title": "Como utilizar Hooks",
            "subtitle": "Pensando em sincronização em vez de ciclos de vida",
            "author": "Joseph Oliveira",
            "banner": { "url": "https://images.example.com/banner.png" },
            "content": [
                {
                    "heading": "Proin et varius",
                    "body": [
                        { "type": "paragraph", "text": "Lorem ipsum dolor sit amet", "spans": [] },
                        { "type": "paragraph", "text": "consectetur adipiscing elit", "spans": [] }
                    ]
                },
                {
                    "heading": "Cras laoreet mi",
                    "body": [
                        { "type": "paragraph", "text": "Nulla auctor sit amet quam vitae", "spans": [] }
                    ]
                }
            ]
        }
    }))
    .unwrap()
}

#[test]
fn detail_record_normalizes_with_banner_and_content() -> Result<()> {
    let detail = normalize::detail_from_record(&detail_record())?;

    assert_eq!(detail.uid, "como-utilizar-hooks");
    assert_eq!(detail.title, "Como utilizar Hooks");
    assert_eq!(detail.author, "Joseph Oliveira");
    assert_eq!(detail.banner_url, "https://images.example.com/banner.png");
    assert_eq!(detail.published_at, "15 de mar. de 2021");

    assert_eq!(detail.content.len(), 2);
    assert_eq!(detail.content[0].heading, "Proin et varius");
    assert_eq!(detail.content[0].body.len(), 2);
    assert_eq!(detail.content[0].body[1].text, "consectetur adipiscing elit");

    // Rounding happens per block, so each nonempty block costs a full minute.
    assert_eq!(detail.reading_time(), 2);

    Ok(())
}

#[test]
fn missing_banner_is_rejected_at_the_boundary() {
    let mut record = detail_record();
    record.data.banner = None;

    match normalize::detail_from_record(&record).unwrap_err() {
        ListingError::MalformedRecord { uid, field } => {
            assert_eq!(uid, "como-utilizar-hooks");
            assert_eq!(field, "data.banner");
        }
        other => panic!("expected MalformedRecord, got {other}"),
    }
}

#[test]
fn missing_uid_is_rejected_at_the_boundary() {
    let record: RawRecord = serde_json::from_value(json!({
        "first_publication_date": "2021-03-15T19:25:28+0000",
        "data": { "title": "t", "subtitle": "s", "author": "a" }
    }))
    .unwrap();

    assert!(matches!(
        normalize::post_from_record(&record).unwrap_err(),
        ListingError::MalformedRecord { field: "uid", .. }
    ));
}

#[test]
fn null_headings_and_span_text_flatten_to_empty() -> Result<()> {
    let record: RawRecord = serde_json::from_value(json!({
        "uid": "sem-titulos",
        "first_publication_date": "2021-03-15T19:25:28+0000",
        "data": {
            "title": "t", "subtitle": "s", "author": "a",
            "banner": { "url": "https://images.example.com/b.png" },
            "content": [
                { "heading": null, "body": [{ "type": "paragraph", "text": null, "spans": [] }] }
            ]
        }
    }))
    .unwrap();

    let detail = normalize::detail_from_record(&record)?;
    assert_eq!(detail.content[0].heading, "");
    assert_eq!(detail.content[0].body[0].text, "");
    assert_eq!(detail.reading_time(), 0);

    Ok(())
}

#[test]
fn listing_page_keeps_source_order_and_cursor() -> Result<()> {
    let raw: RawListingPage = serde_json::from_value(json!({
        "results": [
            {
                "uid": "primeiro",
                "first_publication_date": "2021-03-15T19:25:28+0000",
                "data": { "title": "Primeiro", "subtitle": "s1", "author": "a1" }
            },
            {
                "uid": "segundo",
                "first_publication_date": "2021-04-02T10:00:00+0000",
                "data": { "title": "Segundo", "subtitle": "s2", "author": "a2" }
            }
        ],
        "next_page": "https://repo.example.com/search?page=2"
    }))
    .unwrap();

    let page = normalize::listing_page(&raw)?;

    assert_eq!(page.uids(), vec!["primeiro", "segundo"]);
    assert_eq!(page.results[0].published_at, "15 de março de 2021");
    assert_eq!(page.results[1].published_at, "02 de abril de 2021");
    assert_eq!(
        page.next_cursor.as_deref(),
        Some("https://repo.example.com/search?page=2")
    );

    Ok(())
}

#[test]
fn display_dates_are_fixed_locale() {
    assert_eq!(display_date("2021-03-15T19:25:28+0000"), "15 de março de 2021");
    assert_eq!(display_date("2021-03-15T19:25:28+00:00"), "15 de março de 2021");
    assert_eq!(display_date("2021-12-01"), "01 de dezembro de 2021");
    assert_eq!(display_date_abbrev("2021-02-07T08:00:00+0000"), "07 de fev. de 2021");
}

#[test]
fn unparseable_dates_pass_through_verbatim() {
    assert_eq!(display_date("ontem"), "ontem");
    assert_eq!(display_date_abbrev(""), "");
}
