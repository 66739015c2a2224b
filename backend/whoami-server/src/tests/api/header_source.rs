use crate::HeaderSource;

use whoami_core::AttributeSource;

use http::{HeaderMap, HeaderValue};

#[test]
fn given_header_when_read_with_other_case_then_found() {
    let mut headers = HeaderMap::new();
    headers.insert("unique-id", HeaderValue::from_static("bar"));
    headers.insert("eppn", HeaderValue::from_static("foo@example.org"));

    let source = HeaderSource::new(&headers);

    assert_eq!(source.get("Unique-Id"), Some("bar"));
    assert_eq!(source.get("Eppn"), Some("foo@example.org"));
}

#[test]
fn given_repeated_header_when_read_then_first_value_used() {
    let mut headers = HeaderMap::new();
    headers.append("Mail", HeaderValue::from_static("first@example.org"));
    headers.append("Mail", HeaderValue::from_static("second@example.org"));

    let source = HeaderSource::new(&headers);

    assert_eq!(source.get("Mail"), Some("first@example.org"));
}

#[test]
fn given_missing_or_invalid_name_when_read_then_absent() {
    let headers = HeaderMap::new();

    let source = HeaderSource::new(&headers);

    assert_eq!(source.get("Displayname"), None);
    assert_eq!(source.get("not a header"), None);
}

#[test]
fn given_utf8_value_when_read_then_decoded() {
    let mut headers = HeaderMap::new();
    headers.insert(
        "Displayname",
        HeaderValue::from_bytes("Zoë".as_bytes()).unwrap(),
    );

    let source = HeaderSource::new(&headers);

    assert_eq!(source.get("Displayname"), Some("Zoë"));
}
