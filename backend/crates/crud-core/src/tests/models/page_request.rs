use crate::{DEFAULT_LIMIT, DEFAULT_PAGE, PageRequest};

#[test]
fn test_page_request_defaults() {
    let request = PageRequest::default();

    assert_eq!(request.page, DEFAULT_PAGE);
    assert_eq!(request.limit, DEFAULT_LIMIT);
    assert_eq!(request.search, None);
    assert_eq!(request.offset(), 0);
}

#[test]
fn test_page_request_offset() {
    assert_eq!(PageRequest::new(2, 2, None).offset(), 2);
    assert_eq!(PageRequest::new(3, 10, None).offset(), 20);
}

#[test]
fn test_parse_falls_back_to_defaults_for_bad_values() {
    let request = PageRequest::parse(Some("abc"), Some("0"), None, 10, 100);

    assert_eq!(request.page, 1);
    assert_eq!(request.limit, 10);
}

#[test]
fn test_parse_rejects_negative_values() {
    let request = PageRequest::parse(Some("-3"), Some("-1"), None, 10, 100);

    assert_eq!(request.page, 1);
    assert_eq!(request.limit, 10);
}

#[test]
fn test_parse_clamps_limit() {
    let request = PageRequest::parse(Some("2"), Some("5000"), None, 10, 100);

    assert_eq!(request.page, 2);
    assert_eq!(request.limit, 100);
}

#[test]
fn test_blank_search_means_no_filter() {
    let request = PageRequest::parse(None, None, Some("   "), 10, 100);

    assert_eq!(request.search, None);
}

#[test]
fn test_search_is_trimmed() {
    let request = PageRequest::parse(None, None, Some("  oak "), 10, 100);

    assert_eq!(request.search.as_deref(), Some("oak"));
}
