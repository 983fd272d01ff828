use crate::{PageRequest, Pagination};

#[test]
fn test_total_pages_rounds_up() {
    let pagination = Pagination::new(&PageRequest::new(1, 2, None), 5);

    assert_eq!(pagination.total_pages, 3);
    assert!(pagination.has_next());
    assert!(!pagination.has_previous());
}

#[test]
fn test_empty_result_has_zero_pages() {
    let pagination = Pagination::new(&PageRequest::default(), 0);

    assert_eq!(pagination.total_pages, 0);
    assert!(!pagination.has_next());
}

#[test]
fn test_last_page_has_no_next() {
    let pagination = Pagination::new(&PageRequest::new(3, 2, None), 5);

    assert!(!pagination.has_next());
    assert!(pagination.has_previous());
}

#[test]
fn test_serializes_camel_case() {
    let pagination = Pagination::new(&PageRequest::new(1, 10, None), 11);
    let json = serde_json::to_value(pagination).unwrap();

    assert_eq!(json["totalPages"], 2);
    assert_eq!(json["total"], 11);
}
