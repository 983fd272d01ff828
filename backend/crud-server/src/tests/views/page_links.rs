use crate::views::PageLinks;

use crud_core::{PageRequest, Pagination};

#[test]
fn test_links_cover_every_page_and_keep_search() {
    let request = PageRequest::new(2, 2, Some("oak tree".to_string()));
    let pagination = Pagination::new(&request, 5);

    let links = PageLinks::new(&request, &pagination);

    assert_eq!(links.pages.len(), 3);
    assert_eq!(links.pages[1].href, "/users?page=2&limit=2&search=oak+tree");
    assert!(links.pages[1].current);
    assert!(!links.pages[0].current);
    assert_eq!(
        links.previous.as_deref(),
        Some("/users?page=1&limit=2&search=oak+tree")
    );
    assert_eq!(
        links.next.as_deref(),
        Some("/users?page=3&limit=2&search=oak+tree")
    );
}

#[test]
fn test_single_page_has_no_previous_or_next() {
    let request = PageRequest::default();
    let pagination = Pagination::new(&request, 3);

    let links = PageLinks::new(&request, &pagination);

    assert_eq!(links.pages.len(), 1);
    assert_eq!(links.previous, None);
    assert_eq!(links.next, None);
}

#[test]
fn test_empty_result_has_no_pages() {
    let request = PageRequest::default();
    let pagination = Pagination::new(&request, 0);

    let links = PageLinks::new(&request, &pagination);

    assert!(links.pages.is_empty());
}
