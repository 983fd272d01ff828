use crate::web::id_param::{IdQuery, parse_id, resolve_id};

#[test]
fn test_parse_id_accepts_positive_integers() {
    assert_eq!(parse_id(Some("42")), Some(42));
    assert_eq!(parse_id(Some(" 7 ")), Some(7));
}

#[test]
fn test_parse_id_rejects_garbage() {
    assert_eq!(parse_id(None), None);
    assert_eq!(parse_id(Some("")), None);
    assert_eq!(parse_id(Some("abc")), None);
    assert_eq!(parse_id(Some("0")), None);
    assert_eq!(parse_id(Some("-3")), None);
    assert_eq!(parse_id(Some("1.5")), None);
}

#[test]
fn test_resolve_id_falls_back_to_query() {
    let query = IdQuery {
        id: Some("9".to_string()),
    };

    assert_eq!(resolve_id(Some("5"), &query), Some(5));
    assert_eq!(resolve_id(Some("x"), &query), Some(9));
    assert_eq!(resolve_id(None, &query), Some(9));
    assert_eq!(resolve_id(None, &IdQuery::default()), None);
}
