use crate::ApiResponse;

use crud_core::UserStats;

#[test]
fn test_ok_envelope_omits_error() {
    let stats = UserStats {
        total: 5,
        male_count: 3,
        female_count: 2,
    };

    let json = serde_json::to_value(ApiResponse::ok("done", stats)).unwrap();

    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "done");
    assert_eq!(json["data"]["maleCount"], 3);
    assert!(json.get("error").is_none());
}

#[test]
fn test_failure_envelope_omits_data() {
    let json = serde_json::to_value(ApiResponse::failure("Failed", "boom")).unwrap();

    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "boom");
    assert!(json.get("data").is_none());
}
