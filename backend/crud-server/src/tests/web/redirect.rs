use crate::web::redirect::{self, CREATED};

use axum::response::IntoResponse;
use http::{StatusCode, header};

#[test]
fn test_list_url_form_encodes_message() {
    assert_eq!(
        redirect::list_url("success", CREATED),
        "/users?success=User+created+successfully"
    );
    assert_eq!(
        redirect::list_url("error", "a&b=c"),
        "/users?error=a%26b%3Dc"
    );
}

#[test]
fn test_error_redirect_is_see_other() {
    let response = redirect::error(redirect::INVALID_ID).into_response();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers()[header::LOCATION],
        "/users?error=Invalid+user+ID"
    );
}
