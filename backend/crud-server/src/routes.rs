use crate::AppState;
use crate::{api, web};

use axum::{
    Router,
    routing::{get, post},
};
use log::info;
use tower_http::cors::{Any, CorsLayer};

/// Method, path and description of every public route, logged at startup
pub const ROUTE_SUMMARY: &[(&str, &str, &str)] = &[
    ("GET", "/", "Home page"),
    ("GET", "/crud", "Create user form"),
    ("POST", "/post-crud", "Create user"),
    ("GET", "/users", "List all users"),
    ("GET", "/edit-user/{id}", "Edit user form"),
    ("POST", "/put-crud", "Update user"),
    ("GET", "/delete-user/{id}", "Delete user"),
    ("GET", "/api/users", "API: Get users"),
    ("GET", "/api/users/stats", "API: User statistics"),
];

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/users", get(api::users::users::list_users))
        .route("/users/stats", get(api::users::users::user_stats))
        // JSON API may be called from any origin
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    Router::new()
        // Pages
        .route("/", get(web::pages::home))
        .route("/crud", get(web::users::create_form))
        .route("/post-crud", post(web::users::create_user))
        .route("/users", get(web::users::list_users))
        .route("/edit-user", get(web::users::edit_form))
        .route("/edit-user/{id}", get(web::users::edit_form_by_path))
        .route("/put-crud", post(web::users::update_user))
        .route("/delete-user", get(web::users::delete_user))
        .route("/delete-user/{id}", get(web::users::delete_user_by_path))
        // Assets
        .route("/static/app.css", get(web::assets::stylesheet))
        // JSON API
        .nest("/api", api_routes)
        .fallback(web::pages::not_found)
        // Add shared state
        .with_state(state)
}

pub fn log_routes() {
    info!("Available routes:");
    for (method, path, description) in ROUTE_SUMMARY {
        info!("  {:<5}{:<20} - {}", method, path, description);
    }
}
