//! User REST API handlers
//!
//! Read-only: listing and statistics.

use crate::AppState;
use crate::api::envelope::ApiResponse;
use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::users::{
    list_users_query::{ListUsersQuery, lenient_query},
    user_dto::UserDto,
    user_list_data::UserListData,
};

use crud_core::{Pagination, UserStats};

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/users?page=&limit=&search=
pub async fn list_users(
    State(state): State<AppState>,
    query: Result<Query<ListUsersQuery>, QueryRejection>,
) -> ApiResult<Json<ApiResponse<UserListData>>> {
    let request = lenient_query(query).page_request(&state.pagination);

    let page = state
        .users
        .list(&request)
        .await
        .map_err(|e| ApiError::from_service("Failed to retrieve users", e))?;

    let data = UserListData {
        pagination: Pagination::new(&request, page.total),
        users: page.users.into_iter().map(UserDto::from).collect(),
    };

    Ok(Json(ApiResponse::ok("Users retrieved successfully", data)))
}

/// GET /api/users/stats
pub async fn user_stats(State(state): State<AppState>) -> ApiResult<Json<ApiResponse<UserStats>>> {
    let stats = state
        .users
        .stats()
        .await
        .map_err(|e| ApiError::from_service("Failed to get user statistics", e))?;

    Ok(Json(ApiResponse::ok(
        "User statistics retrieved successfully",
        stats,
    )))
}
