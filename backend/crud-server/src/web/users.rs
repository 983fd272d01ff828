//! HTML handlers for creating, listing, editing and deleting users.
//!
//! Rejected submissions re-render their form with a 400 and the submitted
//! values. Successful mutations and not-found outcomes redirect to the list
//! with a notice. Store failures become a 500 error page.

use crate::AppState;
use crate::api::users::list_users_query::lenient_query;
use crate::services::error::ServiceError;
use crate::views::{self, FormValues, PageLinks, UserView};
use crate::web::error::{Result as WebResult, WebError};
use crate::web::id_param::{IdQuery, resolve_id};
use crate::web::redirect;
use crate::web::user_form::{REQUIRED_FIELDS_MESSAGE, UserForm};
use crate::web::users_page_query::UsersPageQuery;

use crud_core::Pagination;

use axum::{
    Form,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use log::{debug, warn};
use serde::Serialize;

#[derive(Serialize)]
struct FormPage<'a> {
    title: &'static str,
    is_edit: bool,
    user: Option<&'a FormValues>,
    error: Option<&'a str>,
}

#[derive(Serialize)]
struct ListPage<'a> {
    title: &'static str,
    users: Vec<UserView>,
    pagination: Pagination,
    links: PageLinks,
    search: &'a str,
    success: Option<&'a str>,
    error: Option<&'a str>,
}

// =============================================================================
// Create
// =============================================================================

/// GET /crud
pub async fn create_form(State(state): State<AppState>) -> WebResult<Response> {
    render_form(&state, StatusCode::OK, None, None)
}

/// POST /post-crud
pub async fn create_user(
    State(state): State<AppState>,
    Form(form): Form<UserForm>,
) -> WebResult<Response> {
    debug!("POST /post-crud");

    if form.missing_required() {
        warn!("Create rejected: required fields missing");
        let values = FormValues::from(&form);
        return render_form(
            &state,
            StatusCode::BAD_REQUEST,
            Some(&values),
            Some(REQUIRED_FIELDS_MESSAGE),
        );
    }

    match state.users.create(form.to_input()).await {
        Ok(_) => Ok(redirect::success(redirect::CREATED).into_response()),
        Err(e) => match e.user_message() {
            Some(message) => {
                let values = FormValues::from(&form);
                render_form(&state, StatusCode::BAD_REQUEST, Some(&values), Some(message))
            }
            None => Err(WebError::internal(
                "Failed to create user",
                e,
                state.environment,
            )),
        },
    }
}

// =============================================================================
// List
// =============================================================================

/// GET /users?page=&limit=&search=
pub async fn list_users(
    State(state): State<AppState>,
    query: Result<Query<UsersPageQuery>, QueryRejection>,
) -> WebResult<Html<String>> {
    let query = lenient_query(query);
    let request = query.list.page_request(&state.pagination);

    let page = state
        .users
        .list(&request)
        .await
        .map_err(|e| WebError::internal("Failed to fetch users", e, state.environment))?;

    let pagination = Pagination::new(&request, page.total);
    let context = ListPage {
        title: "All Users",
        users: page.users.iter().map(UserView::from).collect(),
        links: PageLinks::new(&request, &pagination),
        pagination,
        search: request.search.as_deref().unwrap_or(""),
        success: query.success.as_deref(),
        error: query.error.as_deref(),
    };

    views::render(views::USER_LIST, context)
        .map(Html)
        .map_err(|e| WebError::internal("Failed to render users", e, state.environment))
}

// =============================================================================
// Edit
// =============================================================================

/// GET /edit-user/{id}
pub async fn edit_form_by_path(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> WebResult<Response> {
    let id = path.ok().map(|Path(id)| id);
    show_edit_form(&state, resolve_id(id.as_deref(), &lenient_query(query))).await
}

/// GET /edit-user?id=
pub async fn edit_form(
    State(state): State<AppState>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> WebResult<Response> {
    show_edit_form(&state, resolve_id(None, &lenient_query(query))).await
}

async fn show_edit_form(state: &AppState, id: Option<i64>) -> WebResult<Response> {
    let Some(id) = id else {
        return Ok(redirect::error(redirect::INVALID_ID).into_response());
    };

    let user = state
        .users
        .get_by_id(id)
        .await
        .map_err(|e| WebError::internal("Failed to fetch user", e, state.environment))?;

    match user {
        Some(user) => render_form(state, StatusCode::OK, Some(&FormValues::from(&user)), None),
        None => Ok(redirect::error(redirect::USER_NOT_FOUND).into_response()),
    }
}

/// POST /put-crud
pub async fn update_user(
    State(state): State<AppState>,
    Form(form): Form<UserForm>,
) -> WebResult<Response> {
    debug!("POST /put-crud");

    let Some(id) = form.id() else {
        return Ok(redirect::error(redirect::INVALID_ID).into_response());
    };

    if form.missing_required() {
        warn!("Update of user {} rejected: required fields missing", id);
        let values = FormValues::from(&form);
        return render_form(
            &state,
            StatusCode::BAD_REQUEST,
            Some(&values),
            Some(REQUIRED_FIELDS_MESSAGE),
        );
    }

    match state.users.update(id, form.to_patch()).await {
        Ok(_) => Ok(redirect::success(redirect::UPDATED).into_response()),
        Err(ServiceError::NotFound { .. }) => {
            Ok(redirect::error(redirect::NOT_UPDATED).into_response())
        }
        Err(e) => match e.user_message() {
            Some(message) => {
                let values = FormValues::from(&form);
                render_form(&state, StatusCode::BAD_REQUEST, Some(&values), Some(message))
            }
            None => Err(WebError::internal(
                "Failed to update user",
                e,
                state.environment,
            )),
        },
    }
}

// =============================================================================
// Delete
// =============================================================================

/// GET /delete-user/{id}
pub async fn delete_user_by_path(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> WebResult<Response> {
    let id = path.ok().map(|Path(id)| id);
    remove_user(&state, resolve_id(id.as_deref(), &lenient_query(query))).await
}

/// GET /delete-user?id=
pub async fn delete_user(
    State(state): State<AppState>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> WebResult<Response> {
    remove_user(&state, resolve_id(None, &lenient_query(query))).await
}

async fn remove_user(state: &AppState, id: Option<i64>) -> WebResult<Response> {
    let Some(id) = id else {
        return Ok(redirect::error(redirect::INVALID_ID).into_response());
    };

    let deleted = state
        .users
        .delete(id)
        .await
        .map_err(|e| WebError::internal("Failed to delete user", e, state.environment))?;

    let redirect = if deleted {
        redirect::success(redirect::DELETED)
    } else {
        redirect::error(redirect::NOT_DELETED)
    };

    Ok(redirect.into_response())
}

// =============================================================================
// Helpers
// =============================================================================

/// Render the create form, or the edit form when `values` carries an id.
fn render_form(
    state: &AppState,
    status: StatusCode,
    values: Option<&FormValues>,
    error: Option<&str>,
) -> WebResult<Response> {
    let is_edit = values.is_some_and(|v| v.id.is_some());
    let (template, title) = if is_edit {
        (views::EDIT_USER, "Edit User")
    } else {
        (views::CREATE_USER, "Create User")
    };

    let page = FormPage {
        title,
        is_edit,
        user: values,
        error,
    };

    let html = views::render(template, page)
        .map_err(|e| WebError::internal("Failed to render form", e, state.environment))?;

    Ok((status, Html(html)).into_response())
}
