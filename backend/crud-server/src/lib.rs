pub mod api;
pub mod error;
pub mod logger;
pub mod routes;
pub mod services;
pub mod state;
pub mod views;
pub mod web;

#[cfg(test)]
mod tests;

pub use api::{
    envelope::ApiResponse,
    error::{ApiError, Result as ApiResult},
    users::{
        list_users_query::ListUsersQuery,
        user_dto::UserDto,
        user_list_data::UserListData,
        users::{list_users, user_stats},
    },
};
pub use error::{Result as ServerResult, ServerError};
pub use services::{
    error::{Result as ServiceResult, ServiceError},
    user_service::UserService,
};
pub use state::AppState;
pub use web::{
    error::{Result as WebResult, WebError},
    user_form::UserForm,
};

pub use crate::routes::build_router;
