pub mod list_users_query;
pub mod user_dto;
pub mod user_list_data;
pub mod users;
