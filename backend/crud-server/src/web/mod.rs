pub mod assets;
pub mod error;
pub mod id_param;
pub mod pages;
pub mod redirect;
pub mod user_form;
pub mod users;
pub mod users_page_query;
