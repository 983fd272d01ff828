pub mod new_user;
pub mod page_request;
pub mod pagination;
pub mod user;
pub mod user_changes;
pub mod user_page;
pub mod user_stats;
