mod new_user;
mod page_request;
mod pagination;
mod user;
mod user_changes;
