pub mod error;
pub mod flag;
pub mod models;

mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use flag::{Flag, parse_flag};
pub use models::new_user::{NewUser, UserInput};
pub use models::page_request::{DEFAULT_LIMIT, DEFAULT_PAGE, PageRequest};
pub use models::pagination::Pagination;
pub use models::user::User;
pub use models::user_changes::{UserChanges, UserPatch};
pub use models::user_page::UserPage;
pub use models::user_stats::UserStats;
