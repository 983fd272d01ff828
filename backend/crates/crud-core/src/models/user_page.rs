use crate::User;

/// One page of users plus the number of users matching the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPage {
    pub users: Vec<User>,
    pub total: i64,
}
