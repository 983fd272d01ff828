//! User operations over the record store.
//!
//! Inputs are normalized here (trimming, gender coercion, validation) before
//! anything reaches the repository. Email uniqueness is pre-checked to give
//! a clean error, but the store's unique index decides: a violation raised
//! by a concurrent writer is mapped to the same `Conflict`.

use crate::services::error::{Result as ServiceResult, ServiceError};

use crud_core::{PageRequest, User, UserInput, UserPage, UserPatch, UserStats};
use crud_db::{Database, UserRepository};

use chrono::Utc;
use log::{debug, info, warn};

#[derive(Clone, Debug)]
pub struct UserService {
    repo: UserRepository,
}

impl UserService {
    pub fn new(database: &Database) -> Self {
        Self {
            repo: UserRepository::new(database),
        }
    }

    /// Validate and insert a new user.
    pub async fn create(&self, input: UserInput) -> ServiceResult<User> {
        let new_user = input.normalize()?;

        if self.email_exists(&new_user.email, None).await? {
            warn!("Rejected create: email {} already exists", new_user.email);
            return Err(ServiceError::email_taken());
        }

        let user = self.repo.create(&new_user, Utc::now()).await?;
        info!("Created user {} ({})", user.id, user.email);

        Ok(user)
    }

    /// One page of users, newest first, with the total matching the search.
    pub async fn list(&self, request: &PageRequest) -> ServiceResult<UserPage> {
        debug!(
            "Listing users: page={}, limit={}, search={:?}",
            request.page, request.limit, request.search
        );

        let users = self.repo.find_page(request).await?;
        let total = self.repo.count(request.search.as_deref()).await?;

        Ok(UserPage { users, total })
    }

    pub async fn get_by_id(&self, id: i64) -> ServiceResult<Option<User>> {
        Ok(self.repo.find_by_id(id).await?)
    }

    /// Apply the supplied fields only and refresh `updated_at`.
    pub async fn update(&self, id: i64, patch: UserPatch) -> ServiceResult<User> {
        let changes = patch.normalize()?;
        if changes.is_empty() {
            debug!("Update of user {} carries no fields; refreshing updated_at only", id);
        }

        if let Some(ref email) = changes.email
            && self.email_exists(email, Some(id)).await?
        {
            warn!("Rejected update of user {}: email {} already exists", id, email);
            return Err(ServiceError::email_taken());
        }

        let user = self
            .repo
            .update(id, &changes, Utc::now())
            .await?
            .ok_or_else(|| ServiceError::not_found(id))?;
        info!("Updated user {}", user.id);

        Ok(user)
    }

    /// Hard delete. `false` when no user had this id.
    pub async fn delete(&self, id: i64) -> ServiceResult<bool> {
        let deleted = self.repo.delete(id).await?;
        if deleted {
            info!("Deleted user {}", id);
        }

        Ok(deleted)
    }

    /// Whether `email` belongs to a user other than `exclude_id`.
    pub async fn email_exists(&self, email: &str, exclude_id: Option<i64>) -> ServiceResult<bool> {
        Ok(self.repo.email_exists(email.trim(), exclude_id).await?)
    }

    pub async fn stats(&self) -> ServiceResult<UserStats> {
        Ok(self.repo.stats().await?)
    }
}
