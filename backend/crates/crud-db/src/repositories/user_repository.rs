//! User repository for CRUD operations on the `users` table.
//!
//! ## Ordering
//!
//! Listings are ordered newest first by `created_at`. Rows created within the
//! same millisecond fall back to `id DESC`, which matches insertion order
//! because ids are assigned by AUTOINCREMENT.
//!
//! ## Search
//!
//! The search term is matched as a literal substring (`%` and `_` are
//! escaped) against first name, last name, email and address. SQLite `LIKE`
//! is case-insensitive for ASCII.

use crate::{Database, DbError, Result as DbErrorResult};

use crud_core::{NewUser, PageRequest, User, UserChanges, UserStats};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};

const SEARCH_FILTER: &str = r#"
    (?1 IS NULL
        OR first_name LIKE ?1 ESCAPE '\'
        OR last_name LIKE ?1 ESCAPE '\'
        OR email LIKE ?1 ESCAPE '\'
        OR address LIKE ?1 ESCAPE '\')
"#;

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
    address: Option<String>,
    gender: bool,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<UserRow> for User {
    type Error = DbError;

    #[track_caller]
    fn try_from(r: UserRow) -> DbErrorResult<Self> {
        Ok(User {
            id: r.id,
            first_name: r.first_name,
            last_name: r.last_name,
            email: r.email,
            address: r.address,
            gender: r.gender,
            created_at: from_millis(r.created_at, "users.created_at")?,
            updated_at: from_millis(r.updated_at, "users.updated_at")?,
        })
    }
}

#[derive(Clone, Debug)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            pool: database.pool().clone(),
        }
    }

    /// Insert a user and return it with its assigned id and timestamps.
    ///
    /// Fails with `DbError::UniqueViolation` when the email is taken.
    pub async fn create(&self, new_user: &NewUser, now: DateTime<Utc>) -> DbErrorResult<User> {
        let timestamp = now.timestamp_millis();

        let result = sqlx::query(
            r#"
                INSERT INTO users (
                    first_name, last_name, email, address, gender,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&new_user.first_name)
        .bind(&new_user.last_name)
        .bind(&new_user.email)
        .bind(&new_user.address)
        .bind(new_user.gender)
        .bind(timestamp)
        .bind(timestamp)
        .execute(&self.pool)
        .await?;

        let created_at = from_millis(timestamp, "users.created_at")?;

        Ok(User {
            id: result.last_insert_rowid(),
            first_name: new_user.first_name.clone(),
            last_name: new_user.last_name.clone(),
            email: new_user.email.clone(),
            address: new_user.address.clone(),
            gender: new_user.gender,
            created_at,
            updated_at: created_at,
        })
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, first_name, last_name, email, address, gender,
                    created_at, updated_at
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    /// Fetch one page of users, newest first.
    pub async fn find_page(&self, request: &PageRequest) -> DbErrorResult<Vec<User>> {
        let sql = format!(
            r#"
                SELECT id, first_name, last_name, email, address, gender,
                    created_at, updated_at
                FROM users
                WHERE {SEARCH_FILTER}
                ORDER BY created_at DESC, id DESC
                LIMIT ?2 OFFSET ?3
            "#
        );

        let rows = sqlx::query_as::<_, UserRow>(&sql)
            .bind(search_pattern(request.search.as_deref()))
            .bind(i64::from(request.limit))
            .bind(request.offset())
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(User::try_from)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    /// Count users matching `search` (all users when `None`).
    pub async fn count(&self, search: Option<&str>) -> DbErrorResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM users WHERE {SEARCH_FILTER}");

        let count = sqlx::query_scalar::<_, i64>(&sql)
            .bind(search_pattern(search))
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Apply only the supplied fields and refresh `updated_at`.
    ///
    /// `updated_at` always moves forward, by at least one millisecond when
    /// `now` does not exceed the stored value. Returns `None` when no row has
    /// the given id.
    pub async fn update(
        &self,
        id: i64,
        changes: &UserChanges,
        now: DateTime<Utc>,
    ) -> DbErrorResult<Option<User>> {
        let address_supplied = changes.address.is_some();
        let address = changes.address.clone().flatten();

        let result = sqlx::query(
            r#"
                UPDATE users
                SET first_name = COALESCE(?, first_name),
                    last_name = COALESCE(?, last_name),
                    email = COALESCE(?, email),
                    address = CASE WHEN ? THEN ? ELSE address END,
                    gender = COALESCE(?, gender),
                    updated_at = MAX(?, updated_at + 1)
                WHERE id = ?
            "#,
        )
        .bind(&changes.first_name)
        .bind(&changes.last_name)
        .bind(&changes.email)
        .bind(address_supplied)
        .bind(address)
        .bind(changes.gender)
        .bind(now.timestamp_millis())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Hard delete. Returns whether a row was removed.
    pub async fn delete(&self, id: i64) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Whether any user other than `exclude_id` already has `email`
    /// (case-insensitive).
    pub async fn email_exists(&self, email: &str, exclude_id: Option<i64>) -> DbErrorResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
                SELECT EXISTS (
                    SELECT 1 FROM users
                    WHERE email = ?1 AND (?2 IS NULL OR id <> ?2)
                )
            "#,
        )
        .bind(email)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    pub async fn stats(&self) -> DbErrorResult<UserStats> {
        let (total, male_count, female_count) = sqlx::query_as::<_, (i64, i64, i64)>(
            r#"
                SELECT COUNT(*),
                    COALESCE(SUM(CASE WHEN gender = 1 THEN 1 ELSE 0 END), 0),
                    COALESCE(SUM(CASE WHEN gender = 0 THEN 1 ELSE 0 END), 0)
                FROM users
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(UserStats {
            total,
            male_count,
            female_count,
        })
    }
}

/// `%term%` with LIKE wildcards escaped, or `None` for no filter.
fn search_pattern(search: Option<&str>) -> Option<String> {
    let term = search.map(str::trim).filter(|s| !s.is_empty())?;

    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');

    Some(pattern)
}

#[track_caller]
fn from_millis(millis: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| DbError::Initialization {
        message: format!("Invalid timestamp in {}", column),
        location: ErrorLocation::from(Location::caller()),
    })
}
