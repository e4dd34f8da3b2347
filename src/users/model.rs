/**
 * User Model and Database Operations
 *
 * This module defines the persisted identity record and the queries that
 * operate on it. `username` is unique at the database level and serves as
 * the login key.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// User struct representing a user in the database
///
/// This type is never serialized to clients directly: it carries the
/// password hash. Use [`User::identity`] for anything that leaves the
/// server.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID, assigned at creation
    pub id: Uuid,
    /// Username (unique, login key)
    pub username: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// First name, defaults to empty
    pub first_name: String,
    /// Last name, defaults to empty
    pub last_name: String,
    /// Ids of venues owned by this user (by reference, not containment)
    pub venues: Vec<Uuid>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Serializable user identity, excluding the password hash
///
/// This is the shape that flows into token claims and out of user
/// endpoints. Field names on the wire match the original API
/// (`userId`, `firstName`, `lastName`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserIdentity {
    /// User id
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    /// Username
    pub username: String,
    /// First name
    #[serde(rename = "firstName")]
    pub first_name: String,
    /// Last name
    #[serde(rename = "lastName")]
    pub last_name: String,
}

impl User {
    /// Project this record onto its serializable identity
    pub fn identity(&self) -> UserIdentity {
        UserIdentity {
            user_id: self.id,
            username: self.username.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `username` - User's chosen username
/// * `password_hash` - Hashed password (never the plaintext)
/// * `first_name` / `last_name` - Optional profile fields, empty by default
///
/// # Returns
/// Created user, or the underlying error (a unique violation on
/// `username` is mapped by the caller)
pub async fn create_user(
    pool: &PgPool,
    username: &str,
    password_hash: &str,
    first_name: &str,
    last_name: &str,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, username, password_hash, first_name, last_name, venues, created_at)
        VALUES ($1, $2, $3, $4, $5, '{}', $6)
        RETURNING id, username, password_hash, first_name, last_name, venues, created_at
        "#,
    )
    .bind(id)
    .bind(username)
    .bind(password_hash)
    .bind(first_name)
    .bind(last_name)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by exact username match
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_username(
    pool: &PgPool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, first_name, last_name, venues, created_at
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}
