/**
 * Venue Model and Database Operations
 *
 * A venue is a place record: required name, ordered category list, and
 * nested contact details. Contact details are stored as a JSONB column;
 * categories as a text array.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Geographic coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Nested contact details for a venue
///
/// Every field is optional; an empty object is a valid contact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

/// Venue record
///
/// Serializes to the wire shape clients see: `id`, `name`, `categories`,
/// `contact`, `createdAt`.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Venue {
    /// Unique venue ID, assigned at creation
    pub id: Uuid,
    /// Venue name (required)
    pub name: String,
    /// Ordered sequence of category labels
    pub categories: Vec<String>,
    /// Contact details (JSONB column)
    #[sqlx(json)]
    pub contact: Contact,
    /// Created at timestamp
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// List all venues
pub async fn list_venues(pool: &PgPool) -> Result<Vec<Venue>, sqlx::Error> {
    sqlx::query_as::<_, Venue>(
        r#"
        SELECT id, name, categories, contact, created_at
        FROM venues
        ORDER BY created_at
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Get venue by ID
///
/// # Returns
/// Venue or None if not found
pub async fn get_venue_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Venue>, sqlx::Error> {
    sqlx::query_as::<_, Venue>(
        r#"
        SELECT id, name, categories, contact, created_at
        FROM venues
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Create a new venue
pub async fn create_venue(
    pool: &PgPool,
    name: &str,
    categories: &[String],
    contact: &Contact,
) -> Result<Venue, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, Venue>(
        r#"
        INSERT INTO venues (id, name, categories, contact, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, name, categories, contact, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(categories)
    .bind(sqlx::types::Json(contact))
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Delete venue by ID
///
/// # Returns
/// `true` if a venue was deleted, `false` if nothing matched
pub async fn delete_venue(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM venues WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venue_serializes_to_wire_shape() {
        let venue = Venue {
            id: Uuid::new_v4(),
            name: "The Green Room".to_string(),
            categories: vec!["bar".to_string(), "music".to_string()],
            contact: Contact {
                phone: Some("1234567".to_string()),
                address: Some("12 High St".to_string()),
                coordinates: Some(Coordinates { lat: 51.5, lng: -0.1 }),
            },
            created_at: Utc::now(),
        };

        let json: serde_json::Value = serde_json::to_value(&venue).unwrap();
        assert_eq!(json["name"], "The Green Room");
        assert_eq!(json["categories"][1], "music");
        assert_eq!(json["contact"]["coordinates"]["lat"], 51.5);
        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_empty_contact_parses() {
        let contact: Contact = serde_json::from_str("{}").unwrap();
        assert_eq!(contact, Contact::default());
    }

    #[test]
    fn test_contact_omits_absent_fields() {
        let json = serde_json::to_string(&Contact::default()).unwrap();
        assert_eq!(json, "{}");
    }
}
