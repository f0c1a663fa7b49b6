use chrono::{DateTime, Utc};
use libsql::{params, Connection};

use crate::error::Result;
use crate::models::Profile;

const PROFILE_COLUMNS: &str = "id, name, relationship, photo_url, birthday, notes, metadata, \
                               created_at, updated_at";

pub struct ProfileRepository;

impl ProfileRepository {
    pub async fn create(conn: &Connection, profile: &Profile) -> Result<()> {
        conn.execute(
            r#"
            INSERT INTO profiles (
                id, name, relationship, photo_url, birthday, notes, metadata,
                created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
            params![
                profile.id.clone(),
                profile.name.clone(),
                profile.relationship.clone(),
                profile.photo_url.clone(),
                profile.birthday.map(|d| d.to_string()),
                profile.notes.clone(),
                serde_json::to_string(&profile.metadata)?,
                profile.created_at.to_rfc3339(),
                profile.updated_at.to_rfc3339(),
            ],
        )
        .await?;

        Ok(())
    }

    pub async fn get_by_id(conn: &Connection, id: &str) -> Result<Option<Profile>> {
        let mut rows = conn
            .query(
                &format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = ?1"),
                params![id],
            )
            .await?;

        if let Some(row) = rows.next().await? {
            Ok(Some(Self::row_to_profile(&row)?))
        } else {
            Ok(None)
        }
    }

    pub async fn list(conn: &Connection) -> Result<Vec<Profile>> {
        let mut rows = conn
            .query(
                &format!("SELECT {PROFILE_COLUMNS} FROM profiles ORDER BY name COLLATE NOCASE"),
                (),
            )
            .await?;

        let mut profiles = Vec::new();
        while let Some(row) = rows.next().await? {
            profiles.push(Self::row_to_profile(&row)?);
        }
        Ok(profiles)
    }

    pub async fn update(conn: &Connection, profile: &Profile) -> Result<()> {
        conn.execute(
            r#"
            UPDATE profiles
            SET name = ?2, relationship = ?3, photo_url = ?4, birthday = ?5,
                notes = ?6, metadata = ?7, updated_at = ?8
            WHERE id = ?1
            "#,
            params![
                profile.id.clone(),
                profile.name.clone(),
                profile.relationship.clone(),
                profile.photo_url.clone(),
                profile.birthday.map(|d| d.to_string()),
                profile.notes.clone(),
                serde_json::to_string(&profile.metadata)?,
                profile.updated_at.to_rfc3339(),
            ],
        )
        .await?;

        Ok(())
    }

    /// Delete a profile along with its details and any edges touching it.
    /// Dependents are removed explicitly; the FK cascades are not relied on
    /// since `foreign_keys` is a per-connection pragma.
    pub async fn delete(conn: &Connection, id: &str) -> Result<bool> {
        conn.execute(
            "DELETE FROM details WHERE profile_id = ?1",
            params![id],
        )
        .await?;
        conn.execute(
            "DELETE FROM connections WHERE from_profile_id = ?1 OR to_profile_id = ?1",
            params![id],
        )
        .await?;
        let affected = conn
            .execute("DELETE FROM profiles WHERE id = ?1", params![id])
            .await?;
        Ok(affected > 0)
    }

    pub fn row_to_profile(row: &libsql::Row) -> Result<Profile> {
        Self::row_to_profile_at(row, 0)
    }

    /// Read a profile whose columns start at `offset` within a wider row,
    /// laid out as in [`PROFILE_COLUMNS`]. Used by joins.
    pub fn row_to_profile_at(row: &libsql::Row, offset: i32) -> Result<Profile> {
        Ok(Profile {
            id: row.get(offset)?,
            name: row.get(offset + 1)?,
            relationship: row.get(offset + 2)?,
            photo_url: row.get(offset + 3)?,
            birthday: row
                .get::<Option<String>>(offset + 4)?
                .and_then(|s| s.parse().ok()),
            notes: row.get(offset + 5)?,
            metadata: serde_json::from_str(&row.get::<String>(offset + 6)?).unwrap_or_default(),
            created_at: DateTime::parse_from_rfc3339(&row.get::<String>(offset + 7)?)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
            updated_at: DateTime::parse_from_rfc3339(&row.get::<String>(offset + 8)?)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
        })
    }
}
