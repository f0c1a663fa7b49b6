use chrono::{DateTime, Utc};
use libsql::{params, Connection};

use crate::error::Result;
use crate::models::{Detail, DetailCategory};

const DETAIL_COLUMNS: &str =
    "id, profile_id, category, label, value, metadata, created_at, updated_at";

pub struct DetailRepository;

impl DetailRepository {
    pub async fn create(conn: &Connection, detail: &Detail) -> Result<()> {
        conn.execute(
            r#"
            INSERT INTO details (
                id, profile_id, category, label, value, metadata, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            params![
                detail.id.clone(),
                detail.profile_id.clone(),
                detail.category.to_string(),
                detail.label.clone(),
                detail.value.clone(),
                serde_json::to_string(&detail.metadata)?,
                detail.created_at.to_rfc3339(),
                detail.updated_at.to_rfc3339(),
            ],
        )
        .await?;

        Ok(())
    }

    pub async fn get_by_id(conn: &Connection, id: &str) -> Result<Option<Detail>> {
        let mut rows = conn
            .query(
                &format!("SELECT {DETAIL_COLUMNS} FROM details WHERE id = ?1"),
                params![id],
            )
            .await?;

        if let Some(row) = rows.next().await? {
            Ok(Some(Self::row_to_detail(&row)?))
        } else {
            Ok(None)
        }
    }

    pub async fn list_for_profile(
        conn: &Connection,
        profile_id: &str,
        category: Option<DetailCategory>,
    ) -> Result<Vec<Detail>> {
        let mut rows = match category {
            Some(category) => {
                conn.query(
                    &format!(
                        "SELECT {DETAIL_COLUMNS} FROM details \
                         WHERE profile_id = ?1 AND category = ?2 ORDER BY rowid"
                    ),
                    params![profile_id, category.to_string()],
                )
                .await?
            }
            None => {
                conn.query(
                    &format!(
                        "SELECT {DETAIL_COLUMNS} FROM details WHERE profile_id = ?1 ORDER BY rowid"
                    ),
                    params![profile_id],
                )
                .await?
            }
        };

        let mut details = Vec::new();
        while let Some(row) = rows.next().await? {
            details.push(Self::row_to_detail(&row)?);
        }
        Ok(details)
    }

    pub async fn update(conn: &Connection, detail: &Detail) -> Result<()> {
        conn.execute(
            r#"
            UPDATE details
            SET category = ?2, label = ?3, value = ?4, metadata = ?5, updated_at = ?6
            WHERE id = ?1
            "#,
            params![
                detail.id.clone(),
                detail.category.to_string(),
                detail.label.clone(),
                detail.value.clone(),
                serde_json::to_string(&detail.metadata)?,
                detail.updated_at.to_rfc3339(),
            ],
        )
        .await?;

        Ok(())
    }

    pub async fn delete(conn: &Connection, id: &str) -> Result<bool> {
        let affected = conn
            .execute("DELETE FROM details WHERE id = ?1", params![id])
            .await?;
        Ok(affected > 0)
    }

    pub fn row_to_detail(row: &libsql::Row) -> Result<Detail> {
        Ok(Detail {
            id: row.get(0)?,
            profile_id: row.get(1)?,
            category: row.get::<String>(2)?.parse().unwrap_or_default(),
            label: row.get(3)?,
            value: row.get(4)?,
            metadata: serde_json::from_str(&row.get::<String>(5)?).unwrap_or_default(),
            created_at: DateTime::parse_from_rfc3339(&row.get::<String>(6)?)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
            updated_at: DateTime::parse_from_rfc3339(&row.get::<String>(7)?)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
        })
    }
}
