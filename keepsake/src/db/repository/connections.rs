use libsql::{params, Connection};

use crate::error::Result;
use crate::models::{ConnectedProfile, Connection as ProfileConnection, RelationshipKind};

use super::ProfileRepository;

pub struct ConnectionRepository;

impl ConnectionRepository {
    pub async fn create(conn: &Connection, connection: &ProfileConnection) -> Result<()> {
        conn.execute(
            r#"
            INSERT INTO connections (id, from_profile_id, to_profile_id, kind, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                connection.id.clone(),
                connection.from_profile_id.clone(),
                connection.to_profile_id.clone(),
                connection.kind.to_string(),
                connection.created_at.to_rfc3339(),
            ],
        )
        .await?;

        Ok(())
    }

    pub async fn delete(conn: &Connection, id: &str) -> Result<bool> {
        let affected = conn
            .execute("DELETE FROM connections WHERE id = ?1", params![id])
            .await?;
        Ok(affected > 0)
    }

    /// Outgoing edges for a profile, each joined with the connected profile's
    /// full record. `ORDER BY c.rowid` keeps insertion order, which is the
    /// stable ordering tree builds rely on.
    pub async fn list_for_profile(
        conn: &Connection,
        profile_id: &str,
    ) -> Result<Vec<ConnectedProfile>> {
        let mut rows = conn
            .query(
                r#"
                SELECT c.id, c.kind,
                       p.id, p.name, p.relationship, p.photo_url, p.birthday, p.notes,
                       p.metadata, p.created_at, p.updated_at
                FROM connections c
                JOIN profiles p ON p.id = c.to_profile_id
                WHERE c.from_profile_id = ?1
                ORDER BY c.rowid
                "#,
                params![profile_id],
            )
            .await?;

        let mut connections = Vec::new();
        while let Some(row) = rows.next().await? {
            connections.push(Self::row_to_connected_profile(&row)?);
        }
        Ok(connections)
    }

    fn row_to_connected_profile(row: &libsql::Row) -> Result<ConnectedProfile> {
        let connection_id: String = row.get(0)?;
        let kind = row
            .get::<String>(1)?
            .parse()
            .unwrap_or(RelationshipKind::Other);

        // Profile columns start at index 2 and match PROFILE_COLUMNS order.
        let profile = ProfileRepository::row_to_profile_at(row, 2)?;

        Ok(ConnectedProfile {
            connection_id,
            kind,
            profile,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema;
    use crate::models::Profile;

    async fn setup_test_db() -> Connection {
        let db = libsql::Builder::new_local(":memory:")
            .build()
            .await
            .expect("in-memory db should build");
        let conn = db.connect().expect("connect should work");
        schema::init_schema(&conn)
            .await
            .expect("schema should initialize");
        conn
    }

    async fn create_profile(conn: &Connection, id: &str, name: &str) {
        let profile = Profile::new(id.to_string(), name.to_string());
        ProfileRepository::create(conn, &profile)
            .await
            .expect("profile create should succeed");
    }

    async fn connect_profiles(
        conn: &Connection,
        id: &str,
        from: &str,
        to: &str,
        kind: RelationshipKind,
    ) {
        let connection =
            ProfileConnection::new(id.to_string(), from.to_string(), to.to_string(), kind);
        ConnectionRepository::create(conn, &connection)
            .await
            .expect("connection create should succeed");
    }

    #[tokio::test]
    async fn test_list_joins_connected_profiles() {
        let conn = setup_test_db().await;
        create_profile(&conn, "prf_root", "June").await;
        create_profile(&conn, "prf_a", "Ray").await;

        connect_profiles(&conn, "con_1", "prf_root", "prf_a", RelationshipKind::Child).await;

        let edges = ConnectionRepository::list_for_profile(&conn, "prf_root")
            .await
            .expect("list");
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].connection_id, "con_1");
        assert_eq!(edges[0].kind, RelationshipKind::Child);
        assert_eq!(edges[0].profile.name, "Ray");
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let conn = setup_test_db().await;
        create_profile(&conn, "prf_root", "June").await;
        for (id, name) in [("prf_c", "Carol"), ("prf_a", "Ada"), ("prf_b", "Ben")] {
            create_profile(&conn, id, name).await;
        }

        connect_profiles(&conn, "con_1", "prf_root", "prf_c", RelationshipKind::Friend).await;
        connect_profiles(&conn, "con_2", "prf_root", "prf_a", RelationshipKind::Friend).await;
        connect_profiles(&conn, "con_3", "prf_root", "prf_b", RelationshipKind::Friend).await;

        let edges = ConnectionRepository::list_for_profile(&conn, "prf_root")
            .await
            .expect("list");
        let names: Vec<&str> = edges.iter().map(|e| e.profile.name.as_str()).collect();
        assert_eq!(names, vec!["Carol", "Ada", "Ben"]);
    }

    #[tokio::test]
    async fn test_list_is_directed() {
        let conn = setup_test_db().await;
        create_profile(&conn, "prf_root", "June").await;
        create_profile(&conn, "prf_a", "Ray").await;

        connect_profiles(&conn, "con_1", "prf_root", "prf_a", RelationshipKind::Child).await;

        let reverse = ConnectionRepository::list_for_profile(&conn, "prf_a")
            .await
            .expect("list");
        assert!(reverse.is_empty());
    }

    #[tokio::test]
    async fn test_delete_reports_affected() {
        let conn = setup_test_db().await;
        create_profile(&conn, "prf_root", "June").await;
        create_profile(&conn, "prf_a", "Ray").await;
        connect_profiles(&conn, "con_1", "prf_root", "prf_a", RelationshipKind::Child).await;

        assert!(ConnectionRepository::delete(&conn, "con_1").await.expect("delete"));
        assert!(!ConnectionRepository::delete(&conn, "con_1").await.expect("delete"));
    }
}
