use libsql::Connection;

use crate::error::Result;

pub async fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        -- People
        CREATE TABLE IF NOT EXISTS profiles (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            relationship TEXT,
            photo_url TEXT,
            birthday TEXT,
            notes TEXT,
            metadata TEXT DEFAULT '{}',
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_profiles_name ON profiles(name);

        -- Categorized facts about a profile
        CREATE TABLE IF NOT EXISTS details (
            id TEXT PRIMARY KEY,
            profile_id TEXT NOT NULL,
            category TEXT NOT NULL,
            label TEXT NOT NULL,
            value TEXT NOT NULL,
            metadata TEXT DEFAULT '{}',
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            FOREIGN KEY (profile_id) REFERENCES profiles(id) ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_details_profile_id ON details(profile_id);
        -- Compound index for the per-profile category filter
        CREATE INDEX IF NOT EXISTS idx_details_profile_category
            ON details(profile_id, category);

        -- Directed, typed edges between profiles
        CREATE TABLE IF NOT EXISTS connections (
            id TEXT PRIMARY KEY,
            from_profile_id TEXT NOT NULL,
            to_profile_id TEXT NOT NULL,
            kind TEXT NOT NULL,
            created_at TEXT NOT NULL,
            FOREIGN KEY (from_profile_id) REFERENCES profiles(id) ON DELETE CASCADE,
            FOREIGN KEY (to_profile_id) REFERENCES profiles(id) ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_connections_from ON connections(from_profile_id);
        CREATE INDEX IF NOT EXISTS idx_connections_to ON connections(to_profile_id);
        "#,
    )
    .await?;

    Ok(())
}
