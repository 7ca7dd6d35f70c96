//! Message repository
//!
//! Owns the SQL for the messages table. Works on a borrowed request-scoped
//! connection rather than a pool handle.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection};

use crate::db::DbError;

/// Message record from database
#[derive(Debug, Clone, FromRow)]
pub struct Message {
    pub id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Message repository
pub struct MessageRepo<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> MessageRepo<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }

    /// Insert one message. The store assigns `id` and `created_at`.
    pub async fn insert(&mut self, content: &str) -> Result<(), DbError> {
        sqlx::query("INSERT INTO messages (content) VALUES ($1)")
            .bind(content)
            .execute(&mut *self.conn)
            .await?;

        Ok(())
    }

    /// The `limit` most recent messages, newest first (descending id).
    pub async fn recent(&mut self, limit: i64) -> Result<Vec<Message>, DbError> {
        let messages = sqlx::query_as::<_, Message>(
            "SELECT id, content, created_at FROM messages ORDER BY id DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{migrations, DbConfig};
    use sqlx::Connection;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_then_recent_returns_it_first() {
        let db = DbConfig::from_env();
        let mut conn = db.connect().await.expect("connect failed");
        migrations::run(&mut conn).await.expect("schema init failed");

        let marker = format!("repo test {}", Utc::now().timestamp_nanos_opt().unwrap());
        let mut repo = MessageRepo::new(&mut conn);
        repo.insert(&marker).await.expect("insert failed");

        let recent = repo.recent(10).await.expect("query failed");
        assert_eq!(recent.first().map(|m| m.content.as_str()), Some(marker.as_str()));

        conn.close().await.expect("close failed");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn recent_is_capped_and_strictly_descending() {
        let db = DbConfig::from_env();
        let mut conn = db.connect().await.expect("connect failed");
        migrations::run(&mut conn).await.expect("schema init failed");

        let mut repo = MessageRepo::new(&mut conn);
        for i in 0..12 {
            repo.insert(&format!("filler {i}")).await.expect("insert failed");
        }

        let recent = repo.recent(10).await.expect("query failed");
        assert_eq!(recent.len(), 10);
        for pair in recent.windows(2) {
            assert!(pair[0].id > pair[1].id);
        }

        conn.close().await.expect("close failed");
    }
}
