//! Schema bootstrap
//!
//! Create-if-absent only; there is no versioned migration history.

use sqlx::{Connection, PgConnection};

use super::{DbConfig, DbError};

/// Create the messages table if it does not exist yet.
pub async fn run(conn: &mut PgConnection) -> Result<(), DbError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS messages (
            id BIGSERIAL PRIMARY KEY,
            content TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(&mut *conn)
    .await?;

    Ok(())
}

/// One-shot schema init at process startup.
///
/// Never aborts startup: an unconfigured database is skipped without a word
/// (the factory stays quiet for that case too), and any other failure is
/// logged and swallowed. The connection is closed on every path.
pub async fn init(db: &DbConfig) {
    let mut conn = match db.connect().await {
        Ok(conn) => conn,
        // Connect failures were already logged by the factory.
        Err(_) => return,
    };

    match run(&mut conn).await {
        Ok(()) => tracing::info!("messages table ready"),
        Err(e) => tracing::error!(error = %e, "schema init failed"),
    }

    if let Err(e) = conn.close().await {
        tracing::warn!(error = %e, "error closing connection after schema init");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn run_is_idempotent() {
        let db = DbConfig::from_env();
        let mut conn = db.connect().await.expect("connect failed");

        run(&mut conn).await.expect("first run failed");
        run(&mut conn).await.expect("second run failed");

        conn.close().await.expect("close failed");
    }

    #[tokio::test]
    async fn init_without_database_is_a_no_op() {
        // Must return promptly instead of erroring or panicking.
        init(&DbConfig::new(None)).await;
    }
}
