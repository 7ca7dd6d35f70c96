//! Root greeting endpoint

use axum::{routing::get, Router};

/// Fixed greeting, byte-for-byte stable across database outages.
pub const GREETING: &str = "Hello, Serverless with DB! 🚀\n";

/// GET / - plain-text greeting, no database access
async fn hello() -> &'static str {
    GREETING
}

/// Root routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(hello))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hello_returns_greeting() {
        assert_eq!(hello().await, "Hello, Serverless with DB! 🚀\n");
    }
}
