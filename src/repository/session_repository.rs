use anyhow::Result;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::debug;

use crate::domain::session::{Session, User};

const TOKEN_KEY: &str = "accessToken";
const USER_KEY: &str = "user";

/// Read side of the persisted credential. The HTTP client consults this on
/// every outgoing request.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CredentialSource: Send + Sync {
    async fn access_token(&self) -> Result<Option<String>>;
}

#[derive(Clone)]
pub struct SessionRepository {
    pool: Arc<SqlitePool>,
}

impl SessionRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    /// Writes the token and the serialized user in one transaction; either
    /// both entries land or neither does.
    pub async fn store_session(&self, token: &str, user: &User) -> Result<()> {
        let user_json = serde_json::to_string(user)?;

        let mut tx = self.pool.begin().await?;
        sqlx::query(
            "INSERT INTO kv_entries (key, value) VALUES (?, ?) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(TOKEN_KEY)
        .bind(token)
        .execute(&mut *tx)
        .await?;
        sqlx::query(
            "INSERT INTO kv_entries (key, value) VALUES (?, ?) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(USER_KEY)
        .bind(&user_json)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;

        debug!("session entries persisted");
        Ok(())
    }

    /// Deletes both entries; a half-cleared session cannot be observed.
    pub async fn clear_session(&self) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM kv_entries WHERE key IN (?, ?)")
            .bind(TOKEN_KEY)
            .bind(USER_KEY)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        debug!("session entries cleared");
        Ok(())
    }

    pub async fn load_session(&self) -> Result<Session> {
        let token = self.get(TOKEN_KEY).await?;
        let user = match self.get(USER_KEY).await? {
            Some(raw) => Some(serde_json::from_str::<User>(&raw)?),
            None => None,
        };
        Ok(Session { token, user })
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let value = sqlx::query_scalar::<_, String>("SELECT value FROM kv_entries WHERE key = ?")
            .bind(key)
            .fetch_optional(&*self.pool)
            .await?;
        Ok(value)
    }
}

#[async_trait]
impl CredentialSource for SessionRepository {
    async fn access_token(&self) -> Result<Option<String>> {
        self.get(TOKEN_KEY).await
    }
}
