use anyhow::Result;
use tokio::sync::RwLock;
use tracing::info;

use crate::domain::session::{Session, User};
use crate::repository::SessionRepository;

/// Holds the authenticated session and keeps the persisted copy in lockstep:
/// the storage commit happens first, and the in-memory value only changes
/// once that commit succeeded.
pub struct SessionStore {
    repository: SessionRepository,
    session: RwLock<Session>,
}

impl SessionStore {
    pub fn new(repository: SessionRepository) -> Self {
        Self {
            repository,
            session: RwLock::new(Session::default()),
        }
    }

    /// Hydrates the in-memory session from storage at startup.
    pub async fn restore(&self) -> Result<()> {
        let persisted = self.repository.load_session().await?;
        *self.session.write().await = persisted;
        Ok(())
    }

    pub async fn login(&self, token: String, user: User) -> Result<()> {
        self.repository.store_session(&token, &user).await?;
        *self.session.write().await = Session::authenticated(token, user);
        info!("session committed");
        Ok(())
    }

    pub async fn logout(&self) -> Result<()> {
        self.repository.clear_session().await?;
        *self.session.write().await = Session::default();
        info!("session cleared");
        Ok(())
    }

    pub async fn token(&self) -> Option<String> {
        self.session.read().await.token.clone()
    }

    pub async fn user(&self) -> Option<User> {
        self.session.read().await.user.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_authenticated()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::repository::database::init_test_database;

    async fn setup_store() -> (SessionStore, SessionRepository) {
        let pool = Arc::new(init_test_database().await.unwrap());
        let repository = SessionRepository::new(pool);
        (SessionStore::new(repository.clone()), repository)
    }

    #[tokio::test]
    async fn login_updates_memory_and_storage_together() {
        let (store, repository) = setup_store().await;

        store
            .login("token-1".to_string(), User { name: "지우".to_string() })
            .await
            .unwrap();

        assert_eq!(store.token().await.as_deref(), Some("token-1"));
        assert_eq!(store.user().await.unwrap().name, "지우");

        let persisted = repository.load_session().await.unwrap();
        assert_eq!(persisted.token.as_deref(), Some("token-1"));
        assert_eq!(persisted.user.unwrap().name, "지우");
    }

    #[tokio::test]
    async fn logout_clears_memory_and_storage() {
        let (store, repository) = setup_store().await;

        store
            .login("token-1".to_string(), User { name: "지우".to_string() })
            .await
            .unwrap();
        store.logout().await.unwrap();

        assert!(store.token().await.is_none());
        assert!(store.user().await.is_none());
        assert!(!store.is_authenticated().await);

        let persisted = repository.load_session().await.unwrap();
        assert!(persisted.token.is_none());
        assert!(persisted.user.is_none());
    }

    #[tokio::test]
    async fn restore_hydrates_from_storage() {
        let (store, repository) = setup_store().await;

        repository
            .store_session("persisted", &User { name: "민준".to_string() })
            .await
            .unwrap();

        assert!(!store.is_authenticated().await);
        store.restore().await.unwrap();
        assert_eq!(store.token().await.as_deref(), Some("persisted"));
        assert_eq!(store.user().await.unwrap().name, "민준");
    }

    #[tokio::test]
    async fn failed_commit_leaves_memory_untouched() {
        let pool = Arc::new(init_test_database().await.unwrap());
        let repository = SessionRepository::new(pool.clone());
        let store = SessionStore::new(repository);

        pool.close().await;

        let result = store
            .login("token-1".to_string(), User { name: "지우".to_string() })
            .await;

        assert!(result.is_err());
        assert!(store.token().await.is_none());
        assert!(store.user().await.is_none());
    }
}
