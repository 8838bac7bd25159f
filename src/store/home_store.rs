use std::sync::Arc;

use tokio::sync::RwLock;

use crate::api::error::ApiError;
use crate::api::home::HomeApi;
use crate::domain::home::HomeDashboard;

#[derive(Debug, Clone, Default)]
pub struct HomeState {
    pub data: Option<HomeDashboard>,
    pub loading: bool,
}

/// Caches the last dashboard snapshot between screens. Snapshots are only
/// ever replaced whole; there is no merging.
pub struct HomeStore {
    api: Arc<dyn HomeApi>,
    state: RwLock<HomeState>,
}

impl HomeStore {
    pub fn new(api: Arc<dyn HomeApi>) -> Self {
        Self {
            api,
            state: RwLock::new(HomeState::default()),
        }
    }

    /// Refetches the snapshot. The previous one stays visible until the new
    /// one arrives; `loading` is cleared on every exit path.
    pub async fn load(&self) -> Result<(), ApiError> {
        self.state.write().await.loading = true;

        let result = self.api.fetch_home().await;

        let mut state = self.state.write().await;
        state.loading = false;
        match result {
            Ok(dashboard) => {
                state.data = Some(dashboard);
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    pub async fn data(&self) -> Option<HomeDashboard> {
        self.state.read().await.data.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }

    pub async fn snapshot(&self) -> HomeState {
        self.state.read().await.clone()
    }
}
