use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::domain::home::HomeDashboard;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait HomeApi: Send + Sync {
    async fn fetch_home(&self) -> Result<HomeDashboard, ApiError>;
}

#[async_trait]
impl HomeApi for ApiClient {
    async fn fetch_home(&self) -> Result<HomeDashboard, ApiError> {
        self.get_json("/home").await
    }
}
