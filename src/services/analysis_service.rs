use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::api::analysis::AnalysisApi;
use crate::api::error::ApiError;
use crate::domain::analysis::{AnalysisDigest, AnalysisResult};
use crate::domain::history::HistoryEntry;
use crate::domain::insight::Insight;
use crate::store::AnalysisStore;

pub struct AnalysisService {
    api: Arc<dyn AnalysisApi>,
    store: Arc<AnalysisStore>,
}

impl AnalysisService {
    pub fn new(api: Arc<dyn AnalysisApi>, store: Arc<AnalysisStore>) -> Self {
        Self { api, store }
    }

    /// Uploads the photo and, once the backend answers, replaces the cached
    /// result, raises the refresh flag for dependent screens and stamps the
    /// home-screen digest with today's date. Nothing is cached on failure.
    pub async fn analyze(&self, image_path: &Path) -> Result<AnalysisResult, ApiError> {
        let result = self.api.upload_analysis_image(image_path).await?;
        info!(analysis_id = result.analysis_id, "analysis completed");

        self.store.set_result(result.clone()).await;
        self.store.mark_updated().await;
        self.store
            .set_latest(AnalysisDigest::from_result(&result, Utc::now().date_naive()))
            .await;

        Ok(result)
    }

    pub async fn history(&self) -> Result<Vec<HistoryEntry>, ApiError> {
        self.api.fetch_history().await
    }

    pub async fn insight(&self, analysis_id: i64) -> Result<Insight, ApiError> {
        self.api.fetch_insight(analysis_id).await
    }
}
