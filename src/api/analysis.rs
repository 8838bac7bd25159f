use std::path::Path;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use reqwest::multipart::{Form, Part};

use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::domain::analysis::AnalysisResult;
use crate::domain::history::HistoryEntry;
use crate::domain::insight::Insight;

const IMAGE_FIELD: &str = "image";
const IMAGE_FILE_NAME: &str = "analysis.jpg";
const IMAGE_MIME: &str = "image/jpeg";

#[cfg_attr(test, automock)]
#[async_trait]
pub trait AnalysisApi: Send + Sync {
    /// Uploads one photo for analysis. A 2xx response without an
    /// `analysisId` is a failure, never a silent success.
    async fn upload_analysis_image(&self, image_path: &Path) -> Result<AnalysisResult, ApiError>;

    async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, ApiError>;

    async fn fetch_insight(&self, analysis_id: i64) -> Result<Insight, ApiError>;
}

#[async_trait]
impl AnalysisApi for ApiClient {
    async fn upload_analysis_image(&self, image_path: &Path) -> Result<AnalysisResult, ApiError> {
        let bytes = tokio::fs::read(image_path)
            .await
            .map_err(|err| ApiError::Storage(format!("{}: {err}", image_path.display())))?;

        let part = Part::bytes(bytes)
            .file_name(IMAGE_FILE_NAME)
            .mime_str(IMAGE_MIME)?;
        let form = Form::new().part(IMAGE_FIELD, part);

        self.post_multipart("/analysis", form).await
    }

    async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, ApiError> {
        self.get_json("/analysis/history").await
    }

    async fn fetch_insight(&self, analysis_id: i64) -> Result<Insight, ApiError> {
        self.get_json(&format!("/analysis/{analysis_id}/insight")).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::AppConfig;
    use crate::repository::session_repository::MockCredentialSource;

    #[tokio::test]
    async fn unreadable_image_fails_before_any_network_io() {
        let mut credentials = MockCredentialSource::new();
        credentials.expect_access_token().returning(|| Ok(None));
        let client = ApiClient::new(&AppConfig::default(), Arc::new(credentials)).unwrap();

        let err = client
            .upload_analysis_image(Path::new("/definitely/not/here.jpg"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Storage(_)));
    }
}
