use tokio::sync::RwLock;

use crate::domain::analysis::{AnalysisDigest, AnalysisResult};

#[derive(Debug, Default)]
struct AnalysisState {
    result: Option<AnalysisResult>,
    updated: bool,
    latest: Option<AnalysisDigest>,
}

/// The last completed analysis plus a one-shot dirty flag. The flag is
/// raised when a new result lands and stays up until a reader clears it;
/// nothing clears it automatically.
#[derive(Default)]
pub struct AnalysisStore {
    state: RwLock<AnalysisState>,
}

impl AnalysisStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the held result whole; the previous one is gone.
    pub async fn set_result(&self, result: AnalysisResult) {
        self.state.write().await.result = Some(result);
    }

    pub async fn result(&self) -> Option<AnalysisResult> {
        self.state.read().await.result.clone()
    }

    pub async fn mark_updated(&self) {
        self.state.write().await.updated = true;
    }

    pub async fn clear_updated(&self) {
        self.state.write().await.updated = false;
    }

    pub async fn is_updated(&self) -> bool {
        self.state.read().await.updated
    }

    pub async fn set_latest(&self, digest: AnalysisDigest) {
        self.state.write().await.latest = Some(digest);
    }

    pub async fn latest(&self) -> Option<AnalysisDigest> {
        self.state.read().await.latest.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(id: i64) -> AnalysisResult {
        AnalysisResult {
            analysis_id: id,
            skin_type: "DRY".to_string(),
            summary: String::new(),
            conditions: Vec::new(),
            regions: Vec::new(),
        }
    }

    #[tokio::test]
    async fn set_result_replaces_whole_value() {
        let store = AnalysisStore::new();
        store.set_result(result(1)).await;
        store.set_result(result(2)).await;
        assert_eq!(store.result().await.unwrap().analysis_id, 2);
    }

    #[tokio::test]
    async fn dirty_flag_is_caller_driven() {
        let store = AnalysisStore::new();
        assert!(!store.is_updated().await);

        store.mark_updated().await;
        assert!(store.is_updated().await);
        // nothing clears it implicitly
        assert!(store.is_updated().await);

        store.clear_updated().await;
        assert!(!store.is_updated().await);
    }
}
