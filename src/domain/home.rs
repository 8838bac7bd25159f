use serde::{Deserialize, Serialize};

use crate::domain::history::HistoryEntry;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkinStatus {
    #[serde(default)]
    pub moisture: f32,
    #[serde(default)]
    pub elasticity: f32,
    #[serde(default)]
    pub pore: f32,
    #[serde(default)]
    pub pigmentation: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cosmetic {
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// One recommendation block, e.g. category MOISTURE with its product picks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationSection {
    pub category: String,
    pub title: String,
    pub guide: String,
    #[serde(default)]
    pub products: Vec<Cosmetic>,
}

/// Full dashboard snapshot. Refetched whole every time; never patched.
/// Sections the backend omits collapse to their empty defaults, matching
/// the tolerant reads the home screen always did.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeDashboard {
    #[serde(default)]
    pub skin_status: SkinStatus,
    #[serde(default)]
    pub recommendations: Vec<RecommendationSection>,
    #[serde(default)]
    pub recent_histories: Vec<HistoryEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_payload_fills_defaults() {
        let dashboard: HomeDashboard = serde_json::from_str(
            r#"{"skinStatus": {"moisture": 71.5, "elasticity": 60.0}}"#,
        )
        .unwrap();
        assert_eq!(dashboard.skin_status.moisture, 71.5);
        assert_eq!(dashboard.skin_status.pore, 0.0);
        assert!(dashboard.recommendations.is_empty());
        assert!(dashboard.recent_histories.is_empty());
    }

    #[test]
    fn full_payload_round_trips() {
        let raw = r#"{
            "skinStatus": {"moisture": 55, "elasticity": 48, "pore": 62, "pigmentation": 70},
            "recommendations": [{
                "category": "MOISTURE",
                "title": "수분",
                "guide": "집중 케어가 필요해요",
                "products": [{"name": "하이드라 크림", "brand": "랩솔루션", "link": "https://example.com/p/1"}]
            }],
            "recentHistories": [
                {"analysisId": 3, "date": "2025-01-19", "skinType": "COMBINATION", "summary": "요약"}
            ]
        }"#;
        let dashboard: HomeDashboard = serde_json::from_str(raw).unwrap();
        assert_eq!(dashboard.recommendations[0].products[0].name, "하이드라 크림");
        assert_eq!(dashboard.recommendations[0].products[0].image_url, None);
        assert_eq!(dashboard.recent_histories[0].analysis_id, 3);
    }
}
