use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The six facial zones the backend scores independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FaceRegion {
    Forehead,
    LeftEye,
    RightEye,
    LeftCheek,
    RightCheek,
    Lip,
}

impl FaceRegion {
    pub const ALL: [FaceRegion; 6] = [
        FaceRegion::Forehead,
        FaceRegion::LeftEye,
        FaceRegion::RightEye,
        FaceRegion::LeftCheek,
        FaceRegion::RightCheek,
        FaceRegion::Lip,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConditionLevel {
    Good,
    Normal,
    Low,
    Bad,
}

/// One scored condition, e.g. MOISTURE at 62 rated NORMAL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionCondition {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: f32,
    pub level: ConditionLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionView {
    pub region: FaceRegion,
    pub conditions: Vec<RegionCondition>,
}

impl RegionView {
    pub fn value_of(&self, kind: &str) -> Option<f32> {
        self.conditions.iter().find(|c| c.kind == kind).map(|c| c.value)
    }
}

/// One completed server-side analysis. `analysis_id` is the only field the
/// client refuses to live without; everything else degrades to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub analysis_id: i64,
    #[serde(default)]
    pub skin_type: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub conditions: Vec<RegionCondition>,
    #[serde(default)]
    pub regions: Vec<RegionView>,
}

impl AnalysisResult {
    pub fn region(&self, region: FaceRegion) -> Option<&RegionView> {
        self.regions.iter().find(|r| r.region == region)
    }
}

/// Compact summary of the most recent analysis, cached for the home screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisDigest {
    pub analysis_id: i64,
    pub skin_type: String,
    pub summary: String,
    pub date: NaiveDate,
}

impl AnalysisDigest {
    pub fn from_result(result: &AnalysisResult, date: NaiveDate) -> Self {
        Self {
            analysis_id: result.analysis_id,
            skin_type: result.skin_type.clone(),
            summary: result.summary.clone(),
            date,
        }
    }
}
