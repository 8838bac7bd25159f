use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::home::Cosmetic;

static SENTENCE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n|\.\s+").unwrap());

/// AI-generated narrative for one analysis, plus its product picks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    #[serde(default)]
    pub insight: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub skin_type: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub recommended_products: Vec<Cosmetic>,
}

impl Insight {
    /// Up to the first three sentences of the narrative, one per item.
    pub fn paragraphs(&self) -> Vec<String> {
        SENTENCE_BREAK
            .split(&self.insight)
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .take(3)
            .map(str::to_string)
            .collect()
    }
}
