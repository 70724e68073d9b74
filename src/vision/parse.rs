use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

use crate::error::AppError;

lazy_static! {
    // Fenced code block with an optional language tag after the opening marker.
    static ref FENCE_RE: Regex =
        Regex::new(r"```(?:[A-Za-z0-9_-]+)?\s*([\s\S]*?)```").expect("fence regex");
}

/// The structured answer the model is instructed to produce. `healthScore`
/// is mandatory; the list fields default to empty. The model sometimes
/// echoes the user-supplied product fields back; they are captured here but
/// user input always wins during the merge.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisionAnalysis {
    pub product_name: Option<String>,
    pub net_weight: Option<String>,
    pub country: Option<String>,
    pub extracted_text: Option<String>,
    pub health_score: i32,
    #[serde(default)]
    pub health_risks: Vec<String>,
    pub consumption_frequency: Option<String>,
    #[serde(default)]
    pub alternatives: Vec<String>,
    pub age_suitability: Option<String>,
    #[serde(default)]
    pub warning_labels: Vec<String>,
}

/// Turns the model's free-text answer into a `VisionAnalysis`.
///
/// The answer may arrive wrapped in a fenced code block; one fence is
/// stripped, then the remainder must parse strictly. There is deliberately
/// no substring-scraping fallback: a non-conforming answer fails the whole
/// operation so the user can re-submit.
pub fn parse_analysis(raw: &str) -> Result<VisionAnalysis, AppError> {
    let text = FENCE_RE
        .captures(raw)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .unwrap_or(raw)
        .trim();

    serde_json::from_str(text).map_err(|e| AppError::MalformedModelResponse(e.to_string()))
}
