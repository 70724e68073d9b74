use bytes::Bytes;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use super::repo::HealthReport;

/// Display bucket derived from the health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreBand {
    Excellent,
    Average,
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: i32) -> Self {
        if score >= 80 {
            ScoreBand::Excellent
        } else if score >= 60 {
            ScoreBand::Average
        } else {
            ScoreBand::Poor
        }
    }
}

/// Fields collected from the multipart scan submission. All text fields are
/// optional; missing ones fall back to placeholders during ingestion.
#[derive(Debug, Default)]
pub struct ScanForm {
    pub product_name: Option<String>,
    pub net_weight: Option<String>,
    pub country: Option<String>,
    pub image: Option<Bytes>,
    pub content_type: Option<String>,
}

/// Report as rendered to the dashboard and detail views.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    pub id: Uuid,
    pub owner_id: String,
    pub product_name: String,
    pub net_weight: String,
    pub country: String,
    pub extracted_text: Option<String>,
    pub health_score: i32,
    pub score_band: ScoreBand,
    pub health_risks: Vec<String>,
    pub consumption_frequency: Option<String>,
    pub alternatives: Vec<String>,
    pub age_suitability: Option<String>,
    pub warning_labels: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<HealthReport> for ReportResponse {
    fn from(r: HealthReport) -> Self {
        Self {
            score_band: ScoreBand::from_score(r.health_score),
            id: r.id,
            owner_id: r.owner_id,
            product_name: r.product_name,
            net_weight: r.net_weight,
            country: r.country,
            extracted_text: r.extracted_text,
            health_score: r.health_score,
            health_risks: r.health_risks,
            consumption_frequency: r.consumption_frequency,
            alternatives: r.alternatives,
            age_suitability: r.age_suitability,
            warning_labels: r.warning_labels,
            created_at: r.created_at,
        }
    }
}

/// Envelope for the history listing.
#[derive(Debug, Serialize)]
pub struct ScanHistoryResponse {
    pub success: bool,
    pub data: Vec<ReportResponse>,
}

/// Envelope for the detail view.
#[derive(Debug, Serialize)]
pub struct ReportEnvelope {
    pub data: Option<ReportResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn sample_report() -> HealthReport {
        HealthReport {
            id: Uuid::new_v4(),
            owner_id: "user_2abc".into(),
            product_name: "Apple Juice".into(),
            net_weight: "500 ml".into(),
            country: "India".into(),
            extracted_text: Some("100% juice, no added sugar".into()),
            health_score: 85,
            health_risks: vec!["High sugar".into()],
            consumption_frequency: Some("Weekly".into()),
            alternatives: vec!["Fresh fruit".into()],
            age_suitability: Some("All ages".into()),
            warning_labels: vec![],
            created_at: datetime!(2025-03-01 12:00:00 UTC),
        }
    }

    #[test]
    fn score_band_thresholds() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(80), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(79), ScoreBand::Average);
        assert_eq!(ScoreBand::from_score(60), ScoreBand::Average);
        assert_eq!(ScoreBand::from_score(59), ScoreBand::Poor);
        assert_eq!(ScoreBand::from_score(0), ScoreBand::Poor);
    }

    #[test]
    fn report_response_uses_camel_case_field_names() {
        let v = serde_json::to_value(ReportResponse::from(sample_report())).expect("serialize");
        assert_eq!(v["productName"], "Apple Juice");
        assert_eq!(v["netWeight"], "500 ml");
        assert_eq!(v["ownerId"], "user_2abc");
        assert_eq!(v["healthScore"], 85);
        assert_eq!(v["scoreBand"], "Excellent");
        assert_eq!(v["healthRisks"][0], "High sugar");
        assert_eq!(v["consumptionFrequency"], "Weekly");
        assert!(v["createdAt"].as_str().unwrap().starts_with("2025-03-01"));
    }
}
