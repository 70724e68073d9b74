use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// One persisted health report. Created once by ingestion, then read-only;
/// there is no update or delete path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct HealthReport {
    pub id: Uuid,
    pub owner_id: String,
    pub product_name: String,
    pub net_weight: String,
    pub country: String,
    pub extracted_text: Option<String>,
    pub health_score: i32,
    pub health_risks: Vec<String>,
    pub consumption_frequency: Option<String>,
    pub alternatives: Vec<String>,
    pub age_suitability: Option<String>,
    pub warning_labels: Vec<String>,
    pub created_at: OffsetDateTime,
}

/// Store seam for health reports. All reads are owner-scoped; a report
/// belonging to another user is indistinguishable from a missing one.
#[async_trait]
pub trait ReportStore: Send + Sync {
    async fn insert(&self, report: &HealthReport) -> anyhow::Result<()>;
    async fn list_for_owner(&self, owner_id: &str) -> anyhow::Result<Vec<HealthReport>>;
    async fn get_for_owner(
        &self,
        id: Uuid,
        owner_id: &str,
    ) -> anyhow::Result<Option<HealthReport>>;
}

#[derive(Clone)]
pub struct PgReportStore {
    db: PgPool,
}

impl PgReportStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReportStore for PgReportStore {
    async fn insert(&self, report: &HealthReport) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO reports (
                id, owner_id, product_name, net_weight, country,
                extracted_text, health_score, health_risks,
                consumption_frequency, alternatives, age_suitability,
                warning_labels, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(report.id)
        .bind(&report.owner_id)
        .bind(&report.product_name)
        .bind(&report.net_weight)
        .bind(&report.country)
        .bind(&report.extracted_text)
        .bind(report.health_score)
        .bind(&report.health_risks)
        .bind(&report.consumption_frequency)
        .bind(&report.alternatives)
        .bind(&report.age_suitability)
        .bind(&report.warning_labels)
        .bind(report.created_at)
        .execute(&self.db)
        .await?;
        Ok(())
    }

    async fn list_for_owner(&self, owner_id: &str) -> anyhow::Result<Vec<HealthReport>> {
        let rows = sqlx::query_as::<_, HealthReport>(
            r#"
            SELECT id, owner_id, product_name, net_weight, country,
                   extracted_text, health_score, health_risks,
                   consumption_frequency, alternatives, age_suitability,
                   warning_labels, created_at
            FROM reports
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn get_for_owner(
        &self,
        id: Uuid,
        owner_id: &str,
    ) -> anyhow::Result<Option<HealthReport>> {
        let row = sqlx::query_as::<_, HealthReport>(
            r#"
            SELECT id, owner_id, product_name, net_weight, country,
                   extracted_text, health_score, health_risks,
                   consumption_frequency, alternatives, age_suitability,
                   warning_labels, created_at
            FROM reports
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }
}
