use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use bytes::Bytes;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::error;

use super::{parse::parse_analysis, prompt::build_prompt, ScanHints, VisionAnalysis};
use crate::{config::GeminiConfig, error::AppError};

/// Seam for the external multimodal model. Tests swap in fakes.
#[async_trait]
pub trait VisionClient: Send + Sync {
    /// Submits an image plus user hints and returns the parsed analysis.
    /// The image must be non-empty; nothing is persisted here.
    async fn analyze(
        &self,
        image: Bytes,
        mime_type: &str,
        hints: &ScanHints,
    ) -> Result<VisionAnalysis, AppError>;
}

#[derive(Clone)]
pub struct GeminiVision {
    client: Client,
    config: GeminiConfig,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    InlineData { inline_data: InlineData },
    Text { text: String },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: String,
}

impl GeminiVision {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn generate(&self, request: GeminiRequest) -> Result<String, AppError> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.config.model, self.config.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "vision model request failed");
                AppError::ModelCallFailed(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(%status, body = %body, "vision model returned an error");
            return Err(AppError::ModelCallFailed(format!("{status}: {body}")));
        }

        let parsed: GeminiResponse = response
            .json()
            .await
            .map_err(|e| AppError::ModelCallFailed(e.to_string()))?;

        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| AppError::ModelCallFailed("empty model response".into()))
    }
}

#[async_trait]
impl VisionClient for GeminiVision {
    async fn analyze(
        &self,
        image: Bytes,
        mime_type: &str,
        hints: &ScanHints,
    ) -> Result<VisionAnalysis, AppError> {
        if image.is_empty() {
            return Err(AppError::MissingImage);
        }

        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: mime_type.to_string(),
                            data: general_purpose::STANDARD.encode(&image),
                        },
                    },
                    Part::Text {
                        text: build_prompt(hints),
                    },
                ],
            }],
        };

        let text = self.generate(request).await?;
        parse_analysis(&text)
    }
}
