use serde::Deserialize;

/// Settings for verifying session tokens minted by the external identity
/// provider. The service never issues tokens itself.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub session: SessionConfig,
    pub gemini: GeminiConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let session = SessionConfig {
            secret: std::env::var("SESSION_JWT_SECRET")?,
            issuer: std::env::var("SESSION_JWT_ISSUER").unwrap_or_else(|_| "truthtag".into()),
            audience: std::env::var("SESSION_JWT_AUDIENCE")
                .unwrap_or_else(|_| "truthtag-app".into()),
        };
        let gemini = GeminiConfig {
            api_key: std::env::var("GEMINI_API_KEY")?,
            model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-1.5-flash".into()),
        };
        Ok(Self {
            database_url,
            session,
            gemini,
        })
    }
}
