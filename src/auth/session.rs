use jsonwebtoken::{decode, DecodingKey, Validation};

use crate::config::SessionConfig;

pub use super::claims::Claims;

/// Verifies a session token against the identity provider's shared secret,
/// pinning issuer and audience. Returns the claims on success.
pub fn verify_session_token(cfg: &SessionConfig, token: &str) -> anyhow::Result<Claims> {
    let mut validation = Validation::default();
    validation.set_issuer(std::slice::from_ref(&cfg.issuer));
    validation.set_audience(std::slice::from_ref(&cfg.audience));
    let decoding = DecodingKey::from_secret(cfg.secret.as_bytes());

    let data = decode::<Claims>(token, &decoding, &validation)?;
    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use time::{Duration, OffsetDateTime};

    fn make_config(secret: &str, issuer: &str, audience: &str) -> SessionConfig {
        SessionConfig {
            secret: secret.into(),
            issuer: issuer.into(),
            audience: audience.into(),
        }
    }

    fn sign_token(cfg: &SessionConfig, sub: &str, ttl_seconds: i64) -> String {
        let now = OffsetDateTime::now_utc();
        let exp = now + Duration::seconds(ttl_seconds);
        let claims = Claims {
            sub: sub.into(),
            iat: now.unix_timestamp() as usize,
            exp: exp.unix_timestamp() as usize,
            iss: cfg.issuer.clone(),
            aud: cfg.audience.clone(),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(cfg.secret.as_bytes()),
        )
        .expect("sign token")
    }

    #[test]
    fn verify_accepts_valid_token() {
        let cfg = make_config("dev-secret", "test-issuer", "test-aud");
        let token = sign_token(&cfg, "user_2abc", 300);
        let claims = verify_session_token(&cfg, &token).expect("verify");
        assert_eq!(claims.sub, "user_2abc");
        assert_eq!(claims.iss, "test-issuer");
        assert_eq!(claims.aud, "test-aud");
    }

    #[test]
    fn verify_rejects_wrong_secret() {
        let good = make_config("secret-a", "iss", "aud");
        let bad = make_config("secret-b", "iss", "aud");
        let token = sign_token(&good, "user_1", 300);
        assert!(verify_session_token(&bad, &token).is_err());
    }

    #[test]
    fn verify_rejects_wrong_issuer_or_audience() {
        let good = make_config("same-secret", "good-iss", "good-aud");
        let bad = make_config("same-secret", "bad-iss", "bad-aud");
        let token = sign_token(&good, "user_1", 300);
        assert!(verify_session_token(&bad, &token).is_err());
    }

    #[test]
    fn verify_rejects_expired_token() {
        let cfg = make_config("dev-secret", "iss", "aud");
        let token = sign_token(&cfg, "user_1", -300);
        assert!(verify_session_token(&cfg, &token).is_err());
    }
}
