use serde::{Deserialize, Serialize};

/// Payload of a session JWT issued by the external identity provider.
/// `sub` is an opaque user identifier; the service never parses it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,  // user ID as minted by the identity provider
    pub iat: usize,   // issued at (unix timestamp)
    pub exp: usize,   // expires at (unix timestamp)
    pub iss: String,  // issuer
    pub aud: String,  // audience
}
