//! Token sealing for the stateless strategy.
//!
//! [`TokenCodec`] is the boundary behind which the cryptographic format
//! lives; the engine only ever asks for decode and encode. [`JwtCodec`] is
//! the bundled implementation: HMAC-signed JWTs with the registered claims
//! (`iat`, `exp`, `jti`) managed here and everything else passed through.

use async_trait::async_trait;
use authgate_core::claims::SessionClaims;
use authgate_core::error::BoxError;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

/// Decodes and re-encodes stateless session tokens.
///
/// Implementations verify integrity and expiry on decode; a token that
/// fails either check must return an error, never partial claims.
#[async_trait]
pub trait TokenCodec: Send + Sync {
    /// Verify `token` and return its claims.
    async fn decode(&self, token: &str) -> Result<SessionClaims, BoxError>;

    /// Seal `claims` into a fresh token expiring `max_age_secs` from now.
    ///
    /// Implementations own the registered claims: issue time, expiry, and
    /// the unique token id are stamped here, whatever the input carried.
    async fn encode(&self, claims: &SessionClaims, max_age_secs: i64) -> Result<String, BoxError>;
}

// ---------------------------------------------------------------------------
// JwtCodec
// ---------------------------------------------------------------------------

/// The signing algorithms [`JwtCodec`] accepts: the HMAC family only,
/// since one shared secret both signs and verifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HmacAlgorithm {
    HS256,
    HS384,
    HS512,
}

impl From<HmacAlgorithm> for Algorithm {
    fn from(algorithm: HmacAlgorithm) -> Self {
        match algorithm {
            HmacAlgorithm::HS256 => Algorithm::HS256,
            HmacAlgorithm::HS384 => Algorithm::HS384,
            HmacAlgorithm::HS512 => Algorithm::HS512,
        }
    }
}

/// HMAC-signed JWT codec. HS256 by default.
pub struct JwtCodec {
    /// Secret used to sign and verify tokens.
    secret: String,
    /// Signing algorithm; always one of the HMAC family.
    algorithm: Algorithm,
}

impl JwtCodec {
    /// Create an HS256 codec with the given signing secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            algorithm: Algorithm::HS256,
        }
    }

    /// Switch to another HMAC variant (HS384, HS512).
    pub fn with_algorithm(mut self, algorithm: HmacAlgorithm) -> Self {
        self.algorithm = algorithm.into();
        self
    }
}

#[async_trait]
impl TokenCodec for JwtCodec {
    async fn decode(&self, token: &str) -> Result<SessionClaims, BoxError> {
        let data = jsonwebtoken::decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            // Validates the signature and `exp` (with the default 60-second
            // leeway).
            &Validation::new(self.algorithm),
        )?;
        Ok(data.claims)
    }

    async fn encode(&self, claims: &SessionClaims, max_age_secs: i64) -> Result<String, BoxError> {
        let now = Utc::now().timestamp();

        let mut claims = claims.clone();
        claims.iat = Some(now);
        claims.exp = Some(now + max_age_secs);
        claims.jti = Some(Uuid::new_v4().to_string());

        let token = jsonwebtoken::encode(
            &Header::new(self.algorithm),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;
        Ok(token)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
