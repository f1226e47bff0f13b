//! Core JWT handler implementation

use super::types::{Claims, JwtHandler};
use crate::config::AuthConfig;
use crate::core::models::User;
use crate::utils::error::{BackofficeError, Result};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};
use uuid::Uuid;

impl JwtHandler {
    /// Create a new JWT handler
    pub fn new(config: &AuthConfig) -> Self {
        let secret = config.jwt_secret.as_bytes();

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            expiration: config.jwt_expiration,
            issuer: config.issuer.clone(),
        }
    }

    /// Create an access token for a user
    pub fn create_access_token(&self, user: &User) -> Result<String> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| BackofficeError::internal(format!("System time error: {}", e)))?
            .as_secs();

        let claims = Claims {
            sub: user.id(),
            iat: now,
            exp: now + self.expiration,
            iss: self.issuer.clone(),
            jti: Uuid::new_v4().to_string(),
            role: user.role.clone(),
        };

        let header = Header::new(self.algorithm);
        let token = encode(&header, &claims, &self.encoding_key).map_err(BackofficeError::Jwt)?;

        debug!("Created access token for user: {}", user.id());
        Ok(token)
    }

    /// Verify and decode a token
    ///
    /// Signature, expiry, and issuer are all checked. Any failure is reported
    /// as a credential problem, not as an internal error.
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(self.algorithm);
        validation.set_issuer(&[&self.issuer]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            warn!("JWT verification failed: {}", e);
            BackofficeError::unauthenticated(format!("Invalid credentials: {}", e))
        })?;

        debug!("Token verified for user: {}", token_data.claims.sub);
        Ok(token_data.claims)
    }

    /// Extract the token from an Authorization header value
    pub fn extract_bearer(header_value: &str) -> Option<&str> {
        header_value.strip_prefix("Bearer ")
    }

    /// Get token expiration time in seconds
    pub fn expiration(&self) -> u64 {
        self.expiration
    }

    /// Check if token is expired
    pub fn is_token_expired(&self, claims: &Claims) -> bool {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(u64::MAX); // If system time is invalid, treat as expired

        claims.exp < now
    }
}
