//! Identity gate for bearer-token authentication.
//!
//! `IdentityGate` verifies HS256 JSON Web Tokens and yields the caller identity carried in the
//! token subject. Controllers guard protected routes with
//! `AuthGuard::new(&state.identity_gate, &headers).require()?` before touching any service.
//! Token issuance lives outside this backend; the gate never inspects anything beyond the
//! signature, expiry and subject.

use axum::http::{header::AUTHORIZATION, HeaderMap};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, AppError};

/// Claims expected in a bearer token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Caller identity.
    pub sub: String,
    /// Expiry as a Unix timestamp in seconds.
    pub exp: u64,
}

/// Identity attached to an authenticated request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub subject: String,
}

/// Verifies bearer credentials against the configured secret.
#[derive(Clone)]
pub struct IdentityGate {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl IdentityGate {
    /// Creates a gate verifying HS256 tokens signed with `secret`.
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Authenticates a raw token.
    ///
    /// # Returns
    /// - `Ok(Identity)` - Signature and expiry are valid
    /// - `Err(AuthError::InvalidCredential)` - Token is malformed, forged or expired
    pub fn authenticate(&self, token: &str) -> Result<Identity, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;

        Ok(Identity {
            subject: data.claims.sub,
        })
    }
}

/// Per-request guard extracting and verifying the `Authorization: Bearer` header.
pub struct AuthGuard<'a> {
    gate: &'a IdentityGate,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(gate: &'a IdentityGate, headers: &'a HeaderMap) -> Self {
        Self { gate, headers }
    }

    /// Requires a valid bearer token on the current request.
    ///
    /// # Returns
    /// - `Ok(Identity)` - Caller identity from the token subject
    /// - `Err(AppError::AuthErr(MissingCredential))` - No bearer header present
    /// - `Err(AppError::AuthErr(InvalidCredential))` - Token failed verification
    pub fn require(&self) -> Result<Identity, AppError> {
        let Some(token) = bearer_token(self.headers) else {
            return Err(AuthError::MissingCredential.into());
        };

        let identity = self.gate.authenticate(token)?;

        tracing::debug!("Authenticated request for {}", identity.subject);

        Ok(identity)
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
///
/// The scheme is matched case-insensitively; an empty token counts as absent.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
