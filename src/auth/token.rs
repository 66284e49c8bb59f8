//! HS256 credential codec.
//!
//! Credentials use the compact `header.payload.signature` form, each segment
//! base64url without padding. Only `HS256` is accepted; the header is
//! inspected before any signature work so that `alg: none` and other
//! algorithms are refused outright.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::Deserialize;
use serde_json::Value;

use super::claims::{Claims, Role};

/// Failure kinds of [`TokenCodec`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("missing credential")]
    MissingCredential,
    #[error("malformed credential")]
    Malformed,
    #[error("invalid signature")]
    BadSignature,
    #[error("credential expired")]
    Expired,
    /// Claim absent or of the wrong type. Carries the claim name.
    #[error("invalid {0} claim")]
    MissingClaim(&'static str),
    #[error("signing secret is not configured")]
    SecretUnavailable,
    #[error("failed to sign credential: {0}")]
    Signing(String),
}

#[derive(Deserialize)]
struct RawHeader {
    alg: String,
}

/// Payload as it comes off the wire, before narrowing.
#[derive(Deserialize)]
struct RawClaims {
    #[serde(default)]
    authorized: Option<bool>,
    #[serde(default, rename = "userId")]
    user_id: Option<Value>,
    #[serde(default)]
    role: Option<Value>,
    exp: i64,
}

/// Mints and parses credentials with a process-wide HMAC secret.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("algorithm", &Algorithm::HS256)
            .finish_non_exhaustive()
    }
}

impl TokenCodec {
    /// Creates a codec keyed by `secret`.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::SecretUnavailable`] if `secret` is empty.
    pub fn new(secret: &str) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::SecretUnavailable);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against an explicit clock in `parse_at`.
        validation.validate_exp = false;
        validation.leeway = 0;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        })
    }

    /// Issues a credential for `user_id` with `role`, valid for 24 hours.
    pub fn mint(&self, user_id: u64, role: Role) -> Result<String, TokenError> {
        self.mint_at(user_id, role, Utc::now())
    }

    /// Issues a credential as if the current time were `issued_at`.
    pub fn mint_at(
        &self,
        user_id: u64,
        role: Role,
        issued_at: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let claims = Claims::new(user_id, role, issued_at);

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verifies `token` and returns its typed claims.
    pub fn parse(&self, token: &str) -> Result<Claims, TokenError> {
        self.parse_at(token, Utc::now())
    }

    /// Verifies `token` against the wall-clock instant `now`.
    ///
    /// # Errors
    ///
    /// - [`TokenError::MissingCredential`] for an empty string
    /// - [`TokenError::Malformed`] when the token is not three base64url JSON segments
    /// - [`TokenError::BadSignature`] when the header names any algorithm but `HS256`
    ///   or the signature does not verify
    /// - [`TokenError::Expired`] when `exp <= now`
    /// - [`TokenError::MissingClaim`] when `authorized`, `userId` or `role` is absent
    ///   or cannot be narrowed
    pub fn parse_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        if token.is_empty() {
            return Err(TokenError::MissingCredential);
        }

        ensure_hs256_header(token)?;

        let data = jsonwebtoken::decode::<RawClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    TokenError::BadSignature
                }
                _ => TokenError::Malformed,
            })?;

        let raw = data.claims;

        if raw.exp <= now.timestamp() {
            return Err(TokenError::Expired);
        }

        if raw.authorized != Some(true) {
            return Err(TokenError::MissingClaim("authorized"));
        }

        let user_id = raw
            .user_id
            .as_ref()
            .and_then(narrow_user_id)
            .ok_or(TokenError::MissingClaim("userId"))?;

        let role = raw
            .role
            .as_ref()
            .and_then(Value::as_str)
            .and_then(|s| s.parse::<Role>().ok())
            .ok_or(TokenError::MissingClaim("role"))?;

        Ok(Claims {
            authorized: true,
            user_id,
            role,
            exp: raw.exp,
        })
    }
}

/// Rejects tokens whose header does not declare `HS256`.
fn ensure_hs256_header(token: &str) -> Result<(), TokenError> {
    let mut segments = token.split('.');
    let (Some(header), Some(_), Some(_), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(TokenError::Malformed);
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(header)
        .map_err(|_| TokenError::Malformed)?;
    let header: RawHeader = serde_json::from_slice(&bytes).map_err(|_| TokenError::Malformed)?;

    if header.alg != "HS256" {
        return Err(TokenError::BadSignature);
    }

    Ok(())
}

/// 2^53: floats at or above this no longer identify a single integer.
const MAX_EXACT_FLOAT_ID: f64 = 9_007_199_254_740_992.0;

/// JSON numbers may arrive as floats; accept only non-negative integral values
/// a float represents exactly.
fn narrow_user_id(value: &Value) -> Option<u64> {
    let number = value.as_number()?;

    if let Some(id) = number.as_u64() {
        return Some(id);
    }

    let float = number.as_f64()?;
    if float >= 0.0 && float.fract() == 0.0 && float < MAX_EXACT_FLOAT_ID {
        Some(float as u64)
    } else {
        None
    }
}
