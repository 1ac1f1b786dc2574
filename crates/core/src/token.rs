//! Token classification and the access-token refresh decision table.
//!
//! Tokens are stateless: each carries its subject id, its own expiry in
//! epoch milliseconds and its kind. Signing and signature verification live
//! in the API crate; this module only decides what a decoded pair means.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// Default access-token lifetime.
pub const ACCESS_TOKEN_TTL_MINUTES: i64 = 20;
/// Default refresh-token lifetime (7 days).
pub const REFRESH_TOKEN_TTL_MINUTES: i64 = 7 * 24 * 60;

const MILLIS_PER_MINUTE: i64 = 60_000;

/// Which half of a token pair a token is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    #[serde(rename = "ACCESS_TOKEN")]
    Access,
    #[serde(rename = "REFRESH_TOKEN")]
    Refresh,
}

/// Claims carried by both access and refresh tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject: the admin's database id.
    pub token_id: DbId,
    /// Expiry as epoch milliseconds.
    pub token_expiration_time: i64,
    pub token_type: TokenKind,
    /// Issued-at as epoch seconds.
    pub iat: i64,
}

impl TokenClaims {
    /// Build claims for `subject` expiring `ttl_minutes` after `now_ms`.
    pub fn new(subject: DbId, kind: TokenKind, ttl_minutes: i64, now_ms: i64) -> Self {
        Self {
            token_id: subject,
            token_expiration_time: expiry_after(now_ms, ttl_minutes),
            token_type: kind,
            iat: now_ms / 1_000,
        }
    }
}

/// Epoch-millisecond timestamp `ttl_minutes` after `now_ms`.
pub fn expiry_after(now_ms: i64, ttl_minutes: i64) -> i64 {
    now_ms.saturating_add(ttl_minutes.saturating_mul(MILLIS_PER_MINUTE))
}

/// Validity of a single token at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenState {
    Valid,
    Expired,
    Invalid,
}

/// Classify decoded claims (or a decode failure) at `now_ms`.
///
/// A token whose expiry is neither strictly in the past nor strictly in the
/// future (equal to now, or a zero/negative timestamp) is `Invalid`.
pub fn classify(claims: Option<&TokenClaims>, now_ms: i64) -> TokenState {
    let Some(claims) = claims else {
        return TokenState::Invalid;
    };
    let expires_at = claims.token_expiration_time;

    if expires_at <= 0 {
        TokenState::Invalid
    } else if expires_at < now_ms {
        TokenState::Expired
    } else if expires_at > now_ms {
        TokenState::Valid
    } else {
        TokenState::Invalid
    }
}

/// Outcome of evaluating an access/refresh pair.
///
/// This is the introspectable, non-throwing form of the decision. Use
/// [`RefreshDecision::into_result`] for the canonical error-returning policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RefreshDecision {
    /// Both tokens decoded but belong to different subjects.
    IdMismatch,
    /// Both tokens are still valid.
    BothValid,
    /// The access token is valid; the refresh token's state is irrelevant.
    AccessStillValid,
    /// At least one token failed verification or carries a bad expiry.
    InvalidTokens,
    /// Both tokens have expired; the caller must log in again.
    BothExpired,
    /// Mint a new access token for this subject.
    Mint { token_id: DbId },
}

impl RefreshDecision {
    /// Human-readable explanation, used as the error message on rejection.
    pub fn message(self) -> &'static str {
        match self {
            Self::IdMismatch => "Unauthorized, token id mismatch",
            Self::BothValid => "Unauthorized, tokens are valid, refresh is unnecessary",
            Self::AccessStillValid => {
                "Unauthorized, access token is still valid, refresh is unnecessary"
            }
            Self::InvalidTokens => "Unauthorized, invalid tokens",
            Self::BothExpired => "Unauthorized, both tokens have expired, please log in again",
            Self::Mint { .. } => "New access token issued",
        }
    }

    /// Apply the throwing policy: every outcome except `Mint` is `Unauthorized`.
    pub fn into_result(self) -> Result<DbId, CoreError> {
        match self {
            Self::Mint { token_id } => Ok(token_id),
            other => Err(CoreError::Unauthorized(other.message().into())),
        }
    }
}

/// Decide what to do with a decoded access/refresh pair.
///
/// `None` means the token failed verification. Rows are evaluated in order
/// and the first match wins:
///
/// | access  | refresh | outcome            |
/// |---------|---------|--------------------|
/// | valid   | valid   | `BothValid`        |
/// | valid   | any     | `AccessStillValid` |
/// | invalid | any     | `InvalidTokens`    |
/// | any     | invalid | `InvalidTokens`    |
/// | expired | expired | `BothExpired`      |
/// | expired | valid   | `Mint`             |
///
/// The subject-id comparison runs before classification.
pub fn decide_refresh(
    access: Option<&TokenClaims>,
    refresh: Option<&TokenClaims>,
    now_ms: i64,
) -> RefreshDecision {
    if let (Some(a), Some(r)) = (access, refresh) {
        if a.token_id != r.token_id {
            return RefreshDecision::IdMismatch;
        }
    }

    let access_state = classify(access, now_ms);
    let refresh_state = classify(refresh, now_ms);

    match (access_state, refresh_state) {
        (TokenState::Valid, TokenState::Valid) => RefreshDecision::BothValid,
        (TokenState::Valid, _) => RefreshDecision::AccessStillValid,
        (TokenState::Invalid, _) | (_, TokenState::Invalid) => RefreshDecision::InvalidTokens,
        (TokenState::Expired, TokenState::Expired) => RefreshDecision::BothExpired,
        (TokenState::Expired, TokenState::Valid) => match refresh {
            Some(claims) => RefreshDecision::Mint {
                token_id: claims.token_id,
            },
            None => RefreshDecision::InvalidTokens,
        },
    }
}
