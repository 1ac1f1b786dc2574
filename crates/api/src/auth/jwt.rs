//! Signed access/refresh tokens and the access-token refresh flow.
//!
//! Both halves of a pair are HS256 JWTs carrying [`TokenClaims`], signed with
//! separate secrets. Expiry lives in the `token_expiration_time` claim (epoch
//! milliseconds) rather than the registered `exp` claim, so verification here
//! only checks the signature and token kind; [`classify`] decides validity.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use restaurant_core::error::CoreError;
use restaurant_core::token::{
    classify, decide_refresh, expiry_after, TokenClaims, TokenKind, TokenState, ACCESS_TOKEN_TTL_MINUTES,
    REFRESH_TOKEN_TTL_MINUTES,
};
use restaurant_core::types::DbId;
use serde::Serialize;

/// Secrets and lifetimes for both token kinds.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// HMAC-SHA256 secret for access tokens.
    pub access_secret: String,
    /// HMAC-SHA256 secret for refresh tokens.
    pub refresh_secret: String,
    /// Access token lifetime in minutes (default: 20).
    pub access_ttl_minutes: i64,
    /// Refresh token lifetime in minutes (default: 10080, one week).
    pub refresh_ttl_minutes: i64,
}

impl TokenConfig {
    /// Load token configuration from environment variables.
    ///
    /// | Env Var                     | Required | Default |
    /// |-----------------------------|----------|---------|
    /// | `ACCESS_TOKEN_SECRET`       | **yes**  | --      |
    /// | `REFRESH_TOKEN_SECRET`      | **yes**  | --      |
    /// | `ACCESS_TOKEN_TTL_MINUTES`  | no       | `20`    |
    /// | `REFRESH_TOKEN_TTL_MINUTES` | no       | `10080` |
    ///
    /// # Panics
    ///
    /// Panics if either secret is unset or empty, or a TTL is not an integer.
    pub fn from_env() -> Self {
        let access_secret = std::env::var("ACCESS_TOKEN_SECRET")
            .expect("ACCESS_TOKEN_SECRET must be set in the environment");
        assert!(!access_secret.is_empty(), "ACCESS_TOKEN_SECRET must not be empty");

        let refresh_secret = std::env::var("REFRESH_TOKEN_SECRET")
            .expect("REFRESH_TOKEN_SECRET must be set in the environment");
        assert!(!refresh_secret.is_empty(), "REFRESH_TOKEN_SECRET must not be empty");

        let access_ttl_minutes: i64 = std::env::var("ACCESS_TOKEN_TTL_MINUTES")
            .unwrap_or_else(|_| ACCESS_TOKEN_TTL_MINUTES.to_string())
            .parse()
            .expect("ACCESS_TOKEN_TTL_MINUTES must be a valid i64");

        let refresh_ttl_minutes: i64 = std::env::var("REFRESH_TOKEN_TTL_MINUTES")
            .unwrap_or_else(|_| REFRESH_TOKEN_TTL_MINUTES.to_string())
            .parse()
            .expect("REFRESH_TOKEN_TTL_MINUTES must be a valid i64");

        Self {
            access_secret,
            refresh_secret,
            access_ttl_minutes,
            refresh_ttl_minutes,
        }
    }

    fn secret(&self, kind: TokenKind) -> &[u8] {
        match kind {
            TokenKind::Access => self.access_secret.as_bytes(),
            TokenKind::Refresh => self.refresh_secret.as_bytes(),
        }
    }

    fn ttl_minutes(&self, kind: TokenKind) -> i64 {
        match kind {
            TokenKind::Access => self.access_ttl_minutes,
            TokenKind::Refresh => self.refresh_ttl_minutes,
        }
    }
}

/// A freshly signed access/refresh pair, as returned by login and register.
#[derive(Debug, Clone, Serialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Result of a successful refresh.
#[derive(Debug, Clone, Serialize)]
pub struct IssuedToken {
    pub access_token: String,
    /// Subject the new token was minted for.
    pub token_id: DbId,
    /// Expiry of the new token in epoch milliseconds.
    pub token_expiration_time: i64,
}

/// Current time in epoch milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Sign a token of `kind` for `subject`, expiring after the configured TTL.
pub fn issue_token(
    subject: DbId,
    kind: TokenKind,
    config: &TokenConfig,
    now_ms: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = TokenClaims::new(subject, kind, config.ttl_minutes(kind), now_ms);
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret(kind)),
    )
}

/// Sign both halves of a pair for `subject`.
pub fn issue_pair(
    subject: DbId,
    config: &TokenConfig,
    now_ms: i64,
) -> Result<TokenPair, jsonwebtoken::errors::Error> {
    Ok(TokenPair {
        access_token: issue_token(subject, TokenKind::Access, config, now_ms)?,
        refresh_token: issue_token(subject, TokenKind::Refresh, config, now_ms)?,
    })
}

/// Verify the signature of a token of `kind` and return its claims.
///
/// Returns `None` for a bad signature, malformed payload, or a token of the
/// other kind. Expiry is not checked here.
pub fn decode_token(token: &str, kind: TokenKind, config: &TokenConfig) -> Option<TokenClaims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    let data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(config.secret(kind)),
        &validation,
    )
    .ok()?;

    (data.claims.token_type == kind).then_some(data.claims)
}

/// Verify an access token and require it to be currently valid.
///
/// Returns the subject id on success.
pub fn authenticate_access_token(
    token: &str,
    config: &TokenConfig,
    now_ms: i64,
) -> Result<DbId, CoreError> {
    let claims = decode_token(token, TokenKind::Access, config);
    match (classify(claims.as_ref(), now_ms), claims) {
        (TokenState::Valid, Some(claims)) => Ok(claims.token_id),
        (TokenState::Expired, _) => Err(CoreError::Unauthorized(
            "Unauthorized, token has expired, refresh it at /api/v1/admin/auth/refresh-token"
                .into(),
        )),
        _ => Err(CoreError::Unauthorized("Unauthorized, invalid token".into())),
    }
}

/// Exchange an expired access token plus a valid refresh token for a new
/// access token.
///
/// Both tokens are required. Every rejection is [`CoreError::Unauthorized`];
/// see [`decide_refresh`] for the full decision table.
pub fn refresh_access_token(
    access_token: Option<&str>,
    refresh_token: Option<&str>,
    config: &TokenConfig,
    now_ms: i64,
) -> Result<IssuedToken, CoreError> {
    let (Some(access_token), Some(refresh_token)) = (
        access_token.filter(|t| !t.is_empty()),
        refresh_token.filter(|t| !t.is_empty()),
    ) else {
        return Err(CoreError::Unauthorized(
            "Unauthorized, no tokens provided".into(),
        ));
    };

    let access = decode_token(access_token, TokenKind::Access, config);
    let refresh = decode_token(refresh_token, TokenKind::Refresh, config);

    let subject = decide_refresh(access.as_ref(), refresh.as_ref(), now_ms).into_result()?;

    let token = issue_token(subject, TokenKind::Access, config, now_ms)
        .map_err(|e| CoreError::Internal(format!("Token signing error: {e}")))?;

    Ok(IssuedToken {
        access_token: token,
        token_id: subject,
        token_expiration_time: expiry_after(now_ms, config.access_ttl_minutes),
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    const NOW: i64 = 1_700_000_000_000;
    const MINUTE: i64 = 60_000;

    fn test_config() -> TokenConfig {
        TokenConfig {
            access_secret: "access-secret-that-is-long-enough".to_string(),
            refresh_secret: "refresh-secret-that-is-long-enough".to_string(),
            access_ttl_minutes: ACCESS_TOKEN_TTL_MINUTES,
            refresh_ttl_minutes: REFRESH_TOKEN_TTL_MINUTES,
        }
    }

    #[test]
    fn issued_token_decodes_with_matching_kind() {
        let config = test_config();
        let token = issue_token(42, TokenKind::Access, &config, NOW).unwrap();

        let claims = decode_token(&token, TokenKind::Access, &config).unwrap();
        assert_eq!(claims.token_id, 42);
        assert_eq!(claims.token_type, TokenKind::Access);
        assert_eq!(claims.token_expiration_time, NOW + 20 * MINUTE);
    }

    #[test]
    fn refresh_token_does_not_decode_as_access() {
        let config = test_config();
        let pair = issue_pair(1, &config, NOW).unwrap();

        assert!(decode_token(&pair.refresh_token, TokenKind::Access, &config).is_none());
        assert!(decode_token(&pair.access_token, TokenKind::Refresh, &config).is_none());
    }

    #[test]
    fn same_secret_wrong_kind_is_rejected() {
        let mut config = test_config();
        config.refresh_secret = config.access_secret.clone();
        let refresh = issue_token(1, TokenKind::Refresh, &config, NOW).unwrap();

        assert!(decode_token(&refresh, TokenKind::Access, &config).is_none());
    }

    #[test]
    fn different_secret_fails() {
        let config = test_config();
        let token = issue_token(1, TokenKind::Access, &config, NOW).unwrap();

        let mut other = test_config();
        other.access_secret = "some-other-secret".to_string();
        assert!(decode_token(&token, TokenKind::Access, &other).is_none());
    }

    #[test]
    fn authenticate_reports_expired_access_token() {
        let config = test_config();
        let token = issue_token(5, TokenKind::Access, &config, NOW).unwrap();

        assert_eq!(authenticate_access_token(&token, &config, NOW).unwrap(), 5);
        assert_matches!(
            authenticate_access_token(&token, &config, NOW + 21 * MINUTE),
            Err(CoreError::Unauthorized(msg)) if msg.contains("refresh-token")
        );
        assert_matches!(
            authenticate_access_token("garbage", &config, NOW),
            Err(CoreError::Unauthorized(msg)) if msg.contains("invalid")
        );
    }

    #[test]
    fn refresh_mints_access_token_for_refresh_subject() {
        let config = test_config();
        let pair = issue_pair(9, &config, NOW).unwrap();
        let later = NOW + 30 * MINUTE;

        let issued = refresh_access_token(
            Some(&pair.access_token),
            Some(&pair.refresh_token),
            &config,
            later,
        )
        .unwrap();

        assert_eq!(issued.token_id, 9);
        assert_eq!(issued.token_expiration_time, later + 20 * MINUTE);
        let claims = decode_token(&issued.access_token, TokenKind::Access, &config).unwrap();
        assert_eq!(claims.token_id, 9);
    }

    #[test]
    fn refresh_rejects_when_both_tokens_valid() {
        let config = test_config();
        let pair = issue_pair(9, &config, NOW).unwrap();

        assert_matches!(
            refresh_access_token(Some(&pair.access_token), Some(&pair.refresh_token), &config, NOW),
            Err(CoreError::Unauthorized(msg)) if msg.contains("refresh is unnecessary")
        );
    }

    #[test]
    fn refresh_rejects_when_both_tokens_expired() {
        let config = test_config();
        let pair = issue_pair(9, &config, NOW).unwrap();
        let much_later = NOW + (REFRESH_TOKEN_TTL_MINUTES + 1) * MINUTE;

        assert_matches!(
            refresh_access_token(
                Some(&pair.access_token),
                Some(&pair.refresh_token),
                &config,
                much_later
            ),
            Err(CoreError::Unauthorized(msg)) if msg.contains("log in again")
        );
    }

    #[test]
    fn refresh_rejects_mismatched_subjects() {
        let config = test_config();
        let access = issue_token(1, TokenKind::Access, &config, NOW).unwrap();
        let refresh = issue_token(2, TokenKind::Refresh, &config, NOW).unwrap();

        assert_matches!(
            refresh_access_token(Some(&access), Some(&refresh), &config, NOW + 30 * MINUTE),
            Err(CoreError::Unauthorized(msg)) if msg.contains("mismatch")
        );
    }

    #[test]
    fn refresh_requires_both_tokens() {
        let config = test_config();
        assert_matches!(
            refresh_access_token(None, Some("x"), &config, NOW),
            Err(CoreError::Unauthorized(msg)) if msg.contains("no tokens")
        );
        assert_matches!(
            refresh_access_token(Some("x"), Some(""), &config, NOW),
            Err(CoreError::Unauthorized(msg)) if msg.contains("no tokens")
        );
    }

    #[test]
    fn refresh_rejects_tampered_refresh_token() {
        let config = test_config();
        let pair = issue_pair(9, &config, NOW).unwrap();

        assert_matches!(
            refresh_access_token(
                Some(&pair.access_token),
                Some("not-a-token"),
                &config,
                NOW + 30 * MINUTE
            ),
            Err(CoreError::Unauthorized(msg)) if msg.contains("invalid tokens")
        );
    }
}
