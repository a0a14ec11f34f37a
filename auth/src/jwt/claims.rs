use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

const ACCESS_TOKEN_EXPIRATION_HOURS: i64 = 24;
const REFRESH_TOKEN_EXPIRATION_HOURS: i64 = 24 * 7;

/// Kind of token issued by the token service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    /// Fixed lifetime of the token kind.
    pub fn lifetime(&self) -> Duration {
        match self {
            TokenKind::Access => Duration::hours(ACCESS_TOKEN_EXPIRATION_HOURS),
            TokenKind::Refresh => Duration::hours(REFRESH_TOKEN_EXPIRATION_HOURS),
        }
    }
}

/// Token payload.
///
/// `sub` is kept as a raw JSON value: access tokens carry the numeric user
/// identifier, while tokens from other issuers may use a string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Subject (user identifier), absent on refresh tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<Value>,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Claims for an access token identifying `user_id`.
    pub fn access(user_id: i64, issued_at: DateTime<Utc>) -> Self {
        Self::timed(TokenKind::Access, issued_at).with_subject(user_id)
    }

    /// Claims for a refresh token.
    ///
    /// Carries no subject, so it cannot pass identity verification.
    pub fn refresh(issued_at: DateTime<Utc>) -> Self {
        Self::timed(TokenKind::Refresh, issued_at)
    }

    fn timed(kind: TokenKind, issued_at: DateTime<Utc>) -> Self {
        Self {
            sub: None,
            iat: issued_at.timestamp(),
            exp: (issued_at + kind.lifetime()).timestamp(),
        }
    }

    /// Set subject.
    pub fn with_subject(mut self, sub: impl Into<Value>) -> Self {
        self.sub = Some(sub.into());
        self
    }

    /// Subject rendered as a string.
    ///
    /// Numbers and non-empty strings are accepted; any other JSON type counts
    /// as no subject.
    pub fn subject(&self) -> Option<String> {
        match self.sub.as_ref()? {
            Value::Number(number) => Some(number.to_string()),
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}
