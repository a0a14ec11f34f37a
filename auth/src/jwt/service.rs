use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;
use super::keys::KeyMaterial;
use super::keys::KeyProvider;

/// Tokens handed out on a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Issues and verifies RS256-signed tokens.
///
/// The signing algorithm is pinned: verification rejects any token whose
/// header names a different algorithm, whatever key it was signed with.
pub struct TokenService<K = KeyMaterial> {
    keys: K,
    algorithm: Algorithm,
}

impl<K: KeyProvider> TokenService<K> {
    /// Create a token service over the given key source.
    pub fn new(keys: K) -> Self {
        Self {
            keys,
            algorithm: Algorithm::RS256,
        }
    }

    /// Issue an access token for `user_id`, valid for 24 hours.
    ///
    /// # Errors
    /// * `Key` - Private key cannot be loaded
    /// * `SigningFailed` - Token signing failed
    pub fn issue_access_token(&self, user_id: i64) -> Result<String, TokenError> {
        self.encode(&Claims::access(user_id, Utc::now()))
    }

    /// Issue a refresh token, valid for 7 days.
    ///
    /// The token does not carry `user_id` as its subject.
    pub fn issue_refresh_token(&self, user_id: i64) -> Result<String, TokenError> {
        tracing::debug!(user_id, "Issuing refresh token without subject claim");
        self.encode(&Claims::refresh(Utc::now()))
    }

    /// Issue the access and refresh tokens returned by a login.
    pub fn issue_token_pair(&self, user_id: i64) -> Result<TokenPair, TokenError> {
        Ok(TokenPair {
            access_token: self.issue_access_token(user_id)?,
            refresh_token: self.issue_refresh_token(user_id)?,
        })
    }

    /// Sign arbitrary claims.
    ///
    /// # Errors
    /// * `Key` - Private key cannot be loaded
    /// * `SigningFailed` - Token signing failed
    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        let key = self.keys.signing_key()?;
        let header = Header::new(self.algorithm);

        encode(&header, claims, &key).map_err(|e| {
            tracing::error!(error = %e, "Token signing failed");
            TokenError::SigningFailed(e.to_string())
        })
    }

    /// Verify a token and return the identity it carries.
    ///
    /// # Returns
    /// Subject claim rendered as a string
    ///
    /// # Errors
    /// * `Key` - Public key cannot be loaded
    /// * `Malformed` - Token is not a well-formed compact JWT
    /// * `AlgorithmMismatch` - Header names an algorithm other than RS256
    /// * `SignatureInvalid` - Signature does not match the public key
    /// * `Expired` - Expiration time is in the past
    /// * `MissingSubject` - Claims carry no usable subject (refresh tokens)
    pub fn verify(&self, token: &str) -> Result<String, TokenError> {
        let claims = self.verify_claims(token)?;

        claims.subject().ok_or_else(|| {
            tracing::debug!("Token rejected: no subject claim");
            TokenError::MissingSubject
        })
    }

    /// Verify signature, algorithm and expiry, and return the claims.
    ///
    /// Does not require a subject, so it accepts refresh tokens.
    pub fn verify_claims(&self, token: &str) -> Result<Claims, TokenError> {
        let key = self.keys.verification_key()?;

        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        decode::<Claims>(token, &key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                let err = TokenError::from(e);
                tracing::debug!(reason = %err, "Token rejected");
                err
            })
    }
}
