use crate::bearer::extract_token;
use crate::config::AuthConfig;
use crate::jwt::KeyMaterial;
use crate::jwt::KeyProvider;
use crate::jwt::TokenError;
use crate::jwt::TokenService;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token issuance.
///
/// Backs the login flow (verify password, issue tokens) and the
/// authenticated-request flow (read header, verify token).
pub struct Authenticator<K = KeyMaterial> {
    password_hasher: PasswordHasher,
    token_service: TokenService<K>,
}

/// Result of successful authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationResult {
    /// Access token, valid for 24 hours
    pub access_token: String,
    /// Refresh token, valid for 7 days
    pub refresh_token: String,
}

/// Authentication operation errors.
///
/// `InvalidCredentials` and `Unauthorized` are the only client-facing
/// variants; the others are server-side faults.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

impl Authenticator<KeyMaterial> {
    /// Create an authenticator from loaded configuration.
    ///
    /// Keys are read from the configured paths on every token operation.
    ///
    /// # Errors
    /// * `InvalidConfig` - Hashing parameters are out of range
    pub fn from_config(config: &AuthConfig) -> Result<Self, PasswordError> {
        Ok(Self::with_hasher(
            KeyMaterial::from_config(&config.keys),
            PasswordHasher::with_config(&config.hashing)?,
        ))
    }
}

impl<K: KeyProvider> Authenticator<K> {
    /// Create a new authenticator with the default hashing cost.
    ///
    /// # Arguments
    /// * `keys` - Source of the RSA signing and verification keys
    pub fn new(keys: K) -> Self {
        Self::with_hasher(keys, PasswordHasher::new())
    }

    pub fn with_hasher(keys: K, password_hasher: PasswordHasher) -> Self {
        Self {
            password_hasher,
            token_service: TokenService::new(keys),
        }
    }

    pub fn token_service(&self) -> &TokenService<K> {
        &self.token_service
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue access and refresh tokens.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `user_id` - Identifier of the user owning `stored_hash`
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash is unusable
    /// * `TokenError` - Token issuance failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        user_id: i64,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        match self.password_hasher.verify(password, stored_hash) {
            Ok(()) => {}
            Err(PasswordError::Mismatch) => return Err(AuthenticationError::InvalidCredentials),
            Err(e) => return Err(e.into()),
        }

        let tokens = self.token_service.issue_token_pair(user_id)?;

        Ok(AuthenticationResult {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        })
    }

    /// Resolve the user identifier from an `Authorization` header value.
    ///
    /// Every problem with the presented token collapses to `Unauthorized`;
    /// the specific reason is only logged.
    ///
    /// # Errors
    /// * `Unauthorized` - Missing, malformed, expired or otherwise invalid token
    /// * `TokenError` - Verification key cannot be loaded
    pub fn authorize(&self, authorization_header: &str) -> Result<String, AuthenticationError> {
        let token = extract_token(authorization_header);

        self.token_service.verify(token).map_err(|e| {
            if e.is_unauthorized() {
                tracing::warn!(reason = %e, "Token validation failed");
                AuthenticationError::Unauthorized
            } else {
                tracing::error!(error = %e, "Token verification could not run");
                AuthenticationError::TokenError(e)
            }
        })
    }
}
