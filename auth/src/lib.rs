//! Authentication core library
//!
//! Provides the security-sensitive pieces of the registration, login and
//! profile flows:
//! - Password hashing (Argon2id)
//! - RS256 access and refresh token issuance and verification
//! - Bearer token extraction from `Authorization` headers
//! - Declarative password complexity validation
//!
//! Everything here works on plain values: no sockets, no database. HTTP
//! routing, persistence and process wiring belong to the embedding service.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).is_ok());
//! ```
//!
//! ## Tokens
//! ```no_run
//! use auth::{KeyMaterial, TokenService};
//!
//! let keys = KeyMaterial::new("storage/key.pem", "storage/key.pem.pub");
//! let service = TokenService::new(keys);
//! let token = service.issue_access_token(42).unwrap();
//! assert_eq!(service.verify(&token).unwrap(), "42");
//! ```
//!
//! ## Complete Authentication Flow
//! ```no_run
//! use auth::{AuthConfig, Authenticator};
//!
//! let config = AuthConfig::load().unwrap();
//! let auth = Authenticator::from_config(&config).unwrap();
//!
//! // Register: hash password
//! let hash = auth.hash_password("Password123!").unwrap();
//!
//! // Login: verify and issue tokens
//! let result = auth.authenticate("Password123!", &hash, 42).unwrap();
//!
//! // Authenticated request
//! let user_id = auth
//!     .authorize(&format!("Bearer {}", result.access_token))
//!     .unwrap();
//! assert_eq!(user_id, "42");
//! ```

pub mod authenticator;
pub mod bearer;
pub mod config;
pub mod jwt;
pub mod password;
pub mod validation;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use bearer::extract_token;
pub use crate::config::AuthConfig;
pub use crate::config::HashingConfig;
pub use crate::config::KeyConfig;
pub use jwt::CachedKeyMaterial;
pub use jwt::Claims;
pub use jwt::KeyError;
pub use jwt::KeyMaterial;
pub use jwt::KeyProvider;
pub use jwt::TokenError;
pub use jwt::TokenPair;
pub use jwt::TokenService;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use validation::ComplexityValidator;
pub use validation::FieldErrors;
