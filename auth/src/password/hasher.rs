use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::Error as HashError;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::errors::PasswordError;
use crate::config::HashingConfig;

/// Password hashing implementation.
///
/// Provides one-way password hashing (internally uses Argon2id). The work
/// factor is fixed when the hasher is built; every hash carries its own
/// parameters and salt in PHC string format, so verification keeps working
/// for hashes produced under an older configuration.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Create a new password hasher with the default work factor.
    ///
    /// # Returns
    /// PasswordHasher instance configured with secure defaults
    pub fn new() -> Self {
        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, Params::default()),
        }
    }

    /// Create a password hasher with an explicit work factor.
    ///
    /// # Arguments
    /// * `config` - Memory, iteration and parallelism costs
    ///
    /// # Errors
    /// * `InvalidConfig` - Parameters are outside the ranges Argon2 accepts
    pub fn with_config(config: &HashingConfig) -> Result<Self, PasswordError> {
        let params = Params::new(
            config.memory_kib,
            config.iterations,
            config.parallelism,
            None,
        )
        .map_err(|e| {
            tracing::error!(
                error = %e,
                memory_kib = config.memory_kib,
                iterations = config.iterations,
                parallelism = config.parallelism,
                "Rejected password hashing parameters"
            );
            PasswordError::InvalidConfig(e.to_string())
        })?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash a plaintext password.
    ///
    /// A fresh random salt is generated for every call, so hashing the same
    /// password twice yields two different strings.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| {
                tracing::error!(error = %e, "Password hashing failed");
                PasswordError::HashingFailed(e.to_string())
            })
    }

    /// Verify a password against a stored hash.
    ///
    /// Uses the salt and cost parameters embedded in `hash`. The digest
    /// comparison is constant-time.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored password hash in PHC string format
    ///
    /// # Errors
    /// * `Mismatch` - Password does not match the hash
    /// * `VerificationFailed` - Hash is corrupt or uses an unsupported algorithm
    pub fn verify(&self, password: &str, hash: &str) -> Result<(), PasswordError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|e| {
            PasswordError::VerificationFailed(format!("Invalid password hash: {}", e))
        })?;

        match self.argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(()),
            Err(HashError::Password) => Err(PasswordError::Mismatch),
            Err(e) => {
                tracing::error!(error = %e, "Stored password hash could not be verified");
                Err(PasswordError::VerificationFailed(e.to_string()))
            }
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_hasher() -> PasswordHasher {
        PasswordHasher::with_config(&HashingConfig {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        })
        .expect("Failed to build hasher")
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = fast_hasher();
        let password = "my_secure_password";

        let hash = hasher.hash(password).expect("Failed to hash password");

        assert_eq!(hasher.verify(password, &hash), Ok(()));
        assert_eq!(
            hasher.verify("wrong_password", &hash),
            Err(PasswordError::Mismatch)
        );
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = fast_hasher();

        let first = hasher.hash("password").expect("Failed to hash password");
        let second = hasher.hash("password").expect("Failed to hash password");

        assert_ne!(first, second);
        assert!(hasher.verify("password", &first).is_ok());
        assert!(hasher.verify("password", &second).is_ok());
    }

    #[test]
    fn test_hash_embeds_algorithm_and_cost() {
        let hash = fast_hasher().hash("password").expect("Failed to hash password");

        assert!(hash.starts_with("$argon2id$v=19$"));
        assert!(hash.contains("m=1024,t=1,p=1"));
    }

    #[test]
    fn test_default_cost() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("password").expect("Failed to hash password");

        assert!(hash.contains("m=19456,t=2,p=1"));
        assert!(hasher.verify("password", &hash).is_ok());
    }

    #[test]
    fn test_verify_uses_embedded_parameters() {
        let hash = fast_hasher().hash("password").expect("Failed to hash password");

        // Different configured cost, same stored hash.
        assert!(PasswordHasher::new().verify("password", &hash).is_ok());
    }

    #[test]
    fn test_verify_invalid_hash() {
        let hasher = fast_hasher();
        let result = hasher.verify("password", "invalid_hash");
        assert!(matches!(result, Err(PasswordError::VerificationFailed(_))));
    }

    #[test]
    fn test_invalid_config() {
        let result = PasswordHasher::with_config(&HashingConfig {
            memory_kib: 1024,
            iterations: 0,
            parallelism: 1,
        });
        assert!(matches!(result, Err(PasswordError::InvalidConfig(_))));
    }

    #[test]
    fn test_empty_password() {
        let hasher = fast_hasher();
        let hash = hasher.hash("").expect("Failed to hash password");

        assert!(hasher.verify("", &hash).is_ok());
        assert_eq!(hasher.verify(" ", &hash), Err(PasswordError::Mismatch));
    }
}
