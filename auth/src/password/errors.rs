use thiserror::Error;

/// Error type for password operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Invalid password hashing configuration: {0}")]
    InvalidConfig(String),

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),

    /// The password does not match the stored hash. This is an expected
    /// outcome, not an internal failure.
    #[error("Password does not match")]
    Mismatch,
}
