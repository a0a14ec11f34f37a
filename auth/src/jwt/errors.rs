use thiserror::Error;

/// Error type for key material loading.
///
/// Both variants are deployment faults and should surface as server-side
/// errors, never as detail returned to a client.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("Failed to read key file {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("Invalid PEM key in {path}: {reason}")]
    Malformed { path: String, reason: String },
}

/// Error type for token issuance and verification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Key error: {0}")]
    Key(#[from] KeyError),

    #[error("Failed to sign token: {0}")]
    SigningFailed(String),

    #[error("Malformed token: {0}")]
    Malformed(String),

    #[error("Token signature is invalid")]
    SignatureInvalid,

    #[error("Token uses an unexpected signing algorithm")]
    AlgorithmMismatch,

    #[error("Token is expired")]
    Expired,

    #[error("Token has no subject claim")]
    MissingSubject,
}

impl TokenError {
    /// Whether the failure is caused by the presented token itself.
    ///
    /// These all collapse to a single "unauthorized" outcome at the service
    /// boundary. Key and signing failures are server-side faults.
    pub fn is_unauthorized(&self) -> bool {
        !matches!(self, TokenError::Key(_) | TokenError::SigningFailed(_))
    }
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidSignature => TokenError::SignatureInvalid,
            ErrorKind::InvalidAlgorithm => TokenError::AlgorithmMismatch,
            _ => TokenError::Malformed(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::errors::ErrorKind;

    use super::*;

    #[test]
    fn test_from_jwt_error() {
        assert_eq!(
            TokenError::from(jsonwebtoken::errors::Error::from(ErrorKind::ExpiredSignature)),
            TokenError::Expired
        );
        assert_eq!(
            TokenError::from(jsonwebtoken::errors::Error::from(ErrorKind::InvalidSignature)),
            TokenError::SignatureInvalid
        );
        assert_eq!(
            TokenError::from(jsonwebtoken::errors::Error::from(ErrorKind::InvalidAlgorithm)),
            TokenError::AlgorithmMismatch
        );
        assert!(matches!(
            TokenError::from(jsonwebtoken::errors::Error::from(ErrorKind::InvalidToken)),
            TokenError::Malformed(_)
        ));
    }

    #[test]
    fn test_is_unauthorized() {
        assert!(TokenError::Expired.is_unauthorized());
        assert!(TokenError::MissingSubject.is_unauthorized());
        assert!(TokenError::Malformed("bad".to_string()).is_unauthorized());
        assert!(!TokenError::SigningFailed("bad".to_string()).is_unauthorized());
        assert!(!TokenError::Key(KeyError::Unreadable {
            path: "key.pem".to_string(),
            reason: "not found".to_string(),
        })
        .is_unauthorized());
    }
}
