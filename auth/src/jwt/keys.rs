use std::fs;
use std::path::Path;
use std::path::PathBuf;

use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;

use super::errors::KeyError;
use crate::config::KeyConfig;

/// Source of the RSA key pair used by the token service.
#[cfg_attr(test, mockall::automock)]
pub trait KeyProvider: Send + Sync {
    /// Private key used to sign tokens.
    fn signing_key(&self) -> Result<EncodingKey, KeyError>;

    /// Public key used to verify token signatures.
    fn verification_key(&self) -> Result<DecodingKey, KeyError>;
}

/// PEM key pair read from the file system on every call.
///
/// Nothing is cached, so every signature or verification pays one file read
/// and one PEM parse. Use [`KeyMaterial::preload`] when that cost matters more
/// than picking up a replaced key file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMaterial {
    private_key_path: PathBuf,
    public_key_path: PathBuf,
}

impl KeyMaterial {
    pub fn new(private_key_path: impl Into<PathBuf>, public_key_path: impl Into<PathBuf>) -> Self {
        Self {
            private_key_path: private_key_path.into(),
            public_key_path: public_key_path.into(),
        }
    }

    pub fn from_config(config: &KeyConfig) -> Self {
        Self::new(&config.private_key_path, &config.public_key_path)
    }

    /// Read and parse the PEM-encoded RSA private key.
    ///
    /// # Errors
    /// * `Unreadable` - File cannot be read
    /// * `Malformed` - File content is not an RSA private key in PEM format
    pub fn load_private_key(&self) -> Result<EncodingKey, KeyError> {
        let pem = read_pem(&self.private_key_path)?;

        EncodingKey::from_rsa_pem(&pem).map_err(|e| malformed(&self.private_key_path, e))
    }

    /// Read and parse the PEM-encoded RSA public key.
    ///
    /// # Errors
    /// * `Unreadable` - File cannot be read
    /// * `Malformed` - File content is not an RSA public key in PEM format
    pub fn load_public_key(&self) -> Result<DecodingKey, KeyError> {
        let pem = read_pem(&self.public_key_path)?;

        DecodingKey::from_rsa_pem(&pem).map_err(|e| malformed(&self.public_key_path, e))
    }

    /// Load both keys once and keep them in memory.
    pub fn preload(&self) -> Result<CachedKeyMaterial, KeyError> {
        Ok(CachedKeyMaterial {
            signing_key: self.load_private_key()?,
            verification_key: self.load_public_key()?,
        })
    }
}

impl KeyProvider for KeyMaterial {
    fn signing_key(&self) -> Result<EncodingKey, KeyError> {
        self.load_private_key()
    }

    fn verification_key(&self) -> Result<DecodingKey, KeyError> {
        self.load_public_key()
    }
}

/// Key pair parsed once at construction.
///
/// Replacing the key files on disk has no effect until a new instance is built.
#[derive(Clone)]
pub struct CachedKeyMaterial {
    signing_key: EncodingKey,
    verification_key: DecodingKey,
}

impl CachedKeyMaterial {
    /// Parse an in-memory PEM key pair.
    pub fn from_pem(private_key_pem: &[u8], public_key_pem: &[u8]) -> Result<Self, KeyError> {
        Ok(Self {
            signing_key: EncodingKey::from_rsa_pem(private_key_pem)
                .map_err(|e| malformed(Path::new("<memory>"), e))?,
            verification_key: DecodingKey::from_rsa_pem(public_key_pem)
                .map_err(|e| malformed(Path::new("<memory>"), e))?,
        })
    }
}

impl KeyProvider for CachedKeyMaterial {
    fn signing_key(&self) -> Result<EncodingKey, KeyError> {
        Ok(self.signing_key.clone())
    }

    fn verification_key(&self) -> Result<DecodingKey, KeyError> {
        Ok(self.verification_key.clone())
    }
}

fn read_pem(path: &Path) -> Result<Vec<u8>, KeyError> {
    fs::read(path).map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "Failed to read key file");
        KeyError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        }
    })
}

fn malformed(path: &Path, err: jsonwebtoken::errors::Error) -> KeyError {
    tracing::error!(path = %path.display(), error = %err, "Failed to parse PEM key");
    KeyError::Malformed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
