use std::env;
use std::path::PathBuf;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use config::FileFormat;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub keys: KeyConfig,
    #[serde(default)]
    pub hashing: HashingConfig,
}

/// Locations of the PEM-encoded RSA key pair used to sign and verify tokens.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct KeyConfig {
    pub private_key_path: PathBuf,
    pub public_key_path: PathBuf,
}

/// Argon2id work factor.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct HashingConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            memory_kib: 19456,
            iterations: 2,
            parallelism: 1,
        }
    }
}

impl AuthConfig {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. JWT_PRIVATE_KEY_PATH / JWT_PUBLIC_KEY_PATH
    /// 2. Prefixed environment variables (AUTH__KEYS__PRIVATE_KEY_PATH, AUTH__HASHING__ITERATIONS, etc.)
    /// 3. Environment-specific config file (config/auth/{environment}.toml)
    /// 4. Default config file (config/auth/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/auth/default").required(false))
            .add_source(File::with_name(&format!("config/auth/{}", run_mode)).required(false))
            // Example: AUTH__KEYS__PUBLIC_KEY_PATH=/etc/keys/jwt.pub overrides keys.public_key_path
            .add_source(
                Environment::with_prefix("AUTH")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .set_override_option(
                "keys.private_key_path",
                env::var("JWT_PRIVATE_KEY_PATH").ok(),
            )?
            .set_override_option("keys.public_key_path", env::var("JWT_PUBLIC_KEY_PATH").ok())?
            .build()?;

        let config: AuthConfig = configuration.try_deserialize()?;

        tracing::debug!(
            private_key_path = %config.keys.private_key_path.display(),
            public_key_path = %config.keys.public_key_path.display(),
            "Authentication configuration loaded"
        );

        Ok(config)
    }

    /// Build configuration from an inline TOML document.
    pub fn from_toml(document: &str) -> Result<Self, ConfigError> {
        ConfigBuilder::builder()
            .add_source(File::from_str(document, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_toml() {
        let config = AuthConfig::from_toml(
            r#"
            [keys]
            private_key_path = "/etc/auth/key.pem"
            public_key_path = "/etc/auth/key.pem.pub"

            [hashing]
            memory_kib = 4096
            iterations = 3
            parallelism = 2
            "#,
        )
        .expect("Failed to parse configuration");

        assert_eq!(
            config.keys,
            KeyConfig {
                private_key_path: PathBuf::from("/etc/auth/key.pem"),
                public_key_path: PathBuf::from("/etc/auth/key.pem.pub"),
            }
        );
        assert_eq!(
            config.hashing,
            HashingConfig {
                memory_kib: 4096,
                iterations: 3,
                parallelism: 2,
            }
        );
    }

    #[test]
    fn test_hashing_defaults() {
        let config = AuthConfig::from_toml(
            r#"
            [keys]
            private_key_path = "key.pem"
            public_key_path = "key.pem.pub"

            [hashing]
            iterations = 4
            "#,
        )
        .expect("Failed to parse configuration");

        assert_eq!(config.hashing.memory_kib, 19456);
        assert_eq!(config.hashing.iterations, 4);
        assert_eq!(config.hashing.parallelism, 1);
    }

    #[test]
    fn test_missing_keys_section() {
        let result = AuthConfig::from_toml("[hashing]\niterations = 2\n");
        assert!(result.is_err());
    }
}
