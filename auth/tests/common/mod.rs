#![allow(dead_code)]

use std::path::PathBuf;

use auth::HashingConfig;
use auth::KeyMaterial;
use auth::PasswordHasher;
use auth::TokenService;

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Key pair the services under test trust
pub fn key_material() -> KeyMaterial {
    KeyMaterial::new(fixture("private.pem"), fixture("public.pem"))
}

/// Unrelated key pair, for forged tokens
pub fn other_key_material() -> KeyMaterial {
    KeyMaterial::new(fixture("other_private.pem"), fixture("other_public.pem"))
}

pub fn token_service() -> TokenService {
    TokenService::new(key_material())
}

/// Low-cost hasher so tests stay fast
pub fn fast_hasher() -> PasswordHasher {
    PasswordHasher::with_config(&HashingConfig {
        memory_kib: 1024,
        iterations: 1,
        parallelism: 1,
    })
    .expect("Failed to build hasher")
}
