mod common;

use auth::AuthConfig;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::TokenError;

use crate::common::fast_hasher;
use crate::common::fixture;
use crate::common::key_material;
use crate::common::other_key_material;

fn authenticator() -> Authenticator {
    Authenticator::with_hasher(key_material(), fast_hasher())
}

#[test]
fn test_register_login_and_read_profile() {
    let auth = authenticator();

    // Registration
    let stored_hash = auth
        .hash_password("Test123/")
        .expect("Failed to hash password");

    // Login
    let tokens = auth
        .authenticate("Test123/", &stored_hash, 42)
        .expect("Authentication failed");

    // Profile read
    let user_id = auth
        .authorize(&format!("Bearer {}", tokens.access_token))
        .expect("Authorization failed");
    assert_eq!(user_id, "42");

    // The refresh token is valid but carries no identity
    let service = auth.token_service();
    assert!(service.verify_claims(&tokens.refresh_token).is_ok());
    assert_eq!(
        service.verify(&tokens.refresh_token),
        Err(TokenError::MissingSubject)
    );
    assert_eq!(
        auth.authorize(&format!("Bearer {}", tokens.refresh_token)),
        Err(AuthenticationError::Unauthorized)
    );
}

#[test]
fn test_wrong_password() {
    let auth = authenticator();
    let stored_hash = auth
        .hash_password("Test123/")
        .expect("Failed to hash password");

    assert_eq!(
        auth.authenticate("test123/", &stored_hash, 42),
        Err(AuthenticationError::InvalidCredentials)
    );
}

#[test]
fn test_forged_token_is_unauthorized() {
    let forger = Authenticator::with_hasher(other_key_material(), fast_hasher());
    let stored_hash = forger
        .hash_password("Test123/")
        .expect("Failed to hash password");
    let tokens = forger
        .authenticate("Test123/", &stored_hash, 42)
        .expect("Authentication failed");

    assert_eq!(
        authenticator().authorize(&format!("Bearer {}", tokens.access_token)),
        Err(AuthenticationError::Unauthorized)
    );
}

#[test]
fn test_from_config() {
    let document = format!(
        r#"
        [keys]
        private_key_path = "{}"
        public_key_path = "{}"

        [hashing]
        memory_kib = 1024
        iterations = 1
        parallelism = 1
        "#,
        fixture("private.pem").display(),
        fixture("public.pem").display(),
    );
    let config = AuthConfig::from_toml(&document).expect("Failed to parse configuration");
    let auth = Authenticator::from_config(&config).expect("Failed to build authenticator");

    let stored_hash = auth
        .hash_password("Test123/")
        .expect("Failed to hash password");
    assert!(stored_hash.contains("m=1024,t=1,p=1"));

    let tokens = auth
        .authenticate("Test123/", &stored_hash, 7)
        .expect("Authentication failed");
    assert_eq!(
        auth.authorize(&format!("Bearer {}", tokens.access_token)),
        Ok("7".to_string())
    );
}

#[test]
fn test_from_config_rejects_bad_cost() {
    let config = AuthConfig::from_toml(
        r#"
        [keys]
        private_key_path = "key.pem"
        public_key_path = "key.pem.pub"

        [hashing]
        parallelism = 0
        "#,
    )
    .expect("Failed to parse configuration");

    assert!(Authenticator::from_config(&config).is_err());
}
