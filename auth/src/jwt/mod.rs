pub mod claims;
pub mod errors;
pub mod keys;
pub mod service;

pub use claims::Claims;
pub use claims::TokenKind;
pub use errors::KeyError;
pub use errors::TokenError;
pub use keys::CachedKeyMaterial;
pub use keys::KeyMaterial;
pub use keys::KeyProvider;
pub use service::TokenPair;
pub use service::TokenService;
