/// Authorization scheme prefix, including the single separating space.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Extract the token from an `Authorization` header value.
///
/// Returns everything after the case-sensitive `"Bearer "` prefix verbatim,
/// or an empty string when the prefix is missing. An empty token is rejected
/// later by token verification.
pub fn extract_token(header_value: &str) -> &str {
    header_value.strip_prefix(BEARER_PREFIX).unwrap_or("")
}
