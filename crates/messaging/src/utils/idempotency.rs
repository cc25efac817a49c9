//! Idempotency tokens for create and send operations.

use uuid::Uuid;

/// Generate a fresh client request token
pub fn client_request_token() -> String {
    Uuid::new_v4().to_string()
}

/// Fill an absent token with a generated one, returning the token in use
pub fn ensure_token(token: &mut Option<String>) -> &str {
    token.get_or_insert_with(client_request_token)
}
