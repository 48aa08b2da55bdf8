//! Session token generation.

use base64::Engine as _;

/// Length of random bytes before base64 encoding.
const TOKEN_LENGTH_BYTES: usize = 24;

/// Generates a cryptographically secure random session token.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing a 32-character token.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_token() -> String {
    let mut buffer = [0u8; TOKEN_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}
