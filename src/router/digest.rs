use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use sha2::{Digest, Sha256};

/// Hash an admin password into the digest the router's login form expects:
/// SHA-256 over the UTF-8 bytes, base64-encoded.
pub fn password_digest(password: &str) -> String {
    let hash = Sha256::digest(password.as_bytes());
    BASE64.encode(hash)
}
