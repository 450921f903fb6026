//! Salt/token digest authentication.
//!
//! Subsonic servers never receive the password itself. Each session proves
//! knowledge of it with a token:
//!
//! ```text
//! token = lowercase_hex(MD5(password + salt))
//! ```
//!
//! where `salt` is a freshly generated random string sent alongside the
//! token (`s` and `t` request parameters). MD5 is what the wire protocol
//! mandates; the salt is a transport nonce, not a cryptographic secret.

use md5::{Digest, Md5};
use rand::Rng;
use std::fmt::Write;

const SALT_CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Salt length in characters. The protocol recommends at least 6.
const SALT_LENGTH: usize = 10;

/// One authentication session: a salt and the token derived from it.
///
/// A default session has empty salt and token — requests made with it are
/// answered by the server with error code 40 (wrong credentials).
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Random salt transmitted as the `s` parameter.
    pub salt: String,
    /// MD5 digest of password + salt, transmitted as the `t` parameter.
    pub token: String,
}

impl Session {
    /// Derive a fresh salt/token pair for `password`.
    ///
    /// Every call generates a new salt, so two sessions for the same
    /// password are distinct.
    pub fn generate(password: &str) -> Self {
        let salt = random_salt(SALT_LENGTH);
        let token = digest(password, &salt);
        Self { salt, token }
    }
}

/// Random alphanumeric salt of `len` characters.
fn random_salt(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| SALT_CHARSET[rng.random_range(0..SALT_CHARSET.len())] as char)
        .collect()
}

/// Lowercase hex MD5 of `password + salt`.
fn digest(password: &str, salt: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(password.as_bytes());
    hasher.update(salt.as_bytes());
    let md = hasher.finalize();

    let mut token = String::with_capacity(md.len() * 2);
    for byte in md {
        write!(token, "{byte:02x}").expect("writing to a String cannot fail");
    }
    token
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_matches_protocol_documentation_example() {
        // The token example from the Subsonic API documentation.
        assert_eq!(
            digest("sesame", "c19b2d"),
            "26719a1196d2a940705a59634eb18eab"
        );
    }

    #[test]
    fn salt_is_alphanumeric_and_fixed_length() {
        let salt = random_salt(SALT_LENGTH);
        assert_eq!(salt.len(), SALT_LENGTH);
        assert!(salt.bytes().all(|b| SALT_CHARSET.contains(&b)));
    }

    #[test]
    fn generate_produces_distinct_sessions() {
        let a = Session::generate("hunter2");
        let b = Session::generate("hunter2");
        assert_ne!(a.salt, b.salt);
        assert_ne!(a.token, b.token);
        assert_eq!(a.token, digest("hunter2", &a.salt));
    }

    #[test]
    fn default_session_is_empty() {
        let session = Session::default();
        assert!(session.salt.is_empty());
        assert!(session.token.is_empty());
    }
}
