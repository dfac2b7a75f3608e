//! Authentication of webhook calls by shared public key.

use crate::error::AppError;

/// Checks the `publickey` parameter of incoming webhook calls.
///
/// Tilda sends the project's public API key with every webhook; the call is
/// accepted only if it equals the configured key.
pub struct AuthService {
    public_key: String,
}

impl AuthService {
    /// Creates a new authentication service for the given public key.
    pub fn new(public_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
        }
    }

    /// Verifies a supplied public key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::WrongPublicKey`] if the key does not match.
    pub fn authenticate(&self, supplied: &str) -> Result<(), AppError> {
        if keys_match(self.public_key.as_bytes(), supplied.as_bytes()) {
            Ok(())
        } else {
            Err(AppError::WrongPublicKey)
        }
    }
}

/// Compares two keys without short-circuiting on the first differing byte.
fn keys_match(expected: &[u8], supplied: &[u8]) -> bool {
    if expected.len() != supplied.len() {
        return false;
    }

    expected
        .iter()
        .zip(supplied)
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}
