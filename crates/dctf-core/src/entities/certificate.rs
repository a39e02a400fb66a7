use std::fmt;

use zeroize::Zeroizing;

/// A registered digital certificate (PFX/P12).
///
/// The three fields are always populated together; a session without a
/// certificate holds `None` instead of a partially filled value. The password
/// is wiped from memory on drop and never appears in `Debug` output.
#[derive(Clone)]
pub struct Certificate {
    original_filename: String,
    password: Zeroizing<String>,
    encoded_bytes: String,
}

impl Certificate {
    #[must_use]
    pub fn new(original_filename: &str, password: &str, encoded_bytes: String) -> Self {
        Self {
            original_filename: original_filename.to_string(),
            password: Zeroizing::new(password.to_string()),
            encoded_bytes,
        }
    }

    /// File name as it was given at registration.
    #[must_use]
    pub fn original_filename(&self) -> &str {
        &self.original_filename
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Base64 (standard alphabet, padded) of the certificate file bytes.
    #[must_use]
    pub fn encoded_bytes(&self) -> &str {
        &self.encoded_bytes
    }
}

impl fmt::Debug for Certificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Certificate")
            .field("original_filename", &self.original_filename)
            .field("password", &"<redacted>")
            .field("encoded_len", &self.encoded_bytes.len())
            .finish()
    }
}
