//! Certificate registration.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use dctf_core::entities::Certificate;
use dctf_core::errors::{InputField, SessionError};
use dctf_core::responses::CertificateInfo;

use crate::session::SessionContext;

impl SessionContext {
    /// Register (or replace) the session certificate.
    ///
    /// The file bytes are stored base64-encoded; their contents are not
    /// inspected. Nothing changes when the file or the password is empty.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::MissingInput` if the file name, file bytes or
    /// password is empty.
    pub fn register_certificate(
        &mut self,
        file_name: &str,
        bytes: &[u8],
        password: &str,
    ) -> Result<&Certificate, SessionError> {
        if file_name.is_empty() || bytes.is_empty() {
            return Err(SessionError::MissingInput {
                field: InputField::CertificateFile,
            });
        }
        if password.is_empty() {
            return Err(SessionError::MissingInput {
                field: InputField::CertificatePassword,
            });
        }

        let replaced = self.certificate.is_some();
        let certificate = Certificate::new(file_name, password, STANDARD.encode(bytes));
        tracing::info!(file = file_name, bytes = bytes.len(), replaced, "certificate registered");

        Ok(self.certificate.insert(certificate))
    }

    /// Displayable metadata of the registered certificate.
    #[must_use]
    pub fn certificate_info(&self) -> Option<CertificateInfo> {
        self.certificate.as_ref().map(CertificateInfo::from)
    }
}
