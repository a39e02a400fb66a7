//! Session error types for the delivery monitor.
//!
//! Every error here is recoverable: the shell prints it and refuses the
//! mutation, and the session keeps going. Crate-specific errors (e.g.
//! `ConfigError`, `ExportError`) live in their respective crates and converge
//! into `anyhow::Error` in `dctf-cli`.

use std::fmt;

use thiserror::Error;

/// A required input that was left empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    CertificateFile,
    CertificatePassword,
    CompanyName,
    CompanyTaxId,
}

impl InputField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CertificateFile => "certificate file",
            Self::CertificatePassword => "certificate password",
            Self::CompanyName => "company name",
            Self::CompanyTaxId => "company CNPJ",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which part of the session was empty when an operation needed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyStateKind {
    NoCertificate,
    NoCompanies,
}

impl fmt::Display for EmptyStateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCertificate => f.write_str("no certificate registered"),
            Self::NoCompanies => f.write_str("no companies registered"),
        }
    }
}

/// Errors raised by session operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    /// A required field was empty.
    #[error("Missing input: {field} is required")]
    MissingInput { field: InputField },

    /// A company with this CNPJ is already registered.
    #[error("CNPJ {tax_id} is already registered")]
    DuplicateTaxId { tax_id: String },

    /// The operation needs a certificate or at least one company.
    #[error("Nothing to do: {0}")]
    EmptyState(EmptyStateKind),

    /// Removal of a position that does not exist.
    #[error("Invalid company index {index} (registry has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    /// The status provider could not answer for a company.
    #[error("Status query failed for CNPJ {tax_id}: {reason}")]
    Provider { tax_id: String, reason: String },
}
