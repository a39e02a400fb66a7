//! Response types returned as JSON by `dctf` shell commands.
//!
//! These structs define the shape of output for commands like `status`,
//! `query`, `results`, `export`, and `certificate show`.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Certificate, Company, ReportingPeriod};
use crate::enums::DeliveryStatus;

/// Per-status counts over the registry.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusSummary {
    pub delivered: usize,
    pub not_delivered: usize,
    pub pending: usize,
    pub unverified: usize,
    pub total: usize,
}

impl StatusSummary {
    #[must_use]
    pub fn from_companies<'a>(companies: impl IntoIterator<Item = &'a Company>) -> Self {
        companies
            .into_iter()
            .fold(Self::default(), |mut summary, company| {
                match company.status {
                    DeliveryStatus::Delivered => summary.delivered += 1,
                    DeliveryStatus::NotDelivered => summary.not_delivered += 1,
                    DeliveryStatus::Pending => summary.pending += 1,
                    DeliveryStatus::Unverified => summary.unverified += 1,
                }
                summary.total += 1;
                summary
            })
    }
}

/// Response from `dctf query`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QueryReport {
    pub checked: usize,
    pub summary: StatusSummary,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Certificate metadata safe to display. Never includes the password.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CertificateInfo {
    pub file_name: String,
    pub encoded_len: usize,
}

impl From<&Certificate> for CertificateInfo {
    fn from(cert: &Certificate) -> Self {
        Self {
            file_name: cert.original_filename().to_string(),
            encoded_len: cert.encoded_bytes().len(),
        }
    }
}

/// A company together with its current position in the registry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CompanyEntry {
    pub index: usize,
    #[serde(flatten)]
    pub company: Company,
}

/// Response from `dctf results`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResultsResponse {
    pub companies: Vec<CompanyEntry>,
    pub summary: StatusSummary,
}

/// Response from `dctf export`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ExportResponse {
    pub path: String,
    pub rows: usize,
}

/// Response from `dctf status`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SessionOverview {
    /// File name of the registered certificate, if any.
    pub certificate_file: Option<String>,
    pub companies: usize,
    pub period: ReportingPeriod,
}
