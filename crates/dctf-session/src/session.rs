//! The session context: one per interactive session.

use dctf_core::entities::{Certificate, ReportingPeriod};
use dctf_core::responses::SessionOverview;

use crate::registry::CompanyRegistry;

/// Owns every piece of mutable session state.
///
/// Construction yields no certificate, an empty registry, and the
/// month-to-date reporting period.
#[derive(Debug, Default)]
pub struct SessionContext {
    pub(crate) certificate: Option<Certificate>,
    pub(crate) companies: CompanyRegistry,
    pub(crate) period: ReportingPeriod,
}

impl SessionContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn certificate(&self) -> Option<&Certificate> {
        self.certificate.as_ref()
    }

    #[must_use]
    pub const fn companies(&self) -> &CompanyRegistry {
        &self.companies
    }

    pub const fn companies_mut(&mut self) -> &mut CompanyRegistry {
        &mut self.companies
    }

    #[must_use]
    pub const fn period(&self) -> ReportingPeriod {
        self.period
    }

    /// Replace the reporting period. An inverted period is accepted.
    pub fn set_period(&mut self, period: ReportingPeriod) {
        if period.is_inverted() {
            tracing::warn!(%period, "reporting period starts after it ends");
        }
        self.period = period;
    }

    #[must_use]
    pub fn overview(&self) -> SessionOverview {
        SessionOverview {
            certificate_file: self
                .certificate
                .as_ref()
                .map(|cert| cert.original_filename().to_string()),
            companies: self.companies.len(),
            period: self.period,
        }
    }
}
