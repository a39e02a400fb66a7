//! Status query loop.

use chrono::Utc;

use dctf_core::entities::Company;
use dctf_core::errors::{EmptyStateKind, SessionError};
use dctf_core::responses::{QueryReport, StatusSummary};

use crate::provider::StatusProvider;
use crate::session::SessionContext;

/// Progress notification emitted before each company is queried.
#[derive(Debug, Clone, Copy)]
pub struct QueryProgress<'a> {
    /// 1-based position of `company` in the registry.
    pub position: usize,
    pub total: usize,
    pub company: &'a Company,
}

impl SessionContext {
    /// Query every registered company, in registry order, one at a time.
    ///
    /// Each company gets the status returned by `provider` and the current
    /// time as `last_checked`. The reporting period is not consulted.
    ///
    /// If the provider fails, the loop stops there: companies already checked
    /// keep their new status, the rest are untouched.
    ///
    /// # Errors
    ///
    /// - `SessionError::EmptyState` if no certificate is registered or the
    ///   registry is empty. Nothing is mutated.
    /// - `SessionError::Provider` if the provider fails or answers with a
    ///   status that is not a query outcome.
    pub async fn run_query<P>(
        &mut self,
        provider: &P,
        mut on_progress: impl FnMut(QueryProgress<'_>),
    ) -> Result<QueryReport, SessionError>
    where
        P: StatusProvider + ?Sized,
    {
        let Some(certificate) = self.certificate.as_ref() else {
            return Err(SessionError::EmptyState(EmptyStateKind::NoCertificate));
        };
        if self.companies.is_empty() {
            return Err(SessionError::EmptyState(EmptyStateKind::NoCompanies));
        }

        let total = self.companies.len();
        let started_at = Utc::now();
        tracing::info!(companies = total, "status query started");

        for (index, company) in self.companies.iter_mut().enumerate() {
            on_progress(QueryProgress {
                position: index + 1,
                total,
                company: &*company,
            });

            let status = match provider.query_status(certificate, company).await {
                Ok(status) if status.is_query_outcome() => status,
                Ok(status) => {
                    return Err(SessionError::Provider {
                        tax_id: company.tax_id.clone(),
                        reason: format!("provider answered with non-outcome status '{status}'"),
                    });
                }
                Err(error) => {
                    tracing::warn!(
                        tax_id = %company.tax_id,
                        checked = index,
                        %error,
                        "status query aborted"
                    );
                    return Err(error);
                }
            };

            company.record_check(status, Utc::now());
            tracing::debug!(tax_id = %company.tax_id, %status, "company checked");
        }

        let finished_at = Utc::now();
        let summary = StatusSummary::from_companies(&self.companies);
        tracing::info!(
            companies = total,
            delivered = summary.delivered,
            not_delivered = summary.not_delivered,
            pending = summary.pending,
            "status query finished"
        );

        Ok(QueryReport {
            checked: total,
            summary,
            started_at,
            finished_at,
        })
    }
}
