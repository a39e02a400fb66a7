//! Status providers: the capability a status query delegates to.
//!
//! A provider answers one question: what is the delivery status of this
//! company, given these credentials. [`SimulatedStatusProvider`] stands in for
//! a real portal client and draws a random outcome after a fixed delay.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use dctf_core::entities::{Certificate, Company};
use dctf_core::enums::DeliveryStatus;
use dctf_core::errors::SessionError;

/// Looks up the delivery status of one company.
///
/// Implementations must return one of [`DeliveryStatus::QUERY_OUTCOMES`].
#[async_trait]
pub trait StatusProvider: Send + Sync {
    /// Query the status of `company` authenticating with `certificate`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Provider` when the status cannot be determined.
    async fn query_status(
        &self,
        certificate: &Certificate,
        company: &Company,
    ) -> Result<DeliveryStatus, SessionError>;
}

/// Simulated provider: sleeps for `delay`, then picks a query outcome uniformly.
pub struct SimulatedStatusProvider {
    delay: Duration,
    rng: Mutex<StdRng>,
}

impl SimulatedStatusProvider {
    /// Provider seeded from OS entropy.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self::with_rng(delay, StdRng::from_entropy())
    }

    /// Provider with a fixed seed; the same seed yields the same sequence.
    #[must_use]
    pub fn seeded(delay: Duration, seed: u64) -> Self {
        Self::with_rng(delay, StdRng::seed_from_u64(seed))
    }

    fn with_rng(delay: Duration, rng: StdRng) -> Self {
        Self {
            delay,
            rng: Mutex::new(rng),
        }
    }

    fn draw(&self, company: &Company) -> Result<DeliveryStatus, SessionError> {
        let mut rng = self.rng.lock().map_err(|_| SessionError::Provider {
            tax_id: company.tax_id.clone(),
            reason: "random source poisoned".into(),
        })?;
        DeliveryStatus::QUERY_OUTCOMES
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| SessionError::Provider {
                tax_id: company.tax_id.clone(),
                reason: "no outcomes to draw from".into(),
            })
    }
}

impl std::fmt::Debug for SimulatedStatusProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulatedStatusProvider")
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl StatusProvider for SimulatedStatusProvider {
    async fn query_status(
        &self,
        _certificate: &Certificate,
        company: &Company,
    ) -> Result<DeliveryStatus, SessionError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.draw(company)
    }
}
