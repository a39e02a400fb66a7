use chrono::{DateTime, Local, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::DeliveryStatus;

/// Display format for `last_checked`, in local time.
pub const LAST_CHECKED_FORMAT: &str = "%d/%m/%Y %H:%M";

/// A monitored company, keyed by its CNPJ.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Company {
    pub name: String,
    /// CNPJ as entered. Unique across the registry (exact match).
    pub tax_id: String,
    pub status: DeliveryStatus,
    pub last_checked: Option<DateTime<Utc>>,
}

impl Company {
    /// A company that has never been queried.
    #[must_use]
    pub fn new(name: &str, tax_id: &str) -> Self {
        Self {
            name: name.to_string(),
            tax_id: tax_id.to_string(),
            status: DeliveryStatus::Unverified,
            last_checked: None,
        }
    }

    /// Record the outcome of a status query.
    pub fn record_check(&mut self, status: DeliveryStatus, checked_at: DateTime<Utc>) {
        self.status = status;
        self.last_checked = Some(checked_at);
    }

    /// `last_checked` rendered with [`LAST_CHECKED_FORMAT`] in local time.
    #[must_use]
    pub fn last_checked_display(&self) -> Option<String> {
        self.last_checked.map(|ts| {
            ts.with_timezone(&Local)
                .format(LAST_CHECKED_FORMAT)
                .to_string()
        })
    }
}
