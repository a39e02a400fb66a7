//! Status enums for the delivery monitor.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! The Portuguese labels returned by `label()` are what the tables and the CSV
//! export show to the user.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// DeliveryStatus
// ---------------------------------------------------------------------------

/// Delivery status of a company's declaration for the selected period.
///
/// ```text
/// unverified → delivered
///            → not_delivered
///            → pending
/// ```
///
/// Every query overwrites the status, so a checked company can move between
/// any of the three query outcomes. Only a freshly added company is `unverified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    #[default]
    Unverified,
    Delivered,
    NotDelivered,
    Pending,
}

impl DeliveryStatus {
    /// Statuses a query can assign.
    pub const QUERY_OUTCOMES: [Self; 3] = [Self::Delivered, Self::NotDelivered, Self::Pending];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unverified => "unverified",
            Self::Delivered => "delivered",
            Self::NotDelivered => "not_delivered",
            Self::Pending => "pending",
        }
    }

    /// User-facing label, as shown on the results table and in exported CSV.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unverified => "Não verificado",
            Self::Delivered => "Entregue",
            Self::NotDelivered => "Não entregue",
            Self::Pending => "Pendente",
        }
    }

    /// Whether a query can produce this status.
    #[must_use]
    pub const fn is_query_outcome(self) -> bool {
        !matches!(self, Self::Unverified)
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
