//! Entity structs for the three session records.
//!
//! `Company` and `ReportingPeriod` derive `Serialize`, `Deserialize`, and
//! `JsonSchema` for JSON output and schema validation. `Certificate` carries a
//! secret and deliberately implements neither.

mod certificate;
mod company;
mod period;

pub use certificate::Certificate;
pub use company::{Company, LAST_CHECKED_FORMAT};
pub use period::{PERIOD_DATE_FORMAT, ReportingPeriod};
