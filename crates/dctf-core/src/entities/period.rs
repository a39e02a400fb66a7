use std::fmt;

use chrono::{Datelike, Local, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Display format for period dates.
pub const PERIOD_DATE_FORMAT: &str = "%d/%m/%Y";

/// Reference period selected for the query.
///
/// No ordering between `start` and `end` is enforced. The period is shown to
/// the user but is not applied to status queries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReportingPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ReportingPeriod {
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// First day of `today`'s month through `today`.
    #[must_use]
    pub fn month_to_date(today: NaiveDate) -> Self {
        let start = today.with_day(1).unwrap_or(today);
        Self { start, end: today }
    }

    /// `true` when `start` falls after `end`.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

impl Default for ReportingPeriod {
    fn default() -> Self {
        Self::month_to_date(Local::now().date_naive())
    }
}

impl fmt::Display for ReportingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.start.format(PERIOD_DATE_FORMAT),
            self.end.format(PERIOD_DATE_FORMAT)
        )
    }
}
