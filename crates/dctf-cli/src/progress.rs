use indicatif::{ProgressBar, ProgressStyle};

use crate::ui;

const TEMPLATE: &str = "{bar:30.cyan/blue} {pos}/{len} {msg}";

/// Bar shown on stderr while companies are queried.
///
/// Every method is a no-op when progress output is disabled.
pub struct QueryBar {
    bar: Option<ProgressBar>,
}

impl QueryBar {
    #[must_use]
    pub fn start(total: usize) -> Self {
        if !ui::prefs().progress {
            return Self { bar: None };
        }

        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::with_template(TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar.set_message("starting query");
        Self { bar: Some(bar) }
    }

    /// Mark `position - 1` companies done and name the one being checked.
    pub fn checking(&self, position: usize, company_name: &str) {
        if let Some(bar) = &self.bar {
            bar.set_position(position.saturating_sub(1) as u64);
            bar.set_message(format!("checking {company_name}"));
        }
    }

    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }

    /// Leave the bar where it stopped, with a failure note.
    pub fn abandon(&self) {
        if let Some(bar) = &self.bar {
            bar.abandon_with_message("query failed");
        }
    }
}
