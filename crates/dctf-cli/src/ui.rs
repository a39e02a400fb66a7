use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat, ProgressMode};

/// Presentation choices fixed once at session start.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiPrefs {
    /// Color the status column of tables.
    pub table_color: bool,
    /// Draw the query progress bar on stderr.
    pub progress: bool,
    pub term_width: Option<usize>,
}

/// What the process knows about its terminal.
#[derive(Clone, Copy, Debug, Default)]
struct Terminal {
    stdout_tty: bool,
    stderr_tty: bool,
    no_color: bool,
    columns: Option<usize>,
}

impl Terminal {
    fn detect() -> Self {
        Self {
            stdout_tty: std::io::stdout().is_terminal(),
            stderr_tty: std::io::stderr().is_terminal(),
            no_color: std::env::var_os("NO_COLOR").is_some(),
            columns: std::env::var("COLUMNS")
                .ok()
                .and_then(|value| value.parse::<usize>().ok()),
        }
    }
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let prefs = resolve(flags, Terminal::detect());
    tracing::debug!(?prefs, "ui preferences");
    let _ = UI_PREFS.set(prefs);
}

/// Preferences set by [`init`]; plain output if it was never called.
#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}

fn resolve(flags: &GlobalFlags, terminal: Terminal) -> UiPrefs {
    let tables = flags.format == OutputFormat::Table;

    let table_color = tables
        && match flags.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => terminal.stdout_tty && !terminal.no_color && !flags.quiet,
        };

    let progress = !flags.quiet
        && match flags.progress {
            ProgressMode::On => true,
            ProgressMode::Off => false,
            ProgressMode::Auto => terminal.stderr_tty && flags.format != OutputFormat::Json,
        };

    UiPrefs {
        table_color,
        progress,
        term_width: terminal.columns.filter(|width| *width >= 40),
    }
}
