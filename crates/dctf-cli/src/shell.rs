//! Line-oriented session shell.
//!
//! Each input line is split shell-style and parsed as a [`ShellLine`]. A failed
//! command prints its error and the session goes on; only I/O failures on the
//! shell's own streams end it early.

use std::io::{BufRead, Write};

use clap::Parser;
use clap::error::ErrorKind;

use crate::cli::{ShellCommand, ShellLine};
use crate::commands::dispatch::dispatch;
use crate::context::AppContext;

const PROMPT: &str = "dctf> ";
const BANNER: &str = "DCTFWeb/REINF monitor. Type 'help' for commands, 'exit' to end the session.";

/// Counts reported when the session ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShellSummary {
    pub executed: usize,
    pub failed: usize,
}

/// Read commands from `input` until EOF or `exit`.
///
/// Results go to `out`; errors, help for failed parses, and the prompt go to
/// `err`. The prompt and banner are only written when `interactive` is set.
pub async fn run<R: BufRead>(
    ctx: &mut AppContext,
    input: R,
    out: &mut dyn Write,
    err: &mut dyn Write,
    interactive: bool,
) -> anyhow::Result<ShellSummary> {
    let mut summary = ShellSummary::default();

    if interactive {
        writeln!(err, "{BANNER}")?;
        write!(err, "{PROMPT}")?;
        err.flush()?;
    }

    for (line_no, line) in input.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();

        if !trimmed.is_empty() && !trimmed.starts_with('#') {
            match execute_line(trimmed, ctx, out).await {
                LineOutcome::Exit => break,
                LineOutcome::Done => summary.executed += 1,
                LineOutcome::Failed(message) => {
                    summary.executed += 1;
                    summary.failed += 1;
                    if interactive {
                        writeln!(err, "error: {message}")?;
                    } else {
                        writeln!(err, "line {}: error: {message}", line_no + 1)?;
                    }
                }
            }
            out.flush()?;
        }

        if interactive {
            write!(err, "{PROMPT}")?;
            err.flush()?;
        }
    }

    if interactive {
        writeln!(err)?;
    }
    tracing::debug!(
        executed = summary.executed,
        failed = summary.failed,
        "shell input finished"
    );
    Ok(summary)
}

enum LineOutcome {
    Done,
    Exit,
    Failed(String),
}

async fn execute_line(line: &str, ctx: &mut AppContext, out: &mut dyn Write) -> LineOutcome {
    let Some(words) = shlex::split(line) else {
        return LineOutcome::Failed("unbalanced quotes".to_string());
    };

    let parsed = match ShellLine::try_parse_from(words) {
        Ok(parsed) => parsed,
        Err(error) => return parse_failure(&error, out),
    };

    if matches!(parsed.command, ShellCommand::Exit) {
        return LineOutcome::Exit;
    }

    match dispatch(&parsed.command, ctx, out).await {
        Ok(()) => LineOutcome::Done,
        Err(error) => {
            tracing::debug!(%error, "command failed");
            LineOutcome::Failed(format!("{error:#}"))
        }
    }
}

fn parse_failure(error: &clap::Error, out: &mut dyn Write) -> LineOutcome {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            match write!(out, "{}", error.render()) {
                Ok(()) => LineOutcome::Done,
                Err(io_error) => LineOutcome::Failed(io_error.to_string()),
            }
        }
        _ => {
            let rendered = error.render().to_string();
            LineOutcome::Failed(
                rendered
                    .trim_start_matches("error: ")
                    .trim_end()
                    .to_string(),
            )
        }
    }
}
