use std::io::Write;

use crate::cli::ShellCommand;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed shell command to the corresponding handler module.
pub async fn dispatch(
    command: &ShellCommand,
    ctx: &mut AppContext,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match command {
        ShellCommand::Certificate { action } => commands::certificate::handle(action, ctx, out),
        ShellCommand::Company { action } => commands::company::handle(action, ctx, out),
        ShellCommand::Period { action } => commands::period::handle(action, ctx, out),
        ShellCommand::Query => commands::query::handle(ctx, out).await,
        ShellCommand::Results => commands::results::handle(ctx, out),
        ShellCommand::Export { dir } => commands::export::handle(dir.as_deref(), ctx, out),
        ShellCommand::Status => commands::status::handle(ctx, out),
        // The shell loop stops before dispatching `exit`.
        ShellCommand::Exit => Ok(()),
    }
}
