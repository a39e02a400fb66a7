use std::io::Write;

use dctf_core::entities::ReportingPeriod;

use crate::cli::OutputFormat;
use crate::cli::shell_commands::PeriodCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `period`.
pub fn handle(
    action: &PeriodCommands,
    ctx: &mut AppContext,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    if let PeriodCommands::Set { start, end } = action {
        let current = ctx.session.period();
        ctx.session.set_period(ReportingPeriod::new(
            start.unwrap_or(current.start),
            end.unwrap_or(current.end),
        ));
    }

    let period = ctx.session.period();
    match ctx.flags.format {
        OutputFormat::Table => {
            writeln!(out, "Period: {period}")?;
            if period.is_inverted() {
                writeln!(out, "Note: the period starts after it ends.")?;
            }
            Ok(())
        }
        format => output(&period, format, out),
    }
}
