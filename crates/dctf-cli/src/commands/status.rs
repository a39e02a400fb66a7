use std::io::Write;

use crate::cli::OutputFormat;
use crate::context::AppContext;
use crate::output::output;

/// Handle `status`: certificate, company count, selected period.
pub fn handle(ctx: &AppContext, out: &mut dyn Write) -> anyhow::Result<()> {
    let overview = ctx.session.overview();

    if ctx.flags.format != OutputFormat::Table {
        return output(&overview, ctx.flags.format, out);
    }

    match &overview.certificate_file {
        Some(file) => writeln!(out, "Certificate: registered ({file})")?,
        None => writeln!(out, "Certificate: not registered")?,
    }
    writeln!(out, "Companies: {}", overview.companies)?;
    writeln!(out, "Period: {}", overview.period)?;
    Ok(())
}
