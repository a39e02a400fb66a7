use std::io::Write;

use dctf_session::QueryProgress;

use crate::cli::OutputFormat;
use crate::context::AppContext;
use crate::output::{output, summary_line};
use crate::progress::QueryBar;

/// Handle `query`: check every company in registry order.
pub async fn handle(ctx: &mut AppContext, out: &mut dyn Write) -> anyhow::Result<()> {
    let progress = QueryBar::start(ctx.session.companies().len());

    let result = ctx
        .session
        .run_query(ctx.provider.as_ref(), |step: QueryProgress<'_>| {
            progress.checking(step.position, &step.company.name);
        })
        .await;

    let report = match result {
        Ok(report) => {
            progress.finish();
            report
        }
        Err(error) => {
            progress.abandon();
            return Err(error.into());
        }
    };

    match ctx.flags.format {
        OutputFormat::Table => {
            if !ctx.flags.quiet {
                writeln!(out, "Query finished: {} companies checked.", report.checked)?;
                writeln!(out, "{}", summary_line(&report.summary))?;
            }
            Ok(())
        }
        format => output(&report, format, out),
    }
}
