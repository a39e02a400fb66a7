use std::io::Write;

use dctf_core::responses::{ResultsResponse, StatusSummary};

use crate::cli::OutputFormat;
use crate::context::AppContext;
use crate::output::{output, output_companies, summary_line};

/// Handle `results`: companies with their last status, plus per-status counts.
pub fn handle(ctx: &AppContext, out: &mut dyn Write) -> anyhow::Result<()> {
    let companies = ctx.session.companies();

    match ctx.flags.format {
        OutputFormat::Table => {
            if companies.is_empty() {
                writeln!(
                    out,
                    "No companies registered. Add companies and run a query to see results."
                )?;
                return Ok(());
            }
            output_companies(&companies.entries(), OutputFormat::Table, out)?;
            writeln!(out)?;
            writeln!(
                out,
                "{}",
                summary_line(&StatusSummary::from_companies(companies))
            )?;
            Ok(())
        }
        format => {
            let response = ResultsResponse {
                companies: companies.entries(),
                summary: StatusSummary::from_companies(companies),
            };
            output(&response, format, out)
        }
    }
}
