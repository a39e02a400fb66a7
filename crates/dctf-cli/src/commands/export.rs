use std::io::Write;
use std::path::Path;

use chrono::Local;
use dctf_core::responses::ExportResponse;
use dctf_session::write_export;

use crate::cli::OutputFormat;
use crate::context::AppContext;
use crate::output::{confirm, output};

/// Handle `export`: write the CSV into `dir` or the configured output directory.
pub fn handle(dir: Option<&Path>, ctx: &AppContext, out: &mut dyn Write) -> anyhow::Result<()> {
    let dir = dir.unwrap_or(&ctx.export.output_dir);
    let companies = ctx.session.companies();
    let path = write_export(companies, dir, &ctx.export.file_prefix, Local::now())?;

    let response = ExportResponse {
        path: path.display().to_string(),
        rows: companies.len(),
    };
    match ctx.flags.format {
        OutputFormat::Table => confirm(
            &ctx.flags,
            out,
            &format!("Exported {} companies to {}", response.rows, response.path),
        ),
        format => output(&response, format, out),
    }
}
