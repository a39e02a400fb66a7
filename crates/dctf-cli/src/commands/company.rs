use std::io::Write;

use dctf_core::responses::CompanyEntry;

use crate::cli::OutputFormat;
use crate::cli::shell_commands::CompanyCommands;
use crate::context::AppContext;
use crate::output::{confirm, output, output_companies};

/// Handle `company`.
pub fn handle(
    action: &CompanyCommands,
    ctx: &mut AppContext,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let format = ctx.flags.format;
    match action {
        CompanyCommands::Add { name, cnpj } => {
            let registry = ctx.session.companies_mut();
            let company = registry.add(name, cnpj)?.clone();
            let entry = CompanyEntry {
                index: registry.len() - 1,
                company,
            };
            match format {
                OutputFormat::Table => confirm(
                    &ctx.flags,
                    out,
                    &format!(
                        "Company {} added at position {}.",
                        entry.company.name, entry.index
                    ),
                ),
                format => output(&entry, format, out),
            }
        }
        CompanyCommands::Remove { index } => {
            let removed = ctx.session.companies_mut().remove(*index)?;
            match format {
                OutputFormat::Table => confirm(
                    &ctx.flags,
                    out,
                    &format!("Company {} removed.", removed.name),
                ),
                format => output(&removed, format, out),
            }
        }
        CompanyCommands::List => output_companies(&ctx.session.companies().entries(), format, out),
    }
}
