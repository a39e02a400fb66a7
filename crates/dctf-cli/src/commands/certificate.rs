use std::io::Write;
use std::path::Path;

use anyhow::{Context, bail};
use zeroize::Zeroizing;

use crate::cli::OutputFormat;
use crate::cli::shell_commands::CertificateCommands;
use crate::context::AppContext;
use crate::output::{confirm, output};

/// Environment variable read when `--password` is omitted.
const PASSWORD_ENV: &str = "DCTF_CERT_PASSWORD";

/// Accepted certificate file extensions (case-insensitive).
const ACCEPTED_EXTENSIONS: [&str; 2] = ["pfx", "p12"];

/// Handle `certificate`.
pub fn handle(
    action: &CertificateCommands,
    ctx: &mut AppContext,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match action {
        CertificateCommands::Register { file, password } => {
            register(file, password.as_deref(), ctx, out)
        }
        CertificateCommands::Show => show(ctx, out),
    }
}

fn register(
    file: &Path,
    password: Option<&str>,
    ctx: &mut AppContext,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    check_extension(file)?;

    let file_name = file
        .file_name()
        .and_then(|name| name.to_str())
        .context("certificate path has no file name")?;
    let bytes = std::fs::read(file)
        .with_context(|| format!("failed to read certificate file {}", file.display()))?;

    let password = Zeroizing::new(match password {
        Some(value) => value.to_string(),
        None => std::env::var(PASSWORD_ENV).unwrap_or_default(),
    });

    ctx.session
        .register_certificate(file_name, &bytes, &password)?;

    let info = ctx
        .session
        .certificate_info()
        .context("certificate missing right after registration")?;
    match ctx.flags.format {
        OutputFormat::Table => confirm(
            &ctx.flags,
            out,
            &format!("Certificate registered: {}", info.file_name),
        ),
        format => output(&info, format, out),
    }
}

fn show(ctx: &AppContext, out: &mut dyn Write) -> anyhow::Result<()> {
    match ctx.session.certificate_info() {
        Some(info) => output(&info, ctx.flags.format, out),
        None if ctx.flags.format == OutputFormat::Table => {
            writeln!(out, "No certificate registered.")?;
            Ok(())
        }
        None => output(&serde_json::Value::Null, ctx.flags.format, out),
    }
}

fn check_extension(file: &Path) -> anyhow::Result<()> {
    let extension = file
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension {
        Some(ext) if ACCEPTED_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
        _ => bail!(
            "unsupported certificate file '{}': expected a .pfx or .p12 file",
            file.display()
        ),
    }
}
