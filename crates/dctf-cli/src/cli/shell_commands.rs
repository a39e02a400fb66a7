use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// One line typed into the session shell.
#[derive(Debug, Parser)]
#[command(
    name = "dctf>",
    no_binary_name = true,
    disable_version_flag = true
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

/// Commands available inside a session.
#[derive(Clone, Debug, Subcommand)]
pub enum ShellCommand {
    /// Digital certificate (PFX/P12).
    Certificate {
        #[command(subcommand)]
        action: CertificateCommands,
    },
    /// Monitored companies.
    Company {
        #[command(subcommand)]
        action: CompanyCommands,
    },
    /// Reference period.
    Period {
        #[command(subcommand)]
        action: PeriodCommands,
    },
    /// Check the delivery status of every company.
    Query,
    /// Show companies with their last status and per-status counts.
    Results,
    /// Export results to a CSV file.
    Export {
        /// Target directory (defaults to the configured output directory).
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Session overview: certificate, company count, period.
    Status,
    /// End the session. All state is discarded.
    #[command(visible_alias = "quit")]
    Exit,
}

#[derive(Clone, Debug, Subcommand)]
pub enum CertificateCommands {
    /// Register the certificate, replacing any previous one.
    Register {
        /// Path to a .pfx or .p12 file.
        #[arg(long)]
        file: PathBuf,
        /// Certificate password (falls back to DCTF_CERT_PASSWORD).
        #[arg(long)]
        password: Option<String>,
    },
    /// Show the registered certificate.
    Show,
}

#[derive(Clone, Debug, Subcommand)]
pub enum CompanyCommands {
    /// Add a company.
    Add {
        #[arg(long)]
        name: String,
        /// CNPJ (digits only).
        #[arg(long)]
        cnpj: String,
    },
    /// Remove the company at a position (as shown by `company list`).
    #[command(visible_alias = "rm")]
    Remove { index: usize },
    /// List companies.
    #[command(visible_alias = "ls")]
    List,
}

#[derive(Clone, Debug, Subcommand)]
pub enum PeriodCommands {
    /// Set the reference period. Omitted dates keep their current value.
    Set {
        /// Start date (YYYY-MM-DD or DD/MM/YYYY).
        #[arg(long, value_parser = parse_date)]
        start: Option<NaiveDate>,
        /// End date (YYYY-MM-DD or DD/MM/YYYY).
        #[arg(long, value_parser = parse_date)]
        end: Option<NaiveDate>,
    },
    /// Show the reference period.
    Show,
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%d/%m/%Y"))
        .map_err(|_| format!("invalid date '{value}': expected YYYY-MM-DD or DD/MM/YYYY"))
}
