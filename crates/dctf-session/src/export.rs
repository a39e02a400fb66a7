//! CSV export of the company registry.
//!
//! Columns are fixed: `nome,cnpj,status,ultima_verificacao`. Status is written
//! with its Portuguese label and the last check as `DD/MM/YYYY HH:MM` in local
//! time (empty when the company was never checked).

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use thiserror::Error;

use dctf_core::errors::{EmptyStateKind, SessionError};

use crate::registry::CompanyRegistry;

/// Header row of every export.
pub const CSV_HEADER: [&str; 4] = ["nome", "cnpj", "status", "ultima_verificacao"];

/// Timestamp format embedded in export file names.
const FILE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M";

/// Highest numeric suffix tried before giving up on a free file name.
const MAX_NAME_SUFFIX: usize = 99;

#[derive(Debug, Error)]
pub enum ExportError {
    /// Nothing to export.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// CSV encoding failed.
    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),

    /// Writing the export file failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Encode the registry as UTF-8 CSV, header row first.
///
/// # Errors
///
/// Returns `ExportError::Session` with `EmptyState` if the registry is empty.
pub fn export_csv(companies: &CompanyRegistry) -> Result<Vec<u8>, ExportError> {
    if companies.is_empty() {
        return Err(SessionError::EmptyState(EmptyStateKind::NoCompanies).into());
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    for company in companies {
        let last_checked = company.last_checked_display().unwrap_or_default();
        writer.write_record([
            company.name.as_str(),
            company.tax_id.as_str(),
            company.status.label(),
            last_checked.as_str(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|error| ExportError::Io(error.into_error()))
}

/// Export file name: `<prefix>_<YYYYMMDD_HHMM>.csv`.
#[must_use]
pub fn export_file_name(prefix: &str, at: DateTime<Local>) -> String {
    format!("{prefix}_{}.csv", at.format(FILE_TIMESTAMP_FORMAT))
}

/// Write the CSV export into `dir`, creating it if needed. Returns the file path.
///
/// Existing files are never overwritten: a second export within the same
/// minute is written as `<prefix>_<YYYYMMDD_HHMM>_2.csv`, then `_3`, and so on.
///
/// # Errors
///
/// Returns `ExportError` if the registry is empty or the file cannot be written.
pub fn write_export(
    companies: &CompanyRegistry,
    dir: &Path,
    prefix: &str,
    at: DateTime<Local>,
) -> Result<PathBuf, ExportError> {
    let bytes = export_csv(companies)?;
    std::fs::create_dir_all(dir)?;

    let (path, mut file) = create_export_file(dir, prefix, at)?;
    file.write_all(&bytes)?;
    tracing::info!(
        path = %path.display(),
        rows = companies.len(),
        bytes = bytes.len(),
        "results exported"
    );
    Ok(path)
}

fn create_export_file(
    dir: &Path,
    prefix: &str,
    at: DateTime<Local>,
) -> Result<(PathBuf, File), ExportError> {
    let first = export_file_name(prefix, at);
    let stem = first.trim_end_matches(".csv");

    for attempt in 1..=MAX_NAME_SUFFIX {
        let path = if attempt == 1 {
            dir.join(&first)
        } else {
            dir.join(format!("{stem}_{attempt}.csv"))
        };
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(error) if error.kind() == io::ErrorKind::AlreadyExists => {
                tracing::debug!(path = %path.display(), "export file exists, trying next name");
            }
            Err(error) => return Err(error.into()),
        }
    }

    Err(ExportError::Io(io::Error::new(
        io::ErrorKind::AlreadyExists,
        format!(
            "no free export file name for {first} in {}",
            dir.display()
        ),
    )))
}
