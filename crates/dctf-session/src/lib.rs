//! # dctf-session
//!
//! Session-scoped state and operations for the delivery monitor.
//!
//! A [`SessionContext`] owns the three session records (certificate, company
//! registry, reporting period) for the lifetime of one interactive session.
//! Operations are implemented as `impl SessionContext` blocks spread across
//! modules:
//! - `certificate`: certificate registration
//! - `query`: status query loop over a [`StatusProvider`]
//!
//! The company registry and the CSV exporter work on [`CompanyRegistry`]
//! directly. Nothing here is persisted; dropping the context ends the session.

mod certificate;
pub mod export;
pub mod provider;
mod query;
mod registry;
mod session;

pub use export::{CSV_HEADER, ExportError, export_csv, export_file_name, write_export};
pub use provider::{SimulatedStatusProvider, StatusProvider};
pub use query::QueryProgress;
pub use registry::CompanyRegistry;
pub use session::SessionContext;
