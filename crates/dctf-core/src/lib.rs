//! # dctf-core
//!
//! Core domain types and error types for the DCTFWeb/REINF delivery monitor.
//!
//! This crate provides the types shared across all `dctf` crates:
//! - Entity structs for the session records (certificate, company, reporting period)
//! - The delivery status enum with its Portuguese display labels
//! - The session error taxonomy
//! - Response types returned by the `dctf` shell commands

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
