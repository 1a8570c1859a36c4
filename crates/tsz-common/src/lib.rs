//! Common types and utilities shared by the tsz crates.
//!
//! This crate provides foundational types used across all tsz crates:
//! - Diagnostics (`Diagnostic`, `DiagnosticCategory`) and the message table
//!   used by declaration emit

// Diagnostic types and the generated message table
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory, DiagnosticRelatedInformation};
