//! Common types and utilities for the coolc semantic analyzer.
//!
//! This crate provides foundational types used across all coolc crates:
//! - String interning (`Atom`, `Interner`) with pre-interned well-known names
//! - Positioned diagnostics, their codes and message templates
//! - Analyzer limits and thresholds

// String interning for identifier deduplication
pub mod interner;
pub use interner::{Atom, Interner, names};

// Diagnostics - positioned messages plus the code/message tables
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory, DiagnosticMessage};

// Centralized limits and thresholds
pub mod limits;
