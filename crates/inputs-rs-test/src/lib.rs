//! # inputs-rs-test
//!
//! Testing utilities for the inputs-rs library. Provides an in-memory
//! diagnostic sink for asserting on malformed-declaration notices, and
//! helpers for comparing resolved transforms on probe inputs.
//!
//! ## Modules
//!
//! - [`diagnostic_outbox`] - Capturing diagnostics for assertions
//! - [`equivalence`] - Comparing transforms on probe inputs

pub mod diagnostic_outbox;
pub mod equivalence;

pub use diagnostic_outbox::{Diagnostic, DiagnosticOutbox};
pub use equivalence::assert_equivalent;
