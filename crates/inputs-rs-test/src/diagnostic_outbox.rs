//! Diagnostic capture for testing malformed declarations.
//!
//! [`DiagnosticOutbox`] is a [`DiagnosticSink`] that stores every notice in a
//! shared list instead of logging it, so tests can assert on exactly which
//! diagnostics a resolution or validation emitted, and in which order.
//!
//! ## Example
//!
//! ```
//! use inputs_rs_core::DiagnosticSink;
//! use inputs_rs_test::DiagnosticOutbox;
//!
//! let outbox = DiagnosticOutbox::new();
//! let sink = outbox.as_sink();
//! sink.warn("Unknown filter provided", "42");
//!
//! assert_eq!(outbox.len(), 1);
//! assert_eq!(outbox.messages(), vec!["Unknown filter provided"]);
//! ```

use std::sync::{Arc, Mutex};

use inputs_rs_core::{DiagnosticSink, SharedSink};

/// A captured diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The message, e.g. "Unknown filter preset provided".
    pub context: String,
    /// Extra information; may be empty.
    pub detail: String,
}

/// An in-memory sink that captures diagnostics for test verification.
///
/// Clones share the same store, so a clone can be handed to the code under
/// test while the original is kept for assertions.
#[derive(Debug, Clone)]
pub struct DiagnosticOutbox {
    store: Arc<Mutex<Vec<Diagnostic>>>,
}

impl Default for DiagnosticOutbox {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticOutbox {
    /// Creates a new empty outbox.
    pub fn new() -> Self {
        Self {
            store: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns a shared sink writing into this outbox.
    pub fn as_sink(&self) -> SharedSink {
        Arc::new(self.clone())
    }

    /// Returns all captured diagnostics, oldest first.
    pub fn entries(&self) -> Vec<Diagnostic> {
        self.store
            .lock()
            .expect("DiagnosticOutbox lock poisoned")
            .clone()
    }

    /// Returns the message of every captured diagnostic, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.entries().into_iter().map(|d| d.context).collect()
    }

    /// Returns how many captured diagnostics carry `context`.
    pub fn count(&self, context: &str) -> usize {
        self.store
            .lock()
            .expect("DiagnosticOutbox lock poisoned")
            .iter()
            .filter(|d| d.context == context)
            .count()
    }

    /// Returns the number of captured diagnostics.
    pub fn len(&self) -> usize {
        self.store
            .lock()
            .expect("DiagnosticOutbox lock poisoned")
            .len()
    }

    /// Returns `true` if nothing has been captured.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears all captured diagnostics.
    pub fn clear(&self) {
        self.store
            .lock()
            .expect("DiagnosticOutbox lock poisoned")
            .clear();
    }

    /// Returns the most recently captured diagnostic, if any.
    pub fn last(&self) -> Option<Diagnostic> {
        self.store
            .lock()
            .expect("DiagnosticOutbox lock poisoned")
            .last()
            .cloned()
    }

    /// Asserts that exactly `expected` diagnostics were captured.
    ///
    /// # Panics
    ///
    /// Panics if the count does not match.
    pub fn assert_count(&self, expected: usize) {
        let actual = self.len();
        assert_eq!(
            actual,
            expected,
            "Expected {expected} diagnostic(s), but {actual} were emitted: {:?}",
            self.messages()
        );
    }

    /// Asserts that a diagnostic with the given message was captured.
    ///
    /// # Panics
    ///
    /// Panics if no captured diagnostic carries `context`.
    pub fn assert_emitted(&self, context: &str) {
        let messages = self.messages();
        assert!(
            messages.iter().any(|m| m == context),
            "No diagnostic '{context}' was emitted. Emitted: {messages:?}"
        );
    }
}

impl DiagnosticSink for DiagnosticOutbox {
    fn warn(&self, context: &str, detail: &str) {
        self.store
            .lock()
            .expect("DiagnosticOutbox lock poisoned")
            .push(Diagnostic {
                context: context.to_string(),
                detail: detail.to_string(),
            });
    }
}
