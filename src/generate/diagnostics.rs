//! Diagnostics: the per-class failure signal.
//!
//! A class that cannot be synthesized produces exactly one [`Diagnostic`]
//! and no artifact. Unresolved base references are reported as warnings
//! but do not cost the class its artifact.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::base::SourceLocation;
use crate::error::GenerateError;

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

/// A diagnostic message with optional location.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostic {
    /// Stable identifier (e.g. "MI001").
    pub code: Arc<str>,
    pub severity: Severity,
    pub message: Arc<str>,
    /// The class declaration the diagnostic is about, when known.
    pub location: Option<SourceLocation>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(code: impl Into<Arc<str>>, message: impl Into<Arc<str>>) -> Self {
        Self {
            code: code.into(),
            severity: Severity::Error,
            message: message.into(),
            location: None,
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(code: impl Into<Arc<str>>, message: impl Into<Arc<str>>) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::error(code, message)
        }
    }

    /// Attach a source location.
    pub fn with_location(mut self, location: Option<SourceLocation>) -> Self {
        self.location = location;
        self
    }

    /// Build the diagnostic reported for a [`GenerateError`].
    pub fn from_error(error: &GenerateError) -> Self {
        let message = error.to_string();
        match error {
            GenerateError::MissingMarker { .. } => {
                Diagnostic::error(codes::INTERFACE_NOT_CREATED, message)
            }
            GenerateError::SynthesisFailure { .. } | GenerateError::Interchange(_) => {
                Diagnostic::error(codes::SYNTHESIS_FAILURE, message)
            }
            GenerateError::UnresolvedTypeReference { .. } => {
                Diagnostic::warning(codes::UNRESOLVED_REFERENCE, message)
            }
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(location) = &self.location {
            write!(f, "{location}: ")?;
        }
        write!(f, "{} {}: {}", self.severity.as_str(), self.code, self.message)
    }
}

/// Diagnostic codes.
pub mod codes {
    /// The interface for a class could not be synthesized.
    pub const SYNTHESIS_FAILURE: &str = "MI001";
    /// The interface was not created (class is missing its marker).
    pub const INTERFACE_NOT_CREATED: &str = "MI002";
    /// A base-type reference did not resolve.
    pub const UNRESOLVED_REFERENCE: &str = "MI003";
}

// ============================================================================
// DIAGNOSTIC COLLECTOR
// ============================================================================

/// Collects diagnostics from concurrently running class pipelines.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, diagnostic: Diagnostic) {
        self.diagnostics.lock().push(diagnostic);
    }

    /// Record an error for a class.
    pub fn report(&self, error: &GenerateError, location: Option<&SourceLocation>) {
        self.add(Diagnostic::from_error(error).with_location(location.cloned()));
    }

    pub fn len(&self) -> usize {
        self.diagnostics.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.lock().is_empty()
    }

    /// Get the number of errors.
    pub fn error_count(&self) -> usize {
        self.diagnostics.lock().iter().filter(|d| d.is_error()).count()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.lock().iter().any(Diagnostic::is_error)
    }

    /// Consume the collector and return diagnostics ordered by location,
    /// then code, then message.
    pub fn finish(self) -> Vec<Diagnostic> {
        let mut diagnostics = self.diagnostics.into_inner();
        diagnostics.sort_by(|a, b| {
            let key = |d: &Diagnostic| {
                d.location
                    .as_ref()
                    .map(|l| (l.path.clone(), l.span.start.line, l.span.start.column))
            };
            key(a)
                .cmp(&key(b))
                .then_with(|| a.code.cmp(&b.code))
                .then_with(|| a.message.cmp(&b.message))
        });
        diagnostics
    }
}
