//! # ifacegen
//!
//! Synthesizes interface declarations from annotated class declarations.
//!
//! A host front end hands over parsed [`CompilationUnit`]s and a
//! [`TypeProvider`] with resolved type information. Every class carrying the
//! class-level marker (`[GenerateInterface]` by default) gets an interface
//! `I<Class>` with its public contract: public methods and properties,
//! properties for observable fields and command properties for command
//! methods, minus whatever its inherited interfaces already declare.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! generate  → scan, filter, inherit, transform, assemble, batch + incremental drivers
//!   ↓
//! hir       → Symbol table, TypeProvider, name binding
//!   ↓
//! syntax    → Class/member/annotation model, interface model, rendering
//!   ↓
//! base      → Primitives (SymbolId, SourceLocation, names, config)
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → hir → generate)
// ============================================================================

/// Foundation types: SymbolId, positions, identifier derivation, config
pub mod base;

/// Syntax: declarations in, interface declarations out
pub mod syntax;

/// High-level IR: resolved type information
pub mod hir;

/// Interface synthesis pipeline
pub mod generate;

/// Error type shared by all layers
pub mod error;

// Re-export the main entry points
pub use base::{GeneratorConfig, SymbolId};
pub use error::GenerateError;
pub use generate::{
    Diagnostic, GeneratedArtifact, GeneratorOutput, IncrementalGenerator, InterfaceGenerator,
    generate,
};
pub use hir::{SymbolTable, TypeProvider};
pub use syntax::{ClassDecl, CompilationUnit};
