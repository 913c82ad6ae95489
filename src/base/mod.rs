//! Foundation types for the interface generator.
//!
//! This module provides the primitives used throughout the crate:
//! - [`SymbolId`] - Identity of a resolved type in the host's symbol table
//! - [`Position`], [`Span`], [`SourceLocation`] - Source positions for diagnostics
//! - [`names`] - Identifier derivation (NameFormatter)
//! - [`GeneratorConfig`] - Marker names and output settings
//! - Domain constants (marker names, artifact suffix)
//!
//! Apart from config error reporting, this module depends on no other crate module.

pub mod config;
pub mod constants;
pub mod names;
mod position;
mod symbol_id;

pub use config::GeneratorConfig;
pub use position::{Position, SourceLocation, Span};
pub use symbol_id::SymbolId;

// Re-export the identifier type for convenience
pub use smol_str::SmolStr;
