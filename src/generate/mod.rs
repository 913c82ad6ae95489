//! Interface synthesis.
//!
//! ```text
//! scan            ← annotated classes → work items
//!   │
//!   ├─ inherit    ← base interfaces + names they already declare
//!   ├─ filter     ← eligible members, declaration order
//!   ▼
//! transform       ← signature-only interface members
//!   │
//!   ▼
//! assemble        ← InterfaceDecl + rendered artifact
//! ```
//!
//! [`InterfaceGenerator`] runs the pipeline once per class in parallel;
//! [`IncrementalGenerator`] memoizes it per class with Salsa.

mod assemble;
mod db;
mod diagnostics;
mod driver;
mod filter;
mod inherit;
mod scan;
mod transform;

pub use assemble::{GeneratedArtifact, assemble_artifact, assemble_interface, hint_name};
pub use db::{ClassContext, ClassInput, ClassOutcome, GeneratorDatabase, IncrementalGenerator, class_artifact};
pub use diagnostics::{Diagnostic, DiagnosticCollector, Severity, codes};
pub use driver::{GeneratorOutput, InterfaceGenerator, Synthesized, generate, generate_class, reject_repeated, synthesize};
pub use filter::{Eligibility, Exclusion, MemberFilter, Selected, exclusion_list};
pub use inherit::{InheritanceResolver, Resolution, resolve_interfaces};
pub use scan::{WorkItem, scan_unit, scan_units, split_repeated};
pub use transform::MemberTransformer;
