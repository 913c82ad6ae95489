//! High-level IR (HIR): resolved type information.
//!
//! The generator never resolves names on its own account. A host front end
//! supplies a [`TypeProvider`]; the in-memory [`SymbolTable`] is the default
//! one and [`Binder`] fills in [`SymbolId`](crate::base::SymbolId)s for hosts
//! that only hand over written type names.
//!
//! ## Key Types
//!
//! - [`TypeProvider`] - read-only capability: resolve, look up, describe
//! - [`SymbolTable`] - dense table of [`TypeSymbol`]s indexed by id
//! - [`TypeShape`] - kind, supertypes and member names of one type
//! - [`Binder`] - written name → symbol, following using directives
//!
//! ```text
//! BaseTypeRef ──resolve──▶ SymbolId ──describe──▶ TypeShape
//!                                                   ├─ kind
//!                                                   ├─ supertypes (declared, or all interfaces)
//!                                                   └─ members
//! ```

mod bind;
mod table;

pub use bind::{Binder, Unbound};
pub use table::{
    MemberSymbol, MemberSymbolKind, Origin, SymbolTable, TypeKind, TypeProvider, TypeShape,
    TypeSymbol,
};
