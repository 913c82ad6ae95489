//! Syntax model: the declarations a host front end hands to the generator,
//! and the interface declarations the generator produces.
//!
//! ## Input
//!
//! - [`CompilationUnit`] - a file's using directives and class declarations
//! - [`ClassDecl`] - name, namespace, modifiers, members, base list, annotations
//! - [`Member`] - common header + [`MemberKind`] (field / method / property)
//! - [`Annotation`] - written marker name + arguments
//! - [`BaseTypeRef`] - written base type + resolved [`SymbolId`](crate::base::SymbolId)
//!
//! ## Output
//!
//! - [`InterfaceDecl`] - signature-only members and base interfaces
//! - [`render`] - deterministic text rendering

mod annotation;
mod class;
mod interface;
mod member;
mod modifiers;
pub mod render;
mod types;
mod unit;

pub use annotation::{Annotation, AnnotationArg, AnnotationValue, AnnotationsExt};
pub use class::{BaseTypeRef, ClassDecl, qualify};
pub use interface::{InterfaceDecl, InterfaceMember, MethodSignature, PropertySignature};
pub use member::{
    Accessor, AccessorKind, Body, Field, Member, MemberKind, Method, ParamModifier, Parameter,
    Property,
};
pub use modifiers::{Modifier, Modifiers};
pub use types::{TypeConstraint, TypeRef};
pub use unit::{CompilationUnit, UsingDirective};
