//! The synthesized interface declaration.
//!
//! Every member here is signature-only by construction: there is no field
//! for a body, an initializer or a modifier list.

use smol_str::SmolStr;
use std::sync::Arc;

use super::member::{AccessorKind, Parameter};
use super::modifiers::{Modifier, Modifiers};
use super::types::{TypeConstraint, TypeRef};

/// `ReturnType Name<T>(params) where T : ...;`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MethodSignature {
    pub name: SmolStr,
    pub return_type: TypeRef,
    pub type_params: Vec<SmolStr>,
    pub params: Vec<Parameter>,
    pub constraints: Vec<TypeConstraint>,
}

/// `Type Name { get; set; }`, optionally preceded by a comment line.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PropertySignature {
    pub name: SmolStr,
    pub ty: TypeRef,
    pub accessors: Vec<AccessorKind>,
    /// Single-line comment emitted above the property, without the `//`.
    pub comment: Option<Arc<str>>,
}

impl PropertySignature {
    pub fn has_accessor(&self, kind: AccessorKind) -> bool {
        self.accessors.contains(&kind)
    }
}

/// A member of the synthesized interface.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum InterfaceMember {
    Method(MethodSignature),
    Property(PropertySignature),
}

impl InterfaceMember {
    pub fn name(&self) -> &str {
        match self {
            InterfaceMember::Method(m) => &m.name,
            InterfaceMember::Property(p) => &p.name,
        }
    }

    pub fn as_method(&self) -> Option<&MethodSignature> {
        match self {
            InterfaceMember::Method(m) => Some(m),
            InterfaceMember::Property(_) => None,
        }
    }

    pub fn as_property(&self) -> Option<&PropertySignature> {
        match self {
            InterfaceMember::Property(p) => Some(p),
            InterfaceMember::Method(_) => None,
        }
    }
}

/// `public partial interface IName<T> : IBase where T : ... { members }`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct InterfaceDecl {
    pub name: SmolStr,
    /// Namespace path of the originating class; empty for global.
    pub namespace: Arc<str>,
    pub modifiers: Modifiers,
    pub type_params: Vec<SmolStr>,
    pub constraints: Vec<TypeConstraint>,
    /// Base interfaces, in resolution order.
    pub bases: Vec<TypeRef>,
    /// Members, in source declaration order.
    pub members: Vec<InterfaceMember>,
}

impl InterfaceDecl {
    /// An empty `public partial` interface.
    pub fn new(name: impl Into<SmolStr>, namespace: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            modifiers: Modifiers::from([Modifier::Public, Modifier::Partial]),
            type_params: Vec::new(),
            constraints: Vec::new(),
            bases: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn member(&self, name: &str) -> Option<&InterfaceMember> {
        self.members.iter().find(|m| m.name() == name)
    }

    pub fn member_names(&self) -> Vec<&str> {
        self.members.iter().map(InterfaceMember::name).collect()
    }
}
