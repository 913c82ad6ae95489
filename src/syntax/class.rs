//! Class declarations and their base-type references.

use smol_str::SmolStr;
use std::sync::Arc;

use super::annotation::{Annotation, AnnotationsExt};
use super::member::Member;
use super::modifiers::{Modifier, Modifiers};
use super::types::{TypeConstraint, TypeRef};
use crate::base::names::interface_name;
use crate::base::{SourceLocation, SymbolId};

/// An entry of a class's base list, as written, plus its resolved identity.
///
/// Whether the entry is a base class or an interface is decided by the
/// symbol's kind, never by the written text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseTypeRef {
    pub ty: TypeRef,
    /// Set by the host once the reference is bound; `None` if unresolved.
    #[cfg_attr(feature = "interchange", serde(default))]
    pub symbol: Option<SymbolId>,
}

impl BaseTypeRef {
    pub fn new(ty: impl Into<TypeRef>) -> Self {
        Self {
            ty: ty.into(),
            symbol: None,
        }
    }

    pub fn resolved(ty: impl Into<TypeRef>, symbol: SymbolId) -> Self {
        Self {
            ty: ty.into(),
            symbol: Some(symbol),
        }
    }
}

/// A class declaration supplied by the host front end.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassDecl {
    pub name: SmolStr,
    /// Dotted namespace path; empty for the global namespace.
    #[cfg_attr(feature = "interchange", serde(default))]
    pub namespace: Arc<str>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub modifiers: Modifiers,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub type_params: Vec<SmolStr>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub constraints: Vec<TypeConstraint>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub members: Vec<Member>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub bases: Vec<BaseTypeRef>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub annotations: Vec<Annotation>,
    /// The class's own symbol, if the host resolved it.
    #[cfg_attr(feature = "interchange", serde(default))]
    pub symbol: Option<SymbolId>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub location: Option<SourceLocation>,
}

impl ClassDecl {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            namespace: Arc::from(""),
            modifiers: Modifiers::from([Modifier::Public]),
            type_params: Vec::new(),
            constraints: Vec::new(),
            members: Vec::new(),
            bases: Vec::new(),
            annotations: Vec::new(),
            symbol: None,
            location: None,
        }
    }

    pub fn in_namespace(mut self, namespace: impl Into<Arc<str>>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_modifiers(mut self, modifiers: impl Into<Modifiers>) -> Self {
        self.modifiers = modifiers.into();
        self
    }

    pub fn with_type_param(mut self, name: impl Into<SmolStr>) -> Self {
        self.type_params.push(name.into());
        self
    }

    pub fn with_constraint(mut self, constraint: TypeConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    pub fn with_members(mut self, members: impl IntoIterator<Item = Member>) -> Self {
        self.members.extend(members);
        self
    }

    pub fn with_base(mut self, base: BaseTypeRef) -> Self {
        self.bases.push(base);
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_symbol(mut self, symbol: SymbolId) -> Self {
        self.symbol = Some(symbol);
        self
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// The annotation matching `marker`, if any.
    pub fn marker(&self, marker: &str) -> Option<&Annotation> {
        self.annotations.find_marker(marker)
    }

    /// `Namespace.Class`, or just `Class` in the global namespace.
    pub fn qualified_name(&self) -> String {
        qualify(&self.namespace, &self.name)
    }

    /// Identifier of the synthesized interface: `I` + class identifier.
    pub fn interface_name(&self) -> String {
        interface_name(&self.name)
    }

    /// Qualified name of the synthesized interface.
    pub fn interface_qualified_name(&self) -> String {
        qualify(&self.namespace, &self.interface_name())
    }
}

/// Join a namespace path and a simple name.
pub fn qualify(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", namespace, name)
    }
}
