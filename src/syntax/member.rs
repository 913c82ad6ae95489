//! Class members: fields, methods and properties.
//!
//! A [`Member`] carries the header shared by every kind (name, modifiers,
//! annotations) and a tagged [`MemberKind`] with the kind-specific shape.

use smol_str::SmolStr;
use std::fmt;
use std::sync::Arc;

use super::annotation::{Annotation, AnnotationsExt};
use super::modifiers::{Modifier, Modifiers};
use super::types::{TypeConstraint, TypeRef};

// ============================================================================
// BODIES
// ============================================================================

/// The body of a method or accessor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Body {
    /// No body: `get;`, `abstract void M();`, `partial void M();`
    #[default]
    None,
    /// A block body, as written.
    Block(Arc<str>),
    /// An expression body (`=> expr`), the expression as written.
    Expression(Arc<str>),
}

impl Body {
    pub fn is_none(&self) -> bool {
        matches!(self, Body::None)
    }
}

// ============================================================================
// METHODS
// ============================================================================

/// Parameter passing qualifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ParamModifier {
    Out,
    Ref,
    In,
    Params,
    This,
}

impl ParamModifier {
    pub fn keyword(&self) -> &'static str {
        match self {
            ParamModifier::Out => "out",
            ParamModifier::Ref => "ref",
            ParamModifier::In => "in",
            ParamModifier::Params => "params",
            ParamModifier::This => "this",
        }
    }
}

/// A method parameter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameter {
    pub name: SmolStr,
    pub ty: TypeRef,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub modifier: Option<ParamModifier>,
    /// Default value expression, as written (`default`, `null`, `42`).
    #[cfg_attr(feature = "interchange", serde(default))]
    pub default: Option<Arc<str>>,
}

impl Parameter {
    pub fn new(name: impl Into<SmolStr>, ty: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            modifier: None,
            default: None,
        }
    }

    pub fn with_modifier(mut self, modifier: ParamModifier) -> Self {
        self.modifier = Some(modifier);
        self
    }

    pub fn with_default(mut self, default: impl Into<Arc<str>>) -> Self {
        self.default = Some(default.into());
        self
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(modifier) = self.modifier {
            write!(f, "{} ", modifier.keyword())?;
        }
        write!(f, "{} {}", self.ty, self.name)?;
        if let Some(default) = &self.default {
            write!(f, " = {}", default)?;
        }
        Ok(())
    }
}

/// Method-specific shape.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct Method {
    pub return_type: TypeRef,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub type_params: Vec<SmolStr>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub params: Vec<Parameter>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub constraints: Vec<TypeConstraint>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub body: Body,
}

impl Method {
    pub fn new(return_type: impl Into<TypeRef>) -> Self {
        Self {
            return_type: return_type.into(),
            type_params: Vec::new(),
            params: Vec::new(),
            constraints: Vec::new(),
            body: Body::Block(Arc::from("{ }")),
        }
    }

    pub fn with_param(mut self, param: Parameter) -> Self {
        self.params.push(param);
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

    pub fn with_body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }
}

// ============================================================================
// PROPERTIES
// ============================================================================

/// Accessor keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum AccessorKind {
    Get,
    Set,
    Init,
}

impl AccessorKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            AccessorKind::Get => "get",
            AccessorKind::Set => "set",
            AccessorKind::Init => "init",
        }
    }
}

/// A property accessor with its own modifiers (`private set`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct Accessor {
    pub kind: AccessorKind,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub modifiers: Modifiers,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub body: Body,
}

impl Accessor {
    pub fn new(kind: AccessorKind) -> Self {
        Self {
            kind,
            modifiers: Modifiers::new(),
            body: Body::None,
        }
    }

    pub fn get() -> Self {
        Self::new(AccessorKind::Get)
    }

    pub fn set() -> Self {
        Self::new(AccessorKind::Set)
    }

    pub fn init() -> Self {
        Self::new(AccessorKind::Init)
    }

    pub fn with_modifiers(mut self, modifiers: impl Into<Modifiers>) -> Self {
        self.modifiers = modifiers.into();
        self
    }

    pub fn with_body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }

    /// An accessor is reachable through the interface unless it carries a
    /// restrictive visibility keyword.
    pub fn is_publicly_reachable(&self) -> bool {
        !self.modifiers.is_restricted()
    }
}

/// Property-specific shape.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct Property {
    pub ty: TypeRef,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub accessors: Vec<Accessor>,
    /// `=> expr` on the property itself (no accessor list).
    #[cfg_attr(feature = "interchange", serde(default))]
    pub expression_body: Option<Arc<str>>,
    /// `= value;` after the accessor list.
    #[cfg_attr(feature = "interchange", serde(default))]
    pub initializer: Option<Arc<str>>,
}

impl Property {
    /// A property with an empty accessor list.
    pub fn new(ty: impl Into<TypeRef>) -> Self {
        Self {
            ty: ty.into(),
            accessors: Vec::new(),
            expression_body: None,
            initializer: None,
        }
    }

    /// `{ get; set; }`
    pub fn auto(ty: impl Into<TypeRef>) -> Self {
        Self::new(ty)
            .with_accessor(Accessor::get())
            .with_accessor(Accessor::set())
    }

    /// `{ get; }`
    pub fn get_only(ty: impl Into<TypeRef>) -> Self {
        Self::new(ty).with_accessor(Accessor::get())
    }

    /// `=> expr;`
    pub fn expression_bodied(ty: impl Into<TypeRef>, expr: impl Into<Arc<str>>) -> Self {
        Self {
            expression_body: Some(expr.into()),
            ..Self::new(ty)
        }
    }

    pub fn with_accessor(mut self, accessor: Accessor) -> Self {
        self.accessors.push(accessor);
        self
    }

    pub fn with_initializer(mut self, value: impl Into<Arc<str>>) -> Self {
        self.initializer = Some(value.into());
        self
    }
}

// ============================================================================
// FIELDS
// ============================================================================

/// Field-specific shape.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    pub ty: TypeRef,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub initializer: Option<Arc<str>>,
}

impl Field {
    pub fn new(ty: impl Into<TypeRef>) -> Self {
        Self {
            ty: ty.into(),
            initializer: None,
        }
    }
}

// ============================================================================
// MEMBER
// ============================================================================

/// Kind-specific member shape.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum MemberKind {
    Field(Field),
    Method(Method),
    Property(Property),
}

impl MemberKind {
    pub fn display(&self) -> &'static str {
        match self {
            MemberKind::Field(_) => "field",
            MemberKind::Method(_) => "method",
            MemberKind::Property(_) => "property",
        }
    }
}

impl From<Field> for MemberKind {
    fn from(field: Field) -> Self {
        MemberKind::Field(field)
    }
}

impl From<Method> for MemberKind {
    fn from(method: Method) -> Self {
        MemberKind::Method(method)
    }
}

impl From<Property> for MemberKind {
    fn from(property: Property) -> Self {
        MemberKind::Property(property)
    }
}

/// A class member as declared in source.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct Member {
    pub name: SmolStr,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub modifiers: Modifiers,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub annotations: Vec<Annotation>,
    /// Compiler-synthesized rather than authored (e.g. record members).
    #[cfg_attr(feature = "interchange", serde(default))]
    pub implicit: bool,
    #[cfg_attr(feature = "interchange", serde(flatten))]
    pub kind: MemberKind,
}

impl Member {
    pub fn new(name: impl Into<SmolStr>, kind: impl Into<MemberKind>) -> Self {
        Self {
            name: name.into(),
            modifiers: Modifiers::new(),
            annotations: Vec::new(),
            implicit: false,
            kind: kind.into(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: impl Into<Modifiers>) -> Self {
        self.modifiers = modifiers.into();
        self
    }

    /// Shorthand for `with_modifiers([Modifier::Public])`.
    pub fn public(self) -> Self {
        self.with_modifiers([Modifier::Public])
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn implicit(mut self) -> Self {
        self.implicit = true;
        self
    }

    pub fn has_annotation(&self, marker: &str) -> bool {
        self.annotations.has_marker(marker)
    }

    pub fn as_method(&self) -> Option<&Method> {
        match &self.kind {
            MemberKind::Method(method) => Some(method),
            _ => None,
        }
    }

    pub fn as_property(&self) -> Option<&Property> {
        match &self.kind {
            MemberKind::Property(property) => Some(property),
            _ => None,
        }
    }

    pub fn as_field(&self) -> Option<&Field> {
        match &self.kind {
            MemberKind::Field(field) => Some(field),
            _ => None,
        }
    }
}
