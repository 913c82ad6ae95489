//! Annotations (attributes) attached to classes and members.

use smol_str::SmolStr;
use std::sync::Arc;

use crate::base::constants::ATTRIBUTE_SUFFIX;

/// The value of one annotation argument.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum AnnotationValue {
    /// A string literal: `"Get2"`.
    String(Arc<str>),
    /// A string array: `new[] { "Get", "Get2" }`.
    StringArray(Vec<Arc<str>>),
    /// A `nameof(Member)` expression.
    NameOf(SmolStr),
    /// Any other expression, as written.
    Expression(Arc<str>),
}

impl AnnotationValue {
    /// The strings carried by this value (`nameof` counts as its operand).
    pub fn strings(&self) -> Vec<&str> {
        match self {
            AnnotationValue::String(s) => vec![s],
            AnnotationValue::StringArray(items) => items.iter().map(AsRef::as_ref).collect(),
            AnnotationValue::NameOf(name) => vec![name.as_str()],
            AnnotationValue::Expression(_) => Vec::new(),
        }
    }
}

/// One positional or named annotation argument.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnotationArg {
    /// `Exclude` in `Exclude = new[] { ... }`; `None` for positional arguments.
    pub name: Option<SmolStr>,
    pub value: AnnotationValue,
}

/// An annotation as written: `[GenerateInterface(Exclude = new[] { "Get2" })]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct Annotation {
    /// Written name: simple, qualified, with or without the `Attribute` suffix.
    pub name: Arc<str>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub args: Vec<AnnotationArg>,
}

impl Annotation {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Add a positional argument.
    pub fn with_arg(mut self, value: AnnotationValue) -> Self {
        self.args.push(AnnotationArg { name: None, value });
        self
    }

    /// Add a named argument.
    pub fn with_named_arg(mut self, name: impl Into<SmolStr>, value: AnnotationValue) -> Self {
        self.args.push(AnnotationArg {
            name: Some(name.into()),
            value,
        });
        self
    }

    /// The written name without `global::` alias and namespace qualification.
    pub fn simple_name(&self) -> &str {
        let name = self.name.trim();
        let name = name.rsplit("::").next().unwrap_or(name);
        name.rsplit('.').next().unwrap_or(name)
    }

    /// True if this annotation denotes `marker`, written either as the
    /// marker's simple name or with the `Attribute` suffix appended.
    ///
    /// Comparison is case sensitive; qualification is ignored.
    pub fn matches(&self, marker: &str) -> bool {
        let name = self.simple_name();
        name == marker
            || name
                .strip_suffix(ATTRIBUTE_SUFFIX)
                .is_some_and(|stem| stem == marker)
    }

    /// Look up a named argument.
    pub fn named_arg(&self, name: &str) -> Option<&AnnotationValue> {
        self.args
            .iter()
            .find(|arg| arg.name.as_deref() == Some(name))
            .map(|arg| &arg.value)
    }

    /// Positional arguments in written order.
    pub fn positional_args(&self) -> impl Iterator<Item = &AnnotationValue> {
        self.args
            .iter()
            .filter(|arg| arg.name.is_none())
            .map(|arg| &arg.value)
    }
}

/// Helpers over a declaration's annotation list.
pub trait AnnotationsExt {
    /// Find the first annotation matching `marker`.
    fn find_marker(&self, marker: &str) -> Option<&Annotation>;

    fn has_marker(&self, marker: &str) -> bool {
        self.find_marker(marker).is_some()
    }
}

impl AnnotationsExt for [Annotation] {
    fn find_marker(&self, marker: &str) -> Option<&Annotation> {
        self.iter().find(|a| a.matches(marker))
    }
}
