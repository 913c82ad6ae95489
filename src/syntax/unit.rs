//! Compilation units: the top-level context a class is declared in.

use smol_str::SmolStr;
use std::fmt;
use std::sync::Arc;

use super::class::ClassDecl;

/// A top-level `using` directive.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct UsingDirective {
    /// Namespace or type being imported.
    pub target: Arc<str>,
    /// `using Alias = Target;`
    #[cfg_attr(feature = "interchange", serde(default))]
    pub alias: Option<SmolStr>,
    /// `using static Target;`
    #[cfg_attr(feature = "interchange", serde(default))]
    pub is_static: bool,
    /// `global using Target;`
    #[cfg_attr(feature = "interchange", serde(default))]
    pub is_global: bool,
}

impl UsingDirective {
    pub fn new(target: impl Into<Arc<str>>) -> Self {
        Self {
            target: target.into(),
            alias: None,
            is_static: false,
            is_global: false,
        }
    }

    pub fn alias(alias: impl Into<SmolStr>, target: impl Into<Arc<str>>) -> Self {
        Self {
            alias: Some(alias.into()),
            ..Self::new(target)
        }
    }

    pub fn static_import(target: impl Into<Arc<str>>) -> Self {
        Self {
            is_static: true,
            ..Self::new(target)
        }
    }
}

impl fmt::Display for UsingDirective {
    /// Global usings are emitted as plain usings.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("using ")?;
        if self.is_static {
            f.write_str("static ")?;
        }
        if let Some(alias) = &self.alias {
            write!(f, "{} = ", alias)?;
        }
        write!(f, "{};", self.target)
    }
}

/// One source file as handed over by the host front end.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct CompilationUnit {
    pub path: Arc<str>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub usings: Vec<UsingDirective>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub classes: Vec<ClassDecl>,
}

impl CompilationUnit {
    pub fn new(path: impl Into<Arc<str>>) -> Self {
        Self {
            path: path.into(),
            usings: Vec::new(),
            classes: Vec::new(),
        }
    }

    pub fn with_using(mut self, using: UsingDirective) -> Self {
        self.usings.push(using);
        self
    }

    pub fn with_class(mut self, class: ClassDecl) -> Self {
        self.classes.push(class);
        self
    }

    /// Load a unit from JSON produced by a host front end.
    #[cfg(feature = "interchange")]
    pub fn from_json(text: &str) -> Result<Self, crate::error::GenerateError> {
        serde_json::from_str(text).map_err(crate::error::GenerateError::interchange)
    }
}
