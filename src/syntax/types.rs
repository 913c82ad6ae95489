//! Type references as written in source.
//!
//! The host front end resolves names; the generator only needs to carry
//! the written text through and to recognise a handful of well-known types
//! by their simple name.

use std::fmt;
use std::sync::Arc;

use crate::base::constants::{ASYNC_UNIT_NAMESPACE, ASYNC_UNIT_TYPE};

/// A type as written in source, e.g. `List<ITestModel?>?` or
/// `global::System.Threading.Tasks.Task`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct TypeRef {
    text: Arc<str>,
}

impl TypeRef {
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self { text: text.into() }
    }

    /// The written text, verbatim.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The written name without generic arguments, nullability or array rank.
    ///
    /// `global::System.Collections.Generic.List<int>?` -> `global::System.Collections.Generic.List`
    pub fn path(&self) -> &str {
        let text = self.text.trim();
        let end = text.find(['<', '?', '[']).unwrap_or(text.len());
        text[..end].trim_end()
    }

    /// The last segment of [`TypeRef::path`], with any `global::` alias removed.
    ///
    /// `global::System.Threading.Tasks.Task<string>` -> `Task`
    pub fn simple_name(&self) -> &str {
        let path = self.path();
        let path = path.rsplit("::").next().unwrap_or(path);
        path.rsplit('.').next().unwrap_or(path)
    }

    /// The namespace qualification of [`TypeRef::path`], if any, without a
    /// leading `global::` alias.
    pub fn qualifier(&self) -> Option<&str> {
        let path = self.path();
        let path = path.strip_prefix("global::").unwrap_or(path);
        path.rfind('.').map(|idx| &path[..idx])
    }

    /// True if the type has generic arguments (`Task<string>`).
    pub fn is_generic(&self) -> bool {
        self.text.contains('<')
    }

    /// True if this names the asynchronous unit-of-work type, written
    /// simply (`Task`, `Task<T>`) or qualified by its declaring namespace
    /// (`System.Threading.Tasks.Task`, `global::System.Threading.Tasks.Task<T>`).
    pub fn is_async_unit(&self) -> bool {
        if self.simple_name() != ASYNC_UNIT_TYPE {
            return false;
        }
        match self.qualifier() {
            None => true,
            Some(ns) => ns == ASYNC_UNIT_NAMESPACE,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for TypeRef {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for TypeRef {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// A generic constraint clause: `where T : TestModel, new()`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeConstraint {
    /// The constrained type parameter.
    pub parameter: Arc<str>,
    /// Constraints in written order (`class`, `new()`, `IFoo`, ...).
    pub bounds: Vec<Arc<str>>,
}

impl TypeConstraint {
    pub fn new<I, S>(parameter: impl Into<Arc<str>>, bounds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        Self {
            parameter: parameter.into(),
            bounds: bounds.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for TypeConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "where {} : ", self.parameter)?;
        for (idx, bound) in self.bounds.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            f.write_str(bound)?;
        }
        Ok(())
    }
}
