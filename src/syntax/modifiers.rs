//! Declaration modifiers (`public`, `static`, `override`, ...).

use std::fmt;

/// A single declaration or accessor modifier keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Modifier {
    Public,
    Private,
    Protected,
    Internal,
    File,
    Static,
    Override,
    Abstract,
    Virtual,
    Sealed,
    Async,
    Readonly,
    Partial,
    New,
    Required,
    Extern,
    Unsafe,
    Volatile,
}

impl Modifier {
    /// The source keyword.
    pub fn keyword(&self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Private => "private",
            Modifier::Protected => "protected",
            Modifier::Internal => "internal",
            Modifier::File => "file",
            Modifier::Static => "static",
            Modifier::Override => "override",
            Modifier::Abstract => "abstract",
            Modifier::Virtual => "virtual",
            Modifier::Sealed => "sealed",
            Modifier::Async => "async",
            Modifier::Readonly => "readonly",
            Modifier::Partial => "partial",
            Modifier::New => "new",
            Modifier::Required => "required",
            Modifier::Extern => "extern",
            Modifier::Unsafe => "unsafe",
            Modifier::Volatile => "volatile",
        }
    }

    /// Parse a source keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Some(match keyword {
            "public" => Modifier::Public,
            "private" => Modifier::Private,
            "protected" => Modifier::Protected,
            "internal" => Modifier::Internal,
            "file" => Modifier::File,
            "static" => Modifier::Static,
            "override" => Modifier::Override,
            "abstract" => Modifier::Abstract,
            "virtual" => Modifier::Virtual,
            "sealed" => Modifier::Sealed,
            "async" => Modifier::Async,
            "readonly" => Modifier::Readonly,
            "partial" => Modifier::Partial,
            "new" => Modifier::New,
            "required" => Modifier::Required,
            "extern" => Modifier::Extern,
            "unsafe" => Modifier::Unsafe,
            "volatile" => Modifier::Volatile,
            _ => return None,
        })
    }

    /// Visibility keywords that make a member or accessor less than public.
    pub fn is_restrictive(&self) -> bool {
        matches!(
            self,
            Modifier::Private | Modifier::Protected | Modifier::Internal | Modifier::File
        )
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Ordered modifier list as written on a declaration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Modifiers(Vec<Modifier>);

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, modifier: Modifier) -> bool {
        self.0.contains(&modifier)
    }

    pub fn is_public(&self) -> bool {
        self.contains(Modifier::Public)
    }

    pub fn is_static(&self) -> bool {
        self.contains(Modifier::Static)
    }

    pub fn is_override(&self) -> bool {
        self.contains(Modifier::Override)
    }

    pub fn is_abstract(&self) -> bool {
        self.contains(Modifier::Abstract)
    }

    pub fn is_async(&self) -> bool {
        self.contains(Modifier::Async)
    }

    /// True if any `private`/`protected`/`internal`/`file` keyword is present.
    pub fn is_restricted(&self) -> bool {
        self.0.iter().any(Modifier::is_restrictive)
    }

    pub fn iter(&self) -> impl Iterator<Item = Modifier> + '_ {
        self.0.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<Modifier> for Modifiers {
    fn from_iter<T: IntoIterator<Item = Modifier>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[Modifier; N]> for Modifiers {
    fn from(modifiers: [Modifier; N]) -> Self {
        Self(modifiers.to_vec())
    }
}
