//! Symbol table: resolved type information supplied by the host.
//!
//! The table stores one [`TypeSymbol`] per type, indexed by [`SymbolId`].
//! Types declared in the analysed sources keep their declared base list;
//! types known only from imported metadata carry the flattened list of
//! every interface they implement. Both are exposed through the single
//! [`TypeProvider`] capability so consumers never branch on provenance.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use std::borrow::Cow;
use std::sync::Arc;

use crate::base::SymbolId;
use crate::error::GenerateError;
use crate::syntax::{BaseTypeRef, ClassDecl, MemberKind, qualify};

// ============================================================================
// SYMBOL TYPES
// ============================================================================

/// The kind of a type symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum TypeKind {
    Class,
    Interface,
    Struct,
    Enum,
    Delegate,
}

impl TypeKind {
    pub fn is_interface(&self) -> bool {
        matches!(self, TypeKind::Interface)
    }

    pub fn is_class(&self) -> bool {
        matches!(self, TypeKind::Class)
    }
}

/// The kind of a member symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum MemberSymbolKind {
    Method,
    Property,
    Field,
    Event,
    /// `get_X` / `set_X`: represented by the owning property.
    Accessor,
}

/// A member declared by a type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct MemberSymbol {
    pub name: SmolStr,
    pub kind: MemberSymbolKind,
}

impl MemberSymbol {
    pub fn new(name: impl Into<SmolStr>, kind: MemberSymbolKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn method(name: impl Into<SmolStr>) -> Self {
        Self::new(name, MemberSymbolKind::Method)
    }

    pub fn property(name: impl Into<SmolStr>) -> Self {
        Self::new(name, MemberSymbolKind::Property)
    }
}

/// Where a symbol's information comes from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "origin", rename_all = "snake_case")
)]
pub enum Origin {
    /// Declared in the analysed sources: the declared base list.
    Source { bases: Vec<BaseTypeRef> },
    /// Imported metadata: every implemented interface, transitively.
    Metadata { all_interfaces: Vec<SymbolId> },
}

/// A resolved type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeSymbol {
    pub id: SymbolId,
    pub name: SmolStr,
    pub qualified_name: Arc<str>,
    pub kind: TypeKind,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub members: Vec<MemberSymbol>,
    #[cfg_attr(feature = "interchange", serde(flatten))]
    pub origin: Origin,
}

impl TypeSymbol {
    /// Reference text used when this symbol is emitted without a written
    /// reference to copy: `global::Namespace.Name`.
    pub fn display_name(&self) -> String {
        format!("global::{}", self.qualified_name)
    }
}

// ============================================================================
// PROVIDER CAPABILITY
// ============================================================================

/// Everything the generator needs to know about one type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeShape<'a> {
    pub id: SymbolId,
    pub name: &'a str,
    pub qualified_name: &'a str,
    pub kind: TypeKind,
    /// Direct supertypes for source types; the flattened interface list for
    /// metadata types.
    pub supertypes: Cow<'a, [BaseTypeRef]>,
    pub members: &'a [MemberSymbol],
}

impl TypeShape<'_> {
    /// Declared member names, excluding accessor methods.
    pub fn contract_member_names(&self) -> impl Iterator<Item = &str> {
        self.members
            .iter()
            .filter(|m| m.kind != MemberSymbolKind::Accessor)
            .map(|m| m.name.as_str())
    }
}

/// Read-only access to resolved type information.
///
/// Implementations must tolerate concurrent reads: one generator run per
/// class may query the provider from several worker threads at once.
pub trait TypeProvider: Send + Sync {
    /// Resolve a base-list entry to its symbol.
    fn resolve(&self, reference: &BaseTypeRef) -> Option<SymbolId> {
        reference.symbol
    }

    /// Look up a type by qualified name (`Namespace.Name`).
    fn lookup(&self, qualified_name: &str) -> Option<SymbolId>;

    /// Describe a resolved type.
    fn describe(&self, id: SymbolId) -> Option<TypeShape<'_>>;

    /// Shorthand for `describe(id).map(|s| s.kind)`.
    fn kind(&self, id: SymbolId) -> Option<TypeKind> {
        self.describe(id).map(|shape| shape.kind)
    }
}

// ============================================================================
// SYMBOL TABLE
// ============================================================================

/// The default [`TypeProvider`]: an in-memory table of type symbols.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    /// The single source of truth; `SymbolId` indexes into this vector.
    symbols: Vec<TypeSymbol>,
    /// Qualified name -> id (insertion ordered).
    by_qualified_name: IndexMap<Arc<str>, SymbolId>,
    /// Simple name -> ids (may have multiple across namespaces).
    by_simple_name: FxHashMap<SmolStr, Vec<SymbolId>>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> SymbolId {
        SymbolId::new(self.symbols.len() as u32)
    }

    /// Add a symbol, or merge a further partial declaration into the symbol
    /// already registered under the same qualified name.
    ///
    /// A partial declaration must agree with the first one on kind and origin.
    fn insert(
        &mut self,
        namespace: &str,
        name: &str,
        kind: TypeKind,
        members: Vec<MemberSymbol>,
        origin: Origin,
    ) -> Result<SymbolId, GenerateError> {
        let qualified: Arc<str> = Arc::from(qualify(namespace, name));
        if let Some(&existing) = self.by_qualified_name.get(&qualified) {
            let symbol = &mut self.symbols[existing.index()];
            if symbol.kind != kind {
                return Err(GenerateError::interchange(format!(
                    "'{}' is declared as {:?} and as {:?}",
                    qualified, symbol.kind, kind
                )));
            }
            match (&mut symbol.origin, origin) {
                (Origin::Source { bases }, Origin::Source { bases: more }) => bases.extend(more),
                (Origin::Metadata { all_interfaces }, Origin::Metadata { all_interfaces: more }) => {
                    all_interfaces.extend(more)
                }
                _ => {
                    return Err(GenerateError::interchange(format!(
                        "'{}' is declared both in source and in metadata",
                        qualified
                    )));
                }
            }
            symbol.members.extend(members);
            return Ok(existing);
        }

        let id = self.next_id();
        let name = SmolStr::new(name);
        self.symbols.push(TypeSymbol {
            id,
            name: name.clone(),
            qualified_name: qualified.clone(),
            kind,
            members,
            origin,
        });
        self.by_qualified_name.insert(qualified, id);
        self.by_simple_name.entry(name).or_default().push(id);
        Ok(id)
    }

    /// Declare a type from the analysed sources.
    pub fn declare(
        &mut self,
        namespace: &str,
        name: &str,
        kind: TypeKind,
        bases: Vec<BaseTypeRef>,
        members: Vec<MemberSymbol>,
    ) -> Result<SymbolId, GenerateError> {
        self.insert(namespace, name, kind, members, Origin::Source { bases })
    }

    /// Declare a source interface.
    pub fn declare_interface(
        &mut self,
        namespace: &str,
        name: &str,
        bases: Vec<BaseTypeRef>,
        members: Vec<MemberSymbol>,
    ) -> Result<SymbolId, GenerateError> {
        self.declare(namespace, name, TypeKind::Interface, bases, members)
    }

    /// Declare a source class from its declaration (base list and members).
    pub fn declare_class(&mut self, class: &ClassDecl) -> Result<SymbolId, GenerateError> {
        let members = class
            .members
            .iter()
            .map(|m| {
                let kind = match m.kind {
                    MemberKind::Field(_) => MemberSymbolKind::Field,
                    MemberKind::Method(_) => MemberSymbolKind::Method,
                    MemberKind::Property(_) => MemberSymbolKind::Property,
                };
                MemberSymbol::new(m.name.clone(), kind)
            })
            .collect();
        self.declare(
            &class.namespace,
            &class.name,
            TypeKind::Class,
            class.bases.clone(),
            members,
        )
    }

    /// Import a type known only from compiled metadata.
    pub fn import_metadata(
        &mut self,
        namespace: &str,
        name: &str,
        kind: TypeKind,
        all_interfaces: Vec<SymbolId>,
        members: Vec<MemberSymbol>,
    ) -> Result<SymbolId, GenerateError> {
        self.insert(namespace, name, kind, members, Origin::Metadata { all_interfaces })
    }

    /// Get a symbol by id.
    pub fn get(&self, id: SymbolId) -> Option<&TypeSymbol> {
        self.symbols.get(id.index())
    }

    /// Look up a symbol by qualified name.
    pub fn lookup_qualified(&self, name: &str) -> Option<&TypeSymbol> {
        self.by_qualified_name
            .get(name)
            .and_then(|&id| self.get(id))
    }

    /// Look up all symbols with a simple name.
    pub fn lookup_simple(&self, name: &str) -> Vec<&TypeSymbol> {
        self.by_simple_name
            .get(name)
            .map(|ids| ids.iter().filter_map(|&id| self.get(id)).collect())
            .unwrap_or_default()
    }

    pub fn all_symbols(&self) -> impl Iterator<Item = &TypeSymbol> {
        self.symbols.iter()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Build a table from symbols exported by a host (ids must be dense and
    /// in order, qualified names unique).
    pub fn from_symbols(symbols: Vec<TypeSymbol>) -> Result<Self, GenerateError> {
        let mut table = Self::new();
        for symbol in symbols {
            if symbol.id != table.next_id() {
                return Err(GenerateError::interchange(format!(
                    "symbol '{}' has id {}, expected {}",
                    symbol.qualified_name,
                    symbol.id,
                    table.next_id()
                )));
            }
            if let Some(&first) = table.by_qualified_name.get(&symbol.qualified_name) {
                return Err(GenerateError::interchange(format!(
                    "symbol '{}' has ids {} and {}",
                    symbol.qualified_name, first, symbol.id
                )));
            }
            table
                .by_qualified_name
                .insert(symbol.qualified_name.clone(), symbol.id);
            table
                .by_simple_name
                .entry(symbol.name.clone())
                .or_default()
                .push(symbol.id);
            table.symbols.push(symbol);
        }
        Ok(table)
    }

    /// Load a table from a JSON array of symbols.
    #[cfg(feature = "interchange")]
    pub fn from_json(text: &str) -> Result<Self, GenerateError> {
        let symbols: Vec<TypeSymbol> =
            serde_json::from_str(text).map_err(GenerateError::interchange)?;
        Self::from_symbols(symbols)
    }
}

impl TypeProvider for SymbolTable {
    fn lookup(&self, qualified_name: &str) -> Option<SymbolId> {
        self.by_qualified_name.get(qualified_name).copied()
    }

    fn describe(&self, id: SymbolId) -> Option<TypeShape<'_>> {
        let symbol = self.get(id)?;
        let supertypes = match &symbol.origin {
            Origin::Source { bases } => Cow::Borrowed(bases.as_slice()),
            Origin::Metadata { all_interfaces } => Cow::Owned(
                all_interfaces
                    .iter()
                    .filter_map(|&iface| self.get(iface))
                    .map(|iface| BaseTypeRef::resolved(iface.display_name(), iface.id))
                    .collect(),
            ),
        };
        Some(TypeShape {
            id,
            name: &symbol.name,
            qualified_name: &symbol.qualified_name,
            kind: symbol.kind,
            supertypes,
            members: &symbol.members,
        })
    }
}
