//! Binding written base-type references to symbols.
//!
//! Hosts that already resolve references set [`BaseTypeRef::symbol`]
//! themselves. Hosts that hand over plain text (e.g. JSON exports) can use
//! [`Binder`] to fill in the identities from a [`SymbolTable`] using the
//! usual lookup order:
//!
//! 1. `global::`-qualified names are looked up verbatim
//! 2. a leading using alias is substituted by its target
//! 3. the enclosing namespace and each of its parents, innermost first
//! 4. the namespaces imported by using directives (must be unambiguous)

use crate::base::SymbolId;
use crate::syntax::{BaseTypeRef, ClassDecl, CompilationUnit, TypeRef, UsingDirective, qualify};

use super::table::SymbolTable;

/// A reference the binder could not resolve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unbound {
    pub class: String,
    pub reference: TypeRef,
}

/// Resolves written type names against a [`SymbolTable`].
#[derive(Clone, Copy, Debug)]
pub struct Binder<'a> {
    table: &'a SymbolTable,
}

impl<'a> Binder<'a> {
    pub fn new(table: &'a SymbolTable) -> Self {
        Self { table }
    }

    /// Resolve a written type name seen inside `namespace`.
    pub fn resolve_name(
        &self,
        written: &TypeRef,
        namespace: &str,
        usings: &[UsingDirective],
    ) -> Option<SymbolId> {
        let path = written.path();

        if let Some(global) = path.strip_prefix("global::") {
            return self.lookup(global);
        }

        if let Some(target) = substitute_alias(path, usings) {
            return self.lookup(&target);
        }

        let mut scope = Some(namespace);
        while let Some(current) = scope {
            if let Some(id) = self.lookup(&qualify(current, path)) {
                tracing::trace!("[BIND] '{}' found in scope '{}'", path, current);
                return Some(id);
            }
            scope = parent_namespace(current);
        }

        let mut candidates = usings
            .iter()
            .filter(|u| u.alias.is_none() && !u.is_static)
            .filter_map(|u| self.lookup(&qualify(&u.target, path)));
        let first = candidates.next()?;
        if candidates.any(|other| other != first) {
            tracing::debug!("[BIND] '{}' is ambiguous between imported namespaces", path);
            return None;
        }
        Some(first)
    }

    /// Bind the class's own symbol and every unresolved base reference.
    ///
    /// Returns the references that stayed unresolved.
    pub fn bind_class(&self, class: &mut ClassDecl, usings: &[UsingDirective]) -> Vec<Unbound> {
        if class.symbol.is_none() {
            class.symbol = self.lookup(&class.qualified_name());
        }

        let namespace = class.namespace.clone();
        let mut unbound = Vec::new();
        for base in class.bases.iter_mut().filter(|b| b.symbol.is_none()) {
            base.symbol = self.resolve_name(&base.ty, &namespace, usings);
            if base.symbol.is_none() {
                unbound.push(Unbound {
                    class: class.name.to_string(),
                    reference: base.ty.clone(),
                });
            }
        }
        unbound
    }

    /// Bind every class of a compilation unit.
    pub fn bind_unit(&self, unit: &mut CompilationUnit) -> Vec<Unbound> {
        let usings = unit.usings.clone();
        unit.classes
            .iter_mut()
            .flat_map(|class| self.bind_class(class, &usings))
            .collect()
    }

    /// Bind a single reference in the context of `class`.
    pub fn bind_reference(
        &self,
        reference: &mut BaseTypeRef,
        class: &ClassDecl,
        usings: &[UsingDirective],
    ) -> bool {
        if reference.symbol.is_none() {
            reference.symbol = self.resolve_name(&reference.ty, &class.namespace, usings);
        }
        reference.symbol.is_some()
    }

    fn lookup(&self, qualified: &str) -> Option<SymbolId> {
        self.table.lookup_qualified(qualified).map(|s| s.id)
    }
}

/// `NewName.Inner` with `using NewName = A.B;` -> `A.B.Inner`.
fn substitute_alias(path: &str, usings: &[UsingDirective]) -> Option<String> {
    let (head, rest) = match path.find('.') {
        Some(idx) => (&path[..idx], Some(&path[idx + 1..])),
        None => (path, None),
    };
    let using = usings
        .iter()
        .find(|u| u.alias.as_deref() == Some(head))?;
    let target = using.target.strip_prefix("global::").unwrap_or(&using.target);
    Some(match rest {
        Some(rest) => format!("{}.{}", target, rest),
        None => target.to_string(),
    })
}

/// "A.B.C" -> Some("A.B"), "A" -> Some(""), "" -> None
fn parent_namespace(namespace: &str) -> Option<&str> {
    if namespace.is_empty() {
        return None;
    }
    Some(namespace.rfind('.').map_or("", |idx| &namespace[..idx]))
}
