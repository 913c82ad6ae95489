//! InheritanceResolver: the interfaces a synthesized interface extends and
//! the member names those interfaces already declare.
//!
//! Base references are partitioned by the kind of type they resolve to. The
//! first class among them is the base class; its interfaces (and those of
//! its own base classes) are inherited. Everything is compared by
//! [`SymbolId`], never by written text.

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::base::SymbolId;
use crate::error::GenerateError;
use crate::hir::{TypeKind, TypeProvider};
use crate::syntax::{BaseTypeRef, ClassDecl, TypeRef};

/// The reconciled base-interface list of one class.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Interfaces to extend, direct ones first, de-duplicated by identity.
    pub interfaces: Vec<BaseTypeRef>,
    /// Member names declared by those interfaces or the interfaces they extend.
    pub inherited_names: IndexSet<SmolStr>,
    /// References that did not resolve; they are left out of the result.
    pub unresolved: Vec<GenerateError>,
}

impl Resolution {
    /// Written types of the resolved interfaces, in emission order.
    pub fn interface_types(&self) -> Vec<TypeRef> {
        self.interfaces.iter().map(|base| base.ty.clone()).collect()
    }
}

/// Resolves base interfaces through a [`TypeProvider`].
pub struct InheritanceResolver<'a> {
    provider: &'a dyn TypeProvider,
}

impl<'a> InheritanceResolver<'a> {
    pub fn new(provider: &'a dyn TypeProvider) -> Self {
        Self { provider }
    }

    pub fn resolve(&self, class: &ClassDecl) -> Resolution {
        let mut resolution = Resolution::default();
        let mut direct: IndexMap<SymbolId, TypeRef> = IndexMap::new();
        let mut base_class = None;
        let own_name = class.interface_name();

        for base in &class.bases {
            let Some(id) = self.provider.resolve(base) else {
                // The interface being generated does not exist before its first run.
                if base.ty.simple_name() == own_name {
                    tracing::debug!("[INHERIT] {}: dropped unresolved self reference", class.name);
                    continue;
                }
                tracing::warn!("[INHERIT] {}: unresolved base type '{}'", class.name, base.ty);
                resolution
                    .unresolved
                    .push(GenerateError::unresolved(class.name.as_str(), base.ty.clone()));
                continue;
            };
            match self.provider.kind(id) {
                Some(TypeKind::Interface) => {
                    direct.entry(id).or_insert_with(|| base.ty.clone());
                }
                Some(TypeKind::Class) if base_class.is_none() => base_class = Some(id),
                Some(kind) => {
                    tracing::trace!("[INHERIT] {}: ignoring base '{}' ({:?})", class.name, base.ty, kind);
                }
                None => {
                    tracing::warn!("[INHERIT] {}: no description for '{}'", class.name, base.ty);
                    resolution
                        .unresolved
                        .push(GenerateError::unresolved(class.name.as_str(), base.ty.clone()));
                }
            }
        }

        let mut all = direct;
        if let Some(base_class) = base_class {
            for (id, ty) in self.class_interfaces(base_class) {
                all.entry(id).or_insert(ty);
            }
        }

        if let Some(own) = self.provider.lookup(&class.interface_qualified_name()) {
            if all.shift_remove(&own).is_some() {
                tracing::debug!("[INHERIT] {}: dropped self reference", class.name);
            }
        }

        for &id in all.keys() {
            self.collect_names(id, &mut resolution.inherited_names);
        }
        resolution.interfaces = all
            .into_iter()
            .map(|(id, ty)| BaseTypeRef::resolved(ty, id))
            .collect();
        resolution
    }

    /// Interfaces implemented by a class and all of its base classes.
    fn class_interfaces(&self, class: SymbolId) -> Vec<(SymbolId, TypeRef)> {
        let mut visited = FxHashSet::default();
        let mut pending = vec![class];
        let mut found = Vec::new();

        while let Some(current) = pending.pop() {
            if !visited.insert(current) {
                continue;
            }
            let Some(shape) = self.provider.describe(current) else {
                continue;
            };
            let mut next_class = None;
            for base in shape.supertypes.iter() {
                let Some(id) = self.provider.resolve(base) else {
                    tracing::trace!("[INHERIT] {}: unresolved base '{}'", shape.name, base.ty);
                    continue;
                };
                match self.provider.kind(id) {
                    Some(TypeKind::Interface) => found.push((id, base.ty.clone())),
                    Some(TypeKind::Class) if next_class.is_none() => next_class = Some(id),
                    _ => {}
                }
            }
            pending.extend(next_class);
        }
        found
    }

    /// Member names of an interface and every interface it extends.
    fn collect_names(&self, interface: SymbolId, names: &mut IndexSet<SmolStr>) {
        let mut visited = FxHashSet::default();
        let mut pending = vec![interface];

        while let Some(current) = pending.pop() {
            if !visited.insert(current) {
                continue;
            }
            let Some(shape) = self.provider.describe(current) else {
                continue;
            };
            names.extend(shape.contract_member_names().map(SmolStr::new));
            pending.extend(
                shape
                    .supertypes
                    .iter()
                    .filter_map(|base| self.provider.resolve(base))
                    .filter(|&id| self.provider.kind(id) == Some(TypeKind::Interface)),
            );
        }
    }
}

/// Resolve the base interfaces of `class`.
pub fn resolve_interfaces(class: &ClassDecl, provider: &dyn TypeProvider) -> Resolution {
    InheritanceResolver::new(provider).resolve(class)
}
