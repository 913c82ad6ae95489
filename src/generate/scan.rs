//! AttributeScanner: find the classes that request an interface.

use std::sync::Arc;

use rustc_hash::FxHashSet;

use crate::base::{GeneratorConfig, SymbolId};
use crate::syntax::{Annotation, ClassDecl, CompilationUnit, UsingDirective};

/// One class to synthesize, together with its unit context.
#[derive(Clone, Copy, Debug)]
pub struct WorkItem<'a> {
    pub class: &'a ClassDecl,
    /// The class's own identity, when the host resolved it.
    pub symbol: Option<SymbolId>,
    /// Top-level using directives of the enclosing unit.
    pub usings: &'a [UsingDirective],
    pub path: &'a Arc<str>,
}

impl<'a> WorkItem<'a> {
    /// Build a work item for a class outside of any scan.
    pub fn new(class: &'a ClassDecl, usings: &'a [UsingDirective], path: &'a Arc<str>) -> Self {
        Self {
            class,
            symbol: class.symbol,
            usings,
            path,
        }
    }

    /// The class-level marker annotation, if present.
    pub fn marker(&self, config: &GeneratorConfig) -> Option<&'a Annotation> {
        self.class.marker(&config.interface_marker)
    }
}

/// Collect the annotated classes of one unit, in declaration order.
pub fn scan_unit<'a>(unit: &'a CompilationUnit, config: &GeneratorConfig) -> Vec<WorkItem<'a>> {
    unit.classes
        .iter()
        .filter(|class| class.marker(&config.interface_marker).is_some())
        .map(|class| {
            tracing::debug!("[SCAN] {} requests {}", class.qualified_name(), class.interface_name());
            WorkItem::new(class, &unit.usings, &unit.path)
        })
        .collect()
}

/// Collect the annotated classes of every unit, unit order first.
pub fn scan_units<'a>(units: &'a [CompilationUnit], config: &GeneratorConfig) -> Vec<WorkItem<'a>> {
    units.iter().flat_map(|unit| scan_unit(unit, config)).collect()
}

/// Split `items` into first declarations and repeats of an already seen
/// qualified class name.
///
/// Partial declarations reach the generator merged; a repeat would register
/// a second artifact under the same hint name.
pub fn split_repeated<'a>(items: Vec<WorkItem<'a>>) -> (Vec<WorkItem<'a>>, Vec<WorkItem<'a>>) {
    let mut seen = FxHashSet::default();
    items
        .into_iter()
        .partition(|item| seen.insert(item.class.qualified_name()))
}
