//! Salsa database for incremental regeneration.
//!
//! Each annotated class is a [`ClassInput`]. [`IncrementalGenerator`] only
//! writes an input when the class declaration or its unit context actually
//! changed, so re-running a batch after an edit re-synthesizes just the
//! edited classes.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use indexmap::IndexMap;
use salsa::Setter;

use super::assemble::GeneratedArtifact;
use super::diagnostics::{Diagnostic, DiagnosticCollector};
use super::driver::{GeneratorOutput, generate_class, reject_repeated};
use super::scan::{WorkItem, scan_units, split_repeated};
use crate::base::GeneratorConfig;
use crate::hir::TypeProvider;
use crate::syntax::{ClassDecl, CompilationUnit, UsingDirective};

// ============================================================================
// INPUTS
// ============================================================================

/// Everything besides the declaration that a class's artifact depends on.
#[derive(Clone)]
pub struct ClassContext {
    pub path: Arc<str>,
    pub usings: Arc<[UsingDirective]>,
    pub provider: Arc<dyn TypeProvider>,
    pub config: Arc<GeneratorConfig>,
}

impl PartialEq for ClassContext {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
            && self.usings == other.usings
            && Arc::ptr_eq(&self.provider, &other.provider)
            && self.config == other.config
    }
}

impl Eq for ClassContext {}

impl fmt::Debug for ClassContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassContext")
            .field("path", &self.path)
            .field("usings", &self.usings)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Input: one annotated class.
#[salsa::input]
pub struct ClassInput {
    #[return_ref]
    pub decl: ClassDecl,
    #[return_ref]
    pub context: ClassContext,
}

// ============================================================================
// DATABASE
// ============================================================================

/// The Salsa database memoizing per-class synthesis.
#[salsa::db]
#[derive(Default, Clone)]
pub struct GeneratorDatabase {
    storage: salsa::Storage<Self>,
    executions: Arc<AtomicUsize>,
}

#[salsa::db]
impl salsa::Database for GeneratorDatabase {
    fn salsa_event(&self, event: &dyn Fn() -> salsa::Event) {
        if let salsa::EventKind::WillExecute { .. } = event().kind {
            self.executions.fetch_add(1, Ordering::Relaxed);
        }
    }
}

impl GeneratorDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of query executions so far (memoized hits are not counted).
    pub fn executions(&self) -> usize {
        self.executions.load(Ordering::Relaxed)
    }
}

// ============================================================================
// TRACKED QUERIES
// ============================================================================

/// Outcome of synthesizing one class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassOutcome {
    pub artifact: Option<GeneratedArtifact>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Synthesize one class. Memoized until its input changes.
#[salsa::tracked]
pub fn class_artifact(db: &dyn salsa::Database, input: ClassInput) -> ClassOutcome {
    let decl = input.decl(db);
    let context = input.context(db);
    let item = WorkItem::new(decl, &context.usings, &context.path);
    let sink = DiagnosticCollector::new();
    let artifact = generate_class(&item, context.provider.as_ref(), &context.config, &sink);
    ClassOutcome {
        artifact,
        diagnostics: sink.finish(),
    }
}

// ============================================================================
// INCREMENTAL GENERATOR
// ============================================================================

/// Keeps one input per annotated class across batches.
pub struct IncrementalGenerator {
    db: GeneratorDatabase,
    provider: Arc<dyn TypeProvider>,
    config: Arc<GeneratorConfig>,
    /// Keyed by qualified class name.
    inputs: IndexMap<String, ClassInput>,
}

impl IncrementalGenerator {
    pub fn new(provider: Arc<dyn TypeProvider>, config: GeneratorConfig) -> Self {
        Self {
            db: GeneratorDatabase::new(),
            provider,
            config: Arc::new(config),
            inputs: IndexMap::new(),
        }
    }

    pub fn database(&self) -> &GeneratorDatabase {
        &self.db
    }

    /// Swap the type information; every class is regenerated on next update.
    pub fn set_provider(&mut self, provider: Arc<dyn TypeProvider>) {
        self.provider = provider;
    }

    /// Bring the inputs in line with `units` and collect all outcomes.
    pub fn update(&mut self, units: &[CompilationUnit]) -> GeneratorOutput {
        let (items, repeated) = split_repeated(scan_units(units, &self.config));
        let sink = DiagnosticCollector::new();
        for item in &repeated {
            reject_repeated(item, &sink);
        }
        let mut current = IndexMap::with_capacity(items.len());

        for item in &items {
            let key = item.class.qualified_name();
            let context = ClassContext {
                path: item.path.clone(),
                usings: Arc::from(item.usings),
                provider: self.provider.clone(),
                config: self.config.clone(),
            };
            let input = match self.inputs.get(&key) {
                Some(&input) => {
                    if input.decl(&self.db) != item.class {
                        input.set_decl(&mut self.db).to(item.class.clone());
                    }
                    if *input.context(&self.db) != context {
                        input.set_context(&mut self.db).to(context);
                    }
                    input
                }
                None => ClassInput::new(&self.db, item.class.clone(), context),
            };
            current.insert(key, input);
        }
        self.inputs = current;

        let mut artifacts = Vec::new();
        for &input in self.inputs.values() {
            let outcome = class_artifact(&self.db, input);
            artifacts.extend(outcome.artifact);
            for diagnostic in outcome.diagnostics {
                sink.add(diagnostic);
            }
        }

        let classes_scanned = self.inputs.len() + repeated.len();
        GeneratorOutput {
            classes_failed: classes_scanned - artifacts.len(),
            artifacts,
            diagnostics: sink.finish(),
            classes_scanned,
        }
    }
}
