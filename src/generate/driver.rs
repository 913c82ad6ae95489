//! Batch driver: one independent synthesis run per annotated class.
//!
//! Runs fan out across the rayon pool and are collected in scan order, so
//! the output does not depend on scheduling. A failing or panicking class
//! yields a diagnostic and no artifact; the other classes are unaffected.

use std::panic::{self, AssertUnwindSafe};

use rayon::prelude::*;

use super::assemble::{GeneratedArtifact, assemble_artifact, assemble_interface};
use super::diagnostics::{Diagnostic, DiagnosticCollector};
use super::filter::MemberFilter;
use super::inherit::resolve_interfaces;
use super::scan::{WorkItem, scan_units, split_repeated};
use super::transform::MemberTransformer;
use crate::base::GeneratorConfig;
use crate::error::GenerateError;
use crate::hir::TypeProvider;
use crate::syntax::CompilationUnit;

/// A successful synthesis together with the non-fatal problems met on the way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Synthesized {
    pub artifact: GeneratedArtifact,
    /// Base references left out of inheritance resolution.
    pub unresolved: Vec<GenerateError>,
}

/// Synthesize the interface for one class.
pub fn synthesize(
    item: &WorkItem<'_>,
    provider: &dyn TypeProvider,
    config: &GeneratorConfig,
) -> Result<Synthesized, GenerateError> {
    let class = item.class;
    let marker = item
        .marker(config)
        .ok_or_else(|| GenerateError::missing_marker(class.name.as_str(), config.interface_marker.as_str()))?;

    let resolution = resolve_interfaces(class, provider);
    let filter = MemberFilter::new(config, Some(marker), &resolution.inherited_names);
    let selected = filter.select(&class.members);
    let members = MemberTransformer::new(config, &class.name).transform_all(&selected)?;

    let decl = assemble_interface(class, members, &resolution);
    tracing::debug!(
        "[GENERATE] {} -> {} ({} members, {} bases)",
        class.qualified_name(),
        decl.name,
        decl.members.len(),
        decl.bases.len()
    );
    Ok(Synthesized {
        artifact: assemble_artifact(&decl, item.usings, config),
        unresolved: resolution.unresolved,
    })
}

/// Run [`synthesize`] with panic isolation, reporting problems to `sink`.
pub fn generate_class(
    item: &WorkItem<'_>,
    provider: &dyn TypeProvider,
    config: &GeneratorConfig,
    sink: &DiagnosticCollector,
) -> Option<GeneratedArtifact> {
    let location = item.class.location.as_ref();
    let result = panic::catch_unwind(AssertUnwindSafe(|| synthesize(item, provider, config)))
        .unwrap_or_else(|payload| {
            Err(GenerateError::synthesis(
                item.class.name.as_str(),
                panic_message(payload.as_ref()),
            ))
        });

    match result {
        Ok(synthesized) => {
            for warning in &synthesized.unresolved {
                sink.report(warning, location);
            }
            Some(synthesized.artifact)
        }
        Err(error) => {
            tracing::warn!("[GENERATE] {}", error);
            sink.report(&error, location);
            None
        }
    }
}

/// Report a class whose qualified name an earlier work item already claimed.
pub fn reject_repeated(item: &WorkItem<'_>, sink: &DiagnosticCollector) {
    let error = GenerateError::synthesis(
        item.class.name.as_str(),
        format!(
            "'{}' is declared again in '{}'; partial declarations must be merged before generation",
            item.class.qualified_name(),
            item.path
        ),
    );
    tracing::warn!("[GENERATE] {}", error);
    sink.report(&error, item.class.location.as_ref());
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic during synthesis".to_string()
    }
}

/// Result of one batch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GeneratorOutput {
    /// Generated files, in scan order.
    pub artifacts: Vec<GeneratedArtifact>,
    pub diagnostics: Vec<Diagnostic>,
    /// Annotated classes found.
    pub classes_scanned: usize,
    /// Classes that produced no artifact.
    pub classes_failed: usize,
}

impl GeneratorOutput {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// The artifact registered under `hint_name`.
    pub fn artifact(&self, hint_name: &str) -> Option<&GeneratedArtifact> {
        self.artifacts.iter().find(|a| a.hint_name == hint_name)
    }

    /// The artifact for interface `name`, first match.
    pub fn interface(&self, name: &str) -> Option<&GeneratedArtifact> {
        self.artifacts.iter().find(|a| a.interface_name == name)
    }
}

/// Synthesizes interfaces for every annotated class of a batch.
#[derive(Clone, Debug, Default)]
pub struct InterfaceGenerator {
    config: GeneratorConfig,
}

impl InterfaceGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate one artifact per annotated class of `units`.
    pub fn generate(&self, units: &[CompilationUnit], provider: &dyn TypeProvider) -> GeneratorOutput {
        let (items, repeated) = split_repeated(scan_units(units, &self.config));
        let sink = DiagnosticCollector::new();
        for item in &repeated {
            reject_repeated(item, &sink);
        }

        let results: Vec<Option<GeneratedArtifact>> = items
            .par_iter()
            .map(|item| generate_class(item, provider, &self.config, &sink))
            .collect();

        let classes_scanned = items.len() + repeated.len();
        let artifacts: Vec<GeneratedArtifact> = results.into_iter().flatten().collect();
        let classes_failed = classes_scanned - artifacts.len();

        tracing::info!(
            "[GENERATE] {} classes, {} interfaces, {} failed",
            classes_scanned,
            artifacts.len(),
            classes_failed
        );
        GeneratorOutput {
            artifacts,
            diagnostics: sink.finish(),
            classes_scanned,
            classes_failed,
        }
    }
}

/// Generate with the default configuration.
pub fn generate(units: &[CompilationUnit], provider: &dyn TypeProvider) -> GeneratorOutput {
    InterfaceGenerator::default().generate(units, provider)
}
