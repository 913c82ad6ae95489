//! Helpers for inspecting generated artifacts.

use ifacegen::generate::{GeneratedArtifact, GeneratorOutput, InterfaceGenerator};
use ifacegen::syntax::CompilationUnit;
use ifacegen::{GeneratorConfig, TypeProvider};

use super::fixtures::SYMBOLS;

/// Run the generator over `units` against the shared symbol table.
pub fn run(units: &[CompilationUnit]) -> GeneratorOutput {
    run_with(units, &SYMBOLS.table)
}

/// Run the generator over `units` against `provider`.
pub fn run_with(units: &[CompilationUnit], provider: &dyn TypeProvider) -> GeneratorOutput {
    InterfaceGenerator::new(GeneratorConfig::default()).generate(units, provider)
}

/// Generate `unit` and return the single artifact.
pub fn single_artifact(unit: CompilationUnit) -> GeneratedArtifact {
    let output = run(&[unit]);
    assert!(
        output.diagnostics.iter().all(|d| !d.is_error()),
        "Unexpected diagnostics: {:?}",
        output.diagnostics
    );
    assert_eq!(output.artifacts.len(), 1, "Expected exactly one artifact");
    output.artifacts.into_iter().next().unwrap()
}

/// The member lines of the interface body, trimmed, comments skipped.
pub fn member_lines(artifact: &GeneratedArtifact) -> Vec<String> {
    let lines: Vec<&str> = artifact.text.lines().map(str::trim).collect();
    let start = lines
        .iter()
        .position(|l| l.contains(" interface "))
        .expect("interface header");
    lines[start + 2..]
        .iter()
        .take_while(|l| **l != "}")
        .filter(|l| !l.starts_with("//"))
        .map(|l| l.to_string())
        .collect()
}

/// The interface header line (`public partial interface IFoo : IBar`).
pub fn header_line(artifact: &GeneratedArtifact) -> String {
    artifact
        .text
        .lines()
        .map(str::trim)
        .find(|l| l.contains(" interface "))
        .expect("interface header")
        .to_string()
}
