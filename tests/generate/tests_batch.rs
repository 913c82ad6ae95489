//! Batch behaviour: multiple units, failures, idempotence.

use crate::helpers::fixtures::*;
use crate::helpers::output::*;
use ifacegen::base::{SourceLocation, Span};
use ifacegen::generate::codes;
use ifacegen::syntax::{Annotation, ClassDecl, CompilationUnit, Field, Member, UsingDirective};

fn broken_class(name: &str) -> ClassDecl {
    marked_class(name)
        .with_member(Member::new("_", Field::new("int")).with_annotation(Annotation::new("ObservableProperty")))
        .with_location(SourceLocation::new("Broken.cs", Span::from_coords(4, 4, 4, 20)))
}

#[test]
fn test_unmarked_classes_ignored() {
    let unit = CompilationUnit::new("A.cs")
        .with_class(ClassDecl::new("Plain").in_namespace(TESTS_NAMESPACE).with_member(public_method("Run", "void")))
        .with_class(marked_class("Marked"));
    let output = run(&[unit]);
    assert_eq!(output.classes_scanned, 1);
    assert_eq!(output.artifacts.len(), 1);
    assert_eq!(output.artifacts[0].interface_name, "IMarked");
}

#[test]
fn test_qualified_and_suffixed_markers_accepted() {
    let unit = CompilationUnit::new("A.cs")
        .with_class(ClassDecl::new("A").with_annotation(Annotation::new("GenerateInterfaceAttribute")))
        .with_class(ClassDecl::new("B").with_annotation(Annotation::new("MakeInterface.GenerateInterface")))
        .with_class(ClassDecl::new("C").with_annotation(Annotation::new("global::MakeInterface.GenerateInterfaceAttribute")))
        .with_class(ClassDecl::new("D").with_annotation(Annotation::new("Generate")));
    let output = run(&[unit]);
    let names: Vec<_> = output.artifacts.iter().map(|a| a.interface_name.as_str()).collect();
    assert_eq!(names, vec!["IA", "IB", "IC"]);
}

#[test]
fn test_artifacts_follow_scan_order_across_units() {
    let units: Vec<CompilationUnit> = (0..16)
        .map(|i| {
            CompilationUnit::new(format!("Class{i}.cs"))
                .with_using(UsingDirective::new("System"))
                .with_class(marked_class(&format!("Class{i}")).with_member(public_method("Run", "void")))
        })
        .collect();
    let output = run(&units);
    let hints: Vec<String> = output.artifacts.iter().map(|a| a.hint_name.to_string()).collect();
    let expected: Vec<String> = (0..16).map(|i| format!("{TESTS_NAMESPACE}.IClass{i}.g.cs")).collect();
    assert_eq!(hints, expected);
}

#[test]
fn test_each_unit_keeps_its_usings() {
    let first = CompilationUnit::new("A.cs")
        .with_using(UsingDirective::new("System"))
        .with_class(marked_class("A"));
    let second = CompilationUnit::new("B.cs")
        .with_using(UsingDirective::alias("Json", "System.Text.Json"))
        .with_using(UsingDirective::static_import("System.Math"))
        .with_class(marked_class("B"));
    let output = run(&[first, second]);

    let a = output.interface("IA").expect("IA");
    let b = output.interface("IB").expect("IB");
    assert!(a.text.contains("using System;\n"));
    assert!(!a.text.contains("Json"));
    assert!(b.text.contains("using Json = System.Text.Json;\n"));
    assert!(b.text.contains("using static System.Math;\n"));
}

#[test]
fn test_failure_isolated_to_one_class() {
    let unit = CompilationUnit::new("Broken.cs")
        .with_class(marked_class("Before").with_member(public_method("Run", "void")))
        .with_class(broken_class("Broken"))
        .with_class(marked_class("After").with_member(public_method("Run", "void")));
    let output = run(&[unit]);

    assert_eq!(output.classes_scanned, 3);
    assert_eq!(output.classes_failed, 1);
    let names: Vec<_> = output.artifacts.iter().map(|a| a.interface_name.as_str()).collect();
    assert_eq!(names, vec!["IBefore", "IAfter"]);

    assert_eq!(output.diagnostics.len(), 1);
    let diagnostic = &output.diagnostics[0];
    assert_eq!(&*diagnostic.code, codes::SYNTHESIS_FAILURE);
    assert!(diagnostic.message.contains("Broken"));
    assert_eq!(
        diagnostic.location.as_ref().map(ToString::to_string).as_deref(),
        Some("Broken.cs:5:5")
    );
}

#[test]
fn test_generation_is_idempotent() {
    let units = vec![
        unit_with(
            marked_class("Class1")
                .with_member(public_method("Run", "void"))
                .with_member(public_property("Name", "string")),
        ),
        unit_with(marked_class("Class2").with_member(public_method("Stop", "void"))),
    ];
    let first = run(&units);
    let second = run(&units);
    assert_eq!(first, second);
}

#[test]
fn test_same_class_name_in_two_namespaces() {
    let first = CompilationUnit::new("A.cs").with_class(marked_class("Shared").in_namespace("Alpha"));
    let second = CompilationUnit::new("B.cs").with_class(marked_class("Shared").in_namespace("Beta"));
    let output = run(&[first, second]);
    let hints: Vec<_> = output.artifacts.iter().map(|a| a.hint_name.as_str()).collect();
    assert_eq!(hints, vec!["Alpha.IShared.g.cs", "Beta.IShared.g.cs"]);
}

#[test]
fn test_hint_name_independent_of_batch() {
    let alone = run(&[CompilationUnit::new("A.cs").with_class(marked_class("Shared").in_namespace("Alpha"))]);
    let together = run(&[
        CompilationUnit::new("A.cs").with_class(marked_class("Shared").in_namespace("Alpha")),
        CompilationUnit::new("B.cs").with_class(marked_class("Shared").in_namespace("Beta")),
    ]);
    assert_eq!(alone.artifacts[0].hint_name, together.artifacts[0].hint_name);
}

#[test]
fn test_repeated_class_yields_one_artifact() {
    for namespace in ["Demo", ""] {
        let units = vec![
            CompilationUnit::new("Part1.cs")
                .with_class(marked_class("Class1").in_namespace(namespace).with_member(public_method("Run", "void"))),
            CompilationUnit::new("Part2.cs")
                .with_class(marked_class("Class1").in_namespace(namespace).with_member(public_method("Stop", "void"))),
        ];
        let output = run(&units);

        let hints: Vec<_> = output.artifacts.iter().map(|a| a.hint_name.as_str()).collect();
        let expected = if namespace.is_empty() { "IClass1.g.cs" } else { "Demo.IClass1.g.cs" };
        assert_eq!(hints, vec![expected]);
        assert_eq!(output.classes_scanned, 2);
        assert_eq!(output.classes_failed, 1);

        assert_eq!(output.diagnostics.len(), 1);
        assert_eq!(&*output.diagnostics[0].code, codes::SYNTHESIS_FAILURE);
        assert!(output.diagnostics[0].message.contains("Part2.cs"));
    }
}

#[test]
fn test_header_and_nullable_can_be_disabled() {
    let config = ifacegen::GeneratorConfig::default()
        .with_header(false)
        .with_nullable_enable(false);
    let unit = CompilationUnit::new("A.cs").with_class(marked_class("A"));
    let output = ifacegen::InterfaceGenerator::new(config).generate(&[unit], &SYMBOLS.table);
    assert!(output.artifacts[0].text.starts_with("namespace MakeInterface.Tests\n"));
}
