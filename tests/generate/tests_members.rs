//! Member selection and rewriting.

use rstest::rstest;

use crate::helpers::fixtures::*;
use crate::helpers::output::*;
use ifacegen::syntax::{
    Accessor, Annotation, Body, Field, Member, Method, Modifier, Modifiers, Property,
};

fn lines_for(members: Vec<Member>) -> Vec<String> {
    let class = marked_class("Class").with_members(members);
    member_lines(&single_artifact(unit_with(class)))
}

// =============================================================================
// ACCESSOR VISIBILITY
// =============================================================================

#[rstest]
#[case(&[], &[], "string Name { get; set; }")]
#[case(&[], &[Modifier::Private], "string Name { get; }")]
#[case(&[], &[Modifier::Protected], "string Name { get; }")]
#[case(&[], &[Modifier::Internal], "string Name { get; }")]
#[case(&[], &[Modifier::Protected, Modifier::Internal], "string Name { get; }")]
#[case(&[], &[Modifier::File], "string Name { get; }")]
#[case(&[Modifier::Private], &[], "string Name { set; }")]
fn test_accessor_visibility(
    #[case] get_modifiers: &[Modifier],
    #[case] set_modifiers: &[Modifier],
    #[case] expected: &str,
) {
    let property = Property::new("string")
        .with_accessor(Accessor::get().with_modifiers(get_modifiers.iter().copied().collect::<Modifiers>()))
        .with_accessor(Accessor::set().with_modifiers(set_modifiers.iter().copied().collect::<Modifiers>()));
    let lines = lines_for(vec![Member::new("Name", property).public()]);
    assert_eq!(lines, vec![expected.to_string()]);
}

#[test]
fn test_init_accessor_kept() {
    let property = Property::new("int")
        .with_accessor(Accessor::get())
        .with_accessor(Accessor::init());
    let lines = lines_for(vec![Member::new("Id", property).public()]);
    assert_eq!(lines, vec!["int Id { get; init; }"]);
}

#[test]
fn test_accessor_bodies_stripped() {
    let property = Property::new("string")
        .with_accessor(Accessor::get().with_body(Body::Expression("_name".into())))
        .with_accessor(Accessor::set().with_body(Body::Block("{ _name = value; }".into())));
    let lines = lines_for(vec![Member::new("Name", property).public()]);
    assert_eq!(lines, vec!["string Name { get; set; }"]);
}

#[test]
fn test_property_with_no_public_accessor_omitted() {
    let property = Property::new("int")
        .with_accessor(Accessor::get().with_modifiers([Modifier::Private]))
        .with_accessor(Accessor::set().with_modifiers([Modifier::Private]));
    let lines = lines_for(vec![
        Member::new("Hidden", property).public(),
        public_method("Visible", "void"),
    ]);
    assert_eq!(lines, vec!["void Visible();"]);
}

// =============================================================================
// SELECTION
// =============================================================================

#[test]
fn test_order_preserved() {
    let lines = lines_for(vec![
        public_method("Zeta", "void"),
        public_property("Alpha", "int"),
        public_method("Mid", "string"),
    ]);
    assert_eq!(lines, vec!["void Zeta();", "int Alpha { get; set; }", "string Mid();"]);
}

#[test]
fn test_non_public_static_and_implicit_members_skipped() {
    let lines = lines_for(vec![
        Member::new("Private", Method::new("void")).with_modifiers([Modifier::Private]),
        Member::new("Protected", Method::new("void")).with_modifiers([Modifier::Protected]),
        Member::new("Internal", Method::new("void")).with_modifiers([Modifier::Internal]),
        Member::new("Unspecified", Method::new("void")),
        Member::new("Create", Method::new("Class")).with_modifiers([Modifier::Public, Modifier::Static]),
        Member::new("EqualityContract", Property::get_only("Type")).public().implicit(),
        public_override(public_method("ToString", "string")),
        Member::new("_field", Field::new("int")).public(),
        public_method("Kept", "void"),
    ]);
    assert_eq!(lines, vec!["void Kept();"]);
}

#[test]
fn test_async_and_virtual_modifiers_dropped() {
    let lines = lines_for(vec![
        Member::new("LoadAsync", Method::new("Task<int>")).with_modifiers([Modifier::Public, Modifier::Async]),
        Member::new("Describe", Method::new("string")).with_modifiers([Modifier::Public, Modifier::Virtual]),
        Member::new("Title", Property::auto("string")).with_modifiers([Modifier::Public, Modifier::Required]),
    ]);
    assert_eq!(
        lines,
        vec!["Task<int> LoadAsync();", "string Describe();", "string Title { get; set; }"]
    );
}

#[test]
fn test_expression_bodied_method() {
    let method = Method::new("string").with_body(Body::Expression("\"foo\"".into()));
    let lines = lines_for(vec![Member::new("Get", method).public()]);
    assert_eq!(lines, vec!["string Get();"]);
}

// =============================================================================
// OBSERVABLE FIELDS
// =============================================================================

#[rstest]
#[case("_userName", "UserName")]
#[case("userName", "UserName")]
#[case("_name", "Name")]
#[case("name", "Name")]
#[case("_isHTTPEnabled", "IsHTTPEnabled")]
#[case("_x", "X")]
fn test_observable_field_naming(#[case] field: &str, #[case] property: &str) {
    let member = Member::new(field, Field::new("string?"))
        .with_modifiers([Modifier::Private])
        .with_annotation(Annotation::new("ObservableProperty"));
    let lines = lines_for(vec![member]);
    assert_eq!(lines, vec![format!("string? {property} {{ get; set; }}")]);
}

#[test]
fn test_observable_field_with_qualified_marker() {
    let member = Member::new("_count", Field::new("int"))
        .with_annotation(Annotation::new("CommunityToolkit.Mvvm.ComponentModel.ObservablePropertyAttribute"));
    let lines = lines_for(vec![member]);
    assert_eq!(lines, vec!["int Count { get; set; }"]);
}

#[test]
fn test_observable_field_keeps_position() {
    let lines = lines_for(vec![
        public_method("First", "void"),
        Member::new("_middle", Field::new("int")).with_annotation(Annotation::new("ObservableProperty")),
        public_method("Last", "void"),
    ]);
    assert_eq!(lines, vec!["void First();", "int Middle { get; set; }", "void Last();"]);
}

#[test]
fn test_invalid_observable_name_fails_class() {
    let class = marked_class("Broken").with_member(
        Member::new("_", Field::new("int")).with_annotation(Annotation::new("ObservableProperty")),
    );
    let output = run(&[unit_with(class)]);
    assert!(output.artifacts.is_empty());
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(&*output.diagnostics[0].code, "MI001");
}
