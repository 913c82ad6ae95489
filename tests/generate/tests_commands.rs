//! Command properties synthesized from command methods.

use rstest::rstest;

use crate::helpers::fixtures::*;
use crate::helpers::output::*;
use ifacegen::syntax::{Annotation, AnnotationValue, Member, Method, Modifier, Parameter};

const INPUT: &str = "global::CommunityToolkit.Mvvm.Input";

fn command(name: &str, method: Method, modifiers: &[Modifier]) -> Member {
    Member::new(name, method)
        .with_modifiers(modifiers.iter().copied().collect::<ifacegen::syntax::Modifiers>())
        .with_annotation(Annotation::new("RelayCommand"))
}

fn artifact_for(member: Member) -> ifacegen::GeneratedArtifact {
    single_artifact(unit_with(marked_class("ViewModel").with_member(member)))
}

#[rstest]
#[case::sync_no_args("Save", "void", &[], &[], "IRelayCommand SaveCommand")]
#[case::sync_one_arg("Open", "void", &[], &["string"], "IRelayCommand<string> OpenCommand")]
#[case::async_modifier("Load", "void", &[Modifier::Async], &[], "IAsyncRelayCommand LoadCommand")]
#[case::task_return("Refresh", "Task", &[], &[], "IAsyncRelayCommand RefreshCommand")]
#[case::generic_task("Fetch", "Task<int>", &[], &["int"], "IAsyncRelayCommand<int> FetchCommand")]
#[case::qualified_task("Sync", "System.Threading.Tasks.Task", &[], &[], "IAsyncRelayCommand SyncCommand")]
#[case::global_task("Push", "global::System.Threading.Tasks.Task<bool>", &[], &[], "IAsyncRelayCommand PushCommand")]
#[case::async_suffix("SaveAsync", "Task", &[Modifier::Private, Modifier::Async], &[], "IAsyncRelayCommand SaveCommand")]
#[case::lowercase_suffix("Loadasync", "void", &[], &[], "IRelayCommand LoadCommand")]
#[case::two_args("Move", "void", &[], &["int", "int?"], "IRelayCommand<int, int?> MoveCommand")]
#[case::value_task("Tick", "ValueTask", &[], &[], "IRelayCommand TickCommand")]
fn test_command_typing(
    #[case] name: &str,
    #[case] return_type: &str,
    #[case] modifiers: &[Modifier],
    #[case] params: &[&str],
    #[case] expected: &str,
) {
    let mut method = Method::new(return_type);
    for (i, ty) in params.iter().enumerate() {
        method = method.with_param(Parameter::new(format!("arg{i}"), *ty));
    }
    let artifact = artifact_for(command(name, method, modifiers));
    assert_eq!(
        member_lines(&artifact),
        vec![format!("{INPUT}.{expected} {{ get; }}")]
    );
}

#[test]
fn test_command_comment_precedes_property() {
    let artifact = artifact_for(command("SaveAsync", Method::new("Task"), &[Modifier::Private]));
    let lines: Vec<&str> = artifact.text.lines().map(str::trim).collect();
    let property = lines
        .iter()
        .position(|l| l.ends_with("SaveCommand { get; }"))
        .expect("command property");
    assert!(lines[property - 1].starts_with("// "));
    assert!(lines[property - 1].contains("RelayCommand attribute applied to the 'SaveAsync' method"));
}

#[test]
fn test_can_execute_argument_ignored() {
    let member = Member::new("Delete", Method::new("void")).with_annotation(
        Annotation::new("RelayCommand")
            .with_named_arg("CanExecute", AnnotationValue::NameOf("CanDelete".into())),
    );
    let artifact = artifact_for(member);
    assert_eq!(
        member_lines(&artifact),
        vec![format!("{INPUT}.IRelayCommand DeleteCommand {{ get; }}")]
    );
}

#[test]
fn test_command_namespace_configurable() {
    let config = ifacegen::GeneratorConfig::default().with_command_namespace("Toolkit.Input");
    let unit = unit_with(marked_class("ViewModel").with_member(command("Save", Method::new("void"), &[])));
    let output = ifacegen::InterfaceGenerator::new(config).generate(&[unit], &SYMBOLS.table);
    let artifact = &output.artifacts[0];
    assert_eq!(member_lines(artifact), vec!["Toolkit.Input.IRelayCommand SaveCommand { get; }"]);
}
