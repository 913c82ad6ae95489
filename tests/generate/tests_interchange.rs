//! Host hand-off through JSON and YAML.
#![cfg(feature = "interchange")]

use ifacegen::generate::InterfaceGenerator;
use ifacegen::hir::SymbolTable;
use ifacegen::syntax::CompilationUnit;
use ifacegen::{GenerateError, GeneratorConfig};

const SYMBOLS_JSON: &str = r#"[
  {
    "id": 0,
    "name": "IBase",
    "qualified_name": "Demo.IBase",
    "kind": "interface",
    "members": [{ "name": "Method1", "kind": "method" }],
    "origin": "source",
    "bases": []
  },
  {
    "id": 1,
    "name": "INotifyPropertyChanged",
    "qualified_name": "System.ComponentModel.INotifyPropertyChanged",
    "kind": "interface",
    "members": [{ "name": "PropertyChanged", "kind": "event" }],
    "origin": "metadata",
    "all_interfaces": []
  }
]"#;

const UNIT_JSON: &str = r#"{
  "path": "Class1.cs",
  "usings": [{ "target": "System" }],
  "classes": [
    {
      "name": "Class1",
      "namespace": "Demo",
      "annotations": [
        { "name": "GenerateInterface", "args": [{ "name": "Exclude", "value": { "string_array": ["Skip"] } }] }
      ],
      "bases": [{ "ty": "IBase", "symbol": 0 }],
      "members": [
        { "name": "Method1", "modifiers": ["public"], "kind": "method", "return_type": "void" },
        { "name": "Method2", "modifiers": ["public"], "kind": "method", "return_type": "void",
          "params": [{ "name": "data", "ty": "string", "modifier": "out" }] },
        { "name": "Skip", "modifiers": ["public"], "kind": "method", "return_type": "void" },
        { "name": "_title", "modifiers": ["private"], "kind": "field", "ty": "string?",
          "annotations": [{ "name": "ObservableProperty" }] }
      ]
    }
  ]
}"#;

#[test]
fn test_generate_from_json_hand_off() {
    let table = SymbolTable::from_json(SYMBOLS_JSON).unwrap();
    let unit = CompilationUnit::from_json(UNIT_JSON).unwrap();
    let output = InterfaceGenerator::default().generate(&[unit], &table);

    let text = &output.artifacts[0].text;
    assert!(text.contains("public partial interface IClass1 : IBase"));
    assert!(text.contains("void Method2(out string data);"));
    assert!(text.contains("string? Title { get; set; }"));
    assert!(!text.contains("Method1"));
    assert!(!text.contains("Skip"));
}

#[test]
fn test_config_from_yaml_keeps_defaults() {
    let config = GeneratorConfig::from_yaml("command_namespace: Toolkit.Input\nemit_header: false\n").unwrap();
    assert_eq!(&*config.command_namespace, "Toolkit.Input");
    assert!(!config.emit_header);
    assert_eq!(config.interface_marker, "GenerateInterface");
}

#[test]
fn test_sparse_symbol_ids_rejected() {
    let json = r#"[{ "id": 3, "name": "IBase", "qualified_name": "IBase", "kind": "interface", "origin": "source", "bases": [] }]"#;
    assert!(matches!(SymbolTable::from_json(json), Err(GenerateError::Interchange(_))));
}

#[test]
fn test_repeated_qualified_name_rejected() {
    let json = r#"[
        { "id": 0, "name": "IBase", "qualified_name": "Demo.IBase", "kind": "interface", "origin": "source", "bases": [] },
        { "id": 1, "name": "IBase", "qualified_name": "Demo.IBase", "kind": "interface", "origin": "source", "bases": [] }
    ]"#;
    assert!(matches!(SymbolTable::from_json(json), Err(GenerateError::Interchange(_))));
}

#[test]
fn test_malformed_unit_rejected() {
    assert!(matches!(
        CompilationUnit::from_json("{ \"classes\": 3 }"),
        Err(GenerateError::Interchange(_))
    ));
}
