//! Declaration builders and a shared symbol table.
//!
//! The table models the sample project used throughout the suite:
//!
//! ```text
//! MakeInterface.Tests
//!   IBaseClass            interface, 4 members
//!   BaseClass : IBaseClass
//!   DerivedBase : BaseClass
//!   IExtended : IBaseClass
//! MakeInterface.Tests.Models
//!   ITestModel            interface
//! System
//!   IDisposable           metadata interface
//! System.ComponentModel
//!   INotifyPropertyChanged / INotifyPropertyChanging   metadata interfaces
//! CommunityToolkit.Mvvm.ComponentModel
//!   ObservableObject      metadata class, implements both of the above
//! ```

use once_cell::sync::Lazy;
use ifacegen::base::SymbolId;
use ifacegen::hir::{MemberSymbol, MemberSymbolKind, SymbolTable, TypeKind};
use ifacegen::syntax::{
    Annotation, AnnotationValue, BaseTypeRef, ClassDecl, CompilationUnit, Member, Method,
    Modifier, Property, UsingDirective,
};

pub const TESTS_NAMESPACE: &str = "MakeInterface.Tests";
pub const MODELS_NAMESPACE: &str = "MakeInterface.Tests.Models";

pub struct Symbols {
    pub table: SymbolTable,
    pub ibase_class: SymbolId,
    pub base_class: SymbolId,
    pub derived_base: SymbolId,
    pub iextended: SymbolId,
    pub itest_model: SymbolId,
    pub idisposable: SymbolId,
    pub observable_object: SymbolId,
}

pub static SYMBOLS: Lazy<Symbols> = Lazy::new(build_symbols);

fn build_symbols() -> Symbols {
    let mut table = SymbolTable::new();

    let ibase_class = table.declare_interface(
        TESTS_NAMESPACE,
        "IBaseClass",
        vec![],
        vec![
            MemberSymbol::property("AbstractPropertyFromInterface"),
            MemberSymbol::new("get_AbstractPropertyFromInterface", MemberSymbolKind::Accessor),
            MemberSymbol::method("AbstractMethodFromInterface"),
            MemberSymbol::property("VirtualPropertyFromInterface"),
            MemberSymbol::method("VirtualMethodFromInterface"),
        ],
    ).unwrap();
    let base_class = table.declare(
        TESTS_NAMESPACE,
        "BaseClass",
        TypeKind::Class,
        vec![BaseTypeRef::resolved("IBaseClass", ibase_class)],
        vec![
            MemberSymbol::property("AbstractProperty"),
            MemberSymbol::method("VirtualMethod"),
        ],
    ).unwrap();
    let derived_base = table.declare(
        TESTS_NAMESPACE,
        "DerivedBase",
        TypeKind::Class,
        vec![BaseTypeRef::resolved("BaseClass", base_class)],
        vec![],
    ).unwrap();
    let iextended = table.declare_interface(
        TESTS_NAMESPACE,
        "IExtended",
        vec![BaseTypeRef::resolved("IBaseClass", ibase_class)],
        vec![MemberSymbol::method("Extended")],
    ).unwrap();
    let itest_model = table.declare_interface(MODELS_NAMESPACE, "ITestModel", vec![], vec![]).unwrap();

    let idisposable = table.import_metadata(
        "System",
        "IDisposable",
        TypeKind::Interface,
        vec![],
        vec![MemberSymbol::method("Dispose")],
    ).unwrap();
    let changed = table.import_metadata(
        "System.ComponentModel",
        "INotifyPropertyChanged",
        TypeKind::Interface,
        vec![],
        vec![MemberSymbol::new("PropertyChanged", MemberSymbolKind::Event)],
    ).unwrap();
    let changing = table.import_metadata(
        "System.ComponentModel",
        "INotifyPropertyChanging",
        TypeKind::Interface,
        vec![],
        vec![MemberSymbol::new("PropertyChanging", MemberSymbolKind::Event)],
    ).unwrap();
    let observable_object = table.import_metadata(
        "CommunityToolkit.Mvvm.ComponentModel",
        "ObservableObject",
        TypeKind::Class,
        vec![changed, changing],
        vec![MemberSymbol::method("OnPropertyChanged")],
    ).unwrap();

    Symbols {
        table,
        ibase_class,
        base_class,
        derived_base,
        iextended,
        itest_model,
        idisposable,
        observable_object,
    }
}

/// A class in the tests namespace carrying the class-level marker.
pub fn marked_class(name: &str) -> ClassDecl {
    ClassDecl::new(name)
        .in_namespace(TESTS_NAMESPACE)
        .with_annotation(Annotation::new("GenerateInterface"))
}

/// A class whose marker excludes `names`.
pub fn marked_class_excluding(name: &str, names: &[&str]) -> ClassDecl {
    ClassDecl::new(name).in_namespace(TESTS_NAMESPACE).with_annotation(
        Annotation::new("GenerateInterface").with_named_arg(
            "Exclude",
            AnnotationValue::StringArray(names.iter().map(|n| (*n).into()).collect()),
        ),
    )
}

/// `public {ret} {name}() { }`
pub fn public_method(name: &str, ret: &str) -> Member {
    Member::new(name, Method::new(ret)).public()
}

/// `public {ty} {name} { get; set; }`
pub fn public_property(name: &str, ty: &str) -> Member {
    Member::new(name, Property::auto(ty)).public()
}

/// `public override ...`
pub fn public_override(member: Member) -> Member {
    member.with_modifiers([Modifier::Public, Modifier::Override])
}

/// A single-class unit with the sample project's usings.
pub fn unit_with(class: ClassDecl) -> CompilationUnit {
    CompilationUnit::new("Class1.cs")
        .with_using(UsingDirective::new(MODELS_NAMESPACE))
        .with_using(UsingDirective::new("MakeInterface"))
        .with_using(UsingDirective::new("System.Collections.Generic"))
        .with_class(class)
}
