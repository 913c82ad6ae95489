//! OutputAssembler: compose the interface declaration and its artifact.

use std::sync::Arc;

use smol_str::SmolStr;

use super::inherit::Resolution;
use crate::base::GeneratorConfig;
use crate::syntax::render::render_artifact;
use crate::syntax::{ClassDecl, InterfaceDecl, InterfaceMember, UsingDirective, qualify};

/// One generated source file.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratedArtifact {
    /// File name the host registers the text under (`Demo.IClass1.g.cs`).
    pub hint_name: SmolStr,
    pub interface_name: SmolStr,
    pub namespace: Arc<str>,
    pub text: Arc<str>,
}

/// Build the interface for `class` from its transformed members and the
/// resolved base interfaces.
pub fn assemble_interface(
    class: &ClassDecl,
    members: Vec<InterfaceMember>,
    resolution: &Resolution,
) -> InterfaceDecl {
    let mut decl = InterfaceDecl::new(class.interface_name(), class.namespace.clone());
    decl.type_params = class.type_params.clone();
    decl.constraints = class.constraints.clone();
    decl.bases = resolution.interface_types();
    decl.members = members;
    decl
}

/// Render `decl` inside its namespace, preceded by the unit's usings.
pub fn assemble_artifact(
    decl: &InterfaceDecl,
    usings: &[UsingDirective],
    config: &GeneratorConfig,
) -> GeneratedArtifact {
    GeneratedArtifact {
        hint_name: hint_name(decl, config),
        interface_name: decl.name.clone(),
        namespace: decl.namespace.clone(),
        text: Arc::from(render_artifact(decl, usings, config)),
    }
}

/// The namespace-qualified interface name plus the artifact suffix.
///
/// Depends on the interface alone, so the name stays put no matter which
/// other classes share the batch.
pub fn hint_name(decl: &InterfaceDecl, config: &GeneratorConfig) -> SmolStr {
    SmolStr::new(format!(
        "{}{}",
        qualify(&decl.namespace, &decl.name),
        config.artifact_suffix
    ))
}
