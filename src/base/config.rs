//! Generator configuration.
//!
//! Every field has a default taken from [`super::constants`]; hosts override
//! individual settings with the `with_*` builders or, with the `interchange`
//! feature, load a partial configuration from JSON/YAML.

use smol_str::SmolStr;
use std::sync::Arc;

use super::constants;

/// Settings that control scanning, synthesis and rendering.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "snake_case")
)]
pub struct GeneratorConfig {
    /// Simple name of the class-level marker.
    pub interface_marker: SmolStr,
    /// Simple name of the observable field marker.
    pub observable_marker: SmolStr,
    /// Simple name of the command method marker.
    pub command_marker: SmolStr,
    /// Named argument of the class marker holding excluded member names.
    pub exclude_argument: SmolStr,
    /// Namespace prefix of the command property types.
    pub command_namespace: Arc<str>,
    /// Suffix appended to the interface name to form the artifact hint name.
    pub artifact_suffix: SmolStr,
    /// Emit the `// <auto-generated/>` header line.
    pub emit_header: bool,
    /// Emit `#nullable enable` after the header.
    pub nullable_enable: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            interface_marker: SmolStr::new_static(constants::GENERATE_INTERFACE_MARKER),
            observable_marker: SmolStr::new_static(constants::OBSERVABLE_FIELD_MARKER),
            command_marker: SmolStr::new_static(constants::COMMAND_MARKER),
            exclude_argument: SmolStr::new_static(constants::EXCLUDE_ARGUMENT),
            command_namespace: Arc::from(constants::COMMAND_NAMESPACE),
            artifact_suffix: SmolStr::new_static(constants::GENERATED_SUFFIX),
            emit_header: true,
            nullable_enable: true,
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_interface_marker(mut self, name: impl Into<SmolStr>) -> Self {
        self.interface_marker = name.into();
        self
    }

    pub fn with_observable_marker(mut self, name: impl Into<SmolStr>) -> Self {
        self.observable_marker = name.into();
        self
    }

    pub fn with_command_marker(mut self, name: impl Into<SmolStr>) -> Self {
        self.command_marker = name.into();
        self
    }

    pub fn with_exclude_argument(mut self, name: impl Into<SmolStr>) -> Self {
        self.exclude_argument = name.into();
        self
    }

    pub fn with_command_namespace(mut self, namespace: impl Into<Arc<str>>) -> Self {
        self.command_namespace = namespace.into();
        self
    }

    pub fn with_artifact_suffix(mut self, suffix: impl Into<SmolStr>) -> Self {
        self.artifact_suffix = suffix.into();
        self
    }

    pub fn with_header(mut self, emit: bool) -> Self {
        self.emit_header = emit;
        self
    }

    pub fn with_nullable_enable(mut self, enable: bool) -> Self {
        self.nullable_enable = enable;
        self
    }

    /// Fully-qualified name of the synchronous or asynchronous command type.
    pub fn command_type(&self, is_async: bool) -> String {
        let name = if is_async {
            constants::ASYNC_COMMAND_TYPE
        } else {
            constants::SYNC_COMMAND_TYPE
        };
        if self.command_namespace.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", self.command_namespace, name)
        }
    }

    /// Load a configuration from JSON. Missing keys keep their defaults.
    #[cfg(feature = "interchange")]
    pub fn from_json(text: &str) -> Result<Self, crate::error::GenerateError> {
        serde_json::from_str(text).map_err(crate::error::GenerateError::interchange)
    }

    /// Load a configuration from YAML. Missing keys keep their defaults.
    #[cfg(feature = "interchange")]
    pub fn from_yaml(text: &str) -> Result<Self, crate::error::GenerateError> {
        serde_yaml::from_str(text).map_err(crate::error::GenerateError::interchange)
    }
}
