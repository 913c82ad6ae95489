//! Domain constants: marker names, well-known type names and output settings.

/// Class-level marker requesting interface synthesis.
pub const GENERATE_INTERFACE_MARKER: &str = "GenerateInterface";

/// Field-level marker requesting a synthesized property wrapper.
pub const OBSERVABLE_FIELD_MARKER: &str = "ObservableProperty";

/// Method-level marker requesting a synthesized command property.
pub const COMMAND_MARKER: &str = "RelayCommand";

/// Conventional suffix of marker type names (`GenerateInterfaceAttribute`).
pub const ATTRIBUTE_SUFFIX: &str = "Attribute";

/// Named argument of the class marker carrying the exclusion list.
pub const EXCLUDE_ARGUMENT: &str = "Exclude";

/// Namespace prefix of the generated command property types.
pub const COMMAND_NAMESPACE: &str = "global::CommunityToolkit.Mvvm.Input";

/// Synchronous command interface name.
pub const SYNC_COMMAND_TYPE: &str = "IRelayCommand";

/// Asynchronous command interface name.
pub const ASYNC_COMMAND_TYPE: &str = "IAsyncRelayCommand";

/// Simple name of the asynchronous unit-of-work type.
pub const ASYNC_UNIT_TYPE: &str = "Task";

/// Namespace that declares the asynchronous unit-of-work type.
pub const ASYNC_UNIT_NAMESPACE: &str = "System.Threading.Tasks";

/// Suffix stripped from command method names.
pub const ASYNC_METHOD_SUFFIX: &str = "Async";

/// Suffix appended to command property names.
pub const COMMAND_SUFFIX: &str = "Command";

/// Prefix of every synthesized interface identifier.
pub const INTERFACE_PREFIX: &str = "I";

/// Suffix of every generated artifact hint name.
pub const GENERATED_SUFFIX: &str = ".g.cs";

/// First line of every generated artifact.
pub const AUTO_GENERATED_HEADER: &str = "// <auto-generated/>";

/// Indentation unit used by the renderer.
pub const INDENT: &str = "    ";
