//! Identifier derivation for synthesized members.
//!
//! Pure, stateless string transforms:
//! - [`strip_leading_underscore`] - `_fooBar` -> `fooBar`
//! - [`to_pascal_case`] - `fooBar` -> `FooBar`
//! - [`strip_async_suffix`] - `SaveAsync` -> `Save`
//!
//! plus the composite names used by the generator and an identifier check
//! based on Unicode Standard Annex #31.

use super::constants::{ASYNC_METHOD_SUFFIX, COMMAND_SUFFIX, INTERFACE_PREFIX};

/// Strip one leading underscore, if present.
///
/// ```
/// use ifacegen::base::names::strip_leading_underscore;
///
/// assert_eq!(strip_leading_underscore("_name"), "name");
/// assert_eq!(strip_leading_underscore("__name"), "_name");
/// assert_eq!(strip_leading_underscore("name"), "name");
/// ```
pub fn strip_leading_underscore(name: &str) -> &str {
    name.strip_prefix('_').unwrap_or(name)
}

/// Split an identifier into words at uppercase-letter boundaries.
///
/// The first character never starts a new boundary, so no leading empty
/// segment is produced: `fooBarBaz` -> `["foo", "Bar", "Baz"]`.
pub fn split_words(name: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = 0;

    for (idx, c) in name.char_indices() {
        if idx != 0 && c.is_ascii_uppercase() {
            words.push(&name[start..idx]);
            start = idx;
        }
    }
    if start < name.len() {
        words.push(&name[start..]);
    }

    words
}

/// Convert a camel-case identifier to Pascal case.
///
/// ```
/// use ifacegen::base::names::to_pascal_case;
///
/// assert_eq!(to_pascal_case("fooBar"), "FooBar");
/// assert_eq!(to_pascal_case("FooBar"), "FooBar");
/// assert_eq!(to_pascal_case("x"), "X");
/// ```
pub fn to_pascal_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for word in split_words(name) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Strip a trailing `Async` suffix, compared case-insensitively.
pub fn strip_async_suffix(name: &str) -> &str {
    let suffix_len = ASYNC_METHOD_SUFFIX.len();
    if name.len() < suffix_len {
        return name;
    }

    let split = name.len() - suffix_len;
    if !name.is_char_boundary(split) {
        return name;
    }

    let (head, tail) = name.split_at(split);
    if tail.eq_ignore_ascii_case(ASYNC_METHOD_SUFFIX) {
        head
    } else {
        name
    }
}

/// Interface identifier synthesized for a class: `Class1` -> `IClass1`.
pub fn interface_name(class_name: &str) -> String {
    format!("{INTERFACE_PREFIX}{class_name}")
}

/// Property name synthesized for an observable field: `_fooBar` -> `FooBar`.
pub fn observable_property_name(field_name: &str) -> String {
    to_pascal_case(strip_leading_underscore(field_name))
}

/// Property name synthesized for a command method: `SaveAsync` -> `SaveCommand`.
pub fn command_property_name(method_name: &str) -> String {
    format!("{}{COMMAND_SUFFIX}", strip_async_suffix(method_name))
}

/// Check whether `name` is a valid identifier.
///
/// A single leading `@` (verbatim identifier) is accepted.
pub fn is_valid_identifier(name: &str) -> bool {
    let name = name.strip_prefix('@').unwrap_or(name);
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || unicode_ident::is_xid_start(first) => {
            chars.all(unicode_ident::is_xid_continue)
        }
        _ => false,
    }
}
