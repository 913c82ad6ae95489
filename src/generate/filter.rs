//! MemberFilter: decide which class members reach the interface.
//!
//! Every member is checked in declaration order and the survivors keep that
//! order. A member is rejected, first match wins, when it is
//!
//! 1. compiler-synthesized, `static` or `override`;
//! 2. named in the class marker's exclusion list (by its source name or
//!    by the name it would carry on the interface);
//! 3. already declared by an inherited interface;
//! 4. neither public nor carrying one of the member-level markers.
//!
//! Plain fields never qualify, public or not.

use indexmap::IndexSet;
use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::base::GeneratorConfig;
use crate::base::names::{command_property_name, observable_property_name};
use crate::syntax::{Annotation, AnnotationValue, Member, MemberKind};

/// Why a member was selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Eligibility {
    /// A public method or property.
    Public,
    /// A field carrying the observable-field marker.
    ObservableField,
    /// A method carrying the command marker.
    Command,
}

/// Why a member was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Exclusion {
    Implicit,
    Static,
    Override,
    /// Listed in the class marker's exclusion argument.
    Listed,
    /// Declared by an inherited interface already.
    Inherited,
    NotPublic,
    /// A field without the observable-field marker.
    PlainField,
}

impl Exclusion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Exclusion::Implicit => "implicit",
            Exclusion::Static => "static",
            Exclusion::Override => "override",
            Exclusion::Listed => "excluded by marker",
            Exclusion::Inherited => "declared by inherited interface",
            Exclusion::NotPublic => "not public",
            Exclusion::PlainField => "plain field",
        }
    }
}

/// A member that passed the filter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selected<'a> {
    pub member: &'a Member,
    pub eligibility: Eligibility,
    /// The name the member will carry on the interface.
    pub interface_name: SmolStr,
}

/// Names listed in the class marker's exclusion argument.
///
/// Accepts the configured named argument (`Exclude = new[] { ... }`) and
/// positional string or string-array arguments.
pub fn exclusion_list<'a>(marker: &'a Annotation, config: &GeneratorConfig) -> FxHashSet<&'a str> {
    let named = marker
        .named_arg(&config.exclude_argument)
        .into_iter()
        .flat_map(AnnotationValue::strings);
    let positional = marker
        .positional_args()
        .filter(|value| {
            matches!(
                value,
                AnnotationValue::String(_) | AnnotationValue::StringArray(_)
            )
        })
        .flat_map(AnnotationValue::strings);
    named.chain(positional).collect()
}

/// Per-class member filter.
#[derive(Debug)]
pub struct MemberFilter<'a> {
    config: &'a GeneratorConfig,
    excluded: FxHashSet<&'a str>,
    inherited: &'a IndexSet<SmolStr>,
}

impl<'a> MemberFilter<'a> {
    pub fn new(
        config: &'a GeneratorConfig,
        marker: Option<&'a Annotation>,
        inherited: &'a IndexSet<SmolStr>,
    ) -> Self {
        let excluded = marker
            .map(|marker| exclusion_list(marker, config))
            .unwrap_or_default();
        Self {
            config,
            excluded,
            inherited,
        }
    }

    /// Check one member.
    pub fn check(&self, member: &'a Member) -> Result<Selected<'a>, Exclusion> {
        if member.implicit {
            return Err(Exclusion::Implicit);
        }
        if member.modifiers.is_static() {
            return Err(Exclusion::Static);
        }
        if member.modifiers.is_override() {
            return Err(Exclusion::Override);
        }

        let candidate = self.candidate(member);
        let interface_name = match candidate {
            Some(Eligibility::ObservableField) => SmolStr::new(observable_property_name(&member.name)),
            Some(Eligibility::Command) => SmolStr::new(command_property_name(&member.name)),
            Some(Eligibility::Public) | None => member.name.clone(),
        };

        if self.excluded.contains(member.name.as_str())
            || self.excluded.contains(interface_name.as_str())
        {
            return Err(Exclusion::Listed);
        }
        if self.inherited.contains(interface_name.as_str()) {
            return Err(Exclusion::Inherited);
        }

        match candidate {
            Some(eligibility) => Ok(Selected {
                member,
                eligibility,
                interface_name,
            }),
            None if matches!(member.kind, MemberKind::Field(_)) => Err(Exclusion::PlainField),
            None => Err(Exclusion::NotPublic),
        }
    }

    /// Filter all members, keeping declaration order.
    pub fn select(&self, members: &'a [Member]) -> Vec<Selected<'a>> {
        members
            .iter()
            .filter_map(|member| match self.check(member) {
                Ok(selected) => Some(selected),
                Err(reason) => {
                    tracing::trace!("[FILTER] skipping '{}': {}", member.name, reason.as_str());
                    None
                }
            })
            .collect()
    }

    fn candidate(&self, member: &Member) -> Option<Eligibility> {
        match &member.kind {
            MemberKind::Field(_) if member.has_annotation(&self.config.observable_marker) => {
                Some(Eligibility::ObservableField)
            }
            MemberKind::Field(_) => None,
            MemberKind::Method(_) if member.has_annotation(&self.config.command_marker) => {
                Some(Eligibility::Command)
            }
            MemberKind::Method(_) | MemberKind::Property(_) if member.modifiers.is_public() => {
                Some(Eligibility::Public)
            }
            _ => None,
        }
    }
}
