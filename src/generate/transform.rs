//! MemberTransformer: rewrite selected class members as interface members.
//!
//! Every emitted member is signature-only: modifiers, bodies, expression
//! bodies and initializers are dropped. Observable fields and command
//! methods expand into synthesized properties.

use std::sync::Arc;

use smol_str::SmolStr;

use super::filter::{Eligibility, Selected};
use crate::base::GeneratorConfig;
use crate::base::names::is_valid_identifier;
use crate::error::GenerateError;
use crate::syntax::{
    AccessorKind, InterfaceMember, Member, MemberKind, Method, MethodSignature, Property,
    PropertySignature, TypeRef,
};

/// Rewrites the selected members of one class.
#[derive(Clone, Copy, Debug)]
pub struct MemberTransformer<'a> {
    config: &'a GeneratorConfig,
    class: &'a str,
}

impl<'a> MemberTransformer<'a> {
    pub fn new(config: &'a GeneratorConfig, class: &'a str) -> Self {
        Self { config, class }
    }

    /// Transform one selected member.
    ///
    /// Returns `Ok(None)` for a property that has no accessor left once the
    /// non-public ones are removed.
    pub fn transform(&self, selected: &Selected<'_>) -> Result<Option<InterfaceMember>, GenerateError> {
        if !is_valid_identifier(&selected.interface_name) {
            return Err(GenerateError::synthesis(
                self.class,
                format!(
                    "'{}' derives the invalid identifier '{}'",
                    selected.member.name, selected.interface_name
                ),
            ));
        }

        let member = selected.member;
        let name = selected.interface_name.clone();
        let transformed = match (selected.eligibility, &member.kind) {
            (Eligibility::Public, MemberKind::Method(method)) => {
                Some(InterfaceMember::Method(method_signature(name, method)))
            }
            (Eligibility::Public, MemberKind::Property(property)) => {
                property_signature(name, property).map(InterfaceMember::Property)
            }
            (Eligibility::ObservableField, MemberKind::Field(field)) => {
                Some(InterfaceMember::Property(PropertySignature {
                    name,
                    ty: field.ty.clone(),
                    accessors: vec![AccessorKind::Get, AccessorKind::Set],
                    comment: None,
                }))
            }
            (Eligibility::Command, MemberKind::Method(method)) => Some(InterfaceMember::Property(
                self.command_property(name, member, method),
            )),
            (eligibility, kind) => {
                return Err(GenerateError::synthesis(
                    self.class,
                    format!(
                        "{} '{}' cannot be emitted as {:?}",
                        kind.display(),
                        member.name,
                        eligibility
                    ),
                ));
            }
        };

        if transformed.is_none() {
            tracing::debug!(
                "[TRANSFORM] {}: property '{}' has no public accessor, dropped",
                self.class,
                member.name
            );
        }
        Ok(transformed)
    }

    /// Transform every selected member, keeping order.
    pub fn transform_all(&self, selected: &[Selected<'_>]) -> Result<Vec<InterfaceMember>, GenerateError> {
        let mut members = Vec::with_capacity(selected.len());
        for item in selected {
            members.extend(self.transform(item)?);
        }
        Ok(members)
    }

    fn command_property(&self, name: SmolStr, member: &Member, method: &Method) -> PropertySignature {
        let is_async = member.modifiers.is_async() || method.return_type.is_async_unit();
        let mut ty = self.config.command_type(is_async);
        if !method.params.is_empty() {
            let args: Vec<&str> = method.params.iter().map(|p| p.ty.as_str()).collect();
            ty = format!("{}<{}>", ty, args.join(", "));
        }
        let comment = format!(
            "This property was generated because of the {} attribute applied to the '{}' method.",
            self.config.command_marker, member.name
        );
        PropertySignature {
            name,
            ty: TypeRef::new(ty),
            accessors: vec![AccessorKind::Get],
            comment: Some(Arc::from(comment)),
        }
    }
}

fn method_signature(name: SmolStr, method: &Method) -> MethodSignature {
    MethodSignature {
        name,
        return_type: method.return_type.clone(),
        type_params: method.type_params.clone(),
        params: method.params.clone(),
        constraints: method.constraints.clone(),
    }
}

fn property_signature(name: SmolStr, property: &Property) -> Option<PropertySignature> {
    let accessors: Vec<AccessorKind> = if property.expression_body.is_some() {
        vec![AccessorKind::Get]
    } else {
        property
            .accessors
            .iter()
            .filter(|accessor| accessor.is_publicly_reachable())
            .map(|accessor| accessor.kind)
            .collect()
    };
    if accessors.is_empty() {
        return None;
    }
    Some(PropertySignature {
        name,
        ty: property.ty.clone(),
        accessors,
        comment: None,
    })
}
