//! Deterministic text rendering of synthesized interfaces.
//!
//! Output layout:
//!
//! ```text
//! // <auto-generated/>
//! #nullable enable
//! using System;
//!
//! namespace Demo
//! {
//!     public partial interface IClass1 : IBase
//!     {
//!         void Method1();
//!         string? Property1 { get; set; }
//!     }
//! }
//! ```
//!
//! The same declaration always renders to the same bytes.

use std::fmt::Write;

use super::interface::{InterfaceDecl, InterfaceMember, MethodSignature, PropertySignature};
use super::unit::UsingDirective;
use crate::base::GeneratorConfig;
use crate::base::constants::{AUTO_GENERATED_HEADER, INDENT};

/// Render a complete artifact: header, usings, namespace and interface.
pub fn render_artifact(
    decl: &InterfaceDecl,
    usings: &[UsingDirective],
    config: &GeneratorConfig,
) -> String {
    let mut ctx = RenderContext::new();
    ctx.render_file(decl, usings, config);
    ctx.output
}

/// Render only the interface declaration, without file context.
pub fn render_interface(decl: &InterfaceDecl) -> String {
    let mut ctx = RenderContext::new();
    ctx.render_interface(decl);
    ctx.output
}

/// Render one member as a single signature line (no indentation, no comment).
pub fn render_member(member: &InterfaceMember) -> String {
    match member {
        InterfaceMember::Method(m) => method_line(m),
        InterfaceMember::Property(p) => property_line(p),
    }
}

struct RenderContext {
    output: String,
    indent_level: usize,
}

impl RenderContext {
    fn new() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
        }
    }

    fn indent(&self) -> String {
        INDENT.repeat(self.indent_level)
    }

    fn write_line(&mut self, text: &str) {
        let indent = self.indent();
        let _ = writeln!(self.output, "{}{}", indent, text);
    }

    fn write_blank_line(&mut self) {
        let _ = writeln!(self.output);
    }

    fn render_file(
        &mut self,
        decl: &InterfaceDecl,
        usings: &[UsingDirective],
        config: &GeneratorConfig,
    ) {
        if config.emit_header {
            self.write_line(AUTO_GENERATED_HEADER);
        }
        if config.nullable_enable {
            self.write_line("#nullable enable");
        }
        for using in usings {
            self.write_line(&using.to_string());
        }
        if !self.output.is_empty() {
            self.write_blank_line();
        }

        if decl.namespace.is_empty() {
            self.render_interface(decl);
            return;
        }

        self.write_line(&format!("namespace {}", decl.namespace));
        self.write_line("{");
        self.indent_level += 1;
        self.render_interface(decl);
        self.indent_level -= 1;
        self.write_line("}");
    }

    fn render_interface(&mut self, decl: &InterfaceDecl) {
        let mut header = String::new();
        for modifier in decl.modifiers.iter() {
            let _ = write!(header, "{} ", modifier);
        }
        let _ = write!(header, "interface {}", decl.name);
        header.push_str(&type_param_list(&decl.type_params));
        if !decl.bases.is_empty() {
            let bases: Vec<&str> = decl.bases.iter().map(|b| b.as_str()).collect();
            let _ = write!(header, " : {}", bases.join(", "));
        }
        for constraint in &decl.constraints {
            let _ = write!(header, " {}", constraint);
        }
        self.write_line(&header);

        self.write_line("{");
        self.indent_level += 1;
        for member in &decl.members {
            self.render_member(member);
        }
        self.indent_level -= 1;
        self.write_line("}");
    }

    fn render_member(&mut self, member: &InterfaceMember) {
        match member {
            InterfaceMember::Method(m) => self.write_line(&method_line(m)),
            InterfaceMember::Property(p) => {
                if let Some(comment) = &p.comment {
                    self.write_line(&format!("// {}", comment));
                }
                self.write_line(&property_line(p));
            }
        }
    }
}

fn type_param_list(params: &[smol_str::SmolStr]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let names: Vec<&str> = params.iter().map(|p| p.as_str()).collect();
    format!("<{}>", names.join(", "))
}

fn method_line(m: &MethodSignature) -> String {
    let mut line = format!("{} {}", m.return_type, m.name);
    line.push_str(&type_param_list(&m.type_params));
    let params: Vec<String> = m.params.iter().map(ToString::to_string).collect();
    let _ = write!(line, "({})", params.join(", "));
    for constraint in &m.constraints {
        let _ = write!(line, " {}", constraint);
    }
    line.push(';');
    line
}

fn property_line(p: &PropertySignature) -> String {
    let mut line = format!("{} {} {{", p.ty, p.name);
    for accessor in &p.accessors {
        let _ = write!(line, " {};", accessor.keyword());
    }
    line.push_str(" }");
    line
}
