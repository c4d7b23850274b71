//! Renders a slice (a `Vec<ComponentVertex>`) back into PRISM-like source
//! text, in the program's own declaration order (§4.6).

use prism_ast::Program;
use slice_engine::SliceError;
use slice_graph::{ComponentVertex, VertexKind};
use std::io::Write;

fn find_decl<'a>(vertices: &'a [ComponentVertex], kind: VertexKind, module_name: &str, name: &str) -> Option<&'a ComponentVertex> {
    vertices
        .iter()
        .find(|v| v.kind == kind && v.module_name == module_name && v.def.contains(name))
}

fn module_is_relevant(vertices: &[ComponentVertex], module_name: &str) -> bool {
    vertices.iter().any(|v| v.module_name == module_name)
}

/// Renders `vertices` (the result of a slice, or the unsliced full vertex
/// set) as a complete PRISM-like source file.
pub fn render(vertices: &[ComponentVertex], program: &Program) -> String {
    let mut out = String::new();
    out.push_str(program.model_type.keyword());
    out.push_str("\n\n");

    for decl in &program.global_bools {
        if let Some(v) = find_decl(vertices, VertexKind::GlobalBoolDecl, prism_ast::GLOBAL_MODULE_NAME, decl.variable.name()) {
            out.push_str(&v.code);
            out.push_str(";\n");
        }
    }
    for decl in &program.global_ints {
        if let Some(v) = find_decl(vertices, VertexKind::GlobalIntDecl, prism_ast::GLOBAL_MODULE_NAME, decl.variable.name()) {
            out.push_str(&v.code);
            out.push_str(";\n");
        }
    }
    for constant in &program.constants {
        if let Some(v) = find_decl(vertices, VertexKind::ConstDecl, prism_ast::GLOBAL_MODULE_NAME, constant.variable.name()) {
            out.push_str(&v.code);
            out.push_str(";\n");
        }
    }
    for formula in &program.formulas {
        if let Some(v) = find_decl(vertices, VertexKind::FormulaDecl, prism_ast::GLOBAL_MODULE_NAME, formula.variable.name()) {
            out.push_str(&v.code);
            out.push_str(";\n");
        }
    }
    out.push('\n');

    for module in &program.modules {
        if !module_is_relevant(vertices, &module.name) {
            continue;
        }
        out.push_str("module ");
        out.push_str(&module.name);
        out.push('\n');

        for decl in module.bool_vars.iter().chain(module.int_vars.iter()) {
            if let Some(v) = find_decl(vertices, VertexKind::LocalDecl, &module.name, decl.variable.name()) {
                out.push_str("  ");
                out.push_str(&v.code);
                out.push_str(";\n");
            }
        }

        for command in &module.commands {
            let Some(guard) = vertices
                .iter()
                .find(|v| v.kind == VertexKind::Guard && v.module_name == module.name && v.identifier == command.global_index as i64)
            else {
                continue;
            };

            out.push_str("  [");
            out.push_str(command.action_label());
            out.push_str("] ");
            out.push_str(&guard.code);
            out.push_str(" -> ");

            let any_rate_survives = command.updates.iter().any(|update| {
                vertices
                    .iter()
                    .any(|v| v.kind == VertexKind::Rate && v.identifier == update.global_index as i64)
            });

            if !any_rate_survives {
                out.push_str("true;\n");
                continue;
            }

            let mut remaining = command.updates.len();
            for update in &command.updates {
                let rate = vertices
                    .iter()
                    .find(|v| v.kind == VertexKind::Rate && v.identifier == update.global_index as i64);
                match rate {
                    Some(rate) => {
                        out.push_str(&rate.code);
                        out.push(':');
                        let assignments: Vec<&ComponentVertex> = vertices
                            .iter()
                            .filter(|v| v.kind == VertexKind::Assignment && v.identifier == update.global_index as i64)
                            .collect();
                        let last = assignments.len().saturating_sub(1);
                        for (i, assignment) in assignments.iter().enumerate() {
                            out.push_str(&assignment.code);
                            if i != last {
                                out.push('&');
                            }
                        }
                    }
                    None => {
                        out.push_str(&update.likelihood.to_string());
                        out.push_str(": true");
                    }
                }
                remaining -= 1;
                if remaining == 0 {
                    out.push_str(";\n");
                } else {
                    out.push_str(" + ");
                }
            }
        }

        out.push_str("endmodule\n\n");
    }

    if program.initial.is_some() {
        if let Some(init) = vertices.iter().find(|v| v.kind == VertexKind::Init) {
            out.push_str(&init.code);
            out.push('\n');
        }
    }

    out
}

/// Renders and writes `vertices` to `writer`, flushing on every path.
pub fn write_to<W: Write>(vertices: &[ComponentVertex], program: &Program, mut writer: W) -> Result<(), SliceError> {
    let text = render(vertices, program);
    let result = writer.write_all(text.as_bytes());
    writer.flush()?;
    result?;
    Ok(())
}
