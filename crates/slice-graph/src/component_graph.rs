//! Component Dependence Graph: vertex construction and the five edge
//! predicates (§4.2, §4.4).

use crate::vertex::{ComponentVertex, VertexKind};
use prism_ast::{GLOBAL_MODULE_NAME, Program, VarDecl};
use slice_extract::NameSet;
use std::collections::HashMap;

fn decl_def_ref(decl: &VarDecl) -> (NameSet, NameSet) {
    let mut refs = NameSet::new();
    refs.insert(decl.variable.name().to_string());
    if let Some(range) = &decl.range {
        range.low.gather_variable_names(&mut refs);
        range.high.gather_variable_names(&mut refs);
    }
    if let Some(init) = &decl.init {
        init.gather_variable_names(&mut refs);
    }
    let mut def = NameSet::new();
    def.insert(decl.variable.name().to_string());
    (def, refs)
}

fn push_decl_vertex(out: &mut Vec<ComponentVertex>, decl: &VarDecl, kind: VertexKind, module_name: &str, global: bool) {
    let (def, refs) = decl_def_ref(decl);
    out.push(ComponentVertex {
        identifier: decl.variable.index() as i64,
        kind,
        module_name: module_name.to_string(),
        def,
        refs,
        code: decl.render(global),
    });
}

/// Builds every CDG vertex for `program`, in the canonical emission order:
/// global decls, constants, formulas, then per-module decls/commands, then
/// the initial-states construct if present.
pub fn build_vertices(program: &Program) -> Vec<ComponentVertex> {
    let mut out = Vec::new();

    for decl in &program.global_bools {
        push_decl_vertex(&mut out, decl, VertexKind::GlobalBoolDecl, GLOBAL_MODULE_NAME, true);
    }
    for decl in &program.global_ints {
        push_decl_vertex(&mut out, decl, VertexKind::GlobalIntDecl, GLOBAL_MODULE_NAME, true);
    }
    for constant in &program.constants {
        let mut refs = NameSet::new();
        refs.insert(constant.variable.name().to_string());
        constant.expr.gather_variable_names(&mut refs);
        let mut def = NameSet::new();
        def.insert(constant.variable.name().to_string());
        out.push(ComponentVertex {
            identifier: constant.variable.index() as i64,
            kind: VertexKind::ConstDecl,
            module_name: GLOBAL_MODULE_NAME.to_string(),
            def,
            refs,
            code: constant.to_string(),
        });
    }
    for formula in &program.formulas {
        let mut refs = NameSet::new();
        refs.insert(formula.variable.name().to_string());
        formula.expr.gather_variable_names(&mut refs);
        let mut def = NameSet::new();
        def.insert(formula.variable.name().to_string());
        out.push(ComponentVertex {
            identifier: formula.variable.index() as i64,
            kind: VertexKind::FormulaDecl,
            module_name: GLOBAL_MODULE_NAME.to_string(),
            def,
            refs,
            code: formula.to_string(),
        });
    }

    for module in &program.modules {
        for decl in &module.bool_vars {
            push_decl_vertex(&mut out, decl, VertexKind::LocalDecl, &module.name, false);
        }
        for decl in &module.int_vars {
            push_decl_vertex(&mut out, decl, VertexKind::LocalDecl, &module.name, false);
        }

        for command in &module.commands {
            let mut guard_refs = NameSet::new();
            command.guard.gather_variable_names(&mut guard_refs);
            out.push(ComponentVertex {
                identifier: command.global_index as i64,
                kind: VertexKind::Guard,
                module_name: module.name.clone(),
                def: NameSet::new(),
                refs: guard_refs,
                code: command.guard.to_string(),
            });

            for update in &command.updates {
                let mut rate_refs = NameSet::new();
                update.likelihood.gather_variable_names(&mut rate_refs);
                out.push(ComponentVertex {
                    identifier: update.global_index as i64,
                    kind: VertexKind::Rate,
                    module_name: module.name.clone(),
                    def: NameSet::new(),
                    refs: rate_refs,
                    code: update.likelihood.to_string(),
                });

                if update.assignments.is_empty() {
                    out.push(ComponentVertex {
                        identifier: update.global_index as i64,
                        kind: VertexKind::Assignment,
                        module_name: module.name.clone(),
                        def: NameSet::new(),
                        refs: NameSet::new(),
                        code: "true".to_string(),
                    });
                } else {
                    for assignment in &update.assignments {
                        let mut refs = NameSet::new();
                        assignment.expr.gather_variable_names(&mut refs);
                        let mut def = NameSet::new();
                        def.insert(assignment.target.name().to_string());
                        out.push(ComponentVertex {
                            identifier: update.global_index as i64,
                            kind: VertexKind::Assignment,
                            module_name: module.name.clone(),
                            def,
                            refs,
                            code: assignment.to_string(),
                        });
                    }
                }
            }
        }
    }

    if let Some(init) = &program.initial {
        let mut refs = NameSet::new();
        init.expr.gather_variable_names(&mut refs);
        out.push(ComponentVertex {
            identifier: -1,
            kind: VertexKind::Init,
            module_name: GLOBAL_MODULE_NAME.to_string(),
            def: NameSet::new(),
            refs,
            code: init.to_string(),
        });
    }

    out
}

/// Maps a command's global index to its action label (`""` for unlabeled).
pub fn action_labels(program: &Program) -> HashMap<i64, String> {
    let mut out = HashMap::new();
    for module in &program.modules {
        for command in &module.commands {
            out.insert(command.global_index as i64, command.action_label().to_string());
        }
    }
    out
}

/// Maps an update's global index (shared by its rate/assignment vertices) to
/// the global index of the command it belongs to.
pub fn update_to_command(program: &Program) -> HashMap<i64, i64> {
    let mut out = HashMap::new();
    for module in &program.modules {
        for command in &module.commands {
            for update in &command.updates {
                out.insert(update.global_index as i64, command.global_index as i64);
            }
        }
    }
    out
}

fn names_intersect(a: &NameSet, b: &NameSet) -> bool {
    a.intersection(b).next().is_some()
}

/// `dep-ar`: an assignment and the rate of the same update, in either order.
pub fn dep_ar(v1: &ComponentVertex, v2: &ComponentVertex) -> bool {
    v1.identifier == v2.identifier
        && ((v1.kind == VertexKind::Assignment && v2.kind == VertexKind::Rate)
            || (v1.kind == VertexKind::Rate && v2.kind == VertexKind::Assignment))
}

/// `dep-gg`: two guards of different modules sharing a non-empty action.
pub fn dep_gg(v1: &ComponentVertex, v2: &ComponentVertex, actions: &HashMap<i64, String>) -> bool {
    if v1.kind != VertexKind::Guard || v2.kind != VertexKind::Guard {
        return false;
    }
    if v1.module_name == v2.module_name {
        return false;
    }
    let a1 = actions.get(&v1.identifier).map(String::as_str).unwrap_or("");
    !a1.is_empty() && actions.get(&v2.identifier).map(String::as_str) == Some(a1)
}

/// `dep-ag`: an assignment or rate to the guard of its owning command.
pub fn dep_ag(v1: &ComponentVertex, v2: &ComponentVertex, update_to_command: &HashMap<i64, i64>) -> bool {
    if !(v1.kind == VertexKind::Assignment || v1.kind == VertexKind::Rate) || v2.kind != VertexKind::Guard {
        return false;
    }
    update_to_command.get(&v1.identifier) == Some(&v2.identifier)
}

/// `dep-di`: a declaration to the initial-states construct referencing it by name.
pub fn dep_di(v1: &ComponentVertex, v2: &ComponentVertex) -> bool {
    v1.kind.is_decl() && v2.kind == VertexKind::Init && names_intersect(&v1.def, &v2.refs)
}

/// `dep-d`: generic data dependence, `ref(v1) ∩ def(v2) != ∅`.
pub fn dep_d(v1: &ComponentVertex, v2: &ComponentVertex) -> bool {
    names_intersect(&v1.refs, &v2.def)
}

/// Builds the CDG adjacency list: for each ordered pair `(i, j)` with `i != j`,
/// at most one edge, decided by the five predicates in strict precedence
/// order `dep-ar, dep-gg, dep-ag, dep-di, dep-d`.
pub fn build_edges(vertices: &[ComponentVertex], program: &Program) -> Vec<Vec<usize>> {
    let actions = action_labels(program);
    let update_to_command = update_to_command(program);

    let mut adj = Vec::with_capacity(vertices.len());
    for (i, vi) in vertices.iter().enumerate() {
        let mut row = Vec::new();
        for (j, vj) in vertices.iter().enumerate() {
            if i == j {
                continue;
            }
            if dep_ar(vi, vj)
                || dep_gg(vi, vj, &actions)
                || dep_ag(vi, vj, &update_to_command)
                || dep_di(vi, vj)
                || dep_d(vi, vj)
            {
                row.push(j);
            }
        }
        adj.push(row);
    }
    adj
}
