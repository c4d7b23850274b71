//! Variable/action extraction over AST subtrees (§4.1).
//!
//! All results are keyed by variable *name* (a `BTreeSet<String>`), matching
//! the spec's requirement that def/ref intersection across vertices compares
//! by name rather than by [`prism_ast::Variable`] index — see the design
//! note in `SPEC_FULL.md` §9.

use prism_ast::{Module, Program, VarDecl};
use std::collections::BTreeSet;

pub type NameSet = BTreeSet<String>;

fn decl_names(decls: &[VarDecl], out: &mut NameSet) {
    for d in decls {
        out.insert(d.variable.name().to_string());
    }
}

fn decl_refs(decls: &[VarDecl], out: &mut NameSet) {
    for d in decls {
        out.insert(d.variable.name().to_string());
        if let Some(range) = &d.range {
            range.low.gather_variable_names(out);
            range.high.gather_variable_names(out);
        }
        if let Some(init) = &d.init {
            init.gather_variable_names(out);
        }
    }
}

/// `defs(module)`: declared variables plus every assignment target.
pub fn defs(module: &Module) -> NameSet {
    let mut out = NameSet::new();
    decl_names(&module.bool_vars, &mut out);
    decl_names(&module.int_vars, &mut out);
    for command in &module.commands {
        for update in &command.updates {
            for assignment in &update.assignments {
                out.insert(assignment.target.name().to_string());
            }
        }
    }
    out
}

/// `refs(module)`: declared variables, their own defining expressions, and
/// every guard/likelihood/assignment-RHS variable reference.
pub fn refs(module: &Module) -> NameSet {
    let mut out = NameSet::new();
    decl_refs(&module.bool_vars, &mut out);
    decl_refs(&module.int_vars, &mut out);
    for command in &module.commands {
        command.guard.gather_variable_names(&mut out);
        for update in &command.updates {
            update.likelihood.gather_variable_names(&mut out);
            for assignment in &update.assignments {
                assignment.expr.gather_variable_names(&mut out);
            }
        }
    }
    out
}

/// `actions(module)`: non-empty action labels used by any command.
pub fn actions(module: &Module) -> BTreeSet<String> {
    module
        .commands
        .iter()
        .filter_map(|c| c.action.clone())
        .filter(|a| !a.is_empty())
        .collect()
}

/// `global_defs(program)`: global decls, constants, formulas, and the
/// variables gathered by the initial-states expression (if present).
pub fn global_defs(program: &Program) -> NameSet {
    let mut out = NameSet::new();
    decl_names(&program.global_bools, &mut out);
    decl_names(&program.global_ints, &mut out);
    for c in &program.constants {
        out.insert(c.variable.name().to_string());
    }
    for f in &program.formulas {
        out.insert(f.variable.name().to_string());
    }
    if let Some(init) = &program.initial {
        init.expr.gather_variable_names(&mut out);
    }
    out
}

/// `global_refs(program)`: `global_defs` plus every declaration/constant/
/// formula's own defining/range/initial-value expression.
pub fn global_refs(program: &Program) -> NameSet {
    let mut out = global_defs(program);
    decl_refs(&program.global_bools, &mut out);
    decl_refs(&program.global_ints, &mut out);
    for c in &program.constants {
        out.insert(c.variable.name().to_string());
        c.expr.gather_variable_names(&mut out);
    }
    for f in &program.formulas {
        out.insert(f.variable.name().to_string());
        f.expr.gather_variable_names(&mut out);
    }
    out
}
