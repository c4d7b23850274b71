//! Module Dependence Graph: one vertex per module plus a synthetic `global`
//! vertex, and the two MDG edge predicates (§4.3, §4.4).

use prism_ast::{GLOBAL_MODULE_NAME, Program};
use slice_extract::NameSet;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct ModuleVertex {
    pub name: String,
    pub def: NameSet,
    pub refs: NameSet,
    pub actions: BTreeSet<String>,
}

/// Builds one [`ModuleVertex`] per module, followed by the synthetic
/// `"global"` vertex carrying the program's global decls/constants/formulas.
pub fn build_vertices(program: &Program) -> Vec<ModuleVertex> {
    let mut out: Vec<ModuleVertex> = program
        .modules
        .iter()
        .map(|module| ModuleVertex {
            name: module.name.clone(),
            def: slice_extract::defs(module),
            refs: slice_extract::refs(module),
            actions: slice_extract::actions(module),
        })
        .collect();

    out.push(ModuleVertex {
        name: GLOBAL_MODULE_NAME.to_string(),
        def: slice_extract::global_defs(program),
        refs: slice_extract::global_refs(program),
        actions: BTreeSet::new(),
    });

    out
}

fn names_intersect(a: &NameSet, b: &NameSet) -> bool {
    a.intersection(b).next().is_some()
}

fn actions_intersect(a: &BTreeSet<String>, b: &BTreeSet<String>) -> bool {
    a.intersection(b).next().is_some()
}

/// `action-dependence(i, j)`: `i` and `j` share a synchronization action.
pub fn action_dependence(vi: &ModuleVertex, vj: &ModuleVertex) -> bool {
    actions_intersect(&vi.actions, &vj.actions)
}

/// `data-dependence(i, j)`: `ref(i) ∩ def(j) != ∅`.
pub fn data_dependence(vi: &ModuleVertex, vj: &ModuleVertex) -> bool {
    names_intersect(&vi.refs, &vj.def)
}

/// Builds the MDG adjacency list: for each ordered pair `(i, j)` with `i != j`,
/// at most one edge, action-dependence checked before data-dependence.
pub fn build_edges(vertices: &[ModuleVertex]) -> Vec<Vec<usize>> {
    let mut adj = Vec::with_capacity(vertices.len());
    for (i, vi) in vertices.iter().enumerate() {
        let mut row = Vec::new();
        for (j, vj) in vertices.iter().enumerate() {
            if i == j {
                continue;
            }
            if action_dependence(vi, vj) || data_dependence(vi, vj) {
                row.push(j);
            }
        }
        adj.push(row);
    }
    adj
}
