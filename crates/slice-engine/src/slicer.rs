use crate::bfs;
use prism_ast::Program;
use slice_graph::{ComponentVertex, ModuleVertex, VertexKind};
use std::collections::BTreeSet;

/// Slices the CDG from `starts`, then drops any trivially-true guard left
/// with none of its updates' rates in the slice (§4.5 "useless commands").
pub fn slice_components(vertices: &[ComponentVertex], adj: &[Vec<usize>], starts: &[usize], program: &Program) -> Vec<ComponentVertex> {
    let visited = bfs::reachable(adj, starts);
    let mut sliced: Vec<ComponentVertex> = vertices
        .iter()
        .zip(visited.iter())
        .filter(|(_, kept)| **kept)
        .map(|(v, _)| v.clone())
        .collect();
    prune_dead_commands(&mut sliced, program);
    sliced
}

/// Slices the MDG from `starts`. No post-pruning: a module either belongs to
/// the slice or it doesn't.
pub fn slice_modules(vertices: &[ModuleVertex], adj: &[Vec<usize>], starts: &[usize]) -> Vec<ModuleVertex> {
    let visited = bfs::reachable(adj, starts);
    vertices
        .iter()
        .zip(visited.iter())
        .filter(|(_, kept)| **kept)
        .map(|(v, _)| v.clone())
        .collect()
}

/// Drops guard vertices whose command's guard is trivially `true` and whose
/// every update's rate was sliced away — an always-enabled command that now
/// does nothing is dead weight, not a real transition.
pub fn prune_dead_commands(vertices: &mut Vec<ComponentVertex>, program: &Program) {
    let present_modules: BTreeSet<&str> = vertices.iter().map(|v| v.module_name.as_str()).collect();

    let mut to_remove = Vec::new();
    for module in &program.modules {
        if !present_modules.contains(module.name.as_str()) {
            continue;
        }
        for command in &module.commands {
            if !command.guard.is_trivially_true() {
                continue;
            }
            let Some(guard_pos) = vertices
                .iter()
                .position(|v| v.kind == VertexKind::Guard && v.identifier == command.global_index as i64)
            else {
                continue;
            };
            let has_surviving_rate = command.updates.iter().any(|update| {
                vertices
                    .iter()
                    .any(|v| v.kind == VertexKind::Rate && v.identifier == update.global_index as i64)
            });
            if !has_surviving_rate {
                to_remove.push(guard_pos);
            }
        }
    }

    to_remove.sort_unstable();
    to_remove.dedup();
    for idx in to_remove.into_iter().rev() {
        vertices.remove(idx);
    }
}
