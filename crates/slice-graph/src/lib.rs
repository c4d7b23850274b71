//! Dependence graphs over a parsed program: the coarse-grained Module
//! Dependence Graph (MDG) and the fine-grained Component Dependence Graph
//! (CDG), plus their edge predicates.

mod component_graph;
mod module_graph;
mod vertex;

pub use component_graph::{
    action_labels, build_edges as build_component_edges, build_vertices as build_component_vertices,
    dep_ag, dep_ar, dep_d, dep_di, dep_gg, update_to_command,
};
pub use module_graph::{
    action_dependence, build_edges as build_module_edges, build_vertices as build_module_vertices,
    data_dependence, ModuleVertex,
};
pub use vertex::{ComponentVertex, VertexKind};
