//! Criterion resolution and BFS-reachability slicing over the dependence
//! graphs built by `slice-graph`.

mod bfs;
mod criteria;
mod error;
mod slicer;

pub use bfs::reachable;
pub use criteria::{resolve_component_criteria, resolve_module_criteria, resolve_variable_criteria};
pub use error::SliceError;
pub use slicer::{prune_dead_commands, slice_components, slice_modules};
