use crate::SliceError;
use slice_graph::{ComponentVertex, ModuleVertex};

/// Resolves variable-name criteria to their declaration vertex index. Each
/// name must name a variable actually declared (globally or locally)
/// somewhere in the program.
pub fn resolve_variable_criteria(vertices: &[ComponentVertex], names: &[String]) -> Result<Vec<usize>, SliceError> {
    names
        .iter()
        .map(|name| {
            vertices
                .iter()
                .position(|v| v.kind.is_decl() && v.def.contains(name))
                .ok_or_else(|| SliceError::InvalidArgument(format!("variable '{name}' not found in program")))
        })
        .collect()
}

/// Resolves component criteria: each string must match a vertex's rendered
/// `code` exactly.
pub fn resolve_component_criteria(vertices: &[ComponentVertex], codes: &[String]) -> Result<Vec<usize>, SliceError> {
    codes
        .iter()
        .map(|code| {
            vertices
                .iter()
                .position(|v| &v.code == code)
                .ok_or_else(|| SliceError::InvalidArgument(format!("component '{code}' not found in program")))
        })
        .collect()
}

/// Resolves module-name criteria against the MDG vertex set (includes the
/// synthetic `"global"` vertex).
pub fn resolve_module_criteria(vertices: &[ModuleVertex], names: &[String]) -> Result<Vec<usize>, SliceError> {
    names
        .iter()
        .map(|name| {
            vertices
                .iter()
                .position(|v| &v.name == name)
                .ok_or_else(|| SliceError::InvalidArgument(format!("module '{name}' not found in program")))
        })
        .collect()
}
