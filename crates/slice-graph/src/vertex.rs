use slice_extract::NameSet;

/// The nine CDG vertex kinds a program decomposes into (§4.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexKind {
    GlobalBoolDecl,
    GlobalIntDecl,
    ConstDecl,
    FormulaDecl,
    LocalDecl,
    Guard,
    Rate,
    Assignment,
    Init,
}

impl VertexKind {
    /// True for any of the five declaration-ish kinds; `dep-di` fires from these.
    pub fn is_decl(self) -> bool {
        matches!(
            self,
            VertexKind::GlobalBoolDecl
                | VertexKind::GlobalIntDecl
                | VertexKind::ConstDecl
                | VertexKind::FormulaDecl
                | VertexKind::LocalDecl
        )
    }
}

/// One vertex of the Component Dependence Graph.
///
/// `identifier` is the owning command/update's global index, or `-1` for the
/// two identifier-less kinds (`Init`, and any future owner-less vertex).
/// Assignment vertices belonging to the same update share their update's
/// identifier, mirroring the original's choice to key by update rather than
/// by per-assignment id.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentVertex {
    pub identifier: i64,
    pub kind: VertexKind,
    pub module_name: String,
    pub def: NameSet,
    pub refs: NameSet,
    pub code: String,
}
