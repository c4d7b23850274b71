//! Read-only data model for a parsed PRISM-like probabilistic program.
//!
//! This crate owns no parsing logic (see `prism-syntax`) and no graph logic
//! (see `slice-graph`); it is the AST the rest of the workspace consumes.

mod expr;
mod variable;

pub use expr::{BinOp, Expr, UnOp};
pub use variable::Variable;

use std::fmt;

/// The model type keyword emitted in the file header (§4.6 rule 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelType {
    Dtmc,
    Mdp,
    Ctmc,
    Ctmdp,
    Ma,
    Pomdp,
    Pta,
    Smg,
    /// No (or an unrecognized) header keyword was present; emitted as `mdp`.
    Unknown,
}

impl ModelType {
    pub fn keyword(self) -> &'static str {
        match self {
            ModelType::Dtmc => "dtmc",
            ModelType::Mdp => "mdp",
            ModelType::Ctmc => "ctmc",
            ModelType::Ctmdp => "ctmdp",
            ModelType::Ma => "ma",
            ModelType::Pomdp => "pomdp",
            ModelType::Pta => "pta",
            ModelType::Smg => "smg",
            ModelType::Unknown => "mdp",
        }
    }
}

/// Declared numeric/boolean constant type (§4.2 "Constant" rendering rule).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstType {
    Bool,
    Int,
    /// Rendered as `double` per the PRISM grammar (storm has no separate rational keyword).
    Double,
}

impl ConstType {
    pub fn keyword(self) -> &'static str {
        match self {
            ConstType::Bool => "bool",
            ConstType::Int => "int",
            ConstType::Double => "double",
        }
    }
}

/// An integer variable's declared range, or the absence of one (`int`, unranged).
#[derive(Debug, Clone)]
pub struct IntRange {
    pub low: Expr,
    pub high: Expr,
}

/// A boolean or integer variable declaration, global or module-local.
#[derive(Debug, Clone)]
pub struct VarDecl {
    pub variable: Variable,
    pub range: Option<IntRange>,
    pub init: Option<Expr>,
    pub is_bool: bool,
}

impl VarDecl {
    /// Renders this declaration's canonical text, with or without the `global ` prefix.
    pub fn render(&self, global: bool) -> String {
        let mut s = String::new();
        if global {
            s.push_str("global ");
        }
        s.push_str(self.variable.name());
        s.push_str(" : ");
        if self.is_bool {
            s.push_str("bool");
        } else {
            match &self.range {
                None => s.push_str("int"),
                Some(r) => s.push_str(&format!("[{}..{}]", r.low, r.high)),
            }
        }
        if let Some(init) = &self.init {
            s.push_str(" init ");
            s.push_str(&init.to_string());
        }
        s
    }
}

#[derive(Debug, Clone)]
pub struct ConstDecl {
    pub variable: Variable,
    pub ty: ConstType,
    pub expr: Expr,
}

impl fmt::Display for ConstDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "const {} {} = {}",
            self.ty.keyword(),
            self.variable.name(),
            self.expr
        )
    }
}

#[derive(Debug, Clone)]
pub struct FormulaDecl {
    pub variable: Variable,
    pub expr: Expr,
}

impl fmt::Display for FormulaDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "formula {} = {}", self.variable.name(), self.expr)
    }
}

#[derive(Debug, Clone)]
pub struct Assignment {
    pub target: Variable,
    pub expr: Expr,
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}'={})", self.target.name(), self.expr)
    }
}

/// One probabilistic branch of a command (§3 "Update").
#[derive(Debug, Clone)]
pub struct Update {
    pub likelihood: Expr,
    pub assignments: Vec<Assignment>,
    pub global_index: u32,
}

/// A guarded, probabilistically-updating action (§3 "Command").
#[derive(Debug, Clone)]
pub struct Command {
    /// `None` denotes the empty/unlabeled action.
    pub action: Option<String>,
    pub guard: Expr,
    pub updates: Vec<Update>,
    pub global_index: u32,
}

impl Command {
    pub fn action_label(&self) -> &str {
        self.action.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone)]
pub struct Module {
    pub name: String,
    pub bool_vars: Vec<VarDecl>,
    pub int_vars: Vec<VarDecl>,
    pub commands: Vec<Command>,
}

#[derive(Debug, Clone)]
pub struct InitialConstruct {
    pub expr: Expr,
}

impl fmt::Display for InitialConstruct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "init {} endinit", self.expr)
    }
}

/// A fully parsed PRISM-like program. The sentinel module name `"global"` is
/// reserved and must not be used by any [`Module`].
pub const GLOBAL_MODULE_NAME: &str = "global";

#[derive(Debug, Clone)]
pub struct Program {
    pub model_type: ModelType,
    pub global_bools: Vec<VarDecl>,
    pub global_ints: Vec<VarDecl>,
    pub constants: Vec<ConstDecl>,
    pub formulas: Vec<FormulaDecl>,
    pub modules: Vec<Module>,
    pub initial: Option<InitialConstruct>,
}

impl Program {
    pub fn module(&self, name: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.name == name)
    }

    pub fn command(&self, global_index: u32) -> Option<(&Module, &Command)> {
        self.modules.iter().find_map(|m| {
            m.commands
                .iter()
                .find(|c| c.global_index == global_index)
                .map(|c| (m, c))
        })
    }
}
