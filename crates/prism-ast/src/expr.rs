use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Or,
    And,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    fn symbol(self) -> &'static str {
        match self {
            BinOp::Or => "|",
            BinOp::And => "&",
            BinOp::Eq => "=",
            BinOp::Ne => "!=",
            BinOp::Lt => "<",
            BinOp::Le => "<=",
            BinOp::Gt => ">",
            BinOp::Ge => ">=",
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        }
    }

    /// Binding power; higher binds tighter. Mirrors the PRISM grammar's
    /// `| < & < relational < additive < multiplicative` precedence chain.
    fn precedence(self) -> u8 {
        match self {
            BinOp::Or => 1,
            BinOp::And => 2,
            BinOp::Eq | BinOp::Ne | BinOp::Lt | BinOp::Le | BinOp::Gt | BinOp::Ge => 3,
            BinOp::Add | BinOp::Sub => 4,
            BinOp::Mul | BinOp::Div => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Not,
    Neg,
}

impl UnOp {
    fn symbol(self) -> &'static str {
        match self {
            UnOp::Not => "!",
            UnOp::Neg => "-",
        }
    }
}

/// An expression tree. Displaying an `Expr` produces the canonical
/// source-text rendering used as CDG vertex text (§4.2) and re-parses back
/// into an equivalent tree, which is what the emitter round-trip relies on.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    BoolLit(bool),
    IntLit(i64),
    DoubleLit(f64),
    Var(String),
    Unary(UnOp, Box<Expr>),
    Binary(BinOp, Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Var(name.into())
    }

    pub fn bin(op: BinOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    pub fn unary(op: UnOp, e: Expr) -> Self {
        Expr::Unary(op, Box::new(e))
    }

    /// `true`, syntactically — used to detect the dead-command pruning
    /// condition in §4.5 and the decl `int` trivial-range rendering in §4.2.
    pub fn is_trivially_true(&self) -> bool {
        matches!(self, Expr::BoolLit(true))
    }

    fn precedence(&self) -> u8 {
        match self {
            Expr::BoolLit(_) | Expr::IntLit(_) | Expr::DoubleLit(_) | Expr::Var(_) => 10,
            Expr::Unary(..) => 6,
            Expr::Binary(op, ..) => op.precedence(),
        }
    }

    /// Walks this expression, inserting every referenced variable name into `out`.
    pub fn gather_variable_names(&self, out: &mut std::collections::BTreeSet<String>) {
        match self {
            Expr::BoolLit(_) | Expr::IntLit(_) | Expr::DoubleLit(_) => {}
            Expr::Var(name) => {
                out.insert(name.clone());
            }
            Expr::Unary(_, e) => e.gather_variable_names(out),
            Expr::Binary(_, l, r) => {
                l.gather_variable_names(out);
                r.gather_variable_names(out);
            }
        }
    }
}

fn fmt_child(f: &mut fmt::Formatter<'_>, child: &Expr, parent_prec: u8) -> fmt::Result {
    if child.precedence() < parent_prec {
        write!(f, "({child})")
    } else {
        write!(f, "{child}")
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::BoolLit(b) => write!(f, "{b}"),
            Expr::IntLit(i) => write!(f, "{i}"),
            Expr::DoubleLit(d) => {
                if d.fract() == 0.0 {
                    write!(f, "{d:.1}")
                } else {
                    write!(f, "{d}")
                }
            }
            Expr::Var(name) => write!(f, "{name}"),
            Expr::Unary(op, e) => {
                write!(f, "{}", op.symbol())?;
                fmt_child(f, e, 7)
            }
            Expr::Binary(op, l, r) => {
                let p = op.precedence();
                fmt_child(f, l, p)?;
                write!(f, "{}", op.symbol())?;
                fmt_child(f, r, p + 1)
            }
        }
    }
}
