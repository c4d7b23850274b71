use crate::error::SyntaxError;
use crate::lexer::Token;
use logos::Logos;
use prism_ast::{
    Assignment, BinOp, Command, ConstDecl, ConstType, Expr, FormulaDecl, GLOBAL_MODULE_NAME,
    InitialConstruct, IntRange, ModelType, Module, Program, UnOp, Update, VarDecl, Variable,
};
use std::collections::HashMap;
use std::ops::Range;

type PResult<T> = Result<T, SyntaxError>;

struct VariableTable {
    by_name: HashMap<String, u32>,
    next: u32,
}

impl VariableTable {
    fn new() -> Self {
        Self {
            by_name: HashMap::new(),
            next: 0,
        }
    }

    /// Declares a fresh variable; each program-level name is declared exactly once.
    fn declare(&mut self, name: &str) -> Variable {
        let index = self.next;
        self.next += 1;
        self.by_name.insert(name.to_string(), index);
        Variable::new(index, name)
    }
}

pub struct Parser<'src> {
    source: &'src str,
    tokens: Vec<(Token, Range<usize>)>,
    pos: usize,
    vars: VariableTable,
    next_command_index: u32,
    next_update_index: u32,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> PResult<Self> {
        let mut tokens = Vec::new();
        let mut lex = Token::lexer(source);
        while let Some(tok) = lex.next() {
            let span = lex.span();
            match tok {
                Ok(t) => tokens.push((t, span)),
                Err(()) => {
                    return Err(Self::error_at(source, span.start, "unexpected character"));
                }
            }
        }
        Ok(Self {
            source,
            tokens,
            pos: 0,
            vars: VariableTable::new(),
            next_command_index: 0,
            next_update_index: 0,
        })
    }

    fn error_at(source: &str, offset: usize, message: &str) -> SyntaxError {
        let mut line = 1;
        let mut col = 1;
        for ch in source[..offset.min(source.len())].chars() {
            if ch == '\n' {
                line += 1;
                col = 1;
            } else {
                col += 1;
            }
        }
        SyntaxError {
            line,
            column: col,
            message: message.to_string(),
        }
    }

    fn err(&self, message: impl Into<String>) -> SyntaxError {
        let offset = self
            .tokens
            .get(self.pos)
            .map(|(_, span)| span.start)
            .unwrap_or(self.source.len());
        Self::error_at(self.source, offset, &message.into())
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(t, _)| t)
    }

    fn bump(&mut self) -> Option<Token> {
        let tok = self.tokens.get(self.pos).map(|(t, _)| t.clone());
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn eat(&mut self, expected: &Token) -> PResult<()> {
        match self.peek() {
            Some(t) if t == expected => {
                self.pos += 1;
                Ok(())
            }
            other => Err(self.err(format!("expected {expected:?}, found {other:?}"))),
        }
    }

    fn eat_semi_if_present(&mut self) {
        if matches!(self.peek(), Some(Token::Semi)) {
            self.pos += 1;
        }
    }

    fn ident(&mut self) -> PResult<String> {
        match self.bump() {
            Some(Token::Ident(s)) => Ok(s),
            other => Err(self.err(format!("expected identifier, found {other:?}"))),
        }
    }

    pub fn parse_program(mut self) -> PResult<Program> {
        let model_type = self.parse_model_type_header();

        let mut global_bools = Vec::new();
        let mut global_ints = Vec::new();
        let mut constants = Vec::new();
        let mut formulas = Vec::new();

        loop {
            match self.peek() {
                Some(Token::Global) => {
                    self.pos += 1;
                    let name = self.ident()?;
                    self.eat(&Token::Colon)?;
                    let (is_bool, range, init) = self.parse_var_type()?;
                    self.eat_semi_if_present();
                    let variable = self.vars.declare(&name);
                    let decl = VarDecl {
                        variable,
                        range,
                        init,
                        is_bool,
                    };
                    if is_bool {
                        global_bools.push(decl);
                    } else {
                        global_ints.push(decl);
                    }
                }
                Some(Token::Const) => {
                    self.pos += 1;
                    let ty = self.parse_const_type()?;
                    let name = self.ident()?;
                    self.eat(&Token::Eq)?;
                    let expr = self.parse_expr()?;
                    self.eat_semi_if_present();
                    let variable = self.vars.declare(&name);
                    constants.push(ConstDecl {
                        variable,
                        ty,
                        expr,
                    });
                }
                Some(Token::Formula) => {
                    self.pos += 1;
                    let name = self.ident()?;
                    self.eat(&Token::Eq)?;
                    let expr = self.parse_expr()?;
                    self.eat_semi_if_present();
                    let variable = self.vars.declare(&name);
                    formulas.push(FormulaDecl { variable, expr });
                }
                _ => break,
            }
        }

        let mut modules = Vec::new();
        while matches!(self.peek(), Some(Token::Module)) {
            modules.push(self.parse_module()?);
        }

        let initial = if matches!(self.peek(), Some(Token::Init)) {
            self.pos += 1;
            let expr = self.parse_expr()?;
            self.eat(&Token::EndInit)?;
            self.eat_semi_if_present();
            Some(InitialConstruct { expr })
        } else {
            None
        };

        if self.pos != self.tokens.len() {
            return Err(self.err("trailing input after program"));
        }

        for m in &modules {
            if m.name == GLOBAL_MODULE_NAME {
                return Err(Self::error_at(
                    self.source,
                    0,
                    "module may not be named the reserved name 'global'",
                ));
            }
        }

        Ok(Program {
            model_type,
            global_bools,
            global_ints,
            constants,
            formulas,
            modules,
            initial,
        })
    }

    fn parse_model_type_header(&mut self) -> ModelType {
        let mt = match self.peek() {
            Some(Token::Dtmc) => Some(ModelType::Dtmc),
            Some(Token::Mdp) => Some(ModelType::Mdp),
            Some(Token::Ctmc) => Some(ModelType::Ctmc),
            Some(Token::Ctmdp) => Some(ModelType::Ctmdp),
            Some(Token::Ma) => Some(ModelType::Ma),
            Some(Token::Pomdp) => Some(ModelType::Pomdp),
            Some(Token::Pta) => Some(ModelType::Pta),
            Some(Token::Smg) => Some(ModelType::Smg),
            _ => None,
        };
        if let Some(mt) = mt {
            self.pos += 1;
            mt
        } else {
            ModelType::Unknown
        }
    }

    fn parse_const_type(&mut self) -> PResult<ConstType> {
        match self.bump() {
            Some(Token::Bool) => Ok(ConstType::Bool),
            Some(Token::Int) => Ok(ConstType::Int),
            Some(Token::Double) => Ok(ConstType::Double),
            other => Err(self.err(format!("expected a const type, found {other:?}"))),
        }
    }

    /// Parses the part after `NAME :` for a variable declaration; returns
    /// `(is_bool, range, init)`.
    fn parse_var_type(&mut self) -> PResult<(bool, Option<IntRange>, Option<Expr>)> {
        let (is_bool, range) = match self.peek() {
            Some(Token::Bool) => {
                self.pos += 1;
                (true, None)
            }
            Some(Token::Int) => {
                self.pos += 1;
                (false, None)
            }
            Some(Token::LBracket) => {
                self.pos += 1;
                let low = self.parse_expr()?;
                self.eat(&Token::DotDot)?;
                let high = self.parse_expr()?;
                self.eat(&Token::RBracket)?;
                (false, Some(IntRange { low, high }))
            }
            other => {
                return Err(self.err(format!("expected a variable type, found {other:?}")));
            }
        };
        let init = if matches!(self.peek(), Some(Token::Init)) {
            self.pos += 1;
            Some(self.parse_expr()?)
        } else {
            None
        };
        Ok((is_bool, range, init))
    }

    fn parse_module(&mut self) -> PResult<Module> {
        self.eat(&Token::Module)?;
        let name = self.ident()?;
        let mut bool_vars = Vec::new();
        let mut int_vars = Vec::new();
        while let Some(Token::Ident(_)) = self.peek() {
            let var_name = self.ident()?;
            self.eat(&Token::Colon)?;
            let (is_bool, range, init) = self.parse_var_type()?;
            self.eat_semi_if_present();
            let variable = self.vars.declare(&var_name);
            let decl = VarDecl {
                variable,
                range,
                init,
                is_bool,
            };
            if is_bool {
                bool_vars.push(decl);
            } else {
                int_vars.push(decl);
            }
        }
        let mut commands = Vec::new();
        while matches!(self.peek(), Some(Token::LBracket)) {
            commands.push(self.parse_command()?);
        }
        self.eat(&Token::EndModule)?;
        Ok(Module {
            name,
            bool_vars,
            int_vars,
            commands,
        })
    }

    fn parse_command(&mut self) -> PResult<Command> {
        self.eat(&Token::LBracket)?;
        let action = if let Some(Token::Ident(_)) = self.peek() {
            Some(self.ident()?)
        } else {
            None
        };
        self.eat(&Token::RBracket)?;
        let guard = self.parse_expr()?;
        self.eat(&Token::Arrow)?;
        let mut updates = vec![self.parse_update()?];
        while matches!(self.peek(), Some(Token::Plus)) {
            self.pos += 1;
            updates.push(self.parse_update()?);
        }
        self.eat(&Token::Semi)?;
        let global_index = self.next_command_index;
        self.next_command_index += 1;
        Ok(Command {
            action,
            guard,
            updates,
            global_index,
        })
    }

    fn parse_update(&mut self) -> PResult<Update> {
        // Either `<expr> : <assignments>` or a bare `<assignments>` (implicit rate 1).
        // The rate prefix is speculative: a bare assignment list (e.g. `(a'=a+1)`)
        // is not a valid expression, so a failed speculative parse just means
        // "no rate prefix" rather than a real syntax error.
        let checkpoint = self.pos;
        let (likelihood, assignments) = match self
            .parse_expr()
            .ok()
            .filter(|_| matches!(self.peek(), Some(Token::Colon)))
        {
            Some(likelihood) => {
                self.pos += 1; // the ':'
                (likelihood, self.parse_assignments()?)
            }
            None => {
                self.pos = checkpoint;
                (Expr::IntLit(1), self.parse_assignments()?)
            }
        };
        let global_index = self.next_update_index;
        self.next_update_index += 1;
        Ok(Update {
            likelihood,
            assignments,
            global_index,
        })
    }

    fn parse_assignments(&mut self) -> PResult<Vec<Assignment>> {
        if matches!(self.peek(), Some(Token::True)) {
            self.pos += 1;
            return Ok(Vec::new());
        }
        let mut out = vec![self.parse_assignment()?];
        while matches!(self.peek(), Some(Token::Amp)) {
            self.pos += 1;
            out.push(self.parse_assignment()?);
        }
        Ok(out)
    }

    fn parse_assignment(&mut self) -> PResult<Assignment> {
        self.eat(&Token::LParen)?;
        let name = self.ident()?;
        self.eat(&Token::PrimeEq)?;
        let expr = self.parse_expr()?;
        self.eat(&Token::RParen)?;
        let index = *self
            .vars
            .by_name
            .get(&name)
            .ok_or_else(|| self.err(format!("assignment to undeclared variable '{name}'")))?;
        Ok(Assignment {
            target: Variable::new(index, name),
            expr,
        })
    }

    // ---- expression grammar (precedence climbing) ----

    fn parse_expr(&mut self) -> PResult<Expr> {
        self.parse_or()
    }

    fn parse_or(&mut self) -> PResult<Expr> {
        let mut lhs = self.parse_and()?;
        while matches!(self.peek(), Some(Token::Pipe)) {
            self.pos += 1;
            let rhs = self.parse_and()?;
            lhs = Expr::bin(BinOp::Or, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_and(&mut self) -> PResult<Expr> {
        let mut lhs = self.parse_not()?;
        while matches!(self.peek(), Some(Token::Amp)) {
            self.pos += 1;
            let rhs = self.parse_not()?;
            lhs = Expr::bin(BinOp::And, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_not(&mut self) -> PResult<Expr> {
        if matches!(self.peek(), Some(Token::Bang)) {
            self.pos += 1;
            let e = self.parse_not()?;
            Ok(Expr::unary(UnOp::Not, e))
        } else {
            self.parse_rel()
        }
    }

    fn parse_rel(&mut self) -> PResult<Expr> {
        let lhs = self.parse_add()?;
        let op = match self.peek() {
            Some(Token::Eq) => Some(BinOp::Eq),
            Some(Token::Ne) => Some(BinOp::Ne),
            Some(Token::Lt) => Some(BinOp::Lt),
            Some(Token::Le) => Some(BinOp::Le),
            Some(Token::Gt) => Some(BinOp::Gt),
            Some(Token::Ge) => Some(BinOp::Ge),
            _ => None,
        };
        if let Some(op) = op {
            self.pos += 1;
            let rhs = self.parse_add()?;
            Ok(Expr::bin(op, lhs, rhs))
        } else {
            Ok(lhs)
        }
    }

    fn parse_add(&mut self) -> PResult<Expr> {
        let mut lhs = self.parse_mul()?;
        loop {
            let op = match self.peek() {
                Some(Token::Plus) => BinOp::Add,
                Some(Token::Minus) => BinOp::Sub,
                _ => break,
            };
            self.pos += 1;
            let rhs = self.parse_mul()?;
            lhs = Expr::bin(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_mul(&mut self) -> PResult<Expr> {
        let mut lhs = self.parse_unary()?;
        loop {
            let op = match self.peek() {
                Some(Token::Star) => BinOp::Mul,
                Some(Token::Slash) => BinOp::Div,
                _ => break,
            };
            self.pos += 1;
            let rhs = self.parse_unary()?;
            lhs = Expr::bin(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_unary(&mut self) -> PResult<Expr> {
        if matches!(self.peek(), Some(Token::Minus)) {
            self.pos += 1;
            let e = self.parse_unary()?;
            Ok(Expr::unary(UnOp::Neg, e))
        } else {
            self.parse_atom()
        }
    }

    fn parse_atom(&mut self) -> PResult<Expr> {
        match self.bump() {
            Some(Token::True) => Ok(Expr::BoolLit(true)),
            Some(Token::False) => Ok(Expr::BoolLit(false)),
            Some(Token::IntLit(i)) => Ok(Expr::IntLit(i)),
            Some(Token::Double_(d)) => Ok(Expr::DoubleLit(d)),
            Some(Token::Ident(name)) => Ok(Expr::var(name)),
            Some(Token::LParen) => {
                let e = self.parse_expr()?;
                self.eat(&Token::RParen)?;
                Ok(e)
            }
            other => Err(self.err(format!("expected an expression, found {other:?}"))),
        }
    }
}
