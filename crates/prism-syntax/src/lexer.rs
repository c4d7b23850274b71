use logos::Logos;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"//[^\n]*")]
pub enum Token {
    #[token("dtmc")]
    Dtmc,
    #[token("mdp")]
    Mdp,
    #[token("ctmc")]
    Ctmc,
    #[token("ctmdp")]
    Ctmdp,
    #[token("ma")]
    Ma,
    #[token("pomdp")]
    Pomdp,
    #[token("pta")]
    Pta,
    #[token("smg")]
    Smg,
    #[token("module")]
    Module,
    #[token("endmodule")]
    EndModule,
    #[token("global")]
    Global,
    #[token("const")]
    Const,
    #[token("formula")]
    Formula,
    #[token("init")]
    Init,
    #[token("endinit")]
    EndInit,
    #[token("bool")]
    Bool,
    #[token("int")]
    Int,
    #[token("double")]
    Double,
    #[token("true")]
    True,
    #[token("false")]
    False,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),
    #[regex(r"[0-9]+\.[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    Double_(f64),
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    IntLit(i64),

    #[token("->")]
    Arrow,
    #[token("'=")]
    PrimeEq,
    #[token("..")]
    DotDot,
    #[token("!=")]
    Ne,
    #[token("<=")]
    Le,
    #[token(">=")]
    Ge,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("=")]
    Eq,
    #[token("!")]
    Bang,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token(":")]
    Colon,
    #[token(";")]
    Semi,
    #[token(",")]
    Comma,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}
