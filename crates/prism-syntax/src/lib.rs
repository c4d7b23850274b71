//! Lexing and recursive-descent parsing of PRISM-like source text into a
//! [`prism_ast::Program`]. This crate is the sole external collaborator that
//! touches source text; every other crate in the workspace consumes the AST.

mod error;
mod lexer;
mod parser;

pub use error::SyntaxError;

use prism_ast::Program;

/// Parses a complete PRISM-like source file into a [`Program`].
pub fn parse(source: &str) -> Result<Program, SyntaxError> {
    parser::Parser::new(source)?.parse_program()
}
