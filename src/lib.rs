//! # Monkey Language Front End
//!
//! A streaming tokenizer for the Monkey language:
//! - Pulls bytes from any `std::io::Read` source through a small buffer
//! - Keeps one byte of lookahead and produces one token per call
//! - Reports a failing byte source as an error instead of aborting
//!
//! ## Architecture
//!
//! - `lexer`: Token definitions, keyword lookup and the streaming lexer
//! - `repl`: Read-Lex-Print Loop over line-oriented input
//! - `error`: Error types

pub mod error;
pub mod lexer;
pub mod repl;

// Re-export commonly used types
pub use error::{MonkeyError, MonkeyResult};
pub use lexer::{lookup_ident, Keyword, Lexer, Token, TokenType};

use std::io::Read;

/// Version of the Monkey front end
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tokenize a whole byte source
///
/// Returns every token in order, ending with a single `Eof` token, or the
/// source fault that stopped lexing.
pub fn tokenize<R: Read>(source: R) -> MonkeyResult<Vec<Token>> {
    Lexer::new(source).tokenize()
}
