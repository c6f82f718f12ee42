//! Lexical analysis module
//!
//! This module handles tokenization of Monkey source bytes.

pub mod token;
pub mod scanner;

pub use token::{lookup_ident, Keyword, Token, TokenType};
pub use scanner::{Lexer, DEFAULT_CHUNK_SIZE};
