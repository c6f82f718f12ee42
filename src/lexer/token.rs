//! Token definitions for the Monkey language
//!
//! This module defines the token kinds produced by the lexer and the
//! keyword lookup used to classify identifiers.

use std::fmt;

/// A token in the Monkey language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub token_type: TokenType,
    pub literal: String,
}

impl Token {
    /// Create a new token
    pub fn new(token_type: TokenType, literal: String) -> Self {
        Self {
            token_type,
            literal,
        }
    }

    /// The end-of-stream token, with an empty literal
    pub fn eof() -> Self {
        Self::new(TokenType::Eof, String::new())
    }

    pub fn is_eof(&self) -> bool {
        self.token_type == TokenType::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token<{}: {:?}>", self.token_type, self.literal)
    }
}

/// Token types in the Monkey language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    // Special
    Illegal,
    Eof,

    // Identifiers and literals
    Identifier,
    Int,
    Keyword(Keyword),

    // Operators
    Assign,     // =
    Plus,       // +

    // Delimiters
    Comma,      // ,
    Semicolon,  // ;
    LeftParen,  // (
    RightParen, // )
    LeftBrace,  // {
    RightBrace, // }
}

impl TokenType {
    /// Canonical upper-case name of the token kind
    pub fn name(&self) -> &'static str {
        match self {
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Identifier => "IDENT",
            Self::Int => "INT",
            Self::Keyword(Keyword::Fn) => "FUNCTION",
            Self::Keyword(Keyword::Let) => "LET",
            Self::Assign => "ASSIGN",
            Self::Plus => "PLUS",
            Self::Comma => "COMMA",
            Self::Semicolon => "SEMICOLON",
            Self::LeftParen => "LPAREN",
            Self::RightParen => "RPAREN",
            Self::LeftBrace => "LBRACE",
            Self::RightBrace => "RBRACE",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Keywords in the Monkey language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Fn,
    Let,
}

impl Keyword {
    /// Get keyword from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "fn" => Some(Self::Fn),
            "let" => Some(Self::Let),
            _ => None,
        }
    }

    /// Get string representation of keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fn => "fn",
            Self::Let => "let",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Map identifier text to its keyword kind, or to a plain identifier
pub fn lookup_ident(ident: &str) -> TokenType {
    match Keyword::from_str(ident) {
        Some(keyword) => TokenType::Keyword(keyword),
        None => TokenType::Identifier,
    }
}
