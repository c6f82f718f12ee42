//! Lexer/Scanner implementation for the Monkey language
//!
//! The lexer pulls bytes from any [`std::io::Read`] source through a small
//! refillable buffer and keeps exactly one byte of lookahead. Tokens are
//! produced one at a time by [`Lexer::next_token`]; once the source is
//! exhausted every further call yields an `Eof` token.

use std::io::{self, Read};
use std::iter::FusedIterator;

use tracing::{debug, trace, warn};

use crate::error::{MonkeyError, MonkeyResult};
use super::token::{lookup_ident, Token, TokenType};

/// Number of bytes requested from the source per refill
pub const DEFAULT_CHUNK_SIZE: usize = 8;

/// Streaming lexer over a byte source
pub struct Lexer<R> {
    source: R,
    /// Bytes read from `source` but not yet consumed: `buffer[pos..filled]`.
    buffer: Box<[u8]>,
    pos: usize,
    filled: usize,
    /// Byte under the cursor; `None` once the stream is exhausted.
    current: Option<u8>,
    exhausted: bool,
    /// The source reported end-of-stream while a chunk was being filled.
    source_drained: bool,
    /// A source fault not yet handed to the caller.
    fault: Option<MonkeyError>,
}

impl<R: Read> Lexer<R> {
    /// Create a new lexer and load the first byte
    pub fn new(source: R) -> Self {
        Self::with_chunk_size(source, DEFAULT_CHUNK_SIZE)
    }

    /// Create a lexer that requests `chunk_size` bytes per refill (at least 1)
    pub fn with_chunk_size(source: R, chunk_size: usize) -> Self {
        let mut lexer = Self {
            source,
            buffer: vec![0; chunk_size.max(1)].into_boxed_slice(),
            pos: 0,
            filled: 0,
            current: None,
            exhausted: false,
            source_drained: false,
            fault: None,
        };

        // A fault while priming is reported by the first `next_token` call.
        if let Err(err) = lexer.advance() {
            lexer.fault = Some(err);
        }
        lexer
    }

    /// Whether the byte source has been used up (or has faulted)
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Produce the next token
    ///
    /// Returns `Eof` forever once the source is exhausted. A read failure of
    /// the source is returned as [`MonkeyError::SourceFault`] exactly once;
    /// the lexer is exhausted afterwards.
    pub fn next_token(&mut self) -> MonkeyResult<Token> {
        if self.exhausted {
            if let Some(err) = self.fault.take() {
                return Err(err);
            }
        }

        self.skip_whitespace()?;

        let byte = match self.current {
            Some(byte) => byte,
            None => return Ok(Token::eof()),
        };

        let token = match byte {
            b'=' => self.single(TokenType::Assign, byte),
            b';' => self.single(TokenType::Semicolon, byte),
            b'(' => self.single(TokenType::LeftParen, byte),
            b')' => self.single(TokenType::RightParen, byte),
            b',' => self.single(TokenType::Comma, byte),
            b'+' => self.single(TokenType::Plus, byte),
            b'{' => self.single(TokenType::LeftBrace, byte),
            b'}' => self.single(TokenType::RightBrace, byte),

            // The run readers stop on the first byte outside the run, so
            // no extra advance follows them.
            b if is_letter(b) => {
                let literal = self.read_while(is_letter)?;
                Token::new(lookup_ident(&literal), literal)
            }
            b if is_digit(b) => Token::new(TokenType::Int, self.read_while(is_digit)?),

            _ => self.single(TokenType::Illegal, byte),
        };

        trace!(kind = %token.token_type, literal = %token.literal, "token");
        Ok(token)
    }

    /// Drain the lexer, returning every token including the trailing `Eof`
    pub fn tokenize(&mut self) -> MonkeyResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.is_eof();
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    /// Emit a one-byte token and step past it
    fn single(&mut self, token_type: TokenType, byte: u8) -> Token {
        // The token is complete; a fault while stepping past it is held
        // for the next call.
        if let Err(err) = self.advance() {
            self.fault = Some(err);
        }
        Token::new(token_type, char::from(byte).to_string())
    }

    /// Consume the maximal run of bytes accepted by `accept`
    fn read_while(&mut self, accept: fn(u8) -> bool) -> MonkeyResult<String> {
        let mut literal = String::new();
        while let Some(byte) = self.current.filter(|&b| accept(b)) {
            literal.push(char::from(byte));
            self.advance()?;
        }
        Ok(literal)
    }

    fn skip_whitespace(&mut self) -> MonkeyResult<()> {
        while matches!(self.current, Some(b) if is_whitespace(b)) {
            self.advance()?;
        }
        Ok(())
    }

    /// Move the cursor to the next byte, refilling the buffer when empty
    fn advance(&mut self) -> MonkeyResult<()> {
        if self.exhausted {
            return Ok(());
        }

        if self.pos == self.filled {
            match self.refill() {
                Ok(0) => {
                    self.exhaust();
                    return Ok(());
                }
                Ok(_) => {}
                Err(err) => {
                    self.exhaust();
                    return Err(err);
                }
            }
        }

        self.current = Some(self.buffer[self.pos]);
        self.pos += 1;
        Ok(())
    }

    /// Fill the (empty) buffer with up to one chunk from the source
    ///
    /// Short reads are retried until the chunk is full or the source reports
    /// end-of-stream. Returns the number of bytes now pending.
    fn refill(&mut self) -> MonkeyResult<usize> {
        debug_assert_eq!(self.pos, self.filled, "refill with pending bytes");
        self.pos = 0;
        self.filled = 0;

        if let Some(err) = self.fault.take() {
            return Err(err);
        }
        if self.source_drained {
            return Ok(0);
        }

        while self.filled < self.buffer.len() {
            match self.source.read(&mut self.buffer[self.filled..]) {
                Ok(0) => {
                    self.source_drained = true;
                    break;
                }
                Ok(n) => self.filled += n,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => {
                    warn!(error = %err, buffered = self.filled, "byte source fault");
                    let fault = MonkeyError::source_fault(err);
                    if self.filled == 0 {
                        return Err(fault);
                    }
                    // Lex what already arrived; the fault follows it.
                    self.fault = Some(fault);
                    break;
                }
            }
        }

        debug!(bytes = self.filled, drained = self.source_drained, "refilled buffer");
        Ok(self.filled)
    }

    fn exhaust(&mut self) {
        if !self.exhausted {
            debug!("byte source exhausted");
        }
        self.exhausted = true;
        self.current = None;
    }
}

impl<R: Read> Iterator for Lexer<R> {
    type Item = MonkeyResult<Token>;

    /// Yields tokens up to, but not including, `Eof`
    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(token) if token.is_eof() => None,
            result => Some(result),
        }
    }
}

impl<R: Read> FusedIterator for Lexer<R> {}

fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

fn is_letter(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}
