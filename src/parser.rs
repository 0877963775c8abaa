use super::{
    scanner::Scanner,
    token::{Token, TokenKind},
};
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementKind<'a> {
    Table { capacity: usize },
    Insert { name: &'a str, number: &'a str },
    Search { name: &'a str },
    Print,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement<'a> {
    pub kind: StatementKind<'a>,
    pub line: usize,
}

pub struct Parser<'a, 'e, W: Write> {
    scanner: Scanner<'a>,
    curr_token: Token<'a>,
    prev_token: Token<'a>,
    had_error: bool,
    panic_mode: bool,
    err_stream: &'e mut W,
}

impl<'a, 'e, W: Write> Parser<'a, 'e, W> {
    pub fn new(source: &'a str, err_stream: &'e mut W) -> Self {
        // initialize with dummy tokens
        let dummy = Token {
            kind: TokenKind::Eof,
            lexeme: "",
            line: 0,
        };

        Parser {
            scanner: Scanner::new(source),
            curr_token: dummy,
            prev_token: dummy,
            had_error: false,
            panic_mode: false,
            err_stream,
        }
    }

    /// Parses the whole script, returns `None` if any error was reported
    pub fn parse(mut self) -> Option<Vec<Statement<'a>>> {
        let mut statements = Vec::new();
        let mut first = true;

        self.advance();

        loop {
            if self.panic_mode {
                self.synchronize();
            }

            match self.curr_token.kind {
                TokenKind::Eof => break,
                TokenKind::Newline => {
                    self.advance();
                    continue;
                }
                _ => {}
            }

            if let Some(statement) = self.statement(first) {
                statements.push(statement);
            }
            first = false;
        }

        if self.had_error {
            None
        } else {
            Some(statements)
        }
    }

    fn statement(&mut self, first: bool) -> Option<Statement<'a>> {
        self.advance();

        let keyword = self.prev_token;
        let kind = match keyword.kind {
            TokenKind::Table => {
                if !first {
                    self.error_at(keyword, "'table' must be the first statement");
                    return None;
                }

                StatementKind::Table {
                    capacity: self.capacity()?,
                }
            }
            TokenKind::Insert => {
                let name = self.text("Expected a name")?;
                let number = self.text("Expected a number")?;

                StatementKind::Insert { name, number }
            }
            TokenKind::Search => StatementKind::Search {
                name: self.text("Expected a name")?,
            },
            TokenKind::Print => StatementKind::Print,
            _ => {
                self.error_at(keyword, "Expected a command");
                return None;
            }
        };

        self.end_of_statement()?;

        Some(Statement {
            kind,
            line: keyword.line,
        })
    }

    fn text(&mut self, err: &str) -> Option<&'a str> {
        match self.curr_token.kind {
            TokenKind::Word | TokenKind::String => {
                self.advance();

                Some(self.prev_token.text())
            }
            _ => {
                self.error_at(self.curr_token, err);
                None
            }
        }
    }

    fn capacity(&mut self) -> Option<usize> {
        let lexeme = self.curr_token.lexeme;

        // ASCII digits only, no sign
        if self.curr_token.kind == TokenKind::Word && lexeme.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(capacity) = lexeme.parse::<usize>() {
                self.advance();

                return Some(capacity);
            }
        }

        self.error_at(self.curr_token, "Expected a capacity");
        None
    }

    fn end_of_statement(&mut self) -> Option<()> {
        match self.curr_token.kind {
            TokenKind::Newline | TokenKind::Eof => Some(()),
            _ => {
                self.error_at(self.curr_token, "Expected end of line");
                None
            }
        }
    }

    fn advance(&mut self) {
        self.prev_token = self.curr_token;

        loop {
            match self.scanner.scan_token() {
                token @ Token {
                    kind: TokenKind::Error,
                    ..
                } => self.error_at(token, token.lexeme),
                token => {
                    self.curr_token = token;
                    break;
                }
            }
        }
    }

    // skip the rest of the line in error
    fn synchronize(&mut self) {
        self.panic_mode = false;

        while !matches!(self.curr_token.kind, TokenKind::Newline | TokenKind::Eof) {
            self.advance();
        }
    }

    fn error_at(&mut self, token: Token<'a>, err: &str) {
        if self.panic_mode {
            return;
        }

        self.panic_mode = true;
        self.had_error = true;

        let location = match token.kind {
            TokenKind::Eof => " at end of file".to_string(),
            TokenKind::Newline => " at end of line".to_string(),
            TokenKind::Error => String::new(),
            _ => format!(" at '{}'", token.lexeme),
        };

        log::debug!("parse error on line {}: {err}", token.line);
        let _ = writeln!(self.err_stream, "[line {}] Error{location}: {err}", token.line);
    }
}
