use super::token::{Token, TokenKind};

pub struct Scanner<'a> {
    source: &'a str,
    iter: std::str::CharIndices<'a>,
    lookahead: Option<(usize, char)>,
    start_offset: usize,
    curr_offset: usize,
    curr_line: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut iter = source.char_indices();
        let lookahead = iter.next();

        Scanner {
            source,
            iter,
            lookahead,
            start_offset: 0,
            curr_offset: 0,
            curr_line: 1,
        }
    }

    pub fn scan_token(&mut self) -> Token<'a> {
        self.skip_whitespace();

        self.start_offset = self.curr_offset;

        let Some(c) = self.advance() else {
            return self.make_token(TokenKind::Eof);
        };

        match c {
            '\n' => {
                // the newline token belongs to the line it ends
                let token = self.make_token(TokenKind::Newline);
                self.curr_line += 1;

                token
            }
            '"' => self.scan_string(),
            _ => self.scan_word(),
        }
    }

    fn advance(&mut self) -> Option<char> {
        let (offset, c) = self.lookahead?;

        self.lookahead = self.iter.next();
        self.curr_offset = offset + c.len_utf8();

        Some(c)
    }

    fn peek(&self) -> Option<char> {
        self.lookahead.map(|(_, c)| c)
    }

    fn scan_string(&mut self) -> Token<'a> {
        loop {
            match self.peek() {
                Some('"') => {
                    self.advance();

                    return self.make_token(TokenKind::String);
                }
                Some('\n') | None => return self.make_error_token("Unterminated string"),
                Some(_) => {
                    self.advance();
                }
            }
        }
    }

    fn scan_word(&mut self) -> Token<'a> {
        while let Some(c) = self.peek() {
            if Self::ends_word(c) {
                break;
            }

            self.advance();
        }

        self.make_token(self.resolve_word_kind())
    }

    fn resolve_word_kind(&self) -> TokenKind {
        match &self.source[self.start_offset..self.curr_offset] {
            "table" => TokenKind::Table,
            "insert" => TokenKind::Insert,
            "search" => TokenKind::Search,
            "print" => TokenKind::Print,
            _ => TokenKind::Word,
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            match c {
                '\n' => break,
                '#' => {
                    // consume until end of line
                    while !matches!(self.peek(), Some('\n') | None) {
                        self.advance();
                    }
                }
                c if c.is_whitespace() => {
                    self.advance();
                }
                _ => break,
            }
        }
    }

    fn make_token(&self, kind: TokenKind) -> Token<'a> {
        Token {
            kind,
            lexeme: &self.source[self.start_offset..self.curr_offset],
            line: self.curr_line,
        }
    }

    fn make_error_token(&self, err: &'static str) -> Token<'a> {
        Token {
            kind: TokenKind::Error,
            lexeme: err,
            line: self.curr_line,
        }
    }

    fn ends_word(c: char) -> bool {
        c.is_whitespace() || c == '"' || c == '#'
    }
}
