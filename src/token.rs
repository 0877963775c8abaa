#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    // literals
    Word,
    String,

    // keywords
    Table,
    Insert,
    Search,
    Print,

    Newline,
    Error,
    Eof,
}

#[derive(Debug, Clone, Copy)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub lexeme: &'a str,
    pub line: usize,
}

impl<'a> Token<'a> {
    /// The text a literal stands for, without surrounding quotes
    pub fn text(&self) -> &'a str {
        match self.kind {
            TokenKind::String => &self.lexeme[1..self.lexeme.len() - 1],
            _ => self.lexeme,
        }
    }
}
