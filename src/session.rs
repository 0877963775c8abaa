use super::{
    parser::{Statement, StatementKind},
    table::{ContactTable, TableError},
};
use std::io::{self, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Executes parsed statements against a single contact table
pub struct Session<'a, T: Write, U: Write> {
    table: ContactTable,
    output_stream: &'a mut T,
    err_stream: &'a mut U,
}

impl<'a, T: Write, U: Write> Session<'a, T, U> {
    pub fn new(output_stream: &'a mut T, err_stream: &'a mut U) -> Self {
        Session {
            table: ContactTable::default(),
            output_stream,
            err_stream,
        }
    }

    pub fn table(&self) -> &ContactTable {
        &self.table
    }

    pub fn run(&mut self, statements: &[Statement]) -> Result<(), RunError> {
        log::info!("running {} statement(s)", statements.len());

        for statement in statements {
            log::debug!("[line {}] {:?}", statement.line, statement.kind);

            if let Err(err) = self.execute(&statement.kind) {
                // the error stream may be as broken as the output stream
                let _ = self.runtime_error(&err, statement.line);

                return Err(err);
            }
        }

        log::info!("finished with {} contact(s)", self.table.len());

        Ok(())
    }

    fn execute(&mut self, kind: &StatementKind) -> Result<(), RunError> {
        match *kind {
            StatementKind::Table { capacity } => {
                self.table = ContactTable::new(capacity)?;
            }
            StatementKind::Insert { name, number } => {
                self.table.insert(name, number);
            }
            StatementKind::Search { name } => match self.table.search(name) {
                Some(contact) => writeln!(self.output_stream, "{contact}")?,
                None => writeln!(self.output_stream, "{name}: not found")?,
            },
            StatementKind::Print => {
                for slot in self.table.slots() {
                    writeln!(self.output_stream, "{slot}")?;
                }
            }
        }

        Ok(())
    }

    fn runtime_error(&mut self, err: &RunError, line: usize) -> io::Result<()> {
        writeln!(self.err_stream, "Runtime error: {err}")?;
        writeln!(self.err_stream, "[line {line}] in script")
    }
}
