pub mod contact;
pub mod hash;
pub mod parser;
pub mod scanner;
pub mod session;
pub mod table;
pub mod token;

use std::fs;
use std::io::Write;
use std::path::Path;

pub use contact::Contact;
pub use table::{ContactTable, TableError};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RunResult {
    Ok,
    ParseError,
    RuntimeError,
}

/// Runs the contact script at `path`
pub fn run<P, T, U>(path: P, output_stream: &mut T, err_stream: &mut U) -> RunResult
where
    P: AsRef<Path>,
    T: Write,
    U: Write,
{
    match fs::read_to_string(path.as_ref()) {
        Ok(source) => run_source(&source, output_stream, err_stream),
        Err(err) => {
            log::error!("could not read {}: {err}", path.as_ref().display());
            let _ = writeln!(err_stream, "{err}");

            RunResult::RuntimeError
        }
    }
}

pub fn run_source<T: Write, U: Write>(
    source: &str,
    output_stream: &mut T,
    err_stream: &mut U,
) -> RunResult {
    let Some(statements) = parser::Parser::new(source, err_stream).parse() else {
        return RunResult::ParseError;
    };

    let mut session = session::Session::new(output_stream, err_stream);

    match session.run(&statements) {
        Ok(()) => RunResult::Ok,
        Err(err) => {
            log::error!("{err}");

            RunResult::RuntimeError
        }
    }
}
