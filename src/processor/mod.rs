//! The functional core: script text in, execution trace out.
//!
//! No I/O and no shared state; every call starts from a fresh cursor.
pub mod ast;
pub mod block;
pub mod cursor;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod script_parser;

use crate::model::{ExecutionResult, Options};
use interpreter::Interpreter;

/// Run a script with the default options (1000-step ceiling, emerald pen).
pub fn execute(script: &str) -> ExecutionResult {
    execute_with(script, &Options::default())
}

pub fn execute_with(script: &str, options: &Options) -> ExecutionResult {
    Interpreter::new(options).run(script)
}
