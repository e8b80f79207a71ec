//! A tiny interactive command interpreter.
//!
//! This crate reads one line of text at a time, turns it into a structured
//! command, and either executes it in-process (the `cd` and `exit` built-ins)
//! or spawns it as an external program, optionally with its standard
//! input/output redirected to files via `<`, `>` and `>>`. The token language
//! is deliberately flat: no quoting, no escaping, no pipelines, no job
//! control.
//!
//! The main entry point is [`Interpreter`], which owns the session state and
//! dispatches parsed commands through a set of pluggable factories. The
//! public modules [`parser`] and [`env`] expose the parsed command record and
//! the session environment for embedding callers and tests.

mod builtin;
pub mod command;
pub mod env;
mod external;
mod interpreter;
pub mod lexer;
pub mod parser;

/// Just a convenient re-export of the interactive command runner.
///
/// See [`Interpreter`] for the high-level API and examples.
pub use interpreter::Interpreter;
