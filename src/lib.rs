//! # whilst
//!
//! whilst is an interpreter for the WHILE language, a minimal imperative
//! language over natural-number registers. It tokenizes a textual program,
//! builds a nested statement tree by recursive descent, and walks that tree
//! against a sparse register store, producing the final value of register
//! `x0`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::ParseError, interpreter::machine::Machine};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` enum and the `Program` type that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the machine.
///
/// # Responsibilities
/// - Defines statement types for all language constructs.
/// - Owns loop bodies as strict subtrees with no sharing.
/// - Renders the canonical textual form of a program, such that printing
///   and parsing are inverse up to whitespace.
pub mod ast;
/// Provides the error types raised while reading a program.
///
/// This module defines all errors that can be raised during lexing or
/// parsing. Evaluation is total, so there is no runtime counterpart: once a
/// program parses, running it cannot fail.
///
/// # Responsibilities
/// - Defines the error enum for all failure modes of the reading pipeline.
/// - Carries the offending remaining text for lexical errors.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of program execution.
///
/// This module ties together lexing, parsing, and the register machine to
/// provide a complete runtime for WHILE programs. It exposes the stages
/// individually so callers can parse, print, and run programs separately.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, and machine.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Parses and runs a program, returning the final value of register `x0`.
///
/// The `inputs` slice is pre-loaded into registers `x1`, `x2`, … in order
/// before execution. Every other register, including `x0`, starts at zero.
///
/// # Errors
/// Returns a [`ParseError`] if the source cannot be tokenized or if loop
/// markers do not pair up.
///
/// # Examples
/// ```
/// use whilst::execute;
///
/// // x1 is pre-loaded with 4, so x0 becomes 4 + 3.
/// let result = execute("x0 := x1 + 3;", &[4]).unwrap();
/// assert_eq!(result, 7);
///
/// // Count x1 down to zero, accumulating into x0.
/// let source = "
///     while (x1 > 0) do
///         x0 := x0 + 1;
///         x1 := x1 - 1;
///     end;
/// ";
/// assert_eq!(execute(source, &[5]).unwrap(), 5);
/// ```
pub fn execute(source: &str, inputs: &[u64]) -> Result<u64, ParseError> {
    let program = interpreter::parser::parse(source)?;

    let mut machine = Machine::new();
    for (index, value) in (1..).zip(inputs) {
        machine.write(index, *value);
    }

    Ok(machine.run(&program))
}
