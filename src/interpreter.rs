/// The lexer module tokenizes normalized source code.
///
/// The lexer first normalizes the raw text (comment lines removed, all
/// whitespace stripped, everything lowercased) and then produces a lazy
/// stream of tokens, each covering one complete statement-level construct.
/// This is the first stage of interpretation.
///
/// # Responsibilities
/// - Normalizes raw program text into the form the token grammar is defined
///   over.
/// - Matches the loop-head, assignment, and loop-end patterns against the
///   start of the remaining input, one token at a time.
/// - Surfaces unmatched input so the parser can report a lexical error with
///   the offending text.
pub mod lexer;
/// The machine module owns the register store and executes programs.
///
/// The machine walks the statement tree produced by the parser, mutating its
/// sparse register store as assignments and loops execute, and yields the
/// final value of register 0. It is the core execution engine of the
/// interpreter.
///
/// # Responsibilities
/// - Provides zero-default register reads and infallible register writes.
/// - Executes statements strictly in order, re-running loop bodies while
///   their test register stays positive.
/// - Returns the value of register 0 once the program finishes.
pub mod machine;
/// The parser module builds the statement tree from the token stream.
///
/// The parser pulls tokens one at a time and assembles them into nested
/// blocks by recursive descent, one call frame per loop nesting level. Block
/// terminators are consumed structurally and never become tree nodes.
///
/// # Responsibilities
/// - Converts the token stream into `Statement` nodes in source order.
/// - Recurses into loop bodies until the matching terminator is found.
/// - Rejects unpaired loop markers as hard parse errors.
pub mod parser;
