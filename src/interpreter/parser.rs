use logos::{Lexer, Logos};

use crate::{
    ast::{Program, Statement},
    error::ParseError,
    interpreter::lexer::{Token, preprocess},
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses raw source text into a program tree.
///
/// This is the entry point for parsing. The source is normalized first,
/// then tokenized lazily while the statement tree is built by recursive
/// descent: one call frame per loop nesting level, all sharing a single
/// pull-based token cursor.
///
/// # Parameters
/// - `source`: Raw program text.
///
/// # Returns
/// The parsed [`Program`].
///
/// # Errors
/// Returns a [`ParseError`] if the input contains text no token pattern
/// matches, an `end;` with no open loop, or a loop that is never closed.
pub fn parse(source: &str) -> ParseResult<Program> {
    let code = preprocess(source);
    let mut lexer = Token::lexer(&code);

    let statements = parse_block(&mut lexer, false)?;
    Ok(Program { statements })
}

/// Parses one block of statements from the shared token cursor.
///
/// Called once for the top level and recursively for each loop body. A
/// recursive call consumes tokens up to and including its own matching
/// `end;`, which terminates the block without ever becoming a tree node.
/// Exhaustion of the token stream terminates the top-level block.
///
/// # Parameters
/// - `lexer`: The shared token cursor, advanced as tokens are consumed.
/// - `nested`: Whether this block is a loop body rather than the top level.
///
/// # Returns
/// The statements of the block, in source order.
///
/// # Errors
/// - [`ParseError::UnrecognizedInput`] if the lexer hits text it cannot
///   match, carrying everything from the failure point onwards.
/// - [`ParseError::UnexpectedLoopEnd`] for an `end;` at the top level.
/// - [`ParseError::UnterminatedLoop`] if the input ends inside a loop body.
fn parse_block(lexer: &mut Lexer<'_, Token>, nested: bool) -> ParseResult<Vec<Statement>> {
    let mut statements = Vec::new();

    loop {
        match lexer.next() {
            Some(Ok(Token::Addition(operands))) => {
                statements.push(Statement::Addition { target:   operands.target,
                                                      source:   operands.source,
                                                      constant: operands.constant, });
            },

            Some(Ok(Token::Subtraction(operands))) => {
                statements.push(Statement::Subtraction { target:   operands.target,
                                                         source:   operands.source,
                                                         constant: operands.constant, });
            },

            Some(Ok(Token::LoopOpen(test))) => {
                let body = parse_block(lexer, true)?;
                statements.push(Statement::Loop { test, body });
            },

            Some(Ok(Token::LoopClose)) => {
                if nested {
                    return Ok(statements);
                }
                return Err(ParseError::UnexpectedLoopEnd);
            },

            Some(Err(())) => {
                return Err(ParseError::UnrecognizedInput { text: format!("{}{}",
                                                                         lexer.slice(),
                                                                         lexer.remainder()), });
            },

            None => {
                if nested {
                    return Err(ParseError::UnterminatedLoop);
                }
                return Ok(statements);
            },
        }
    }
}
