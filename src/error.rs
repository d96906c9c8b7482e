#[derive(Debug)]
/// Represents all errors that can occur while turning source text into a
/// program tree.
///
/// Evaluation itself is total: once a program parses, running it cannot
/// fail, so parsing is the only error surface of the interpreter.
pub enum ParseError {
    /// No token pattern matched the remaining input.
    UnrecognizedInput {
        /// The unconsumed input, starting at the point of failure.
        text: String,
    },
    /// An `end;` appeared at the top level, outside any loop.
    UnexpectedLoopEnd,
    /// A `while ... do` was never closed by a matching `end;`.
    UnterminatedLoop,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedInput { text } => {
                write!(f, "Syntax error: no token matches the remaining input: {text}")
            },

            Self::UnexpectedLoopEnd => {
                write!(f, "Syntax error: found 'end;' without a matching 'while'.")
            },

            Self::UnterminatedLoop => {
                write!(f, "Syntax error: a 'while' block is never closed by 'end;'.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
