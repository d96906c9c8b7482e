use std::fmt;

/// An abstract syntax tree (AST) node representing a single statement.
///
/// `Statement` covers every construct of the language: the two assignment
/// forms and the loop. The block terminator `end;` is consumed by the parser
/// while building the tree and never appears as a node; a loop owns its body
/// outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// An additive assignment: `x<target> := x<source> + <constant>;`.
    Addition {
        /// Index of the register being written.
        target:   u64,
        /// Index of the register being read.
        source:   u64,
        /// The constant added to the source value.
        constant: u64,
    },
    /// A subtractive assignment: `x<target> := x<source> - <constant>;`.
    ///
    /// Subtraction saturates at zero; a register never holds a negative
    /// value. This is the language's only comparison primitive and the
    /// mechanism through which all control flow is expressed.
    Subtraction {
        /// Index of the register being written.
        target:   u64,
        /// Index of the register being read.
        source:   u64,
        /// The constant subtracted from the source value.
        constant: u64,
    },
    /// A loop: `while (x<test> > 0) do <body> end;`.
    ///
    /// The body runs repeatedly, in order, for as long as the test register
    /// holds a value greater than zero. The body may be empty, and loops may
    /// nest to arbitrary depth.
    Loop {
        /// Index of the register controlling iteration.
        test: u64,
        /// The statements making up the loop body.
        body: Vec<Statement>,
    },
}

/// A parsed program: an ordered sequence of top-level statements.
///
/// Created once by the parser and immutable afterwards. The tree is strict:
/// loop bodies are exclusively owned by their `Loop` node, with no sharing
/// and no cycles.
///
/// Printing a program with `Display` renders its canonical textual form,
/// which parses back to a structurally equal tree:
///
/// ```
/// use whilst::interpreter::parser;
///
/// let program = parser::parse("x0:=x1+2; while(x0>0)do x0:=x0-1; end;").unwrap();
/// let printed = program.to_string();
/// assert_eq!(parser::parse(&printed).unwrap(), program);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    /// The top-level statements, in source order.
    pub statements: Vec<Statement>,
}

impl Statement {
    /// Writes the statement at the given nesting depth, one line per
    /// assignment and one line each for a loop head, its body statements,
    /// and its terminator.
    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let pad = "    ".repeat(depth);
        match self {
            Self::Addition { target, source, constant } => {
                writeln!(f, "{pad}x{target} := x{source} + {constant};")
            },
            Self::Subtraction { target, source, constant } => {
                writeln!(f, "{pad}x{target} := x{source} - {constant};")
            },
            Self::Loop { test, body } => {
                writeln!(f, "{pad}while (x{test} > 0) do")?;
                for statement in body {
                    statement.write_indented(f, depth + 1)?;
                }
                writeln!(f, "{pad}end;")
            },
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            statement.write_indented(f, 0)?;
        }
        Ok(())
    }
}
