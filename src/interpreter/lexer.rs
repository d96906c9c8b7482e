use logos::Logos;

/// Normalizes raw source text for tokenization.
///
/// Lines whose first character is `#` are discarded entirely, the remaining
/// lines are concatenated, all whitespace is removed, and the result is
/// lowercased. The token grammar is defined over this normalized form only.
///
/// # Parameters
/// - `source`: Raw program text, as read from a file.
///
/// # Returns
/// The normalized text the lexer runs on.
#[must_use]
pub fn preprocess(source: &str) -> String {
    let code: String = source.lines()
                             .filter(|line| !line.starts_with('#'))
                             .collect();

    code.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// The register indices and constant captured from an assignment token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operands {
    /// Index of the register being written.
    pub target:   u64,
    /// Index of the register being read.
    pub source:   u64,
    /// The literal operand of the assignment.
    pub constant: u64,
}

/// Represents a lexical token in the normalized source input.
///
/// Each token covers one complete statement-level construct. The patterns
/// are compiled once into the lexer's state machine; the callbacks parse the
/// register indices and constants back out of the matched slice. Tokens are
/// produced lazily, one pull at a time, and running out of input cleanly
/// ends the stream.
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `while(x<digits>>0)do`, carrying the test register index.
    #[regex(r"while\(x[0-9]+>0\)do", parse_loop_head)]
    LoopOpen(u64),
    /// `x<digits>:=x<digits>+<digits>;`
    #[regex(r"x[0-9]+:=x[0-9]+\+[0-9]+;", parse_operands)]
    Addition(Operands),
    /// `x<digits>:=x<digits>-<digits>;`
    #[regex(r"x[0-9]+:=x[0-9]+-[0-9]+;", parse_operands)]
    Subtraction(Operands),
    /// `end;`
    #[token("end;")]
    LoopClose,
}

/// Extracts the test register index from a `while(x<n>>0)do` slice.
fn parse_loop_head(lex: &logos::Lexer<Token>) -> Option<u64> {
    lex.slice()
       .strip_prefix("while(x")?
       .strip_suffix(">0)do")?
       .parse()
       .ok()
}

/// Extracts the two register indices and the constant from an assignment
/// slice of the form `x<target>:=x<source><op><constant>;`.
fn parse_operands(lex: &logos::Lexer<Token>) -> Option<Operands> {
    let (target, rest) = take_number(lex.slice().strip_prefix('x')?)?;
    let (source, rest) = take_number(rest.strip_prefix(":=x")?)?;
    let (constant, rest) = take_number(rest.strip_prefix(['+', '-'])?)?;

    if rest != ";" {
        return None;
    }

    Some(Operands { target,
                    source,
                    constant })
}

/// Splits a leading run of digits off `text` and parses it.
///
/// Returns `None` when there are no leading digits or the literal does not
/// fit in a `u64`.
fn take_number(text: &str) -> Option<(u64, &str)> {
    let end = text.find(|c: char| !c.is_ascii_digit()).unwrap_or(text.len());
    let value = text[..end].parse().ok()?;

    Some((value, &text[end..]))
}
