use std::{
    borrow::Cow,
    io::{self, BufRead, Write},
};

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::eval_program,
        lexer::Lexer,
        parser::Parser,
    },
};

/// Greeting printed when an interactive session starts.
pub const BANNER: &str = "Enter in Fork Language!";
/// Prompt printed before every line in an interactive session.
pub const PROMPT: &str = ">> ";

/// How a session reads and reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Print the banner and a prompt before each line.
    pub interactive: bool,
    /// Print each line's tokens instead of evaluating it.
    pub dump_tokens: bool,
}

/// Runs the read-eval-print loop until `input` is exhausted.
///
/// Every line is parsed and evaluated on its own. Parse errors are reported
/// under a `parse error:` header, one tab-indented line per error, and the
/// line is not evaluated. A line that produces a value prints it; a line
/// that produces nothing prints nothing. Bytes that are not valid UTF-8 are
/// lexed as illegal input and do not end the session.
///
/// # Errors
/// Propagates any I/O error from `input` or `output`.
///
/// # Example
/// ```
/// use forklang::repl::{Options, start};
///
/// let mut output = Vec::new();
/// start("1 + 2\nlet x 5\n".as_bytes(), &mut output, Options::default()).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(),
///            "3\nparse error:\n\texpected next token to be =, got INT instead\n");
/// ```
pub fn start<R: BufRead, W: Write>(mut input: R,
                                   output: &mut W,
                                   options: Options)
                                   -> io::Result<()> {
    if options.interactive {
        writeln!(output, "{BANNER}")?;
    }

    let mut buffer = Vec::new();
    loop {
        if options.interactive {
            write!(output, "{PROMPT}")?;
            output.flush()?;
        }

        buffer.clear();
        if input.read_until(b'\n', &mut buffer)? == 0 {
            return Ok(());
        }
        let line = decode_line(&buffer);

        if options.dump_tokens {
            print_tokens(output, &line)?;
        } else {
            eval_line(output, &line)?;
        }
    }
}

/// Strips the line terminator and replaces invalid UTF-8 with `U+FFFD`,
/// which the lexer reports as illegal input.
fn decode_line(buffer: &[u8]) -> Cow<'_, str> {
    let line = buffer.strip_suffix(b"\n").unwrap_or(buffer);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line)
}

fn eval_line<W: Write>(output: &mut W, line: &str) -> io::Result<()> {
    let mut parser = Parser::new(Lexer::new(line));
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        return print_parser_errors(output, parser.errors());
    }

    match eval_program(&program) {
        Ok(Some(value)) => writeln!(output, "{value}"),
        Ok(None) => Ok(()),
        Err(error) => {
            log::debug!("evaluation of {program} failed: {error:?}");
            writeln!(output, "runtime error:\n\t{error}")
        },
    }
}

fn print_parser_errors<W: Write>(output: &mut W, errors: &[ParseError]) -> io::Result<()> {
    writeln!(output, "parse error:")?;
    for error in errors {
        writeln!(output, "\t{error}")?;
    }
    Ok(())
}

fn print_tokens<W: Write>(output: &mut W, line: &str) -> io::Result<()> {
    for token in Lexer::new(line) {
        writeln!(output, "{token}")?;
    }
    Ok(())
}
