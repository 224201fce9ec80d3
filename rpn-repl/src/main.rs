mod error;
mod line;

use error::Error;
use line::process_line;
use rpn_parser::TreeBuilder;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{fs::File, io::{self, BufRead, BufReader, IsTerminal, Write}, process::ExitCode};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: rpn-repl [--steps] [FILE]";

/// Command-line options.
#[derive(Debug, Default)]
struct Options {
    /// Print the simplification steps after each simplified expression.
    steps: bool,

    /// Read expressions from this file instead of stdin.
    file: Option<String>,
}

impl Options {
    fn parse(args: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut options = Self::default();
        for arg in args {
            match arg.as_str() {
                "--steps" => options.steps = true,
                flag if flag.starts_with('-') => return Err(format!("unknown option `{}`", flag)),
                _ if options.file.is_some() => return Err(format!("unexpected argument `{}`", arg)),
                _ => options.file = Some(arg),
            }
        }
        Ok(options)
    }
}

/// Builds, simplifies, and prints a single line of input. Diagnostics go to stderr.
fn eval_line(builder: &mut TreeBuilder, input: &str, out: &mut impl Write, steps: bool) -> io::Result<()> {
    let line = process_line(builder, input);
    line.write_to(out, steps)?;
    line.report_error();
    Ok(())
}

/// Processes every line of the reader, in order, writing the output to `out`.
fn eval_lines(reader: impl BufRead, out: &mut impl Write, steps: bool) -> Result<(), Error> {
    let mut builder = TreeBuilder::new();
    for input in reader.lines() {
        eval_line(&mut builder, &input?, out, steps)?;
    }
    Ok(())
}

/// Reads lines interactively until end of input or interruption.
fn repl(steps: bool) -> Result<(), Error> {
    let mut rl = DefaultEditor::new()?;
    let mut builder = TreeBuilder::new();

    loop {
        let input = match rl.readline("> ") {
            Ok(input) => input,
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(()),
            Err(err) => return Err(err.into()),
        };

        if !input.trim().is_empty() {
            rl.add_history_entry(&input)?;
        }

        eval_line(&mut builder, &input, &mut io::stdout().lock(), steps)?;
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let options = match Options::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("{}\n{}", msg, USAGE);
            return ExitCode::FAILURE;
        },
    };

    let result = if let Some(filename) = &options.file {
        File::open(filename)
            .map_err(Error::from)
            .and_then(|file| eval_lines(BufReader::new(file), &mut io::stdout().lock(), options.steps))
    } else if !io::stdin().is_terminal() {
        eval_lines(io::stdin().lock(), &mut io::stdout().lock(), options.steps)
    } else {
        repl(options.steps)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            err.report_to_stderr("");
            ExitCode::FAILURE
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn parse(args: &[&str]) -> Result<Options, String> {
        Options::parse(args.iter().map(|arg| arg.to_string()))
    }

    #[test]
    fn no_arguments() {
        let options = parse(&[]).unwrap();
        assert!(!options.steps);
        assert_eq!(options.file, None);
    }

    #[test]
    fn steps_and_file() {
        let options = parse(&["--steps", "input.txt"]).unwrap();
        assert!(options.steps);
        assert_eq!(options.file.as_deref(), Some("input.txt"));

        let options = parse(&["input.txt", "--steps"]).unwrap();
        assert!(options.steps);
        assert_eq!(options.file.as_deref(), Some("input.txt"));
    }

    #[test]
    fn bad_arguments() {
        assert!(parse(&["--verbose"]).is_err());
        assert!(parse(&["a.txt", "b.txt"]).is_err());
    }

    #[test]
    fn lines_are_processed_in_order() {
        let input = "# header\nx 0 +\n\nx y\n3 4 *\n";
        let mut out = Vec::new();
        eval_lines(input.as_bytes(), &mut out, false).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), [
            "# header",
            "Postfix: x 0 +",
            "Infix: x+0",
            "Simplified: x",
            "",
            "Postfix: x y",
            "Postfix: 3 4 *",
            "Infix: 3*4",
            "Simplified: 12",
            "",
        ].join("\n"));
    }

    #[test]
    fn steps_follow_each_simplified_line() {
        let input = "0 x -\nx 1 *\n";
        let mut out = Vec::new();
        eval_lines(input.as_bytes(), &mut out, true).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), [
            "Postfix: 0 x -",
            "Infix: 0-x",
            "Simplified: -x",
            "Steps: 0-a = -a",
            "Postfix: x 1 *",
            "Infix: x*1",
            "Simplified: x",
            "Steps: 1*a = a",
            "",
        ].join("\n"));
    }
}
