use ariadne::Source;
use rpn_error::Error as BuildError;
use rustyline::error::ReadlineError;
use std::io;

/// Errors that can end the processing of a line, or of the whole input.
#[derive(Debug)]
pub enum Error {
    /// An error that occurred while building an expression tree.
    BuildError(BuildError),

    /// An error that occurred while reading input from a file or stdin.
    IoError(io::Error),

    /// An error that occurred in the interactive line editor.
    ReadlineError(ReadlineError),
}

impl Error {
    /// Report this [`Error`] to stderr. Build errors are rendered against `input`, the line that
    /// failed to build.
    pub fn report_to_stderr(&self, input: &str) {
        match self {
            Self::BuildError(err) => {
                let report = err.build_report("input");
                if let Err(io_err) = report.eprint(("input", Source::from(input))) {
                    eprintln!("{}", io_err);
                }
            },
            Self::IoError(err) => eprintln!("{}", err),
            Self::ReadlineError(err) => eprintln!("{}", err),
        }
    }
}

impl From<BuildError> for Error {
    fn from(err: BuildError) -> Self {
        Self::BuildError(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::IoError(err)
    }
}

impl From<ReadlineError> for Error {
    fn from(err: ReadlineError) -> Self {
        Self::ReadlineError(err)
    }
}
