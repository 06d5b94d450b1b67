#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use peg::{error::ParseError, str::LineCol};

use crate::{
    constants::{INCORRECT_FILE_NAME, INPUT_PROMPT},
    grade::GradingError,
    parsers::parser,
    types::{CourseworkWeight, StudentMark},
};

/// An enum to represent possible errors while reading a marks file
#[derive(thiserror::Error, Debug)]
pub enum InputError {
    /// The first line is not `<count> <weight>`.
    #[error("Line {line}: expected `<student count> <coursework weight>`")]
    MalformedHeader {
        /// 1-based line number of the header.
        line:   usize,
        /// What the parser expected.
        #[source]
        source: ParseError<LineCol>,
    },
    /// A student line is not `<registration> <exam> <coursework>`.
    #[error("Line {line}: expected `<registration number> <exam mark> <coursework mark>`")]
    MalformedRecord {
        /// 1-based line number of the record.
        line:   usize,
        /// What the parser expected.
        #[source]
        source: ParseError<LineCol>,
    },
    /// The file has no header line at all.
    #[error("The marks file is empty")]
    Empty,
    /// The header announced a different number of students than the file
    /// holds.
    #[error("Expected {expected} student records but found {found}")]
    CountMismatch {
        /// Count from the header.
        expected: usize,
        /// Records actually present.
        found:    usize,
    },
    /// The header's coursework weight is out of range.
    #[error(transparent)]
    Grading(#[from] GradingError),
    /// The file could not be read.
    #[error("Could not read {}", path.display())]
    Io {
        /// Path that was being read.
        path:   PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
    /// Asking for a file name failed.
    #[error("Could not ask for an input file name")]
    Prompt(#[source] io::Error),
    /// Input ended before a readable file name was given.
    #[error("No input file name was given")]
    NoInput,
    /// Too many missing files were named.
    #[error("No readable input file after {0} attempts")]
    AttemptsExhausted(usize),
}

impl InputError {
    /// Whether this error means the named file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, InputError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Everything a marks file holds: the weighting and one mark per student.
#[derive(Debug, Clone, PartialEq)]
pub struct Marksheet {
    /// Coursework weight for the whole cohort.
    pub weight:  CourseworkWeight,
    /// Raw marks, in file order.
    pub records: Vec<StudentMark>,
}

impl Marksheet {
    /// Parses the contents of a marks file.
    ///
    /// The first non-blank line holds the student count and coursework weight;
    /// every later non-blank line holds one student. Blank lines are skipped
    /// and line numbers in errors count them.
    pub fn parse(text: &str) -> Result<Self, InputError> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l))
            .filter(|(_, l)| !l.trim().is_empty());

        let (line, header) = lines.next().ok_or(InputError::Empty)?;
        let (expected, weight) = parser::header(header)
            .map_err(|source| InputError::MalformedHeader { line, source })?;
        let weight = CourseworkWeight::new(weight)?;

        let records = lines
            .map(|(line, l)| {
                parser::record(l).map_err(|source| InputError::MalformedRecord { line, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if records.len() != expected {
            return Err(InputError::CountMismatch {
                expected,
                found: records.len(),
            });
        }

        Ok(Self { weight, records })
    }

    /// Reads and parses the marks file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| InputError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("{} opened successfully", path.display());

        Self::parse(&text)
    }
}

/// Source of input file names, so the retry loop can run without a terminal.
pub trait FileNamePrompt {
    /// Asks for a file name. `None` means there is nothing more to read.
    fn ask(&mut self) -> io::Result<Option<String>>;

    /// Tells the user that `name` does not exist.
    fn not_found(&mut self, name: &str) -> io::Result<()>;
}

/// Prompts on a writer and reads answers line by line from a reader.
pub struct TerminalPrompt<R, W> {
    /// Where answers come from.
    reader: R,
    /// Where prompts go.
    writer: W,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    /// Creates a prompt over any reader/writer pair.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl TerminalPrompt<io::StdinLock<'static>, io::Stdout> {
    /// Prompts on standard output and reads standard input.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> FileNamePrompt for TerminalPrompt<R, W> {
    fn ask(&mut self) -> io::Result<Option<String>> {
        write!(self.writer, "{INPUT_PROMPT}")?;
        self.writer.flush()?;

        let mut answer = String::new();
        if self.reader.read_line(&mut answer)? == 0 {
            return Ok(None);
        }
        Ok(Some(answer.trim().to_string()))
    }

    fn not_found(&mut self, _name: &str) -> io::Result<()> {
        writeln!(self.writer, "{INCORRECT_FILE_NAME}")
    }
}

/// Keeps asking for a file name until one can be read, at most `attempts`
/// times.
///
/// Only a missing file earns another attempt; any other read or parse failure
/// is returned immediately.
pub fn read_with_prompt(
    prompt: &mut impl FileNamePrompt,
    attempts: usize,
) -> Result<(PathBuf, Marksheet), InputError> {
    for attempt in 1..=attempts {
        let Some(name) = prompt.ask().map_err(InputError::Prompt)? else {
            return Err(InputError::NoInput);
        };

        match Marksheet::load(&name) {
            Ok(marksheet) => return Ok((PathBuf::from(name), marksheet)),
            Err(e) if e.is_not_found() || name.is_empty() => {
                tracing::warn!("Attempt {attempt}/{attempts}: `{name}` not found");
                prompt.not_found(&name).map_err(InputError::Prompt)?;
            }
            Err(e) => return Err(e),
        }
    }

    Err(InputError::AttemptsExhausted(attempts))
}
