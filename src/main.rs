#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # classmark
//!
//! Reads a marks file, grades every student, writes the sorted results to
//! `ex5data_out.txt` and prints how the grades are distributed.
//!
//! ```text
//! 3 50
//! 101 80 60
//! 102 20 90
//! 103 50 50
//! ```
//!
//! The first line holds the number of students and the coursework weight as a
//! percentage; every other line holds a registration number, an exam mark and
//! a coursework mark.

use std::{io, path::PathBuf};

use anyhow::Result;
use bpaf::*;
use classmark::{
    config::RunOptions,
    constants::{DEFAULT_PROMPT_ATTEMPTS, OUTPUT_FILE},
    input::TerminalPrompt,
};
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Parsed command line.
#[derive(Debug, Clone)]
struct Cli {
    /// Log at debug level
    verbose: bool,
    /// Options for the run itself
    options: RunOptions,
}

/// Parse the command line arguments and return a `Cli`
fn options() -> Cli {
    /// parses the marks file name
    fn f() -> impl Parser<Option<PathBuf>> {
        positional::<PathBuf>("FILE")
            .help("Marks file to grade; asks for one when omitted")
            .optional()
    }

    /// parses how many file names may be tried
    fn a() -> impl Parser<usize> {
        long("attempts")
            .help("How many file names to ask for before giving up")
            .argument::<usize>("N")
            .guard(|n| *n > 0, "attempts must be at least 1")
            .fallback(DEFAULT_PROMPT_ATTEMPTS)
            .display_fallback()
    }

    let json = long("json")
        .help("Print the grade summary as JSON")
        .switch();
    let verbose = short('v')
        .long("verbose")
        .help("Log every stage of the run")
        .switch();

    let input = f();
    let attempts = a();
    let options = construct!(input, attempts, json).map(|(input, attempts, json)| RunOptions {
        input,
        output: PathBuf::from(OUTPUT_FILE),
        attempts,
        json,
    });

    construct!(Cli { verbose, options })
        .to_options()
        .descr("Grade a cohort from exam and coursework marks")
        .run()
}

fn main() -> Result<()> {
    let cli = options();

    let fmt = fmt::layer()
        .with_writer(io::stderr)
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let filter_layer = LevelFilter::from_level(level);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    let mut prompt = TerminalPrompt::stdio();
    classmark::run(&cli.options, &mut prompt, &mut io::stdout())?;

    Ok(())
}
