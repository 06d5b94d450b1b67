#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Name of the report file written in the working directory at the end of a
/// run
pub const OUTPUT_FILE: &str = "ex5data_out.txt";

/// Text shown when asking for the input file name
pub const INPUT_PROMPT: &str = "Input file name (include extension) : ";

/// Text shown when the requested input file does not exist
pub const INCORRECT_FILE_NAME: &str = "Incorrect file name!";

/// How many file names the user may enter before the run is abandoned
pub const DEFAULT_PROMPT_ATTEMPTS: usize = 5;

/// Any exam or coursework mark below this fails the student outright
pub const COMPONENT_PASS_MARK: f64 = 30.0;

/// Lowest overall mark for a first
pub const FIRST_CLASS_MARK: f64 = 70.0;

/// Lowest and highest overall mark for a second
pub const SECOND_CLASS_BAND: (f64, f64) = (50.0, 69.0);

/// Lowest and highest overall mark for a third
pub const THIRD_CLASS_BAND: (f64, f64) = (40.0, 49.0);

/// Upper end of the expected mark range; higher marks are accepted with a
/// warning
pub const MAX_EXPECTED_MARK: f64 = 100.0;
