/// Default path of the text document to analyze.
pub const DEFAULT_INPUT_PATH: &str = "textfile.txt";

/// Default path of the generated report file.
pub const DEFAULT_OUTPUT_PATH: &str = "word_frequencies.txt";

/// Default number of entries in the top-words report section.
pub const DEFAULT_TOP_WORD_COUNT: usize = 10;
