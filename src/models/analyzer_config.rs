use std::path::PathBuf;

use crate::constants::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_TOP_WORD_COUNT};

/// Configuration for a single analyzer run.
#[derive(Clone, Debug)]
pub struct AnalyzerConfig {
    /// Path of the text document to analyze.
    pub input_path: PathBuf,
    /// Path of the generated report file.
    pub output_path: PathBuf,
    /// Number of entries in the top-words report section.
    pub top_word_count: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            top_word_count: DEFAULT_TOP_WORD_COUNT,
        }
    }
}
