mod constants;
pub use constants::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_TOP_WORD_COUNT};
pub mod models;
pub use models::{
    render_frequency_report, render_length_report, render_top_words, AnalyzerConfig, Error,
    ReportWriter, TextAnalysis, Tokenizer,
};
pub mod types;
mod utils;
pub use types::{Token, TokenRef, WordFrequency, WordFrequencyMap, WordLength, WordLengthMap};
pub use utils::{count_word_frequencies, count_word_lengths, read_text_file, sort_frequencies};

use log::{debug, info};

#[cfg(doctest)]
mod readme_doctest {
    doc_comment::doctest!("../README.md");
}

/// Tokenizes `text` and aggregates word-frequency and word-length statistics
/// for it.
///
/// Pure over its input; file handling belongs to [`run`].
pub fn analyze_text(text: &str) -> TextAnalysis {
    let words = Tokenizer::word_parser().tokenize(text);

    TextAnalysis::from_words(&words)
}

/// Runs the full pipeline: read the configured input document, analyze it,
/// then emit the frequency, top-words, and word-length report sections to
/// standard output and to the configured report file.
///
/// The report file is only created after the input document has been read
/// successfully, so a missing input leaves no partial output behind.
pub fn run(config: &AnalyzerConfig) -> Result<(), Error> {
    let text = read_text_file(&config.input_path)?;
    debug!(
        "Read {} bytes from {}",
        text.len(),
        config.input_path.display()
    );

    let analysis = analyze_text(&text);
    info!(
        "Analyzed {} words ({} unique)",
        analysis.total_words, analysis.unique_words
    );

    let mut report_writer = ReportWriter::create(&config.output_path)?;
    report_writer.emit_section(&render_frequency_report(&analysis))?;
    report_writer.emit_section(&render_top_words(&analysis, config.top_word_count))?;
    report_writer.emit_section(&render_length_report(&analysis))?;
    report_writer.finish()?;

    println!(
        "Word frequencies and additional analyses have been saved to {}.",
        config.output_path.display()
    );

    Ok(())
}
