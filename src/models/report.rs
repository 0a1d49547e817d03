use crate::models::TextAnalysis;
use crate::utils::sort_frequencies;

/// Renders the full word-frequency report section.
///
/// Emits the total and unique word counts followed by every ranked
/// `word: count` entry, highest count first.
pub fn render_frequency_report(analysis: &TextAnalysis) -> String {
    let mut out = String::new();

    out.push_str(&format!("Total Words: {}\n", analysis.total_words));
    out.push_str(&format!("Unique Words: {}\n", analysis.unique_words));
    out.push_str("Word Frequencies:\n");

    for (word, frequency) in sort_frequencies(&analysis.word_frequencies) {
        out.push_str(&format!("{}: {}\n", word, frequency));
    }

    out
}

/// Renders the top-words report section, truncated to `top_word_count`
/// ranked entries.
///
/// The header always names the requested count; when it exceeds the number
/// of distinct words, every entry is emitted.
pub fn render_top_words(analysis: &TextAnalysis, top_word_count: usize) -> String {
    let mut out = String::new();

    out.push_str(&format!("Top {} Words:\n", top_word_count));

    for (word, frequency) in sort_frequencies(&analysis.word_frequencies)
        .into_iter()
        .take(top_word_count)
    {
        out.push_str(&format!("{}: {}\n", word, frequency));
    }

    out
}

/// Renders the word-length report section, one `Length <len>: <count>` line
/// per distinct length, in ascending length order.
pub fn render_length_report(analysis: &TextAnalysis) -> String {
    let mut out = String::new();

    out.push_str("Word Length Frequencies:\n");

    let mut lengths: Vec<_> = analysis.length_frequencies.iter().collect();
    lengths.sort_by_key(|(length, _)| **length);

    for (length, frequency) in lengths {
        out.push_str(&format!("Length {}: {}\n", length, frequency));
    }

    out
}
