use crate::types::{Token, WordFrequency, WordFrequencyMap};

/// Sorts a mapping of words to their frequencies.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by frequency in descending order (higher frequency first).
/// - **Secondary:** If two words have the same frequency, sorts by word in
///   ascending lexicographical order for deterministic ordering.
///
/// ### Parameters:
/// - `frequencies`: A `WordFrequencyMap`, where the key is a word and the
///   value is how often it appeared.
///
/// ### Returns:
/// - A `Vec` of `(Token, WordFrequency)` tuples, sorted as described above.
///
/// ### Example:
/// ```rust
/// use std::collections::HashMap;
/// use word_frequency::types::WordFrequencyMap;
/// use word_frequency::sort_frequencies;
///
/// let mut frequencies: WordFrequencyMap = HashMap::new();
/// frequencies.insert("cat".to_string(), 10);
/// frequencies.insert("the".to_string(), 15);
/// frequencies.insert("sat".to_string(), 10);
///
/// let sorted = sort_frequencies(&frequencies);
/// assert_eq!(sorted, vec![
///     ("the".to_string(), 15),
///     ("cat".to_string(), 10),
///     ("sat".to_string(), 10)
/// ]);
/// ```
pub fn sort_frequencies(frequencies: &WordFrequencyMap) -> Vec<(Token, WordFrequency)> {
    // Convert the HashMap into a Vec and sort it by frequency (descending),
    // then by word (ascending) for deterministic order.
    let mut sorted_frequencies: Vec<(Token, WordFrequency)> = frequencies
        .iter()
        .map(|(word, frequency)| (word.to_owned(), frequency.to_owned()))
        .collect();

    sorted_frequencies.sort_by(|a, b| {
        b.1.cmp(&a.1) // Sort by frequency (descending)
            .then_with(|| a.0.cmp(&b.0)) // Secondary sort by word (ascending)
    });

    sorted_frequencies
}
