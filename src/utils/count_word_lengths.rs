use crate::types::{Token, WordLengthMap};

/// Counts words in the given token sequence grouped by their character
/// length.
///
/// Tokens contain only ASCII letters after normalization, so byte length and
/// character length coincide.
///
/// # Arguments
/// * `words` - A slice of tokens to analyze.
///
/// # Returns
/// * A `WordLengthMap` where the keys are word lengths and the values are the
///   number of words having that length.
///
/// # Example
/// ```
/// use word_frequency::count_word_lengths;
///
/// let words = vec!["the".to_string(), "cat".to_string(), "stop".to_string()];
/// let lengths = count_word_lengths(&words);
/// assert_eq!(lengths.get(&3), Some(&2));
/// assert_eq!(lengths.get(&4), Some(&1));
/// ```
pub fn count_word_lengths(words: &[Token]) -> WordLengthMap {
    let mut lengths: WordLengthMap = WordLengthMap::new();

    for word in words {
        *lengths.entry(word.len()).or_insert(0) += 1;
    }

    lengths
}
