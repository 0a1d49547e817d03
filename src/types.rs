use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are the basic units used for processing text.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// Represents the total number of occurrences of a word within a text document.
pub type WordFrequency = usize;

/// Represents a map of words to their frequency counts within a text document.
/// The key is the `Token`, and the value is the `WordFrequency`.
pub type WordFrequencyMap = HashMap<Token, WordFrequency>;

/// Represents the character length of a word.
pub type WordLength = usize;

/// Represents a map of word lengths to the number of words having that length
/// within a text document.
pub type WordLengthMap = HashMap<WordLength, usize>;
