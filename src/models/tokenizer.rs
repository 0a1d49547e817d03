use crate::types::Token;

#[derive(Copy, Clone, Debug, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Configuration for plain prose document parsing
    pub fn word_parser() -> Self {
        Self
    }

    /// Tokenizer function to split the text into individual words.
    ///
    /// Lowercases with simple ASCII case folding, deletes every character that
    /// is not `a`-`z` and not whitespace, then splits on whitespace runs.
    ///
    /// Note: punctuation is deleted rather than replaced with a separator, so
    /// words joined only by punctuation merge ("don't" becomes "dont",
    /// "end.Next" becomes "endnext"). Downstream counts depend on this
    /// merging behavior.
    pub fn tokenize(self, text: &str) -> Vec<Token> {
        text.chars()
            .map(|c| c.to_ascii_lowercase())
            .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
            .collect::<String>()
            .split_whitespace()
            .map(str::to_owned)
            .collect()
    }
}
