pub mod count_word_frequencies;
pub mod count_word_lengths;
pub mod read_text_file;
pub mod sort_frequencies;

pub use count_word_frequencies::count_word_frequencies;
pub use count_word_lengths::count_word_lengths;
pub use read_text_file::read_text_file;
pub use sort_frequencies::sort_frequencies;
