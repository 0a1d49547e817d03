use word_frequency::{analyze_text, sort_frequencies, Tokenizer};

#[cfg(test)]
mod analysis_tests {
    use super::*;

    #[test]
    fn test_analyze_repeated_words() {
        let analysis = analyze_text("The cat sat. The CAT sat!");

        assert_eq!(analysis.total_words, 6);
        assert_eq!(analysis.unique_words, 3);
        assert_eq!(analysis.word_frequencies.get("the"), Some(&2));
        assert_eq!(analysis.word_frequencies.get("cat"), Some(&2));
        assert_eq!(analysis.word_frequencies.get("sat"), Some(&2));
    }

    #[test]
    fn test_totals_match_token_sequence() {
        let text = "to be or not to be";
        let tokens = Tokenizer::word_parser().tokenize(text);
        let analysis = analyze_text(text);

        assert_eq!(analysis.total_words, tokens.len());
        assert_eq!(analysis.unique_words, analysis.word_frequencies.len());
    }

    #[test]
    fn test_frequency_counts_sum_to_total() {
        let analysis = analyze_text("one fish two fish red fish blue fish");

        let frequency_sum: usize = analysis.word_frequencies.values().sum();
        assert_eq!(frequency_sum, analysis.total_words);
    }

    #[test]
    fn test_length_counts_sum_to_total() {
        let analysis = analyze_text("one fish two fish red fish blue fish");

        let length_sum: usize = analysis.length_frequencies.values().sum();
        assert_eq!(length_sum, analysis.total_words);
    }

    #[test]
    fn test_length_histogram_groups_by_word_length() {
        let analysis = analyze_text("a bb bb ccc");

        assert_eq!(analysis.length_frequencies.get(&1), Some(&1));
        assert_eq!(analysis.length_frequencies.get(&2), Some(&2));
        assert_eq!(analysis.length_frequencies.get(&3), Some(&1));
        assert_eq!(analysis.length_frequencies.get(&4), None);
    }

    #[test]
    fn test_empty_document() {
        let analysis = analyze_text("");

        assert_eq!(analysis.total_words, 0);
        assert_eq!(analysis.unique_words, 0);
        assert!(analysis.word_frequencies.is_empty());
        assert!(analysis.length_frequencies.is_empty());
    }

    #[test]
    fn test_ranked_listing_is_a_permutation_of_the_frequency_table() {
        let analysis = analyze_text("apple banana apple cherry banana apple");

        let ranked = sort_frequencies(&analysis.word_frequencies);
        assert_eq!(ranked.len(), analysis.word_frequencies.len());
        for (word, frequency) in &ranked {
            assert_eq!(analysis.word_frequencies.get(word), Some(frequency));
        }
    }

    #[test]
    fn test_ranked_listing_sorts_by_count_then_word() {
        let analysis = analyze_text("b b b a a c a c");

        let ranked = sort_frequencies(&analysis.word_frequencies);
        assert_eq!(
            ranked,
            vec![
                ("a".to_string(), 3),
                ("b".to_string(), 3),
                ("c".to_string(), 2)
            ]
        );
    }

    #[test]
    fn test_top_one_of_tied_frequencies_is_a_valid_top_element() {
        let analysis = analyze_text("The cat sat. The CAT sat!");

        let ranked = sort_frequencies(&analysis.word_frequencies);
        let top = &ranked[0];
        assert_eq!(top.1, 2);
        assert!(analysis.word_frequencies.contains_key(&top.0));
    }
}
