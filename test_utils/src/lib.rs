pub mod constants;

use std::fs;
use std::path::Path;
use word_frequency::{analyze_text, TextAnalysis};

// Fixture files may carry COMMENT:, EXPECTED_TOTAL:, and EXPECTED_UNIQUE:
// marker lines. Marker lines are stripped before analysis so their own words
// never enter the counts.
const MARKER_PREFIXES: [&str; 3] = ["COMMENT:", "EXPECTED_TOTAL:", "EXPECTED_UNIQUE:"];

// Helper function to get an expected numeric marker value from the fixture file
pub fn get_expected_count(file_path: &Path, marker: &str) -> Option<usize> {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    content.lines().find_map(|line| {
        let line = line.trim();
        if line.starts_with(marker) {
            Some(
                line.replace(marker, "")
                    .trim()
                    .parse()
                    .expect("Marker value is not a number"),
            )
        } else {
            None
        }
    })
}

// Helper function to strip marker lines, leaving only the document text
pub fn filter_marker_lines(raw_text: &str) -> String {
    raw_text
        .lines()
        .filter(|line| {
            let line = line.trim_start();
            !MARKER_PREFIXES.iter().any(|prefix| line.starts_with(prefix))
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

// Helper function to run the analysis for a fixture file and assert its
// expectations
pub fn run_test_for_file(test_file_path: &str) -> TextAnalysis {
    let raw_text = fs::read_to_string(test_file_path).expect("Failed to read test file");

    let filtered_text = filter_marker_lines(&raw_text);

    let analysis = analyze_text(&filtered_text);

    let path = Path::new(test_file_path);
    if let Some(expected_total) = get_expected_count(path, "EXPECTED_TOTAL:") {
        assert_eq!(
            analysis.total_words, expected_total,
            "Total word count mismatch for {}",
            test_file_path
        );
    }
    if let Some(expected_unique) = get_expected_count(path, "EXPECTED_UNIQUE:") {
        assert_eq!(
            analysis.unique_words, expected_unique,
            "Unique word count mismatch for {}",
            test_file_path
        );
    }

    // Structural invariants that must hold for every document
    assert_eq!(
        analysis.word_frequencies.values().sum::<usize>(),
        analysis.total_words,
        "Frequency counts do not sum to the total for {}",
        test_file_path
    );
    assert_eq!(
        analysis.length_frequencies.values().sum::<usize>(),
        analysis.total_words,
        "Length counts do not sum to the total for {}",
        test_file_path
    );
    assert_eq!(
        analysis.word_frequencies.len(),
        analysis.unique_words,
        "Unique count does not match the frequency table for {}",
        test_file_path
    );

    analysis
}
