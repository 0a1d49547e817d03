use log::error;
use std::env;
use std::path::PathBuf;
use word_frequency::{run, AnalyzerConfig, Error};

fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::init();

    // Optional positional overrides over the built-in defaults:
    // word-frequency-cli [input] [output] [top_n]
    let args: Vec<String> = env::args().collect();
    if args.len() > 4 {
        eprintln!("Usage: {} [input] [output] [top_n]", args[0]);
        std::process::exit(1);
    }

    let mut config = AnalyzerConfig::default();
    if let Some(input_path) = args.get(1) {
        config.input_path = PathBuf::from(input_path);
    }
    if let Some(output_path) = args.get(2) {
        config.output_path = PathBuf::from(output_path);
    }
    if let Some(top_word_count) = args.get(3) {
        match top_word_count.parse() {
            Ok(top_word_count) => config.top_word_count = top_word_count,
            Err(_) => {
                eprintln!("Invalid top_n value: {}", top_word_count);
                std::process::exit(1);
            }
        }
    }

    if let Err(err) = run(&config) {
        match err {
            Error::NotFound(_) => error!("{}", err),
            _ => error!("An error occurred: {}", err),
        }
        std::process::exit(1);
    }
}
