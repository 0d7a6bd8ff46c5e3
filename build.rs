//! Build script to generate the embedded sample word list
//!
//! Reads `WORD FREQUENCY` lines and generates a Rust const array of pairs.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        "data/words.txt",
        &Path::new(&out_dir).join("sample_words.rs"),
        "SAMPLE_WORDS",
        "Bundled sample words with relative usage frequencies",
    );

    println!("cargo:rerun-if-changed=data/words.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let entries: Vec<(String, f64)> = content
        .lines()
        .map(|line| line.split('#').next().unwrap_or_default().trim())
        .filter(|line| !line.is_empty())
        .map(|line| {
            let mut fields = line.split_whitespace();
            let (Some(word), Some(frequency), None) = (fields.next(), fields.next(), fields.next())
            else {
                panic!("Malformed line in {input_path}: {line:?}");
            };
            assert!(
                word.len() == 5 && word.chars().all(|c| c.is_ascii_alphabetic()),
                "Invalid word in {input_path}: {word:?}"
            );
            let frequency: f64 = frequency
                .parse()
                .unwrap_or_else(|e| panic!("Invalid frequency for {word} in {input_path}: {e}"));
            (word.to_ascii_uppercase(), frequency)
        })
        .collect();
    let count = entries.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, f64)] = &[").unwrap();

    for (word, frequency) in entries {
        writeln!(output, "    (\"{word}\", {frequency:?}),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
