//! Build script to generate embedded word lists
//!
//! Reads the per-length word files under `data/` and generates Rust source
//! with const tables of `(word, definition)` pairs.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Word lengths that have level words.
const LEVEL_LENGTHS: [usize; 5] = [3, 4, 5, 6, 7];

/// Word lengths that have a daily challenge.
const DAILY_LENGTHS: [usize; 3] = [4, 5, 6];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_table(
        "levels",
        &LEVEL_LENGTHS,
        &Path::new(&out_dir).join("levels.rs"),
        "LEVEL_WORDS",
        "Level words with definitions, grouped by word length",
    );

    generate_table(
        "valid",
        &DAILY_LENGTHS,
        &Path::new(&out_dir).join("valid.rs"),
        "VALID_WORDS",
        "Accepted guesses for the daily lengths, grouped by word length",
    );

    println!("cargo:rerun-if-changed=data");
}

fn generate_table(
    dir: &str,
    lengths: &[usize],
    output_path: &Path,
    const_name: &str,
    doc_comment: &str,
) {
    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word table").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(
        output,
        "pub const {const_name}: &[(usize, &[(&str, &str)])] = &["
    )
    .unwrap();

    for &length in lengths {
        let input_path = format!("data/{dir}/words_{length}.txt");
        let content = fs::read_to_string(&input_path)
            .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

        writeln!(output, "    ({length}, &[").unwrap();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (word, definition) = line.split_once('\t').unwrap_or((line, ""));
            writeln!(
                output,
                "        ({:?}, {:?}),",
                word.trim(),
                definition.trim()
            )
            .unwrap();
        }
        writeln!(output, "    ]),").unwrap();
        println!("cargo:rerun-if-changed={input_path}");
    }

    writeln!(output, "];").unwrap();
}
