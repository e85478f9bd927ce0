//! Word list loading utilities
//!
//! Word files hold one entry per line: `WORD<TAB>definition`. The definition
//! is optional; blank lines, `#` comments and invalid words are skipped.

use super::Entry;
use std::fs;
use std::io;
use std::path::Path;

/// Parse entries from the text of a word file
#[must_use]
pub fn parse_entries(content: &str) -> Vec<Entry> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            let (word, definition) = trimmed.split_once('\t').unwrap_or((trimmed, ""));
            Entry::new(word, definition).ok()
        })
        .collect()
}

/// Load entries from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_quest::wordlists::loader::load_entries_from_file;
///
/// let entries = load_entries_from_file("data/levels/words_5.txt").unwrap();
/// println!("Loaded {} words", entries.len());
/// ```
pub fn load_entries_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Entry>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_entries(&content))
}

/// Convert an embedded table to entries, skipping invalid words
#[must_use]
pub fn entries_from_slice(slice: &[(&str, &str)]) -> Vec<Entry> {
    slice
        .iter()
        .filter_map(|&(word, definition)| Entry::new(word, definition).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_entries_reads_words_and_definitions() {
        let entries = parse_entries("# header\nCRANE\ta wading bird\n\nslate\n");

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].word.text(), "CRANE");
        assert_eq!(entries[0].definition, "a wading bird");
        assert_eq!(entries[1].word.text(), "SLATE");
        assert_eq!(entries[1].definition, "");
    }

    #[test]
    fn parse_entries_skips_invalid() {
        let entries = parse_entries("CRANE\nab\nsl4te\nTOOLONGWORD\nIRATE\n");
        let words: Vec<&str> = entries.iter().map(|e| e.word.text()).collect();
        assert_eq!(words, vec!["CRANE", "IRATE"]);
    }

    #[test]
    fn entries_from_slice_converts_valid_words() {
        let entries = entries_from_slice(&[("able", "capable"), ("x", ""), ("bark", "")]);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].word.text(), "BARK");
    }

    #[test]
    fn load_missing_file_is_error() {
        assert!(load_entries_from_file("/definitely/not/here.txt").is_err());
    }
}
