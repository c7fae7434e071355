//! Word list loading utilities

use crate::core::WordList;
use std::fs;
use std::io;
use std::path::Path;

/// Load a word list from a file, one entry per line
///
/// Blank lines are skipped and whitespace inside entries is collapsed.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use bingo_builder::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/office.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordList> {
    let content = fs::read_to_string(path)?;
    Ok(WordList::parse(&content))
}

/// Convert an embedded string slice to a word list
///
/// # Examples
/// ```
/// use bingo_builder::wordlists::loader::words_from_slice;
/// use bingo_builder::wordlists::OFFICE;
///
/// let words = words_from_slice(OFFICE);
/// assert_eq!(words.len(), OFFICE.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> WordList {
    WordList::from_entries(slice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_skips_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Coffee\n\n  Remote   Work  \n\nEmail").unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words.as_slice(), ["Coffee", "Remote Work", "Email"]);
    }

    #[test]
    fn load_missing_file_fails() {
        assert!(load_from_file("/no/such/words.txt").is_err());
    }

    #[test]
    fn words_from_slice_drops_empty_entries() {
        let words = words_from_slice(&["Coffee", "  ", "Email"]);
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }
}
