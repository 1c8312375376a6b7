//! Letter export artifacts
//!
//! Two serializations of a letter batch: a single concatenated text
//! artifact with a visible separator between letters, and a paginated
//! artifact with one letter per form-feed-delimited page. Both carry
//! the fixed `DisputeLetters` base name.

use report_types::LetterDocument;

/// Fixed base name for exported artifacts
pub const EXPORT_BASE_NAME: &str = "DisputeLetters";

/// Separator line between letters in the concatenated artifact
pub const SEPARATOR: &str =
    "============================================================";

/// All letters joined into one text artifact
pub fn concatenated(letters: &[LetterDocument]) -> String {
    letters
        .iter()
        .map(|l| l.body.as_str())
        .collect::<Vec<_>>()
        .join(&format!("\n\n{SEPARATOR}\n\n"))
}

/// One letter per page, form-feed separated
pub fn paginated(letters: &[LetterDocument]) -> String {
    letters
        .iter()
        .map(|l| l.body.as_str())
        .collect::<Vec<_>>()
        .join("\x0C")
}

/// File name for the concatenated text artifact
pub fn text_filename() -> String {
    format!("{EXPORT_BASE_NAME}.txt")
}

/// File name for the paginated artifact
pub fn paginated_filename() -> String {
    format!("{EXPORT_BASE_NAME}.pages.txt")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn letter(body: &str) -> LetterDocument {
        LetterDocument {
            bureau: None,
            subject: "Test".to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_concatenated_separates_letters_visibly() {
        let letters = vec![letter("first letter"), letter("second letter")];
        let artifact = concatenated(&letters);
        assert!(artifact.starts_with("first letter"));
        assert!(artifact.ends_with("second letter"));
        assert_eq!(artifact.matches(SEPARATOR).count(), 1);
    }

    #[test]
    fn test_single_letter_has_no_separator() {
        let artifact = concatenated(&[letter("only letter")]);
        assert_eq!(artifact, "only letter");
    }

    #[test]
    fn test_paginated_puts_one_letter_per_page() {
        let letters = vec![letter("page one"), letter("page two"), letter("page three")];
        let artifact = paginated(&letters);
        let pages: Vec<&str> = artifact.split('\x0C').collect();
        assert_eq!(pages, vec!["page one", "page two", "page three"]);
    }

    #[test]
    fn test_fixed_artifact_names() {
        assert_eq!(text_filename(), "DisputeLetters.txt");
        assert_eq!(paginated_filename(), "DisputeLetters.pages.txt");
    }
}
