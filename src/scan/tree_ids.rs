//! Tree identifier extraction
//!
//! Tree IDs look like `G123`, `S45` or `L7`: a single district letter
//! followed by digits. Free text is split on non-word characters and
//! underscores before matching, so IDs embedded in filenames like
//! `2021-03-14_G123_report.pdf` are found too.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Word separators: any non-word run, plus the underscore that `\w` keeps
    static ref WORD_SPLIT: Regex = Regex::new(r"\W+|_").unwrap();
    /// District letter followed by digits
    static ref TREE_ID: Regex = Regex::new(r"^[GSLKFAs][0-9]+$").unwrap();
}

/// Find all tree IDs in a piece of text, in order of appearance
pub fn find_tree_ids(text: &str) -> Vec<String> {
    WORD_SPLIT
        .split(text)
        .filter(|word| TREE_ID.is_match(word))
        .map(|word| word.to_string())
        .collect()
}

/// Remove duplicate IDs while preserving first-seen order
pub fn dedupe_ids(ids: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
}
