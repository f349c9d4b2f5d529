//! One [`FrequencyTree`] per lowercase ASCII letter.
//!
//! # Examples
//!
//! ```
//! use wordbst::LetterIndex;
//!
//! let mut index = LetterIndex::new();
//! index.insert_word("zebra");
//! index.insert_word("zoo");
//! index.insert_word("zebra");
//!
//! assert_eq!(index.get_sorted_words('z'), vec![("zebra", 2), ("zoo", 1)]);
//! // Letters are case-insensitive.
//! assert_eq!(index.get_most_frequent_word('Z'), Some(("zebra", 2)));
//! assert_eq!(index.get_least_frequent_word('a'), None);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::tree::FrequencyTree;

/// How many letters (and so trees) the index tracks: `a` through `z`.
pub const LETTERS: usize = 26;

/// Words partitioned by their first letter. The index always holds exactly [`LETTERS`] trees,
/// all created empty by [`LetterIndex::new`].
#[derive(Debug, Default)]
pub struct LetterIndex {
    trees: [FrequencyTree; LETTERS],
}

impl LetterIndex {
    /// Generate a new index with 26 empty trees.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a word into the tree for its first character. Empty words, and words that don't
    /// start with a lowercase ASCII letter, are silently dropped.
    pub fn insert_word(&mut self, word: &str) {
        let Some(first) = word.chars().next() else {
            return;
        };
        if let Some(slot) = slot(first) {
            self.trees[slot].insert(word);
        }
    }

    /// All words starting with `letter` along with their frequencies, in ascending word order.
    /// `letter` is case-insensitive. A letter outside `a..=z` has no words.
    pub fn get_sorted_words(&self, letter: char) -> Vec<(&str, usize)> {
        self.tree(letter)
            .map(FrequencyTree::in_order_traversal)
            .unwrap_or_default()
    }

    /// The most frequent word starting with `letter`, or `None` if there are none. Ties go to the
    /// word that sorts first.
    pub fn get_most_frequent_word(&self, letter: char) -> Option<(&str, usize)> {
        self.tree(letter).and_then(FrequencyTree::most_frequent)
    }

    /// The least frequent word starting with `letter`, or `None` if there are none. Ties go to
    /// the word that sorts first.
    pub fn get_least_frequent_word(&self, letter: char) -> Option<(&str, usize)> {
        self.tree(letter).and_then(FrequencyTree::least_frequent)
    }

    /// The tree for `letter` (case-insensitive), or `None` if it isn't a tracked letter.
    pub fn tree(&self, letter: char) -> Option<&FrequencyTree> {
        lower(letter).and_then(slot).map(|slot| &self.trees[slot])
    }

    /// Each letter with its tree, from `a` to `z`.
    pub fn letters(&self) -> impl Iterator<Item = (char, &FrequencyTree)> {
        (b'a'..=b'z').map(char::from).zip(self.trees.iter())
    }

    /// Number of distinct words across all letters.
    pub fn distinct_words(&self) -> usize {
        self.trees.iter().map(FrequencyTree::len).sum()
    }

    /// Number of words inserted across all letters, counting repeats.
    pub fn total_words(&self) -> usize {
        self.trees.iter().map(FrequencyTree::total).sum()
    }
}

impl<S: AsRef<str>> Extend<S> for LetterIndex {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.insert_word(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for LetterIndex {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        let mut index = Self::new();
        index.extend(words);
        index
    }
}

/// Unicode lower-casing of a single `char`. Letters whose lowercase form is more than one `char`
/// (like `İ`) have no single lowercase letter and give `None`.
fn lower(letter: char) -> Option<char> {
    let mut lower = letter.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Position of a lowercase ASCII letter in the index.
fn slot(letter: char) -> Option<usize> {
    letter
        .is_ascii_lowercase()
        .then(|| (letter as u8 - b'a') as usize)
}

/// A letter a user asked about. Always one of `a..=z`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Letter(char);

impl Letter {
    /// The letter as a lowercase `char`.
    pub fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Letter {
    type Error = Error;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match lower(c).filter(|l| slot(*l).is_some()) {
            Some(l) => Ok(Letter(l)),
            None => Err(Error::InvalidQueryLetter(c.to_string())),
        }
    }
}

impl FromStr for Letter {
    type Err = Error;

    /// Accepts exactly one letter whose lowercase form is one of `a..=z`, ignoring surrounding
    /// whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Letter::try_from(c).map_err(|_| Error::InvalidQueryLetter(s.to_string()))
            }
            _ => Err(Error::InvalidQueryLetter(s.to_string())),
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
