//! The three questions that can be asked about a letter, and their printable answers.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::index::{Letter, LetterIndex};

/// What to look up for a letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Query {
    /// Every word with its frequency, in word order.
    SortedWords,
    /// The word with the highest frequency.
    MostFrequent,
    /// The word with the lowest frequency.
    LeastFrequent,
}

/// The result of running a [`Query`]. A letter with no words is an answer of its own rather than
/// an error.
#[derive(Debug, PartialEq, Eq)]
pub enum Answer<'a> {
    /// Result of [`Query::SortedWords`].
    Listing {
        /// The letter asked about.
        letter: Letter,
        /// Words and frequencies in word order. Never empty.
        words: Vec<(&'a str, usize)>,
    },
    /// Result of [`Query::MostFrequent`] or [`Query::LeastFrequent`].
    Single {
        /// Which of the two queries this answers.
        query: Query,
        /// The letter asked about.
        letter: Letter,
        /// The winning word.
        word: &'a str,
        /// How often it occurred.
        frequency: usize,
    },
    /// No words start with `letter`.
    NoWords {
        /// The letter asked about.
        letter: Letter,
    },
}

/// Runs `query` for `letter` against `index`.
///
/// # Examples
///
/// ```
/// use wordbst::query::{self, Answer, Query};
/// use wordbst::{Letter, LetterIndex};
///
/// let index: LetterIndex = ["bee", "bee", "ant"].iter().collect();
/// let b: Letter = "b".parse().unwrap();
///
/// assert_eq!(
///     query::run(&index, Query::MostFrequent, b),
///     Answer::Single { query: Query::MostFrequent, letter: b, word: "bee", frequency: 2 }
/// );
///
/// let z: Letter = "z".parse().unwrap();
/// assert_eq!(query::run(&index, Query::SortedWords, z), Answer::NoWords { letter: z });
/// ```
pub fn run(index: &LetterIndex, query: Query, letter: Letter) -> Answer<'_> {
    let c = letter.as_char();
    match query {
        Query::SortedWords => {
            let words = index.get_sorted_words(c);
            if words.is_empty() {
                Answer::NoWords { letter }
            } else {
                Answer::Listing { letter, words }
            }
        }
        Query::MostFrequent => single(query, letter, index.get_most_frequent_word(c)),
        Query::LeastFrequent => single(query, letter, index.get_least_frequent_word(c)),
    }
}

fn single(query: Query, letter: Letter, found: Option<(&str, usize)>) -> Answer<'_> {
    match found {
        Some((word, frequency)) => Answer::Single {
            query,
            letter,
            word,
            frequency,
        },
        None => Answer::NoWords { letter },
    }
}

impl fmt::Display for Answer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Listing { letter, words } => {
                write!(f, "Words starting with '{}':", letter)?;
                for (word, frequency) in words {
                    write!(f, "\n{}: {}", word, frequency)?;
                }
                Ok(())
            }
            Answer::Single {
                query,
                letter,
                word,
                frequency,
            } => {
                let which = match query {
                    Query::LeastFrequent => "Least",
                    _ => "Most",
                };
                write!(
                    f,
                    "{} frequent word starting with '{}':\n{}: {}",
                    which, letter, word, frequency
                )
            }
            Answer::NoWords { letter } => write!(f, "No words found starting with '{}'.", letter),
        }
    }
}

/// A selection from the interactive menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    /// Ask a [`Query`] about a letter.
    Ask(Query),
    /// Leave the session.
    Exit,
}

impl FromStr for Choice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Choice::Ask(Query::SortedWords)),
            "2" => Ok(Choice::Ask(Query::MostFrequent)),
            "3" => Ok(Choice::Ask(Query::LeastFrequent)),
            "4" => Ok(Choice::Exit),
            _ => Err(Error::InvalidChoice(s.to_string())),
        }
    }
}
