//! Splits raw text into the words the index stores.
//!
//! Text is lower-cased first, then every maximal run of `a..=z` that sits between word
//! boundaries is a word. A run glued to a digit, an underscore or a non-ASCII letter isn't
//! bounded, so the whole token is skipped rather than trimmed down:
//!
//! ```
//! use wordbst::tokenize::tokenize;
//!
//! assert_eq!(tokenize("abc123 Def").collect::<Vec<_>>(), vec!["def"]);
//! assert_eq!(tokenize("Don't stop").collect::<Vec<_>>(), vec!["don", "t", "stop"]);
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[a-z]+\b").unwrap());

/// Lower-cases `text` up front and then yields its words lazily, in the order they appear.
pub fn tokenize(text: &str) -> Tokens {
    Tokens {
        text: text.to_lowercase(),
        pos: 0,
    }
}

/// Iterator over the words of a lower-cased text. Created by [`tokenize`].
///
/// Each call to `next` searches from where the last word ended, so boundaries are still checked
/// against the characters before that position.
pub struct Tokens {
    text: String,
    pos: usize,
}

impl Iterator for Tokens {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let word = WORD.find_at(&self.text, self.pos)?;
        self.pos = word.end();
        Some(word.as_str().to_string())
    }
}
