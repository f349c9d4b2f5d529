//! This crate indexes the words of a text by their first letter and answers
//! frequency questions about them.
//!
//! ## Frequency Tree
//!
//! Every word is stored in a Binary Search Tree (BST) keyed by the word itself.
//! Each `Node` carries a count of how many times its word was inserted. The
//! invariants are the usual BST ones:
//!
//! 1. For every `Node`, all the words in its left subtree are less than its own word.
//! 2. For every `Node`, all the words in its right subtree are greater than its own word.
//!
//! Inserting a word that is already present doesn't add a `Node`, it bumps that
//! `Node`'s count. The tree never rebalances so inserting words in sorted order
//! gives a tree whose height equals its size. Because of that, nothing in
//! [`tree`] recurses: insertion, traversal, searching and even dropping walk the
//! tree with a loop and, where needed, an explicit stack.
//!
//! ## Letter Index
//!
//! A [`LetterIndex`] owns one [`FrequencyTree`] per lowercase ASCII letter and
//! routes each word to the tree for its first letter.
//!
//! # Examples
//!
//! ```
//! use wordbst::{ingest, query, Letter};
//!
//! let text = "The cat sat on the mat. The cat ran.";
//! let index = ingest::from_reader(text.as_bytes(), "<doc>").unwrap();
//!
//! assert_eq!(index.get_sorted_words('t'), vec![("the", 3)]);
//! assert_eq!(index.get_most_frequent_word('c'), Some(("cat", 2)));
//!
//! let answer = query::run(&index, query::Query::LeastFrequent, "s".parse::<Letter>().unwrap());
//! assert_eq!(answer.to_string(), "Least frequent word starting with 's':\nsat: 1");
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod index;
pub mod ingest;
pub mod query;
pub mod session;
pub mod tokenize;
pub mod tree;

pub use error::{Error, Result};
pub use index::{Letter, LetterIndex};
pub use tree::FrequencyTree;
