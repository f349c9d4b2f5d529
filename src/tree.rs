//! An unbalanced BST that counts how often each word was inserted. Nodes own their children
//! through `Box`es so every node has exactly one owner: its parent, or the tree for the root.
//!
//! The tree is never rebalanced, so its height can be as large as its size (insert words in
//! sorted order and you get a linked list). None of the operations here recurse for that reason.
//!
//! # Examples
//!
//! ```
//! use wordbst::FrequencyTree;
//!
//! let mut tree = FrequencyTree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find("bee"), None);
//! assert_eq!(tree.most_frequent(), None);
//!
//! tree.insert("bee");
//! tree.insert("ant");
//! tree.insert("bee");
//!
//! // Inserting a word again bumps its frequency.
//! assert_eq!(tree.find("bee"), Some(2));
//!
//! // Iteration is in word order.
//! assert_eq!(tree.in_order_traversal(), vec![("ant", 1), ("bee", 2)]);
//! assert_eq!(tree.most_frequent(), Some(("bee", 2)));
//! assert_eq!(tree.least_frequent(), Some(("ant", 1)));
//! ```

use std::cmp::Ordering;
use std::fmt;

/// A child slot of a `Node` (or the root slot of a `FrequencyTree`).
type Link = Option<Box<Node>>;

/// A Binary Search Tree of words and how often each was inserted.
#[derive(Default)]
pub struct FrequencyTree {
    root: Link,
    len: usize,
}

impl Drop for FrequencyTree {
    /// Dropping the `Box`es one by one would recurse once per level. Unhook the children onto a
    /// stack instead so each node is dropped with no children attached.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl fmt::Debug for FrequencyTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl FrequencyTree {
    /// Generate a new, empty `FrequencyTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Inserts the word into the tree. A word seen for the first time is stored with a frequency
    /// of 1. Inserting a word that's already stored increments its frequency.
    ///
    /// The tree doesn't validate words; the caller decides what counts as one.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordbst::FrequencyTree;
    ///
    /// let mut tree = FrequencyTree::new();
    ///
    /// tree.insert("cat");
    /// assert_eq!(tree.find("cat"), Some(1));
    ///
    /// tree.insert("cat");
    /// assert_eq!(tree.find("cat"), Some(2));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, word: &str) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            match word.cmp(node.word.as_str()) {
                Ordering::Less => link = &mut node.left,
                Ordering::Equal => {
                    node.frequency += 1;
                    return;
                }
                Ordering::Greater => link = &mut node.right,
            }
        }

        *link = Some(Node::new_boxed(word));
        self.len += 1;
    }

    /// Returns how many times the word was inserted, or `None` if it never was.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordbst::FrequencyTree;
    ///
    /// let mut tree = FrequencyTree::new();
    /// tree.insert("owl");
    ///
    /// assert_eq!(tree.find("owl"), Some(1));
    /// assert_eq!(tree.find("ox"), None);
    /// ```
    pub fn find(&self, word: &str) -> Option<usize> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match word.cmp(node.word.as_str()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Some(node.frequency),
                Ordering::Greater => node.right.as_deref(),
            };
        }

        None
    }

    /// Walks the tree in order, yielding each word and its frequency in ascending word order.
    /// The iterator borrows the tree so it can be created any number of times.
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Collects [`iter`][FrequencyTree::iter] into a `Vec`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordbst::FrequencyTree;
    ///
    /// let mut tree = FrequencyTree::new();
    /// for word in ["mat", "cat", "sat", "cat"] {
    ///     tree.insert(word);
    /// }
    ///
    /// assert_eq!(
    ///     tree.in_order_traversal(),
    ///     vec![("cat", 2), ("mat", 1), ("sat", 1)]
    /// );
    /// ```
    pub fn in_order_traversal(&self) -> Vec<(&str, usize)> {
        self.iter().collect()
    }

    /// Returns the word with the greatest frequency. When several words share it, the one that
    /// sorts first wins. Returns `None` for an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordbst::FrequencyTree;
    ///
    /// let mut tree = FrequencyTree::new();
    /// for word in ["bee", "bee", "ant", "ant", "cat"] {
    ///     tree.insert(word);
    /// }
    ///
    /// assert_eq!(tree.most_frequent(), Some(("ant", 2)));
    /// ```
    pub fn most_frequent(&self) -> Option<(&str, usize)> {
        self.first_by(|candidate, best| candidate > best)
    }

    /// Returns the word with the smallest frequency. When several words share it, the one that
    /// sorts first wins. Returns `None` for an empty tree.
    pub fn least_frequent(&self) -> Option<(&str, usize)> {
        self.first_by(|candidate, best| candidate < best)
    }

    /// Number of distinct words in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing was ever inserted.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Sum of all frequencies, i.e. how many insertions the tree has seen.
    pub fn total(&self) -> usize {
        self.iter().map(|(_, frequency)| frequency).sum()
    }

    /// Number of levels in the tree. An empty tree has a height of 0 and a lone root has a
    /// height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }

        height
    }

    /// Scans the tree in order and keeps the first entry for which no later entry is
    /// `better`. Since the scan is in word order and `better` is strict, ties go to the
    /// word that sorts first.
    fn first_by(&self, better: impl Fn(usize, usize) -> bool) -> Option<(&str, usize)> {
        self.iter().fold(None, |best, entry| match best {
            Some((_, best_frequency)) if !better(entry.1, best_frequency) => best,
            _ => Some(entry),
        })
    }
}

impl<'a> IntoIterator for &'a FrequencyTree {
    type Item = (&'a str, usize);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over a [`FrequencyTree`]. Created by [`FrequencyTree::iter`].
///
/// The stack holds the nodes whose left subtree is being (or has been) visited but which haven't
/// been yielded yet, so it never grows past the height of the tree.
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some((node.word.as_str(), node.frequency))
    }
}

/// A `Node` has a word and the number of times that word was inserted. Either child may be
/// missing.
struct Node {
    word: String,
    frequency: usize,
    left: Link,
    right: Link,
}

impl Node {
    fn new_boxed(word: &str) -> Box<Self> {
        Box::new(Self {
            word: word.to_string(),
            frequency: 1,
            left: None,
            right: None,
        })
    }
}
