use std::collections::HashMap;

use quickcheck_macros::quickcheck;
use wordbst::FrequencyTree;

use crate::Word;

fn build(words: &[Word]) -> FrequencyTree {
    let mut tree = FrequencyTree::new();
    for Word(word) in words {
        tree.insert(word);
    }

    tree
}

#[quickcheck]
fn traversal_is_strictly_ascending(words: Vec<Word>) -> bool {
    let tree = build(&words);
    let traversal = tree.in_order_traversal();

    traversal.windows(2).all(|pair| pair[0].0 < pair[1].0)
}

#[quickcheck]
fn frequencies_are_conserved(words: Vec<Word>) -> bool {
    let tree = build(&words);
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for Word(word) in &words {
        *counts.entry(word).or_default() += 1;
    }

    tree.len() == counts.len()
        && tree.total() == words.len()
        && counts.iter().all(|(word, n)| tree.find(word) == Some(*n))
}

#[quickcheck]
fn traversal_is_repeatable(words: Vec<Word>) -> bool {
    let tree = build(&words);

    tree.in_order_traversal() == tree.in_order_traversal()
}

#[quickcheck]
fn most_frequent_is_first_among_the_highest(words: Vec<Word>) -> bool {
    let tree = build(&words);
    let traversal = tree.in_order_traversal();

    match tree.most_frequent() {
        None => traversal.is_empty(),
        Some((word, frequency)) => {
            let first_max = traversal.iter().position(|(_, f)| *f == frequency);
            traversal.iter().all(|(_, f)| *f <= frequency)
                && first_max.map(|i| traversal[i].0) == Some(word)
        }
    }
}

#[quickcheck]
fn least_frequent_is_first_among_the_lowest(words: Vec<Word>) -> bool {
    let tree = build(&words);
    let traversal = tree.in_order_traversal();

    match tree.least_frequent() {
        None => traversal.is_empty(),
        Some((word, frequency)) => {
            let first_min = traversal.iter().position(|(_, f)| *f == frequency);
            traversal.iter().all(|(_, f)| *f >= frequency)
                && first_min.map(|i| traversal[i].0) == Some(word)
        }
    }
}

#[test]
fn tie_goes_to_first_word() {
    let mut tree = FrequencyTree::new();
    for word in ["bee", "bee", "ant", "ant", "cat"] {
        tree.insert(word);
    }

    assert_eq!(tree.most_frequent(), Some(("ant", 2)));
}
