use quickcheck_macros::quickcheck;
use wordbst::{ingest, tokenize, LetterIndex};

use crate::{Text, Word};

#[quickcheck]
fn insert_touches_only_its_letter(words: Vec<Word>, extra: Word) -> bool {
    let mut index: LetterIndex = words.iter().map(|w| &w.0).collect();
    let before: Vec<Vec<(String, usize)>> = index
        .letters()
        .map(|(_, tree)| tree.iter().map(|(w, f)| (w.to_string(), f)).collect())
        .collect();

    index.insert_word(&extra.0);
    let first = extra.0.chars().next().unwrap();

    let only_first_changed = index.letters().zip(before).all(|((letter, tree), before)| {
        let after: Vec<(String, usize)> = tree.iter().map(|(w, f)| (w.to_string(), f)).collect();
        (letter == first) != (after == before)
    });
    only_first_changed
}

#[quickcheck]
fn listings_only_hold_their_letter(words: Vec<Word>) -> bool {
    let index: LetterIndex = words.iter().map(|w| &w.0).collect();

    ('a'..='z').all(|letter| {
        index
            .get_sorted_words(letter)
            .iter()
            .all(|(word, _)| word.starts_with(letter))
    })
}

#[quickcheck]
fn ingesting_text_matches_tokenizing_it(text: Text) -> bool {
    let index = ingest::from_reader(text.0.as_bytes(), "<quickcheck>").unwrap();
    let tokens: Vec<String> = tokenize::tokenize(&text.0).collect();

    index.total_words() == tokens.len()
        && tokens.iter().all(|t| t.bytes().all(|b| b.is_ascii_lowercase()))
        && tokens
            .iter()
            .all(|t| index.tree(t.chars().next().unwrap()).and_then(|tr| tr.find(t)).is_some())
}

#[quickcheck]
fn untouched_letters_stay_empty(extra: Word) -> bool {
    let mut index = LetterIndex::new();
    index.insert_word(&extra.0);
    let first = extra.0.chars().next().unwrap();

    let empty_elsewhere = index
        .letters()
        .all(|(letter, tree)| (letter == first) != tree.is_empty());
    empty_elsewhere
}
