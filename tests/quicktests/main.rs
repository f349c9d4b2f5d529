//! Property tests run against the public API.

use quickcheck::{Arbitrary, Gen};

mod index;
mod tree;

/// A short lowercase word drawn from a handful of letters so that repeats are common.
#[derive(Clone, Debug)]
pub struct Word(pub String);

impl Arbitrary for Word {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = *g.choose(&[1, 2, 3, 4]).unwrap();
        Word(
            (0..len)
                .map(|_| *g.choose(&['a', 'b', 'm', 'y', 'z']).unwrap())
                .collect(),
        )
    }
}

/// A chunk of text: words mixed with the kind of noise the tokenizer has to skip.
#[derive(Clone, Debug)]
pub struct Text(pub String);

impl Arbitrary for Text {
    fn arbitrary(g: &mut Gen) -> Self {
        let pieces = usize::arbitrary(g) % 40;
        let mut text = String::new();
        for _ in 0..pieces {
            let piece = match g.choose(&[0, 0, 1, 2, 3]).unwrap() {
                0 => Word::arbitrary(g).0,
                1 => Word::arbitrary(g).0.to_uppercase(),
                2 => format!("{}7", Word::arbitrary(g).0),
                3 => "--".to_string(),
                _ => unreachable!(),
            };
            text.push_str(&piece);
            text.push_str(g.choose(&[" ", "\n", ", ", ". "]).unwrap());
        }
        Text(text)
    }
}
