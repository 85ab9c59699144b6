//! Bigram frequency analysis of a text.

use std::collections::BTreeMap;

use serde::Serialize;
use wheel_types::{Alphabet, Bigram};

/// Most frequent bigrams of written French, in percent.
pub const FRENCH_BIGRAMS: &[(&str, f64)] = &[
    ("ES", 3.1), ("LE", 2.2), ("DE", 2.2), ("RE", 2.1), ("EN", 2.1), ("ON", 1.6), ("NT", 1.6),
    ("ER", 1.5), ("TE", 1.5), ("ET", 1.4), ("EL", 1.4), ("AN", 1.4), ("SE", 1.3), ("LA", 1.3),
    ("AI", 1.2), ("NE", 1.1), ("OU", 1.1), ("QU", 1.1), ("ME", 1.1), ("IT", 1.1), ("IE", 1.1),
    ("ED", 1.0), ("EM", 1.0), ("UR", 1.0), ("IS", 1.0), ("EC", 1.0), ("UE", 0.9), ("TI", 0.9),
    ("RA", 0.9), ("IN", 0.8),
];

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BigramFrequency {
    pub bigram: String,
    pub count: usize,
    pub percent: f64,
}

/// Bigrams of `text` as the cipher pairs them: alphabet symbols two by two, skipping anything
/// else. A trailing unpaired symbol is not counted.
pub fn bigrams(alphabet: &Alphabet, text: &str) -> Vec<Bigram> {
    let positions: Vec<usize> = text.chars().filter_map(|c| alphabet.position(c)).collect();
    positions
        .chunks_exact(2)
        .map(|pair| Bigram::new(pair[0], pair[1]))
        .collect()
}

/// The `limit` most frequent bigrams of `text`, most frequent first. Ties are ordered by
/// alphabet position.
pub fn most_frequent(alphabet: &Alphabet, text: &str, limit: usize) -> Vec<BigramFrequency> {
    let pairs = bigrams(alphabet, text);
    let total = pairs.len();
    let mut counts: BTreeMap<Bigram, usize> = BTreeMap::new();
    for pair in pairs {
        *counts.entry(pair).or_default() += 1;
    }

    let mut ranked: Vec<(Bigram, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked
        .into_iter()
        .take(limit)
        .filter_map(|(bigram, count)| {
            let (a, b) = bigram.symbols(alphabet)?;
            Some(BigramFrequency {
                bigram: [a, b].iter().collect(),
                count,
                percent: 100.0 * count as f64 / total as f64,
            })
        })
        .collect()
}
