use std::fmt;

use serde::{Deserialize, Serialize};

use super::Alphabet;

/// An ordered pair of wheel positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Bigram {
    pub first: usize,
    pub second: usize,
}

impl Bigram {
    pub const fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }

    /// Dense index in `0..n²`, row-major on `first`.
    pub const fn index(self, n: usize) -> usize {
        self.first * n + self.second
    }

    pub const fn from_index(index: usize, n: usize) -> Self {
        Self {
            first: index / n,
            second: index % n,
        }
    }

    /// Parse two symbols; `None` if either is outside the alphabet.
    pub fn from_symbols(alphabet: &Alphabet, first: char, second: char) -> Option<Self> {
        Some(Self {
            first: alphabet.position(first)?,
            second: alphabet.position(second)?,
        })
    }

    pub fn symbols(self, alphabet: &Alphabet) -> Option<(char, char)> {
        Some((alphabet.symbol(self.first)?, alphabet.symbol(self.second)?))
    }

    pub fn is_double(self) -> bool {
        self.first == self.second
    }
}

impl fmt::Display for Bigram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}
