use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error as ThisError;

use super::Alphabet;

#[derive(Debug, ThisError, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("key length mismatch (got={got}, expected={expected})")]
    LengthMismatch { got: usize, expected: usize },
    #[error("key symbol {symbol:?} is not in the alphabet")]
    UnknownSymbol { symbol: char },
    #[error("key is not a permutation: {symbol:?} is used more than once")]
    NotPermutation { symbol: char },
}

/// A permutation of an alphabet.
///
/// `symbol(i)` is the key symbol sitting at wheel position `i`. Keys are only ever built
/// through [`Key::new`], so every value of this type is a bijection over its alphabet.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Key {
    symbols: Vec<char>,
    positions: Vec<usize>,
}

impl Key {
    pub fn new(alphabet: &Alphabet, symbols: impl IntoIterator<Item = char>) -> Result<Self, KeyError> {
        let symbols: Vec<char> = symbols.into_iter().collect();
        if symbols.len() != alphabet.len() {
            return Err(KeyError::LengthMismatch {
                got: symbols.len(),
                expected: alphabet.len(),
            });
        }

        let mut seen = vec![false; alphabet.len()];
        let mut positions = Vec::with_capacity(symbols.len());
        for symbol in &symbols {
            let position = alphabet
                .position(*symbol)
                .ok_or(KeyError::UnknownSymbol { symbol: *symbol })?;
            if std::mem::replace(&mut seen[position], true) {
                return Err(KeyError::NotPermutation { symbol: *symbol });
            }
            positions.push(position);
        }

        Ok(Self { symbols, positions })
    }

    /// The identity permutation (every position holds its own alphabet symbol).
    pub fn identity(alphabet: &Alphabet) -> Self {
        Self {
            symbols: alphabet.symbols().to_vec(),
            positions: (0..alphabet.len()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn symbol(&self, position: usize) -> Option<char> {
        self.symbols.get(position).copied()
    }

    /// Alphabet position of the key symbol at `position`.
    pub fn target(&self, position: usize) -> Option<usize> {
        self.positions.get(position).copied()
    }

    /// Alphabet positions of every key symbol, in key order.
    pub fn targets(&self) -> &[usize] {
        &self.positions
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}
