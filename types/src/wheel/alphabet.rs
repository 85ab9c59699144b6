use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error as ThisError;

use super::STANDARD_ALPHABET;

#[derive(Debug, ThisError, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    #[error("alphabet has no symbols")]
    Empty,
    #[error("symbol {symbol:?} appears twice (positions {first} and {second})")]
    DuplicateSymbol {
        symbol: char,
        first: usize,
        second: usize,
    },
}

/// Ordered set of distinct symbols. A symbol's index is its position on the wheel.
///
/// The alphabet is fixed for the lifetime of a task; positions `0..len()` are the coordinate
/// space used by keys, cells, bigrams and spans.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::standard()
    }
}

impl Alphabet {
    /// The 29-symbol alphabet: `A`..`Z` followed by `,`, `.` and `?`.
    pub fn standard() -> Self {
        Self {
            symbols: STANDARD_ALPHABET.chars().collect(),
        }
    }

    /// Build an alphabet, rejecting duplicates (a duplicate would break every bijection built on
    /// top of it).
    pub fn new(symbols: impl IntoIterator<Item = char>) -> Result<Self, AlphabetError> {
        let symbols: Vec<char> = symbols.into_iter().collect();
        if symbols.is_empty() {
            return Err(AlphabetError::Empty);
        }
        for (second, symbol) in symbols.iter().enumerate() {
            if let Some(first) = symbols[..second].iter().position(|s| s == symbol) {
                return Err(AlphabetError::DuplicateSymbol {
                    symbol: *symbol,
                    first,
                    second,
                });
            }
        }
        Ok(Self { symbols })
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

    pub fn position(&self, symbol: char) -> Option<usize> {
        self.symbols.iter().position(|s| *s == symbol)
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.position(symbol).is_some()
    }

    /// Reduce any signed offset onto the wheel, i.e. `value mod len()` in `0..len()`.
    pub fn wrap(&self, value: i64) -> usize {
        value.rem_euclid(self.symbols.len() as i64) as usize
    }

    /// Symbol at `rank`, or `None` for `-1` and any other out-of-range rank.
    pub fn symbol_at_rank(&self, rank: i32) -> Option<char> {
        usize::try_from(rank).ok().and_then(|p| self.symbol(p))
    }

    /// Rank of `symbol`, `-1` when it is absent.
    pub fn rank_of(&self, symbol: Option<char>) -> i32 {
        symbol
            .and_then(|s| self.position(s))
            .map_or(super::UNFILLED_RANK, |p| p as i32)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

impl Serialize for Alphabet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Alphabet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Alphabet::new(raw.chars()).map_err(serde::de::Error::custom)
    }
}
