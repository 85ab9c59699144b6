//! Permutation helpers: key inversion and position lookups.

use wheel_types::wheel::BLANK_SYMBOL;
use wheel_types::{Alphabet, Key};

/// Inverse of `key` over `alphabet`, as a symbol string.
///
/// Position `i` of the result holds the alphabet symbol `s` whose key entry is `alphabet[i]`.
/// Positions with no preimage (only possible for a malformed key) are left as
/// [`BLANK_SYMBOL`] rather than failing.
pub fn inverse_permutation(alphabet: &Alphabet, key: &[char]) -> String {
    let mut result = vec![BLANK_SYMBOL; alphabet.len()];
    for (i, symbol) in key.iter().enumerate().take(alphabet.len()) {
        if let (Some(target), Some(source)) = (alphabet.position(*symbol), alphabet.symbol(i)) {
            result[target] = source;
        }
    }
    result.into_iter().collect()
}

/// Decoding key for a validated encoding key.
pub fn decoding_key(alphabet: &Alphabet, key: &Key) -> String {
    inverse_permutation(alphabet, key.symbols())
}

/// Forward lookup: alphabet position of the key symbol at `position`.
pub fn forward(key: &Key, position: usize) -> Option<usize> {
    key.target(position)
}

/// Backward lookup: the key position holding alphabet symbol number `target`.
pub fn backward(key: &Key, target: usize) -> Option<usize> {
    key.targets().iter().position(|t| *t == target)
}
