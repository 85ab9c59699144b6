//! What the current guesses already say about the cipher text.
//!
//! A cipher bigram at alphabet positions `(a, b)` deciphers to the key symbols at the reflected
//! positions `mirror(a, b)`. Those are exactly cells of the workspace, so every cipher bigram
//! whose reflected cells hold guesses can be read back partially, tagged with how sure each
//! symbol is.

use serde::Serialize;
use wheel_types::Bigram;

use crate::config::Reflection;
use crate::decryption::{Cell, DecryptionState};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Quality {
    Hint,
    Filled,
    Locked,
    Guess,
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PreviewSymbol {
    pub symbol: Option<char>,
    pub quality: Quality,
}

impl PreviewSymbol {
    fn of(cell: Option<&Cell>) -> Self {
        let Some(cell) = cell else {
            return Self::unknown();
        };
        let quality = match cell.guess {
            None => Quality::Unknown,
            Some(_) if cell.hint => Quality::Hint,
            Some(_) if cell.filled => Quality::Filled,
            Some(_) if cell.locked => Quality::Locked,
            Some(_) => Quality::Guess,
        };
        Self {
            symbol: cell.guess,
            quality,
        }
    }

    fn unknown() -> Self {
        Self {
            symbol: None,
            quality: Quality::Unknown,
        }
    }

    pub fn is_known(&self) -> bool {
        self.symbol.is_some()
    }
}

/// One cipher bigram and its partially known clear bigram.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PreviewEntry {
    pub cipher: Bigram,
    pub clear: [PreviewSymbol; 2],
}

/// Every cipher bigram with at least one known clear symbol.
pub fn partial_substitution(state: &DecryptionState, reflection: Reflection) -> Vec<PreviewEntry> {
    let n = state.alphabet().len();
    (0..n * n)
        .map(|index| {
            let cipher = Bigram::from_index(index, n);
            PreviewEntry {
                cipher,
                clear: clear_pair(state, reflection, cipher),
            }
        })
        .filter(|entry| entry.clear.iter().any(PreviewSymbol::is_known))
        .collect()
}

/// Decipher `cipher_text` with the current guesses, one slot per input character.
///
/// Characters outside the alphabet, and a trailing unpaired symbol, come back unchanged. Symbols
/// whose cell is empty come back as `None`.
pub fn decipher_preview(
    state: &DecryptionState,
    reflection: Reflection,
    cipher_text: &str,
) -> Vec<Option<char>> {
    let alphabet = state.alphabet();
    let chars: Vec<char> = cipher_text.chars().collect();
    let mut out = vec![None; chars.len()];
    let mut pending: Option<(usize, usize)> = None;

    for (index, ch) in chars.iter().enumerate() {
        match (alphabet.position(*ch), pending) {
            (Some(second), Some((first_index, first))) => {
                let [a, b] = clear_pair(state, reflection, Bigram::new(first, second));
                out[first_index] = a.symbol;
                out[index] = b.symbol;
                pending = None;
            }
            (Some(first), None) => pending = Some((index, first)),
            (None, _) => out[index] = Some(*ch),
        }
    }
    if let Some((index, _)) = pending {
        out[index] = Some(chars[index]);
    }
    out
}

/// [`decipher_preview`] rendered with `placeholder` for unknown symbols.
pub fn render_preview(
    state: &DecryptionState,
    reflection: Reflection,
    cipher_text: &str,
    placeholder: char,
) -> String {
    decipher_preview(state, reflection, cipher_text)
        .into_iter()
        .map(|c| c.unwrap_or(placeholder))
        .collect()
}

fn clear_pair(state: &DecryptionState, reflection: Reflection, cipher: Bigram) -> [PreviewSymbol; 2] {
    let n = state.alphabet().len();
    let (m1, m2) = reflection.mirror(cipher.first, cipher.second, n);
    [PreviewSymbol::of(state.cell(m1)), PreviewSymbol::of(state.cell(m2))]
}
