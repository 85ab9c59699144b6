//! Hint granting and hint history.
//!
//! Both hint kinds reveal the same thing, the key symbol that belongs in one cell; they differ in
//! how the cell is chosen:
//!
//! - [`HintKind::RevealKeyLetter`]: the player picks the cell, the hint names its symbol.
//! - [`HintKind::RevealPlainPosition`]: the player picks an alphabet symbol, the hint names the
//!   cell holding it. The granted hint's `cell_rank` is that cell, not the requested one.

use serde_json::Value;
use thiserror::Error as ThisError;
use tracing::warn;
use wheel_types::{Alphabet, Hint, HintKind, HintRequest, Key};

use crate::permutation;

#[derive(Debug, ThisError, Clone, PartialEq, Eq)]
pub enum HintError {
    #[error("hint already requested (cell={cell_rank}, kind={kind})")]
    AlreadyRequested { cell_rank: usize, kind: HintKind },
    #[error("cell out of range (cell={cell_rank}, len={len})")]
    CellOutOfRange { cell_rank: usize, len: usize },
    #[error("malformed hint history: {0}")]
    MalformedHistory(String),
}

/// Reveal the symbol `request` asks for.
pub fn grant(request: HintRequest, key: &Key, alphabet: &Alphabet) -> Result<Hint, HintError> {
    let out_of_range = HintError::CellOutOfRange {
        cell_rank: request.cell_rank,
        len: alphabet.len(),
    };
    let (cell_rank, symbol) = match request.kind {
        HintKind::RevealKeyLetter => {
            let symbol = key.symbol(request.cell_rank).ok_or(out_of_range)?;
            (request.cell_rank, symbol)
        }
        HintKind::RevealPlainPosition => {
            let symbol = alphabet.symbol(request.cell_rank).ok_or(out_of_range.clone())?;
            let cell_rank = permutation::backward(key, request.cell_rank).ok_or(out_of_range)?;
            (cell_rank, symbol)
        }
    };
    Ok(Hint {
        cell_rank,
        symbol,
        kind: request.kind,
    })
}

/// Append-only list of granted hint requests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HintHistory {
    requests: Vec<HintRequest>,
}

impl HintHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a persisted history.
    ///
    /// The document must be a JSON array (an empty string counts as an empty history). Entries
    /// may be request objects or strings holding a JSON-encoded request. `null` entries and
    /// entries that do not parse are skipped with a warning.
    pub fn from_legacy_json(raw: &str) -> Result<Self, HintError> {
        if raw.trim().is_empty() {
            return Ok(Self::new());
        }
        let entries: Vec<Value> =
            serde_json::from_str(raw).map_err(|e| HintError::MalformedHistory(e.to_string()))?;

        let mut requests = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            let parsed = match entry {
                Value::Null => {
                    warn!(index, "skipping null hint history entry");
                    continue;
                }
                Value::String(encoded) => serde_json::from_str::<HintRequest>(&encoded),
                other => serde_json::from_value::<HintRequest>(other),
            };
            match parsed {
                Ok(request) => requests.push(request),
                Err(err) => warn!(index, %err, "skipping unreadable hint history entry"),
            }
        }
        Ok(Self { requests })
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.requests).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn requests(&self) -> &[HintRequest] {
        &self.requests
    }

    pub fn contains(&self, request: &HintRequest) -> bool {
        self.requests
            .iter()
            .any(|r| r.cell_rank == request.cell_rank && r.kind == request.kind)
    }

    /// Append `request` unless an equal one was already granted.
    pub fn try_append(&mut self, request: HintRequest) -> Result<(), HintError> {
        if self.contains(&request) {
            return Err(HintError::AlreadyRequested {
                cell_rank: request.cell_rank,
                kind: request.kind,
            });
        }
        self.requests.push(request);
        Ok(())
    }
}

/// Accept a new hint request against a persisted history.
///
/// Returns the request for the caller to record and grant; the history itself is not stored
/// here.
pub fn request_hint(
    history_json: &str,
    request: HintRequest,
    alphabet: &Alphabet,
) -> Result<HintRequest, HintError> {
    if request.cell_rank >= alphabet.len() {
        return Err(HintError::CellOutOfRange {
            cell_rank: request.cell_rank,
            len: alphabet.len(),
        });
    }
    let mut history = HintHistory::from_legacy_json(history_json)?;
    history.try_append(request)?;
    Ok(request)
}
