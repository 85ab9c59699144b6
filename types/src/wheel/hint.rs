use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error as ThisError;

/// The two paid reveals.
///
/// Serialized with the legacy wire names (`type_1`, `type_2`) so persisted histories keep
/// loading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HintKind {
    /// Reveal which key symbol sits at a chosen position.
    #[serde(rename = "type_1")]
    RevealKeyLetter,
    /// Reveal at which position a chosen alphabet symbol sits in the key.
    #[serde(rename = "type_2")]
    RevealPlainPosition,
}

impl HintKind {
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::RevealKeyLetter => "type_1",
            Self::RevealPlainPosition => "type_2",
        }
    }
}

impl fmt::Display for HintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

#[derive(Debug, ThisError, Clone, PartialEq, Eq)]
#[error("unknown hint kind {0:?} (expected type_1/key or type_2/plain)")]
pub struct ParseHintKindError(pub String);

impl FromStr for HintKind {
    type Err = ParseHintKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "type_1" | "key" => Ok(Self::RevealKeyLetter),
            "type_2" | "plain" => Ok(Self::RevealPlainPosition),
            other => Err(ParseHintKindError(other.to_string())),
        }
    }
}

/// A hint request as sent by a client: `{"cellRank": 3, "type": "type_1"}`.
///
/// `cellRank` may arrive as a numeric string (older clients sent the raw `<select>` value);
/// both forms deserialize to the same request. Unknown fields are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HintRequest {
    #[serde(rename = "cellRank", deserialize_with = "deserialize_rank")]
    pub cell_rank: usize,
    #[serde(rename = "type")]
    pub kind: HintKind,
}

impl HintRequest {
    pub fn new(cell_rank: usize, kind: HintKind) -> Self {
        Self { cell_rank, kind }
    }
}

/// A granted hint: `symbol` belongs in cell `cell_rank`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hint {
    #[serde(rename = "cellRank")]
    pub cell_rank: usize,
    pub symbol: char,
    #[serde(rename = "type")]
    pub kind: HintKind,
}

fn deserialize_rank<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Rank {
        Number(u64),
        Text(String),
    }

    match Rank::deserialize(deserializer)? {
        Rank::Number(n) => usize::try_from(n).map_err(serde::de::Error::custom),
        Rank::Text(s) => s.trim().parse::<usize>().map_err(serde::de::Error::custom),
    }
}
