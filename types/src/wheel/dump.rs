use serde::{Deserialize, Serialize};

use super::UNFILLED_RANK;

/// One cell of a persisted decryption.
///
/// Workspace saves carry `[rank, locked]` pairs; submitted answers carry bare ranks with no lock
/// information. Both load into the same workspace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DumpCell {
    Pair([i32; 2]),
    Rank(i32),
}

impl DumpCell {
    pub fn new(rank: i32, locked: bool) -> Self {
        Self::Pair([rank, i32::from(locked)])
    }

    pub fn empty() -> Self {
        Self::Pair([UNFILLED_RANK, 0])
    }

    pub fn rank(&self) -> i32 {
        match self {
            Self::Pair([rank, _]) | Self::Rank(rank) => *rank,
        }
    }

    pub fn locked(&self) -> bool {
        match self {
            Self::Pair([_, locked]) => *locked != 0,
            Self::Rank(_) => false,
        }
    }
}
