use serde::{Deserialize, Serialize};

/// A pre-filled cell handed to the client with the task (not user-editable).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnswerKey {
    #[serde(rename = "cellRank")]
    pub cell_rank: usize,
    pub symbol: char,
}

/// A submitted decryption: one alphabet rank per cell, `-1` for an unfilled cell.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub keys: Vec<i32>,
}

/// Outcome of grading an [`Answer`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grade {
    /// 0..=100.
    pub score: u32,
    pub message: String,
}
