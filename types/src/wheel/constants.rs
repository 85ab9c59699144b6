/// Symbols of the cipher wheel, in position order.
pub const STANDARD_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ,.?";

/// Number of positions on the standard wheel.
pub const ALPHABET_LEN: usize = 29;

/// Number of ordered bigrams over the standard alphabet.
pub const BIGRAM_COUNT: usize = ALPHABET_LEN * ALPHABET_LEN;

/// Rank used in answers and dumps for an unfilled cell.
pub const UNFILLED_RANK: i32 = -1;

/// Symbol written for an unfilled or unknown position.
pub const BLANK_SYMBOL: char = ' ';

/// Clear text length bounds used by the original task.
pub const DEFAULT_MIN_TEXT_LENGTH: usize = 1000;
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 1100;

/// Highest score a submission can earn.
pub const MAX_SCORE: u32 = 100;

/// Points deducted per hint under the exact-key policy.
pub const EXACT_KEY_HINT_COST: u32 = 1;

/// Points deducted per hint under the table-equivalence policy.
pub const TABLE_HINT_COST: u32 = 5;
