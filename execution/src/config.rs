//! Task configuration.
//!
//! A task instance is fully determined by its seed and a [`TaskConfig`]. The config picks one of
//! the two reflection families, one of the two grading policies, and the clear text bounds.
//! Every field has a default, so an empty YAML/JSON document is a valid config.

use serde::{Deserialize, Serialize};
use wheel_types::wheel::{DEFAULT_MAX_TEXT_LENGTH, DEFAULT_MIN_TEXT_LENGTH};

/// Seed every task uses when [`TaskConfig::dev_mode`] is set.
pub const DEV_MODE_SEED: u64 = 1;

/// How a plain pair `(p1, p2)` is reflected to find its cipher positions.
///
/// Both are bijections on position pairs, but they are distinct cipher families: a ciphertext
/// produced under one cannot be read back under the other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reflection {
    /// `(2·p2 − p1, 2·p1 − p2)`: each position reflected through the other.
    #[default]
    Outward,
    /// `(2·p1 − p2, 2·p2 − p1)`: the same reflections with the operands exchanged.
    Swapped,
}

impl Reflection {
    /// Cipher positions for the plain pair `(p1, p2)` on a wheel of `n` positions.
    pub fn mirror(self, p1: usize, p2: usize, n: usize) -> (usize, usize) {
        let (a, b, n) = (p1 as i64, p2 as i64, n as i64);
        let toward_second = (b + (b - a)).rem_euclid(n) as usize;
        let toward_first = (a - (b - a)).rem_euclid(n) as usize;
        match self {
            Self::Outward => (toward_second, toward_first),
            Self::Swapped => (toward_first, toward_second),
        }
    }
}

/// How a submission is compared with the canonical key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradingPolicy {
    /// Literal key equality; one point per hint.
    #[default]
    ExactKey,
    /// Equal substitution tables; five points per hint.
    TableEquivalence,
}

/// Which edition of the task is being played.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskVariant {
    pub reflection: Reflection,
    pub grading: GradingPolicy,
}

/// Clear text length bounds handed to the text generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub min_length: usize,
    pub max_length: usize,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_TEXT_LENGTH,
            max_length: DEFAULT_MAX_TEXT_LENGTH,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskConfig {
    pub variant: TaskVariant,
    pub text: TextConfig,
    /// Force [`DEV_MODE_SEED`] for every task.
    pub dev_mode: bool,
}

impl TaskConfig {
    /// The seed a task is actually generated from.
    pub fn effective_seed(&self, seed: u64) -> u64 {
        if self.dev_mode {
            DEV_MODE_SEED
        } else {
            seed
        }
    }
}
