//! Grading of submitted decryptions.

use thiserror::Error as ThisError;
use tracing::info;
use wheel_types::wheel::{BLANK_SYMBOL, EXACT_KEY_HINT_COST, MAX_SCORE, TABLE_HINT_COST};
use wheel_types::{Alphabet, Answer, Grade, Key};

use crate::cipher::SubstitutionTable;
use crate::config::{GradingPolicy, TaskVariant};

#[derive(Debug, ThisError, Clone, PartialEq, Eq)]
pub enum GradeError {
    #[error("malformed answer: {0}")]
    MalformedAnswer(String),
}

/// Scores answers against one task's key.
#[derive(Clone, Debug)]
pub struct Grader {
    alphabet: Alphabet,
    key: Key,
    table: SubstitutionTable,
    variant: TaskVariant,
}

impl Grader {
    pub fn new(alphabet: &Alphabet, key: &Key, variant: TaskVariant) -> Self {
        Self {
            alphabet: alphabet.clone(),
            key: key.clone(),
            table: SubstitutionTable::build(alphabet, key, variant.reflection),
            variant,
        }
    }

    /// Grade a JSON answer document (`{"keys": [...]}`).
    pub fn grade_json(&self, raw: &str, hints_used: usize) -> Result<Grade, GradeError> {
        let answer: Answer =
            serde_json::from_str(raw).map_err(|e| GradeError::MalformedAnswer(e.to_string()))?;
        Ok(self.grade(&answer, hints_used))
    }

    pub fn grade(&self, answer: &Answer, hints_used: usize) -> Grade {
        let (correct, cost) = match self.variant.grading {
            GradingPolicy::ExactKey => (self.matches_key(answer), EXACT_KEY_HINT_COST),
            GradingPolicy::TableEquivalence => (self.matches_table(answer), TABLE_HINT_COST),
        };
        let hints = u32::try_from(hints_used).unwrap_or(u32::MAX);
        let used = format!(
            "You have used {hints_used} hint{}.",
            if hints_used == 1 { "" } else { "s" }
        );
        let grade = if correct {
            Grade {
                score: MAX_SCORE.saturating_sub(hints.saturating_mul(cost)),
                message: format!("Congrats! Decryption key is correct. {used}"),
            }
        } else {
            Grade {
                score: 0,
                message: format!("Decryption key is wrong. {used}"),
            }
        };
        info!(
            policy = ?self.variant.grading,
            correct,
            hints_used,
            score = grade.score,
            "graded answer"
        );
        grade
    }

    fn matches_key(&self, answer: &Answer) -> bool {
        let submitted: String = answer
            .keys
            .iter()
            .map(|rank| self.alphabet.symbol_at_rank(*rank).unwrap_or(BLANK_SYMBOL))
            .collect();
        submitted == self.key.to_string()
    }

    fn matches_table(&self, answer: &Answer) -> bool {
        let symbols: Option<Vec<char>> = answer
            .keys
            .iter()
            .map(|rank| self.alphabet.symbol_at_rank(*rank))
            .collect();
        let Some(symbols) = symbols else {
            return false;
        };
        match Key::new(&self.alphabet, symbols) {
            Ok(key) => SubstitutionTable::build(&self.alphabet, &key, self.variant.reflection)
                .is_equivalent(&self.table),
            Err(_) => false,
        }
    }
}
