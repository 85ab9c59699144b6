//! Wheel cipher engine.
//!
//! This crate contains the deterministic pieces of the wheel cipher task: key generation, the
//! bigram substitution table and text transform, hint granting, the decryption workspace, the
//! selected-bigram span, and grading.
//!
//! ## Determinism requirements
//! - Do not use wall-clock time or OS randomness; everything derives from the task seed through
//!   [`rng_pipeline::SeedStreams`].
//! - Avoid iteration order of hash-based collections influencing outputs.
//!
//! ## Minimal task pipeline (example)
//! ```rust
//! use wheel_execution::{HintHistory, SentenceGenerator, TaskConfig, TaskData};
//!
//! let task = TaskData::generate(42, &TaskConfig::default(), &SentenceGenerator, &HintHistory::new())
//!     .unwrap();
//! assert_eq!(task.table().decode(&task.cipher_text), task.clear_text);
//!
//! let answer = wheel_types::Answer {
//!     keys: task.key.targets().iter().map(|t| *t as i32).collect(),
//! };
//! assert_eq!(task.grader().grade(&answer, 0).score, 100);
//! ```

pub mod cipher;
pub mod config;
pub mod decryption;
pub mod frequency;
pub mod grader;
pub mod hints;
pub mod keys;
pub mod permutation;
pub mod preview;
pub mod rng_pipeline;
pub mod span;
pub mod task;
pub mod text;

#[cfg(test)]
mod property_tests;

pub use cipher::SubstitutionTable;
pub use config::{GradingPolicy, Reflection, TaskConfig, TaskVariant, TextConfig, DEV_MODE_SEED};
pub use decryption::{Cell, DecryptionEvent, DecryptionState};
pub use frequency::{most_frequent, BigramFrequency, FRENCH_BIGRAMS};
pub use grader::{GradeError, Grader};
pub use hints::{grant, request_hint, HintError, HintHistory};
pub use keys::{generate_key, DEV_KEY};
pub use permutation::{decoding_key, inverse_permutation};
pub use preview::{decipher_preview, partial_substitution, render_preview, PreviewEntry, Quality};
pub use rng_pipeline::SeedStreams;
pub use span::{BigramSpan, SpanCell};
pub use task::{TaskData, TaskError};
pub use text::{SentenceGenerator, TextGenerator};
