//! Wheel cipher domain types.
//!
//! Defines the alphabet, key, hint, answer, dump and task-data types used by the execution
//! engine, the CLI and the browser bindings.

mod alphabet;
mod answer;
mod bigram;
mod constants;
mod dump;
mod hint;
mod key;
mod task;

pub use alphabet::{Alphabet, AlphabetError};
pub use answer::{Answer, AnswerKey, Grade};
pub use bigram::Bigram;
pub use constants::*;
pub use dump::DumpCell;
pub use hint::{Hint, HintKind, HintRequest, ParseHintKindError};
pub use key::{Key, KeyError};
pub use task::{PrivateData, PublicData};
