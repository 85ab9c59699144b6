//! Shared types for the wheel cipher task.
//!
//! Everything that crosses a boundary lives here: the alphabet and keys, hint requests and
//! granted hints, answers and grades, the persisted decryption dump, and the public/private
//! halves of a generated task. The engine itself lives in `wheel-execution`.

pub mod wheel;

pub use wheel::{
    Alphabet, AlphabetError, Answer, AnswerKey, Bigram, DumpCell, Grade, Hint, HintKind, HintRequest,
    Key, KeyError, ParseHintKindError, PrivateData, PublicData, ALPHABET_LEN, STANDARD_ALPHABET,
};
