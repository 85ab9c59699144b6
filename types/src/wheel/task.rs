use serde::{Deserialize, Serialize};

use super::{Alphabet, AnswerKey, Hint};

/// Task data sent to the client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicData {
    pub alphabet: Alphabet,
    pub cipher_text: String,
    #[serde(default)]
    pub hints: Vec<Hint>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub answer_keys: Vec<AnswerKey>,
}

/// Task data that never leaves the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivateData {
    pub clear_text: String,
    pub encoding_key: String,
    pub decoding_key: String,
}
