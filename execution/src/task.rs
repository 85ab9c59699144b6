//! Assembly of one task instance from its seed.

use thiserror::Error as ThisError;
use tracing::{info, warn};
use wheel_types::{Alphabet, Hint, Key, KeyError, PrivateData, PublicData};

use crate::cipher::SubstitutionTable;
use crate::config::TaskConfig;
use crate::grader::Grader;
use crate::hints::{self, HintHistory};
use crate::keys::{self, DEV_KEY};
use crate::permutation;
use crate::rng_pipeline::SeedStreams;
use crate::text::TextGenerator;

#[derive(Debug, ThisError, Clone, PartialEq, Eq)]
pub enum TaskError {
    #[error("key generation failed: {0}")]
    Key(#[from] KeyError),
}

/// Everything derived from `(seed, config)`.
#[derive(Clone, Debug)]
pub struct TaskData {
    pub seed: u64,
    pub config: TaskConfig,
    pub alphabet: Alphabet,
    pub key: Key,
    pub decoding_key: String,
    pub clear_text: String,
    pub cipher_text: String,
    pub hints: Vec<Hint>,
    table: SubstitutionTable,
}

impl TaskData {
    /// Generate the task for `seed`, granting every request in `history`.
    ///
    /// Saved requests that cannot be granted (a cell off the wheel) are skipped.
    ///
    /// Identical inputs give identical output.
    pub fn generate(
        seed: u64,
        config: &TaskConfig,
        generator: &impl TextGenerator,
        history: &HintHistory,
    ) -> Result<Self, TaskError> {
        let seed = config.effective_seed(seed);
        let alphabet = Alphabet::standard();
        let mut streams = SeedStreams::new(seed);

        let key = if config.dev_mode {
            Key::new(&alphabet, DEV_KEY.chars())?
        } else {
            keys::generate_key(&alphabet, &mut streams.keys)?
        };
        let clear_text = generator.generate(
            &mut streams.text,
            config.text.min_length,
            config.text.max_length,
        );
        let table = SubstitutionTable::build(&alphabet, &key, config.variant.reflection);
        let cipher_text = table.encode(&clear_text);
        let decoding_key = permutation::decoding_key(&alphabet, &key);
        let hints = grant_saved(history, &key, &alphabet);

        info!(
            seed,
            dev_mode = config.dev_mode,
            text_len = clear_text.len(),
            hints = hints.len(),
            "generated task"
        );
        Ok(Self {
            seed,
            config: *config,
            alphabet,
            key,
            decoding_key,
            clear_text,
            cipher_text,
            hints,
            table,
        })
    }

    pub fn table(&self) -> &SubstitutionTable {
        &self.table
    }

    pub fn grader(&self) -> Grader {
        Grader::new(&self.alphabet, &self.key, self.config.variant)
    }

    /// What the client receives.
    pub fn public_data(&self) -> PublicData {
        PublicData {
            alphabet: self.alphabet.clone(),
            cipher_text: self.cipher_text.clone(),
            hints: self.hints.clone(),
            answer_keys: Vec::new(),
        }
    }

    /// What stays on the server.
    pub fn private_data(&self) -> PrivateData {
        PrivateData {
            clear_text: self.clear_text.clone(),
            encoding_key: self.key.to_string(),
            decoding_key: self.decoding_key.clone(),
        }
    }
}

fn grant_saved(history: &HintHistory, key: &Key, alphabet: &Alphabet) -> Vec<Hint> {
    history
        .requests()
        .iter()
        .filter_map(|request| match hints::grant(*request, key, alphabet) {
            Ok(hint) => Some(hint),
            Err(err) => {
                warn!(%err, "skipping saved hint request");
                None
            }
        })
        .collect()
}
