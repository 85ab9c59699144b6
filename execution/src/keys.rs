//! Encoding key generation.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;
use wheel_types::{Alphabet, Key, KeyError};

/// Key used by the development build of the task: the alphabet letters rotated by seven, with
/// punctuation left in place.
pub const DEV_KEY: &str = "HIJKLMNOPQRSTUVWXYZABCDEFG,.?";

/// Shuffle `alphabet` into a uniformly random key.
///
/// The result is re-validated through [`Key::new`]; an error here means the shuffle broke the
/// permutation invariant and the task must not be generated.
pub fn generate_key<R: Rng + ?Sized>(alphabet: &Alphabet, rng: &mut R) -> Result<Key, KeyError> {
    let mut symbols = alphabet.symbols().to_vec();
    symbols.shuffle(rng);
    let key = Key::new(alphabet, symbols)?;
    debug!(len = key.len(), "generated encoding key");
    Ok(key)
}
