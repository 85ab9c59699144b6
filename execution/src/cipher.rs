//! The bigram substitution table and the text transform built on it.
//!
//! Every plain bigram `P = (p1, p2)` has a cipher bigram obtained by reflecting each position
//! through the other on the wheel (see [`Reflection::mirror`]) and reading the key at the
//! reflected positions. The table stores both directions:
//!
//! - `lookup[cipher(P)] = P`, used by [`SubstitutionTable::encode`];
//! - `reverse[P] = cipher(P)`, used by [`SubstitutionTable::decode`].
//!
//! The reflection is a bijection on the `n²` bigrams but is not its own inverse, so the two
//! indices differ in general and `decode(encode(text)) == text` relies on keeping both.

use tracing::debug;
use wheel_types::{Alphabet, Bigram, Key};

use crate::config::Reflection;

/// Full bigram substitution for one key and one reflection family.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubstitutionTable {
    alphabet: Alphabet,
    lookup: Vec<Bigram>,
    reverse: Vec<Bigram>,
}

impl SubstitutionTable {
    pub fn build(alphabet: &Alphabet, key: &Key, reflection: Reflection) -> Self {
        let n = alphabet.len();
        let mut lookup = vec![Bigram::new(0, 0); n * n];
        let mut reverse = vec![Bigram::new(0, 0); n * n];
        for index in 0..n * n {
            let plain = Bigram::from_index(index, n);
            let (m1, m2) = reflection.mirror(plain.first, plain.second, n);
            let cipher = Bigram::new(key.targets()[m1], key.targets()[m2]);
            lookup[cipher.index(n)] = plain;
            reverse[index] = cipher;
        }
        debug!(entries = n * n, ?reflection, "built substitution table");
        Self {
            alphabet: alphabet.clone(),
            lookup,
            reverse,
        }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Number of entries (`n²`).
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }

    /// Output of the encode direction for one bigram.
    pub fn substitute(&self, bigram: Bigram) -> Bigram {
        self.lookup[bigram.index(self.alphabet.len())]
    }

    /// Output of the decode direction for one bigram; inverse of [`Self::substitute`].
    pub fn restore(&self, bigram: Bigram) -> Bigram {
        self.reverse[bigram.index(self.alphabet.len())]
    }

    /// `(input, output)` pairs of the encode direction, in input order.
    pub fn entries(&self) -> impl Iterator<Item = (Bigram, Bigram)> + '_ {
        let n = self.alphabet.len();
        self.lookup
            .iter()
            .enumerate()
            .map(move |(index, out)| (Bigram::from_index(index, n), *out))
    }

    /// True when both tables substitute every bigram the same way, even if built from
    /// different keys.
    pub fn is_equivalent(&self, other: &Self) -> bool {
        self.alphabet == other.alphabet && self.lookup == other.lookup
    }

    pub fn encode(&self, text: &str) -> String {
        transform(&self.alphabet, text, |b| self.substitute(b))
    }

    pub fn decode(&self, text: &str) -> String {
        transform(&self.alphabet, text, |b| self.restore(b))
    }
}

/// Pair up alphabet symbols left to right and map each pair through `map`.
///
/// Non-alphabet characters between the two symbols of a pair are re-inserted between the two
/// output symbols; those outside any pair are copied as they are. A trailing unpaired symbol is
/// copied unchanged.
pub fn transform(alphabet: &Alphabet, text: &str, map: impl Fn(Bigram) -> Bigram) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending: Option<(usize, char)> = None;
    let mut between = String::new();

    for ch in text.chars() {
        match (alphabet.position(ch), pending) {
            (Some(second), Some((first, first_ch))) => {
                let mapped = map(Bigram::new(first, second));
                match mapped.symbols(alphabet) {
                    Some((a, b)) => {
                        out.push(a);
                        out.push_str(&between);
                        out.push(b);
                    }
                    None => {
                        out.push(first_ch);
                        out.push_str(&between);
                        out.push(ch);
                    }
                }
                between.clear();
                pending = None;
            }
            (Some(first), None) => pending = Some((first, ch)),
            (None, Some(_)) => between.push(ch),
            (None, None) => out.push(ch),
        }
    }

    if let Some((_, first_ch)) = pending {
        out.push(first_ch);
        out.push_str(&between);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::DEV_KEY;
    use wheel_types::ALPHABET_LEN;

    fn identity_table(reflection: Reflection) -> SubstitutionTable {
        let alphabet = Alphabet::standard();
        let key = Key::identity(&alphabet);
        SubstitutionTable::build(&alphabet, &key, reflection)
    }

    fn dev_table() -> SubstitutionTable {
        let alphabet = Alphabet::standard();
        let key = Key::new(&alphabet, DEV_KEY.chars()).unwrap();
        SubstitutionTable::build(&alphabet, &key, Reflection::Outward)
    }

    #[test]
    fn test_identity_key_known_bigram() {
        let table = identity_table(Reflection::Outward);
        // cipher(U, K) = (2·10 − 20, 2·20 − 10) = (0, 30 ≡ 1) = (A, B).
        assert_eq!(table.encode("AB"), "UK");
        assert_eq!(table.decode("UK"), "AB");
    }

    #[test]
    fn test_table_is_bijective() {
        let table = dev_table();
        assert_eq!(table.len(), ALPHABET_LEN * ALPHABET_LEN);
        let mut seen = vec![false; table.len()];
        for (_, out) in table.entries() {
            assert!(!std::mem::replace(&mut seen[out.index(ALPHABET_LEN)], true));
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_restore_inverts_substitute() {
        let table = dev_table();
        for (input, out) in table.entries() {
            assert_eq!(table.restore(out), input);
        }
    }

    #[test]
    fn test_round_trip_with_separators() {
        let table = dev_table();
        let clear = "BONJOUR, LE MONDE? OUI.";
        let cipher = table.encode(clear);
        assert_eq!(cipher.chars().count(), clear.chars().count());
        assert_eq!(table.decode(&cipher), clear);
    }

    #[test]
    fn test_separator_inside_bigram_is_kept_between_outputs() {
        let table = dev_table();
        let joined = table.encode("AB");
        let split = table.encode("A  B");
        let expected: String = [
            joined.chars().next().unwrap().to_string(),
            "  ".to_string(),
            joined.chars().nth(1).unwrap().to_string(),
        ]
        .concat();
        assert_eq!(split, expected);
    }

    #[test]
    fn test_trailing_symbol_passes_through() {
        let table = dev_table();
        let cipher = table.encode("ABC");
        assert!(cipher.ends_with('C'));
        assert_eq!(table.encode("ABC! "), format!("{}! ", &cipher));
        assert_eq!(table.encode(""), "");
        assert_eq!(table.encode("   "), "   ");
        assert_eq!(table.encode("a-b"), "a-b");
    }

    #[test]
    fn test_reflection_families_differ() {
        let outward = identity_table(Reflection::Outward);
        let swapped = identity_table(Reflection::Swapped);
        assert!(!outward.is_equivalent(&swapped));
        assert_eq!(swapped.decode(&swapped.encode("ABCD")), "ABCD");
    }

    #[test]
    fn test_equivalent_tables() {
        assert!(dev_table().is_equivalent(&dev_table()));
        assert!(!dev_table().is_equivalent(&identity_table(Reflection::Outward)));
    }
}
