//! Property tests for the cipher and the decryption workspace.
//!
//! 1. **Table**: for every seeded key and both reflection families, the substitution table is a
//!    bijection over the `n²` bigrams, and decoding inverts encoding on any text.
//!
//! 2. **Workspace**: for any edit sequence, conflicts mark exactly the cells sharing a symbol
//!    and the backward permutation is set exactly on non-empty non-conflicting cells.
//!
//! 3. **Hints and spans**: grants are pure and always reveal the key, duplicates are always
//!    rejected, and spans are symmetric in their two anchors.

#[cfg(test)]
mod tests {
    use crate::cipher::SubstitutionTable;
    use crate::config::Reflection;
    use crate::decryption::DecryptionState;
    use crate::hints::{grant, HintHistory};
    use crate::keys::generate_key;
    use crate::permutation::inverse_permutation;
    use crate::rng_pipeline::SeedStreams;
    use crate::span::BigramSpan;
    use proptest::prelude::*;
    use wheel_types::{Alphabet, HintKind, HintRequest, Key, ALPHABET_LEN, STANDARD_ALPHABET};

    // ─────────────────────────────────────────────────────────────────────────────
    // Generators
    // ─────────────────────────────────────────────────────────────────────────────

    fn arb_reflection() -> impl Strategy<Value = Reflection> {
        prop_oneof![Just(Reflection::Outward), Just(Reflection::Swapped)]
    }

    fn arb_key() -> impl Strategy<Value = Key> {
        any::<u64>().prop_map(|seed| {
            generate_key(&Alphabet::standard(), &mut SeedStreams::new(seed).keys)
                .expect("shuffle is a permutation")
        })
    }

    /// Text over the alphabet only.
    fn arb_clear_text() -> impl Strategy<Value = String> {
        prop::collection::vec(0..ALPHABET_LEN, 0..200).prop_map(|positions| {
            let alphabet = Alphabet::standard();
            positions
                .into_iter()
                .filter_map(|p| alphabet.symbol(p))
                .collect()
        })
    }

    /// Text mixing alphabet symbols with separators the cipher does not know.
    fn arb_mixed_text() -> impl Strategy<Value = String> {
        let symbol = prop::sample::select(STANDARD_ALPHABET.chars().collect::<Vec<_>>());
        let other = prop::sample::select(vec![' ', '\n', '-', '\'', 'e', '!', 'é']);
        prop::collection::vec(prop_oneof![3 => symbol, 1 => other], 0..200)
            .prop_map(|chars| chars.into_iter().collect())
    }

    /// A guess edit: rank (sometimes out of range) and typed input.
    fn arb_edit() -> impl Strategy<Value = (usize, String)> {
        let input = prop_oneof![
            4 => prop::sample::select(STANDARD_ALPHABET.chars().collect::<Vec<_>>())
                .prop_map(|c| c.to_string()),
            1 => Just(String::new()),
            1 => Just("AB".to_string()),
            1 => Just("x".to_string()),
        ];
        (0..ALPHABET_LEN + 2, input)
    }

    fn arb_request() -> impl Strategy<Value = HintRequest> {
        (
            0..ALPHABET_LEN,
            prop_oneof![
                Just(HintKind::RevealKeyLetter),
                Just(HintKind::RevealPlainPosition)
            ],
        )
            .prop_map(|(cell_rank, kind)| HintRequest::new(cell_rank, kind))
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property: Table
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_table_is_bijection(key in arb_key(), reflection in arb_reflection()) {
            let alphabet = Alphabet::standard();
            let table = SubstitutionTable::build(&alphabet, &key, reflection);
            prop_assert_eq!(table.len(), ALPHABET_LEN * ALPHABET_LEN);
            let mut seen = vec![false; table.len()];
            for (input, out) in table.entries() {
                prop_assert!(!seen[out.index(ALPHABET_LEN)], "output repeated");
                seen[out.index(ALPHABET_LEN)] = true;
                prop_assert_eq!(table.restore(out), input);
            }
        }

        #[test]
        fn prop_round_trip(
            key in arb_key(),
            reflection in arb_reflection(),
            text in arb_clear_text(),
        ) {
            let table = SubstitutionTable::build(&Alphabet::standard(), &key, reflection);
            let cipher = table.encode(&text);
            prop_assert_eq!(cipher.chars().count(), text.chars().count());
            prop_assert_eq!(table.decode(&cipher), text);
        }

        #[test]
        fn prop_separators_keep_their_place(key in arb_key(), text in arb_mixed_text()) {
            let alphabet = Alphabet::standard();
            let table = SubstitutionTable::build(&alphabet, &key, Reflection::Outward);
            let cipher = table.encode(&text);
            for (clear, ciphered) in text.chars().zip(cipher.chars()) {
                prop_assert_eq!(alphabet.contains(clear), alphabet.contains(ciphered));
                if !alphabet.contains(clear) {
                    prop_assert_eq!(clear, ciphered);
                }
            }
            prop_assert_eq!(table.decode(&cipher), text);
        }

        #[test]
        fn prop_inverse_is_involution(key in arb_key()) {
            let alphabet = Alphabet::standard();
            let inverse: Vec<char> = inverse_permutation(&alphabet, key.symbols()).chars().collect();
            prop_assert_eq!(inverse_permutation(&alphabet, &inverse), key.to_string());
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property: Workspace
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_conflicts_and_backward(edits in prop::collection::vec(arb_edit(), 0..80)) {
            let alphabet = Alphabet::standard();
            let state = edits
                .into_iter()
                .fold(DecryptionState::new(&alphabet), |state, (rank, input)| {
                    state.set_guess(rank, input)
                });

            for cell in state.cells() {
                let holders = cell
                    .guess
                    .map(|g| state.cells().iter().filter(|c| c.guess == Some(g)).count())
                    .unwrap_or(0);
                prop_assert_eq!(cell.conflict, holders > 1);
                let expected = cell
                    .guess
                    .filter(|_| !cell.conflict)
                    .and_then(|g| alphabet.position(g));
                prop_assert_eq!(state.backward()[cell.rank], expected);
            }
            prop_assert_eq!(
                state.is_solved(),
                state.cells().iter().all(|c| c.guess.is_some() && !c.conflict)
            );
        }

        #[test]
        fn prop_dump_restores_state(
            edits in prop::collection::vec(arb_edit(), 0..40),
            locks in prop::collection::vec((0..ALPHABET_LEN, any::<bool>()), 0..10),
        ) {
            let alphabet = Alphabet::standard();
            let mut state = DecryptionState::new(&alphabet);
            for (rank, input) in edits {
                state = state.set_guess(rank, input);
            }
            for (rank, locked) in locks {
                state = state.set_locked(rank, locked);
            }
            let restored = DecryptionState::load(&alphabet, &[], &[], &state.dump());
            prop_assert_eq!(restored, state);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property: Hints and spans
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_grant_reveals_key(key in arb_key(), request in arb_request()) {
            let alphabet = Alphabet::standard();
            let hint = grant(request, &key, &alphabet).unwrap();
            prop_assert_eq!(grant(request, &key, &alphabet).unwrap(), hint);
            prop_assert_eq!(key.symbol(hint.cell_rank), Some(hint.symbol));
            prop_assert_eq!(hint.kind, request.kind);
        }

        #[test]
        fn prop_duplicates_always_rejected(requests in prop::collection::vec(arb_request(), 0..40)) {
            let mut history = HintHistory::new();
            let mut granted: Vec<HintRequest> = Vec::new();
            for request in requests {
                let fresh = !granted.contains(&request);
                prop_assert_eq!(history.try_append(request).is_ok(), fresh);
                if fresh {
                    granted.push(request);
                }
            }
            prop_assert_eq!(history.requests(), granted.as_slice());
        }

        #[test]
        fn prop_span_symmetry(l1 in 0..ALPHABET_LEN, l2 in 0..ALPHABET_LEN) {
            let forward = BigramSpan::new(ALPHABET_LEN, l1, l2);
            let backward = BigramSpan::new(ALPHABET_LEN, l2, l1);
            prop_assert_eq!(forward.active(), backward.active());
            prop_assert_eq!(&forward.l1_cells, &backward.l2_cells);
            for cells in [&forward.l1_cells, &forward.l2_cells] {
                prop_assert!(cells.iter().all(|c| !(c.is_middle && c.is_active)));
            }
        }
    }
}
