//! The decryption workspace.
//!
//! A [`DecryptionState`] holds one [`Cell`] per wheel position. Cell `i` is the player's guess for
//! the key symbol at position `i`. The state is a value: every edit goes through
//! [`DecryptionState::apply`], which consumes the old state and returns the new one with
//! conflicts and the backward permutation recomputed from scratch.

use serde::Serialize;
use tracing::debug;
use wheel_types::wheel::BLANK_SYMBOL;
use wheel_types::{Alphabet, Answer, AnswerKey, DumpCell, Hint};

/// One wheel position in the workspace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub rank: usize,
    pub guess: Option<char>,
    pub locked: bool,
    /// Revealed by a hint; never editable again.
    pub hint: bool,
    /// Pre-filled by the task; never editable.
    pub filled: bool,
    pub conflict: bool,
}

impl Cell {
    fn empty(rank: usize) -> Self {
        Self {
            rank,
            ..Self::default()
        }
    }

    /// Whether the player may change the guess.
    pub fn is_editable(&self) -> bool {
        !(self.locked || self.hint || self.filled)
    }

    /// Whether the cursor may stop here.
    pub fn is_selectable(&self) -> bool {
        !(self.locked || self.hint)
    }
}

/// A discrete edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecryptionEvent {
    /// Typed input for a cell. Anything other than a single alphabet symbol clears the guess.
    SetGuess { rank: usize, input: String },
    SetLocked { rank: usize, locked: bool },
    ApplyHint(Hint),
    Fill(AnswerKey),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecryptionState {
    alphabet: Alphabet,
    cells: Vec<Cell>,
    backward: Vec<Option<usize>>,
}

impl DecryptionState {
    /// All cells empty, nothing locked or hinted.
    pub fn new(alphabet: &Alphabet) -> Self {
        Self {
            alphabet: alphabet.clone(),
            cells: (0..alphabet.len()).map(Cell::empty).collect(),
            backward: vec![None; alphabet.len()],
        }
    }

    /// Rebuild a workspace from a dump, then overlay hints and pre-filled cells.
    ///
    /// `cells` may be shorter than the alphabet; missing and out-of-range entries load empty.
    pub fn load(alphabet: &Alphabet, answer_keys: &[AnswerKey], hints: &[Hint], cells: &[DumpCell]) -> Self {
        let mut state = Self::new(alphabet);
        for (cell, dumped) in state.cells.iter_mut().zip(cells) {
            cell.guess = alphabet.symbol_at_rank(dumped.rank());
            cell.locked = dumped.locked();
        }
        for hint in hints {
            state.reveal(hint.cell_rank, hint.symbol, |cell| cell.hint = true);
        }
        for answer_key in answer_keys {
            state.reveal(answer_key.cell_rank, answer_key.symbol, |cell| cell.filled = true);
        }
        state.recompute();
        state
    }

    pub fn apply(mut self, event: DecryptionEvent) -> Self {
        match event {
            DecryptionEvent::SetGuess { rank, input } => {
                let symbol = self.normalize(&input);
                match self.cells.get_mut(rank) {
                    Some(cell) if cell.is_editable() => cell.guess = symbol,
                    Some(_) => debug!(rank, "ignoring edit of protected cell"),
                    None => debug!(rank, "ignoring edit of unknown cell"),
                }
            }
            DecryptionEvent::SetLocked { rank, locked } => {
                if let Some(cell) = self.cells.get_mut(rank) {
                    cell.locked = locked;
                }
            }
            DecryptionEvent::ApplyHint(hint) => {
                self.reveal(hint.cell_rank, hint.symbol, |cell| cell.hint = true);
            }
            DecryptionEvent::Fill(answer_key) => {
                self.reveal(answer_key.cell_rank, answer_key.symbol, |cell| cell.filled = true);
            }
        }
        self.recompute();
        self
    }

    pub fn set_guess(self, rank: usize, input: impl Into<String>) -> Self {
        self.apply(DecryptionEvent::SetGuess {
            rank,
            input: input.into(),
        })
    }

    pub fn set_locked(self, rank: usize, locked: bool) -> Self {
        self.apply(DecryptionEvent::SetLocked { rank, locked })
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, rank: usize) -> Option<&Cell> {
        self.cells.get(rank)
    }

    /// Alphabet position of each cell's guess, for non-empty non-conflicting cells.
    pub fn backward(&self) -> &[Option<usize>] {
        &self.backward
    }

    pub fn conflicts(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells.iter().filter(|c| c.conflict).map(|c| c.rank)
    }

    /// Every cell filled and no symbol used twice.
    pub fn is_solved(&self) -> bool {
        self.backward.iter().all(Option::is_some)
    }

    /// The guesses as a key string, blank where a cell is empty.
    pub fn guessed_key(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.guess.unwrap_or(BLANK_SYMBOL))
            .collect()
    }

    /// The guesses in submission form.
    pub fn answer(&self) -> Answer {
        Answer {
            keys: self.cells.iter().map(|c| self.alphabet.rank_of(c.guess)).collect(),
        }
    }

    pub fn dump(&self) -> Vec<DumpCell> {
        self.cells
            .iter()
            .map(|c| DumpCell::new(self.alphabet.rank_of(c.guess), c.locked))
            .collect()
    }

    /// Symbols the player already knows for sure: hinted and locked guesses.
    pub fn known_symbols(&self) -> Vec<char> {
        let mut known: Vec<char> = self
            .cells
            .iter()
            .filter(|c| c.hint || c.locked)
            .filter_map(|c| c.guess)
            .collect();
        known.sort_unstable();
        known.dedup();
        known
    }

    /// Move the cursor `step` cells from `from`, skipping hinted and locked cells.
    ///
    /// Returns `None` when the walk comes back to `from` without finding a stop.
    pub fn next_editable(&self, from: usize, step: i64) -> Option<usize> {
        if self.cells.is_empty() {
            return None;
        }
        let step = step.rem_euclid(self.cells.len() as i64);
        if step == 0 {
            return None;
        }
        let start = self.alphabet.wrap(from as i64);
        let mut rank = start;
        loop {
            rank = self.alphabet.wrap(rank as i64 + step);
            if rank == start {
                return None;
            }
            if self.cells[rank].is_selectable() {
                return Some(rank);
            }
        }
    }

    fn normalize(&self, input: &str) -> Option<char> {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) if self.alphabet.contains(symbol) => Some(symbol),
            _ => None,
        }
    }

    fn reveal(&mut self, rank: usize, symbol: char, mark: impl FnOnce(&mut Cell)) {
        if !self.alphabet.contains(symbol) {
            debug!(rank, ?symbol, "ignoring reveal of unknown symbol");
            return;
        }
        if let Some(cell) = self.cells.get_mut(rank) {
            cell.guess = Some(symbol);
            mark(cell);
        }
    }

    fn recompute(&mut self) {
        let alphabet = &self.alphabet;
        let mut holders = vec![0usize; alphabet.len()];
        for cell in &self.cells {
            if let Some(position) = cell.guess.and_then(|s| alphabet.position(s)) {
                holders[position] += 1;
            }
        }
        for (cell, slot) in self.cells.iter_mut().zip(self.backward.iter_mut()) {
            let position = cell.guess.and_then(|s| alphabet.position(s));
            cell.conflict = position.is_some_and(|p| holders[p] > 1);
            *slot = position.filter(|_| !cell.conflict);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wheel_types::HintKind;

    fn fresh() -> DecryptionState {
        DecryptionState::new(&Alphabet::standard())
    }

    #[test]
    fn test_initial_state() {
        let state = fresh();
        assert_eq!(state.cells().len(), 29);
        assert!(state.cells().iter().all(|c| c.guess.is_none() && c.is_editable()));
        assert!(state.backward().iter().all(Option::is_none));
        assert!(!state.is_solved());
        assert_eq!(state.guessed_key(), " ".repeat(29));
    }

    #[test]
    fn test_invalid_input_clears_guess() {
        let state = fresh().set_guess(0, "Q");
        assert_eq!(state.cell(0).unwrap().guess, Some('Q'));
        for input in ["", "QQ", "q", "!", " "] {
            let cleared = state.clone().set_guess(0, input);
            assert_eq!(cleared.cell(0).unwrap().guess, None, "input {input:?}");
        }
    }

    #[test]
    fn test_conflicts_mark_every_holder_and_clear() {
        let state = fresh().set_guess(0, "A").set_guess(5, "A").set_guess(9, "A");
        assert_eq!(state.conflicts().collect::<Vec<_>>(), vec![0, 5, 9]);
        assert_eq!(state.backward()[0], None);

        let state = state.set_guess(5, "B").set_guess(9, "");
        assert_eq!(state.conflicts().count(), 0);
        assert_eq!(state.backward()[0], Some(0));
        assert_eq!(state.backward()[5], Some(1));
        assert_eq!(state.backward()[9], None);
    }

    #[test]
    fn test_locked_cell_ignores_edits() {
        let state = fresh().set_guess(3, "D").set_locked(3, true).set_guess(3, "E");
        assert_eq!(state.cell(3).unwrap().guess, Some('D'));
        let state = state.set_locked(3, false).set_guess(3, "E");
        assert_eq!(state.cell(3).unwrap().guess, Some('E'));
    }

    #[test]
    fn test_hint_is_permanent() {
        let hint = Hint {
            cell_rank: 2,
            symbol: 'Z',
            kind: HintKind::RevealKeyLetter,
        };
        let state = fresh().apply(DecryptionEvent::ApplyHint(hint)).set_guess(2, "A");
        let cell = state.cell(2).unwrap();
        assert!(cell.hint);
        assert_eq!(cell.guess, Some('Z'));
        assert_eq!(state.known_symbols(), vec!['Z']);
    }

    #[test]
    fn test_out_of_range_edit_is_ignored() {
        let state = fresh().set_guess(40, "A").set_locked(40, true);
        assert_eq!(state, fresh());
    }

    #[test]
    fn test_dump_and_load() {
        let alphabet = Alphabet::standard();
        let state = fresh().set_guess(0, "C").set_guess(1, "?").set_locked(1, true);
        let dump = state.dump();
        assert_eq!(dump[0], DumpCell::new(2, false));
        assert_eq!(dump[1], DumpCell::new(28, true));
        assert_eq!(dump[2], DumpCell::empty());
        assert_eq!(DecryptionState::load(&alphabet, &[], &[], &dump), state);
    }

    #[test]
    fn test_load_overlays_hints_and_answer_keys() {
        let alphabet = Alphabet::standard();
        let hints = [Hint {
            cell_rank: 0,
            symbol: 'K',
            kind: HintKind::RevealPlainPosition,
        }];
        let answer_keys = [AnswerKey {
            cell_rank: 1,
            symbol: 'K',
        }];
        let cells = [DumpCell::Rank(4), DumpCell::Rank(99), DumpCell::Rank(4)];
        let state = DecryptionState::load(&alphabet, &answer_keys, &hints, &cells);
        assert!(state.cell(0).unwrap().hint);
        assert!(state.cell(1).unwrap().filled);
        assert!(!state.cell(1).unwrap().is_editable());
        // Hint and pre-filled cell share K; the plain rank 4 in cell 2 is unique.
        assert_eq!(state.conflicts().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(state.backward()[2], Some(4));
    }

    #[test]
    fn test_next_editable_skips_protected_cells() {
        let state = fresh().set_locked(1, true).set_locked(2, true);
        assert_eq!(state.next_editable(0, 1), Some(3));
        assert_eq!(state.next_editable(0, -1), Some(28));
        assert_eq!(state.next_editable(3, -1), Some(0));
        assert_eq!(state.next_editable(0, 0), None);

        let mut all_locked = fresh();
        for rank in 0..29 {
            all_locked = all_locked.set_locked(rank, true);
        }
        assert_eq!(all_locked.next_editable(4, 1), None);
    }

    #[test]
    fn test_next_editable_with_huge_steps() {
        let state = fresh();
        // i64::MAX ≡ 11 and i64::MIN ≡ 17 (mod 29).
        assert_eq!(state.next_editable(0, i64::MAX), Some(11));
        assert_eq!(state.next_editable(0, i64::MIN), Some(17));
        assert_eq!(state.next_editable(5, 29), None);
        assert_eq!(state.next_editable(5, -28), Some(6));
    }

    #[test]
    fn test_solved_state() {
        let alphabet = Alphabet::standard();
        let mut state = fresh();
        for (rank, symbol) in alphabet.symbols().iter().rev().enumerate() {
            state = state.set_guess(rank, symbol.to_string());
        }
        assert!(state.is_solved());
        assert_eq!(state.backward()[0], Some(28));
        assert_eq!(state.answer().keys[0], 28);
        assert_eq!(state.guessed_key(), "?.,ZYXWVUTSRQPONMLKJIHGFEDCBA");
    }
}
