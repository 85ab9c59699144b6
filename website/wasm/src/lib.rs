//! Browser bindings for the decryption workspace.
//!
//! The host page owns one [`Workspace`] per task: it is built from the task's public data, edited
//! through the exported methods, and dumped to JSON for local save/restore.

use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;
use wheel_execution::{
    render_preview, BigramSpan, DecryptionEvent, DecryptionState, Reflection,
};
use wheel_types::{DumpCell, Hint, PublicData};

/// Helper to convert a serializable value to a plain JavaScript object
fn to_object(value: &impl Serialize) -> Result<JsValue, JsValue> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize: {e}")))
}

/// A player's decryption workspace.
#[wasm_bindgen]
pub struct Workspace {
    public: PublicData,
    reflection: Reflection,
    state: DecryptionState,
    selected: (usize, usize),
}

impl Workspace {
    fn from_json(public_data_json: &str, reflection: Option<&str>) -> Result<Self, String> {
        let public: PublicData = serde_json::from_str(public_data_json)
            .map_err(|e| format!("Failed to parse task data: {e}"))?;
        let reflection = match reflection {
            Some(raw) => serde_json::from_value(serde_json::Value::String(raw.to_string()))
                .map_err(|_| format!("Unknown reflection: {raw}"))?,
            None => Reflection::default(),
        };
        let state =
            DecryptionState::load(&public.alphabet, &public.answer_keys, &public.hints, &[]);
        Ok(Self {
            public,
            reflection,
            state,
            selected: (0, 0),
        })
    }

    fn update(&mut self, event: DecryptionEvent) {
        self.state = self.state.clone().apply(event);
    }

    fn restore_cells(&mut self, cells: &[DumpCell]) {
        self.state = DecryptionState::load(
            &self.public.alphabet,
            &self.public.answer_keys,
            &self.public.hints,
            cells,
        );
    }
}

#[wasm_bindgen]
impl Workspace {
    /// Create a workspace from the task's public data (JSON).
    #[wasm_bindgen(constructor)]
    pub fn new(public_data_json: &str, reflection: Option<String>) -> Result<Workspace, JsValue> {
        Self::from_json(public_data_json, reflection.as_deref()).map_err(|e| JsValue::from_str(&e))
    }

    /// Type into a cell. Anything but a single alphabet symbol clears it.
    pub fn set_guess(&mut self, rank: usize, input: &str) {
        self.update(DecryptionEvent::SetGuess {
            rank,
            input: input.to_string(),
        });
    }

    pub fn set_locked(&mut self, rank: usize, locked: bool) {
        self.update(DecryptionEvent::SetLocked { rank, locked });
    }

    /// Reveal a newly granted hint (`{"cellRank": n, "symbol": "X", "type": "type_1"}`).
    pub fn apply_hint(&mut self, hint_json: &str) -> Result<(), JsValue> {
        let hint: Hint = serde_json::from_str(hint_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse hint: {e}")))?;
        self.public.hints.push(hint);
        self.update(DecryptionEvent::ApplyHint(hint));
        Ok(())
    }

    /// Cells with their guess, lock, hint, and conflict flags.
    pub fn cells(&self) -> Result<JsValue, JsValue> {
        to_object(&self.state.cells())
    }

    /// Save format: one `[rank, locked]` pair per cell, as JSON.
    pub fn dump(&self) -> String {
        serde_json::to_string(&self.state.dump()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Load a save produced by [`Workspace::dump`] (or a bare rank list).
    pub fn restore(&mut self, dump_json: &str) -> Result<(), JsValue> {
        let cells: Vec<DumpCell> = serde_json::from_str(dump_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse dump: {e}")))?;
        self.restore_cells(&cells);
        Ok(())
    }

    /// Submission form of the current guesses, as JSON.
    pub fn answer(&self) -> String {
        serde_json::to_string(&self.state.answer()).unwrap_or_else(|_| "{\"keys\":[]}".to_string())
    }

    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }

    /// Symbols a plain-position hint should no longer offer.
    pub fn known_symbols(&self) -> String {
        self.state.known_symbols().into_iter().collect()
    }

    /// Next cell the cursor may stop on, if any.
    pub fn next_editable(&self, from: usize, step: i32) -> Option<u32> {
        self.state
            .next_editable(from, i64::from(step))
            .and_then(|rank| u32::try_from(rank).ok())
    }

    pub fn select_bigram(&mut self, l1: usize, l2: usize) {
        let n = self.public.alphabet.len();
        self.selected = (l1 % n, l2 % n);
    }

    /// Span tags for the selected bigram.
    pub fn span(&self) -> Result<JsValue, JsValue> {
        let (l1, l2) = self.selected;
        to_object(&BigramSpan::new(self.public.alphabet.len(), l1, l2))
    }

    /// Cipher text deciphered with the current guesses; unknown symbols become `placeholder`.
    pub fn preview(&self, placeholder: char) -> String {
        render_preview(&self.state, self.reflection, &self.public.cipher_text, placeholder)
    }
}
