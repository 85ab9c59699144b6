//! Clear text generation.

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

/// Produces the clear text of a task from the task's text stream.
///
/// Implementations must be deterministic in `rng`: the same stream state gives the same text.
pub trait TextGenerator {
    fn generate(&self, rng: &mut dyn RngCore, min_len: usize, max_len: usize) -> String;
}

const WORDS: &[&str] = &[
    "LE", "LA", "LES", "UN", "UNE", "DES", "DE", "DU", "ET", "EN", "EST", "SONT", "IL", "ELLE",
    "ILS", "NOUS", "VOUS", "ON", "QUI", "QUE", "DANS", "SUR", "AVEC", "POUR", "PAR", "PAS",
    "PLUS", "TOUT", "MAIS", "COMME", "SON", "SES", "LEUR", "CETTE", "CE", "AU", "AUX", "SE",
    "NE", "MAISON", "JARDIN", "ROUTE", "VILLE", "ENFANT", "ENFANTS", "TEMPS", "JOUR", "NUIT",
    "SOLEIL", "RIVIERE", "FORET", "MONTAGNE", "ECOLE", "LIVRE", "LETTRE", "MESSAGE", "SECRET",
    "CHEMIN", "PORTE", "FENETRE", "TABLE", "VOITURE", "TRAIN", "MARCHE", "PARLE", "REGARDE",
    "TROUVE", "PREND", "DONNE", "ARRIVE", "PART", "RESTE", "ATTEND", "ENTEND", "CHERCHE",
    "GRAND", "PETIT", "PETITE", "NOUVEAU", "ANCIEN", "BELLE", "VIEUX", "RAPIDE", "LENTEMENT",
    "SOUVENT", "TOUJOURS", "ENCORE", "DEJA", "ENSEMBLE", "DEMAIN", "HIER", "ICI", "LOIN",
    "PRES", "ENTRE", "SANS", "SOUS", "APRES", "AVANT", "PENDANT", "QUAND", "POURQUOI",
];

/// Upper-case French-like sentences over the standard alphabet plus spaces.
///
/// Sentences hold 4 to 12 words, sometimes a comma, and end with `.` or `?`. The result is never
/// longer than `max_len`; it reaches `min_len` as long as the gap between the two bounds can fit
/// one more word.
#[derive(Clone, Copy, Debug, Default)]
pub struct SentenceGenerator;

impl TextGenerator for SentenceGenerator {
    fn generate(&self, rng: &mut dyn RngCore, min_len: usize, max_len: usize) -> String {
        let max_len = max_len.max(min_len);
        let mut text = String::with_capacity(max_len);
        let mut remaining = 0usize;

        loop {
            if remaining == 0 {
                if text.len() >= min_len {
                    break;
                }
                remaining = rng.gen_range(4..=12);
            }
            let Some(word) = WORDS.choose(rng) else {
                break;
            };
            let sep = usize::from(!text.is_empty());
            // One byte is always kept free for the closing mark.
            if text.len() + sep + word.len() + 1 > max_len {
                break;
            }
            if sep == 1 {
                text.push(' ');
            }
            text.push_str(word);
            remaining -= 1;

            if remaining == 0 {
                text.push(if rng.gen_ratio(1, 5) { '?' } else { '.' });
            } else if remaining > 1 && rng.gen_ratio(1, 10) && text.len() + 2 <= max_len {
                text.push(',');
            }
        }

        if remaining > 0 && !text.is_empty() {
            text.push('.');
        }
        text
    }
}
