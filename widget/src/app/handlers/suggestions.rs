//! # Suggestion Chip Rotation
//!
//! Rotates the quick-suggestion chips from a variant's static phrase list.
//! The rotation runs on every third accepted user send.

use crate::app::state::SuggestionChip;
use rand::seq::SliceRandom;
use rand::Rng;

/// Number of chips shown under the input row
pub const SUGGESTION_SLOTS: usize = 3;

/// Maximum label length before the displayed text is elided
pub const LABEL_MAX_LEN: usize = 20;

/// Build a fresh chip rotation: shuffle the phrase list and keep the first
/// [`SUGGESTION_SLOTS`] entries. The stored phrase is kept in full; only the
/// displayed label is elided.
pub(crate) fn rotate(phrases: &[&str], rng: &mut impl Rng) -> Vec<SuggestionChip> {
    let mut shuffled: Vec<&str> = phrases.to_vec();
    shuffled.shuffle(rng);
    shuffled
        .into_iter()
        .take(SUGGESTION_SLOTS)
        .map(SuggestionChip::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const PHRASES: &[&str] = &[
        "What's the best deal you have?",
        "Can you tell me about financing options?",
        "What electric vehicles do you offer?",
        "Do you have any trucks available?",
        "Tell me about the warranty",
    ];

    #[test]
    fn rotation_fills_all_slots() {
        let mut rng = StdRng::seed_from_u64(3);
        let chips = rotate(PHRASES, &mut rng);

        assert_eq!(chips.len(), SUGGESTION_SLOTS);
    }

    #[test]
    fn rotation_is_deterministic_for_a_seed() {
        let mut a = StdRng::seed_from_u64(11);
        let mut b = StdRng::seed_from_u64(11);

        assert_eq!(rotate(PHRASES, &mut a), rotate(PHRASES, &mut b));
    }

    #[test]
    fn chips_come_from_the_phrase_list() {
        let mut rng = StdRng::seed_from_u64(5);
        let chips = rotate(PHRASES, &mut rng);

        for chip in &chips {
            assert!(PHRASES.contains(&chip.phrase.as_str()));
        }
    }

    #[test]
    fn long_phrases_get_elided_labels_but_keep_full_text() {
        let chip = SuggestionChip::new("What's the fuel economy of the Equinox?");

        assert_eq!(chip.label, "What's the fuel econ...");
        assert_eq!(chip.phrase, "What's the fuel economy of the Equinox?");
    }

    #[test]
    fn short_phrases_keep_their_label() {
        let chip = SuggestionChip::new("Trade-ins?");

        assert_eq!(chip.label, "Trade-ins?");
    }

    #[test]
    fn short_lists_yield_fewer_chips() {
        let mut rng = StdRng::seed_from_u64(9);
        let chips = rotate(&["Only one"], &mut rng);

        assert_eq!(chips.len(), 1);
    }
}
