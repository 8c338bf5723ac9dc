//! Next-card selection: an inverse-score weighted lottery with anti-repeat.
//!
//! ## Algorithm
//!
//! 1. Decks with zero or one card always yield index 0.
//! 2. Each card gets `weight = 101 - score` (see [`scoring::weight`]).
//! 3. A draw `r` in `[0, total_weight)` is walked through the weights in
//!    deck order; the first card whose cumulative weight exceeds `r` wins.
//! 4. If the winner is the card currently shown, the card after it
//!    (wrapping) is returned instead, so the same card never shows twice in
//!    a row while the deck has more than one card.
//!
//! The selector holds no state. Cursor indices belong to the caller and are
//! positional, so callers must pass the freshly read card sequence.

use smallvec::SmallVec;
use tracing::debug;

use super::scoring;
use crate::cards::Card;
use crate::core::RandomSource;

/// Per-card lottery weights. Inline for typical deck sizes.
pub type Weights = SmallVec<[u32; 32]>;

/// Lottery weight of every card, in deck order.
#[must_use]
pub fn card_weights(cards: &[Card]) -> Weights {
    cards.iter().map(scoring::weight).collect()
}

/// Index the lottery lands on for a raw `draw` in `[0, sum(weights))`.
///
/// Draws at or past the total (impossible for a well-formed draw) fall back
/// to index 0.
#[must_use]
pub fn lottery_index(weights: &[u32], draw: u64) -> usize {
    let mut remaining = draw;
    for (i, &weight) in weights.iter().enumerate() {
        let weight = u64::from(weight);
        if remaining < weight {
            return i;
        }
        remaining -= weight;
    }
    0
}

/// Pick the index of the card to show after `current_index`.
///
/// An out-of-range `current_index` is accepted; it simply never triggers the
/// anti-repeat redirect.
///
/// ```
/// use flipcards::cards::Card;
/// use flipcards::core::ScriptedDraws;
/// use flipcards::review::select_next;
///
/// let cards = vec![Card::new("a", "1"), Card::new("b", "2"), Card::new("c", "3")];
///
/// // Unreviewed cards all weigh 51: a draw of 60 lands on index 1.
/// let mut draws = ScriptedDraws::new(vec![60]);
/// assert_eq!(select_next(&cards, 0, &mut draws), 1);
///
/// // Landing on the current card moves to the one after it.
/// let mut draws = ScriptedDraws::new(vec![60]);
/// assert_eq!(select_next(&cards, 1, &mut draws), 2);
/// ```
pub fn select_next<R: RandomSource + ?Sized>(
    cards: &[Card],
    current_index: usize,
    rng: &mut R,
) -> usize {
    if cards.len() <= 1 {
        return 0;
    }

    let weights = card_weights(cards);
    let total: u64 = weights.iter().map(|&w| u64::from(w)).sum();
    if total == 0 {
        return following(current_index, cards.len());
    }

    let draw = rng.draw_below(total);
    let picked = lottery_index(&weights, draw);

    if picked == current_index {
        let redirected = following(current_index, cards.len());
        debug!(picked, redirected, draw, total, "Lottery repeated current card");
        redirected
    } else {
        debug!(picked, draw, total, "Selected next card");
        picked
    }
}

/// [`select_next`] with the thread-local RNG, for callers that do not need
/// reproducible order.
pub fn select_next_with_thread_rng(cards: &[Card], current_index: usize) -> usize {
    select_next(cards, current_index, &mut rand::thread_rng())
}

/// Index after `index`, wrapping at `len`.
fn following(index: usize, len: usize) -> usize {
    index.checked_add(1).map_or(0, |i| i % len)
}
