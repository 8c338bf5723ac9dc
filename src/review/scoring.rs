//! Remember score: a smoothed estimate of how often a card is forgotten.
//!
//! ## Formula
//!
//! For a card with `l` left swipes and `r` right swipes:
//!
//! - `l + r == 0`: exactly [`NEUTRAL_SCORE`]
//! - otherwise: `round((l + 1) / (l + r + 2) * 100)`, halves rounded up
//!
//! The `+1`/`+2` (Laplace smoothing) pulls the score toward 50 while a card
//! has few reviews and lets it converge on the real left-swipe ratio as
//! reviews accumulate. Arithmetic is done on integers so the half-up
//! rounding is exact.

use crate::cards::Card;

/// Score of a card that has never been reviewed.
pub const NEUTRAL_SCORE: u32 = 50;

/// Upper bound of the score range.
pub const MAX_SCORE: u32 = 100;

/// `weight = WEIGHT_CEILING - score`, so every weight is in `1..=101`.
pub const WEIGHT_CEILING: u32 = MAX_SCORE + 1;

/// Remember score of `card`, in `0..=100`.
///
/// Higher means the card was swiped "not remembered" more often.
///
/// ```
/// use flipcards::cards::Card;
/// use flipcards::review::score;
///
/// assert_eq!(score(&Card::new("q", "a")), 50);
/// assert_eq!(score(&Card::new("q", "a").with_swipes(1, 0)), 67);
/// ```
#[must_use]
pub fn score(card: &Card) -> u32 {
    let total = card.total_swipes();
    if total == 0 {
        return NEUTRAL_SCORE;
    }

    // floor(a / b + 1/2) == floor((2a + b) / 2b)
    let a = (u64::from(card.left_swipes) + 1) * u64::from(MAX_SCORE);
    let b = total + 2;
    let rounded = (2 * a + b) / (2 * b);

    // left <= total, so a / b < 100
    rounded.min(u64::from(MAX_SCORE)) as u32
}

/// Lottery weight of `card` for next-card selection.
///
/// Cards with a lower score get a higher weight.
#[must_use]
pub fn weight(card: &Card) -> u32 {
    WEIGHT_CEILING - score(card)
}
