//! Cards and swipe outcomes.
//!
//! A `Card` is an immutable value: reviewing it produces a new card with one
//! counter incremented, and counters only go back to zero through an
//! explicit reset.

use serde::{Deserialize, Serialize};

use crate::review::scoring;

/// Direction of a committed swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwipeDirection {
    /// "Not remembered".
    Left,
    /// "Remembered".
    Right,
}

/// Resting state of a drag gesture after release.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Settle {
    Left,
    /// The drag did not cross its commit threshold.
    Center,
    Right,
}

impl Settle {
    /// The committed direction, or `None` for a cancelled swipe.
    #[must_use]
    pub const fn direction(self) -> Option<SwipeDirection> {
        match self {
            Settle::Left => Some(SwipeDirection::Left),
            Settle::Center => None,
            Settle::Right => Some(SwipeDirection::Right),
        }
    }
}

impl From<SwipeDirection> for Settle {
    fn from(direction: SwipeDirection) -> Self {
        match direction {
            SwipeDirection::Left => Settle::Left,
            SwipeDirection::Right => Settle::Right,
        }
    }
}

/// A flashcard with its review history.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub title: String,
    pub description: String,

    /// Times the card was swiped "not remembered".
    #[serde(default)]
    pub left_swipes: u32,

    /// Times the card was swiped "remembered".
    #[serde(default)]
    pub right_swipes: u32,
}

impl Card {
    /// Create an unreviewed card.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            left_swipes: 0,
            right_swipes: 0,
        }
    }

    /// Set both counters. Mostly useful for fixtures.
    #[must_use]
    pub fn with_swipes(mut self, left_swipes: u32, right_swipes: u32) -> Self {
        self.left_swipes = left_swipes;
        self.right_swipes = right_swipes;
        self
    }

    /// A copy of this card with the counter for `direction` incremented.
    ///
    /// Counters saturate rather than wrap.
    #[must_use]
    pub fn swiped(&self, direction: SwipeDirection) -> Self {
        let mut card = self.clone();
        match direction {
            SwipeDirection::Left => card.left_swipes = card.left_swipes.saturating_add(1),
            SwipeDirection::Right => card.right_swipes = card.right_swipes.saturating_add(1),
        }
        card
    }

    /// A copy of this card with its review history cleared.
    #[must_use]
    pub fn reset(&self) -> Self {
        self.clone().with_swipes(0, 0)
    }

    /// Total number of committed swipes.
    #[must_use]
    pub fn total_swipes(&self) -> u64 {
        u64::from(self.left_swipes) + u64::from(self.right_swipes)
    }

    /// Remember score in `0..=100`. See [`scoring::score`].
    #[must_use]
    pub fn score(&self) -> u32 {
        scoring::score(self)
    }
}
