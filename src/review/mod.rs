//! Adaptive review: remember scores, next-card selection, review sessions.
//!
//! ## Control Flow
//!
//! ```text
//! read deck -> select_next -> show card -> swipe settles
//!     -> record swipe on shown card -> save decks -> select_next again
//! ```
//!
//! [`score`] and [`select_next`] are pure apart from the injected random
//! source. [`ReviewSession`] owns the cursor and drives the cycle above.

pub mod scoring;
pub mod selection;
pub mod session;

pub use scoring::{score, weight, MAX_SCORE, NEUTRAL_SCORE, WEIGHT_CEILING};
pub use selection::{card_weights, lottery_index, select_next, select_next_with_thread_rng, Weights};
pub use session::ReviewSession;
