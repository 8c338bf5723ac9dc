//! Core types: errors, configuration, random sources.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{ReviewConfig, StoreConfig, DEFAULT_STORE_KEY};
pub use error::{FlipcardsError, Result};
pub use rng::{RandomSource, ReviewRng, ScriptedDraws};
