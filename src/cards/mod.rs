//! Card system: card definitions and the shuffled deck.
//!
//! ## Key Types
//!
//! - `Card`: candy shortcut or colour card (single/double)
//! - `CardTypeId`: bookkeeping id per (colour, single/double) kind
//! - `Deck`: template multiset plus the working supply it deals from

pub mod deck;
pub mod definition;

pub use deck::{standard_cards, Deck, COLOR_COUNTS};
pub use definition::{Card, CardTypeId};
