//! Card definitions.
//!
//! A card is either a candy shortcut naming a landmark, or a colour card
//! that moves the player to the next square of that colour (twice for a
//! double).

use serde::{Deserialize, Serialize};

use crate::board::{Candy, Color};

/// Bookkeeping identifier for a distinct (colour, single/double) card kind.
///
/// Assigned in deck-building order. Has no effect on play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardTypeId(pub u32);

impl CardTypeId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// A single card.
///
/// ```
/// use candy_lane::board::{Candy, Color};
/// use candy_lane::cards::{Card, CardTypeId};
///
/// let double = Card::Color { color: Color::Red, double: true, card_type: CardTypeId::new(0) };
/// assert_eq!(double.to_string(), "double red");
/// assert_eq!(double.steps(), 2);
/// assert_eq!(Card::Candy(Candy::Pop).to_string(), "pop");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Card {
    /// Jump straight to the named landmark.
    Candy(Candy),
    /// Advance to the next square of `color`, twice if `double`.
    Color {
        color: Color,
        double: bool,
        card_type: CardTypeId,
    },
}

impl Card {
    /// Colour of the card, `None` for candy shortcuts.
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        match self {
            Card::Color { color, .. } => Some(*color),
            Card::Candy(_) => None,
        }
    }

    #[must_use]
    pub fn candy(&self) -> Option<Candy> {
        match self {
            Card::Candy(candy) => Some(*candy),
            Card::Color { .. } => None,
        }
    }

    /// Colour scans performed by this card (0 for candy shortcuts).
    #[must_use]
    pub fn steps(&self) -> usize {
        match self {
            Card::Candy(_) => 0,
            Card::Color { double: true, .. } => 2,
            Card::Color { double: false, .. } => 1,
        }
    }

    #[must_use]
    pub fn card_type(&self) -> Option<CardTypeId> {
        match self {
            Card::Color { card_type, .. } => Some(*card_type),
            Card::Candy(_) => None,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Card::Candy(candy) => write!(f, "{candy}"),
            Card::Color {
                color,
                double: true,
                ..
            } => write!(f, "double {color}"),
            Card::Color { color, .. } => write!(f, "{color}"),
        }
    }
}
