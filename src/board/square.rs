//! Square types: colours, candy landmarks, roads.
//!
//! A track is authored as a list of [`Tile`]s, then resolved into
//! [`Square`]s once road warps are known. A square is either coloured or a
//! candy landmark, never both; the enum makes that exclusive.

use serde::{Deserialize, Serialize};

/// The six movement colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
}

impl Color {
    /// All colours in deck-building order.
    pub const ALL: [Color; 6] = [
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Purple,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Purple => "purple",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Named candy landmarks. Each has one square and one shortcut card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Candy {
    Heart,
    Cane,
    Man,
    Drop,
    Brittle,
    Pop,
    Float,
}

impl Candy {
    /// All candies in deck-building order.
    pub const ALL: [Candy; 7] = [
        Candy::Float,
        Candy::Drop,
        Candy::Pop,
        Candy::Man,
        Candy::Heart,
        Candy::Brittle,
        Candy::Cane,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Candy::Heart => "heart",
            Candy::Cane => "cane",
            Candy::Man => "man",
            Candy::Drop => "drop",
            Candy::Brittle => "brittle",
            Candy::Pop => "pop",
            Candy::Float => "float",
        }
    }
}

impl std::fmt::Display for Candy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Named shortcut roads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Road {
    Rainbow,
    Mountain,
}

impl std::fmt::Display for Road {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Road::Rainbow => "rainbow",
            Road::Mountain => "mountain",
        })
    }
}

/// Authored layout entry, before road warps are resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
    Plain(Color),
    Pit(Color),
    RoadStart(Color, Road),
    RoadEnd(Color, Road),
    Candy(Candy),
}

/// What a coloured square does besides carrying its colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Marker {
    None,
    /// Holds the player until a card of the square's colour is drawn.
    Pit,
    /// Landing here by colour advance warps to `warp_to`.
    RoadStart { road: Road, warp_to: usize },
    /// Destination of a road; no behavior of its own.
    RoadEnd(Road),
}

/// A resolved board square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Square {
    Colored { color: Color, marker: Marker },
    Candy(Candy),
}

impl Square {
    /// Colour of the square, `None` for candy landmarks.
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        match self {
            Square::Colored { color, .. } => Some(*color),
            Square::Candy(_) => None,
        }
    }

    #[must_use]
    pub fn candy(&self) -> Option<Candy> {
        match self {
            Square::Candy(candy) => Some(*candy),
            Square::Colored { .. } => None,
        }
    }

    /// Colour of the pit if this square is one.
    #[must_use]
    pub fn pit_color(&self) -> Option<Color> {
        match self {
            Square::Colored {
                color,
                marker: Marker::Pit,
            } => Some(*color),
            _ => None,
        }
    }

    /// Warp target if this square starts a road.
    #[must_use]
    pub fn warp_to(&self) -> Option<usize> {
        match self {
            Square::Colored {
                marker: Marker::RoadStart { warp_to, .. },
                ..
            } => Some(*warp_to),
            _ => None,
        }
    }

    #[must_use]
    pub fn road_end(&self) -> Option<Road> {
        match self {
            Square::Colored {
                marker: Marker::RoadEnd(road),
                ..
            } => Some(*road),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(Color::Purple.to_string(), "purple");
        assert_eq!(Candy::Brittle.to_string(), "brittle");
        assert_eq!(Road::Mountain.to_string(), "mountain");
    }

    #[test]
    fn test_square_accessors() {
        let pit = Square::Colored {
            color: Color::Blue,
            marker: Marker::Pit,
        };
        assert_eq!(pit.color(), Some(Color::Blue));
        assert_eq!(pit.pit_color(), Some(Color::Blue));
        assert_eq!(pit.candy(), None);
        assert_eq!(pit.warp_to(), None);

        let start = Square::Colored {
            color: Color::Green,
            marker: Marker::RoadStart {
                road: Road::Rainbow,
                warp_to: 60,
            },
        };
        assert_eq!(start.warp_to(), Some(60));
        assert_eq!(start.pit_color(), None);

        let candy = Square::Candy(Candy::Pop);
        assert_eq!(candy.color(), None);
        assert_eq!(candy.candy(), Some(Candy::Pop));
    }

    #[test]
    fn test_color_serde_lowercase() {
        let json = serde_json::to_string(&Color::Orange).unwrap();
        assert_eq!(json, "\"orange\"");
    }
}
