//! The board: an ordered track of squares plus derived lookup tables.
//!
//! A `Board` is built once from a [`Tile`] layout and is read-only after
//! that. Construction resolves every road start to its road end and indexes
//! every candy landmark; both are data-integrity checks on the layout.

use log::debug;
use rustc_hash::FxHashMap;
use thiserror::Error;

use super::square::{Candy, Color, Marker, Road, Square, Tile};

/// Errors raised when a track layout is inconsistent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("road {road} starting at square {start} has no road end")]
    MissingRoadEnd { road: Road, start: usize },
    #[error("candy {candy} appears twice (squares {first} and {second})")]
    DuplicateCandy {
        candy: Candy,
        first: usize,
        second: usize,
    },
}

const R: Tile = Tile::Plain(Color::Red);
const O: Tile = Tile::Plain(Color::Orange);
const Y: Tile = Tile::Plain(Color::Yellow);
const G: Tile = Tile::Plain(Color::Green);
const B: Tile = Tile::Plain(Color::Blue);
const P: Tile = Tile::Plain(Color::Purple);

/// The standard 136-square track.
#[rustfmt::skip]
pub const STANDARD_TRACK: &[Tile] = &[
    P, Y, B, O,
    Tile::RoadStart(Color::Green, Road::Rainbow),
    R, P,
    Tile::Candy(Candy::Heart),
    Y, B, O, G, R, P, Y,
    Tile::Candy(Candy::Cane),
    B, O, G, R, P, Y, B, O, G, R, P, Y,
    Tile::Candy(Candy::Man),
    B, O, G, R,
    Tile::RoadStart(Color::Purple, Road::Mountain),
    Y, B, O, G, R, P, Y, B,
    Tile::Candy(Candy::Drop),
    O, G, R,
    Tile::RoadEnd(Color::Purple, Road::Mountain),
    Y,
    Tile::Pit(Color::Blue),
    O, G, R, P, Y, B, O, G, R, P, Y,
    Tile::RoadEnd(Color::Blue, Road::Rainbow),
    O, G, R, P, Y, B, O, G, R, P, Y, B, O, G,
    Tile::Candy(Candy::Brittle),
    R, P, Y, B, O, G, R, P, Y, B, O, G,
    Tile::Pit(Color::Red),
    P, Y, B, O, G, R, P, Y, B,
    Tile::Candy(Candy::Pop),
    O, G, R, P, Y, B, O,
    Tile::Candy(Candy::Float),
    G, R, P, Y, B, O, G, R, P, Y, B, O, G, R, P, Y,
    Tile::Pit(Color::Blue),
    O, G, R, P, Y, B, O, G, R, P, Y, B,
];

/// An immutable, validated track.
///
/// ## Example
///
/// ```
/// use candy_lane::board::{Board, Candy};
///
/// let board = Board::standard().unwrap();
/// assert_eq!(board.len(), 136);
/// assert_eq!(board.candy_position(Candy::Heart), Some(7));
/// assert_eq!(board.warp_target(4), Some(60));
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    squares: Vec<Square>,
    candy_positions: FxHashMap<Candy, usize>,
}

impl Board {
    /// Build the standard track.
    pub fn standard() -> Result<Self, BoardError> {
        Self::from_tiles(STANDARD_TRACK)
    }

    /// Build a board from an authored layout.
    ///
    /// Fails if a road start has no matching road end anywhere on the
    /// track, or if a candy landmark appears more than once.
    pub fn from_tiles(tiles: &[Tile]) -> Result<Self, BoardError> {
        let mut road_ends: FxHashMap<Road, usize> = FxHashMap::default();
        for (index, tile) in tiles.iter().enumerate() {
            if let Tile::RoadEnd(_, road) = tile {
                road_ends.entry(*road).or_insert(index);
            }
        }

        let mut squares = Vec::with_capacity(tiles.len());
        let mut candy_positions = FxHashMap::default();

        for (index, tile) in tiles.iter().enumerate() {
            let square = match *tile {
                Tile::Plain(color) => Square::Colored {
                    color,
                    marker: Marker::None,
                },
                Tile::Pit(color) => Square::Colored {
                    color,
                    marker: Marker::Pit,
                },
                Tile::RoadEnd(color, road) => Square::Colored {
                    color,
                    marker: Marker::RoadEnd(road),
                },
                Tile::RoadStart(color, road) => {
                    let warp_to = *road_ends
                        .get(&road)
                        .ok_or(BoardError::MissingRoadEnd { road, start: index })?;
                    Square::Colored {
                        color,
                        marker: Marker::RoadStart { road, warp_to },
                    }
                }
                Tile::Candy(candy) => {
                    if let Some(&first) = candy_positions.get(&candy) {
                        return Err(BoardError::DuplicateCandy {
                            candy,
                            first,
                            second: index,
                        });
                    }
                    candy_positions.insert(candy, index);
                    Square::Candy(candy)
                }
            };
            squares.push(square);
        }

        debug!(
            "built board: {} squares, {} candies, {} roads",
            squares.len(),
            candy_positions.len(),
            road_ends.len()
        );

        Ok(Self {
            squares,
            candy_positions,
        })
    }

    /// Number of squares.
    #[must_use]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Position a finishing player is reported at: one past the last square.
    #[must_use]
    pub fn finish_line(&self) -> usize {
        self.squares.len()
    }

    #[must_use]
    pub fn square(&self, index: usize) -> Option<&Square> {
        self.squares.get(index)
    }

    #[must_use]
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Index of a candy landmark, `None` if the track has no such square.
    #[must_use]
    pub fn candy_position(&self, candy: Candy) -> Option<usize> {
        self.candy_positions.get(&candy).copied()
    }

    /// Warp target of the road starting at `index`, if any.
    #[must_use]
    pub fn warp_target(&self, index: usize) -> Option<usize> {
        self.square(index).and_then(Square::warp_to)
    }
}
