//! Board topology: squares, colours, candy landmarks, roads.
//!
//! ## Key Types
//!
//! - `Tile`: authored layout entry
//! - `Square`: resolved square (coloured with a marker, or a candy landmark)
//! - `Board`: validated track with candy and road lookups

pub mod square;
pub mod track;

pub use square::{Candy, Color, Marker, Road, Square, Tile};
pub use track::{Board, BoardError, STANDARD_TRACK};
