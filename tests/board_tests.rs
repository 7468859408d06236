//! Board construction and lookup tests.
//!
//! These check the standard track's data-integrity invariants and that
//! inconsistent layouts are rejected.

use candy_lane::board::{Board, BoardError, Candy, Color, Road, Square, Tile, STANDARD_TRACK};

/// Every road start resolves to an in-bounds road end of the same road.
#[test]
fn test_road_starts_resolve_in_bounds() {
    let board = Board::standard().expect("standard board builds");

    let mut starts = 0;
    for (index, square) in board.squares().iter().enumerate() {
        if let Some(target) = square.warp_to() {
            starts += 1;
            assert!(target < board.len(), "warp from {index} out of bounds");
            assert!(board.squares()[target].road_end().is_some());
        }
    }
    assert_eq!(starts, 2);
}

/// Warp lookups do not change between calls.
#[test]
fn test_warp_targets_are_stable() {
    let board = Board::standard().unwrap();
    let first: Vec<_> = (0..board.len()).map(|i| board.warp_target(i)).collect();

    for _ in 0..10 {
        let again: Vec<_> = (0..board.len()).map(|i| board.warp_target(i)).collect();
        assert_eq!(first, again);
    }
}

/// Roads only go forward on the standard track.
#[test]
fn test_roads_are_shortcuts() {
    let board = Board::standard().unwrap();
    for (index, square) in board.squares().iter().enumerate() {
        if let Some(target) = square.warp_to() {
            assert!(target > index);
        }
    }
}

/// Every candy in the deck has exactly one landmark.
#[test]
fn test_every_candy_has_a_square() {
    let board = Board::standard().unwrap();
    for candy in Candy::ALL {
        let index = board.candy_position(candy).expect("candy on board");
        assert_eq!(board.square(index), Some(&Square::Candy(candy)));
    }
}

/// The final square is coloured, so candy jumps never finish the game.
#[test]
fn test_last_square_is_colored() {
    let board = Board::standard().unwrap();
    let last = board.square(board.len() - 1).unwrap();
    assert!(last.color().is_some());
    assert_eq!(STANDARD_TRACK.len(), board.len());
}

#[test]
fn test_layout_errors() {
    let missing = [Tile::RoadStart(Color::Red, Road::Mountain), Tile::Plain(Color::Blue)];
    assert!(matches!(
        Board::from_tiles(&missing),
        Err(BoardError::MissingRoadEnd { road: Road::Mountain, start: 0 })
    ));

    let duplicate = [Tile::Candy(Candy::Man), Tile::Candy(Candy::Man)];
    let err = Board::from_tiles(&duplicate).unwrap_err();
    assert_eq!(err.to_string(), "candy man appears twice (squares 0 and 1)");
}

/// A road end on its own is inert; a layout with only ends is valid.
#[test]
fn test_road_end_without_start() {
    let tiles = [Tile::RoadEnd(Color::Green, Road::Rainbow), Tile::Plain(Color::Red)];
    let board = Board::from_tiles(&tiles).unwrap();
    assert_eq!(board.warp_target(0), None);
    assert_eq!(board.square(0).and_then(Square::road_end), Some(Road::Rainbow));
}
