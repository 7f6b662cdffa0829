use crate::game::tile::Tile;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// An end of the ground chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Whether a tile fits the left and/or right open end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Playable {
    pub left: bool,
    pub right: bool,
}

impl Playable {
    pub const NONE: Playable = Playable {
        left: false,
        right: false,
    };

    pub fn any(&self) -> bool {
        self.left || self.right
    }

    pub fn both(&self) -> bool {
        self.left && self.right
    }
}

/// Checks `tile` against the open ends of `ground`.
///
/// On an empty ground both ends are trivially playable. Otherwise, when the
/// tile only touches an end after turning it around, it is flipped in place so
/// that the matching pip faces that end: right placements take precedence,
/// mirroring how the tile is laid down.
pub fn check_play(ground: &VecDeque<Tile>, tile: &mut Tile) -> Playable {
    let (Some(front), Some(back)) = (ground.front(), ground.back()) else {
        return Playable {
            left: true,
            right: true,
        };
    };
    let (left_end, right_end) = (front.left, back.right);

    let right = tile.contains(right_end);
    let left = tile.contains(left_end);

    if right && tile.right == right_end && tile.left != right_end {
        tile.flip();
    } else if !right && left && tile.left == left_end && tile.right != left_end {
        tile.flip();
    }

    Playable { left, right }
}

/// Orients `tile` so its touching end matches `end_value` on `side`.
pub fn orient_if_needed(end_value: u8, mut tile: Tile, side: Side) -> Tile {
    match side {
        Side::Right if tile.left != end_value => tile.flip(),
        Side::Left if tile.right != end_value => tile.flip(),
        _ => {}
    }
    tile
}
