use crate::game::check_play::{check_play, Playable};
use crate::game::player::Player;
use crate::game::tile::Tile;
use std::collections::VecDeque;

/// Checks every tile in the player's hand against the ground, orienting the
/// tiles as a side effect, and caches the result on `player.conditions`.
pub fn get_valid_moves(player: &mut Player, ground: &VecDeque<Tile>) -> Vec<Playable> {
    let conditions: Vec<Playable> = player
        .hand
        .iter_mut()
        .map(|tile| check_play(ground, tile))
        .collect();
    player.conditions = conditions.clone();
    conditions
}

/// Read-only variant: neither orients nor caches anything.
pub fn peek_valid_moves(player: &Player, ground: &VecDeque<Tile>) -> Vec<Playable> {
    player
        .hand
        .iter()
        .map(|tile| check_play(ground, &mut tile.clone()))
        .collect()
}

pub fn has_valid_move(player: &Player, ground: &VecDeque<Tile>) -> bool {
    player
        .hand
        .iter()
        .any(|tile| check_play(ground, &mut tile.clone()).any())
}

/// Refreshes the cache and returns the hand tiles that fit at least one end,
/// in hand order.
pub fn playable_tiles(player: &mut Player, ground: &VecDeque<Tile>) -> Vec<Tile> {
    let conditions = get_valid_moves(player, ground);
    player
        .hand
        .iter()
        .zip(conditions)
        .filter(|(_, condition)| condition.any())
        .map(|(tile, _)| *tile)
        .collect()
}
