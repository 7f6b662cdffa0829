use crate::game::board_state::BoardState;
use crate::game::check_play::{orient_if_needed, Side};
use crate::game::tile::Tile;
use crate::utils::random_index::ChoiceSource;
use crate::{DominoError, Result};

/// Where a tile ended up after `apply_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub tile: Tile,
    pub side: Side,
}

/// Places `tile` from the hand of player `seat` onto the ground.
///
/// Playability is read from the player's cached conditions (see
/// `get_valid_moves`), never recomputed. A tile that fits both ends goes to
/// the player's `preferred_side` if one is set, otherwise to a side drawn
/// from `choices`. The turn is not advanced.
pub fn apply_move<C: ChoiceSource + ?Sized>(
    state: &mut BoardState,
    tile: &Tile,
    seat: usize,
    choices: &mut C,
) -> Result<Placement> {
    let player = &state.players[seat];
    let index = player
        .position_in_hand(tile)
        .ok_or(DominoError::TileNotInHand {
            tile: *tile,
            player: seat,
        })?;
    if player.conditions.len() != player.hand.len() {
        return Err(DominoError::StaleConditions { player: seat });
    }
    let condition = player.conditions[index];
    if !condition.any() {
        return Err(DominoError::InvalidMove { tile: *tile });
    }

    let held = player.hand[index];
    let placement = match state.open_ends() {
        Err(_) => Placement {
            tile: held,
            side: Side::Right,
        },
        Ok((left_end, right_end)) => {
            let side = if condition.both() {
                match state.players[seat].preferred_side.take() {
                    Some(side) => side,
                    None if choices.pick(2) == 0 => Side::Left,
                    None => Side::Right,
                }
            } else if condition.left {
                Side::Left
            } else {
                Side::Right
            };
            let end_value = match side {
                Side::Left => left_end,
                Side::Right => right_end,
            };
            let oriented = orient_if_needed(end_value, held, side);
            let touching = match side {
                Side::Left => oriented.right,
                Side::Right => oriented.left,
            };
            if touching != end_value {
                return Err(DominoError::InvalidMove { tile: *tile });
            }
            Placement {
                tile: oriented,
                side,
            }
        }
    };

    let player = &mut state.players[seat];
    player.hand.remove(index);
    player.conditions.remove(index);

    let mut placed = placement.tile;
    placed.owner = Some(seat);
    match placement.side {
        Side::Left => state.ground.push_front(placed),
        Side::Right => state.ground.push_back(placed),
    }
    log::trace!("seat {} played {} on the {:?}", seat, placed, placement.side);

    Ok(Placement {
        tile: placed,
        side: placement.side,
    })
}
