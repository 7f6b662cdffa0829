pub mod apply_move;
pub mod board_state;
pub mod check_play;
pub mod create_domino_set;
pub mod domino_game;
pub mod draw_tile;
pub mod get_valid_moves;
pub mod match_play;
pub mod player;
pub mod round_outcome;
pub mod simulate_game;
pub mod tile;
