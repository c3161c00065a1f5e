use rand::Rng;

use super::state::Position;

/// Pick a food cell uniformly over the whole board.
///
/// Occupied cells are not excluded; the food may land under the snake.
/// `board_size` must be at least 1.
pub fn random_position<R: Rng>(rng: &mut R, board_size: usize) -> Position {
    let x = rng.gen_range(0..board_size) as i32;
    let y = rng.gen_range(0..board_size) as i32;
    Position::new(x, y)
}
