use serde::{Deserialize, Serialize};

use super::event::Direction;

/// A cell coordinate on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position one cell in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    /// Whether both coordinates fall in `[0, board_size)`
    pub fn is_within(&self, board_size: usize) -> bool {
        let size = board_size as i64;
        (0..size).contains(&(self.x as i64)) && (0..size).contains(&(self.y as i64))
    }
}

/// The snake's body, head first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: Vec<Position>,
}

impl Snake {
    /// A one-segment snake
    pub fn new(head: Position) -> Self {
        Self { body: vec![head] }
    }

    /// Build a snake from explicit segments, head first. Returns `None` for an
    /// empty list.
    pub fn from_segments(segments: Vec<Position>) -> Option<Self> {
        if segments.is_empty() {
            None
        } else {
            Some(Self { body: segments })
        }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn segments(&self) -> &[Position] {
        &self.body
    }

    /// Segments behind the head
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Whether `pos` hits any segment except the head. The current tail
    /// counts even though a plain move would vacate it.
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Prepend `new_head`, dropping the tail unless `grow` is set
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake keeps at least its head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// What the head ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Left the board
    Wall,
    /// Ran into its own body
    SelfCollision,
}

/// Complete game state, replaced wholesale on every transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub snake: Snake,
    /// Heading used by the most recent tick
    pub heading: Direction,
    /// Latest accepted turn, applied by the next tick
    pub pending_heading: Option<Direction>,
    pub food: Position,
    pub board_size: usize,
    pub score: u32,
    /// Ticks survived
    pub steps: u32,
    pub game_over: bool,
}

impl GameState {
    /// A running game heading right with no score
    pub fn new(snake: Snake, food: Position, board_size: usize) -> Self {
        Self {
            snake,
            heading: Direction::Right,
            pending_heading: None,
            food,
            board_size,
            score: 0,
            steps: 0,
            game_over: false,
        }
    }

    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.is_within(self.board_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_in_direction(Direction::Right), Position::new(6, 5));
        assert_eq!(pos.moved_in_direction(Direction::Left), Position::new(4, 5));
        assert_eq!(pos.moved_in_direction(Direction::Down), Position::new(5, 6));
        assert_eq!(pos.moved_in_direction(Direction::Up), Position::new(5, 4));
    }

    #[test]
    fn test_position_bounds() {
        assert!(Position::new(0, 0).is_within(12));
        assert!(Position::new(11, 11).is_within(12));
        assert!(!Position::new(-1, 0).is_within(12));
        assert!(!Position::new(12, 0).is_within(12));
        assert!(!Position::new(0, 12).is_within(12));
        assert!(!Position::new(0, 0).is_within(0));
    }

    #[test]
    fn test_empty_segments_rejected() {
        assert!(Snake::from_segments(Vec::new()).is_none());
    }

    #[test]
    fn test_snake_advance() {
        let mut snake = Snake::new(Position::new(5, 5));

        snake.advance(Position::new(6, 5), false);
        assert_eq!(snake.segments(), &[Position::new(6, 5)]);

        snake.advance(Position::new(7, 5), true);
        assert_eq!(snake.segments(), &[Position::new(7, 5), Position::new(6, 5)]);
    }

    #[test]
    fn test_collision_ignores_head_but_counts_tail() {
        let snake = Snake::from_segments(vec![
            Position::new(5, 5),
            Position::new(4, 5),
            Position::new(3, 5),
        ])
        .unwrap();

        assert!(!snake.collides_with_body(Position::new(5, 5)));
        assert!(snake.collides_with_body(Position::new(4, 5)));
        assert!(snake.collides_with_body(Position::new(3, 5)));
        assert!(!snake.collides_with_body(Position::new(9, 9)));
    }
}
