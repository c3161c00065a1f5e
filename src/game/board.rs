use super::state::{Position, Snake};

/// Classification of one rendered cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    SnakeBody,
    Food,
}

/// Square grid of cells derived from the snake and the food.
///
/// Never authoritative: it is rebuilt from a [`GameState`](super::GameState)
/// after every change and nothing flows back from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Project snake and food onto a `board_size` square grid.
    ///
    /// The food is clamped into the grid before marking it. Snake segments
    /// are marked afterwards, so a segment sitting on the food shows as body.
    /// `board_size` is expected to pass [`GameConfig::validate`](super::GameConfig::validate).
    pub fn project(snake: &Snake, food: Position, board_size: usize) -> Self {
        let mut board = Self {
            size: board_size,
            cells: vec![Cell::Empty; board_size * board_size],
        };

        if board_size == 0 {
            return board;
        }

        let max = board_size as i32 - 1;
        let food = Position::new(food.x.clamp(0, max), food.y.clamp(0, max));
        board.set(food, Cell::Food);

        for &segment in snake.segments() {
            if segment.is_within(board_size) {
                board.set(segment, Cell::SnakeBody);
            }
        }

        board
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at `(x, y)`, or `None` off the board
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x < self.size && y < self.size {
            Some(self.cells[y * self.size + x])
        } else {
            None
        }
    }

    /// Rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }

    pub fn count(&self, kind: Cell) -> usize {
        self.cells.iter().filter(|&&cell| cell == kind).count()
    }

    fn set(&mut self, pos: Position, cell: Cell) {
        let index = pos.y as usize * self.size + pos.x as usize;
        self.cells[index] = cell;
    }
}
