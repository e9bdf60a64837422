//! Parsing and rendering of the textual Maze format.

use crate::{Cost, Point};

/// The classification of a single Maze cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// a solid wall, `#`
    Wall,
    /// open terrain with a step cost of 1
    Open,
    /// a weighted cell holding a digit; two cells with the same digit form
    /// a Portal
    Portal(u8),
}

impl From<char> for Cell {
    fn from(ch: char) -> Cell {
        match ch {
            '#' => Cell::Wall,
            '0'..='9' => Cell::Portal(ch as u8 - b'0'),
            _ => Cell::Open,
        }
    }
}

impl Cell {
    /// `true` if the cell cannot be entered.
    pub fn is_wall(self) -> bool {
        self == Cell::Wall
    }

    /// The Cost charged for stepping onto this cell.
    ///
    /// ## Panics
    /// Panics for [`Cell::Wall`], which cannot be stepped onto.
    #[track_caller]
    pub fn step_cost(self) -> Cost {
        match self {
            Cell::Wall => panic!("a wall has no step cost"),
            Cell::Open => 1,
            Cell::Portal(digit) => digit as Cost,
        }
    }
}

/// A parsed Maze: a rectangular grid of cells.
///
/// ## Examples
/// ```
/// use maze_pathfinding::{Cell, Maze};
///
/// let maze = Maze::parse("# #\n 9 \n").unwrap();
/// assert_eq!((maze.height(), maze.width()), (2, 3));
/// assert_eq!(maze.cell((1, 1)), Cell::Portal(9));
///
/// // rows must line up
/// assert!(Maze::parse("##\n###\n").is_none());
/// ```
#[derive(Clone, Debug)]
pub struct Maze {
    rows: Vec<Vec<char>>,
}

impl Maze {
    /// Parses a newline-separated grid of cells.
    ///
    /// Rows end at a `\n`; anything after the last newline is not a row.
    /// Returns `None` if there are no rows or the rows differ in length.
    pub fn parse(input: &str) -> Option<Maze> {
        let mut rows: Vec<Vec<char>> = input.split('\n').map(|row| row.chars().collect()).collect();
        // the fragment after the final newline
        rows.pop();

        if rows.is_empty() || rows.iter().any(|row| row.len() != rows[0].len()) {
            return None;
        }
        Some(Maze { rows })
    }

    /// The number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// The number of columns.
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    /// The cell at `(row, column)`.
    pub fn cell(&self, (row, column): Point) -> Cell {
        Cell::from(self.rows[row][column])
    }

    /// All positions with their cells, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(column, &ch)| ((row, column), Cell::from(ch)))
        })
    }

    fn is_boundary(&self, (row, column): Point) -> bool {
        row == 0 || row == self.height() - 1 || column == 0 || column == self.width() - 1
    }

    /// The Maze's two exits: the first two boundary cells of open terrain in
    /// row-major order, start first.
    ///
    /// Weighted cells never count as exits. Returns `None` if fewer than two
    /// boundary cells qualify.
    pub fn exits(&self) -> Option<(Point, Point)> {
        let mut exits = self
            .cells()
            .filter(|&(pos, cell)| cell == Cell::Open && self.is_boundary(pos))
            .map(|(pos, _)| pos);

        let start = exits.next()?;
        let goal = exits.next()?;
        Some((start, goal))
    }

    /// The Maze with every cell on `steps` replaced by `o`, rows rejoined
    /// with a trailing newline each.
    pub fn render_path(&self, steps: &[Point]) -> String {
        let mut rows = self.rows.clone();
        for &(row, column) in steps {
            rows[row][column] = 'o';
        }

        let mut out = String::with_capacity(self.height() * (self.width() + 1));
        for row in &rows {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }
}
