use std::{fmt::Display, str::FromStr};

use tracing::info;

use crate::{bits::BitGrid, error::Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::North => write!(f, "^"),
            Direction::East => write!(f, ">"),
            Direction::South => write!(f, "v"),
            Direction::West => write!(f, "<"),
        }
    }
}

impl Direction {
    pub fn all() -> &'static [Direction] {
        static ALL_DIRECTIONS: [Direction; 4] = [
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
        ];

        &ALL_DIRECTIONS
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn turn_right(&self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    pub fn reverse(&self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::North | Direction::South)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    r: usize,
    c: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    pub fn r(&self) -> usize {
        self.r
    }

    pub fn c(&self) -> usize {
        self.c
    }

    // Only checks the lower bounds, see Grid::neighbor for the full check.
    pub fn along(&self, dir: Direction) -> Option<Position> {
        match dir {
            Direction::North if self.r > 0 => Some(Self::new(self.r - 1, self.c)),
            Direction::East => Some(Self::new(self.r, self.c + 1)),
            Direction::South => Some(Self::new(self.r + 1, self.c)),
            Direction::West if self.c > 0 => Some(Self::new(self.r, self.c - 1)),
            _ => None,
        }
    }

    pub fn signed(&self) -> (isize, isize) {
        (self.r as isize, self.c as isize)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guard {
    pos: Position,
    dir: Direction,
}

impl Display for Guard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.dir, self.pos())
    }
}

impl Guard {
    pub fn new(pos: &Position, dir: Direction) -> Self {
        Self {
            pos: pos.clone(),
            dir,
        }
    }

    pub fn pos(&self) -> &Position {
        &self.pos
    }

    pub fn dir(&self) -> Direction {
        self.dir
    }
}

/// Obstacle layout of a laboratory, immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    obstacles: BitGrid,
}

impl Grid {
    pub fn width(&self) -> usize {
        self.obstacles.col_n()
    }

    pub fn height(&self) -> usize {
        self.obstacles.row_n()
    }

    pub fn is_inside(&self, pos: &Position) -> bool {
        pos.r < self.height() && pos.c < self.width()
    }

    pub fn is_obstacle(&self, pos: &Position) -> bool {
        self.is_inside(pos) && self.obstacles.contains(pos)
    }

    pub fn neighbor(&self, pos: &Position, dir: Direction) -> Option<Position> {
        pos.along(dir).filter(|p| self.is_inside(p))
    }

    /// The last cell inside the grid when going from given position along given direction.
    pub fn edge_along(&self, pos: &Position, dir: Direction) -> Position {
        match dir {
            Direction::North => Position::new(0, pos.c),
            Direction::East => Position::new(pos.r, self.width() - 1),
            Direction::South => Position::new(self.height() - 1, pos.c),
            Direction::West => Position::new(pos.r, 0),
        }
    }

    /// The first coordinate outside the grid when going from given position along given direction.
    pub fn beyond_edge(&self, pos: &Position, dir: Direction) -> (isize, isize) {
        let (r, c) = pos.signed();
        match dir {
            Direction::North => (-1, c),
            Direction::East => (r, self.width() as isize),
            Direction::South => (self.height() as isize, c),
            Direction::West => (r, -1),
        }
    }
}

pub struct Laboratory {
    grid: Grid,
    guard: Guard,
}

impl Laboratory {
    pub fn from_rows<I, S>(rows: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = LaboratoryBuilder::new();
        for row in rows {
            builder.add_row(row.as_ref())?;
        }

        builder.build()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn guard(&self) -> &Guard {
        &self.guard
    }
}

impl FromStr for Laboratory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_rows(s.lines())
    }
}

struct LaboratoryBuilder {
    tiles: Vec<bool>,
    row_n: usize,
    col_n: Option<usize>,
    guard: Option<Guard>,
}

impl LaboratoryBuilder {
    pub fn new() -> Self {
        Self {
            tiles: Vec::new(),
            row_n: 0,
            col_n: None,
            guard: None,
        }
    }

    pub fn add_row(&mut self, row_text: &str) -> Result<(), Error> {
        let this_col_n = row_text.chars().count();
        let expect_col_n = *self.col_n.get_or_insert(this_col_n);
        if expect_col_n != this_col_n {
            return Err(Error::InconsistentRow(expect_col_n, this_col_n));
        }

        for (ind, c) in row_text.chars().enumerate() {
            match c {
                '.' => self.tiles.push(false),
                '#' => self.tiles.push(true),
                '^' => {
                    let guard = Guard::new(&Position::new(self.row_n, ind), Direction::North);
                    if let Some(last_guard) = self.guard.take() {
                        return Err(Error::MultipleGuards(last_guard, guard));
                    }

                    self.guard = Some(guard);
                    self.tiles.push(false);
                }
                other => return Err(Error::InvalidChar(other)),
            }
        }
        self.row_n += 1;

        Ok(())
    }

    pub fn build(self) -> Result<Laboratory, Error> {
        // A guard implies at least one row and one column.
        let guard = self.guard.ok_or(Error::NoGuard)?;
        let col_n = self.col_n.unwrap_or(0);
        let mut obstacles = BitGrid::new(self.row_n, col_n);
        for (ind, _) in self.tiles.iter().enumerate().filter(|(_, t)| **t) {
            obstacles.insert(&Position::new(ind / col_n, ind % col_n));
        }

        info!(width = col_n, height = self.row_n, %guard, "laboratory loaded");
        Ok(Laboratory {
            grid: Grid { obstacles },
            guard,
        })
    }
}
