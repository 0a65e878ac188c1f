//! Directional jump index over the free cells of a grid.
//!
//! For each cell and direction the table holds where a guard standing there
//! ends up when it keeps walking straight: the last free cell before the next
//! obstacle, or [`Jump::Exit`] when nothing stops it before the border.

use tracing::debug;

use crate::grid::{Direction, Grid, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Jump {
    Stop(Position),
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyTable {
    jumps: Vec<[Jump; 4]>,
    col_n: usize,
}

impl AdjacencyTable {
    pub fn build(grid: &Grid) -> Self {
        let (row_n, col_n) = (grid.height(), grid.width());
        let mut jumps = vec![[Jump::Exit, Jump::Exit, Jump::Exit, Jump::Exit]; row_n * col_n];

        // Top to bottom, left to right: north and west targets.
        let mut north = vec![Jump::Exit; col_n];
        for r in 0..row_n {
            let mut west = Jump::Exit;
            for c in 0..col_n {
                let pos = Position::new(r, c);
                if grid.is_obstacle(&pos) {
                    north[c] = Jump::Stop(Position::new(r + 1, c));
                    west = Jump::Stop(Position::new(r, c + 1));
                } else {
                    let cell = &mut jumps[r * col_n + c];
                    cell[Direction::North.index()] = north[c].clone();
                    cell[Direction::West.index()] = west.clone();
                }
            }
        }

        // Bottom to top, right to left: south and east targets.
        let mut south = vec![Jump::Exit; col_n];
        for r in (0..row_n).rev() {
            let mut east = Jump::Exit;
            for c in (0..col_n).rev() {
                let pos = Position::new(r, c);
                if grid.is_obstacle(&pos) {
                    // Never stored when r or c is 0, nothing lies before it then.
                    south[c] = Jump::Stop(Position::new(r.wrapping_sub(1), c));
                    east = Jump::Stop(Position::new(r, c.wrapping_sub(1)));
                } else {
                    let cell = &mut jumps[r * col_n + c];
                    cell[Direction::South.index()] = south[c].clone();
                    cell[Direction::East.index()] = east.clone();
                }
            }
        }

        debug!(cell_n = jumps.len(), "adjacency table built");
        Self { jumps, col_n }
    }

    /// Where the guard at the free cell `pos` stops when walking along `dir`.
    pub fn jump(&self, pos: &Position, dir: Direction) -> &Jump {
        &self.jumps[pos.r() * self.col_n + pos.c()][dir.index()]
    }
}
