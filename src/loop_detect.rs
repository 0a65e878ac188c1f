use std::collections::HashSet;

use crate::{
    adjacency::{AdjacencyTable, Jump},
    grid::{Direction, Grid, Position},
};

/// States a guard has been blocked in during one trial.
#[derive(Debug, Default)]
pub struct VisitedState {
    states: HashSet<(Position, Direction)>,
}

impl VisitedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if this state was seen before.
    pub fn insert(&mut self, pos: &Position, dir: Direction) -> bool {
        self.states.insert((pos.clone(), dir))
    }

    pub fn clear(&mut self) {
        self.states.clear();
    }
}

/// Checks whether one extra obstacle traps the guard, without touching the shared table.
pub struct LoopDetector<'a> {
    grid: &'a Grid,
    table: &'a AdjacencyTable,
}

impl<'a> LoopDetector<'a> {
    pub fn new(grid: &'a Grid, table: &'a AdjacencyTable) -> Self {
        Self { grid, table }
    }

    pub fn would_loop(&self, start_pos: &Position, start_dir: Direction, blocker: &Position) -> bool {
        self.would_loop_with(start_pos, start_dir, blocker, &mut VisitedState::new())
    }

    /// The guard stands at `start_pos` facing `start_dir`, with `blocker` right ahead.
    /// Given scratch state is cleared before use.
    pub fn would_loop_with(
        &self,
        start_pos: &Position,
        start_dir: Direction,
        blocker: &Position,
        visited: &mut VisitedState,
    ) -> bool {
        visited.clear();
        visited.insert(start_pos, start_dir);
        let mut pos = start_pos.clone();
        let mut dir = start_dir.turn_right();
        loop {
            let next = match self.jump_with_blocker(&pos, dir, blocker) {
                Jump::Stop(next) => next,
                Jump::Exit => return false,
            };

            if !visited.insert(&next, dir) {
                return true;
            }

            dir = dir.turn_right();
            pos = next;
        }
    }

    /// Like [`AdjacencyTable::jump`], but stops in front of `blocker` when it's on the way.
    pub fn jump_with_blocker(&self, pos: &Position, dir: Direction, blocker: &Position) -> Jump {
        let jump = self.table.jump(pos, dir);
        let end = match jump {
            Jump::Stop(stop) => stop.signed(),
            Jump::Exit => self.grid.beyond_edge(pos, dir),
        };

        if falls_between(pos, end, blocker, dir) {
            // The blocker is strictly ahead of pos, so the cell behind it exists.
            if let Some(before) = blocker.along(dir.reverse()) {
                return Jump::Stop(before);
            }
        }

        jump.clone()
    }
}

fn falls_between(origin: &Position, end: (isize, isize), test: &Position, dir: Direction) -> bool {
    let (origin_r, origin_c) = origin.signed();
    let (test_r, test_c) = test.signed();
    let (end_r, end_c) = end;
    if dir.is_vertical() {
        origin_c == test_c && (origin_r - test_r).signum() != (end_r - test_r).signum()
    } else {
        origin_r == test_r && (origin_c - test_c).signum() != (end_c - test_c).signum()
    }
}
