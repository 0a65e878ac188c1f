use tracing::debug;

use crate::{
    adjacency::{AdjacencyTable, Jump},
    bits::BitGrid,
    error::Error,
    grid::{Direction, Grid, Guard, Position},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry {
    pos: Position,
    // Facing when leaving this position, i.e. after any turn made here.
    dir: Direction,
    first_visit: bool,
}

impl PathEntry {
    pub fn new(pos: &Position, dir: Direction, first_visit: bool) -> Self {
        Self {
            pos: pos.clone(),
            dir,
            first_visit,
        }
    }

    pub fn pos(&self) -> &Position {
        &self.pos
    }

    pub fn dir(&self) -> Direction {
        self.dir
    }

    pub fn is_first_visit(&self) -> bool {
        self.first_visit
    }
}

/// The real patrol of a guard, from its start until it leaves the grid.
#[derive(Debug, Clone)]
pub struct Path {
    entries: Vec<PathEntry>,
    turn_points: Vec<PathEntry>,
    visited_n: usize,
}

impl Path {
    /// Every cell stepped on, in order, revisits included.
    pub fn entries(&self) -> &[PathEntry] {
        &self.entries
    }

    pub fn turn_points(&self) -> &[PathEntry] {
        &self.turn_points
    }

    pub fn visited_n(&self) -> usize {
        self.visited_n
    }
}

pub fn walk(grid: &Grid, table: &AdjacencyTable, guard: &Guard) -> Result<Path, Error> {
    let mut visited = BitGrid::new(grid.height(), grid.width());
    let mut pos = guard.pos().clone();
    let mut dir = guard.dir();
    let mut entries = vec![PathEntry::new(&pos, dir, visited.insert(&pos))];
    let mut turn_points = Vec::new();
    let max_turn_n = 4 * grid.width() * grid.height();

    loop {
        let (end, is_exit) = match table.jump(&pos, dir) {
            Jump::Stop(stop) => (stop.clone(), false),
            Jump::Exit => (grid.edge_along(&pos, dir), true),
        };

        while pos != end {
            // Every cell up to end is free and inside, so the step always exists.
            let Some(next) = grid.neighbor(&pos, dir) else {
                break;
            };
            let first_visit = visited.insert(&next);
            entries.push(PathEntry::new(&next, dir, first_visit));
            pos = next;
        }

        if is_exit {
            break;
        }

        if turn_points.len() >= max_turn_n {
            return Err(Error::GuardTrapped(guard.clone()));
        }

        dir = dir.turn_right();
        if let Some(last) = entries.last_mut() {
            last.dir = dir;
            turn_points.push(last.clone());
        }
    }

    let visited_n = visited.count();
    debug!(
        entry_n = entries.len(),
        turn_n = turn_points.len(),
        visited_n,
        "real patrol walked"
    );
    Ok(Path {
        entries,
        turn_points,
        visited_n,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Laboratory;

    const CLASSIC_LAYOUT: &str = "....#.....\n.........#\n..........\n..#.......\n.......#..\n..........\n.#..^.....\n........#.\n#.........\n......#...";

    fn walk_text(text: &str) -> Result<Path, Error> {
        let lab: Laboratory = text.parse().unwrap();
        let table = AdjacencyTable::build(lab.grid());
        walk(lab.grid(), &table, lab.guard())
    }

    #[test]
    fn test_classic_layout() {
        let path = walk_text(CLASSIC_LAYOUT).unwrap();
        assert_eq!(path.visited_n(), 41);
        assert_eq!(
            path.turn_points().first(),
            Some(&PathEntry::new(&Position::new(1, 4), Direction::East, true))
        );
        assert_eq!(
            path.entries().last().map(|e| e.pos().clone()),
            Some(Position::new(9, 7))
        );
        assert_eq!(
            path.entries().iter().filter(|e| e.is_first_visit()).count(),
            41
        );
    }

    #[test]
    fn test_single_cell() {
        let path = walk_text("^").unwrap();
        assert_eq!(path.visited_n(), 1);
        assert_eq!(path.entries().len(), 1);
        assert!(path.turn_points().is_empty());
    }

    #[test]
    fn test_turns_twice_in_place() {
        // Blocked north and east at the start, leaves southward.
        let path = walk_text(".#.\n.^#\n...").unwrap();
        assert_eq!(path.visited_n(), 2);
        assert_eq!(path.turn_points().len(), 2);
        assert_eq!(path.entries()[0].dir(), Direction::South);
        assert_eq!(path.entries()[1].pos(), &Position::new(2, 1));
    }

    #[test]
    fn test_trapped_guard() {
        assert!(matches!(
            walk_text(".#..\n.^.#\n#...\n..#."),
            Err(Error::GuardTrapped(_))
        ));
    }
}
