use rayon::{
    iter::{IntoParallelIterator, ParallelIterator},
    ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder,
};
use tracing::{debug, trace};

use crate::{
    loop_detect::{LoopDetector, VisitedState},
    walker::Path,
};

/// Thread pool for loop counting, `None` lets rayon pick the number of threads.
pub fn build_pool(threads: Option<usize>) -> Result<ThreadPool, ThreadPoolBuildError> {
    let mut builder = ThreadPoolBuilder::new();
    if let Some(thread_n) = threads {
        builder = builder.num_threads(thread_n);
    }

    builder.build()
}

/// Counts the cells on the real path where one extra obstacle traps the guard.
///
/// Each cell is tried once, when the guard first steps on it, from the state just
/// before that step. The start cell is never tried. Runs on the current rayon pool.
pub fn count_looping_candidates(path: &Path, detector: &LoopDetector) -> usize {
    let entries = path.entries();
    let candidate_n = entries.len().saturating_sub(1);
    let loop_n = (0..candidate_n)
        .into_par_iter()
        .map_init(VisitedState::new, |visited, ind| {
            let (from, blocker) = (&entries[ind], &entries[ind + 1]);
            if !blocker.is_first_visit() {
                return 0;
            }

            let is_loop =
                detector.would_loop_with(from.pos(), from.dir(), blocker.pos(), visited);
            if is_loop {
                trace!(blocker = %blocker.pos(), "blocker traps the guard");
            }

            usize::from(is_loop)
        })
        .sum();

    debug!(candidate_n, loop_n, "loop candidates checked");
    loop_n
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        adjacency::AdjacencyTable,
        grid::Laboratory,
        walker::{self, Path},
    };

    const CLASSIC_LAYOUT: &str = "....#.....\n.........#\n..........\n..#.......\n.......#..\n..........\n.#..^.....\n........#.\n#.........\n......#...";

    fn count_with(text: &str, threads: Option<usize>) -> usize {
        let lab: Laboratory = text.parse().unwrap();
        let table = AdjacencyTable::build(lab.grid());
        let path: Path = walker::walk(lab.grid(), &table, lab.guard()).unwrap();
        let detector = LoopDetector::new(lab.grid(), &table);
        build_pool(threads)
            .unwrap()
            .install(|| count_looping_candidates(&path, &detector))
    }

    #[test]
    fn test_classic_layout() {
        assert_eq!(count_with(CLASSIC_LAYOUT, None), 6);
    }

    #[test]
    fn test_thread_count_does_not_matter() {
        let counts = [1, 2, 3, 8]
            .into_iter()
            .map(|n| count_with(CLASSIC_LAYOUT, Some(n)))
            .collect::<Vec<_>>();
        assert!(counts.iter().all(|n| *n == 6));
    }

    #[test]
    fn test_single_cell() {
        assert_eq!(count_with("^", Some(1)), 0);
    }

    #[test]
    fn test_single_loop_spot() {
        assert_eq!(count_with(".#..\n.^.#\n....\n..#.", Some(2)), 1);
    }

    #[test]
    fn test_revisited_start_is_not_a_candidate() {
        // The guard crosses its start again heading west before leaving.
        let text = ".#..\n...#\n.^..\n..#.";
        let lab: Laboratory = text.parse().unwrap();
        let table = AdjacencyTable::build(lab.grid());
        let path = walker::walk(lab.grid(), &table, lab.guard()).unwrap();
        let start_visits = path
            .entries()
            .iter()
            .filter(|e| e.pos() == lab.guard().pos())
            .map(|e| e.is_first_visit())
            .collect::<Vec<_>>();
        assert_eq!(start_visits, vec![true, false]);
        assert_eq!(path.visited_n(), 5);
        assert_eq!(count_with(text, Some(2)), 1);
    }
}
