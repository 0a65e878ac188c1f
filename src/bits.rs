//! Packed bit storage for per-cell flags of a rectangular grid.

use crate::grid::Position;

const WORD_BITS: usize = u64::BITS as usize;

/// One bit per cell, addressed by linear index `r * col_n + c`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitGrid {
    words: Vec<u64>,
    row_n: usize,
    col_n: usize,
}

impl BitGrid {
    pub fn new(row_n: usize, col_n: usize) -> Self {
        let bit_n = row_n * col_n;
        Self {
            words: vec![0; bit_n.div_ceil(WORD_BITS)],
            row_n,
            col_n,
        }
    }

    pub fn row_n(&self) -> usize {
        self.row_n
    }

    pub fn col_n(&self) -> usize {
        self.col_n
    }

    pub fn contains(&self, pos: &Position) -> bool {
        let (word_ind, mask) = self.locate(pos);
        self.words[word_ind] & mask != 0
    }

    /// Sets the bit of given position, returns true if it wasn't set before.
    pub fn insert(&mut self, pos: &Position) -> bool {
        let (word_ind, mask) = self.locate(pos);
        let word = &mut self.words[word_ind];
        let is_new = *word & mask == 0;
        *word |= mask;
        is_new
    }

    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    fn locate(&self, pos: &Position) -> (usize, u64) {
        debug_assert!(pos.r() < self.row_n && pos.c() < self.col_n);
        let ind = pos.r() * self.col_n + pos.c();
        (ind / WORD_BITS, 1 << (ind % WORD_BITS))
    }
}

#[test]
fn test_insert_reports_new_bits() {
    let mut bits = BitGrid::new(3, 70);
    let pos = Position::new(2, 65);
    assert!(!bits.contains(&pos));
    assert!(bits.insert(&pos));
    assert!(!bits.insert(&pos));
    assert!(bits.contains(&pos));
    assert!(!bits.contains(&Position::new(2, 64)));
    assert!(bits.insert(&Position::new(0, 0)));
    assert_eq!(bits.count(), 2);
}
