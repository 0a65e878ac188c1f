use std::{error, fmt::Display};

use crate::grid::Guard;

#[derive(Debug)]
pub enum Error {
    InconsistentRow(usize, usize),
    MultipleGuards(Guard, Guard),
    InvalidChar(char),
    NoGuard,
    // The unmodified laboratory never lets the guard out.
    GuardTrapped(Guard),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_col_n, real_col_n) => write!(
                f,
                "Expect {} columns in this row, given {}.",
                expect_col_n, real_col_n
            ),
            Error::MultipleGuards(guard0, guard1) => write!(
                f,
                "Found multiple guards({}, {}) in given laboratory, expect one only.",
                guard0, guard1
            ),
            Error::InvalidChar(c) => {
                write!(f, "Invalid character({}) in text of laboratory layout.", c)
            }
            Error::NoGuard => write!(f, "There's no guard in given laboratory, but expect one."),
            Error::GuardTrapped(guard) => write!(
                f,
                "Guard starting at {} never leaves given laboratory.",
                guard
            ),
        }
    }
}

impl error::Error for Error {}
