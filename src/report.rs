//! Plain-text solutions report.
//!
//! ```text
//! <count>
//! <object 0: property values>
//! ...
//! <object N-1: property values>
//!
//! <next solution>
//! ```
//!
//! The first line is the number of satisfying assignments, summed exactly over
//! the satisfying regions. The library's floating point count is only logged, it
//! loses precision above 2^53. Every solution is followed by a blank line. When
//! the count is zero nothing but the count line is written.
//!
//! [`verify`] cross-checks a written report against the formula.

use std::error::Error;
use std::fmt;
use std::io::{self, Write};

use log::{debug, info};
use num_bigint::BigUint;

use crate::solution::Solution;
use crate::solver::Solver;

/// Writes the report for the formula of `solver`, returning the number of
/// printed solutions.
pub fn write_report<W: Write>(out: &mut W, solver: &Solver) -> io::Result<usize> {
    let exact = solver.exact_count();
    info!("satisfying assignments: {} (library count {})", exact, solver.count());
    writeln!(out, "{}", exact)?;

    if !solver.is_satisfiable() {
        return Ok(0);
    }

    let mut printed = 0;
    for solution in solver.solutions() {
        writeln!(out, "{}", solution)?;
        printed += 1;
    }
    info!("printed {} solutions", printed);

    Ok(printed)
}

/// Disagreement between a written report and the formula it was written for.
#[derive(Debug, Clone, PartialEq)]
pub enum Mismatch {
    /// The regions of the formula hold a different number of assignments.
    RegionCount { printed: usize, exact: BigUint },
    /// The library counted a different number of assignments.
    LibraryCount { printed: usize, counted: f64 },
    /// A solution (0-based position) does not satisfy the formula.
    Unsatisfied { index: usize, solution: Solution },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::RegionCount { printed, exact } => {
                write!(f, "Printed {} solutions, but the regions hold {}", printed, exact)
            }
            Mismatch::LibraryCount { printed, counted } => {
                write!(f, "Printed {} solutions, but the library counted {}", printed, counted)
            }
            Mismatch::Unsatisfied { index, solution } => {
                write!(f, "Solution #{} does not satisfy the formula:\n{}", index + 1, solution)
            }
        }
    }
}

impl Error for Mismatch {}

/// Checks that `printed` solutions is the right number for the formula of
/// `solver`, and that each of its solutions satisfies the formula.
pub fn verify(solver: &Solver, printed: usize) -> Result<(), Mismatch> {
    let exact = solver.exact_count();
    if exact != BigUint::from(printed) {
        return Err(Mismatch::RegionCount { printed, exact });
    }
    let counted = solver.count();
    if counted != printed as f64 {
        return Err(Mismatch::LibraryCount { printed, counted });
    }
    check_solutions(solver, solver.solutions())?;
    info!("All {} solutions verified", printed);
    Ok(())
}

/// Checks every solution against the formula of `solver`.
pub fn check_solutions(solver: &Solver, solutions: impl IntoIterator<Item = Solution>) -> Result<(), Mismatch> {
    for (index, solution) in solutions.into_iter().enumerate() {
        if !solution.check(solver) {
            return Err(Mismatch::Unsatisfied { index, solution });
        }
        debug!("solution #{} holds", index + 1);
    }
    Ok(())
}
