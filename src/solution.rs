//! Enumeration and decoding of solutions.

use std::fmt;

use biodivine_lib_bdd::{Bdd, BddPartialValuation};
use log::debug;
use num_bigint::BigUint;

use crate::encoding::{encode, Encoding};
use crate::expand::{Expansions, PartialAssignment};
use crate::solver::Solver;

/// Decoded values of a concrete assignment, indexed `[object][property]`.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Solution {
    values: Vec<Vec<usize>>,
}

impl Solution {
    pub fn new(values: Vec<Vec<usize>>) -> Self {
        Self { values }
    }

    pub fn decode(encoding: &Encoding, assignment: &[bool]) -> Self {
        Self::new(encoding.decode_all(assignment))
    }

    pub fn values(&self) -> &[Vec<usize>] {
        &self.values
    }

    pub fn value(&self, object: usize, property: usize) -> usize {
        self.values[object][property]
    }

    /// Re-encodes the solution into a concrete assignment of all encoding variables.
    pub fn to_assignment(&self, encoding: &Encoding) -> Vec<bool> {
        let shape = encoding.shape();
        let mut assignment = vec![false; shape.num_vars()];
        for (object, row) in self.values.iter().enumerate() {
            for (property, &value) in row.iter().enumerate() {
                for (bit, b) in encode(value, shape.bits()).into_iter().enumerate() {
                    assignment[encoding.var_index(object, property, bit)] = b;
                }
            }
        }
        assignment
    }

    /// Whether the solution satisfies the global formula of `solver`.
    pub fn check(&self, solver: &Solver) -> bool {
        solver.eval(&self.to_assignment(solver.encoding()))
    }
}

/// One line per object, property values separated by spaces.
impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.values {
            let line = row.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Satisfying regions of `formula` as partial assignments over all encoding variables.
pub fn regions<'a>(encoding: &'a Encoding, formula: &'a Bdd) -> impl Iterator<Item = PartialAssignment> + 'a {
    let num_vars = encoding.shape().num_vars();
    formula.sat_clauses().map(move |valuation: BddPartialValuation| {
        PartialAssignment::from_valuation(&valuation, (0..num_vars).map(|i| encoding.var(i)))
    })
}

/// Exact number of satisfying assignments, summed over regions.
pub fn exact_count(encoding: &Encoding, formula: &Bdd) -> BigUint {
    regions(encoding, formula).map(|region| region.region_size()).sum()
}

/// Iterator over all solutions of a formula.
///
/// Regions come in the library's path order, each expanded with
/// [`Expansions`], so the order is deterministic.
pub struct Solutions<'a> {
    encoding: &'a Encoding,
    regions: Box<dyn Iterator<Item = PartialAssignment> + 'a>,
    current: Option<Expansions>,
}

impl<'a> Solutions<'a> {
    pub fn new(encoding: &'a Encoding, formula: &'a Bdd) -> Self {
        Solutions {
            encoding,
            regions: Box::new(regions(encoding, formula)),
            current: None,
        }
    }
}

impl Iterator for Solutions<'_> {
    type Item = Solution;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(expansions) = &mut self.current {
                if let Some(assignment) = expansions.next() {
                    return Some(Solution::decode(self.encoding, &assignment));
                }
            }
            let region = self.regions.next()?;
            debug!("region with {} don't-cares: {}", region.dont_cares(), region);
            self.current = Some(region.expand());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    use test_log::test;

    use crate::grid::Grid;
    use crate::types::Shape;

    fn small() -> Solver {
        let mut solver = Solver::new(Shape::new(3, 2, 3), Grid::new(1, 3));
        solver.add_domain();
        solver.add_uniqueness();
        solver
    }

    #[test]
    fn test_all_permutations() {
        let solver = small();
        let solutions: Vec<_> = solver.solutions().collect();
        assert_eq!(solutions.len(), 36);
        let distinct: HashSet<_> = solutions.iter().cloned().collect();
        assert_eq!(distinct.len(), 36);
        assert_eq!(solver.exact_count(), BigUint::from(36u32));
        assert_eq!(solver.count(), 36.0);

        for solution in &solutions {
            assert!(solution.check(&solver));
            for property in 0..2 {
                let mut column: Vec<_> = (0..3).map(|object| solution.value(object, property)).collect();
                column.sort();
                assert_eq!(column, vec![0, 1, 2]);
            }
        }
    }

    #[test]
    fn test_dont_cares_expanded() {
        // Only the first block is fixed, the second one is free
        let mut solver = Solver::new(Shape::new(1, 2, 4), Grid::new(1, 1));
        solver.add_assign(0, 0, 2);
        let regions: Vec<_> = regions(solver.encoding(), solver.formula()).collect();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].dont_cares(), 2);

        let solutions: Vec<_> = solver.solutions().collect();
        assert_eq!(solutions.len(), 4);
        let second: HashSet<_> = solutions.iter().map(|s| s.value(0, 1)).collect();
        assert_eq!(second, HashSet::from([0, 1, 2, 3]));
        assert!(solutions.iter().all(|s| s.value(0, 0) == 2));
        assert_eq!(solver.exact_count(), BigUint::from(4u32));
    }

    #[test]
    fn test_unsatisfiable() {
        let mut solver = small();
        solver.add_assign(0, 0, 1);
        solver.add_assign(1, 0, 1);
        assert_eq!(solver.solutions().count(), 0);
        assert_eq!(solver.exact_count(), BigUint::ZERO);
    }

    #[test]
    fn test_exact_count_beyond_f64() {
        // Everything but the all-zero assignment of 54 variables
        let solver = Solver::new(Shape::new(54, 1, 2), Grid::new(1, 54));
        let encoding = solver.encoding();
        let vars = encoding.variables();
        let mut all_zero = vars.mk_true();
        for i in 0..54 {
            all_zero = all_zero.and(&vars.mk_not_var(encoding.var(i)));
        }
        let formula = all_zero.not();
        assert_eq!(exact_count(encoding, &formula), (BigUint::from(1u32) << 54u32) - 1u32);
    }

    #[test]
    fn test_to_assignment_roundtrip() {
        let solver = small();
        let solution = Solution::new(vec![vec![2, 0], vec![0, 1], vec![1, 2]]);
        let assignment = solution.to_assignment(solver.encoding());
        assert_eq!(Solution::decode(solver.encoding(), &assignment), solution);
        assert!(solution.check(&solver));

        let bad = Solution::new(vec![vec![2, 0], vec![2, 1], vec![1, 2]]);
        assert!(!bad.check(&solver));
    }

    #[test]
    fn test_display() {
        let solution = Solution::new(vec![vec![2, 0], vec![0, 1], vec![1, 2]]);
        assert_eq!(solution.to_string(), "2 0\n0 1\n1 2\n");
    }
}
