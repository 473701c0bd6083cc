//! Expansion of partial assignments into concrete ones.
//!
//! The BDD library enumerates satisfying *regions*: paths to the true terminal,
//! where every variable not tested on the path is a don't-care. A region with
//! `k` don't-care variables stands for `2^k` concrete assignments, which
//! [`Expansions`] produces one by one.
//!
//! # Example
//!
//! ```
//! use bdd_puzzle::expand::PartialAssignment;
//! use bdd_puzzle::types::Ternary;
//!
//! let partial = PartialAssignment::new(vec![Ternary::True, Ternary::DontCare, Ternary::False]);
//! let all: Vec<_> = partial.expand().collect();
//! assert_eq!(all, vec![vec![true, false, false], vec![true, true, false]]);
//! ```
//!
//! # Performance
//!
//! The traversal is depth-first with an explicit stack, so the depth is bounded
//! only by memory. The number of yielded assignments is exponential in the
//! number of don't-cares.

use std::fmt;

use biodivine_lib_bdd::{BddPartialValuation, BddVariable};
use num_bigint::BigUint;

use crate::types::Ternary;

/// Assignment of every encoding variable to false, true or don't-care.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PartialAssignment {
    values: Vec<Ternary>,
}

impl PartialAssignment {
    pub fn new(values: Vec<Ternary>) -> Self {
        Self { values }
    }

    /// Reads a library path over the given variables (in index order).
    pub fn from_valuation(valuation: &BddPartialValuation, vars: impl IntoIterator<Item = BddVariable>) -> Self {
        let values = vars.into_iter().map(|var| Ternary::from(valuation.get_value(var))).collect();
        Self { values }
    }

    pub fn dont_cares(&self) -> usize {
        self.values.iter().filter(|&&v| v == Ternary::DontCare).count()
    }

    /// Number of concrete assignments in the region, `2^dont_cares`.
    pub fn region_size(&self) -> BigUint {
        BigUint::from(1u32) << self.dont_cares()
    }

    pub fn expand(&self) -> Expansions {
        Expansions::new(self)
    }
}

impl fmt::Display for PartialAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in &self.values {
            write!(f, "{}", v)?;
        }
        Ok(())
    }
}

/// Branch to explore next at a don't-care position.
#[derive(Debug, Clone, Copy)]
enum Branch {
    Low,
    High,
}

#[derive(Debug)]
struct Frame {
    /// Index into the list of don't-care positions.
    depth: usize,
    /// Which value to try next (None if both tried)
    next_branch: Option<Branch>,
}

/// Iterator over all concrete assignments of a [`PartialAssignment`].
///
/// Don't-care positions are expanded in index order, `false` before `true`.
pub struct Expansions {
    /// Positions of the don't-care variables.
    free: Vec<usize>,
    /// Current assignment, fixed positions never change.
    current: Vec<bool>,
    stack: Vec<Frame>,
}

impl Expansions {
    pub fn new(partial: &PartialAssignment) -> Self {
        let free = partial
            .values
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == Ternary::DontCare)
            .map(|(i, _)| i)
            .collect();
        let current = partial.values.iter().map(|&v| v == Ternary::True).collect();
        Expansions {
            free,
            current,
            stack: vec![Frame {
                depth: 0,
                next_branch: Some(Branch::Low),
            }],
        }
    }
}

impl Iterator for Expansions {
    type Item = Vec<bool>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;
            let depth = frame.depth;

            if depth == self.free.len() {
                // Every don't-care is set
                self.stack.pop();
                return Some(self.current.clone());
            }

            let position = self.free[depth];
            match frame.next_branch {
                Some(Branch::Low) => {
                    frame.next_branch = Some(Branch::High);
                    self.current[position] = false;
                    self.stack.push(Frame {
                        depth: depth + 1,
                        next_branch: Some(Branch::Low),
                    });
                }
                Some(Branch::High) => {
                    frame.next_branch = None;
                    self.current[position] = true;
                    self.stack.push(Frame {
                        depth: depth + 1,
                        next_branch: Some(Branch::Low),
                    });
                }
                None => {
                    self.current[position] = false;
                    self.stack.pop();
                }
            }
        }
    }
}
