//! Constraint assembly.
//!
//! [`Solver`] is the context object of a single solving run: it owns the
//! encoding, the object grid and the global formula. The formula starts as the
//! constant true and every `add_*` call narrows it by conjunction.
//!
//! # Example
//!
//! ```
//! use bdd_puzzle::grid::Grid;
//! use bdd_puzzle::solver::Solver;
//! use bdd_puzzle::types::Shape;
//!
//! // Two objects in a single row, one property with two values
//! let mut solver = Solver::new(Shape::new(2, 1, 2), Grid::new(1, 2));
//! solver.add_domain();
//! solver.add_uniqueness();
//! assert_eq!(solver.count(), 2.0);
//!
//! solver.add_assign(0, 0, 1);
//! assert_eq!(solver.count(), 1.0);
//! ```

use biodivine_lib_bdd::{Bdd, BddValuation};
use log::debug;
use num_bigint::BigUint;

use crate::constraint::Constraint;
use crate::encoding::Encoding;
use crate::grid::{Direction, Grid};
use crate::solution::{self, Solutions};
use crate::types::Shape;

pub struct Solver {
    encoding: Encoding,
    grid: Grid,
    formula: Bdd,
}

impl Solver {
    pub fn new(shape: Shape, grid: Grid) -> Self {
        assert_eq!(
            grid.size(),
            shape.objects(),
            "Grid of size {} does not fit {} objects",
            grid.size(),
            shape.objects()
        );
        let encoding = Encoding::new(shape);
        let formula = encoding.variables().mk_true();
        Self {
            encoding,
            grid,
            formula,
        }
    }

    pub fn encoding(&self) -> &Encoding {
        &self.encoding
    }

    pub fn shape(&self) -> Shape {
        self.encoding.shape()
    }

    /// The global formula assembled so far.
    pub fn formula(&self) -> &Bdd {
        &self.formula
    }

    pub fn node_count(&self) -> usize {
        self.formula.size()
    }

    pub fn is_satisfiable(&self) -> bool {
        !self.formula.is_false()
    }

    /// Number of satisfying assignments over all encoding variables.
    ///
    /// Exact only up to 2^53, see [`Solver::exact_count`].
    pub fn count(&self) -> f64 {
        self.formula.cardinality()
    }

    /// Number of satisfying assignments, summed exactly over the satisfying regions.
    pub fn exact_count(&self) -> BigUint {
        solution::exact_count(&self.encoding, &self.formula)
    }

    /// All solutions of the formula, see [`Solutions`].
    pub fn solutions(&self) -> Solutions<'_> {
        Solutions::new(&self.encoding, &self.formula)
    }

    /// Evaluates the global formula in a concrete assignment of all encoding variables.
    pub fn eval(&self, assignment: &[bool]) -> bool {
        assert_eq!(assignment.len(), self.shape().num_vars());
        self.formula.eval_in(&BddValuation::new(assignment.to_vec()))
    }

    fn p(&self, property: usize, object: usize, value: usize) -> &Bdd {
        self.encoding.predicate(property, object, value)
    }

    fn narrow(&mut self, f: &Bdd) {
        self.formula = self.formula.and(f);
    }

    /// Every `(property, object)` pair takes at least one of the values.
    pub fn add_domain(&mut self) {
        let shape = self.shape();
        for property in 0..shape.properties() {
            for object in 0..shape.objects() {
                let mut any = self.encoding.variables().mk_false();
                for value in 0..shape.values() {
                    any = any.or(self.p(property, object, value));
                }
                self.narrow(&any);
            }
        }
        debug!("domain: formula of size {}", self.node_count());
    }

    /// No two distinct objects share the same value of a property.
    pub fn add_uniqueness(&mut self) {
        let shape = self.shape();
        for property in 0..shape.properties() {
            for value in 0..shape.values() {
                for i in 0..shape.objects() {
                    for j in (i + 1)..shape.objects() {
                        let both = self.p(property, i, value).and(self.p(property, j, value));
                        self.narrow(&both.not());
                    }
                }
            }
            debug!("uniqueness of p{}: formula of size {}", property, self.node_count());
        }
    }

    pub fn add_assign(&mut self, object: usize, property: usize, value: usize) {
        let f = self.p(property, object, value).clone();
        self.narrow(&f);
    }

    pub fn add_implies(&mut self, if_property: usize, if_value: usize, then_property: usize, then_value: usize) {
        for object in 0..self.shape().objects() {
            let antecedent = self.p(if_property, object, if_value);
            let consequent = self.p(then_property, object, then_value);
            let f = antecedent.not().or(consequent);
            self.narrow(&f);
        }
    }

    pub fn add_neighbor(
        &mut self,
        direction: Direction,
        if_property: usize,
        if_value: usize,
        then_property: usize,
        then_value: usize,
    ) {
        for object in 0..self.shape().objects() {
            let antecedent = self.p(if_property, object, if_value);
            let f = match self.grid.neighbor(object, direction) {
                Some(n) => antecedent.not().or(self.p(then_property, n, then_value)),
                None => antecedent.not(),
            };
            self.narrow(&f);
        }
    }

    pub fn add_any_neighbor(&mut self, if_property: usize, if_value: usize, then_property: usize, then_value: usize) {
        for object in 0..self.shape().objects() {
            let mut f = self.p(if_property, object, if_value).not();
            for n in self.grid.neighbors(object) {
                f = f.or(self.p(then_property, n, then_value));
            }
            self.narrow(&f);
        }
    }

    pub fn add_constraint(&mut self, constraint: &Constraint) {
        match *constraint {
            Constraint::Assign {
                object,
                property,
                value,
            } => self.add_assign(object, property, value),
            Constraint::Implies {
                if_property,
                if_value,
                then_property,
                then_value,
            } => self.add_implies(if_property, if_value, then_property, then_value),
            Constraint::Neighbor {
                direction,
                if_property,
                if_value,
                then_property,
                then_value,
            } => self.add_neighbor(direction, if_property, if_value, then_property, then_value),
            Constraint::AnyNeighbor {
                if_property,
                if_value,
                then_property,
                then_value,
            } => self.add_any_neighbor(if_property, if_value, then_property, then_value),
        }
        debug!("{}: formula of size {}", constraint, self.node_count());
    }

    pub fn add_constraints<'a>(&mut self, constraints: impl IntoIterator<Item = &'a Constraint>) {
        for constraint in constraints {
            self.add_constraint(constraint);
        }
    }
}
