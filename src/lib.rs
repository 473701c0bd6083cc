//! # bdd-puzzle: solving an assignment puzzle with Binary Decision Diagrams
//!
//! **`bdd-puzzle`** encodes a "zebra"-style puzzle as a boolean function and
//! solves it with BDDs. The puzzle has `N` objects, each with `M` properties,
//! and every property takes a value in `0..N`. Values of a property are
//! pairwise distinct across objects, and a list of hard-coded facts narrows
//! the solutions down further.
//!
//! All diagram work is done by [`biodivine_lib_bdd`]. This crate provides:
//!
//! - **[`encoding`]**: maps every `(object, property)` pair to a block of
//!   boolean variables and builds the "property equals value" predicates.
//! - **[`solver`]**: assembles the global formula from domain, uniqueness and
//!   [`constraint`] records.
//! - **[`expand`]** and **[`solution`]**: enumerate satisfying regions, expand
//!   don't-care variables and decode concrete solutions.
//! - **[`report`]**: writes the solutions file.
//! - **[`puzzle`]**: the fixed lab instance.
//!
//! ## Basic Usage
//!
//! ```rust
//! use bdd_puzzle::grid::Grid;
//! use bdd_puzzle::solver::Solver;
//! use bdd_puzzle::types::Shape;
//!
//! // Three objects in a row, two properties with three values each
//! let mut solver = Solver::new(Shape::new(3, 2, 3), Grid::new(1, 3));
//! solver.add_domain();
//! solver.add_uniqueness();
//!
//! // Object 0 has property 0 equal to 2
//! solver.add_assign(0, 0, 2);
//! // Whoever has property 0 equal to 2 also has property 1 equal to 0
//! solver.add_implies(0, 2, 1, 0);
//!
//! assert_eq!(solver.count(), 4.0);
//! for solution in solver.solutions() {
//!     assert_eq!(solution.value(0, 0), 2);
//!     assert_eq!(solution.value(0, 1), 0);
//!     assert!(solution.check(&solver));
//! }
//! ```

pub mod constraint;
pub mod encoding;
pub mod expand;
pub mod grid;
pub mod puzzle;
pub mod report;
pub mod solution;
pub mod solver;
pub mod types;
