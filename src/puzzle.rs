//! The puzzle instance: dimensions, layout and the list of constraint records.

use log::{debug, info};

use crate::constraint::Constraint;
use crate::grid::{Direction, Grid};
use crate::solver::Solver;
use crate::types::Shape;

/// Number of objects in the lab instance.
pub const N: usize = 9;
/// Number of properties of each object in the lab instance.
pub const M: usize = 4;

/// Least number of records of each kind the lab variant asks for:
/// assignments, implications, directed neighbours, any-neighbours.
pub const MIN_ASSIGN: usize = 7;
pub const MIN_IMPLIES: usize = 4;
pub const MIN_NEIGHBOR: usize = 2;
pub const MIN_ANY_NEIGHBOR: usize = 6;

#[derive(Debug, Clone)]
pub struct Puzzle {
    pub shape: Shape,
    pub grid: Grid,
    pub constraints: Vec<Constraint>,
}

impl Puzzle {
    pub fn new(shape: Shape, grid: Grid, constraints: Vec<Constraint>) -> Self {
        let puzzle = Puzzle {
            shape,
            grid,
            constraints,
        };
        puzzle.validate();
        puzzle
    }

    /// Checks that every record refers to existing objects, properties and values.
    ///
    /// # Panics
    ///
    /// Panics on the first out-of-range operand.
    pub fn validate(&self) {
        assert_eq!(self.grid.size(), self.shape.objects(), "Grid does not fit the objects");
        for constraint in &self.constraints {
            if let Constraint::Assign { object, .. } = *constraint {
                assert!(object < self.shape.objects(), "{}: no object {}", constraint, object);
            }
            for (property, value) in constraint.operands() {
                assert!(property < self.shape.properties(), "{}: no property {}", constraint, property);
                assert!(value < self.shape.values(), "{}: no value {}", constraint, value);
            }
        }
    }

    /// Builds the predicate table and assembles the global formula: puzzle
    /// records first, then domain and uniqueness.
    pub fn solver(&self) -> Solver {
        info!("Encoding puzzle: {}", self.shape);
        let mut solver = Solver::new(self.shape, self.grid);
        debug!("{} encoding variables", self.shape.num_vars());

        solver.add_constraints(&self.constraints);
        info!("{} constraints: formula of size {}", self.constraints.len(), solver.node_count());

        solver.add_domain();
        solver.add_uniqueness();
        info!("domain and uniqueness: formula of size {}", solver.node_count());

        solver
    }

    /// Number of records of each kind: assignments, implications, directed
    /// neighbours, any-neighbours.
    pub fn kind_counts(&self) -> [usize; 4] {
        let mut counts = [0; 4];
        for constraint in &self.constraints {
            let kind = match constraint {
                Constraint::Assign { .. } => 0,
                Constraint::Implies { .. } => 1,
                Constraint::Neighbor { .. } => 2,
                Constraint::AnyNeighbor { .. } => 3,
            };
            counts[kind] += 1;
        }
        counts
    }

    /// The lab instance: nine objects on a 3x3 grid, four properties.
    ///
    /// Holds at least the required number of records of each kind; the
    /// assignments beyond [`MIN_ASSIGN`] pin the solution set down to two.
    pub fn lab() -> Self {
        let shape = Shape::new(N, M, N);
        let grid = Grid::new(3, 3);

        let assign = |object, property, value| Constraint::Assign {
            object,
            property,
            value,
        };
        let implies = |if_property, if_value, then_property, then_value| Constraint::Implies {
            if_property,
            if_value,
            then_property,
            then_value,
        };
        let neighbor = |direction, if_property, if_value, then_property, then_value| Constraint::Neighbor {
            direction,
            if_property,
            if_value,
            then_property,
            then_value,
        };
        let any_neighbor = |if_property, if_value, then_property, then_value| Constraint::AnyNeighbor {
            if_property,
            if_value,
            then_property,
            then_value,
        };

        let constraints = vec![
            assign(1, 0, 6),
            assign(3, 0, 4),
            assign(7, 0, 2),
            assign(8, 0, 5),
            assign(2, 1, 8),
            assign(6, 1, 4),
            assign(1, 2, 5),
            assign(2, 2, 2),
            assign(6, 2, 0),
            assign(7, 2, 3),
            assign(0, 3, 1),
            assign(1, 3, 2),
            assign(4, 3, 8),
            assign(5, 3, 6),
            assign(8, 3, 3),
            implies(0, 0, 1, 7),
            implies(1, 8, 3, 5),
            implies(1, 3, 0, 1),
            implies(2, 1, 1, 5),
            neighbor(Direction::Below, 1, 3, 2, 6),
            neighbor(Direction::BelowLeft, 3, 7, 1, 5),
            any_neighbor(3, 5, 0, 8),
            any_neighbor(1, 3, 2, 4),
            any_neighbor(2, 5, 1, 6),
            any_neighbor(0, 4, 3, 4),
            any_neighbor(2, 7, 0, 3),
            any_neighbor(1, 2, 0, 0),
        ];

        Puzzle::new(shape, grid, constraints)
    }
}
