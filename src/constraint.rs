//! Declarative puzzle constraints.
//!
//! Each record describes one hard-coded fact of the puzzle. All
//! implication-like records apply to **every** object; an antecedent is always
//! the value predicate "object's `if_property` equals `if_value`".

use std::fmt;

use crate::grid::Direction;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Constraint {
    /// The object's property equals the value.
    Assign {
        object: usize,
        property: usize,
        value: usize,
    },

    /// For every object: `P(if_property) = if_value` implies `P(then_property) = then_value`.
    Implies {
        if_property: usize,
        if_value: usize,
        then_property: usize,
        then_value: usize,
    },

    /// For every object: `P(if_property) = if_value` implies that its neighbour
    /// in `direction` has `P(then_property) = then_value`.
    ///
    /// An object without such a neighbour cannot satisfy the antecedent.
    Neighbor {
        direction: Direction,
        if_property: usize,
        if_value: usize,
        then_property: usize,
        then_value: usize,
    },

    /// For every object: `P(if_property) = if_value` implies that at least one
    /// of its neighbours has `P(then_property) = then_value`.
    ///
    /// An object without neighbours cannot satisfy the antecedent.
    AnyNeighbor {
        if_property: usize,
        if_value: usize,
        then_property: usize,
        then_value: usize,
    },
}

impl Constraint {
    /// All `(property, value)` pairs referenced by the record.
    pub fn operands(&self) -> Vec<(usize, usize)> {
        match *self {
            Constraint::Assign { property, value, .. } => vec![(property, value)],
            Constraint::Implies {
                if_property,
                if_value,
                then_property,
                then_value,
            }
            | Constraint::Neighbor {
                if_property,
                if_value,
                then_property,
                then_value,
                ..
            }
            | Constraint::AnyNeighbor {
                if_property,
                if_value,
                then_property,
                then_value,
            } => vec![(if_property, if_value), (then_property, then_value)],
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Assign {
                object,
                property,
                value,
            } => write!(f, "p{}[{}] = {}", property, object, value),
            Constraint::Implies {
                if_property,
                if_value,
                then_property,
                then_value,
            } => write!(
                f,
                "p{}[i] = {} -> p{}[i] = {}",
                if_property, if_value, then_property, then_value
            ),
            Constraint::Neighbor {
                direction,
                if_property,
                if_value,
                then_property,
                then_value,
            } => write!(
                f,
                "p{}[i] = {} -> p{}[{} of i] = {}",
                if_property, if_value, then_property, direction, then_value
            ),
            Constraint::AnyNeighbor {
                if_property,
                if_value,
                then_property,
                then_value,
            } => write!(
                f,
                "p{}[i] = {} -> p{}[some neighbour of i] = {}",
                if_property, if_value, then_property, then_value
            ),
        }
    }
}
