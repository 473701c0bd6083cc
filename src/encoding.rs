//! Boolean encoding of property values.
//!
//! Every `(object, property)` pair owns a block of [`Shape::bits()`] consecutive
//! BDD variables holding the binary representation of the value (bit 0 is the
//! least significant one). The variable index of a bit is
//!
//! ```text
//! ((object * properties + property) * bits) + bit
//! ```
//!
//! so all blocks of one object are adjacent in the variable ordering.
//!
//! # Example
//!
//! ```
//! use bdd_puzzle::encoding::{decode, encode, Encoding};
//! use bdd_puzzle::types::Shape;
//!
//! let encoding = Encoding::new(Shape::new(3, 2, 3));
//! assert_eq!(encoding.var_index(1, 0, 1), 5);
//!
//! assert_eq!(encode(2, 2), vec![false, true]);
//! assert_eq!(decode(&encode(2, 2)), 2);
//!
//! // "object 1 has property 0 equal to 2" is satisfiable on its own
//! assert!(!encoding.predicate(0, 1, 2).is_false());
//! ```

use biodivine_lib_bdd::{Bdd, BddVariable, BddVariableSet};
use log::debug;

use crate::types::Shape;

/// Returns the `bits`-wide little-endian bit pattern of `value`.
pub fn encode(value: usize, bits: usize) -> Vec<bool> {
    (0..bits).map(|bit| (value >> bit) & 1 == 1).collect()
}

/// Recovers a value from its little-endian bit block.
pub fn decode(block: &[bool]) -> usize {
    block
        .iter()
        .enumerate()
        .filter(|&(_, &bit)| bit)
        .map(|(i, _)| 1usize << i)
        .sum()
}

/// Variable set of the puzzle together with the property-value predicate table.
pub struct Encoding {
    shape: Shape,
    variables: BddVariableSet,
    vars: Vec<BddVariable>,
    /// Flat `(property, object, value)` table, see [`Encoding::predicate`].
    predicates: Vec<Bdd>,
}

impl Encoding {
    /// Declares the encoding variables and builds the predicate table.
    pub fn new(shape: Shape) -> Self {
        let variables = BddVariableSet::new_anonymous(shape.num_vars() as u16);
        let vars = variables.variables();
        assert_eq!(vars.len(), shape.num_vars());

        let mut encoding = Encoding {
            shape,
            variables,
            vars,
            predicates: Vec::with_capacity(shape.properties() * shape.objects() * shape.values()),
        };

        for property in 0..shape.properties() {
            for object in 0..shape.objects() {
                for value in 0..shape.values() {
                    let p = encoding.mk_value(object, property, value);
                    encoding.predicates.push(p);
                }
            }
        }
        debug!(
            "built {} value predicates over {} variables",
            encoding.predicates.len(),
            encoding.vars.len()
        );

        encoding
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn variables(&self) -> &BddVariableSet {
        &self.variables
    }

    /// Index of the encoding variable holding `bit` of the `(object, property)` block.
    pub fn var_index(&self, object: usize, property: usize, bit: usize) -> usize {
        debug_assert!(object < self.shape.objects());
        debug_assert!(property < self.shape.properties());
        debug_assert!(bit < self.shape.bits());
        (object * self.shape.properties() + property) * self.shape.bits() + bit
    }

    /// Library handle of the variable with the given index.
    pub fn var(&self, index: usize) -> BddVariable {
        self.vars[index]
    }

    /// Conjunction of per-bit literals matching the binary encoding of `value`.
    fn mk_value(&self, object: usize, property: usize, value: usize) -> Bdd {
        let mut f = self.variables.mk_true();
        for (bit, positive) in encode(value, self.shape.bits()).into_iter().enumerate() {
            let var = self.var(self.var_index(object, property, bit));
            let literal = if positive {
                self.variables.mk_var(var)
            } else {
                self.variables.mk_not_var(var)
            };
            f = f.and(&literal);
        }
        f
    }

    /// Predicate "object's property equals value".
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range.
    pub fn predicate(&self, property: usize, object: usize, value: usize) -> &Bdd {
        assert!(property < self.shape.properties(), "property {} out of range", property);
        assert!(object < self.shape.objects(), "object {} out of range", object);
        assert!(value < self.shape.values(), "value {} out of range", value);
        let index = (property * self.shape.objects() + object) * self.shape.values() + value;
        &self.predicates[index]
    }

    /// Decodes `[object][property]` values from a concrete assignment of all
    /// encoding variables.
    pub fn decode_all(&self, assignment: &[bool]) -> Vec<Vec<usize>> {
        assert_eq!(assignment.len(), self.shape.num_vars());
        let bits = self.shape.bits();
        (0..self.shape.objects())
            .map(|object| {
                (0..self.shape.properties())
                    .map(|property| {
                        let start = self.var_index(object, property, 0);
                        decode(&assignment[start..start + bits])
                    })
                    .collect()
            })
            .collect()
    }
}
