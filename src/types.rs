//! Dimensions of a puzzle instance and the ternary cell type.
//!
//! A puzzle has `objects` objects, each with `properties` properties, and every
//! property takes one of `values` values. Each value is stored in a block of
//! [`Shape::bits()`] boolean variables.
use std::fmt;

/// Dimensions of a puzzle instance.
///
/// # Invariants
///
/// - `objects`, `properties` and `values` are all >= 1
/// - The total number of encoding variables fits into `u16`
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Shape {
    objects: usize,
    properties: usize,
    values: usize,
}

impl Shape {
    /// Creates a new shape.
    ///
    /// # Panics
    ///
    /// Panics if any dimension is zero, or if the encoding would need more
    /// variables than the BDD library supports.
    pub fn new(objects: usize, properties: usize, values: usize) -> Self {
        assert!(objects > 0, "Puzzle must have at least one object");
        assert!(properties > 0, "Puzzle must have at least one property");
        assert!(values > 0, "Property must have at least one value");
        let shape = Shape {
            objects,
            properties,
            values,
        };
        assert!(
            shape.num_vars() <= u16::MAX as usize,
            "Too many encoding variables: {}",
            shape.num_vars()
        );
        shape
    }

    pub fn objects(&self) -> usize {
        self.objects
    }

    pub fn properties(&self) -> usize {
        self.properties
    }

    pub fn values(&self) -> usize {
        self.values
    }

    /// Number of bits needed to distinguish all values, at least 1.
    pub fn bits(&self) -> usize {
        let mut bits = 1;
        while (1usize << bits) < self.values {
            bits += 1;
        }
        bits
    }

    /// Total number of boolean variables in the encoding.
    pub fn num_vars(&self) -> usize {
        self.objects * self.properties * self.bits()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} objects x {} properties x {} values ({} bits)",
            self.objects,
            self.properties,
            self.values,
            self.bits()
        )
    }
}

/// Value of a single variable in a partial assignment.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Ternary {
    False,
    True,
    DontCare,
}

impl From<Option<bool>> for Ternary {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(false) => Ternary::False,
            Some(true) => Ternary::True,
            None => Ternary::DontCare,
        }
    }
}

impl fmt::Display for Ternary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Ternary::False => '0',
            Ternary::True => '1',
            Ternary::DontCare => '-',
        };
        write!(f, "{}", c)
    }
}
