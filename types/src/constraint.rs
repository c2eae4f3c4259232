//! Constraint sets for type parameters.
//!
//! A constraint restricts which types may instantiate a type parameter. It
//! lists member kinds in two flavors:
//!
//!   - **exact** members accept only the predeclared type itself (`int64`).
//!   - **approximate** members (written `~float64`) also accept any distinct
//!     named type whose underlying representation is that kind.
//!
//! # Predeclared constraints
//!
//! ```text
//! Signed   = ~int | ~int8 | ~int16 | ~int32 | ~int64
//! Unsigned = ~uint | ~uint8 | ~uint16 | ~uint32 | ~uint64 | ~uintptr
//! Float    = ~float32 | ~float64
//! Integer  = Signed | Unsigned
//! Ordered  = Integer | Float | ~string
//! Number   = int | int64 | float32 | ~float64
//! ```
//!
//! `Number` is deliberately asymmetric: a named type over `float64` is a
//! member, a named type over `int64` is not.

use core::fmt;

use crate::kind::{Kind, KindSet};
use crate::ty::Ty;

/// A union of exact and approximate kind members.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Constraint {
    exact: KindSet,
    approximate: KindSet,
}

impl Constraint {
    /// The empty constraint. Accepts nothing.
    pub const fn new() -> Self {
        Self {
            exact: KindSet::empty(),
            approximate: KindSet::empty(),
        }
    }

    /// Adds `kind` as an exact member.
    pub const fn exact(self, kind: Kind) -> Self {
        Self {
            exact: self.exact.union(kind.bit()),
            approximate: self.approximate,
        }
    }

    /// Adds `kind` as an approximate member.
    pub const fn approximate(self, kind: Kind) -> Self {
        Self {
            exact: self.exact,
            approximate: self.approximate.union(kind.bit()),
        }
    }

    /// Adds every kind of `kinds` as an approximate member.
    pub const fn approximate_all(self, kinds: KindSet) -> Self {
        Self {
            exact: self.exact,
            approximate: self.approximate.union(kinds),
        }
    }

    /// Union of two constraints.
    ///
    /// A kind that is exact in one operand and approximate in the other stays
    /// approximate: the union accepts everything either operand accepts.
    pub const fn union(self, other: Constraint) -> Self {
        let approximate = self.approximate.union(other.approximate);
        Self {
            exact: self.exact.union(other.exact).difference(approximate),
            approximate,
        }
    }

    pub const fn exact_members(self) -> KindSet {
        self.exact
    }

    pub const fn approximate_members(self) -> KindSet {
        self.approximate
    }

    /// All kinds whose predeclared type satisfies the constraint.
    pub const fn members(self) -> KindSet {
        self.exact.union(self.approximate)
    }

    /// Whether the predeclared type of `kind` satisfies the constraint.
    pub const fn admits(self, kind: Kind) -> bool {
        self.members().has(kind)
    }

    /// Whether a distinct named type with underlying representation `kind`
    /// satisfies the constraint.
    pub const fn admits_underlying(self, kind: Kind) -> bool {
        self.approximate.has(kind)
    }

    /// Whether `ty` satisfies the constraint.
    pub fn accepts(&self, ty: &Ty<'_>) -> bool {
        match ty {
            Ty::Basic(kind) => self.admits(*kind),
            Ty::Named { underlying, .. } => self.admits_underlying(*underlying),
        }
    }
}

impl Default for Constraint {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Constraint {
    /// Formats the member list, e.g. `int | int64 | float32 | ~float64`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for kind in self.members().kinds() {
            if !first {
                f.write_str(" | ")?;
            }
            first = false;
            if self.approximate.has(kind) {
                f.write_str("~")?;
            }
            f.write_str(kind.name())?;
        }
        Ok(())
    }
}

const SIGNED: Constraint = Constraint::new().approximate_all(KindSet::SIGNED);
const UNSIGNED: Constraint = Constraint::new().approximate_all(KindSet::UNSIGNED);
const FLOAT: Constraint = Constraint::new().approximate_all(KindSet::FLOAT);
const INTEGER: Constraint = SIGNED.union(UNSIGNED);
const ORDERED: Constraint = INTEGER
    .union(FLOAT)
    .union(Constraint::new().approximate(Kind::String));
const NUMBER: Constraint = Constraint::new()
    .exact(Kind::Int)
    .exact(Kind::Int64)
    .exact(Kind::Float32)
    .approximate(Kind::Float64);

/// Predeclared constraint identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintId {
    /// Signed integers of every width.
    Signed,

    /// Unsigned integers of every width, including `uintptr`.
    Unsigned,

    /// Both float widths.
    Float,

    /// `Signed | Unsigned`
    Integer,

    /// Everything supporting `<`: `Integer | Float | ~string`
    Ordered,

    /// `int | int64 | float32 | ~float64`
    Number,
}

impl ConstraintId {
    pub const ALL: [ConstraintId; 6] = [
        ConstraintId::Signed,
        ConstraintId::Unsigned,
        ConstraintId::Float,
        ConstraintId::Integer,
        ConstraintId::Ordered,
        ConstraintId::Number,
    ];

    /// Returns a human-readable name for this constraint.
    pub const fn name(self) -> &'static str {
        match self {
            ConstraintId::Signed => "Signed",
            ConstraintId::Unsigned => "Unsigned",
            ConstraintId::Float => "Float",
            ConstraintId::Integer => "Integer",
            ConstraintId::Ordered => "Ordered",
            ConstraintId::Number => "Number",
        }
    }

    /// Returns a description of what the constraint is for.
    pub const fn description(self) -> &'static str {
        match self {
            ConstraintId::Signed => "signed integer arithmetic",
            ConstraintId::Unsigned => "unsigned integer arithmetic",
            ConstraintId::Float => "floating point arithmetic",
            ConstraintId::Integer => "integer arithmetic of either signedness",
            ConstraintId::Ordered => "comparison operations (<, >, <=, >=)",
            ConstraintId::Number => "addition and comparison on a fixed set of numbers",
        }
    }

    /// Returns which types satisfy the constraint.
    pub const fn instances(self) -> &'static str {
        match self {
            ConstraintId::Signed => "int, int8, int16, int32, int64 (and named types over them)",
            ConstraintId::Unsigned => {
                "uint, uint8, uint16, uint32, uint64, uintptr (and named types over them)"
            }
            ConstraintId::Float => "float32, float64 (and named types over them)",
            ConstraintId::Integer => "Signed, Unsigned",
            ConstraintId::Ordered => "Integer, Float, string (and named types over string)",
            ConstraintId::Number => "int, int64, float32, float64 (and named types over float64)",
        }
    }

    /// Returns the member table.
    pub const fn constraint(self) -> Constraint {
        match self {
            ConstraintId::Signed => SIGNED,
            ConstraintId::Unsigned => UNSIGNED,
            ConstraintId::Float => FLOAT,
            ConstraintId::Integer => INTEGER,
            ConstraintId::Ordered => ORDERED,
            ConstraintId::Number => NUMBER,
        }
    }

    /// See [`Constraint::admits`].
    pub const fn admits(self, kind: Kind) -> bool {
        self.constraint().admits(kind)
    }

    /// See [`Constraint::admits_underlying`].
    pub const fn admits_underlying(self, kind: Kind) -> bool {
        self.constraint().admits_underlying(kind)
    }

    /// Checks if a type satisfies this constraint.
    pub fn has_instance(self, ty: &Ty<'_>) -> bool {
        self.constraint().accepts(ty)
    }
}

impl fmt::Display for ConstraintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
