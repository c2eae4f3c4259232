use core::fmt;

use crate::kind::Kind;

/// A type descriptor.
///
/// Predeclared types are identified by their kind alone. A distinct named
/// type carries its own name and the kind of its underlying representation;
/// it is never equal to its underlying type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Ty<'a> {
    /// A predeclared type such as `int64` or `string`.
    Basic(Kind),

    /// A defined type such as `type Floint float64`.
    Named { name: &'a str, underlying: Kind },
}

impl<'a> Ty<'a> {
    /// The kind of the underlying representation.
    pub fn underlying(&self) -> Kind {
        match self {
            Ty::Basic(kind) => *kind,
            Ty::Named { underlying, .. } => *underlying,
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            Ty::Basic(kind) => kind.name(),
            Ty::Named { name, .. } => name,
        }
    }

    pub fn is_named(&self) -> bool {
        matches!(self, Ty::Named { .. })
    }
}

impl fmt::Display for Ty<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
