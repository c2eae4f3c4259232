use bumpalo::Bump;
use core::cell::RefCell;
use core::fmt;
use hashbrown::{DefaultHashBuilder, HashMap};

use crate::constraint::ConstraintId;
use crate::error::TypeError;
use crate::kind::Kind;
use crate::ty::Ty;

type NameMap<'arena> = HashMap<&'arena str, &'arena Ty<'arena>, DefaultHashBuilder, &'arena Bump>;

/// Arena-backed table of predeclared and defined types.
///
/// Predeclared types are allocated once on construction; defined types are
/// allocated on [`define`](Self::define). Every lookup for the same name
/// returns the same reference.
///
/// Constraint satisfaction is checked here, at definition and
/// instantiation time, rather than by structural aliasing.
///
/// # Example
///
/// ```
/// use bumpalo::Bump;
/// use polynum_types::{ConstraintId, TypeRegistry};
///
/// let arena = Bump::new();
/// let registry = TypeRegistry::new(&arena);
///
/// let floint = registry.define("Floint", registry.float64()).unwrap();
/// let point = registry.define("Point", registry.int64()).unwrap();
///
/// assert!(registry.check(floint, ConstraintId::Number).is_ok());
/// assert!(registry.check(point, ConstraintId::Number).is_err());
/// ```
pub struct TypeRegistry<'arena> {
    arena: &'arena Bump,
    basics: &'arena [Ty<'arena>],
    named: RefCell<NameMap<'arena>>,
}

impl<'arena> fmt::Debug for TypeRegistry<'arena> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("arena", &(self.arena as *const Bump))
            .field("named", &self.named.borrow().len())
            .finish_non_exhaustive()
    }
}

impl<'arena> TypeRegistry<'arena> {
    pub fn new(arena: &'arena Bump) -> Self {
        let basics = arena.alloc_slice_fill_iter(Kind::ALL.into_iter().map(Ty::Basic));
        Self {
            arena,
            basics,
            named: RefCell::new(HashMap::new_in(arena)),
        }
    }

    /// The predeclared type of `kind`.
    pub fn basic(&self, kind: Kind) -> &'arena Ty<'arena> {
        // `Kind::ALL` is in discriminant order.
        &self.basics[kind as usize]
    }

    pub fn int(&self) -> &'arena Ty<'arena> {
        self.basic(Kind::Int)
    }

    pub fn int64(&self) -> &'arena Ty<'arena> {
        self.basic(Kind::Int64)
    }

    pub fn float32(&self) -> &'arena Ty<'arena> {
        self.basic(Kind::Float32)
    }

    pub fn float64(&self) -> &'arena Ty<'arena> {
        self.basic(Kind::Float64)
    }

    pub fn string(&self) -> &'arena Ty<'arena> {
        self.basic(Kind::String)
    }

    /// Defines a distinct named type over `underlying`.
    ///
    /// Defining a type over another named type inherits that type's
    /// underlying kind, so the result is always one level deep.
    pub fn define(
        &self,
        name: &str,
        underlying: &Ty<'_>,
    ) -> Result<&'arena Ty<'arena>, TypeError> {
        let mut named = self.named.borrow_mut();
        if Kind::from_name(name).is_some() || named.contains_key(name) {
            return Err(TypeError::DuplicateType {
                name: name.to_string(),
            });
        }

        let name = self.arena.alloc_str(name);
        let ty = self.arena.alloc(Ty::Named {
            name,
            underlying: underlying.underlying(),
        });
        named.insert(name, ty);
        Ok(ty)
    }

    /// Looks up a predeclared or defined type by name.
    pub fn lookup(&self, name: &str) -> Option<&'arena Ty<'arena>> {
        match Kind::from_name(name) {
            Some(kind) => Some(self.basic(kind)),
            None => self.named.borrow().get(name).copied(),
        }
    }

    /// Checks that `ty` satisfies `constraint`.
    pub fn check(&self, ty: &Ty<'_>, constraint: ConstraintId) -> Result<(), TypeError> {
        if constraint.has_instance(ty) {
            Ok(())
        } else {
            Err(TypeError::Unsatisfied {
                ty: ty.to_string(),
                constraint,
                members: constraint.constraint().to_string(),
            })
        }
    }

    /// Instantiates a type parameter by inference from its arguments.
    ///
    /// The parameter is bound to the type of the first argument; every other
    /// argument must have exactly that type. The bound type must then
    /// satisfy `constraint`.
    pub fn instantiate(
        &self,
        constraint: ConstraintId,
        args: &[&'arena Ty<'arena>],
    ) -> Result<&'arena Ty<'arena>, TypeError> {
        let Some((&first, rest)) = args.split_first() else {
            return Err(TypeError::CannotInfer { constraint });
        };
        Self::unify(first, rest, 1)?;
        self.check(first, constraint)?;
        Ok(first)
    }

    /// Instantiates a type parameter explicitly with `ty`.
    pub fn instantiate_explicit(
        &self,
        constraint: ConstraintId,
        ty: &'arena Ty<'arena>,
        args: &[&'arena Ty<'arena>],
    ) -> Result<&'arena Ty<'arena>, TypeError> {
        self.check(ty, constraint)?;
        Self::unify(ty, args, 0)?;
        Ok(ty)
    }

    fn unify<'a>(expected: &Ty<'a>, args: &[&Ty<'a>], offset: usize) -> Result<(), TypeError> {
        match args.iter().position(|arg| *arg != expected) {
            Some(index) => Err(TypeError::Mismatch {
                index: index + offset,
                expected: expected.to_string(),
                found: args[index].to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_types_are_interned() {
        let arena = Bump::new();
        let registry = TypeRegistry::new(&arena);

        for kind in Kind::ALL {
            assert_eq!(registry.basic(kind), &Ty::Basic(kind));
            assert!(core::ptr::eq(registry.basic(kind), registry.basic(kind)));
        }
        assert!(core::ptr::eq(registry.lookup("int64").unwrap(), registry.int64()));
    }

    #[test]
    fn test_define_and_lookup() {
        let arena = Bump::new();
        let registry = TypeRegistry::new(&arena);

        let floint = registry.define("Floint", registry.float64()).unwrap();
        assert_eq!(floint.underlying(), Kind::Float64);
        assert!(floint.is_named());
        assert!(core::ptr::eq(registry.lookup("Floint").unwrap(), floint));
        assert!(registry.lookup("Missing").is_none());
    }

    #[test]
    fn test_define_rejects_duplicates() {
        let arena = Bump::new();
        let registry = TypeRegistry::new(&arena);

        registry.define("Point", registry.int64()).unwrap();
        assert_eq!(
            registry.define("Point", registry.float64()),
            Err(TypeError::DuplicateType {
                name: "Point".to_string()
            })
        );
        assert!(matches!(
            registry.define("float64", registry.float64()),
            Err(TypeError::DuplicateType { .. })
        ));
    }

    #[test]
    fn test_define_over_named_collapses() {
        let arena = Bump::new();
        let registry = TypeRegistry::new(&arena);

        let floint = registry.define("Floint", registry.float64()).unwrap();
        let meters = registry.define("Meters", floint).unwrap();
        assert_eq!(meters.underlying(), Kind::Float64);
        assert_ne!(meters, floint);
    }
}
