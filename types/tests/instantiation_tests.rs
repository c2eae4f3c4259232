use bumpalo::Bump;
use polynum_types::{ConstraintId, Kind, Ty, TypeError, TypeRegistry};
use pretty_assertions::assert_eq;

// =============================================================================
// Type approximation
// =============================================================================

#[test]
fn floint_satisfies_number() {
    let arena = Bump::new();
    let registry = TypeRegistry::new(&arena);
    let floint = registry.define("Floint", registry.float64()).unwrap();

    let a = floint;
    let b = floint;
    let inferred = registry.instantiate(ConstraintId::Number, &[a, b]).unwrap();
    assert!(core::ptr::eq(inferred, floint));
}

#[test]
fn point_does_not_satisfy_number() {
    let arena = Bump::new();
    let registry = TypeRegistry::new(&arena);
    let point = registry.define("Point", registry.int64()).unwrap();

    let err = registry
        .instantiate(ConstraintId::Number, &[point, point])
        .unwrap_err();
    assert_eq!(
        err,
        TypeError::Unsatisfied {
            ty: "Point".to_string(),
            constraint: ConstraintId::Number,
            members: "int | int64 | float32 | ~float64".to_string(),
        }
    );
    assert_eq!(
        err.to_string(),
        "Point does not satisfy Number (int | int64 | float32 | ~float64)"
    );
}

#[test]
fn point_still_satisfies_approximating_constraints() {
    let arena = Bump::new();
    let registry = TypeRegistry::new(&arena);
    let point = registry.define("Point", registry.int64()).unwrap();

    for constraint in [
        ConstraintId::Signed,
        ConstraintId::Integer,
        ConstraintId::Ordered,
    ] {
        assert!(registry.check(point, constraint).is_ok(), "{constraint}");
    }
    assert!(registry.check(point, ConstraintId::Unsigned).is_err());
    assert!(registry.check(point, ConstraintId::Float).is_err());
}

#[test]
fn predeclared_underlying_is_accepted_where_named_is_not() {
    let arena = Bump::new();
    let registry = TypeRegistry::new(&arena);
    let point = registry.define("Point", registry.int64()).unwrap();

    assert!(registry.check(registry.int64(), ConstraintId::Number).is_ok());
    assert!(registry.check(point, ConstraintId::Number).is_err());
}

// =============================================================================
// Inference and explicit instantiation
// =============================================================================

#[test]
fn inference_requires_identical_argument_types() {
    let arena = Bump::new();
    let registry = TypeRegistry::new(&arena);

    let err = registry
        .instantiate(
            ConstraintId::Number,
            &[registry.int(), registry.int64(), registry.int()],
        )
        .unwrap_err();
    assert_eq!(
        err,
        TypeError::Mismatch {
            index: 1,
            expected: "int".to_string(),
            found: "int64".to_string(),
        }
    );
}

#[test]
fn named_type_does_not_unify_with_its_underlying() {
    let arena = Bump::new();
    let registry = TypeRegistry::new(&arena);
    let floint = registry.define("Floint", registry.float64()).unwrap();

    assert!(matches!(
        registry.instantiate(ConstraintId::Number, &[floint, registry.float64()]),
        Err(TypeError::Mismatch { index: 1, .. })
    ));
}

#[test]
fn inference_without_arguments_fails() {
    let arena = Bump::new();
    let registry = TypeRegistry::new(&arena);

    assert_eq!(
        registry.instantiate(ConstraintId::Ordered, &[]),
        Err(TypeError::CannotInfer {
            constraint: ConstraintId::Ordered
        })
    );
}

#[test]
fn explicit_instantiation() {
    let arena = Bump::new();
    let registry = TypeRegistry::new(&arena);
    let string = registry.string();

    let ty = registry
        .instantiate_explicit(ConstraintId::Ordered, string, &[string, string])
        .unwrap();
    assert_eq!(ty, &Ty::Basic(Kind::String));

    // Explicit instantiation also works without arguments.
    assert!(registry
        .instantiate_explicit(ConstraintId::Float, registry.float32(), &[])
        .is_ok());

    assert!(matches!(
        registry.instantiate_explicit(ConstraintId::Ordered, string, &[registry.int()]),
        Err(TypeError::Mismatch { index: 0, .. })
    ));
    assert!(matches!(
        registry.instantiate_explicit(ConstraintId::Number, string, &[string]),
        Err(TypeError::Unsatisfied { .. })
    ));
}

#[test]
fn every_numeric_kind_has_some_constraint() {
    let numeric_constraints = [
        ConstraintId::Signed,
        ConstraintId::Unsigned,
        ConstraintId::Float,
    ];
    for kind in Kind::ALL.into_iter().filter(|kind| kind.is_numeric()) {
        let hits = numeric_constraints
            .iter()
            .filter(|c| c.has_instance(&Ty::Basic(kind)))
            .count();
        assert_eq!(hits, 1, "{kind}");
        assert!(ConstraintId::Ordered.has_instance(&Ty::Basic(kind)));
    }
}
