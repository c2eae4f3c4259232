// Helper macro to distinguish between patterns and expressions
#[macro_export]
macro_rules! assert_case {
    // Pattern matching cases - detect common pattern forms
    ($result:expr, { Ok($($pattern:tt)*) }) => {
        match $result {
            Ok($($pattern)*) => {},
            other => panic!("Expected Ok({}) but got {:#?}", stringify!($($pattern)*), other),
        }
    };

    ($result:expr, { Err($($pattern:tt)*) }) => {
        match $result {
            Err($($pattern)*) => {},
            other => panic!("Expected Err({}) but got {:#?}", stringify!($($pattern)*), other),
        }
    };

    // Default case - treat as expression for equality comparison
    ($result:expr, { $expected:expr }) => {
        match $result {
            Ok(actual) => {
                pretty_assertions::assert_eq!($expected, actual, "Expected {:#?} but got {:#?}\n\n< expected / got >", $expected, actual);
            },
            other => panic!("Expected Ok(...) but got {:?}", other),
        }
    };
}

/// Resolves a case input to a type: a predeclared type when the name is the
/// kind's own name, otherwise a named type over that kind.
pub fn resolve<'a>(
    registry: &polynum::TypeRegistry<'a>,
    (name, kind): (&'static str, polynum::Kind),
) -> &'a polynum::Ty<'a> {
    let basic = registry.basic(kind);
    if name == kind.name() {
        basic
    } else {
        registry.define(name, basic).unwrap()
    }
}

// Helper macro to generate test functions based on field names
#[macro_export]
macro_rules! handle_case {
    ([$($attrs:meta)*] error_message, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_error_message() {
            let arena = bumpalo::Bump::new();
            let registry = polynum::TypeRegistry::new(&arena);
            let ty = $crate::cases::resolve(&registry, input());
            let result = registry.instantiate(polynum::ConstraintId::Number, &[ty, ty]);

            assert!(result.is_err(), "Expected type error");
            let err_string = result.unwrap_err().to_string();
            let result: Result<&str, ()> = Ok(err_string.as_str());
            assert_case!(result, $expected);
        }
    };

    // Any other field names a constraint, e.g. `number` or `signed`
    ([$($attrs:meta)*] $constraint:ident, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn $constraint() {
            let id = polynum::ConstraintId::ALL
                .into_iter()
                .find(|id| id.name().eq_ignore_ascii_case(stringify!($constraint)))
                .expect(concat!("Unknown constraint: ", stringify!($constraint)));

            let arena = bumpalo::Bump::new();
            let registry = polynum::TypeRegistry::new(&arena);
            let ty = $crate::cases::resolve(&registry, input());
            let result = registry.check(ty, id);
            assert_case!(result, $expected);
        }
    };
}

// Helper macro to recursively parse assertion fields (now correctly capturing braces)
#[macro_export]
macro_rules! parse_assertions {
    // Base case: no more fields to parse
    (@parse [$($test_functions:tt)*]) => {
        $($test_functions)*
    };

    // Parse assertion field with potential attributes
    (@parse [$($test_functions:tt)*] $(#[$attr:meta])* $field_name:ident: $field_value:tt, $($rest:tt)*) => {
        parse_assertions! {@parse [
            $($test_functions)*
            handle_case! {[$($attr)*] $field_name, $field_value}
        ] $($rest)*}
    };
}

// Main macro - name first, input second, then any order for assertions
#[macro_export]
macro_rules! test_case {
    (
        name: $name:ident,
        input: $input:expr,
        $($assertion_fields:tt)*
    ) => {
        mod $name {
            #![allow(unused_imports, dead_code)]

            use super::*;

            // Make `$input` available to all test functions
            fn input() -> (&'static str, polynum::Kind) {
                $input
            }

            // Generate all test functions
            parse_assertions! {@parse [] $($assertion_fields)*}
        }
    };
}
