/// Declares a distinct named numeric type and the constraints it satisfies.
///
/// The new type wraps a primitive representation, delegates arithmetic and
/// [`Bridge`](crate::values::Bridge) to it, and implements
/// [`Underlying`](crate::constraints::Underlying). After the colon, list the
/// constraint traits the type should implement.
///
/// A named type is only a member of a constraint that marks its underlying
/// representation as approximate. Each listed constraint is checked against
/// [`ConstraintId::admits_underlying`](crate::types::ConstraintId::admits_underlying)
/// at compile time.
///
/// ```
/// use polynum_core::{generic::min, numeric_newtype};
///
/// numeric_newtype! {
///     /// Seconds as a float64.
///     pub struct Seconds(f64): Float, Ordered, Number;
/// }
///
/// assert_eq!(min(Seconds(1.5), Seconds(0.5)), Seconds(0.5));
/// ```
///
/// `Number` lists `int64` exactly, not approximately, so a named type over
/// `i64` cannot claim it:
///
/// ```compile_fail
/// use polynum_core::numeric_newtype;
///
/// numeric_newtype! {
///     pub struct Meters(i64): Number;
/// }
/// ```
///
/// Nor can a type claim a constraint its representation is not part of:
///
/// ```compile_fail
/// use polynum_core::numeric_newtype;
///
/// numeric_newtype! {
///     pub struct Ratio(f32): Signed;
/// }
/// ```
#[macro_export]
macro_rules! numeric_newtype {
    (@op $name:ident, $trait:ident, $method:ident) => {
        impl ::core::ops::$trait for $name {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                Self(::core::ops::$trait::$method(self.0, rhs.0))
            }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($repr:ty) $(: $($class:ident),+ $(,)?)?;
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
        $vis struct $name(pub $repr);

        impl $crate::constraints::Underlying for $name {
            type Repr = $repr;

            fn into_repr(self) -> $repr {
                self.0
            }

            fn from_repr(repr: $repr) -> Self {
                Self(repr)
            }
        }

        $crate::numeric_newtype!(@op $name, Add, add);
        $crate::numeric_newtype!(@op $name, Sub, sub);
        $crate::numeric_newtype!(@op $name, Mul, mul);
        $crate::numeric_newtype!(@op $name, Div, div);

        impl $crate::values::Bridge for $name {
            const KIND: $crate::types::Kind = <$repr as $crate::values::Bridge>::KIND;

            fn into_value(self) -> $crate::values::Value {
                $crate::values::Bridge::into_value(self.0)
            }

            fn from_value(
                value: &$crate::values::Value,
            ) -> ::core::result::Result<Self, $crate::values::ValueError> {
                <$repr as $crate::values::Bridge>::from_value(value).map(Self)
            }
        }

        impl ::core::convert::From<$name> for $crate::values::Value {
            fn from(value: $name) -> Self {
                $crate::values::Bridge::into_value(value)
            }
        }

        impl $crate::constraints::Numeric for $name {
            fn wrapping_add(self, rhs: Self) -> Self {
                Self($crate::constraints::Numeric::wrapping_add(self.0, rhs.0))
            }
        }

        $($(
            $crate::__private::static_assertions::const_assert!(
                $crate::types::ConstraintId::$class
                    .admits_underlying(<$repr as $crate::values::Bridge>::KIND)
            );
            impl $crate::constraints::$class for $name {}
        )+)?
    };
}

#[cfg(test)]
mod tests {
    use crate::constraints::{Numeric, Underlying};
    use crate::types::Kind;
    use crate::values::{Bridge, Value};

    crate::numeric_newtype! {
        /// Count of items.
        struct Count(u32): Unsigned, Integer, Ordered;
    }

    crate::numeric_newtype! {
        struct Opaque(i16);
    }

    fn double<T: Numeric>(x: T) -> T {
        x + x
    }

    #[test]
    fn test_arithmetic_delegates() {
        assert_eq!(Count(3) + Count(4), Count(7));
        assert_eq!(Count(9) - Count(4), Count(5));
        assert_eq!(Count(3) * Count(4), Count(12));
        assert_eq!(Count(9) / Count(2), Count(4));
        assert_eq!(double(Opaque(-4)), Opaque(-8));
        assert_eq!(Numeric::wrapping_add(Opaque(i16::MAX), Opaque(1)), Opaque(i16::MIN));
    }

    #[test]
    fn test_underlying_round_trip() {
        assert_eq!(Count(5).into_repr(), 5u32);
        assert_eq!(Count::from_repr(6), Count(6));
        assert_eq!(Count::default(), Count(0));
    }

    #[test]
    fn test_reflects_as_underlying_kind() {
        assert_eq!(<Count as Bridge>::KIND, Kind::Uint32);
        assert_eq!(Value::from(Count(5)), Value::from(5u32));
        assert_eq!(Value::from(5u32).get::<Count>().unwrap(), Count(5));
        assert!(Value::from(5u64).get::<Count>().is_err());
    }
}
