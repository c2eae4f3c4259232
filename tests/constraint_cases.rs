//! Constraint membership of predeclared and named types.

#[macro_use]
mod cases;

use polynum::{Kind, TypeError};

test_case! {
    name: floint,
    input: ("Floint", Kind::Float64),
    number: { Ok(()) },
    float: { Ok(()) },
    ordered: { Ok(()) },
    signed: { Err(TypeError::Unsatisfied { .. }) },
}

test_case! {
    name: point,
    input: ("Point", Kind::Int64),
    number: { Err(TypeError::Unsatisfied { .. }) },
    signed: { Ok(()) },
    integer: { Ok(()) },
    ordered: { Ok(()) },
    unsigned: { Err(TypeError::Unsatisfied { .. }) },
    error_message: { "Point does not satisfy Number (int | int64 | float32 | ~float64)" },
}

test_case! {
    name: predeclared_int64,
    input: ("int64", Kind::Int64),
    number: { Ok(()) },
    signed: { Ok(()) },
    float: { Err(TypeError::Unsatisfied { .. }) },
}

test_case! {
    name: predeclared_int32,
    input: ("int32", Kind::Int32),
    number: { Err(TypeError::Unsatisfied { .. }) },
    integer: { Ok(()) },
    error_message: { "int32 does not satisfy Number (int | int64 | float32 | ~float64)" },
}

test_case! {
    name: named_float32,
    input: ("Celsius", Kind::Float32),
    float: { Ok(()) },
    number: { Err(TypeError::Unsatisfied { .. }) },
}

test_case! {
    name: named_string,
    input: ("Label", Kind::String),
    ordered: { Ok(()) },
    number: { Err(TypeError::Unsatisfied { .. }) },
}

test_case! {
    name: named_uint8,
    input: ("Byte", Kind::Uint8),
    unsigned: { Ok(()) },
    integer: { Ok(()) },
    signed: { Err(TypeError::Unsatisfied { .. }) },
}
