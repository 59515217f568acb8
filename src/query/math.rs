//! Math functions.
//!
//! Variadic functions such as [`add`] take any iterable. A single operand is
//! emitted on its own; every other count is emitted as an array.

use crate::ast::varargs::collect_varargs;
use crate::ast::{Expr, call};

macro_rules! unary {
    ($($name:ident => $fn_name:literal;)*) => {
        $(
            #[doc = concat!("`", $fn_name, "` of a number.")]
            pub fn $name(value: impl Into<Expr>) -> Expr {
                call($fn_name, value).build()
            }
        )*
    };
}

macro_rules! variadic {
    ($($name:ident => $fn_name:literal;)*) => {
        $(
            #[doc = concat!("`", $fn_name, "` over one or more numbers.")]
            pub fn $name<I>(values: I) -> Expr
            where
                I: IntoIterator,
                I::Item: Into<Expr>,
            {
                call($fn_name, collect_varargs(values)).build()
            }
        )*
    };
}

unary! {
    abs => "abs";
    acos => "acos";
    asin => "asin";
    atan => "atan";
    bit_not => "bitnot";
    ceil => "ceil";
    cos => "cos";
    cosh => "cosh";
    degrees => "degrees";
    exp => "exp";
    floor => "floor";
    ln => "ln";
    log => "log";
    radians => "radians";
    sign => "sign";
    sin => "sin";
    sinh => "sinh";
    sqrt => "sqrt";
    tan => "tan";
    tanh => "tanh";
}

variadic! {
    add => "add";
    bit_and => "bitand";
    bit_or => "bitor";
    bit_xor => "bitxor";
    divide => "divide";
    max => "max";
    min => "min";
    modulo => "modulo";
    multiply => "multiply";
    subtract => "subtract";
}

/// Hypotenuse of a right triangle with both legs equal to `a`.
pub fn hypot(a: impl Into<Expr>) -> Expr {
    call("hypot", a).build()
}

pub fn hypot_with(a: impl Into<Expr>, b: impl Into<Expr>) -> Expr {
    call("hypot", a).field("b", b).build()
}

/// Square of `num`.
pub fn pow(num: impl Into<Expr>) -> Expr {
    call("pow", num).build()
}

pub fn pow_with(num: impl Into<Expr>, exp: impl Into<Expr>) -> Expr {
    call("pow", num).field("exp", exp).build()
}

/// Rounds to two decimal places.
pub fn round(num: impl Into<Expr>) -> Expr {
    call("round", num).build()
}

pub fn round_to(num: impl Into<Expr>, precision: impl Into<Expr>) -> Expr {
    call("round", num).field("precision", precision).build()
}

/// Truncates to two decimal places.
pub fn trunc(num: impl Into<Expr>) -> Expr {
    call("trunc", num).build()
}

pub fn trunc_to(num: impl Into<Expr>, precision: impl Into<Expr>) -> Expr {
    call("trunc", num).field("precision", precision).build()
}
