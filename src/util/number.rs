//! A set of utilities for working with prices and ratios.

/// Create a decimal number.
///
/// This is mostly a wrapper that makes it easy for callers of the engine to
/// write unit prices and buffer ratios without importing the decimal macros
/// themselves.
#[macro_export]
macro_rules! num {
    ($val:expr) => {
        rust_decimal_macros::dec!($val)
    }
}
