//! A set of utility structs and functions used across the engine.

#[macro_use]
pub mod number;
#[cfg(test)]
pub(crate) mod time;
