//! The error module holds the single error type returned by every fallible
//! operation in the engine. Nothing here panics across the library boundary:
//! callers get a typed value and decide what to do with it.

use crate::models::{
    demand::ComponentKey,
    frame::{ComponentKind, Dimension, FrameType},
};
use rust_decimal::Decimal;
use thiserror::Error;

/// Our main error enum.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A frame component's computed length is not in the length catalog
    #[error("{kind} of length {length}cm is not manufacturable (frame type: {frame_type:?})")]
    ComponentUnavailable {
        kind: ComponentKind,
        frame_type: Option<FrameType>,
        length: Dimension,
    },
    /// A bill of materials breaks one of the frame invariants
    #[error("invalid bill of materials: {0}")]
    InvalidBill(&'static str),
    /// Applying a stock decrement would push stock below zero
    #[error("insufficient stock for {key}: have {stock}, requested {requested}")]
    InsufficientStock {
        key: ComponentKey,
        stock: u64,
        requested: u64,
    },
    /// The reorder buffer ratio is negative
    #[error("invalid buffer ratio {0}")]
    InvalidBufferRatio(Decimal),
    /// The engine configuration failed validation
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// A width or height was zero
    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions {
        width: Dimension,
        height: Dimension,
    },
    /// A buffered order quantity does not fit in a count
    #[error("order quantity overflow")]
    QuantityOverflow,
}

pub type Result<T> = std::result::Result<T, Error>;
