//! Frame types, component kinds, and the bill of materials that the
//! [decomposer][decompose] derives from a canvas's dimensions.
//!
//! [decompose]: ../../decompose/index.html

use crate::error::{Error, Result};
use getset::CopyGetters;
#[cfg(feature = "with_serde")]
use serde_derive::{Serialize, Deserialize};
use std::fmt;

/// A length in whole centimeters. All frame math works in whole centimeters.
pub type Dimension = u32;

/// The two stretcher-bar profile families. Each has its own length ladder and
/// price tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "with_serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum FrameType {
    Thin,
    Thick,
}

impl fmt::Display for FrameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameType::Thin => write!(f, "THIN"),
            FrameType::Thick => write!(f, "THICK"),
        }
    }
}

/// What sort of physical part a demand line or stock entry refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "with_serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ComponentKind {
    /// A bar forming one edge of the frame
    Stretcher,
    /// An internal brace across the shorter span
    Crossbar,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentKind::Stretcher => write!(f, "stretcher"),
            ComponentKind::Crossbar => write!(f, "crossbar"),
        }
    }
}

/// A rectangular stretcher needs at least this many bars along each axis.
pub const MIN_BARS_PER_AXIS: u32 = 2;

/// The physical parts needed to build one frame for a `width` x `height`
/// canvas.
///
/// Bills come from the decomposer, from [try_new], or from deserializing,
/// and the last two check the same invariants the decomposer guarantees:
/// non-zero sides, at least two bars per axis, and a crossbar length
/// (present iff `crossbars > 0`) no longer than the shorter side.
///
/// [try_new]: #method.try_new
#[derive(Clone, Debug, PartialEq, Eq, CopyGetters)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "with_serde", serde(try_from = "UncheckedBill"))]
#[getset(get_copy = "pub")]
pub struct FrameBillOfMaterials {
    frame_type: FrameType,
    width: Dimension,
    height: Dimension,
    width_bars: u32,
    height_bars: u32,
    crossbars: u32,
    crossbar_length: Option<Dimension>,
}

impl FrameBillOfMaterials {
    pub(crate) fn new(frame_type: FrameType, width: Dimension, height: Dimension, width_bars: u32, height_bars: u32, crossbars: u32, crossbar_length: Option<Dimension>) -> Self {
        Self {
            frame_type,
            width,
            height,
            width_bars,
            height_bars,
            crossbars,
            crossbar_length,
        }
    }

    /// Build a bill by hand (or from storage), checking it the way the
    /// decomposer would have built it. The frame type is taken as given.
    pub fn try_new(frame_type: FrameType, width: Dimension, height: Dimension, width_bars: u32, height_bars: u32, crossbars: u32, crossbar_length: Option<Dimension>) -> Result<Self> {
        if width == 0 || height == 0 {
            Err(Error::InvalidDimensions { width, height })?;
        }
        if width_bars < MIN_BARS_PER_AXIS || height_bars < MIN_BARS_PER_AXIS {
            Err(Error::InvalidBill("a frame needs at least two bars per axis"))?;
        }
        match (crossbars, crossbar_length) {
            (0, Some(_)) => Err(Error::InvalidBill("crossbar length given for an unbraced frame"))?,
            (0, None) => {}
            (_, None) => Err(Error::InvalidBill("braced frame is missing its crossbar length"))?,
            (_, Some(length)) => {
                if length == 0 || length > width.min(height) {
                    Err(Error::InvalidBill("crossbar does not fit across the shorter side"))?;
                }
            }
        }
        Ok(Self::new(frame_type, width, height, width_bars, height_bars, crossbars, crossbar_length))
    }

    /// The longer of the two sides. Frame type and bracing both key off this.
    pub fn longest_side(&self) -> Dimension {
        self.width.max(self.height)
    }

    /// The shorter of the two sides (the span a crossbar braces).
    pub fn shortest_side(&self) -> Dimension {
        self.width.min(self.height)
    }

    /// Whether this frame needs any internal bracing.
    pub fn is_braced(&self) -> bool {
        self.crossbars > 0
    }
}

/// The wire shape of a bill, before it has been checked.
#[cfg(feature = "with_serde")]
#[derive(Deserialize)]
struct UncheckedBill {
    frame_type: FrameType,
    width: Dimension,
    height: Dimension,
    width_bars: u32,
    height_bars: u32,
    crossbars: u32,
    crossbar_length: Option<Dimension>,
}

#[cfg(feature = "with_serde")]
impl std::convert::TryFrom<UncheckedBill> for FrameBillOfMaterials {
    type Error = Error;

    fn try_from(bill: UncheckedBill) -> Result<Self> {
        Self::try_new(bill.frame_type, bill.width, bill.height, bill.width_bars, bill.height_bars, bill.crossbars, bill.crossbar_length)
    }
}
