//! The frame decomposer turns a canvas's dimensions into the bill of
//! materials for its stretcher frame.
//!
//! The rules, in order:
//!
//! 1. The profile family comes from the longest side: above the configured
//!    thin cutoff the frame is THICK, otherwise THIN.
//! 2. Two bars per axis. Multi-bar lamination isn't supported.
//! 3. Crossbars come from the longest side as well (see
//!    [EngineConfig::crossbars_for][crossbars]). A crossbar braces the shorter
//!    span, so its length is the shorter side rounded *down* to the crossbar
//!    ladder. Rounding up would give a brace that doesn't fit inside the frame.
//! 4. Stretcher lengths must be on the ladder for the chosen profile. If they
//!    aren't we fail with `ComponentUnavailable`; we never swap in the
//!    neighboring length.
//!
//! ```rust
//! use stretcher_core::{
//!     config::EngineConfig,
//!     decompose::decompose,
//!     lengths::LengthCatalog,
//!     models::frame::FrameType,
//! };
//!
//! let bill = decompose(&EngineConfig::default(), &LengthCatalog::standard(), 150, 100).unwrap();
//! assert_eq!(bill.frame_type(), FrameType::Thick);
//! assert_eq!(bill.crossbars(), 1);
//! assert_eq!(bill.crossbar_length(), Some(100));
//! ```
//!
//! [crossbars]: ../config/struct.EngineConfig.html#method.crossbars_for

use crate::{
    config::EngineConfig,
    error::{Error, Result},
    lengths::LengthCatalog,
    models::{
        frame::{ComponentKind, Dimension, FrameBillOfMaterials},
        frame_requirement::FrameRequirement,
    },
};
use tracing::{Level, event};

/// Bars per axis on every frame we build.
pub const BARS_PER_AXIS: u32 = 2;

/// Work out the bill of materials for a `width` x `height` canvas.
pub fn decompose(config: &EngineConfig, lengths: &LengthCatalog, width: Dimension, height: Dimension) -> Result<FrameBillOfMaterials> {
    if width == 0 || height == 0 {
        Err(Error::InvalidDimensions { width, height })?;
    }
    let longest = width.max(height);
    let shortest = width.min(height);
    let frame_type = config.frame_type_for(longest);

    lengths.require(ComponentKind::Stretcher, Some(frame_type), width)?;
    lengths.require(ComponentKind::Stretcher, Some(frame_type), height)?;

    let crossbars = config.crossbars_for(longest);
    let crossbar_length = if crossbars > 0 {
        let length = lengths.round_down(ComponentKind::Crossbar, None, shortest)
            .ok_or(Error::ComponentUnavailable {
                kind: ComponentKind::Crossbar,
                frame_type: None,
                length: shortest,
            })?;
        Some(length)
    } else {
        None
    };

    event!(Level::DEBUG, width, height, %frame_type, crossbars, ?crossbar_length, "decomposed frame");
    Ok(FrameBillOfMaterials::new(frame_type, width, height, BARS_PER_AXIS, BARS_PER_AXIS, crossbars, crossbar_length))
}

/// Decompose a persisted frame requirement, returning its bill of materials
/// along with how many frames the requirement asks for.
pub fn decompose_requirement(config: &EngineConfig, lengths: &LengthCatalog, requirement: &FrameRequirement) -> Result<(FrameBillOfMaterials, u64)> {
    let bill = decompose(config, lengths, *requirement.width(), *requirement.height())?;
    Ok((bill, *requirement.quantity()))
}
