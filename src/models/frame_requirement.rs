//! A frame requirement links an order item to the frame the workshop needs to
//! build for it. The order/production side owns these records; the engine
//! reads a requirement's dimensions and quantity and nothing else.

use crate::models::frame::Dimension;
#[cfg(feature = "with_serde")]
use serde_derive::{Serialize, Deserialize};

/// Where a frame is in the workshop.
///
/// Progresses `NotPrepared -> Preparing -> Prepared -> Mounted`, driven by
/// workshop events. The ordering of the variants follows that progression.
/// Transitions (and their guards) belong to the calling workflow: nothing in
/// this crate moves a requirement from one status to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "with_serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum FrameStatus {
    NotPrepared,
    Preparing,
    Prepared,
    Mounted,
}

impl Default for FrameStatus {
    fn default() -> Self {
        FrameStatus::NotPrepared
    }
}

record_model! {
    /// A persisted frame requirement for one order item.
    pub struct FrameRequirement {
        order_item_id: String,
        width: Dimension,
        height: Dimension,
        /// How many frames of this size the order item needs
        quantity: u64,
        #[builder(default)]
        frame_status: FrameStatus,
    }
    FrameRequirementID
    FrameRequirementBuilder
}

impl FrameRequirement {
    /// Whether the materials for this requirement are still to be pulled from
    /// stock, ie it is live and the workshop has not started on it.
    pub fn is_outstanding(&self) -> bool {
        self.is_active() && self.frame_status == FrameStatus::NotPrepared
    }
}
