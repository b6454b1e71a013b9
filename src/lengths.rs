//! The length catalog: which bar lengths can actually be manufactured (or
//! bought) for each profile family, and for crossbars.
//!
//! The catalog owns the ladders. The engine only ever asks whether a length is
//! on one, or for the longest length on one that fits under some limit. It
//! never rounds a length it was asked about: a bar of the wrong length is a
//! frame that doesn't fit.

use crate::{
    error::{Error, Result},
    models::frame::{ComponentKind, Dimension, FrameType},
};
use std::collections::{BTreeSet, HashMap};

/// Shortest bar on the standard ladders.
pub const STANDARD_MIN_LENGTH: Dimension = 20;
/// Ladder step on the standard ladders.
pub const STANDARD_STEP: Dimension = 10;
/// Longest THIN bar on the standard ladder.
pub const STANDARD_THIN_MAX: Dimension = 90;
/// Longest THICK bar (and crossbar) on the standard ladders.
pub const STANDARD_THICK_MAX: Dimension = 160;

/// Available lengths per component kind and profile family.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LengthCatalog {
    ladders: HashMap<(ComponentKind, Option<FrameType>), BTreeSet<Dimension>>,
}

impl LengthCatalog {
    /// An empty catalog. Nothing is available until ladders are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard ladders: 20-90cm THIN bars, 20-160cm THICK bars and
    /// crossbars, all in 10cm steps.
    pub fn standard() -> Self {
        Self::new()
            .with_ladder(ComponentKind::Stretcher, Some(FrameType::Thin), STANDARD_MIN_LENGTH, STANDARD_THIN_MAX, STANDARD_STEP)
            .with_ladder(ComponentKind::Stretcher, Some(FrameType::Thick), STANDARD_MIN_LENGTH, STANDARD_THICK_MAX, STANDARD_STEP)
            .with_ladder(ComponentKind::Crossbar, None, STANDARD_MIN_LENGTH, STANDARD_THICK_MAX, STANDARD_STEP)
    }

    /// Add every length from `from` to `to` (inclusive) in `step` increments.
    /// A zero step is treated as one.
    pub fn with_ladder(self, kind: ComponentKind, frame_type: Option<FrameType>, from: Dimension, to: Dimension, step: Dimension) -> Self {
        let step = step.max(1) as usize;
        self.with_lengths(kind, frame_type, (from..=to).step_by(step))
    }

    /// Add an explicit set of lengths.
    pub fn with_lengths<I: IntoIterator<Item = Dimension>>(mut self, kind: ComponentKind, frame_type: Option<FrameType>, lengths: I) -> Self {
        self.ladders.entry((kind, frame_type))
            .or_insert_with(BTreeSet::new)
            .extend(lengths.into_iter().filter(|len| *len > 0));
        self
    }

    /// All available lengths for a kind/profile, shortest first.
    pub fn available_lengths(&self, kind: ComponentKind, frame_type: Option<FrameType>) -> Vec<Dimension> {
        self.ladders.get(&(kind, frame_type))
            .map(|ladder| ladder.iter().cloned().collect())
            .unwrap_or_else(Vec::new)
    }

    pub fn is_available(&self, kind: ComponentKind, frame_type: Option<FrameType>, length: Dimension) -> bool {
        self.ladders.get(&(kind, frame_type))
            .map(|ladder| ladder.contains(&length))
            .unwrap_or(false)
    }

    /// The longest available length that is no longer than `limit`.
    pub fn round_down(&self, kind: ComponentKind, frame_type: Option<FrameType>, limit: Dimension) -> Option<Dimension> {
        self.ladders.get(&(kind, frame_type))
            .and_then(|ladder| ladder.range(..=limit).next_back().cloned())
    }

    /// Fail with `ComponentUnavailable` unless `length` is on the ladder.
    pub fn require(&self, kind: ComponentKind, frame_type: Option<FrameType>, length: Dimension) -> Result<Dimension> {
        if self.is_available(kind, frame_type, length) {
            Ok(length)
        } else {
            Err(Error::ComponentUnavailable { kind, frame_type, length })
        }
    }
}
