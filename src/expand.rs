//! The requirement expander turns bills of materials (times an order
//! quantity) into flat demand lines, summing lines for the same part.
//!
//! Summation is the only merge we do, so the result doesn't depend on the
//! order specs come in. That means callers can split a big batch up, expand the
//! pieces wherever they like, and [merge] the partial results afterwards.
//! Lines come back sorted by part (stretchers before crossbars, then by profile
//! and length) so output is deterministic too.
//!
//! [merge]: fn.merge.html

use crate::{
    config::EngineConfig,
    decompose,
    error::Error,
    lengths::LengthCatalog,
    models::{
        demand::{ComponentKey, DemandLine},
        frame::FrameBillOfMaterials,
        frame_requirement::{FrameRequirement, FrameRequirementID},
    },
};
use getset::Getters;
use std::collections::BTreeMap;
use tracing::{Level, event};

/// The un-merged demand for `quantity` frames of one bill of materials: a line
/// per stretcher axis, plus a crossbar line if the frame is braced.
pub fn lines_for(bill: &FrameBillOfMaterials, quantity: u64) -> Vec<DemandLine> {
    let frame_type = bill.frame_type();
    let mut lines = vec![
        DemandLine::new(ComponentKey::stretcher(frame_type, bill.width()), u64::from(bill.width_bars()).saturating_mul(quantity)),
        DemandLine::new(ComponentKey::stretcher(frame_type, bill.height()), u64::from(bill.height_bars()).saturating_mul(quantity)),
    ];
    if let Some(length) = bill.crossbar_length() {
        lines.push(DemandLine::new(ComponentKey::crossbar(length), u64::from(bill.crossbars()).saturating_mul(quantity)));
    }
    lines
}

/// Sum lines that share a part. Zero-quantity lines are dropped.
pub fn merge<I: IntoIterator<Item = DemandLine>>(lines: I) -> Vec<DemandLine> {
    let mut totals: BTreeMap<ComponentKey, u64> = BTreeMap::new();
    for line in lines {
        if line.quantity() == 0 {
            continue;
        }
        let total = totals.entry(line.key()).or_insert(0);
        *total = total.saturating_add(line.quantity());
    }
    totals.into_iter()
        .map(|(key, quantity)| DemandLine::new(key, quantity))
        .collect()
}

/// Expand and merge a batch of `(bill, order quantity)` pairs.
pub fn expand(specs: &[(FrameBillOfMaterials, u64)]) -> Vec<DemandLine> {
    merge(specs.iter().flat_map(|(bill, quantity)| lines_for(bill, *quantity)))
}

/// Merged demand for a batch of frame requirements, plus the requirements we
/// couldn't decompose.
///
/// A failed requirement doesn't sink the batch. Whether it should is up to the
/// caller, who can check `rejected` and decide.
#[derive(Clone, Debug, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct RequirementDemand {
    lines: Vec<DemandLine>,
    /// How many requirements contributed to `lines`
    included: usize,
    rejected: Vec<(FrameRequirementID, Error)>,
}

impl RequirementDemand {
    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }

    pub fn into_lines(self) -> Vec<DemandLine> {
        self.lines
    }
}

/// Demand for every outstanding requirement in the batch (live, and still
/// waiting for the workshop to start on it). Anything further along has had
/// its materials pulled already, and is skipped.
pub fn from_requirements(config: &EngineConfig, lengths: &LengthCatalog, requirements: &[FrameRequirement]) -> RequirementDemand {
    let mut specs = Vec::with_capacity(requirements.len());
    let mut rejected = Vec::new();
    for requirement in requirements.iter().filter(|req| req.is_outstanding()) {
        match decompose::decompose_requirement(config, lengths, requirement) {
            Ok(spec) => specs.push(spec),
            Err(err) => {
                event!(Level::WARN, requirement = %requirement.id(), error = %err, "skipping frame requirement");
                rejected.push((requirement.id().clone(), err));
            }
        }
    }
    RequirementDemand {
        lines: expand(&specs),
        included: specs.len(),
        rejected,
    }
}
