//! The stock availability checker compares demand against an inventory
//! snapshot.
//!
//! Checks are pure: no I/O, nothing mutated, and the same lines against the
//! same snapshot give the same answer every time, so re-running a check with a
//! refreshed snapshot is always safe.
//!
//! Note that a check is a point-in-time read and **does not reserve stock**.
//! Other orders may be checked against the same stock at the same moment. A
//! caller that actually consumes stock must decrement-and-check atomically in
//! its own storage (see [consumption] for the requests to send) rather than
//! trusting an earlier `available: true`.
//!
//! [consumption]: fn.consumption.html

use crate::{
    expand,
    models::{
        demand::{ComponentKey, DemandLine},
        inventory::{InventorySnapshot, StockAdjustment, StockLevel},
    },
};
use getset::CopyGetters;
#[cfg(feature = "with_serde")]
use serde_derive::{Serialize, Deserialize};
use tracing::{Level, event};

/// How one demand line stacks up against stock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, CopyGetters)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
#[getset(get_copy = "pub")]
pub struct AvailabilityResult {
    line: DemandLine,
    available: bool,
    current_stock: u64,
    required: u64,
    /// `max(0, required - current_stock)`
    deficit: u64,
}

impl AvailabilityResult {
    pub fn new(line: DemandLine, current_stock: u64) -> Self {
        let required = line.quantity();
        let deficit = required.saturating_sub(current_stock);
        Self {
            line,
            available: deficit == 0,
            current_stock,
            required,
            deficit,
        }
    }

    pub fn key(&self) -> ComponentKey {
        self.line.key()
    }
}

/// The result of checking a batch of demand.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
pub struct StockCheck {
    results: Vec<AvailabilityResult>,
}

impl StockCheck {
    pub fn results(&self) -> &[AvailabilityResult] {
        &self.results
    }

    pub fn into_results(self) -> Vec<AvailabilityResult> {
        self.results
    }

    /// True when every line can be covered from stock.
    pub fn all_available(&self) -> bool {
        self.results.iter().all(|res| res.available())
    }

    pub fn total_deficit(&self) -> u64 {
        self.results.iter().fold(0u64, |acc, res| acc.saturating_add(res.deficit()))
    }

    /// Only the lines we're short on.
    pub fn shortfalls(&self) -> impl Iterator<Item = &AvailabilityResult> {
        self.results.iter().filter(|res| res.deficit() > 0)
    }
}

/// Check demand against a snapshot.
///
/// You get one result per part, not per input line. Lines for the same part
/// are merged before checking, so the same stock is never counted twice for
/// one part. Lines asking for zero of something demand nothing and get no
/// result. Parts missing from the snapshot have never been stocked and count as
/// zero.
pub fn check(lines: &[DemandLine], snapshot: &InventorySnapshot) -> StockCheck {
    let results: Vec<AvailabilityResult> = expand::merge(lines.iter().cloned())
        .into_iter()
        .map(|line| AvailabilityResult::new(line, snapshot.stock_of(&line.key())))
        .collect();
    let check = StockCheck { results };
    event!(Level::DEBUG, lines = check.results.len(), all_available = check.all_available(), total_deficit = check.total_deficit(), "checked stock");
    check
}

/// Snapshot entries that have fallen below their minimum stock level, sorted
/// by part.
pub fn low_stock(snapshot: &InventorySnapshot) -> Vec<(ComponentKey, StockLevel)> {
    let mut low: Vec<(ComponentKey, StockLevel)> = snapshot.iter()
        .filter(|(_, level)| level.is_below_minimum())
        .map(|(key, level)| (*key, *level))
        .collect();
    low.sort_by_key(|(key, _)| *key);
    low
}

/// The decrement requests that pulling these lines from stock amounts to. The
/// inventory collaborator is expected to apply them atomically, refusing any
/// that would go below zero.
pub fn consumption(lines: &[DemandLine]) -> Vec<StockAdjustment> {
    expand::merge(lines.iter().cloned())
        .into_iter()
        .map(|line| StockAdjustment::Decrement { key: line.key(), quantity: line.quantity() })
        .collect()
}
