//! The read-only inventory view the engine checks demand against, and the
//! shape of the stock changes the inventory collaborator accepts.
//!
//! The engine never reserves stock. A snapshot is a point-in-time read: any
//! caller that actually consumes stock must do an atomic decrement-and-check in
//! its own storage (a conditional update or similar) instead of trusting an
//! earlier [check][check] result. [InventorySnapshot::apply] enforces the same
//! never-below-zero guard for in-memory use, but it returns a new snapshot and
//! never touches the one it was called on.
//!
//! [check]: ../../stock/fn.check.html

use crate::{
    error::{Error, Result},
    models::demand::ComponentKey,
};
use getset::CopyGetters;
#[cfg(feature = "with_serde")]
use serde_derive::{Serialize, Deserialize};
use std::collections::HashMap;
use std::iter::FromIterator;

/// Stock on hand for one part, plus the level the workshop wants to stay above.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, CopyGetters)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
#[getset(get_copy = "pub")]
pub struct StockLevel {
    stock: u64,
    min_stock: u64,
}

impl StockLevel {
    pub fn new(stock: u64, min_stock: u64) -> Self {
        Self {
            stock,
            min_stock,
        }
    }

    pub fn is_below_minimum(&self) -> bool {
        self.stock < self.min_stock
    }
}

/// A change to one part's stock, as requested of the inventory collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "with_serde", serde(rename_all = "snake_case"))]
pub enum StockAdjustment {
    /// Stock arrived (a delivered purchase order, a returned part)
    Increment { key: ComponentKey, quantity: u64 },
    /// Stock was pulled for production
    Decrement { key: ComponentKey, quantity: u64 },
}

impl StockAdjustment {
    pub fn key(&self) -> &ComponentKey {
        match self {
            StockAdjustment::Increment { key, .. } => key,
            StockAdjustment::Decrement { key, .. } => key,
        }
    }
}

/// A point-in-time view of stock levels, keyed by part.
///
/// A part that is missing from the snapshot has never been stocked, and
/// reads as zero.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
pub struct InventorySnapshot {
    #[cfg_attr(feature = "with_serde", serde(with = "level_entries"))]
    levels: HashMap<ComponentKey, StockLevel>,
}

/// Levels go over the wire as a list of `(key, level)` pairs, sorted by key.
/// Part keys are structs, and most formats only allow string map keys.
#[cfg(feature = "with_serde")]
mod level_entries {
    use crate::models::{
        demand::ComponentKey,
        inventory::StockLevel,
    };
    use serde::{Deserialize, Deserializer, Serializer};
    use std::collections::HashMap;

    pub fn serialize<S: Serializer>(levels: &HashMap<ComponentKey, StockLevel>, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut entries: Vec<(&ComponentKey, &StockLevel)> = levels.iter().collect();
        entries.sort_by_key(|(key, _)| **key);
        serializer.collect_seq(entries)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<HashMap<ComponentKey, StockLevel>, D::Error> {
        let entries: Vec<(ComponentKey, StockLevel)> = Deserialize::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}

impl InventorySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy when assembling a snapshot by hand.
    pub fn with_level(mut self, key: ComponentKey, stock: u64, min_stock: u64) -> Self {
        self.insert(key, StockLevel::new(stock, min_stock));
        self
    }

    pub fn insert(&mut self, key: ComponentKey, level: StockLevel) {
        self.levels.insert(key, level);
    }

    pub fn get(&self, key: &ComponentKey) -> Option<&StockLevel> {
        self.levels.get(key)
    }

    /// Current stock for a part, zero if we've never heard of it.
    pub fn stock_of(&self, key: &ComponentKey) -> u64 {
        self.levels.get(key).map(|level| level.stock()).unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ComponentKey, &StockLevel)> {
        self.levels.iter()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Return a new snapshot with the given adjustments applied in order.
    ///
    /// Fails (and returns nothing) if any decrement would take a part below
    /// zero. Parts first seen through an increment get a `min_stock` of zero.
    pub fn apply(&self, adjustments: &[StockAdjustment]) -> Result<Self> {
        let mut next = self.clone();
        for adjustment in adjustments {
            let level = next.levels.entry(*adjustment.key()).or_insert_with(StockLevel::default);
            match adjustment {
                StockAdjustment::Increment { quantity, .. } => {
                    level.stock = level.stock.checked_add(*quantity).ok_or(Error::QuantityOverflow)?;
                }
                StockAdjustment::Decrement { key, quantity } => {
                    if level.stock < *quantity {
                        Err(Error::InsufficientStock {
                            key: *key,
                            stock: level.stock,
                            requested: *quantity,
                        })?;
                    }
                    level.stock -= quantity;
                }
            }
        }
        Ok(next)
    }
}

impl FromIterator<(ComponentKey, StockLevel)> for InventorySnapshot {
    fn from_iter<I: IntoIterator<Item = (ComponentKey, StockLevel)>>(iter: I) -> Self {
        Self {
            levels: iter.into_iter().collect(),
        }
    }
}
