//! The reorder planner turns stock shortfalls into purchase suggestions, and
//! suggestions into per-supplier purchase-order drafts.
//!
//! The planner never places an order. It hands back drafts for the caller to
//! persist, email, or throw away. A shortfall that no catalog product matches
//! is not an error: it comes back as a suggestion with
//! [Sourcing::Unresolvable][unresolvable] so it can be surfaced as "needs
//! manual sourcing" instead of quietly disappearing.
//!
//! ```rust
//! use stretcher_core::{reorder, num};
//!
//! // a deficit of 10 plus a 20% buffer
//! assert_eq!(reorder::buffered_quantity(10, num!(0.2)).unwrap(), 12);
//! assert_eq!(reorder::buffered_quantity(5, num!(0.2)).unwrap(), 6);
//! assert_eq!(reorder::buffered_quantity(0, num!(0.2)).unwrap(), 0);
//! ```
//!
//! [unresolvable]: enum.Sourcing.html#variant.Unresolvable

use chrono::{DateTime, Utc};
use crate::{
    catalog::SupplierCatalog,
    error::{Error, Result},
    models::{
        demand::DemandLine,
        supplier_product::SupplierProductID,
    },
    stock::AvailabilityResult,
};
use getset::{CopyGetters, Getters};
use rust_decimal::prelude::*;
#[cfg(feature = "with_serde")]
use serde_derive::{Serialize, Deserialize};
use std::collections::BTreeMap;
use tracing::{Level, event};

/// Where a suggested reorder would come from.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "with_serde", serde(rename_all = "snake_case"))]
pub enum Sourcing {
    /// A catalog product supplies exactly this part
    Matched {
        product_id: SupplierProductID,
        sku: String,
        supplier: String,
        unit_price: Decimal,
    },
    /// Nothing in the catalog matches: someone needs to source this by hand
    Unresolvable,
}

/// A proposed purchase for one short part.
#[derive(Clone, Debug, PartialEq, Getters, CopyGetters)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
pub struct ReorderSuggestion {
    #[getset(get_copy = "pub")]
    line: DemandLine,
    #[getset(get_copy = "pub")]
    deficit: u64,
    /// The deficit plus the safety buffer
    #[getset(get_copy = "pub")]
    order_quantity: u64,
    #[getset(get = "pub")]
    sourcing: Sourcing,
}

impl ReorderSuggestion {
    pub fn matched_sku(&self) -> Option<&str> {
        match &self.sourcing {
            Sourcing::Matched { sku, .. } => Some(sku.as_str()),
            Sourcing::Unresolvable => None,
        }
    }

    pub fn supplier(&self) -> Option<&str> {
        match &self.sourcing {
            Sourcing::Matched { supplier, .. } => Some(supplier.as_str()),
            Sourcing::Unresolvable => None,
        }
    }

    pub fn unit_price(&self) -> Option<Decimal> {
        match &self.sourcing {
            Sourcing::Matched { unit_price, .. } => Some(*unit_price),
            Sourcing::Unresolvable => None,
        }
    }

    /// `unit_price * order_quantity`, when we have a price.
    pub fn total_price(&self) -> Option<Decimal> {
        self.unit_price().map(|price| price * Decimal::from(self.order_quantity))
    }

    pub fn needs_manual_sourcing(&self) -> bool {
        self.sourcing == Sourcing::Unresolvable
    }
}

/// `deficit + ceil(deficit * buffer_ratio)`.
pub fn buffered_quantity(deficit: u64, buffer_ratio: Decimal) -> Result<u64> {
    if buffer_ratio.is_sign_negative() && !buffer_ratio.is_zero() {
        Err(Error::InvalidBufferRatio(buffer_ratio))?;
    }
    let buffer = Decimal::from(deficit)
        .checked_mul(buffer_ratio)
        .ok_or(Error::QuantityOverflow)?
        .ceil()
        .to_u64()
        .ok_or(Error::QuantityOverflow)?;
    deficit.checked_add(buffer).ok_or(Error::QuantityOverflow)
}

/// Suggest a reorder for every result that has a deficit. Results without one
/// are skipped.
///
/// Matching is exact (kind, profile, and length), and the supplier is chosen
/// by its unit price at the buffered order quantity. Pass
/// [EngineConfig::buffer_ratio][ratio] unless you have a reason not to.
///
/// [ratio]: ../config/struct.EngineConfig.html#method.buffer_ratio
pub fn plan<C: SupplierCatalog + ?Sized>(results: &[AvailabilityResult], catalog: &C, buffer_ratio: Decimal) -> Result<Vec<ReorderSuggestion>> {
    let mut suggestions = Vec::new();
    for result in results.iter().filter(|res| res.deficit() > 0) {
        let order_quantity = buffered_quantity(result.deficit(), buffer_ratio)?;
        let sourcing = match catalog.find_for(&result.key(), order_quantity) {
            Some(product) => Sourcing::Matched {
                product_id: product.id().clone(),
                sku: product.sku().clone(),
                supplier: product.supplier().clone(),
                unit_price: product.price_for(order_quantity),
            },
            None => {
                event!(Level::WARN, part = %result.key(), deficit = result.deficit(), "no supplier product matches, needs manual sourcing");
                Sourcing::Unresolvable
            }
        };
        suggestions.push(ReorderSuggestion {
            line: result.line(),
            deficit: result.deficit(),
            order_quantity,
            sourcing,
        });
    }
    Ok(suggestions)
}

/// A not-yet-placed purchase order to one supplier.
#[derive(Clone, Debug, PartialEq, Getters)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
#[getset(get = "pub")]
pub struct PurchaseOrderDraft {
    supplier: String,
    lines: Vec<ReorderSuggestion>,
    created: DateTime<Utc>,
}

impl PurchaseOrderDraft {
    /// Sum of the line totals.
    pub fn total(&self) -> Decimal {
        self.lines.iter()
            .filter_map(|line| line.total_price())
            .fold(Decimal::zero(), |acc, price| acc + price)
    }
}

/// Purchase-order drafts plus whatever couldn't be matched to a supplier.
#[derive(Clone, Debug, Default, PartialEq, Getters)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
#[getset(get = "pub")]
pub struct ReorderPlan {
    /// One draft per supplier, ordered by supplier name
    orders: Vec<PurchaseOrderDraft>,
    manual_sourcing: Vec<ReorderSuggestion>,
}

/// Group suggestions into one draft per supplier.
pub fn draft_orders(suggestions: &[ReorderSuggestion], now: &DateTime<Utc>) -> ReorderPlan {
    let mut by_supplier: BTreeMap<String, Vec<ReorderSuggestion>> = BTreeMap::new();
    let mut manual_sourcing = Vec::new();
    for suggestion in suggestions {
        match suggestion.supplier() {
            Some(supplier) => {
                by_supplier.entry(supplier.to_string())
                    .or_insert_with(Vec::new)
                    .push(suggestion.clone());
            }
            None => manual_sourcing.push(suggestion.clone()),
        }
    }
    let orders = by_supplier.into_iter()
        .map(|(supplier, lines)| PurchaseOrderDraft {
            supplier,
            lines,
            created: now.clone(),
        })
        .collect();
    ReorderPlan {
        orders,
        manual_sourcing,
    }
}
