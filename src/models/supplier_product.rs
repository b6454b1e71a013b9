//! Supplier products are the entries of a supplier's catalog: what we can
//! order, from whom, and for how much.
//!
//! Profile family and length are structured fields on the product. Nothing
//! here tries to work out what a product is from its name.

use crate::models::{
    demand::ComponentKey,
    frame::{ComponentKind, Dimension, FrameType},
};
use rust_decimal::Decimal;

record_model! {
    /// A single orderable product from a supplier.
    pub struct SupplierProduct {
        sku: String,
        supplier: String,
        kind: ComponentKind,
        /// Set for stretcher bars, empty for crossbars
        #[builder(default)]
        frame_type: Option<FrameType>,
        length: Dimension,
        unit_price: Decimal,
        /// Order quantity at which `bulk_unit_price` kicks in
        #[builder(default)]
        bulk_threshold: Option<u64>,
        #[builder(default)]
        bulk_unit_price: Option<Decimal>,
    }
    SupplierProductID
    SupplierProductBuilder
}

impl SupplierProduct {
    /// The part this product supplies.
    pub fn component_key(&self) -> ComponentKey {
        ComponentKey::new(self.kind, self.frame_type, self.length)
    }

    /// Exact match only. A product one size off does not fit the frame.
    pub fn supplies(&self, key: &ComponentKey) -> bool {
        &self.component_key() == key
    }

    /// Unit price for an order of `quantity`, taking the bulk tier into
    /// account when the product has one.
    pub fn price_for(&self, quantity: u64) -> Decimal {
        match (self.bulk_threshold, self.bulk_unit_price) {
            (Some(threshold), Some(bulk_price)) if quantity >= threshold => bulk_price,
            _ => self.unit_price,
        }
    }
}
