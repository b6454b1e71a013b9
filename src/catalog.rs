//! The supplier catalog is how the reorder planner finds something to buy.
//!
//! It's a trait so callers can back it with whatever they have (a table, a
//! cached API response, a fixed list in a test). A slice or vector of
//! [SupplierProduct]s works out of the box.
//!
//! [SupplierProduct]: ../models/supplier_product/struct.SupplierProduct.html

use crate::models::{
    demand::ComponentKey,
    supplier_product::SupplierProduct,
};

/// Something we can look supplier products up in.
pub trait SupplierCatalog {
    /// Find a live product that supplies exactly this part, for an order of
    /// `quantity`. Implementations must not return a product of a different
    /// length or profile.
    fn find_for(&self, key: &ComponentKey, quantity: u64) -> Option<&SupplierProduct>;

    /// Find a product for a single unit of this part.
    fn find(&self, key: &ComponentKey) -> Option<&SupplierProduct> {
        self.find_for(key, 1)
    }
}

/// Matches live products only. If several suppliers carry the part, the one
/// with the cheapest unit price at the ordered quantity (bulk tiers included)
/// wins, first listed on a tie.
impl SupplierCatalog for [SupplierProduct] {
    fn find_for(&self, key: &ComponentKey, quantity: u64) -> Option<&SupplierProduct> {
        self.iter()
            .filter(|product| product.is_active() && product.supplies(key))
            .min_by_key(|product| product.price_for(quantity))
    }
}

impl SupplierCatalog for Vec<SupplierProduct> {
    fn find_for(&self, key: &ComponentKey, quantity: u64) -> Option<&SupplierProduct> {
        self.as_slice().find_for(key, quantity)
    }
}
