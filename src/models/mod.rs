//! The data the engine works with.
//!
//! Some of these are derived values that only live for the length of a
//! request ([FrameBillOfMaterials], [DemandLine]), some are read-only views
//! handed in by the caller ([InventorySnapshot]), and some are records the
//! caller persists ([FrameRequirement], [SupplierProduct]). The engine owns
//! none of them long-term.
//!
//! [FrameBillOfMaterials]: frame/struct.FrameBillOfMaterials.html
//! [DemandLine]: demand/struct.DemandLine.html
//! [InventorySnapshot]: inventory/struct.InventorySnapshot.html
//! [FrameRequirement]: frame_requirement/struct.FrameRequirement.html
//! [SupplierProduct]: supplier_product/struct.SupplierProduct.html

#[macro_use]
mod lib;

pub mod frame;
pub mod demand;
pub mod inventory;
pub mod frame_requirement;
pub mod supplier_product;
