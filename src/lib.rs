//! Welcome to the stretcher core, the engine that works out what a canvas
//! frame is made of and whether we have the wood to build it.
//!
//! Given a canvas's dimensions, the engine decides which stretcher bars and
//! crossbars the frame needs, adds that demand up across however many orders
//! you hand it, checks it against a stock snapshot, and proposes what to buy
//! to cover the shortfall. Data flows through it in one direction:
//!
//! ```text
//! decompose -> expand -> stock::check -> reorder::plan -> reorder::draft_orders
//! ```
//!
//! Every step is a plain function over explicit inputs. The engine does no
//! I/O, keeps no state, and doesn't lock anything, so it's safe to call from
//! as many threads as you like. Reading inventory, updating frame requirements,
//! and placing purchase orders all happen on the caller's side: we take
//! records and snapshots in, and hand results back for the caller to persist.
//!
//! In particular, a stock check does **not** reserve stock. See the
//! [stock] module for what that means for callers.
//!
//! ```rust
//! use stretcher_core::{
//!     config::EngineConfig,
//!     decompose::decompose,
//!     expand,
//!     lengths::LengthCatalog,
//!     models::{
//!         demand::ComponentKey,
//!         frame::FrameType,
//!         inventory::InventorySnapshot,
//!     },
//!     stock,
//! };
//!
//! let config = EngineConfig::default();
//! let lengths = LengthCatalog::standard();
//! let bill = decompose(&config, &lengths, 100, 70).unwrap();
//! let lines = expand::expand(&[(bill, 5)]);
//! let snapshot = InventorySnapshot::new()
//!     .with_level(ComponentKey::stretcher(FrameType::Thick, 100), 5, 0);
//! let check = stock::check(&lines, &snapshot);
//! assert!(!check.all_available());
//! assert_eq!(check.total_deficit(), 5 + 10);
//! ```
//!
//! [stock]: stock/index.html

#[macro_use]
mod util;
pub mod error;
pub mod config;
pub mod models;
pub mod lengths;
pub mod catalog;
pub mod decompose;
pub mod expand;
pub mod stock;
pub mod reorder;
