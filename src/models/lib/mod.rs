#[macro_use]
pub mod record_model;
