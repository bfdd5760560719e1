// src/services/mod.rs
pub mod analysis;
pub mod build_out;
pub mod calculations;
pub mod coerce;
pub mod expenses;
pub mod format;
pub mod market_data;
pub mod markets;
