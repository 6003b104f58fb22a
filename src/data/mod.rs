//! Data loading and storage
//!
//! Handles:
//! - JSON pricing request batches
//! - JSON pricing reports

pub mod request;

pub use request::*;
