//! Vehicle domain entities
//!
//! Entities are owned by the repository; everything above it only reads them.

pub mod vehicle;

pub use vehicle::{Dimensions, Vehicle, VehicleMap};
