use std::collections::HashMap;

/// Physical measurements of a vehicle.
#[derive(Debug, Clone, PartialEq)]
pub struct Dimensions {
    pub height: f64,
    pub length: f64,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub registration: String,
    pub color: String,
    pub fabrication_year: i32,
    pub capacity: u32,
    pub max_speed: f64,
    pub fuel_type: String,
    pub transmission: String,
    pub weight: f64,
    pub dimensions: Dimensions,
}

/// Vehicles keyed by their id.
pub type VehicleMap = HashMap<i64, Vehicle>;
