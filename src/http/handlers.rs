//! Axum HTTP handlers for the vehicle endpoints
//!
//! Projects domain vehicles into the flat JSON view and maps service errors to
//! status codes.

use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::domain::{Vehicle, VehicleMap};
use crate::errors::AppError;
use crate::http::response::ResponseBody;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// JSON-facing projection of a [`Vehicle`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleJson {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub registration: String,
    pub color: String,
    #[serde(rename = "year")]
    pub fabrication_year: i32,
    #[serde(rename = "passengers")]
    pub capacity: u32,
    pub max_speed: f64,
    pub fuel_type: String,
    pub transmission: String,
    pub weight: f64,
    pub height: f64,
    pub length: f64,
    pub width: f64,
}

impl From<Vehicle> for VehicleJson {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            brand: vehicle.brand,
            model: vehicle.model,
            registration: vehicle.registration,
            color: vehicle.color,
            fabrication_year: vehicle.fabrication_year,
            capacity: vehicle.capacity,
            max_speed: vehicle.max_speed,
            fuel_type: vehicle.fuel_type,
            transmission: vehicle.transmission,
            weight: vehicle.weight,
            height: vehicle.dimensions.height,
            length: vehicle.dimensions.length,
            width: vehicle.dimensions.width,
        }
    }
}

pub type VehicleJsonMap = HashMap<i64, VehicleJson>;

pub fn to_json_map(vehicles: VehicleMap) -> VehicleJsonMap {
    vehicles
        .into_iter()
        .map(|(id, vehicle)| (id, VehicleJson::from(vehicle)))
        .collect()
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// `GET /vehicles`
pub async fn get_all(
    State(state): State<AppState>,
) -> Result<Json<ResponseBody<VehicleJsonMap>>, AppError> {
    let vehicles = state
        .vehicle_service
        .find_all()
        .await
        .map_err(|err| AppError::internal_empty(err.to_string()))?;

    Ok(Json(ResponseBody::success("success", to_json_map(vehicles))))
}

/// `GET /vehicles/transmission/{type}`
///
/// The path segment is forwarded as-is; matching is case-sensitive.
pub async fn get_by_transmission_type(
    State(state): State<AppState>,
    Path(transmission_type): Path<String>,
) -> Result<Json<ResponseBody<VehicleJsonMap>>, AppError> {
    let vehicles = state
        .vehicle_service
        .get_by_transmission_type(&transmission_type)
        .await?;

    Ok(Json(ResponseBody::data(to_json_map(vehicles))))
}
