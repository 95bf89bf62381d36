use std::{
    collections::hash_map::Entry,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{Dimensions, Vehicle, VehicleMap};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("failed to read vehicles from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed vehicle data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate vehicle id {0}")]
    DuplicateId(i64),
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait VehicleRepository: Send + Sync {
    async fn find_all(&self) -> Result<VehicleMap, RepositoryError>;
    async fn find_many_by_transmission_type(
        &self,
        transmission_type: &str,
    ) -> Result<VehicleMap, RepositoryError>;
}

/// On-disk record shape, one entry per vehicle in a JSON array.
#[derive(Debug, Deserialize)]
struct VehicleRecord {
    id: i64,
    brand: String,
    model: String,
    registration: String,
    color: String,
    #[serde(rename = "year")]
    fabrication_year: i32,
    #[serde(rename = "passengers")]
    capacity: u32,
    max_speed: f64,
    fuel_type: String,
    transmission: String,
    weight: f64,
    height: f64,
    length: f64,
    width: f64,
}

impl From<VehicleRecord> for Vehicle {
    fn from(record: VehicleRecord) -> Self {
        Self {
            id: record.id,
            brand: record.brand,
            model: record.model,
            registration: record.registration,
            color: record.color,
            fabrication_year: record.fabrication_year,
            capacity: record.capacity,
            max_speed: record.max_speed,
            fuel_type: record.fuel_type,
            transmission: record.transmission,
            weight: record.weight,
            dimensions: Dimensions {
                height: record.height,
                length: record.length,
                width: record.width,
            },
        }
    }
}

/// In-memory repository over a fixed vehicle map.
#[derive(Debug, Default)]
pub struct VehicleMapRepository {
    db: VehicleMap,
}

impl VehicleMapRepository {
    pub fn new(db: VehicleMap) -> Self {
        Self { db }
    }

    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| RepositoryError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        Self::from_json_slice(&bytes)
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, RepositoryError> {
        let records: Vec<VehicleRecord> = serde_json::from_slice(bytes)?;

        let mut db = VehicleMap::with_capacity(records.len());
        for record in records {
            match db.entry(record.id) {
                Entry::Occupied(_) => return Err(RepositoryError::DuplicateId(record.id)),
                Entry::Vacant(slot) => {
                    slot.insert(record.into());
                }
            }
        }

        Ok(Self::new(db))
    }

    pub fn len(&self) -> usize {
        self.db.len()
    }

    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }
}

#[async_trait]
impl VehicleRepository for VehicleMapRepository {
    async fn find_all(&self) -> Result<VehicleMap, RepositoryError> {
        Ok(self.db.clone())
    }

    async fn find_many_by_transmission_type(
        &self,
        transmission_type: &str,
    ) -> Result<VehicleMap, RepositoryError> {
        Ok(self
            .db
            .iter()
            .filter(|(_, vehicle)| vehicle.transmission == transmission_type)
            .map(|(id, vehicle)| (*id, vehicle.clone()))
            .collect())
    }
}
