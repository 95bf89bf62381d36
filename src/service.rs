//! Query facade over the vehicle repository
//!
//! Translates an empty filtered lookup into [`ServiceError::VehiclesNotFound`];
//! repository failures pass through untouched.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::domain::VehicleMap;
use crate::repository::{RepositoryError, VehicleRepository};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Vehicles not found")]
    VehiclesNotFound,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

#[async_trait]
pub trait VehicleService: Send + Sync {
    async fn find_all(&self) -> Result<VehicleMap, ServiceError>;
    async fn get_by_transmission_type(
        &self,
        transmission_type: &str,
    ) -> Result<VehicleMap, ServiceError>;
}

pub struct VehicleDefault {
    repository: Arc<dyn VehicleRepository>,
}

impl VehicleDefault {
    pub fn new(repository: Arc<dyn VehicleRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl VehicleService for VehicleDefault {
    async fn find_all(&self) -> Result<VehicleMap, ServiceError> {
        Ok(self.repository.find_all().await?)
    }

    async fn get_by_transmission_type(
        &self,
        transmission_type: &str,
    ) -> Result<VehicleMap, ServiceError> {
        let vehicles = self
            .repository
            .find_many_by_transmission_type(transmission_type)
            .await?;

        if vehicles.is_empty() {
            debug!(transmission_type, "no vehicles match transmission type");
            return Err(ServiceError::VehiclesNotFound);
        }

        Ok(vehicles)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::{ServiceError, VehicleDefault, VehicleService};
    use crate::domain::{vehicle::fixtures::vehicle, VehicleMap};
    use crate::repository::{RepositoryError, VehicleRepository};

    /// Returns canned results and records the filter it was asked for.
    struct StubRepository {
        result: fn() -> Result<VehicleMap, RepositoryError>,
        requested: Mutex<Vec<String>>,
    }

    impl StubRepository {
        fn new(result: fn() -> Result<VehicleMap, RepositoryError>) -> Arc<Self> {
            Arc::new(Self {
                result,
                requested: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl VehicleRepository for StubRepository {
        async fn find_all(&self) -> Result<VehicleMap, RepositoryError> {
            (self.result)()
        }

        async fn find_many_by_transmission_type(
            &self,
            transmission_type: &str,
        ) -> Result<VehicleMap, RepositoryError> {
            self.requested
                .lock()
                .expect("lock")
                .push(transmission_type.to_string());
            (self.result)()
        }
    }

    fn two_automatics() -> Result<VehicleMap, RepositoryError> {
        Ok([
            (1, vehicle(1, "Toyota", "automatic")),
            (4, vehicle(4, "Honda", "automatic")),
        ]
        .into_iter()
        .collect())
    }

    fn empty() -> Result<VehicleMap, RepositoryError> {
        Ok(VehicleMap::new())
    }

    fn failing() -> Result<VehicleMap, RepositoryError> {
        Err(RepositoryError::Unavailable("connection reset".to_string()))
    }

    #[tokio::test]
    async fn find_all_passes_repository_result_through() {
        let service = VehicleDefault::new(StubRepository::new(two_automatics));
        let vehicles = service.find_all().await.expect("find all");
        assert_eq!(vehicles, two_automatics().expect("fixture"));
    }

    #[tokio::test]
    async fn find_all_returns_empty_map_without_error() {
        let service = VehicleDefault::new(StubRepository::new(empty));
        let vehicles = service.find_all().await.expect("find all");
        assert!(vehicles.is_empty());
    }

    #[tokio::test]
    async fn find_all_propagates_repository_error() {
        let service = VehicleDefault::new(StubRepository::new(failing));
        let err = service.find_all().await.expect_err("repository failure");
        assert!(matches!(
            err,
            ServiceError::Repository(RepositoryError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn transmission_filter_is_passed_verbatim() {
        let repo = StubRepository::new(two_automatics);
        let service = VehicleDefault::new(repo.clone());

        let vehicles = service
            .get_by_transmission_type(" Automatic ")
            .await
            .expect("matches");

        assert_eq!(vehicles.len(), 2);
        assert_eq!(
            *repo.requested.lock().expect("lock"),
            vec![" Automatic ".to_string()]
        );
    }

    #[tokio::test]
    async fn empty_filter_result_is_not_found() {
        let service = VehicleDefault::new(StubRepository::new(empty));
        let err = service
            .get_by_transmission_type("manual")
            .await
            .expect_err("no matches");
        assert!(matches!(err, ServiceError::VehiclesNotFound));
        assert_eq!(err.to_string(), "Vehicles not found");
    }

    #[tokio::test]
    async fn filter_propagates_repository_error() {
        let service = VehicleDefault::new(StubRepository::new(failing));
        let err = service
            .get_by_transmission_type("manual")
            .await
            .expect_err("repository failure");
        assert!(matches!(err, ServiceError::Repository(_)));
        assert_eq!(err.to_string(), "repository unavailable: connection reset");
    }
}
