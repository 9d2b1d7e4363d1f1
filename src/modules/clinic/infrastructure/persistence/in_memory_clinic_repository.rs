/// In-memory implementation of ClinicRepository
///
/// Thread-safe; see `InMemoryStore` for the atomicity guarantees.
use async_trait::async_trait;

use crate::modules::clinic::domain::{Clinic, ClinicRepository};
use crate::shared::{
    domain::ClinicId,
    errors::AppResult,
    infrastructure::{InMemoryStore, StoredAggregate},
};

impl StoredAggregate for Clinic {
    fn key(&self) -> &str {
        self.id().as_str()
    }
}

pub struct InMemoryClinicRepository {
    store: InMemoryStore<Clinic>,
}

impl InMemoryClinicRepository {
    pub fn new() -> Self {
        Self {
            store: InMemoryStore::new("Clinic"),
        }
    }
}

impl Default for InMemoryClinicRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClinicRepository for InMemoryClinicRepository {
    async fn save(&self, clinic: &Clinic) -> AppResult<()> {
        log::debug!("DB: inserting clinic {}", clinic.id());
        self.store.insert(clinic).await
    }

    async fn find_by_id(&self, id: &ClinicId) -> AppResult<Option<Clinic>> {
        Ok(self.store.get(id.as_str()).await)
    }

    async fn find_all(&self) -> AppResult<Vec<Clinic>> {
        Ok(self.store.all().await)
    }

    async fn update(&self, clinic: &Clinic) -> AppResult<()> {
        log::debug!("DB: updating clinic {}", clinic.id());
        self.store.replace(clinic).await
    }

    async fn delete(&self, id: &ClinicId) -> AppResult<()> {
        log::debug!("DB: deleting clinic {}", id);
        self.store.remove(id.as_str()).await
    }
}
