/// In-memory implementation of PatientRepository
use async_trait::async_trait;

use crate::modules::patient::domain::{Patient, PatientRepository};
use crate::shared::{
    domain::{ClinicId, PatientId},
    errors::AppResult,
    infrastructure::{InMemoryStore, StoredAggregate},
};

impl StoredAggregate for Patient {
    fn key(&self) -> &str {
        self.id().as_str()
    }
}

pub struct InMemoryPatientRepository {
    store: InMemoryStore<Patient>,
}

impl InMemoryPatientRepository {
    pub fn new() -> Self {
        Self {
            store: InMemoryStore::new("Patient"),
        }
    }
}

impl Default for InMemoryPatientRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PatientRepository for InMemoryPatientRepository {
    async fn save(&self, patient: &Patient) -> AppResult<()> {
        log::debug!("DB: inserting patient {}", patient.id());
        self.store.insert(patient).await
    }

    async fn find_by_id(&self, id: &PatientId) -> AppResult<Option<Patient>> {
        Ok(self.store.get(id.as_str()).await)
    }

    async fn find_by_clinic_id(&self, clinic_id: &ClinicId) -> AppResult<Vec<Patient>> {
        Ok(self
            .store
            .filter(|patient| patient.clinic_id() == clinic_id)
            .await)
    }

    async fn update(&self, patient: &Patient) -> AppResult<()> {
        log::debug!("DB: updating patient {}", patient.id());
        self.store.replace(patient).await
    }

    async fn delete(&self, id: &PatientId) -> AppResult<()> {
        log::debug!("DB: deleting patient {}", id);
        self.store.remove(id.as_str()).await
    }
}
