/// In-memory implementation of SampleRepository
use async_trait::async_trait;

use crate::modules::sample::domain::{Sample, SampleRepository};
use crate::shared::{
    domain::{ClinicId, PatientId, SampleId},
    errors::AppResult,
    infrastructure::{InMemoryStore, StoredAggregate},
};

impl StoredAggregate for Sample {
    fn key(&self) -> &str {
        self.id().as_str()
    }
}

pub struct InMemorySampleRepository {
    store: InMemoryStore<Sample>,
}

impl InMemorySampleRepository {
    pub fn new() -> Self {
        Self {
            store: InMemoryStore::new("Sample"),
        }
    }
}

impl Default for InMemorySampleRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SampleRepository for InMemorySampleRepository {
    async fn save(&self, sample: &Sample) -> AppResult<()> {
        log::debug!("DB: inserting sample {}", sample.id());
        self.store.insert(sample).await
    }

    async fn find_by_id(&self, id: &SampleId) -> AppResult<Option<Sample>> {
        Ok(self.store.get(id.as_str()).await)
    }

    async fn find_by_patient_id(&self, patient_id: &PatientId) -> AppResult<Vec<Sample>> {
        Ok(self
            .store
            .filter(|sample| sample.patient_id() == patient_id)
            .await)
    }

    async fn find_by_clinic_id(&self, clinic_id: &ClinicId) -> AppResult<Vec<Sample>> {
        Ok(self
            .store
            .filter(|sample| sample.clinic_id() == clinic_id)
            .await)
    }

    async fn find_all(&self) -> AppResult<Vec<Sample>> {
        Ok(self.store.all().await)
    }

    async fn update(&self, sample: &Sample) -> AppResult<()> {
        log::debug!("DB: updating sample {} ({})", sample.id(), sample.status());
        self.store.replace(sample).await
    }

    async fn delete(&self, id: &SampleId) -> AppResult<()> {
        log::debug!("DB: deleting sample {}", id);
        self.store.remove(id.as_str()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::sample::domain::{CollectionDate, SampleType};
    use crate::shared::errors::ErrorKind;
    use chrono::Utc;

    fn sample(patient: &str, clinic: &str, kind: &str) -> Sample {
        Sample::new(
            PatientId::parse(patient).unwrap(),
            ClinicId::parse(clinic).unwrap(),
            SampleType::new(kind).unwrap(),
            CollectionDate::new(Utc::now()).unwrap(),
        )
    }

    fn types(samples: &[Sample]) -> Vec<&str> {
        samples.iter().map(|s| s.sample_type().value()).collect()
    }

    #[tokio::test]
    async fn test_filters_by_patient_and_clinic() {
        let repo = InMemorySampleRepository::new();
        repo.save(&sample("p1", "c1", "Blood")).await.unwrap();
        repo.save(&sample("p2", "c1", "Urine")).await.unwrap();
        repo.save(&sample("p1", "c1", "Saliva")).await.unwrap();
        repo.save(&sample("p3", "c2", "Plasma")).await.unwrap();

        let by_patient = repo
            .find_by_patient_id(&PatientId::parse("p1").unwrap())
            .await
            .unwrap();
        assert_eq!(types(&by_patient), ["Blood", "Saliva"]);

        let by_clinic = repo
            .find_by_clinic_id(&ClinicId::parse("c1").unwrap())
            .await
            .unwrap();
        assert_eq!(types(&by_clinic), ["Blood", "Urine", "Saliva"]);

        assert_eq!(repo.find_all().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_update_persists_transition() {
        let repo = InMemorySampleRepository::new();
        let mut blood = sample("p1", "c1", "Blood");
        repo.save(&blood).await.unwrap();

        blood.start_processing().unwrap();
        repo.update(&blood).await.unwrap();

        let stored = repo.find_by_id(blood.id()).await.unwrap().unwrap();
        assert_eq!(stored.status(), blood.status());
    }

    #[tokio::test]
    async fn test_duplicate_save_conflicts() {
        let repo = InMemorySampleRepository::new();
        let blood = sample("p1", "c1", "Blood");
        repo.save(&blood).await.unwrap();

        let err = repo.save(&blood).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn test_delete_unknown_is_not_found() {
        let repo = InMemorySampleRepository::new();
        let err = repo
            .delete(&SampleId::parse("missing").unwrap())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.message(), "Sample with id missing not found");
    }
}
