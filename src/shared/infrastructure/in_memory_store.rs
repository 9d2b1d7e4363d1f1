//! Insertion-ordered, thread-safe in-memory storage backing the repository adapters
//!
//! Every method takes the lock once, so each call is atomic on its own.
//! Sequences of calls (check, then act) are not serialized across callers.
use tokio::sync::RwLock;

use crate::shared::errors::{AppError, AppResult};

/// Aggregate that can be kept in an [`InMemoryStore`]
pub trait StoredAggregate: Clone + Send + Sync {
    fn key(&self) -> &str;
}

pub struct InMemoryStore<T> {
    label: &'static str,
    items: RwLock<Vec<T>>,
}

impl<T: StoredAggregate> InMemoryStore<T> {
    /// `label` names the aggregate in error messages ("Clinic", "Patient", ...)
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            items: RwLock::new(Vec::new()),
        }
    }

    pub async fn insert(&self, item: &T) -> AppResult<()> {
        let mut items = self.items.write().await;
        if items.iter().any(|existing| existing.key() == item.key()) {
            return Err(AppError::Conflict(format!(
                "{} with id {} already exists",
                self.label,
                item.key()
            )));
        }
        items.push(item.clone());
        Ok(())
    }

    pub async fn get(&self, key: &str) -> Option<T> {
        let items = self.items.read().await;
        items.iter().find(|item| item.key() == key).cloned()
    }

    pub async fn all(&self) -> Vec<T> {
        self.items.read().await.clone()
    }

    pub async fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool + Send,
    {
        let items = self.items.read().await;
        items.iter().filter(|item| predicate(item)).cloned().collect()
    }

    /// Replace in place, keeping the original insertion position
    pub async fn replace(&self, item: &T) -> AppResult<()> {
        let mut items = self.items.write().await;
        match items.iter_mut().find(|existing| existing.key() == item.key()) {
            Some(slot) => {
                *slot = item.clone();
                Ok(())
            }
            None => Err(self.not_found(item.key())),
        }
    }

    pub async fn remove(&self, key: &str) -> AppResult<()> {
        let mut items = self.items.write().await;
        match items.iter().position(|item| item.key() == key) {
            Some(index) => {
                items.remove(index);
                Ok(())
            }
            None => Err(self.not_found(key)),
        }
    }

    fn not_found(&self, key: &str) -> AppError {
        AppError::NotFound(format!("{} with id {} not found", self.label, key))
    }
}
