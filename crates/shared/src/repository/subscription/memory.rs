use crate::{
    abstract_trait::subscription::repository::{
        SubscriptionCommandRepositoryTrait, SubscriptionQueryRepositoryTrait,
    },
    errors::RepositoryError,
    model::subscription::{SubscriptionModel, SubscriptionSummary},
    repository::subscription::command::duplicate_message,
};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::{
    Mutex, MutexGuard,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};
use uuid::Uuid;

/// Number of calls each persistence operation has received.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub create: usize,
    pub find_by_id: usize,
    pub update_by_user: usize,
    pub delete: usize,
    pub sum_by_filter: usize,
}

impl CallCounts {
    pub fn total(&self) -> usize {
        self.create + self.find_by_id + self.update_by_user + self.delete + self.sum_by_filter
    }
}

/// Process-local store with the same semantics as the PostgreSQL
/// repositories, including the update keyed on `user_id`.
#[derive(Debug, Default)]
pub struct InMemorySubscriptionRepository {
    rows: Mutex<Vec<SubscriptionModel>>,
    unavailable: AtomicBool,
    create_calls: AtomicUsize,
    find_calls: AtomicUsize,
    update_calls: AtomicUsize,
    delete_calls: AtomicUsize,
    sum_calls: AtomicUsize,
}

impl InMemorySubscriptionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<SubscriptionModel>) -> Self {
        Self {
            rows: Mutex::new(rows),
            ..Self::default()
        }
    }

    /// Makes every following call fail as if the store were unreachable.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> Vec<SubscriptionModel> {
        match self.rows.lock() {
            Ok(rows) => rows.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn calls(&self) -> CallCounts {
        CallCounts {
            create: self.create_calls.load(Ordering::SeqCst),
            find_by_id: self.find_calls.load(Ordering::SeqCst),
            update_by_user: self.update_calls.load(Ordering::SeqCst),
            delete: self.delete_calls.load(Ordering::SeqCst),
            sum_by_filter: self.sum_calls.load(Ordering::SeqCst),
        }
    }

    fn rows(&self) -> Result<MutexGuard<'_, Vec<SubscriptionModel>>, RepositoryError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(RepositoryError::Custom("store unavailable".into()));
        }
        self.rows
            .lock()
            .map_err(|_| RepositoryError::Custom("in-memory store poisoned".into()))
    }
}

#[async_trait]
impl SubscriptionCommandRepositoryTrait for InMemorySubscriptionRepository {
    async fn create(
        &self,
        subscription: &SubscriptionModel,
    ) -> Result<SubscriptionModel, RepositoryError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows()?;

        let duplicate = rows.iter().any(|row| {
            row.user_id == subscription.user_id
                && row.service_name == subscription.service_name
                && row.start_date == subscription.start_date
        });
        if duplicate {
            return Err(RepositoryError::AlreadyExists(duplicate_message(
                subscription,
            )));
        }

        if rows.iter().any(|row| row.id == subscription.id) {
            return Err(RepositoryError::AlreadyExists(format!(
                "subscription {} already exists",
                subscription.id
            )));
        }

        let now = Utc::now().naive_utc();
        let created = SubscriptionModel {
            created_at: Some(now),
            updated_at: Some(now),
            ..subscription.clone()
        };
        rows.push(created.clone());

        Ok(created)
    }

    async fn update_by_user(
        &self,
        subscription: &SubscriptionModel,
    ) -> Result<u64, RepositoryError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows()?;
        let now = Utc::now().naive_utc();

        let mut affected = 0;
        for row in rows.iter_mut().filter(|row| row.user_id == subscription.user_id) {
            row.service_name = subscription.service_name.clone();
            row.price = subscription.price;
            row.start_date = subscription.start_date;
            row.end_date = subscription.end_date;
            row.updated_at = Some(now);
            affected += 1;
        }

        Ok(affected)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows()?;

        let before = rows.len();
        rows.retain(|row| row.id != id);

        if rows.len() == before {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl SubscriptionQueryRepositoryTrait for InMemorySubscriptionRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<SubscriptionModel, RepositoryError> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        let rows = self.rows()?;

        rows.iter()
            .find(|row| row.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn sum_by_filter(&self, filter: &SubscriptionSummary) -> Result<i64, RepositoryError> {
        self.sum_calls.fetch_add(1, Ordering::SeqCst);
        let rows = self.rows()?;

        let total = rows
            .iter()
            .filter(|row| row.user_id == filter.user_id)
            .filter(|row| row.service_name == filter.service_name)
            .filter(|row| row.start_date <= filter.end_date)
            .filter(|row| row.end_date.is_none_or(|end| end >= filter.start_date))
            .map(|row| i64::from(row.price))
            .sum();

        Ok(total)
    }
}
