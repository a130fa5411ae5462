use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::{
    models::{customer::CustomerRow, registration::InsertPayload},
    providers::{CustomerBackend, ProviderError, UnavailableSnafu},
};

/// A customer table kept in process memory.
///
/// Either operation can be switched to fail, which lets callers exercise
/// the dashboard's fallback paths without a network.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    state: Mutex<TableState>,
    fetch_failure: Option<String>,
    insert_failure: Option<String>,
}

#[derive(Debug, Default)]
struct TableState {
    rows: Vec<CustomerRow>,
    next_id: u64,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `rows`, which are expected newest first.
    pub fn with_rows(rows: Vec<CustomerRow>) -> Self {
        Self {
            state: Mutex::new(TableState {
                next_id: rows.len() as u64 + 1,
                rows,
            }),
            ..Self::default()
        }
    }

    /// A backend whose calls all fail with `message`.
    pub fn unavailable(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::new()
            .failing_fetch(message.clone())
            .failing_insert(message)
    }

    pub fn failing_fetch(mut self, message: impl Into<String>) -> Self {
        self.fetch_failure = Some(message.into());
        self
    }

    pub fn failing_insert(mut self, message: impl Into<String>) -> Self {
        self.insert_failure = Some(message.into());
        self
    }

    /// Copy of the stored rows, newest first.
    pub async fn rows(&self) -> Vec<CustomerRow> {
        self.state.lock().await.rows.clone()
    }
}

#[async_trait]
impl CustomerBackend for InMemoryBackend {
    async fn fetch_all(&self) -> Result<Vec<CustomerRow>, ProviderError> {
        if let Some(message) = &self.fetch_failure {
            return UnavailableSnafu { message }.fail();
        }
        Ok(self.state.lock().await.rows.clone())
    }

    async fn insert(&self, payload: &InsertPayload) -> Result<(), ProviderError> {
        if let Some(message) = &self.insert_failure {
            return UnavailableSnafu { message }.fail();
        }
        let mut state = self.state.lock().await;
        let id = state.next_id;
        state.next_id += 1;
        state.rows.insert(
            0,
            CustomerRow {
                id: id.to_string(),
                company_name: payload.company_name.clone(),
                province: payload.province.clone(),
                city: payload.city.clone(),
                capacity_mw: payload.capacity_mw,
                demand_type: Some(payload.demand_type.clone()),
                industry: Some(payload.industry.clone()),
                contact_name: Some(payload.contact_name.clone()),
                contact_phone: Some(payload.contact_phone.clone()),
                created_at: Some(Utc::now()),
            },
        );
        Ok(())
    }
}
