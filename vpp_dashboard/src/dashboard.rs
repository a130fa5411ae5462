//! Load and registration flows with graceful degradation.
//!
//! [`Dashboard`] owns the backend handle and the [`CustomerStore`]. Backend
//! results are split explicitly into their recovery paths:
//!
//! | call       | `Ok`                              | `Err`                                  |
//! |------------|-----------------------------------|----------------------------------------|
//! | fetch      | store replaced (or merged)        | store replaced with demo customers     |
//! | insert     | store reloaded from the backend   | record prepended locally, user notified |
//!
//! No failure escapes as an error. All mutation goes through `&mut self`, so
//! overlapping registrations cannot happen.

use tracing::{info, warn};

use crate::{
    config::{DashboardSettings, FetchPolicy},
    demo::demo_customers,
    models::{
        customer::Customer,
        region::{ChartPoint, RegionStat},
        registration::{InsertPayload, RegistrationForm},
    },
    providers::CustomerBackend,
    store::CustomerStore,
};

/// One-time notice shown when a registration was kept in this session only.
pub const LOCAL_ONLY_NOTICE: &str = "注意：由于数据库连接未配置或失败，数据仅在当前会话保存。";

/// Where the store's current contents came from after a refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Backend rows only.
    Remote { rows: usize },
    /// Backend rows followed by the demo customers.
    Merged { rows: usize, demo: usize },
    /// The backend answered with no rows; demo customers shown.
    DemoEmpty,
    /// The backend call failed; demo customers shown.
    DemoAfterError { reason: String },
}

impl LoadOutcome {
    pub fn is_demo(&self) -> bool {
        matches!(self, LoadOutcome::DemoEmpty | LoadOutcome::DemoAfterError { .. })
    }
}

/// Result of a registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// The backend stored the row and the store was reloaded.
    Persisted { reload: LoadOutcome },
    /// The backend rejected the write; the record lives in this session only.
    LocalOnly {
        customer_id: String,
        reason: String,
        notice: &'static str,
    },
}

pub struct Dashboard<B> {
    backend: B,
    store: CustomerStore,
    fetch_policy: FetchPolicy,
}

impl<B: CustomerBackend> Dashboard<B> {
    /// Creates a dashboard with an empty store. Call [`Dashboard::refresh`] to load.
    pub fn new(backend: B, settings: DashboardSettings) -> Self {
        Self {
            backend,
            store: CustomerStore::new(settings.category_scheme),
            fetch_policy: settings.fetch_policy,
        }
    }

    /// Reloads the store from the backend, falling back to demo data.
    pub async fn refresh(&mut self) -> LoadOutcome {
        match self.backend.fetch_all().await {
            Ok(rows) if rows.is_empty() => {
                info!("backend returned no customers, showing demo data");
                self.store.replace(demo_customers());
                LoadOutcome::DemoEmpty
            }
            Ok(rows) => {
                let fetched: Vec<Customer> = rows.into_iter().map(Customer::from).collect();
                let rows = fetched.len();
                match self.fetch_policy {
                    FetchPolicy::Replace => {
                        self.store.replace(fetched);
                        LoadOutcome::Remote { rows }
                    }
                    FetchPolicy::MergeWithDemo => {
                        let demo = demo_customers();
                        let demo_len = demo.len();
                        let mut merged = fetched;
                        merged.extend(demo);
                        self.store.replace(merged);
                        LoadOutcome::Merged {
                            rows,
                            demo: demo_len,
                        }
                    }
                }
            }
            Err(e) => {
                warn!(error = %e, "customer fetch failed, falling back to demo data");
                self.store.replace(demo_customers());
                LoadOutcome::DemoAfterError {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Registers a new resource.
    ///
    /// On a successful insert the store is reloaded. On failure the record is
    /// prepended locally so the derived views include it right away.
    pub async fn register(&mut self, form: &RegistrationForm) -> RegistrationOutcome {
        let payload = InsertPayload::from(form);
        match self.backend.insert(&payload).await {
            Ok(()) => {
                info!(company = %payload.company_name, city = %payload.city, "registration persisted");
                RegistrationOutcome::Persisted {
                    reload: self.refresh().await,
                }
            }
            Err(e) => {
                warn!(error = %e, "insert failed, keeping registration in this session only");
                let customer_id = self.store.prepend_local(&payload).id.clone();
                RegistrationOutcome::LocalOnly {
                    customer_id,
                    reason: e.to_string(),
                    notice: LOCAL_ONLY_NOTICE,
                }
            }
        }
    }

    pub fn store(&self) -> &CustomerStore {
        &self.store
    }

    pub fn customers(&self) -> &[Customer] {
        self.store.customers()
    }

    pub fn region_stats(&self) -> &[RegionStat] {
        self.store.region_stats()
    }

    pub fn chart_series(&self) -> &[ChartPoint] {
        self.store.chart_series()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
