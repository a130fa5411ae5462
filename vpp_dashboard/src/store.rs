//! The in-memory customer collection and its derived views.
//!
//! The store is the only owner of the customer list. Each mutation re-runs
//! [`recompute`] before returning, so [`CustomerStore::view`] always reflects
//! the current contents.

use std::collections::HashSet;

use tracing::warn;
use uuid::Uuid;

use crate::{
    aggregation::recompute,
    models::{
        customer::Customer,
        demand::CategoryScheme,
        region::{ChartPoint, DashboardView, RegionStat},
        registration::InsertPayload,
    },
};

#[derive(Debug, Clone, Default)]
pub struct CustomerStore {
    customers: Vec<Customer>,
    scheme: CategoryScheme,
    view: DashboardView,
}

impl CustomerStore {
    pub fn new(scheme: CategoryScheme) -> Self {
        Self {
            customers: Vec::new(),
            scheme,
            view: DashboardView::default(),
        }
    }

    /// Replaces the whole collection.
    ///
    /// Records whose identifier was already seen earlier in `customers` are
    /// dropped, keeping the first occurrence.
    pub fn replace(&mut self, customers: Vec<Customer>) {
        let mut seen = HashSet::with_capacity(customers.len());
        let before = customers.len();
        let customers: Vec<Customer> = customers
            .into_iter()
            .filter(|c| seen.insert(c.id.clone()))
            .collect();
        if customers.len() != before {
            warn!(
                dropped = before - customers.len(),
                "dropped customers with duplicate ids"
            );
        }
        self.customers = customers;
        self.refresh_view();
    }

    /// Adds a session-only record for `payload` at the head of the list and
    /// returns it. The record gets a fresh identifier unique in this store.
    pub fn prepend_local(&mut self, payload: &InsertPayload) -> &Customer {
        let id = loop {
            let candidate = format!("local-{}", Uuid::new_v4());
            if !self.contains(&candidate) {
                break candidate;
            }
        };
        self.customers.insert(0, payload.to_customer(id));
        self.refresh_view();
        &self.customers[0]
    }

    pub fn contains(&self, id: &str) -> bool {
        self.customers.iter().any(|c| c.id == id)
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    pub fn scheme(&self) -> CategoryScheme {
        self.scheme
    }

    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    pub fn region_stats(&self) -> &[RegionStat] {
        &self.view.region_stats
    }

    pub fn chart_series(&self) -> &[ChartPoint] {
        &self.view.chart_series
    }

    fn refresh_view(&mut self) {
        self.view = recompute(&self.customers, self.scheme);
    }
}
