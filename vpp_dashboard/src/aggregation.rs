//! City-level aggregation of customer records.
//!
//! [`recompute`] turns the full customer list into the two derived views the
//! dashboard shows: the per-city statistics table and the per-city stacked
//! chart series. It is a pure function of its input and is re-run from
//! scratch on every store change; there is no delta path.
//!
//! Grouping uses the raw `city` string as the key. Two spellings that differ
//! only in whitespace or case are separate groups.

use indexmap::IndexMap;

use crate::models::{
    customer::{Customer, coerce_capacity},
    demand::{CategoryScheme, DemandCategory, classify},
    region::{ChartPoint, DashboardView, RegionStat},
};

/// Running totals for one city.
#[derive(Debug, Default, Clone, Copy)]
struct CityTotals {
    site_count: usize,
    pv: f64,
    storage: f64,
    ev: f64,
    load: f64,
    other: f64,
}

impl CityTotals {
    fn add(&mut self, category: DemandCategory, capacity: f64) {
        self.site_count += 1;
        let bucket = match category {
            DemandCategory::Photovoltaic => &mut self.pv,
            DemandCategory::Storage => &mut self.storage,
            DemandCategory::EvCharging => &mut self.ev,
            DemandCategory::Load => &mut self.load,
            DemandCategory::Other => &mut self.other,
        };
        *bucket += capacity;
    }

    // Fixed summation order keeps total and chart height bit-identical.
    fn total(&self) -> f64 {
        self.pv + self.storage + self.ev + self.load + self.other
    }
}

/// Groups customers by city in first-appearance order.
fn group_by_city(customers: &[Customer], scheme: CategoryScheme) -> IndexMap<&str, CityTotals> {
    let mut cities: IndexMap<&str, CityTotals> = IndexMap::new();
    for customer in customers {
        let capacity = coerce_capacity(customer.capacity_mw);
        let category = classify(&customer.demand_type, scheme);
        cities
            .entry(customer.city.as_str())
            .or_default()
            .add(category, capacity);
    }
    cities
}

fn optional_load(scheme: CategoryScheme, load: f64) -> Option<f64> {
    scheme.tracks_load().then_some(load)
}

/// Per-city statistics, sorted by descending total capacity.
///
/// Ties keep first-appearance order (the sort is stable).
pub fn region_stats(customers: &[Customer], scheme: CategoryScheme) -> Vec<RegionStat> {
    let mut stats: Vec<RegionStat> = group_by_city(customers, scheme)
        .into_iter()
        .map(|(city, t)| RegionStat {
            city: city.to_string(),
            site_count: t.site_count,
            pv_mw: t.pv,
            storage_mw: t.storage,
            ev_mw: t.ev,
            load_mw: optional_load(scheme, t.load),
            other_mw: t.other,
            total_mw: t.total(),
        })
        .collect();
    stats.sort_by(|a, b| b.total_mw.total_cmp(&a.total_mw));
    stats
}

/// Per-city chart points, sorted by descending stacked height.
///
/// The sort key is recomputed from the point's own segments rather than
/// borrowed from [`region_stats`], so each view can be derived on its own.
pub fn chart_series(customers: &[Customer], scheme: CategoryScheme) -> Vec<ChartPoint> {
    let mut series: Vec<ChartPoint> = group_by_city(customers, scheme)
        .into_iter()
        .map(|(city, t)| ChartPoint {
            name: city.to_string(),
            pv: t.pv,
            storage: t.storage,
            ev: t.ev,
            load: optional_load(scheme, t.load),
            other: t.other,
        })
        .collect();
    series.sort_by(|a, b| b.stacked_total().total_cmp(&a.stacked_total()));
    series
}

/// Recomputes both derived views from the full customer list.
pub fn recompute(customers: &[Customer], scheme: CategoryScheme) -> DashboardView {
    let view = DashboardView {
        region_stats: region_stats(customers, scheme),
        chart_series: chart_series(customers, scheme),
    };
    tracing::debug!(
        customers = customers.len(),
        cities = view.region_stats.len(),
        "recomputed dashboard view"
    );
    view
}
