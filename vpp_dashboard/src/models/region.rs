//! Aggregated per-city views consumed by the table and chart widgets.

use serde::{Deserialize, Serialize};

/// One row of the per-city statistics table.
///
/// `total_mw` always equals `pv_mw + storage_mw + ev_mw + load_mw + other_mw`
/// (with an absent `load_mw` counting as zero).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionStat {
    pub city: String,
    pub site_count: usize,
    pub pv_mw: f64,
    pub storage_mw: f64,
    pub ev_mw: f64,
    /// Present only when the deployment tracks a load/HVAC category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_mw: Option<f64>,
    pub other_mw: f64,
    pub total_mw: f64,
}

/// One stacked bar of the per-city chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// City name, used as the category axis label.
    pub name: String,
    pub pv: f64,
    pub storage: f64,
    pub ev: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load: Option<f64>,
    pub other: f64,
}

impl ChartPoint {
    /// Height of the stacked bar: the sum of every category segment.
    pub fn stacked_total(&self) -> f64 {
        self.pv + self.storage + self.ev + self.load.unwrap_or(0.0) + self.other
    }
}

/// Both derived views, recomputed together on every store change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub region_stats: Vec<RegionStat>,
    pub chart_series: Vec<ChartPoint>,
}

impl DashboardView {
    pub fn is_empty(&self) -> bool {
        self.region_stats.is_empty() && self.chart_series.is_empty()
    }
}
