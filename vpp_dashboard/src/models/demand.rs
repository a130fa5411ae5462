//! Demand-type categories and the fixed-priority classifier.
//!
//! Customers describe their resource with a free-text demand-type label
//! (`"光伏"`, `"储能"`, `"充电桩"`, `"其他-需求响应"`, ...). Aggregation buckets
//! every record into exactly one [`DemandCategory`] by looking for known
//! tokens in that label, in a fixed order, first match wins.

use serde::{Deserialize, Serialize};

/// Token marking photovoltaic (solar) resources.
pub const PV_TOKEN: &str = "光伏";
/// Token marking energy-storage resources.
pub const STORAGE_TOKEN: &str = "储能";
/// Token marking EV-charging resources. Matches `"充电桩"` as well.
pub const EV_TOKEN: &str = "充电";
/// Tokens marking air-conditioning / flexible load resources.
pub const LOAD_TOKENS: [&str; 2] = ["空调", "负荷"];

/// The "other" selection offered by the registration form.
pub const OTHER_LABEL: &str = "其他";

/// Demand-type labels offered by the registration form, in display order.
pub const DEMAND_TYPES: [&str; 4] = ["光伏", "储能", "充电桩", OTHER_LABEL];

/// The bucket a record's capacity is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemandCategory {
    Photovoltaic,
    Storage,
    EvCharging,
    /// Air-conditioning / load. Only produced under [`CategoryScheme::WithLoad`].
    Load,
    Other,
}

/// Which set of categories a deployment tracks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryScheme {
    /// Photovoltaic, storage, EV-charging and other.
    #[default]
    Standard,
    /// The standard buckets plus a load/HVAC bucket checked after EV-charging.
    WithLoad,
}

impl CategoryScheme {
    /// Whether the load/HVAC bucket is part of this scheme.
    pub fn tracks_load(self) -> bool {
        matches!(self, CategoryScheme::WithLoad)
    }
}

/// Classifies a demand-type label.
///
/// Matching is a case-sensitive substring test in priority order
/// photovoltaic, storage, EV-charging, (load), other. A label that contains
/// several tokens lands in the highest-priority one only.
pub fn classify(demand_type: &str, scheme: CategoryScheme) -> DemandCategory {
    if demand_type.contains(PV_TOKEN) {
        DemandCategory::Photovoltaic
    } else if demand_type.contains(STORAGE_TOKEN) {
        DemandCategory::Storage
    } else if demand_type.contains(EV_TOKEN) {
        DemandCategory::EvCharging
    } else if scheme.tracks_load() && LOAD_TOKENS.iter().any(|t| demand_type.contains(t)) {
        DemandCategory::Load
    } else {
        DemandCategory::Other
    }
}
