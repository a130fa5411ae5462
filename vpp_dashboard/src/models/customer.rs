//! Customer records as held by the dashboard and as returned by the backend.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One registered demand/resource site.
///
/// Records are never mutated once built; the store replaces or prepends
/// whole records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Opaque identifier, unique within the store.
    pub id: String,
    pub company_name: String,
    pub province: String,
    /// Aggregation key. Used exactly as stored, without trimming or case-folding.
    pub city: String,
    /// Capacity in megawatts. Always finite and non-negative.
    pub capacity_mw: f64,
    /// Free-text demand-type label, e.g. `"光伏"` or `"其他-需求响应"`.
    pub demand_type: String,
    pub industry: String,
    /// Contact person's name.
    pub contact: String,
    /// Contact phone number.
    pub phone: String,
}

/// A row of the customer table as returned by the persistence backend.
///
/// Decoding is deliberately forgiving: the identifier may be a string or a
/// number, capacity may be a number, a numeric string, `null` or garbage,
/// and the optional text columns may be missing.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerRow {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub city: String,
    #[serde(default, deserialize_with = "lenient_capacity")]
    pub capacity_mw: f64,
    #[serde(default)]
    pub demand_type: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer {
            id: row.id,
            company_name: row.company_name,
            province: row.province,
            city: row.city,
            capacity_mw: row.capacity_mw,
            demand_type: row.demand_type.unwrap_or_default(),
            industry: row.industry.unwrap_or_default(),
            contact: row.contact_name.unwrap_or_default(),
            phone: row.contact_phone.unwrap_or_default(),
        }
    }
}

/// Clamps a raw capacity to the record invariant: finite and non-negative.
pub fn coerce_capacity(raw: f64) -> f64 {
    if raw.is_finite() && raw > 0.0 { raw } else { 0.0 }
}

/// Converts a JSON capacity cell to megawatts.
///
/// Numbers are taken as-is; strings must hold a complete number (surrounding
/// whitespace allowed, empty means zero). Anything else is zero.
pub fn capacity_from_value(value: &Value) -> f64 {
    let raw = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() { 0.0 } else { s.parse::<f64>().unwrap_or(0.0) }
        }
        _ => 0.0,
    };
    coerce_capacity(raw)
}

static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("static regex is valid")
});

/// Parses free-text capacity input from the registration form.
///
/// Accepts the longest numeric prefix after leading whitespace, so
/// `"12.5MW"` reads as 12.5. Unparseable input reads as zero.
pub fn parse_capacity_input(input: &str) -> f64 {
    let raw = LEADING_NUMBER
        .find(input.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0);
    coerce_capacity(raw)
}

fn lenient_capacity<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(capacity_from_value).unwrap_or(0.0))
}

fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "customer id must be a string or number, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn row_decodes_with_numeric_id_and_string_capacity() {
        let row: CustomerRow = serde_json::from_value(json!({
            "id": 42,
            "company_name": "华东储能",
            "province": "江苏",
            "city": "苏州",
            "capacity_mw": " 3.5 ",
            "demand_type": "储能",
            "industry": null,
            "contact_name": "李四",
            "contact_phone": "13900001111",
            "created_at": "2025-03-01T08:00:00Z"
        }))
        .unwrap();

        let customer = Customer::from(row);
        assert_eq!(customer.id, "42");
        assert_eq!(customer.capacity_mw, 3.5);
        assert_eq!(customer.industry, "");
        assert_eq!(customer.contact, "李四");
    }

    #[test]
    fn garbage_capacity_becomes_zero() {
        for cell in [json!("abc"), json!(null), json!(true), json!(-4.0), json!("NaN"), json!("inf")] {
            assert_eq!(capacity_from_value(&cell), 0.0, "cell {cell}");
        }
        let row: CustomerRow =
            serde_json::from_value(json!({"id": "x", "city": "上海", "capacity_mw": "abc"})).unwrap();
        assert_eq!(row.capacity_mw, 0.0);
    }

    #[test]
    fn missing_capacity_defaults_to_zero() {
        let row: CustomerRow = serde_json::from_value(json!({"id": "x", "city": "上海"})).unwrap();
        assert_eq!(row.capacity_mw, 0.0);
        assert_eq!(row.demand_type, None);
    }

    #[test]
    fn id_must_be_scalar() {
        let err = serde_json::from_value::<CustomerRow>(json!({"id": [1], "city": "上海"}));
        assert!(err.is_err());
    }

    #[test]
    fn form_capacity_reads_numeric_prefix() {
        assert_eq!(parse_capacity_input("12.5"), 12.5);
        assert_eq!(parse_capacity_input("  12.5MW"), 12.5);
        assert_eq!(parse_capacity_input(".5"), 0.5);
        assert_eq!(parse_capacity_input("1e1"), 10.0);
        assert_eq!(parse_capacity_input("abc"), 0.0);
        assert_eq!(parse_capacity_input(""), 0.0);
        assert_eq!(parse_capacity_input("-3"), 0.0);
    }
}
