//! Plain-text and JSON rendering of the dashboard views.

use std::fmt::Write;

use serde::Serialize;

use crate::{
    errors::Error,
    masking::{mask_name, mask_phone},
    models::{customer::Customer, region::RegionStat},
};

/// Renders the per-city table, one decimal place per capacity column.
///
/// The load column appears only when at least one row carries it.
pub fn region_table(stats: &[RegionStat]) -> String {
    let with_load = stats.iter().any(|s| s.load_mw.is_some());
    let mut out = String::new();

    let mut header = vec!["城市", "站点", "光伏", "储能", "充电"];
    if with_load {
        header.push("负荷");
    }
    header.extend(["其他", "合计"]);
    let _ = writeln!(out, "{}", header.join("\t"));

    for s in stats {
        let mut cells = vec![
            s.city.clone(),
            s.site_count.to_string(),
            format!("{:.1}", s.pv_mw),
            format!("{:.1}", s.storage_mw),
            format!("{:.1}", s.ev_mw),
        ];
        if with_load {
            cells.push(format!("{:.1}", s.load_mw.unwrap_or(0.0)));
        }
        cells.push(format!("{:.1}", s.other_mw));
        cells.push(format!("{:.1}", s.total_mw));
        let _ = writeln!(out, "{}", cells.join("\t"));
    }
    out
}

/// Customer list row with contact details masked.
#[derive(Debug, Serialize, PartialEq)]
pub struct MaskedCustomer<'a> {
    pub company_name: &'a str,
    pub city: &'a str,
    pub capacity_mw: f64,
    pub demand_type: &'a str,
    pub industry: &'a str,
    pub contact: String,
    pub phone: String,
}

impl<'a> From<&'a Customer> for MaskedCustomer<'a> {
    fn from(c: &'a Customer) -> Self {
        MaskedCustomer {
            company_name: &c.company_name,
            city: &c.city,
            capacity_mw: c.capacity_mw,
            demand_type: &c.demand_type,
            industry: &c.industry,
            contact: mask_name(&c.contact),
            phone: mask_phone(&c.phone).into_owned(),
        }
    }
}

pub fn masked_customers(customers: &[Customer]) -> Vec<MaskedCustomer<'_>> {
    customers.iter().map(MaskedCustomer::from).collect()
}

/// Renders the customer list with contact name and phone masked.
pub fn customer_table(customers: &[Customer]) -> String {
    let mut out = String::from("企业名称\t城市\t容量\t类型\t行业\t联系人\t电话\n");
    for c in masked_customers(customers) {
        let _ = writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            c.company_name, c.city, c.capacity_mw, c.demand_type, c.industry, c.contact, c.phone
        );
    }
    out
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(city: &str, load: Option<f64>) -> RegionStat {
        RegionStat {
            city: city.into(),
            site_count: 2,
            pv_mw: 2.5,
            storage_mw: 1.0,
            ev_mw: 0.0,
            load_mw: load,
            other_mw: 0.04,
            total_mw: 3.54,
        }
    }

    #[test]
    fn table_rounds_to_one_decimal() {
        let table = region_table(&[stat("上海", None)]);
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines[0], "城市\t站点\t光伏\t储能\t充电\t其他\t合计");
        assert_eq!(lines[1], "上海\t2\t2.5\t1.0\t0.0\t0.0\t3.5");
    }

    #[test]
    fn load_column_only_when_tracked() {
        let table = region_table(&[stat("广州", Some(0.0))]);
        assert!(table.lines().next().unwrap().contains("负荷"));
    }

    #[test]
    fn customer_table_masks_contacts() {
        let c = Customer {
            id: "1".into(),
            company_name: "测试公司".into(),
            province: "上海".into(),
            city: "上海".into(),
            capacity_mw: 2.5,
            demand_type: "光伏".into(),
            industry: "制造".into(),
            contact: "张三".into(),
            phone: "13800138000".into(),
        };
        let table = customer_table(std::slice::from_ref(&c));
        assert!(table.contains("张**"));
        assert!(table.contains("138****8000"));
        assert!(!table.contains("13800138000"));

        let json = to_json(&masked_customers(&[c])).unwrap();
        assert!(json.contains("138****8000"));
    }

    #[test]
    fn empty_stats_json_is_empty_array() {
        let empty: Vec<RegionStat> = Vec::new();
        assert_eq!(to_json(&empty).unwrap(), "[]");
    }
}
