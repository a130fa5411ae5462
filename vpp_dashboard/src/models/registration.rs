//! Registration form input and the insert payload derived from it.

use serde::{Deserialize, Serialize};

use crate::models::{
    customer::{Customer, parse_capacity_input},
    demand::{DEMAND_TYPES, OTHER_LABEL},
};

/// Fields submitted by the "register my resource" form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationForm {
    pub company_name: String,
    pub province: String,
    pub city: String,
    pub address: String,
    /// Capacity as typed, e.g. `"12.5"`.
    pub capacity: String,
    /// One of [`DEMAND_TYPES`].
    pub demand_type: String,
    /// Free-text qualifier, only meaningful when `demand_type` is `"其他"`.
    pub demand_type_other: Option<String>,
    /// Availability window such as `"14:00-18:00"`. Collected but not persisted.
    pub available_time: String,
    pub industry_type: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: String,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            province: String::new(),
            city: String::new(),
            address: String::new(),
            capacity: "0.00".to_string(),
            demand_type: DEMAND_TYPES[0].to_string(),
            demand_type_other: None,
            available_time: "14:00-18:00".to_string(),
            industry_type: String::new(),
            contact_name: String::new(),
            contact_phone: String::new(),
            contact_email: String::new(),
        }
    }
}

impl RegistrationForm {
    /// The demand-type label to store.
    ///
    /// The "other" selection with a non-empty qualifier becomes
    /// `"其他-<qualifier>"`; every other selection is stored verbatim.
    pub fn resolved_demand_type(&self) -> String {
        match self.demand_type_other.as_deref() {
            Some(q) if self.demand_type == OTHER_LABEL && !q.is_empty() => {
                format!("{OTHER_LABEL}-{q}")
            }
            _ => self.demand_type.clone(),
        }
    }
}

/// Row body sent to the backend's insert operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertPayload {
    pub company_name: String,
    pub province: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub capacity_mw: f64,
    pub demand_type: String,
    pub industry: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: String,
}

impl From<&RegistrationForm> for InsertPayload {
    fn from(form: &RegistrationForm) -> Self {
        InsertPayload {
            company_name: form.company_name.clone(),
            province: form.province.clone(),
            city: form.city.clone(),
            address: Some(form.address.clone()).filter(|a| !a.is_empty()),
            capacity_mw: parse_capacity_input(&form.capacity),
            demand_type: form.resolved_demand_type(),
            industry: form.industry_type.clone(),
            contact_name: form.contact_name.clone(),
            contact_phone: form.contact_phone.clone(),
            contact_email: form.contact_email.clone(),
        }
    }
}

impl InsertPayload {
    /// Builds the session-only customer record for this payload.
    pub fn to_customer(&self, id: String) -> Customer {
        Customer {
            id,
            company_name: self.company_name.clone(),
            province: self.province.clone(),
            city: self.city.clone(),
            capacity_mw: self.capacity_mw,
            demand_type: self.demand_type.clone(),
            industry: self.industry.clone(),
            contact: self.contact_name.clone(),
            phone: self.contact_phone.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(demand_type: &str, other: Option<&str>) -> RegistrationForm {
        RegistrationForm {
            company_name: "绿能科技".into(),
            province: "广东".into(),
            city: "佛山".into(),
            capacity: "8".into(),
            demand_type: demand_type.into(),
            demand_type_other: other.map(str::to_string),
            contact_name: "王五".into(),
            contact_phone: "13700002222".into(),
            ..Default::default()
        }
    }

    #[test]
    fn other_with_qualifier_is_compounded() {
        let f = form("其他", Some("需求响应"));
        assert_eq!(f.resolved_demand_type(), "其他-需求响应");
    }

    #[test]
    fn other_without_qualifier_stays_plain() {
        assert_eq!(form("其他", None).resolved_demand_type(), "其他");
        assert_eq!(form("其他", Some("")).resolved_demand_type(), "其他");
    }

    #[test]
    fn qualifier_ignored_for_specific_selection() {
        assert_eq!(form("储能", Some("需求响应")).resolved_demand_type(), "储能");
    }

    #[test]
    fn payload_parses_capacity_and_drops_empty_address() {
        let mut f = form("光伏", None);
        f.capacity = "abc".into();
        let payload = InsertPayload::from(&f);
        assert_eq!(payload.capacity_mw, 0.0);
        assert_eq!(payload.address, None);

        let body = serde_json::to_value(&payload).unwrap();
        assert!(body.get("address").is_none());
        assert_eq!(body["contact_phone"], "13700002222");
    }

    #[test]
    fn local_customer_mirrors_payload() {
        let payload = InsertPayload::from(&form("充电桩", None));
        let c = payload.to_customer("local-1".into());
        assert_eq!(c.id, "local-1");
        assert_eq!(c.city, "佛山");
        assert_eq!(c.capacity_mw, 8.0);
        assert_eq!(c.contact, "王五");
        assert_eq!(c.phone, "13700002222");
    }
}
