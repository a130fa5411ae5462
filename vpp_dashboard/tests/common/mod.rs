#![allow(dead_code)]

use vpp_dashboard::models::{
    customer::{Customer, CustomerRow},
    registration::RegistrationForm,
};

pub fn customer(id: &str, city: &str, capacity: f64, demand_type: &str) -> Customer {
    Customer {
        id: id.to_string(),
        company_name: format!("企业{id}"),
        province: "测试省".to_string(),
        city: city.to_string(),
        capacity_mw: capacity,
        demand_type: demand_type.to_string(),
        industry: String::new(),
        contact: "张三".to_string(),
        phone: "13800138000".to_string(),
    }
}

pub fn row(id: &str, city: &str, capacity: f64, demand_type: &str) -> CustomerRow {
    CustomerRow {
        id: id.to_string(),
        company_name: format!("企业{id}"),
        province: "测试省".to_string(),
        city: city.to_string(),
        capacity_mw: capacity,
        demand_type: Some(demand_type.to_string()),
        industry: None,
        contact_name: Some("李四".to_string()),
        contact_phone: Some("13900001111".to_string()),
        created_at: None,
    }
}

pub fn form(city: &str, capacity: &str, demand_type: &str, other: Option<&str>) -> RegistrationForm {
    RegistrationForm {
        company_name: "新能源示范企业".to_string(),
        province: "测试省".to_string(),
        city: city.to_string(),
        capacity: capacity.to_string(),
        demand_type: demand_type.to_string(),
        demand_type_other: other.map(str::to_string),
        contact_name: "王五".to_string(),
        contact_phone: "13700002222".to_string(),
        contact_email: "wang@example.com".to_string(),
        ..RegistrationForm::default()
    }
}
