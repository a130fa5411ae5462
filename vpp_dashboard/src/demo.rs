//! Static demo dataset shown when the backend is unreachable or empty.

use crate::models::customer::Customer;

// (id, company, province, city, capacity_mw, demand_type, industry, contact, phone)
const DEMO_ROWS: &[(&str, &str, &str, &str, f64, &str, &str, &str, &str)] = &[
    ("demo-01", "佛山顺德精密制造有限公司", "广东", "佛山", 12.5, "光伏", "制造业", "陈志强", "13800138000"),
    ("demo-02", "佛山南海储能科技有限公司", "广东", "佛山", 8.0, "储能", "能源", "黄丽", "13912345678"),
    ("demo-03", "广州天河商业广场", "广东", "广州", 6.2, "充电桩", "商业地产", "李明", "13622223333"),
    ("demo-04", "广州白云物流园", "广东", "广州", 9.8, "光伏", "物流", "周杰", "13533334444"),
    ("demo-05", "深圳南山数据中心", "广东", "深圳", 15.0, "储能", "信息技术", "吴敏", "13744445555"),
    ("demo-06", "深圳宝安公交充电站", "广东", "深圳", 4.5, "充电桩", "交通运输", "郑浩", "13855556666"),
    ("demo-07", "东莞松山湖电子厂", "广东", "东莞", 7.3, "光伏", "电子", "林芳", "13966667777"),
    ("demo-08", "上海浦东冷链仓储", "上海", "上海", 5.6, "其他-需求响应", "冷链", "王磊", "13177778888"),
    ("demo-09", "上海临港新能源产业园", "上海", "上海", 11.2, "光伏", "新能源", "赵静", "13288889999"),
    ("demo-10", "杭州萧山纺织集团", "浙江", "杭州", 3.9, "其他", "纺织", "孙伟", "13399990000"),
    ("demo-11", "苏州工业园区储能电站", "江苏", "苏州", 10.0, "储能", "能源", "钱进", "15011112222"),
    ("demo-12", "南京江宁充电枢纽", "江苏", "南京", 2.8, "充电桩", "交通运输", "冯雪", "15122223333"),
];

/// Builds a fresh copy of the demo customers.
pub fn demo_customers() -> Vec<Customer> {
    DEMO_ROWS
        .iter()
        .map(
            |&(id, company, province, city, capacity, demand_type, industry, contact, phone)| {
                Customer {
                    id: id.to_string(),
                    company_name: company.to_string(),
                    province: province.to_string(),
                    city: city.to_string(),
                    capacity_mw: capacity,
                    demand_type: demand_type.to_string(),
                    industry: industry.to_string(),
                    contact: contact.to_string(),
                    phone: phone.to_string(),
                }
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn demo_ids_are_unique() {
        let customers = demo_customers();
        let ids: HashSet<_> = customers.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), customers.len());
    }

    #[test]
    fn demo_capacities_are_valid() {
        assert!(
            demo_customers()
                .iter()
                .all(|c| c.capacity_mw.is_finite() && c.capacity_mw >= 0.0)
        );
    }
}
