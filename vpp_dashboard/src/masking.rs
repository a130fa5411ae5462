//! Display masking for contact details in the public customer list.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{3})\d{4}(\d{4})").expect("static regex is valid"));

/// Keeps the first character of a name: `张三` -> `张**`.
pub fn mask_name(name: &str) -> String {
    match name.chars().next() {
        Some(first) => format!("{first}**"),
        None => String::new(),
    }
}

/// Hides the middle four digits of the first 11-digit run:
/// `13800138000` -> `138****8000`. Other input passes through unchanged.
pub fn mask_phone(phone: &str) -> Cow<'_, str> {
    PHONE.replace(phone, "$1****$2")
}
