// src/validate.rs

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;

/// One CSV data line keyed by header name.
pub type Row = HashMap<String, String>;

/// Columns every input file must carry.
pub const REQUIRED_HEADERS: [&str; 3] = ["name", "email", "role"];

/// Non-empty local part, one `@`, and a dotted domain with text around the dot.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+$").expect("email pattern should compile"));

/// A row that passed validation, ready to be sent as the JSON request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl UserRecord {
    /// Extract a record from `row`, or `None` if any required field is
    /// missing or empty or the email is malformed.
    pub fn from_row(row: &Row) -> Option<Self> {
        let field = |key: &str| row.get(key).filter(|v| !v.is_empty()).cloned();

        let record = Self {
            name: field("name")?,
            email: field("email")?,
            role: field("role")?,
        };
        is_valid_email(&record.email).then_some(record)
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_row(row: &Row) -> bool {
    UserRecord::from_row(row).is_some()
}
