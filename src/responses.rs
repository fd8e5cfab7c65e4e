//! Typed views over the bookkeeping blocks shared by every paginated query.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::path::get_path;

/// Pagination info for cursor-based pagination.
#[derive(Debug, PartialEq)]
pub struct PageInfo {
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

impl PageInfo {
    /// Read `hasNextPage` and `endCursor` below `page_info_path`. A missing
    /// flag ends pagination.
    pub fn from_page(page: &Value, page_info_path: &str) -> Self {
        Self {
            has_next_page: get_path(page, &format!("{page_info_path}.hasNextPage"))
                .and_then(Value::as_bool)
                .unwrap_or(false),
            end_cursor: get_path(page, &format!("{page_info_path}.endCursor"))
                .and_then(Value::as_str)
                .map(String::from),
        }
    }
}

/// `rateLimit { cost remaining resetAt }` block.
#[derive(Debug, Default, PartialEq)]
pub struct RateLimit {
    pub remaining: Option<i64>,
    pub cost: Option<i64>,
    pub reset_at: Option<DateTime<Utc>>,
}

impl RateLimit {
    pub fn from_page(page: &Value) -> Self {
        Self {
            remaining: get_path(page, "rateLimit.remaining").and_then(Value::as_i64),
            cost: get_path(page, "rateLimit.cost").and_then(Value::as_i64),
            reset_at: get_path(page, "rateLimit.resetAt")
                .and_then(Value::as_str)
                .and_then(|s| s.parse::<DateTime<Utc>>().ok()),
        }
    }

    pub fn remaining_display(&self) -> String {
        self.remaining
            .map(|r| r.to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }
}
