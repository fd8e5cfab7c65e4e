//! Cursor-based pagination over GraphQL connections.

use serde_json::{json, Map, Value};
use tracing::{debug, info};

use crate::client::QueryExecutor;
use crate::config::DEFAULT_PAGE_SIZE;
use crate::error::Result;
use crate::responses::{PageInfo, RateLimit};

/// 1-based record range covered by `page`.
pub fn page_range(page: u32, page_size: u32) -> (u64, u64) {
    let (page, page_size) = (u64::from(page), u64::from(page_size));
    ((page - 1) * page_size + 1, page * page_size)
}

/// Runs one query repeatedly, feeding each page's `endCursor` back as
/// `after`, until the server reports `hasNextPage: false`.
///
/// Pages are pulled one at a time with [`Paginator::next_page`]; nothing is
/// requested ahead of the caller.
pub struct Paginator<'a, C> {
    client: &'a C,
    query: &'a str,
    page_info_path: &'a str,
    params: Map<String, Value>,
    page_size: u32,
    cursor: Option<String>,
    has_next_page: bool,
    page: u32,
}

impl<'a, C: QueryExecutor> Paginator<'a, C> {
    pub fn new(client: &'a C, query: &'a str, page_info_path: &'a str) -> Self {
        Self {
            client,
            query,
            page_info_path,
            params: Map::new(),
            page_size: DEFAULT_PAGE_SIZE,
            cursor: None,
            has_next_page: true,
            page: 1,
        }
    }

    pub fn params(mut self, params: Map<String, Value>) -> Self {
        self.params = params;
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Fetch the next page, or `None` once the server has said there are no
    /// more. An error ends the sequence.
    pub async fn next_page(&mut self) -> Result<Option<Value>> {
        if !self.has_next_page {
            return Ok(None);
        }

        let mut variables = self.params.clone();
        variables.insert("after".to_string(), json!(self.cursor));
        variables.insert("first".to_string(), json!(self.page_size));

        let result = match self.client.execute(self.query, Value::Object(variables)).await {
            Ok(result) => result,
            Err(e) => {
                self.has_next_page = false;
                return Err(e);
            }
        };

        let page_info = PageInfo::from_page(&result, self.page_info_path);
        let rate_limit = RateLimit::from_page(&result);

        let (start, end) = page_range(self.page, self.page_size);
        info!(
            "page {} ({start} - {end}), gh API credits remaining: {}",
            self.page,
            rate_limit.remaining_display()
        );
        debug!(
            cost = ?rate_limit.cost,
            reset_at = ?rate_limit.reset_at,
            end_cursor = ?page_info.end_cursor,
            "rate limit"
        );

        self.has_next_page = page_info.has_next_page;
        self.cursor = page_info.end_cursor;
        self.page += 1;

        Ok(Some(result))
    }
}
