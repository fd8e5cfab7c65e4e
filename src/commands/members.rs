use std::io::Write;

use serde_json::{json, Map};
use tracing::info;

use crate::client::QueryExecutor;
use crate::error::Result;
use crate::output;
use crate::paginate::Paginator;
use crate::path::get_path_or;

const GET_USERS_QUERY: &str = r#"
query getUsers($login: String!, $after: String, $first: Int) {
    organization(login: $login) {
        name
        login
        membersWithRole(after: $after, first: $first) {
            nodes {
                id
                login
                email
                name
            }
            pageInfo {
                endCursor
                hasNextPage
            }
        }
    }
    rateLimit {
        cost
        remaining
        resetAt
    }
}
"#;

const PAGE_INFO_PATH: &str = "organization.membersWithRole.pageInfo";
const NODES_PATH: &str = "organization.membersWithRole.nodes";

/// Print every member of `org` as ndjson.
pub async fn list<C, W>(client: &C, org: &str, page_size: u32, out: &mut W) -> Result<()>
where
    C: QueryExecutor,
    W: Write,
{
    info!("retrieving members of organization {org}");

    let mut params = Map::new();
    params.insert("login".to_string(), json!(org));

    let mut pages = Paginator::new(client, GET_USERS_QUERY, PAGE_INFO_PATH)
        .params(params)
        .page_size(page_size);

    while let Some(page) = pages.next_page().await? {
        output::write_nodes(out, &get_path_or(&page, NODES_PATH, json!([])))?;
    }

    Ok(())
}
