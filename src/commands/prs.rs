use std::io::{BufRead, Write};

use serde_json::{json, Map};
use tracing::info;

use crate::client::QueryExecutor;
use crate::error::{GhQueryError, Result};
use crate::output;
use crate::paginate::Paginator;
use crate::path::get_path_or;
use crate::types::Member;

const GET_PRS_QUERY: &str = r#"
query getPrs($login: String!, $after: String, $first: Int) {
    user(login: $login) {
        pullRequests(states: [MERGED], first: $first, after: $after) {
            nodes {
                author {
                    login
                }
                title
                bodyText
                url
                closedAt
                createdAt
                repository {
                    url
                    name: nameWithOwner
                }
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

const PAGE_INFO_PATH: &str = "user.pullRequests.pageInfo";
const NODES_PATH: &str = "user.pullRequests.nodes";

fn parse_member(line: &str, line_no: usize) -> Result<Member> {
    serde_json::from_str(line).map_err(|e| GhQueryError::InvalidMember {
        line: line_no,
        source: e,
    })
}

/// Print the merged pull requests of every member in `input` as ndjson,
/// one member at a time in input order.
pub async fn list<C, R, W>(client: &C, input: R, page_size: u32, out: &mut W) -> Result<()>
where
    C: QueryExecutor,
    R: BufRead,
    W: Write,
{
    info!("retrieving pull requests");

    for (index, line) in input.lines().enumerate() {
        let member = parse_member(&line?, index + 1)?;
        info!("processing {}", member.login);

        let mut params = Map::new();
        params.insert("login".to_string(), json!(member.login));

        let mut pages = Paginator::new(client, GET_PRS_QUERY, PAGE_INFO_PATH)
            .params(params)
            .page_size(page_size);

        while let Some(page) = pages.next_page().await? {
            output::write_nodes(out, &get_path_or(&page, NODES_PATH, json!([])))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::MockClient;
    use serde_json::Value;

    fn pr(title: &str) -> Value {
        json!({
            "author": {"login": "x"},
            "title": title,
            "bodyText": "",
            "url": "u",
            "closedAt": "2024-04-02T10:00:00Z",
            "createdAt": "2024-04-01T10:00:00Z",
            "repository": {"url": "https://github.com/o/r", "name": "o/r"}
        })
    }

    fn page(titles: &[&str], has_next: bool, cursor: &str) -> Value {
        let nodes: Vec<Value> = titles.iter().map(|t| pr(t)).collect();
        json!({
            "user": {"pullRequests": {
                "nodes": nodes,
                "pageInfo": {"endCursor": cursor, "hasNextPage": has_next}
            }},
            "rateLimit": {"cost": 1, "remaining": 4000, "resetAt": "2024-05-01T12:00:00Z"}
        })
    }

    fn lines(out: Vec<u8>) -> Vec<Value> {
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_single_member_single_pr() {
        let client = MockClient::with_pages([page(&["t"], false, "c1")]);
        let input = "{\"login\":\"x\",\"id\":\"1\"}\n".as_bytes();
        let mut out = Vec::new();

        list(&client, input, 80, &mut out).await.unwrap();

        let printed = lines(out);
        assert_eq!(printed.len(), 1);
        assert_eq!(printed[0]["title"], "t");
        assert_eq!(printed[0]["url"], "u");
        assert_eq!(client.requests()[0]["login"], "x");
    }

    #[tokio::test]
    async fn test_members_are_processed_sequentially() {
        let client = MockClient::with_pages([
            page(&["a1", "a2"], true, "a-c1"),
            page(&["a3"], false, "a-c2"),
            page(&["b1"], false, "b-c1"),
        ]);
        let input = "{\"login\":\"alice\"}\n{\"login\":\"bob\"}\n".as_bytes();
        let mut out = Vec::new();

        list(&client, input, 80, &mut out).await.unwrap();

        let requests = client.requests();
        let logins: Vec<&str> = requests.iter().map(|r| r["login"].as_str().unwrap()).collect();
        assert_eq!(logins, ["alice", "alice", "bob"]);
        assert_eq!(requests[1]["after"], "a-c1");
        assert_eq!(requests[2]["after"], Value::Null);

        let titles: Vec<String> = lines(out)
            .iter()
            .map(|p| p["title"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(titles, ["a1", "a2", "a3", "b1"]);
    }

    #[tokio::test]
    async fn test_user_without_prs() {
        let client = MockClient::with_pages([json!({"user": null, "rateLimit": {"remaining": 1}})]);
        let mut out = Vec::new();

        list(&client, "{\"login\":\"ghost\"}\n".as_bytes(), 80, &mut out)
            .await
            .unwrap();

        assert!(out.is_empty());
        assert_eq!(client.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_json_is_fatal() {
        let client = MockClient::with_pages([page(&["a1"], false, "c1")]);
        let input = "{\"login\":\"alice\"}\nnot json\n{\"login\":\"bob\"}\n".as_bytes();
        let mut out = Vec::new();

        let err = list(&client, input, 80, &mut out).await.unwrap_err();

        assert!(matches!(err, GhQueryError::InvalidMember { line: 2, .. }));
        assert_eq!(client.requests().len(), 1);
        assert_eq!(lines(out).len(), 1);
    }

    #[tokio::test]
    async fn test_missing_login_is_fatal() {
        let client = MockClient::default();
        let mut out = Vec::new();

        let err = list(&client, "{\"id\":\"1\"}\n".as_bytes(), 80, &mut out)
            .await
            .unwrap_err();

        assert!(matches!(err, GhQueryError::InvalidMember { line: 1, .. }));
        assert!(client.requests().is_empty());
    }

    #[tokio::test]
    async fn test_empty_input() {
        let client = MockClient::default();
        let mut out = Vec::new();

        list(&client, "".as_bytes(), 80, &mut out).await.unwrap();

        assert!(out.is_empty());
        assert!(client.requests().is_empty());
    }
}
