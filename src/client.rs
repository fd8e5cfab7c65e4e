use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::error::{GhQueryError, Result};

const USER_AGENT: &str = concat!("gh-query/", env!("CARGO_PKG_VERSION"));

/// Anything that can run a GraphQL query and hand back its `data` member.
pub trait QueryExecutor {
    async fn execute(&self, query: &str, variables: Value) -> Result<Value>;
}

pub struct GitHubClient {
    http: Client,
    endpoint: Url,
    token: String,
}

#[derive(Serialize)]
struct GraphQLRequest<'a> {
    query: &'a str,
    variables: Value,
}

#[derive(Deserialize)]
struct GraphQLResponse {
    data: Option<Value>,
    errors: Option<Vec<GraphQLError>>,
}

#[derive(Deserialize, Debug)]
struct GraphQLError {
    message: String,
}

impl GitHubClient {
    pub fn new(endpoint: Url, token: String) -> Self {
        Self {
            http: Client::new(),
            endpoint,
            token,
        }
    }
}

impl QueryExecutor for GitHubClient {
    async fn execute(&self, query: &str, variables: Value) -> Result<Value> {
        let request = GraphQLRequest { query, variables };

        let response = self
            .http
            .post(self.endpoint.clone())
            .header("Authorization", format!("bearer {}", self.token))
            .header("User-Agent", USER_AGENT)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GhQueryError::ApiError {
                status: response.status().as_u16(),
                message: response
                    .text()
                    .await
                    .unwrap_or_else(|_| "<failed to read response body>".to_string()),
            });
        }

        let gql_response: GraphQLResponse = response.json().await?;
        into_data(gql_response)
    }
}

/// Any `errors` entry fails the whole query, even alongside partial data.
fn into_data(response: GraphQLResponse) -> Result<Value> {
    if let Some(errors) = response.errors.filter(|e| !e.is_empty()) {
        return Err(GhQueryError::GraphQL {
            messages: errors.into_iter().map(|e| e.message).collect(),
        });
    }

    response.data.ok_or(GhQueryError::EmptyResponse)
}
