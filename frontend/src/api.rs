//! Browser transport for the GraphQL facade.
//!
//! Each request is a JSON `POST` to the configured endpoint. The API key, when
//! the endpoint is keyed, travels in the `x-api-key` header. Transport level
//! problems are mapped onto `FailureCause` so the facade can tag them with the
//! operation that failed.

use common::api::{CustomerApi, GraphQlTransport};
use common::config::ApiConfig;
use common::error::FailureCause;
use common::graphql::GraphQlRequest;
use gloo_net::http::Request;
use serde_json::Value;

pub type Api = CustomerApi<HttpTransport>;

pub struct HttpTransport {
    config: ApiConfig,
}

impl HttpTransport {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

impl GraphQlTransport for HttpTransport {
    async fn execute(&self, request: &GraphQlRequest) -> Result<Value, FailureCause> {
        let mut builder = Request::post(&self.config.endpoint);
        if let Some(key) = self.config.api_key_header() {
            builder = builder.header("x-api-key", key);
        }

        let response = builder
            .json(request)
            .map_err(|e| FailureCause::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| FailureCause::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FailureCause::Status {
                status: response.status(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| FailureCause::Decode(e.to_string()))
    }
}
