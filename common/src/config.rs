//! Runtime configuration of the GraphQL endpoint.
//!
//! The managed backend generates an `aws-exports` object describing the
//! endpoint, region and authorization mode. The frontend ships it as
//! `aws-exports.json` and parses it with [`ApiConfig::from_json`] before any
//! operation is issued.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("configuration has an empty GraphQL endpoint")]
    MissingEndpoint,
}

/// Authorization mode declared for the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    ApiKey,
    /// Any other mode (user pools, IAM, OIDC, ...). No credential is attached.
    Other(String),
}

impl<'de> Deserialize<'de> for AuthMode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mode = String::deserialize(deserializer)?;
        Ok(match mode.as_str() {
            "API_KEY" => AuthMode::ApiKey,
            _ => AuthMode::Other(mode),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    #[serde(rename = "aws_appsync_graphqlEndpoint")]
    pub endpoint: String,
    #[serde(rename = "aws_appsync_region", default)]
    pub region: Option<String>,
    #[serde(rename = "aws_appsync_authenticationType", default)]
    pub auth_mode: AuthMode,
    #[serde(rename = "aws_appsync_apiKey", default)]
    pub api_key: Option<String>,
}

impl ApiConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: ApiConfig = serde_json::from_str(raw)?;
        if config.endpoint.trim().is_empty() {
            return Err(ConfigError::MissingEndpoint);
        }
        Ok(config)
    }

    /// The `x-api-key` header value, when the endpoint is keyed.
    pub fn api_key_header(&self) -> Option<&str> {
        match self.auth_mode {
            AuthMode::ApiKey => self.api_key.as_deref().filter(|key| !key.is_empty()),
            AuthMode::Other(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_generated_exports() -> TestResult {
        let config = ApiConfig::from_json(
            r#"{
                "aws_project_region": "eu-west-1",
                "aws_appsync_graphqlEndpoint": "https://example.appsync-api.eu-west-1.amazonaws.com/graphql",
                "aws_appsync_region": "eu-west-1",
                "aws_appsync_authenticationType": "API_KEY",
                "aws_appsync_apiKey": "da2-abc"
            }"#,
        )?;

        assert_eq!(config.region.as_deref(), Some("eu-west-1"));
        assert_eq!(config.auth_mode, AuthMode::ApiKey);
        assert_eq!(config.api_key_header(), Some("da2-abc"));

        Ok(())
    }

    #[test]
    fn other_modes_send_no_key() -> TestResult {
        let config = ApiConfig::from_json(
            r#"{
                "aws_appsync_graphqlEndpoint": "https://example.com/graphql",
                "aws_appsync_authenticationType": "AMAZON_COGNITO_USER_POOLS",
                "aws_appsync_apiKey": "da2-abc"
            }"#,
        )?;

        assert_eq!(
            config.auth_mode,
            AuthMode::Other("AMAZON_COGNITO_USER_POOLS".to_string())
        );
        assert_eq!(config.api_key_header(), None);

        Ok(())
    }

    #[test]
    fn rejects_blank_endpoint() {
        let result = ApiConfig::from_json(r#"{ "aws_appsync_graphqlEndpoint": "  " }"#);

        assert!(matches!(result, Err(ConfigError::MissingEndpoint)), "got {result:?}");
    }
}
