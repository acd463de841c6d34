//! GraphQL documents and the JSON envelopes exchanged with the endpoint.
//!
//! The documents mirror the ones generated for the managed `Customers` model.
//! Requests are plain `{query, operationName, variables}` bodies; responses
//! follow the usual `{data, errors}` shape and are unwrapped down to the root
//! field of the operation that produced them.

mod mutations;
mod queries;

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FailureCause;

pub use mutations::{CREATE_CUSTOMERS, DELETE_CUSTOMERS, UPDATE_CUSTOMERS};
pub use queries::{GET_CUSTOMERS, LIST_CUSTOMERS};

/// The five operations exposed by the customers schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListCustomers,
    GetCustomers,
    CreateCustomers,
    UpdateCustomers,
    DeleteCustomers,
}

impl Operation {
    /// Operation name as declared in the document.
    pub fn name(self) -> &'static str {
        match self {
            Operation::ListCustomers => "ListCustomers",
            Operation::GetCustomers => "GetCustomers",
            Operation::CreateCustomers => "CreateCustomers",
            Operation::UpdateCustomers => "UpdateCustomers",
            Operation::DeleteCustomers => "DeleteCustomers",
        }
    }

    /// Root field under `data` holding the operation's result.
    pub fn field(self) -> &'static str {
        match self {
            Operation::ListCustomers => "listCustomers",
            Operation::GetCustomers => "getCustomers",
            Operation::CreateCustomers => "createCustomers",
            Operation::UpdateCustomers => "updateCustomers",
            Operation::DeleteCustomers => "deleteCustomers",
        }
    }

    pub fn document(self) -> &'static str {
        match self {
            Operation::ListCustomers => LIST_CUSTOMERS,
            Operation::GetCustomers => GET_CUSTOMERS,
            Operation::CreateCustomers => CREATE_CUSTOMERS,
            Operation::UpdateCustomers => UPDATE_CUSTOMERS,
            Operation::DeleteCustomers => DELETE_CUSTOMERS,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Body POSTed to the GraphQL endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphQlRequest {
    pub query: &'static str,
    #[serde(rename = "operationName")]
    pub operation_name: &'static str,
    pub variables: Value,
}

impl GraphQlRequest {
    pub fn new(operation: Operation, variables: Value) -> Self {
        Self {
            query: operation.document(),
            operation_name: operation.name(),
            variables,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(rename = "errorType", default)]
    pub error_type: Option<String>,
}

impl fmt::Display for GraphQlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error_type {
            Some(kind) => write!(f, "{kind}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

impl GraphQlResponse {
    pub fn from_value(body: Value) -> Result<Self, FailureCause> {
        serde_json::from_value(body).map_err(|e| FailureCause::Decode(e.to_string()))
    }

    /// Extracts and decodes the root field of `operation`.
    ///
    /// Any entry in `errors` fails the whole response, even if `data` is
    /// also present. A missing or `null` field yields `Ok(None)`.
    pub fn into_field<T: DeserializeOwned>(
        self,
        operation: Operation,
    ) -> Result<Option<T>, FailureCause> {
        if !self.errors.is_empty() {
            return Err(FailureCause::GraphQl(
                self.errors.iter().map(ToString::to_string).collect(),
            ));
        }

        let field = match self.data {
            Some(Value::Object(mut data)) => data.remove(operation.field()),
            _ => None,
        };

        match field {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| FailureCause::Decode(e.to_string())),
        }
    }
}
