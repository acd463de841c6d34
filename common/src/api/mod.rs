//! API client facade.
//!
//! Turns the four intents of the UI (plus the unused single-record lookup)
//! into GraphQL requests and unwraps their results. The facade keeps no state
//! of its own; the wire is abstracted behind [`GraphQlTransport`] so the
//! browser build can plug in an HTTP client while tests plug in a fake.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::error::{FailureCause, OperationFailed};
use crate::graphql::{GraphQlRequest, GraphQlResponse, Operation};
use crate::model::customer::{
    CreateCustomersInput, Customer, CustomerFields, CustomerId, CustomerPage,
    DeleteCustomersInput, UpdateCustomersInput,
};

/// Sends one GraphQL request body and returns the decoded JSON response body.
pub trait GraphQlTransport {
    async fn execute(&self, request: &GraphQlRequest) -> Result<Value, FailureCause>;
}

#[derive(Debug, Clone)]
pub struct CustomerApi<T> {
    transport: T,
}

impl<T: GraphQlTransport> CustomerApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches the first page of customers.
    ///
    /// No filter, limit or cursor is sent, and `nextToken` in the reply is
    /// ignored: collections larger than one page come back truncated.
    pub async fn list(&self) -> Result<Vec<Customer>, OperationFailed> {
        let page: CustomerPage = self
            .required(Operation::ListCustomers, json!({}))
            .await?;

        Ok(page.items)
    }

    pub async fn get(&self, id: &CustomerId) -> Result<Option<Customer>, OperationFailed> {
        self.call(Operation::GetCustomers, json!({ "id": id })).await
    }

    pub async fn create(&self, fields: &CustomerFields) -> Result<Customer, OperationFailed> {
        let input = CreateCustomersInput {
            fields: fields.clone(),
        };

        self.mutate(Operation::CreateCustomers, &input).await
    }

    pub async fn update(
        &self,
        input: &UpdateCustomersInput,
    ) -> Result<Customer, OperationFailed> {
        self.mutate(Operation::UpdateCustomers, input).await
    }

    pub async fn delete(&self, id: &CustomerId) -> Result<Customer, OperationFailed> {
        let input = DeleteCustomersInput { id: id.clone() };

        self.mutate(Operation::DeleteCustomers, &input).await
    }

    async fn mutate<I: Serialize>(
        &self,
        operation: Operation,
        input: &I,
    ) -> Result<Customer, OperationFailed> {
        let input = serde_json::to_value(input)
            .map_err(|e| OperationFailed::new(operation, FailureCause::Encode(e.to_string())))?;

        self.required(operation, json!({ "input": input })).await
    }

    async fn required<R: DeserializeOwned>(
        &self,
        operation: Operation,
        variables: Value,
    ) -> Result<R, OperationFailed> {
        self.call(operation, variables)
            .await?
            .ok_or_else(|| OperationFailed::new(operation, FailureCause::EmptyResponse))
    }

    async fn call<R: DeserializeOwned>(
        &self,
        operation: Operation,
        variables: Value,
    ) -> Result<Option<R>, OperationFailed> {
        let request = GraphQlRequest::new(operation, variables);

        let body = self
            .transport
            .execute(&request)
            .await
            .map_err(|cause| OperationFailed::new(operation, cause))?;

        GraphQlResponse::from_value(body)
            .and_then(|response| response.into_field(operation))
            .map_err(|cause| OperationFailed::new(operation, cause))
    }
}
