use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier assigned by the backend when a customer is created.
///
/// The client never generates or parses it; it is only compared for equality
/// and echoed back in update and delete inputs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

impl CustomerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CustomerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A customer record exactly as the backend returns it.
///
/// Timestamps and the type tag are server metadata. They are kept so the
/// record round-trips through logs unchanged, but nothing on the client reads
/// them and no input type can carry them back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(rename = "__typename", default, skip_serializing_if = "Option::is_none")]
    pub typename: Option<String>,
}

impl Customer {
    /// Copies the two editable fields out of the record.
    pub fn fields(&self) -> CustomerFields {
        CustomerFields {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

/// The user-editable part of a customer.
///
/// Used for the new-customer draft, for the buffer of the row being edited
/// and as the body of the create input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerFields {
    pub first_name: String,
    pub last_name: String,
}

impl CustomerFields {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
        }
    }
}

/// Names one of the editable fields of a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
}

impl Field {
    pub const ALL: [Field; 2] = [Field::FirstName, Field::LastName];

    /// Name of the HTML input and of the GraphQL input key.
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
        }
    }

    /// Placeholder / column caption shown in the UI.
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
        }
    }
}

/// One page of the `listCustomers` connection.
///
/// `next_token` is decoded so it can be logged, but it is never followed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CustomerPage {
    #[serde(default)]
    pub items: Vec<Customer>,
    #[serde(rename = "nextToken", default)]
    pub next_token: Option<String>,
}

/// Input of the `createCustomers` mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateCustomersInput {
    #[serde(flatten)]
    pub fields: CustomerFields,
}

/// Input of the `updateCustomers` mutation.
///
/// Only the id and the two editable fields exist here, so server metadata
/// can never leak into the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateCustomersInput {
    pub id: CustomerId,
    #[serde(flatten)]
    pub fields: CustomerFields,
}

/// Input of the `deleteCustomers` mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteCustomersInput {
    pub id: CustomerId,
}
