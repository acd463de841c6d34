pub const CREATE_CUSTOMERS: &str = r#"
  mutation CreateCustomers(
    $input: CreateCustomersInput!
    $condition: ModelCustomersConditionInput
  ) {
    createCustomers(input: $input, condition: $condition) {
      id
      first_name
      last_name
      createdAt
      updatedAt
      __typename
    }
  }
"#;

pub const UPDATE_CUSTOMERS: &str = r#"
  mutation UpdateCustomers(
    $input: UpdateCustomersInput!
    $condition: ModelCustomersConditionInput
  ) {
    updateCustomers(input: $input, condition: $condition) {
      id
      first_name
      last_name
      createdAt
      updatedAt
      __typename
    }
  }
"#;

pub const DELETE_CUSTOMERS: &str = r#"
  mutation DeleteCustomers(
    $input: DeleteCustomersInput!
    $condition: ModelCustomersConditionInput
  ) {
    deleteCustomers(input: $input, condition: $condition) {
      id
      first_name
      last_name
      createdAt
      updatedAt
      __typename
    }
  }
"#;
