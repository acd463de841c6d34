pub const GET_CUSTOMERS: &str = r#"
  query GetCustomers($id: ID!) {
    getCustomers(id: $id) {
      id
      first_name
      last_name
      createdAt
      updatedAt
      __typename
    }
  }
"#;

pub const LIST_CUSTOMERS: &str = r#"
  query ListCustomers(
    $filter: ModelCustomersFilterInput
    $limit: Int
    $nextToken: String
  ) {
    listCustomers(filter: $filter, limit: $limit, nextToken: $nextToken) {
      items {
        id
        first_name
        last_name
        createdAt
        updatedAt
        __typename
      }
      nextToken
      __typename
    }
  }
"#;
