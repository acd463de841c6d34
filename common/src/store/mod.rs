//! UI state container for the customer table.
//!
//! [`CustomerBook`] owns everything the view shows: the fetched list, the
//! new-customer draft and the single edit buffer. It follows an Elm-style
//! loop: the host feeds it an [`Action`], the book mutates itself and hands
//! back the [`Effect`]s the host must run. Completed effects come back in as
//! further actions, so the book never awaits anything itself.
//!
//! The server is the only source of truth. Every successful mutation is
//! followed by a full refresh instead of patching the local list, and every
//! failure is reported and otherwise ignored.

use crate::error::OperationFailed;
use crate::model::customer::{Customer, CustomerFields, CustomerId, Field, UpdateCustomersInput};

/// Local edit buffer for the one row currently in edit mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub id: CustomerId,
    pub fields: CustomerFields,
}

impl Selection {
    /// The update input for this buffer: id plus the two names, nothing else.
    pub fn to_input(&self) -> UpdateCustomersInput {
        UpdateCustomersInput {
            id: self.id.clone(),
            fields: self.fields.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Fetch the list, on first activation and after each mutation.
    Load,
    Loaded(Result<Vec<Customer>, OperationFailed>),
    EditDraft(Field, String),
    SubmitDraft,
    Created(Result<(), OperationFailed>),
    Delete(CustomerId),
    Deleted(Result<(), OperationFailed>),
    Select(CustomerId),
    EditSelected(Field, String),
    CommitEdit,
    Updated(CustomerId, Result<(), OperationFailed>),
}

/// Side effect requested by the book. The host runs it and reports back.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Run `list()` and answer with [`Action::Loaded`].
    List,
    /// Run `create()` and answer with [`Action::Created`].
    Create(CustomerFields),
    /// Run `update()` and answer with [`Action::Updated`].
    Update(UpdateCustomersInput),
    /// Run `delete()` and answer with [`Action::Deleted`].
    Delete(CustomerId),
    /// Write the failure to the diagnostic log.
    Report(OperationFailed),
}

/// One rendered table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row<'a> {
    Customer(&'a Customer),
    Editor(&'a Selection),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerBook {
    customers: Vec<Customer>,
    draft: CustomerFields,
    selection: Option<Selection>,
}

impl CustomerBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn draft(&self) -> &CustomerFields {
        &self.draft
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn apply(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::Load => vec![Effect::List],
            Action::Loaded(Ok(customers)) => {
                self.customers = customers;
                Vec::new()
            }
            Action::EditDraft(field, value) => {
                self.draft.set(field, value);
                Vec::new()
            }
            Action::SubmitDraft => vec![Effect::Create(self.draft.clone())],
            Action::Created(Ok(())) => {
                self.draft = CustomerFields::default();
                vec![Effect::List]
            }
            Action::Delete(id) => vec![Effect::Delete(id)],
            Action::Deleted(Ok(())) => vec![Effect::List],
            Action::Select(id) => {
                // Replacing the buffer drops any unsaved edits of the previous row.
                if let Some(customer) = self.customers.iter().find(|customer| customer.id == id) {
                    self.selection = Some(Selection {
                        id: customer.id.clone(),
                        fields: customer.fields(),
                    });
                }
                Vec::new()
            }
            Action::EditSelected(field, value) => {
                if let Some(selection) = &mut self.selection {
                    selection.fields.set(field, value);
                }
                Vec::new()
            }
            Action::CommitEdit => self
                .selection
                .as_ref()
                .map(|selection| vec![Effect::Update(selection.to_input())])
                .unwrap_or_default(),
            Action::Updated(id, Ok(())) => {
                if self.selection.as_ref().is_some_and(|s| s.id == id) {
                    self.selection = None;
                }
                vec![Effect::List]
            }
            Action::Loaded(Err(error))
            | Action::Created(Err(error))
            | Action::Deleted(Err(error))
            | Action::Updated(_, Err(error)) => vec![Effect::Report(error)],
        }
    }

    /// Table rows in list order, with the editor row right after the row
    /// being edited.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> + '_ {
        self.customers.iter().flat_map(move |customer| {
            let editor = self
                .selection
                .as_ref()
                .filter(|selection| selection.id == customer.id)
                .map(Row::Editor);
            std::iter::once(Row::Customer(customer)).chain(editor)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureCause;
    use crate::graphql::Operation;

    fn customer(id: &str, first: &str, last: &str) -> Customer {
        Customer {
            id: CustomerId::from(id),
            first_name: first.to_string(),
            last_name: last.to_string(),
            created_at: Some("2024-05-01T10:00:00.000Z".to_string()),
            updated_at: Some("2024-05-02T10:00:00.000Z".to_string()),
            typename: Some("Customers".to_string()),
        }
    }

    fn failure(operation: Operation) -> OperationFailed {
        OperationFailed::new(operation, FailureCause::Network("offline".to_string()))
    }

    fn loaded(customers: Vec<Customer>) -> CustomerBook {
        let mut book = CustomerBook::new();
        book.apply(Action::Loaded(Ok(customers)));
        book
    }

    fn names(book: &CustomerBook) -> Vec<(String, String)> {
        book.rows()
            .filter_map(|row| match row {
                Row::Customer(c) => Some((c.first_name.clone(), c.last_name.clone())),
                Row::Editor(_) => None,
            })
            .collect()
    }

    fn editor_ids(book: &CustomerBook) -> Vec<CustomerId> {
        book.rows()
            .filter_map(|row| match row {
                Row::Editor(selection) => Some(selection.id.clone()),
                Row::Customer(_) => None,
            })
            .collect()
    }

    #[test]
    fn initial_load_requests_list_and_renders_rows_in_order() {
        let mut book = CustomerBook::new();

        assert_eq!(book.apply(Action::Load), vec![Effect::List]);

        let effects = book.apply(Action::Loaded(Ok(vec![
            customer("b", "Grace", "Hopper"),
            customer("a", "Ada", "Lovelace"),
            customer("c", "Alan", "Turing"),
        ])));

        assert!(effects.is_empty());
        assert_eq!(book.rows().count(), 3);
        assert_eq!(
            names(&book),
            vec![
                ("Grace".to_string(), "Hopper".to_string()),
                ("Ada".to_string(), "Lovelace".to_string()),
                ("Alan".to_string(), "Turing".to_string()),
            ]
        );
    }

    #[test]
    fn failed_load_reports_and_keeps_list_empty() {
        let mut book = CustomerBook::new();

        let effects = book.apply(Action::Loaded(Err(failure(Operation::ListCustomers))));

        assert_eq!(effects, vec![Effect::Report(failure(Operation::ListCustomers))]);
        assert!(book.customers().is_empty());
    }

    #[test]
    fn create_sends_draft_then_resets_and_refreshes_once() {
        let mut book = CustomerBook::new();
        book.apply(Action::EditDraft(Field::FirstName, "Ada".to_string()));
        book.apply(Action::EditDraft(Field::LastName, "Lovelace".to_string()));

        let effects = book.apply(Action::SubmitDraft);
        assert_eq!(
            effects,
            vec![Effect::Create(CustomerFields::new("Ada", "Lovelace"))]
        );

        let effects = book.apply(Action::Created(Ok(())));
        assert_eq!(effects, vec![Effect::List]);
        assert_eq!(book.draft(), &CustomerFields::default());

        // The refreshed list has no bearing on the reset draft.
        book.apply(Action::Loaded(Ok(Vec::new())));
        assert_eq!(book.draft(), &CustomerFields::default());
    }

    #[test]
    fn failed_create_keeps_draft_and_skips_refresh() {
        let mut book = CustomerBook::new();
        book.apply(Action::EditDraft(Field::FirstName, "Ada".to_string()));

        let effects = book.apply(Action::Created(Err(failure(Operation::CreateCustomers))));

        assert_eq!(effects, vec![Effect::Report(failure(Operation::CreateCustomers))]);
        assert_eq!(book.draft().first_name, "Ada");
    }

    #[test]
    fn delete_then_refresh() {
        let mut book = loaded(vec![customer("42", "Ada", "Lovelace")]);

        assert_eq!(
            book.apply(Action::Delete(CustomerId::from("42"))),
            vec![Effect::Delete(CustomerId::from("42"))]
        );
        assert_eq!(book.apply(Action::Deleted(Ok(()))), vec![Effect::List]);
    }

    #[test]
    fn failed_delete_keeps_stale_row_without_refresh() {
        let mut book = loaded(vec![customer("42", "Ada", "Lovelace")]);
        book.apply(Action::Delete(CustomerId::from("42")));

        let effects = book.apply(Action::Deleted(Err(failure(Operation::DeleteCustomers))));

        assert!(!effects.contains(&Effect::List));
        assert_eq!(book.customers()[0].id, CustomerId::from("42"));
        assert_eq!(book.rows().count(), 1);
    }

    #[test]
    fn selecting_another_row_discards_unsaved_edits() {
        let mut book = loaded(vec![
            customer("7", "Pat", "Smith"),
            customer("9", "Sam", "Jones"),
        ]);

        book.apply(Action::Select(CustomerId::from("7")));
        book.apply(Action::EditSelected(Field::FirstName, "Patricia".to_string()));
        book.apply(Action::Select(CustomerId::from("9")));

        assert_eq!(editor_ids(&book), vec![CustomerId::from("9")]);

        let effects = book.apply(Action::CommitEdit);
        assert_eq!(
            effects,
            vec![Effect::Update(UpdateCustomersInput {
                id: CustomerId::from("9"),
                fields: CustomerFields::new("Sam", "Jones"),
            })]
        );

        // Reselecting row 7 starts from the server copy again.
        book.apply(Action::Select(CustomerId::from("7")));
        assert_eq!(
            book.selection().map(|s| s.fields.first_name.as_str()),
            Some("Pat")
        );
    }

    #[test]
    fn editor_row_follows_its_customer() {
        let mut book = loaded(vec![
            customer("1", "Ada", "Lovelace"),
            customer("2", "Alan", "Turing"),
            customer("3", "Grace", "Hopper"),
        ]);
        book.apply(Action::Select(CustomerId::from("2")));

        let rows: Vec<_> = book.rows().collect();

        assert_eq!(rows.len(), 4);
        assert!(matches!(rows[1], Row::Customer(c) if c.id == CustomerId::from("2")));
        assert!(matches!(rows[2], Row::Editor(s) if s.id == CustomerId::from("2")));
        assert!(matches!(rows[3], Row::Customer(c) if c.id == CustomerId::from("3")));
    }

    #[test]
    fn commit_sends_only_id_and_names() {
        let mut book = loaded(vec![customer("7", "Pat", "Smith")]);
        book.apply(Action::Select(CustomerId::from("7")));
        book.apply(Action::EditSelected(Field::LastName, "Jones".to_string()));

        let effects = book.apply(Action::CommitEdit);

        let [Effect::Update(input)] = effects.as_slice() else {
            panic!("expected a single update, got {effects:?}");
        };
        assert_eq!(
            serde_json::to_value(input).ok(),
            Some(serde_json::json!({ "id": "7", "first_name": "Pat", "last_name": "Jones" }))
        );
    }

    #[test]
    fn commit_without_selection_is_noop() {
        let mut book = loaded(vec![customer("7", "Pat", "Smith")]);

        assert!(book.apply(Action::CommitEdit).is_empty());
    }

    #[test]
    fn successful_update_clears_selection_and_refreshes() {
        let mut book = loaded(vec![customer("7", "Pat", "Smith")]);
        book.apply(Action::Select(CustomerId::from("7")));

        let effects = book.apply(Action::Updated(CustomerId::from("7"), Ok(())));

        assert_eq!(effects, vec![Effect::List]);
        assert!(book.selection().is_none());
        assert!(editor_ids(&book).is_empty());
    }

    #[test]
    fn failed_update_keeps_edit_row_open() {
        let mut book = loaded(vec![customer("7", "Pat", "Smith")]);
        book.apply(Action::Select(CustomerId::from("7")));
        book.apply(Action::EditSelected(Field::FirstName, "Patricia".to_string()));

        let effects = book.apply(Action::Updated(
            CustomerId::from("7"),
            Err(failure(Operation::UpdateCustomers)),
        ));

        assert_eq!(effects, vec![Effect::Report(failure(Operation::UpdateCustomers))]);
        assert_eq!(
            book.selection().map(|s| s.fields.first_name.as_str()),
            Some("Patricia")
        );
    }

    #[test]
    fn update_success_keeps_newer_selection() {
        let mut book = loaded(vec![
            customer("7", "Pat", "Smith"),
            customer("9", "Sam", "Jones"),
        ]);
        book.apply(Action::Select(CustomerId::from("7")));
        book.apply(Action::CommitEdit);
        book.apply(Action::Select(CustomerId::from("9")));

        book.apply(Action::Updated(CustomerId::from("7"), Ok(())));

        assert_eq!(editor_ids(&book), vec![CustomerId::from("9")]);
    }

    #[test]
    fn selecting_unknown_id_is_ignored() {
        let mut book = loaded(vec![customer("7", "Pat", "Smith")]);
        book.apply(Action::Select(CustomerId::from("7")));

        book.apply(Action::Select(CustomerId::from("missing")));

        assert_eq!(editor_ids(&book), vec![CustomerId::from("7")]);
    }

    #[test]
    fn editing_without_selection_changes_nothing() {
        let mut book = loaded(vec![customer("7", "Pat", "Smith")]);

        book.apply(Action::EditSelected(Field::FirstName, "X".to_string()));

        assert!(book.selection().is_none());
        assert_eq!(book.customers()[0].first_name, "Pat");
    }
}
