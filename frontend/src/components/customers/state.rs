//! Component state for the customer table.
//!
//! All record, draft and selection data lives in the shared `CustomerBook`;
//! the component only adds the wiring it needs in the browser.

use std::rc::Rc;

use common::store::CustomerBook;

use crate::api::Api;

pub struct CustomerTable {
    /// List, draft and edit buffer. Mutated only through `CustomerBook::apply`.
    pub book: CustomerBook,

    /// GraphQL facade, present once the configuration has been loaded.
    /// Shared with in-flight requests, which outlive a single `update` call.
    pub api: Option<Rc<Api>>,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

impl CustomerTable {
    pub fn new() -> Self {
        Self {
            book: CustomerBook::new(),
            api: None,
            loaded: false,
        }
    }
}
