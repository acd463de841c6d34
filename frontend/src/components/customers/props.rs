//! Defines the properties for the `CustomerTable` component.

use yew::prelude::*;

/// Properties for the `CustomerTable`.
#[derive(Properties, PartialEq, Clone)]
pub struct CustomerTableProps {
    /// Location of the generated endpoint configuration (`aws-exports.json`).
    ///
    /// Fetched once on the first render. Until it has been loaded no request
    /// can be sent, so the table stays empty if the file is missing or invalid.
    #[prop_or_else(|| AttrValue::from("aws-exports.json"))]
    pub config_path: AttrValue,
}
