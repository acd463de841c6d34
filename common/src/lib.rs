//! Shared, platform-independent core of the customer manager.
//!
//! Everything that decides behaviour lives here so it can be exercised
//! without a browser: the record model, the GraphQL documents, the API
//! facade, runtime configuration and the UI store driven by the frontend.

pub mod api;
pub mod config;
pub mod error;
pub mod graphql;
pub mod model;
pub mod store;
