// Core modules implementing the record store, query engine, and error modeling.
pub mod error;
pub mod query;
pub mod record;
pub mod store;
