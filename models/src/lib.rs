//! Domain models for osstatus lookups.
//!
//! Pure data: the record shape the lookup service returns, the platform
//! filter, and the query a command line is turned into. No I/O lives here;
//! `osstatus-core` fetches and formats these values.

pub mod error;
pub mod error_record;
pub mod lookup_query;
pub mod platform;

#[cfg(test)]
mod tests;

pub use common::ErrorLocation;
pub use error::model_error::ModelError;
pub use error_record::ErrorRecord;
pub use lookup_query::LookupQuery;
pub use lookup_query::builder::LookupQueryBuilder;
pub use platform::Platform;
