// Database module.
// Remote fetch, cache-aware loading, and record filtering for the UMU database.

pub mod client;
pub mod loader;
pub mod records;

pub use client::{DATABASE_URL, DatabaseClient, RemoteSource};
pub use loader::load;
pub use records::{Criteria, Record, SEARCH_FIELDS, filter, normalize_field};
