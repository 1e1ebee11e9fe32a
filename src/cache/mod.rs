// Cache module for the local database mirror.
// One file in the working directory, reused for a day before refresh.

pub mod store;

pub use store::{CACHE_EXPIRY, CacheStorage, FileCache};
