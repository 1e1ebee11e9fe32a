// Cache-aware loader for the database text.
// Serves the local copy while fresh, refreshing from the remote once a day.

use crate::cache::{CACHE_EXPIRY, CacheStorage};
use crate::error::Result;

use super::client::RemoteSource;

/// Return the database text, from cache when fresh, otherwise from the remote.
///
/// A successful fetch overwrites the cached copy in full. A fetch failure
/// surfaces to the caller; a stale copy is never silently substituted.
pub async fn load(source: &impl RemoteSource, cache: &impl CacheStorage) -> Result<String> {
    if let Some(age) = cache.age()? {
        if age < CACHE_EXPIRY {
            if let Some(text) = cache.read()? {
                tracing::debug!(age_secs = age.as_secs(), "serving cached database");
                return Ok(text);
            }
        } else {
            tracing::debug!(age_secs = age.as_secs(), "cached database expired");
        }
    }

    let text = source.fetch().await?;
    cache.write(&text)?;
    Ok(text)
}
