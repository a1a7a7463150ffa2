//! Time-bounded memoization of assembled aggregates.
//!
//! Keys are colon-joined (dataset kind, period) parts. There is no
//! background sweep or capacity bound; the key space is five dataset kinds
//! times a handful of periods, and stale entries are evicted on read.

use chrono::{DateTime, Duration, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// Default time-to-live for cached aggregates: 30 minutes.
pub fn default_ttl() -> Duration {
    Duration::minutes(30)
}

const KEY_SEPARATOR: &str = ":";

struct CacheEntry {
    payload: Value,
    expires_at: DateTime<Utc>,
}

/// In-memory TTL cache for assembled aggregates.
///
/// Payloads are stored as JSON values so one cache instance covers all
/// five aggregate shapes.
#[derive(Default)]
pub struct McpCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl McpCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached payload for `key`, if present and not expired.
    ///
    /// An expired entry is evicted as a side effect and reads as absent.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let mut entries = self.entries.lock().unwrap();
        let entry = entries.get(key)?;
        if Utc::now() > entry.expires_at {
            entries.remove(key);
            return None;
        }
        serde_json::from_value(entry.payload.clone()).ok()
    }

    /// Store `payload` under `key` with the default 30-minute TTL.
    pub fn set<T: Serialize>(&self, key: &str, payload: &T) {
        self.set_with_ttl(key, payload, default_ttl());
    }

    /// Store `payload` under `key`, overwriting any existing entry and
    /// resetting its expiry to now + `ttl`.
    pub fn set_with_ttl<T: Serialize>(&self, key: &str, payload: &T, ttl: Duration) {
        let payload = match serde_json::to_value(payload) {
            Ok(value) => value,
            // Aggregates are plain data and always serialize; a failure here
            // just means the entry is not cached.
            Err(_) => return,
        };
        let entry = CacheEntry {
            payload,
            expires_at: Utc::now() + ttl,
        };
        self.entries.lock().unwrap().insert(key.to_string(), entry);
    }

    /// Drop all entries. Used by tests and forced refreshes.
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }

    /// Number of live entries, counting not-yet-evicted stale ones.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Join key parts with `:`, skipping absent ones.
pub fn build_key(parts: &[Option<&str>]) -> String {
    parts
        .iter()
        .flatten()
        .copied()
        .collect::<Vec<_>>()
        .join(KEY_SEPARATOR)
}
