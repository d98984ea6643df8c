//! Key-value persistence for comparison state.
//!
//! Comparison state is small and single-user. A store keeps raw bytes under
//! string keys; failures are logged and treated as misses, never as errors,
//! because losing a saved comparison is preferable to refusing to run.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Byte store keyed by name.
pub trait ComparisonStore: Send + Sync {
    /// Read the value stored under `key`, or `None` if missing or unreadable.
    fn load(&self, key: &str) -> Option<Vec<u8>>;

    /// Store `value` under `key`, replacing any previous value.
    fn save(&self, key: &str, value: &[u8]);

    /// Delete the value under `key`. Missing keys are ignored.
    fn remove(&self, key: &str);
}

/// Store that keeps nothing. Every `load` misses.
pub struct NullStore;

impl ComparisonStore for NullStore {
    fn load(&self, _key: &str) -> Option<Vec<u8>> {
        None
    }

    fn save(&self, _key: &str, _value: &[u8]) {}

    fn remove(&self, _key: &str) {}
}

/// Outcome of reading a JSON value from a store.
#[derive(Debug, PartialEq)]
pub enum JsonLoad<T> {
    /// Nothing stored under the key.
    Missing,
    /// Stored bytes are not valid JSON for `T`.
    Corrupt,
    /// Decoded value.
    Found(T),
}

/// Typed JSON helpers for every [`ComparisonStore`].
pub trait ComparisonStoreExt: ComparisonStore {
    /// Read and decode a JSON value, distinguishing missing from corrupt data.
    fn load_json<T: DeserializeOwned>(&self, key: &str) -> JsonLoad<T> {
        let Some(bytes) = self.load(key) else {
            return JsonLoad::Missing;
        };
        match serde_json::from_slice(&bytes) {
            Ok(value) => JsonLoad::Found(value),
            Err(e) => {
                tracing::warn!(key, "stored comparison is not valid JSON: {e}");
                JsonLoad::Corrupt
            }
        }
    }

    /// Encode and store a JSON value. Does nothing if encoding fails.
    fn save_json<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_vec(value) {
            Ok(bytes) => self.save(key, &bytes),
            Err(e) => tracing::warn!(key, "failed to encode comparison: {e}"),
        }
    }
}

impl<S: ComparisonStore + ?Sized> ComparisonStoreExt for S {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_store_always_misses() {
        let store = NullStore;
        assert_eq!(store.load("compareMonitors"), None);

        store.save("compareMonitors", b"[]");
        assert_eq!(store.load("compareMonitors"), None);
        assert_eq!(store.load_json::<Vec<String>>("compareMonitors"), JsonLoad::Missing);
    }
}
