mod jokes;

pub(crate) use jokes::JokeStore;
#[cfg(test)]
pub(crate) use jokes::SAVED_JOKES_KEY;

use crate::error::{StoreError, StoreResult};

/// Asynchronous key-value surface the saved collection is persisted through.
///
/// Values are opaque strings; encoding is the caller's concern.
#[allow(async_fn_in_trait)]
pub(crate) trait KeyValueStore {
    /// `Ok(None)` when the key has never been written.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Fully overwrites the previous value.
    async fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

/// Browser `localStorage`, resolved on every call.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct LocalStorage;

fn local_storage() -> StoreResult<web_sys::Storage> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StoreError::Unavailable)
}

fn js_error(e: wasm_bindgen::JsValue) -> StoreError {
    StoreError::Persistence(e.as_string().unwrap_or_else(|| format!("{e:?}")))
}

impl KeyValueStore for LocalStorage {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        local_storage()?.get_item(key).map_err(js_error)
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        local_storage()?.set_item(key, value).map_err(js_error)
    }
}

#[cfg(test)]
pub(crate) use memory::MemoryStore;

#[cfg(test)]
mod memory {
    use super::KeyValueStore;
    use crate::error::{StoreError, StoreResult};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    /// In-process store with injectable read and write failures.
    #[derive(Clone, Debug, Default)]
    pub(crate) struct MemoryStore {
        entries: Arc<Mutex<HashMap<String, String>>>,
        fail_reads: Arc<AtomicBool>,
        fail_writes: Arc<AtomicBool>,
    }

    impl MemoryStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_entry(key: &str, value: &str) -> Self {
            let s = Self::new();
            s.entries
                .lock()
                .expect("memory store lock")
                .insert(key.to_string(), value.to_string());
            s
        }

        pub fn set_fail_reads(&self, fail: bool) {
            self.fail_reads.store(fail, Ordering::SeqCst);
        }

        pub fn set_fail_writes(&self, fail: bool) {
            self.fail_writes.store(fail, Ordering::SeqCst);
        }

        pub fn raw(&self, key: &str) -> Option<String> {
            self.entries.lock().expect("memory store lock").get(key).cloned()
        }
    }

    impl KeyValueStore for MemoryStore {
        async fn get(&self, key: &str) -> StoreResult<Option<String>> {
            if self.fail_reads.load(Ordering::SeqCst) {
                return Err(StoreError::Persistence("storage busy".to_string()));
            }
            let entries = self
                .entries
                .lock()
                .map_err(|_| StoreError::Persistence("poisoned".to_string()))?;
            Ok(entries.get(key).cloned())
        }

        async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(StoreError::Persistence("quota exceeded".to_string()));
            }
            let mut entries = self
                .entries
                .lock()
                .map_err(|_| StoreError::Persistence("poisoned".to_string()))?;
            entries.insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::models::Joke;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_local_storage_roundtrip_saved_jokes() {
        let store = JokeStore::new(LocalStorage);
        store.write(&[]).await.expect("should clear");
        assert!(store.read().await.expect("should read").is_empty());

        let jokes = vec![Joke::new("j1", "Why did..."), Joke::new("j2", "I used to...")];
        store.write(&jokes).await.expect("should write");
        assert_eq!(store.read().await.expect("should read"), jokes);

        let raw = LocalStorage
            .get(SAVED_JOKES_KEY)
            .await
            .expect("should read raw")
            .expect("key should be set");
        assert!(raw.contains(r#""joke":"Why did...""#));
    }
}
