use super::KeyValueStore;
use crate::error::{StoreError, StoreResult};
use crate::models::Joke;

pub(crate) const SAVED_JOKES_KEY: &str = "saved_jokes";

/// Typed access to the saved collection: a JSON array of `{id, joke}` under
/// [`SAVED_JOKES_KEY`].
///
/// There is no version tag in the stored value. Unknown record fields are
/// ignored on read, so additive changes only need `#[serde(default)]`.
#[derive(Clone, Debug)]
pub(crate) struct JokeStore<S> {
    backend: S,
}

impl<S: KeyValueStore> JokeStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// An absent (or blank) key is an empty collection.
    pub async fn read(&self) -> StoreResult<Vec<Joke>> {
        match self.backend.get(SAVED_JOKES_KEY).await? {
            Some(raw) if !raw.trim().is_empty() => decode(&raw),
            _ => Ok(Vec::new()),
        }
    }

    /// Read path for read-modify-write cycles. An unreadable value starts a
    /// fresh collection; a failed read is returned so nothing gets overwritten.
    pub async fn read_for_update(&self) -> StoreResult<Vec<Joke>> {
        match self.read().await {
            Err(e @ StoreError::Deserialization(_)) => {
                log::warn!("saved jokes are unreadable, treating as empty: {e}");
                Ok(Vec::new())
            }
            other => other,
        }
    }

    /// Total read path: any failure is logged and reads as empty.
    pub async fn read_or_empty(&self) -> Vec<Joke> {
        match self.read_for_update().await {
            Ok(jokes) => jokes,
            Err(e) => {
                log::error!("failed to load saved jokes: {e}");
                Vec::new()
            }
        }
    }

    pub async fn write(&self, jokes: &[Joke]) -> StoreResult<()> {
        let json = encode(jokes)?;
        self.backend.set(SAVED_JOKES_KEY, &json).await
    }
}

pub(crate) fn encode(jokes: &[Joke]) -> StoreResult<String> {
    Ok(serde_json::to_string(jokes)?)
}

pub(crate) fn decode(raw: &str) -> StoreResult<Vec<Joke>> {
    Ok(serde_json::from_str(raw)?)
}
