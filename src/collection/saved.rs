use super::{remove, try_add, AddOutcome};
use crate::models::Joke;
use crate::storage::{JokeStore, KeyValueStore};
use futures::lock::Mutex;
use std::sync::Arc;

/// Result of one read-modify-write cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Mutation<O> {
    /// The collection after the mutation. Authoritative for the caller's
    /// session even when `persisted` is false.
    pub collection: Vec<Joke>,
    pub outcome: O,
    /// False when the write was rejected; the change is lost on restart.
    pub persisted: bool,
}

/// Single owner of the saved collection's read-modify-write cycles.
///
/// Every `load`/`add`/`remove` waits for its turn, so two mutations issued
/// back to back from different screens can never clobber each other: the
/// second one always reads what the first one wrote.
pub(crate) struct SavedJokes<S> {
    store: Arc<JokeStore<S>>,
    turn: Arc<Mutex<()>>,
}

impl<S> Clone for SavedJokes<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            turn: Arc::clone(&self.turn),
        }
    }
}

impl<S: KeyValueStore> SavedJokes<S> {
    pub fn new(backend: S) -> Self {
        Self {
            store: Arc::new(JokeStore::new(backend)),
            turn: Arc::new(Mutex::new(())),
        }
    }

    /// Current persisted collection; never fails (see `JokeStore::read_or_empty`).
    pub async fn load(&self) -> Vec<Joke> {
        let _turn = self.turn.lock().await;
        self.store.read_or_empty().await
    }

    /// A failed read skips the write: the stored collection is left as is and
    /// the candidate only lives in the returned collection.
    pub async fn add(&self, joke: Joke) -> Mutation<AddOutcome> {
        let _turn = self.turn.lock().await;

        let current = match self.store.read_for_update().await {
            Ok(current) => current,
            Err(e) => {
                log::error!("failed to load saved jokes, not saving {}: {e}", joke.id);
                let (collection, outcome) = try_add(Vec::new(), joke);
                return Mutation {
                    collection,
                    outcome,
                    persisted: false,
                };
            }
        };
        let (collection, outcome) = try_add(current, joke);
        let persisted = match outcome {
            AddOutcome::Added => self.persist(&collection).await,
            AddOutcome::AlreadyPresent => true,
        };

        Mutation {
            collection,
            outcome,
            persisted,
        }
    }

    /// `outcome` is true when a joke was actually dropped. A failed read
    /// removes nothing.
    pub async fn remove(&self, id: &str) -> Mutation<bool> {
        let _turn = self.turn.lock().await;

        let current = match self.store.read_for_update().await {
            Ok(current) => current,
            Err(e) => {
                log::error!("failed to load saved jokes, not removing {id}: {e}");
                return Mutation {
                    collection: Vec::new(),
                    outcome: false,
                    persisted: false,
                };
            }
        };
        let before = current.len();
        let collection = remove(current, id);
        let removed = collection.len() != before;
        let persisted = if removed {
            self.persist(&collection).await
        } else {
            true
        };

        Mutation {
            collection,
            outcome: removed,
            persisted,
        }
    }

    async fn persist(&self, jokes: &[Joke]) -> bool {
        match self.store.write(jokes).await {
            Ok(()) => true,
            Err(e) => {
                // No retry: the in-memory collection stays authoritative.
                log::error!("failed to persist {} saved jokes: {e}", jokes.len());
                false
            }
        }
    }
}
