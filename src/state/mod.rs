use crate::api::ApiClient;
use crate::collection::{AddOutcome, SavedJokes};
use crate::config::EnvConfig;
use crate::storage::{KeyValueStore, LocalStorage};
use crate::sync::ChangeBridge;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone)]
pub(crate) struct AppState {
    pub api_client: ApiClient,

    /// Serialized access to the persisted collection; every screen goes through it.
    pub saved: SavedJokes<LocalStorage>,

    /// Change notifications from the screens that mutate the collection.
    pub bridge: ChangeBridge,

    /// Saved-tab badge. Only ever re-derived from the store.
    pub saved_count: RwSignal<usize>,
}

impl AppState {
    pub fn new(config: &EnvConfig) -> Self {
        let state = Self {
            api_client: ApiClient::from_config(config),
            saved: SavedJokes::new(LocalStorage),
            bridge: ChangeBridge::new(),
            saved_count: RwSignal::new(0),
        };

        // Capturing `state` itself would make the bridge own its own subscriber list.
        let count = state.saved_count;
        refresh_on_change(&state.bridge, state.saved.clone(), move |saved| {
            refresh_saved_count(saved.clone(), count)
        });

        state
    }

    pub fn refresh_saved_count(&self) {
        refresh_saved_count(self.saved.clone(), self.saved_count);
    }
}

/// Size of the persisted collection, re-read from the store.
pub(crate) async fn saved_count<S: KeyValueStore>(saved: &SavedJokes<S>) -> usize {
    saved.load().await.len()
}

/// Run `refresh` against the store on every change notification, whatever
/// the change was.
fn refresh_on_change<S, F>(bridge: &ChangeBridge, saved: SavedJokes<S>, refresh: F)
where
    S: Send + Sync + 'static,
    F: Fn(&SavedJokes<S>) + Send + Sync + 'static,
{
    bridge.subscribe(move |_| refresh(&saved));
}

fn refresh_saved_count(saved: SavedJokes<LocalStorage>, count: RwSignal<usize>) {
    spawn_local(async move {
        count.set(saved_count(&saved).await);
    });
}

#[derive(Clone)]
pub(crate) struct AppContext(pub AppState);

/// Dismissible message shown over the home screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Notice {
    Saved,
    AlreadySaved,
    FetchFailed,
}

impl Notice {
    pub fn for_add(outcome: AddOutcome) -> Self {
        match outcome {
            AddOutcome::Added => Notice::Saved,
            AddOutcome::AlreadyPresent => Notice::AlreadySaved,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Notice::Saved => "🎉 Wow!",
            Notice::AlreadySaved => "Already Saved!",
            Notice::FetchFailed => "Error",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Notice::Saved => "Joke saved to your collection!\nOwen Wilson says \"Wow!\"",
            Notice::AlreadySaved => "This joke is already in your collection! 😄",
            Notice::FetchFailed => "Failed to fetch joke. Please try again.",
        }
    }

    pub fn is_error(self) -> bool {
        matches!(self, Notice::FetchFailed)
    }

    /// Whether the notice offers a "Next Joke" action.
    pub fn offers_next(self) -> bool {
        matches!(self, Notice::Saved)
    }
}
