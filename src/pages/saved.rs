use crate::audio::play_random_wow;
use crate::components::ui::{Button, ButtonSize, ButtonVariant, CardItem, CardList, Spinner};
use crate::models::Joke;
use crate::state::AppContext;
use crate::sync::{ChangeEvent, FocusTracker};
use crate::util::{confirm, share_message, share_text};
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dom::helpers::window_event_listener;

pub(crate) fn collection_summary(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} joke{plural} in your collection")
}

/// The saved collection, re-read from the store every time this view becomes
/// visible. Between those reloads the list is a snapshot.
///
/// `on_joke_removed` fires after a deletion has been written.
#[component]
pub fn SavedPage(#[prop(into)] on_joke_removed: Callback<ChangeEvent>) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let api = StoredValue::new(app_state.0.api_client.clone());
    let saved = StoredValue::new(app_state.0.saved.clone());

    let jokes: RwSignal<Vec<Joke>> = RwSignal::new(vec![]);
    let refreshing = RwSignal::new(false);
    // Id of the joke whose wow is being fetched.
    let audio_loading: RwSignal<Option<String>> = RwSignal::new(None);
    let focus = StoredValue::new(FocusTracker::default());

    let reload = move || {
        let saved = saved.get_value();
        spawn_local(async move {
            let loaded = saved.load().await;
            log::debug!("saved list reloaded: {} jokes", loaded.len());
            jokes.set(loaded);
        });
    };

    let on_visibility = move |visible: bool| {
        if focus.try_update_value(|t| t.observe(visible)).unwrap_or(false) {
            reload();
        }
    };

    // Navigated to.
    on_visibility(true);

    // Back from the background.
    let visibility_handle = window_event_listener(ev::visibilitychange, move |_ev: web_sys::Event| {
        on_visibility(!document().hidden());
    });
    let blur_handle = window_event_listener(ev::blur, move |_ev: web_sys::FocusEvent| on_visibility(false));
    let focus_handle = window_event_listener(ev::focus, move |_ev: web_sys::FocusEvent| on_visibility(true));
    on_cleanup(move || {
        visibility_handle.remove();
        blur_handle.remove();
        focus_handle.remove();
    });

    let on_refresh = move |_| {
        refreshing.set(true);
        let saved = saved.get_value();
        spawn_local(async move {
            jokes.set(saved.load().await);
            refreshing.set(false);
        });
    };

    let delete_joke = move |id: String| {
        if !confirm("Are you sure you want to remove this joke from your collection?") {
            return;
        }

        // Optimistic: the list does not wait for the write.
        jokes.update(|list| list.retain(|j| j.id != id));

        let saved = saved.get_value();
        spawn_local(async move {
            let mutation = saved.remove(&id).await;
            if !mutation.persisted {
                log::warn!("deletion of {id} will not survive a restart");
            }
            on_joke_removed.run(ChangeEvent::Removed(id));
        });
    };

    let share_joke = move |joke: Joke| {
        let message = share_message(&joke);
        spawn_local(async move {
            if let Err(e) = share_text(&message).await {
                log::warn!("failed to share joke {}: {e:?}", joke.id);
            }
        });
    };

    let play_wow = move |id: String| {
        audio_loading.set(Some(id));
        let api = api.get_value();
        spawn_local(async move {
            play_random_wow(&api).await;
            audio_loading.set(None);
        });
    };

    view! {
        <div class="mx-auto flex w-full max-w-md flex-col gap-4 px-4 pt-10">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold">"💾 Your Saved Jokes"</h1>
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Sm
                    attr:disabled=move || refreshing.get()
                    on:click=on_refresh
                >
                    <Show when=move || refreshing.get() fallback=|| view! { <span>"Refresh"</span> }>
                        <Spinner />
                    </Show>
                </Button>
            </div>

            <Show when=move || !jokes.get().is_empty() fallback=|| ().into_view()>
                <p class="text-sm text-muted-foreground">{move || collection_summary(jokes.get().len())}</p>
            </Show>

            <Show
                when=move || !jokes.get().is_empty()
                fallback=|| view! {
                    <div class="flex flex-col items-center gap-2 py-16 text-center">
                        <span class="text-5xl">"📭"</span>
                        <h2 class="text-lg font-semibold">"No Saved Jokes Yet!"</h2>
                        <p class="text-sm text-muted-foreground">
                            "Start collecting your favorite dad jokes by pressing the 🤩 button on the Home screen!"
                        </p>
                    </div>
                }
            >
                <CardList>
                    {move || {
                        jokes
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, joke)| {
                                let id_for_wow = joke.id.clone();
                                let id_for_delete = joke.id.clone();
                                let joke_for_share = joke.clone();
                                let playing_id = joke.id.clone();
                                let is_playing = Memo::new(move |_| {
                                    audio_loading.get().as_deref() == Some(playing_id.as_str())
                                });

                                view! {
                                    <CardItem>
                                        <div class="flex gap-3">
                                            <span class="font-semibold text-[#FF6B6B]">{format!("#{}", index + 1)}</span>
                                            <p class="flex-1">{joke.text}</p>
                                        </div>

                                        <div class="flex justify-end gap-2">
                                            <Button
                                                variant=ButtonVariant::Share
                                                size=ButtonSize::Icon
                                                attr:aria-label="Share"
                                                on:click=move |_| share_joke(joke_for_share.clone())
                                            >
                                                <svg
                                                    xmlns="http://www.w3.org/2000/svg"
                                                    width="20"
                                                    height="20"
                                                    viewBox="0 0 24 24"
                                                    fill="none"
                                                    stroke="currentColor"
                                                    stroke-width="2"
                                                    stroke-linecap="round"
                                                    stroke-linejoin="round"
                                                    aria-hidden="true"
                                                >
                                                    <circle cx="18" cy="5" r="3" />
                                                    <circle cx="6" cy="12" r="3" />
                                                    <circle cx="18" cy="19" r="3" />
                                                    <path d="m8.59 13.51 6.83 3.98" />
                                                    <path d="m15.41 6.51-6.82 3.98" />
                                                </svg>
                                            </Button>

                                            <Button
                                                variant=ButtonVariant::Success
                                                size=ButtonSize::Icon
                                                attr:aria-label="Wow"
                                                attr:disabled=move || is_playing.get()
                                                on:click=move |_| play_wow(id_for_wow.clone())
                                            >
                                                {move || if is_playing.get() { "🔊" } else { "🤩" }}
                                            </Button>

                                            <Button
                                                variant=ButtonVariant::Destructive
                                                size=ButtonSize::Icon
                                                attr:aria-label="Delete"
                                                on:click=move |_| delete_joke(id_for_delete.clone())
                                            >
                                                <svg
                                                    xmlns="http://www.w3.org/2000/svg"
                                                    width="20"
                                                    height="20"
                                                    viewBox="0 0 24 24"
                                                    fill="none"
                                                    stroke="currentColor"
                                                    stroke-width="2"
                                                    stroke-linecap="round"
                                                    stroke-linejoin="round"
                                                    aria-hidden="true"
                                                >
                                                    <path d="M3 6h18" />
                                                    <path d="M8 6V4h8v2" />
                                                    <path d="M19 6l-1 14H6L5 6" />
                                                    <path d="M10 11v6" />
                                                    <path d="M14 11v6" />
                                                </svg>
                                            </Button>
                                        </div>
                                    </CardItem>
                                }
                            })
                            .collect_view()
                    }}
                </CardList>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_pluralizes() {
        assert_eq!(collection_summary(1), "1 joke in your collection");
        assert_eq!(collection_summary(3), "3 jokes in your collection");
    }
}
