use crate::audio::play_random_wow;
use crate::collection::AddOutcome;
use crate::components::ui::{
    Alert, AlertDescription, AlertTitle, Button, ButtonSize, ButtonVariant, Card, CardContent,
    Spinner,
};
use crate::models::Joke;
use crate::state::{AppContext, Notice};
use crate::sync::ChangeEvent;
use crate::util::{vibrate, VIBRATE_THUMBS_DOWN, VIBRATE_WOW};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Fetch, rate and save jokes.
///
/// `on_joke_saved` fires after a new joke has been written to the store.
#[component]
pub fn HomePage(#[prop(into)] on_joke_saved: Callback<ChangeEvent>) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let api = StoredValue::new(app_state.0.api_client.clone());
    let saved = StoredValue::new(app_state.0.saved.clone());

    let current_joke: RwSignal<Option<Joke>> = RwSignal::new(None);
    let loading = RwSignal::new(false);
    let audio_loading = RwSignal::new(false);
    let notice: RwSignal<Option<Notice>> = RwSignal::new(None);

    // This screen's own snapshot of the collection size.
    let saved_count = RwSignal::new(0usize);

    let fetch_joke = move || {
        if loading.get_untracked() {
            return;
        }
        loading.set(true);

        let api = api.get_value();
        spawn_local(async move {
            match api.fetch_random_joke().await {
                Ok(joke) => current_joke.set(Some(joke)),
                Err(e) => {
                    log::warn!("failed to fetch joke: {e}");
                    notice.set(Some(Notice::FetchFailed));
                }
            }
            loading.set(false);
        });
    };

    Effect::new(move |_| {
        fetch_joke();

        let saved = saved.get_value();
        spawn_local(async move {
            saved_count.set(saved.load().await.len());
        });
    });

    let on_thumbs_down = move |_| {
        vibrate(VIBRATE_THUMBS_DOWN);
        fetch_joke();
    };

    let on_wow = move |_| {
        let Some(joke) = current_joke.get_untracked() else {
            return;
        };
        if audio_loading.get_untracked() {
            return;
        }
        vibrate(VIBRATE_WOW);
        audio_loading.set(true);

        let saved = saved.get_value();
        let api = api.get_value();
        spawn_local(async move {
            let mutation = saved.add(joke.clone()).await;
            saved_count.set(mutation.collection.len());
            if !mutation.persisted {
                log::warn!("joke {} will not survive a restart", joke.id);
            }

            if mutation.outcome == AddOutcome::Added {
                on_joke_saved.run(ChangeEvent::Added(joke));
                play_random_wow(&api).await;
            }

            audio_loading.set(false);
            notice.set(Some(Notice::for_add(mutation.outcome)));
        });
    };

    let on_next = move |_| {
        notice.set(None);
        fetch_joke();
    };

    view! {
        <div class="mx-auto flex w-full max-w-md flex-col items-center gap-5 px-4 pt-10">
            <h1 class="text-2xl font-bold">"🤣 WowDad Jokes 🤣"</h1>
            <p class="text-sm text-muted-foreground">"Jokes that will make your kids say WOW!"</p>

            <Button attr:disabled=move || loading.get() on:click=move |_| fetch_joke()>
                {move || if loading.get() { "Loading..." } else { "Get Dad Joke!" }}
            </Button>

            <Card class="w-full min-h-40 items-center justify-center text-center">
                <CardContent>
                    {move || {
                        if loading.get() {
                            view! {
                                <div class="flex flex-col items-center gap-2">
                                    <Spinner class="size-8 text-[#FF6B6B]" />
                                    <span>"Loading dad joke..."</span>
                                </div>
                            }
                            .into_any()
                        } else if let Some(joke) = current_joke.get() {
                            view! { <p class="animate-in fade-in zoom-in-95">{joke.text}</p> }.into_any()
                        } else {
                            view! { <p>"Tap the button to get a dad joke! 👆"</p> }.into_any()
                        }
                    }}
                </CardContent>
            </Card>

            <Show when=move || current_joke.get().is_some() fallback=|| ().into_view()>
                <div class="flex items-center gap-10">
                    <Button
                        variant=ButtonVariant::Destructive
                        size=ButtonSize::Rating
                        attr:aria-label="Thumbs down"
                        on:click=on_thumbs_down
                    >
                        <svg
                            xmlns="http://www.w3.org/2000/svg"
                            width="32"
                            height="32"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="currentColor"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            class="size-8"
                            aria-hidden="true"
                        >
                            <path d="M17 14V2" />
                            <path d="M9 18.12 10 14H4.17a2 2 0 0 1-1.92-2.56l2.33-8A2 2 0 0 1 6.5 2H20a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2h-2.76a2 2 0 0 0-1.79 1.11L12 22a3.13 3.13 0 0 1-3-3.88Z" />
                        </svg>
                    </Button>

                    <Button
                        variant=ButtonVariant::Success
                        size=ButtonSize::Rating
                        attr:aria-label="Wow"
                        attr:disabled=move || audio_loading.get()
                        on:click=on_wow
                    >
                        <Show when=move || audio_loading.get() fallback=|| view! { <span>"🤩"</span> }>
                            <Spinner class="size-6" />
                        </Show>
                    </Button>
                </div>
            </Show>

            <div class="rounded-full bg-white px-4 py-2 text-sm shadow-sm">
                {move || format!("💾 Saved Jokes: {}", saved_count.get())}
            </div>

            {move || {
                notice.get().map(|n| {
                    let title_class = if n.is_error() { "text-destructive" } else { "" };
                    view! {
                        <div class="fixed inset-x-4 bottom-24 z-10 mx-auto max-w-md">
                            <Alert>
                                <AlertTitle class=title_class>{n.title()}</AlertTitle>
                                <AlertDescription>{n.message()}</AlertDescription>
                                <div class="mt-3 flex justify-end gap-2">
                                    <Button
                                        variant=ButtonVariant::Ghost
                                        size=ButtonSize::Sm
                                        on:click=move |_| notice.set(None)
                                    >
                                        "OK"
                                    </Button>
                                    <Show when=move || n.offers_next() fallback=|| ().into_view()>
                                        <Button size=ButtonSize::Sm on:click=on_next>
                                            "Next Joke"
                                        </Button>
                                    </Show>
                                </div>
                            </Alert>
                        </div>
                    }
                })
            }}
        </div>
    }
}
