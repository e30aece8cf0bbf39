use crate::components::ui::{badge_label, Badge};
use crate::config::EnvConfig;
use crate::pages::{HomePage, SavedPage};
use crate::state::{AppContext, AppState};
use crate::sync::ChangeEvent;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;

#[component]
pub fn App(config: EnvConfig) -> impl IntoView {
    let state = AppState::new(&config);
    state.refresh_saved_count();

    let bridge = state.bridge.clone();
    let saved_count = state.saved_count;
    provide_context(AppContext(state));

    // Screens report their writes here; the badge re-reads the store.
    let on_change = Callback::new(move |ev: ChangeEvent| bridge.notify(&ev));

    // IMPORTANT:
    // - Leptos CSR requires the `csr` feature on `leptos`.
    // - router hooks require a <Router> context.
    view! {
        <Router>
            <div class="flex min-h-screen flex-col bg-[#FFF8F0] text-[#2F3542]">
                <main class="flex-1 pb-24">
                    <Routes fallback=|| view! { <div class="px-4 py-8 text-xs text-muted-foreground">"Not found"</div> }>
                        <Route path=path!("") view=move || view! { <HomePage on_joke_saved=on_change /> } />
                        <Route path=path!("saved") view=move || view! { <SavedPage on_joke_removed=on_change /> } />
                    </Routes>
                </main>
                <TabBar saved_count=saved_count />
            </div>
        </Router>
    }
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "flex flex-1 flex-col items-center justify-center gap-0.5 text-xs text-[#FF6B6B]"
    } else {
        "flex flex-1 flex-col items-center justify-center gap-0.5 text-xs text-[#8E8E93]"
    }
}

#[component]
fn TabBar(saved_count: RwSignal<usize>) -> impl IntoView {
    let location = use_location();
    let on_saved = move || location.pathname.get().starts_with("/saved");

    view! {
        <nav class="fixed inset-x-0 bottom-0 flex h-[60px] border-t border-[#E0E0E0] bg-[#FFF8F0] py-[5px]">
            <a href="/" class=move || tab_class(!on_saved())>
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    width="24"
                    height="24"
                    viewBox="0 0 24 24"
                    fill="currentColor"
                    aria-hidden="true"
                >
                    <path d="M10 20v-6h4v6h5v-8h3L12 3 2 12h3v8z" />
                </svg>
                <span>"Dad Jokes"</span>
            </a>

            <a href="/saved" class=move || tab_class(on_saved())>
                <span class="relative">
                    <svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="currentColor"
                        aria-hidden="true"
                    >
                        <path d="M12 21.35l-1.45-1.32C5.4 15.36 2 12.28 2 8.5 2 5.42 4.42 3 7.5 3c1.74 0 3.41.81 4.5 2.09C13.09 3.81 14.76 3 16.5 3 19.58 3 22 5.42 22 8.5c0 3.78-3.4 6.86-8.55 11.54L12 21.35z" />
                    </svg>
                    {move || badge_label(saved_count.get()).map(|label| view! { <Badge>{label}</Badge> })}
                </span>
                <span>"Saved"</span>
            </a>
        </nav>
    }
}
