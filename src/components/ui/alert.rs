use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Alert, div, "relative w-full rounded-xl border bg-white px-4 py-3 text-sm shadow-lg"}
    clx! {AlertTitle, h4, "mb-1 font-semibold tracking-tight leading-none"}
    clx! {AlertDescription, p, "whitespace-pre-line text-sm [&_p]:leading-relaxed"}
}

#[allow(unused_imports)]
pub use components::*;
