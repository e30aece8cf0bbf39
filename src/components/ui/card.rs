use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Card, div, "bg-white text-foreground flex flex-col gap-3 rounded-2xl border border-[#F0E6DA] p-5 shadow-sm"}
    clx! {CardContent, div, "text-base leading-relaxed"}
    clx! {CardList, ul, "flex flex-col gap-3"}
    clx! {CardItem, li, "flex flex-col gap-3 rounded-2xl border border-[#F0E6DA] bg-white p-4 shadow-sm"}
}

#[allow(unused_imports)]
pub use components::*;
