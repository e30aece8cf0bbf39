use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Badge, span, "absolute -right-3 -top-1 min-w-5 rounded-full bg-[#FF3B30] px-1.5 text-center text-[11px] font-semibold leading-5 text-white"}
}

pub use components::*;

/// Text for the tab badge; hidden while the collection is empty.
pub(crate) fn badge_label(count: usize) -> Option<String> {
    match count {
        0 => None,
        1..=99 => Some(count.to_string()),
        _ => Some("99+".to_string()),
    }
}
