//! Light/dark switch shared by the navbar and the main-layout sidebar.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::dark_mode;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle = move |_| {
        let next = dark_mode::toggle(ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    view! {
        <button
            class="theme-toggle"
            on:click=on_toggle
            title=move || ui.get().theme_toggle_label().1
            aria-label=move || ui.get().theme_toggle_label().1
        >
            <span class="theme-toggle__icon">{move || ui.get().theme_toggle_label().0}</span>
        </button>
    }
}
