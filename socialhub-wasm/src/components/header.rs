use leptos::prelude::*;
use socialhub_core::{Action, Header, Icon};

use crate::components::icon::IconGlyph;

#[component]
pub(crate) fn AppHeader(header: Signal<Header>, on_action: Callback<Action>) -> impl IntoView {
    view! {
        <header class="app-header">
            <div class="bar">
                <h1 class="brand">{move || header.get().title}</h1>
                <div class="header-actions">
                    // Поиск не реализован, кнопка только для вида.
                    <button class="icon-button">
                        <IconGlyph icon=Icon::Search />
                    </button>
                    <button
                        class="icon-button bell"
                        on:click=move |_| on_action.run(Header::bell_action())
                    >
                        <IconGlyph icon=Icon::Bell />
                        <span class="badge">{move || header.get().notification_badge}</span>
                    </button>
                </div>
            </div>
        </header>
    }
}
