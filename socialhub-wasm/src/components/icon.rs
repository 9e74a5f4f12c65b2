use leptos::prelude::*;
use socialhub_core::Icon;

#[component]
pub(crate) fn IconGlyph(icon: Icon) -> impl IntoView {
    view! {
        <span class="icon" aria-hidden="true">
            {icon.glyph()}
        </span>
    }
}
