use leptos::prelude::*;
use socialhub_core::avatar_initial;

use crate::style::avatar_class;

/// Картинка с буквой-заглушкой под ней: если URL не загрузится, видна буква.
#[component]
pub(crate) fn Avatar(
    #[prop(into)] src: String,
    #[prop(into)] name: String,
    #[prop(default = "md")] size: &'static str,
) -> impl IntoView {
    let initial = avatar_initial(&name);

    view! {
        <span class={avatar_class(size)}>
            <span class="avatar-fallback">{initial}</span>
            <img src=src alt=name />
        </span>
    }
}
