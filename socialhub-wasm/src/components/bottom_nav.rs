use leptos::prelude::*;
use socialhub_core::{NavItem, Tab};

use crate::components::icon::IconGlyph;
use crate::style::nav_item_class;

#[component]
pub(crate) fn BottomNav(items: Signal<Vec<NavItem>>, on_select: Callback<Tab>) -> impl IntoView {
    view! {
        <nav class="bottom-nav">
            <div class="bar">
                {move || {
                    items
                        .get()
                        .into_iter()
                        .map(|item| {
                            let tab = item.tab;
                            view! {
                                <button
                                    class={nav_item_class(item.active)}
                                    on:click=move |_| on_select.run(tab)
                                >
                                    <IconGlyph icon={item.icon} />
                                    <span class="nav-label">{item.label}</span>
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </nav>
    }
}
