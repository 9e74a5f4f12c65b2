use leptos::prelude::*;
use socialhub_core::{Action, Panel, Tab};

use crate::components::bottom_nav::BottomNav;
use crate::components::create_panel::CreatePanel;
use crate::components::feed_panel::FeedPanel;
use crate::components::friends_panel::FriendsPanel;
use crate::components::header::AppHeader;
use crate::components::notifications_panel::NotificationsPanel;
use crate::components::profile_panel::ProfilePanel;
use crate::state::AppState;

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();
    let screen = state.screen();

    let on_action = Callback::new(move |action: Action| state.dispatch(action));
    let on_select = Callback::new(move |tab: Tab| state.select_tab(tab));
    let on_like = Callback::new(move |post_id: i64| state.toggle_like(post_id));

    let header = Signal::derive(move || screen.with(|s| s.header));
    let nav = Signal::derive(move || screen.with(|s| s.nav.clone()));

    let panel = move || match screen.with(|s| s.panel.clone()) {
        Panel::Feed(feed) => view! { <FeedPanel feed=feed on_like=on_like /> }.into_any(),
        Panel::Friends(friends) => view! { <FriendsPanel friends=friends /> }.into_any(),
        Panel::Create(create) => view! { <CreatePanel create=create /> }.into_any(),
        Panel::Notifications(notifications) => {
            view! { <NotificationsPanel notifications=notifications /> }.into_any()
        }
        Panel::Profile(profile) => view! { <ProfilePanel profile=profile /> }.into_any(),
    };

    view! {
        <div class="app">
            <AppHeader header=header on_action=on_action />
            <main class="content">{panel}</main>
            <BottomNav items=nav on_select=on_select />
        </div>
    }
}
