use leptos::prelude::*;
use socialhub_core::{Friend, FriendsView};

use crate::components::avatar::Avatar;
use crate::style::stagger_style;

#[component]
pub(crate) fn FriendsPanel(friends: FriendsView) -> impl IntoView {
    let FriendsView {
        search_placeholder,
        message_label,
        friends,
    } = friends;

    view! {
        <div class="panel padded">
            // Поиск не реализован: поле ни на что не влияет.
            <input class="search" type="search" placeholder=search_placeholder />
            <div class="list">
                {friends
                    .into_iter()
                    .enumerate()
                    .map(|(idx, friend)| {
                        view! { <FriendCard friend=friend idx=idx message_label=message_label /> }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn FriendCard(friend: Friend, idx: usize, message_label: &'static str) -> impl IntoView {
    let online = friend.status.is_online();
    let status = friend.status.label().to_string();
    let Friend {
        name,
        avatar,
        mutual,
        ..
    } = friend;

    view! {
        <div class="card row fade-in" style={stagger_style(idx)}>
            <div class="row-main">
                <div class="avatar-wrap">
                    <Avatar src=avatar name={name.clone()} size="lg" />
                    <Show when=move || online>
                        <span class="online-dot"></span>
                    </Show>
                </div>
                <div>
                    <p class="strong">{name}</p>
                    <p class="muted small">{format!("{mutual} общих друзей")}</p>
                    <p class="muted small">{status}</p>
                </div>
            </div>
            <button class="primary">{message_label}</button>
        </div>
    }
}
