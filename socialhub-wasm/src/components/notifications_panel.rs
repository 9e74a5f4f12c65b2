use leptos::prelude::*;
use socialhub_core::{Notification, NotificationsView};

use crate::components::avatar::Avatar;
use crate::components::icon::IconGlyph;
use crate::style::{gradient_style, stagger_style};

#[component]
pub(crate) fn NotificationsPanel(notifications: NotificationsView) -> impl IntoView {
    view! {
        <div class="panel padded">
            <div class="list">
                {notifications
                    .notifications
                    .into_iter()
                    .enumerate()
                    .map(|(idx, notification)| {
                        view! { <NotificationCard notification=notification idx=idx /> }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn NotificationCard(notification: Notification, idx: usize) -> impl IntoView {
    let Notification {
        kind,
        user,
        action,
        time,
        avatar,
    } = notification;

    view! {
        <div class="card row fade-in" style={stagger_style(idx)}>
            <Avatar src=avatar name={user.clone()} />
            <div class="grow">
                <p class="small">
                    <span class="strong">{user}</span>
                    " "
                    {action}
                </p>
                <p class="muted small">{time}</p>
            </div>
            <div class="kind-badge" style={gradient_style(kind.gradient())}>
                <IconGlyph icon={kind.icon()} />
            </div>
        </div>
    }
}
