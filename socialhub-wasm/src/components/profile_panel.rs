use leptos::prelude::*;
use socialhub_core::{Profile, ProfileView, format_compact};

use crate::components::avatar::Avatar;
use crate::components::icon::IconGlyph;

#[component]
pub(crate) fn ProfilePanel(profile: ProfileView) -> impl IntoView {
    let ProfileView {
        profile,
        edit_label,
        settings_title,
    } = profile;
    let Profile {
        cover,
        avatar,
        name,
        handle,
        bio,
        stats,
        settings,
    } = profile;

    view! {
        <div class="panel profile">
            <div class="cover">
                <img src=cover alt="Cover" />
            </div>

            <div class="profile-body">
                <div class="profile-top">
                    <div class="profile-avatar">
                        <Avatar src=avatar name={name.clone()} size="xl" />
                    </div>
                    <button class="primary">{edit_label}</button>
                </div>

                <div class="profile-info">
                    <h1 class="profile-name">{name}</h1>
                    <p class="muted">{format!("@{handle}")}</p>
                    <p class="bio">{bio}</p>
                </div>

                <div class="stats">
                    {stats
                        .into_iter()
                        .map(|stat| {
                            view! {
                                <div class="stat">
                                    <p class="stat-value gradient-text">
                                        {format_compact(stat.value)}
                                    </p>
                                    <p class="muted small">{stat.label}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="card settings">
                    <h3 class="strong">{settings_title}</h3>
                    {settings
                        .into_iter()
                        .map(|item| {
                            view! {
                                <button class="settings-item">
                                    <IconGlyph icon={item.icon} />
                                    <span>{item.text}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
