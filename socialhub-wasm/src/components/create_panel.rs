use leptos::prelude::*;
use socialhub_core::CreateView;

use crate::components::avatar::Avatar;
use crate::components::icon::IconGlyph;

/// Форма-заглушка: текст никуда не отправляется.
#[component]
pub(crate) fn CreatePanel(create: CreateView) -> impl IntoView {
    let CreateView {
        title,
        author_avatar,
        author_label,
        visibility_label,
        placeholder,
        attachments,
        submit_label,
    } = create;

    view! {
        <div class="panel padded">
            <div class="card composer">
                <h2 class="gradient-text">{title}</h2>
                <div class="post-author">
                    <Avatar src=author_avatar name="Я" />
                    <div>
                        <p class="strong">{author_label}</p>
                        <p class="muted small">{visibility_label}</p>
                    </div>
                </div>
                <textarea class="composer-input" placeholder=placeholder></textarea>
                <div class="composer-attachments">
                    {attachments
                        .into_iter()
                        .map(|button| {
                            view! {
                                <button class="outline">
                                    <IconGlyph icon={button.icon} />
                                    {button.label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <button class="primary wide">{submit_label}</button>
            </div>
        </div>
    }
}
