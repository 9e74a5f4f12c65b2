use leptos::prelude::*;
use socialhub_core::{FeedView, Icon, Post, Story};

use crate::components::avatar::Avatar;
use crate::components::icon::IconGlyph;
use crate::style::{gradient_style, like_button_class, story_class};

#[component]
pub(crate) fn FeedPanel(feed: FeedView, on_like: Callback<i64>) -> impl IntoView {
    let FeedView { stories, posts } = feed;

    view! {
        <div class="panel feed">
            <div class="stories no-scrollbar">
                {stories
                    .into_iter()
                    .enumerate()
                    .map(|(idx, story)| view! { <StoryBubble story=story own={idx == 0} /> })
                    .collect_view()}
            </div>
            <div class="posts">
                {posts
                    .into_iter()
                    .map(|post| view! { <PostCard post=post on_like=on_like /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn StoryBubble(story: Story, own: bool) -> impl IntoView {
    let Story {
        author,
        avatar,
        gradient,
        ..
    } = story;

    view! {
        <div class={story_class(own)}>
            <div class="story-ring" style={gradient_style(gradient)}>
                <div class="story-inner">
                    <Avatar src=avatar name={author.clone()} size="lg" />
                </div>
            </div>
            <span class="story-name">{author}</span>
        </div>
    }
}

#[component]
fn PostCard(post: Post, on_like: Callback<i64>) -> impl IntoView {
    let Post {
        id,
        author,
        avatar,
        time,
        content,
        image,
        likes,
        comments,
        shares,
        liked,
    } = post;

    view! {
        <article class="card post fade-in">
            <div class="post-body">
                <div class="post-head">
                    <div class="post-author">
                        <Avatar src=avatar name={author.clone()} />
                        <div>
                            <p class="strong">{author}</p>
                            <p class="muted small">{time}</p>
                        </div>
                    </div>
                    <button class="icon-button">
                        <IconGlyph icon=Icon::MoreVertical />
                    </button>
                </div>
                <p class="post-content">{content}</p>
            </div>

            {image
                .map(|src| {
                    view! {
                        <div class="post-image">
                            <img src=src alt="Post" />
                        </div>
                    }
                })}

            <div class="post-actions">
                <div class="post-counters">
                    <button class={like_button_class(liked)} on:click=move |_| on_like.run(id)>
                        <IconGlyph icon=Icon::Heart />
                        <span class="strong">{likes}</span>
                    </button>
                    <button class="action comment">
                        <IconGlyph icon=Icon::MessageCircle />
                        <span class="strong">{comments}</span>
                    </button>
                    <button class="action share">
                        <IconGlyph icon=Icon::Share2 />
                        <span class="strong">{shares}</span>
                    </button>
                </div>
                <button class="action bookmark">
                    <IconGlyph icon=Icon::Bookmark />
                </button>
            </div>
        </article>
    }
}
