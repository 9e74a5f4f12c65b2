//! Текстовая раскладка экрана для терминала.

use socialhub_core::{
    CreateView, FeedView, FriendsView, Header, Icon, NavItem, NotificationsView, Panel, Post,
    ProfileView, Screen, Tab, avatar_initial, format_compact,
};

const RULE: &str = "────────────────────────────────────────";

pub(crate) fn render_screen(screen: &Screen) -> String {
    let mut lines = vec![render_header(&screen.header), RULE.to_string()];
    lines.extend(render_panel(&screen.panel));
    lines.push(RULE.to_string());
    lines.push(render_nav(&screen.nav));
    lines.join("\n")
}

pub(crate) fn render_tabs(current: Tab) -> String {
    Tab::ALL
        .into_iter()
        .map(|tab| {
            let marker = if tab == current { "*" } else { " " };
            format!("{marker} {:<14} {} {}", tab.slug(), tab.icon().glyph(), tab.label())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_header(header: &Header) -> String {
    format!(
        "{}    {}  {} {}",
        header.title,
        Icon::Search.glyph(),
        Icon::Bell.glyph(),
        header.notification_badge
    )
}

fn render_nav(items: &[NavItem]) -> String {
    items
        .iter()
        .map(|item| {
            let text = format!("{} {}", item.icon.glyph(), item.label);
            if item.active { format!("[{text}]") } else { text }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn render_panel(panel: &Panel) -> Vec<String> {
    match panel {
        Panel::Feed(view) => render_feed(view),
        Panel::Friends(view) => render_friends(view),
        Panel::Create(view) => render_create(view),
        Panel::Notifications(view) => render_notifications(view),
        Panel::Profile(view) => render_profile(view),
    }
}

fn render_feed(view: &FeedView) -> Vec<String> {
    let stories = view
        .stories
        .iter()
        .map(|story| format!("({}) {}", avatar_initial(&story.author), story.author))
        .collect::<Vec<_>>()
        .join(" · ");

    let mut lines = vec![format!("Истории: {stories}")];
    for post in &view.posts {
        lines.push(String::new());
        lines.extend(render_post(post));
    }
    lines
}

fn render_post(post: &Post) -> Vec<String> {
    let mut lines = vec![
        format!(
            "({}) {} · {}  {}",
            avatar_initial(&post.author),
            post.author,
            post.time,
            Icon::MoreVertical.glyph()
        ),
        format!("    {}", post.content),
    ];
    if let Some(image) = &post.image {
        lines.push(format!("    {} {image}", Icon::Image.glyph()));
    }

    let heart = if post.liked { Icon::Heart.glyph() } else { "♡" };
    lines.push(format!(
        "    {heart} {}  {} {}  {} {}  {}   #{}",
        post.likes,
        Icon::MessageCircle.glyph(),
        post.comments,
        Icon::Share2.glyph(),
        post.shares,
        Icon::Bookmark.glyph(),
        post.id
    ));
    lines
}

fn render_friends(view: &FriendsView) -> Vec<String> {
    let mut lines = vec![format!("{} {}", Icon::Search.glyph(), view.search_placeholder)];
    for friend in &view.friends {
        let dot = if friend.status.is_online() { " ●" } else { "" };
        lines.push(String::new());
        lines.push(format!(
            "({}){dot} {}  [{}]",
            avatar_initial(&friend.name),
            friend.name,
            view.message_label
        ));
        lines.push(format!("    {} общих друзей", friend.mutual));
        lines.push(format!("    {}", friend.status.label()));
    }
    lines
}

fn render_create(view: &CreateView) -> Vec<String> {
    let attachments = view
        .attachments
        .iter()
        .map(|button| format!("[{} {}]", button.icon.glyph(), button.label))
        .collect::<Vec<_>>()
        .join(" ");

    vec![
        view.title.to_string(),
        format!("(Я) {} · {}", view.author_label, view.visibility_label),
        format!("  > {}", view.placeholder),
        attachments,
        format!("[{}]", view.submit_label),
    ]
}

fn render_notifications(view: &NotificationsView) -> Vec<String> {
    view.notifications
        .iter()
        .map(|notification| {
            format!(
                "({}) {} {} · {}  {}",
                avatar_initial(&notification.user),
                notification.user,
                notification.action,
                notification.time,
                notification.kind.icon().glyph()
            )
        })
        .collect()
}

fn render_profile(view: &ProfileView) -> Vec<String> {
    let profile = &view.profile;
    let stats = profile
        .stats
        .iter()
        .map(|stat| format!("{} {}", format_compact(stat.value), stat.label))
        .collect::<Vec<_>>()
        .join("   ");

    let mut lines = vec![
        format!("({})  [{}]", avatar_initial(&profile.name), view.edit_label),
        profile.name.clone(),
        format!("@{}", profile.handle),
        profile.bio.clone(),
        stats,
        String::new(),
        view.settings_title.to_string(),
    ];
    lines.extend(
        profile
            .settings
            .iter()
            .map(|item| format!("  {} {}", item.icon.glyph(), item.text)),
    );
    lines
}

#[cfg(test)]
mod tests {
    use socialhub_core::ViewController;

    use super::*;

    fn screen_for(tab: Tab) -> String {
        let mut controller = ViewController::new();
        controller.select_tab(tab);
        render_screen(&controller.render())
    }

    #[test]
    fn feed_shows_stories_and_posts() {
        let text = screen_for(Tab::Feed);
        assert!(text.contains("Истории:"));
        assert!(text.contains("(Т) Твоя история"));
        assert!(text.contains("♡ 234"));
        assert!(text.contains("♥ 456"));
        assert!(text.contains("[⌂ Лента]"));
    }

    #[test]
    fn profile_has_settings_and_no_stories() {
        let text = screen_for(Tab::Profile);
        assert!(text.contains("@anna_petrova"));
        assert!(text.contains("Настройки\n"));
        assert!(text.contains("Приватность"));
        assert!(text.contains("1.2K Друзей"));
        assert!(!text.contains("Истории:"));
        assert!(!text.contains("♡ 234"));
    }

    #[test]
    fn friends_marks_online() {
        let text = screen_for(Tab::Friends);
        assert!(text.contains("(Е) ● Екатерина Новикова"));
        assert!(text.contains("(П) Павел Соколов"));
        assert!(text.contains("5 мин назад"));
        assert!(text.contains("12 общих друзей"));
    }

    #[test]
    fn create_shows_composer() {
        let text = screen_for(Tab::Create);
        assert!(text.contains("Создать пост"));
        assert!(text.contains("Что у тебя нового?"));
        assert!(text.contains("[Опубликовать]"));
    }

    #[test]
    fn notifications_list_every_entry() {
        let text = screen_for(Tab::Notifications);
        assert!(text.contains("Анна Петрова оценила ваш пост"));
        assert!(text.contains("Елена Крылова подписалась на вас"));
        assert!(text.starts_with("SocialHub"));
        assert!(text.contains("🔔 3"));
    }

    #[test]
    fn liked_post_shows_filled_heart() {
        let mut controller = ViewController::new();
        controller.toggle_like(1);
        let text = render_screen(&controller.render());
        assert!(text.contains("♥ 235"));
    }

    #[test]
    fn tabs_listing_marks_current() {
        let listing = render_tabs(Tab::Feed);
        assert_eq!(listing.lines().count(), 5);
        assert!(listing.lines().next().is_some_and(|line| line.starts_with("* feed")));
        assert!(listing.contains("  profile"));
    }
}
