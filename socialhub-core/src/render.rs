//! Модель экрана: что именно нарисовать для данного состояния.
//!
//! [`Screen`] не знает ни про DOM, ни про терминал. Фронтенды получают его из
//! [`crate::ViewController::render`] и только раскладывают по разметке.

use serde::Serialize;

use crate::models::{Friend, Icon, Notification, Post, Profile, Story};
use crate::seed::Catalog;
use crate::state::{Action, ViewState};
use crate::tab::Tab;

// Название приложения в шапке.
const APP_TITLE: &str = "SocialHub";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Полный экран: шапка, одна панель и нижняя навигация.
pub struct Screen {
    /// Шапка.
    pub header: Header,
    /// Панель активной вкладки.
    pub panel: Panel,
    /// Пункты нижней навигации.
    pub nav: Vec<NavItem>,
}

impl Screen {
    pub(crate) fn build(catalog: &Catalog, state: &ViewState) -> Self {
        Self {
            header: Header {
                title: APP_TITLE,
                notification_badge: catalog.notifications.len(),
            },
            panel: Panel::build(catalog, state),
            nav: Tab::ALL
                .into_iter()
                .map(|tab| NavItem {
                    tab,
                    label: tab.label(),
                    icon: tab.icon(),
                    active: tab == state.active_tab,
                })
                .collect(),
        }
    }

    /// Вкладка, для которой построен экран.
    pub fn active_tab(&self) -> Tab {
        self.panel.tab()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Шапка экрана.
pub struct Header {
    /// Название приложения.
    pub title: &'static str,
    /// Число на бейдже колокольчика.
    pub notification_badge: usize,
}

impl Header {
    /// Действие по нажатию на колокольчик.
    pub fn bell_action() -> Action {
        Action::SelectTab(Tab::Notifications)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Пункт нижней навигации.
pub struct NavItem {
    /// Вкладка, которую выбирает пункт.
    pub tab: Tab,
    /// Подпись.
    pub label: &'static str,
    /// Иконка.
    pub icon: Icon,
    /// Выбран ли пункт сейчас.
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "panel", rename_all = "snake_case")]
/// Содержимое основной области. Ровно один вариант на вкладку.
pub enum Panel {
    /// Лента.
    Feed(FeedView),
    /// Друзья.
    Friends(FriendsView),
    /// Создание поста.
    Create(CreateView),
    /// Уведомления.
    Notifications(NotificationsView),
    /// Профиль.
    Profile(ProfileView),
}

impl Panel {
    fn build(catalog: &Catalog, state: &ViewState) -> Self {
        match state.active_tab {
            Tab::Feed => Panel::Feed(FeedView {
                stories: catalog.stories.clone(),
                posts: state.posts.clone(),
            }),
            Tab::Friends => Panel::Friends(FriendsView {
                search_placeholder: "Поиск друзей...",
                message_label: "Написать",
                friends: catalog.friends.clone(),
            }),
            Tab::Create => Panel::Create(CreateView {
                title: "Создать пост",
                author_avatar: catalog.viewer_avatar().to_string(),
                author_label: "Твой профиль",
                visibility_label: "Публичный пост",
                placeholder: "Что у тебя нового?",
                attachments: vec![
                    ComposerButton {
                        icon: Icon::Image,
                        label: "Фото/Видео",
                    },
                    ComposerButton {
                        icon: Icon::Smile,
                        label: "Эмодзи",
                    },
                ],
                submit_label: "Опубликовать",
            }),
            Tab::Notifications => Panel::Notifications(NotificationsView {
                notifications: catalog.notifications.clone(),
            }),
            Tab::Profile => Panel::Profile(ProfileView {
                profile: catalog.profile.clone(),
                edit_label: "Редактировать",
                settings_title: "Настройки",
            }),
        }
    }

    /// Вкладка, которой принадлежит панель.
    pub fn tab(&self) -> Tab {
        match self {
            Panel::Feed(_) => Tab::Feed,
            Panel::Friends(_) => Tab::Friends,
            Panel::Create(_) => Tab::Create,
            Panel::Notifications(_) => Tab::Notifications,
            Panel::Profile(_) => Tab::Profile,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Лента: полоса историй и карточки постов.
pub struct FeedView {
    /// Истории.
    pub stories: Vec<Story>,
    /// Посты.
    pub posts: Vec<Post>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Список друзей с неактивным полем поиска.
pub struct FriendsView {
    /// Плейсхолдер поиска.
    pub search_placeholder: &'static str,
    /// Подпись кнопки в карточке друга.
    pub message_label: &'static str,
    /// Друзья.
    pub friends: Vec<Friend>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Кнопка вложения в форме поста.
pub struct ComposerButton {
    /// Иконка.
    pub icon: Icon,
    /// Подпись.
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Форма создания поста. Ничего не публикует.
pub struct CreateView {
    /// Заголовок карточки.
    pub title: &'static str,
    /// Аватар зрителя.
    pub author_avatar: String,
    /// Подпись автора.
    pub author_label: &'static str,
    /// Видимость поста.
    pub visibility_label: &'static str,
    /// Плейсхолдер текстового поля.
    pub placeholder: &'static str,
    /// Кнопки вложений.
    pub attachments: Vec<ComposerButton>,
    /// Подпись кнопки публикации.
    pub submit_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Список уведомлений.
pub struct NotificationsView {
    /// Уведомления.
    pub notifications: Vec<Notification>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Профиль с меню настроек.
pub struct ProfileView {
    /// Данные профиля.
    pub profile: Profile,
    /// Подпись кнопки редактирования.
    pub edit_label: &'static str,
    /// Заголовок карточки настроек.
    pub settings_title: &'static str,
}

/// Буква-заглушка для аватара: первый символ имени.
pub fn avatar_initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(String::from)
        .unwrap_or_else(|| "?".to_string())
}

/// Компактная запись счётчика: `234`, `1.2K`, `3.4M`.
pub fn format_compact(value: u64) -> String {
    fn scaled(value: u64, unit: u64, suffix: &str) -> String {
        let whole = value / unit;
        let tenth = value % unit * 10 / unit;
        if tenth == 0 {
            format!("{whole}{suffix}")
        } else {
            format!("{whole}.{tenth}{suffix}")
        }
    }

    match value {
        0..1_000 => value.to_string(),
        1_000..1_000_000 => scaled(value, 1_000, "K"),
        _ => scaled(value, 1_000_000, "M"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(tab: Tab) -> Screen {
        let state = ViewState {
            active_tab: tab,
            ..ViewState::initial()
        };
        Screen::build(&Catalog::demo(), &state)
    }

    #[test]
    fn header_badge_counts_notifications() {
        let screen = render(Tab::Feed);
        assert_eq!(screen.header.title, "SocialHub");
        assert_eq!(screen.header.notification_badge, 3);
    }

    #[test]
    fn bell_selects_notifications() {
        assert_eq!(
            Header::bell_action(),
            Action::SelectTab(Tab::Notifications)
        );
    }

    #[test]
    fn nav_marks_only_active_tab() {
        let screen = render(Tab::Create);
        assert_eq!(screen.nav.len(), 5);
        let active: Vec<_> = screen.nav.iter().filter(|item| item.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].tab, Tab::Create);
        assert_eq!(active[0].label, "Создать");
    }

    #[test]
    fn panel_matches_active_tab() {
        for tab in Tab::ALL {
            let screen = render(tab);
            assert_eq!(screen.panel.tab(), tab);
            assert_eq!(screen.active_tab(), tab);
        }
    }

    #[test]
    fn create_panel_uses_viewer_avatar() {
        let catalog = Catalog::demo();
        let Panel::Create(view) = render(Tab::Create).panel else {
            panic!("expected create panel");
        };
        assert_eq!(view.author_avatar, catalog.profile.avatar);
        assert_eq!(view.attachments.len(), 2);
    }

    #[test]
    fn avatar_initial_takes_first_char() {
        assert_eq!(avatar_initial("Анна Петрова"), "А");
        assert_eq!(avatar_initial("  Игорь"), "И");
        assert_eq!(avatar_initial(""), "?");
    }

    #[test]
    fn format_compact_matches_profile_stats() {
        assert_eq!(format_compact(234), "234");
        assert_eq!(format_compact(1_200), "1.2K");
        assert_eq!(format_compact(3_400), "3.4K");
        assert_eq!(format_compact(1_000), "1K");
        assert_eq!(format_compact(2_500_000), "2.5M");
    }
}
