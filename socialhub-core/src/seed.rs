//! Литеральные демо-данные, из которых собирается сессия.

use serde::Serialize;

use crate::models::{
    Friend, FriendStatus, Gradient, Icon, Notification, NotificationKind, Post, Profile,
    ProfileStat, SettingsItem, Story,
};

const CDN: &str = "https://cdn.poehali.dev/projects/8e760c6e-b3f4-4c94-adae-9a5031332b6c/files";
const ANNA_AVATAR: &str = "261bbfab-7c59-4b22-9ecf-e2fa60119c7c.jpg";

fn cdn(file: &str) -> String {
    format!("{CDN}/{file}")
}

fn pravatar(img: u32) -> String {
    format!("https://i.pravatar.cc/150?img={img}")
}

/// Неизменяемые данные сессии: всё, кроме постов.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    /// Истории в верхней полосе ленты; первая принадлежит зрителю.
    pub stories: Vec<Story>,
    /// Друзья.
    pub friends: Vec<Friend>,
    /// Уведомления.
    pub notifications: Vec<Notification>,
    /// Профиль зрителя.
    pub profile: Profile,
}

impl Catalog {
    /// Демо-набор данных SocialHub.
    pub fn demo() -> Self {
        Self {
            stories: demo_stories(),
            friends: demo_friends(),
            notifications: demo_notifications(),
            profile: demo_profile(),
        }
    }

    /// URL аватара зрителя (используется в форме создания поста).
    pub fn viewer_avatar(&self) -> &str {
        &self.profile.avatar
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::demo()
    }
}

/// Посты, с которых начинается сессия.
pub(crate) fn seed_posts() -> Vec<Post> {
    vec![
        Post {
            id: 1,
            author: "Анна Петрова".to_string(),
            avatar: cdn(ANNA_AVATAR),
            time: "2 часа назад".to_string(),
            content: "Обожаю это место! Атмосфера просто невероятная 🌟✨".to_string(),
            image: Some(cdn("17b2e477-fcd9-4ba7-a205-d6ea52492fcc.jpg")),
            likes: 234,
            comments: 45,
            shares: 12,
            liked: false,
        },
        Post {
            id: 2,
            author: "Максим Иванов".to_string(),
            avatar: pravatar(12),
            time: "5 часов назад".to_string(),
            content: "Новый проект запущен! Спасибо всей команде за поддержку 🚀".to_string(),
            image: None,
            likes: 456,
            comments: 78,
            shares: 23,
            liked: true,
        },
    ]
}

fn story(id: i64, author: &str, img: u32, from: &'static str, to: &'static str) -> Story {
    Story {
        id,
        author: author.to_string(),
        avatar: pravatar(img),
        gradient: Gradient { from, to },
    }
}

fn demo_stories() -> Vec<Story> {
    vec![
        story(1, "Твоя история", 1, "purple-500", "pink-500"),
        story(2, "Елена", 5, "orange-500", "yellow-500"),
        story(3, "Дмитрий", 8, "blue-500", "purple-500"),
        story(4, "Ольга", 9, "pink-500", "red-500"),
        story(5, "Игорь", 11, "green-500", "blue-500"),
    ]
}

fn demo_friends() -> Vec<Friend> {
    vec![
        Friend {
            name: "Екатерина Новикова".to_string(),
            avatar: pravatar(20),
            mutual: 12,
            status: FriendStatus::Online,
        },
        Friend {
            name: "Павел Соколов".to_string(),
            avatar: pravatar(14),
            mutual: 8,
            status: FriendStatus::LastSeen("5 мин назад".to_string()),
        },
        Friend {
            name: "Виктория Лебедева".to_string(),
            avatar: pravatar(19),
            mutual: 15,
            status: FriendStatus::Online,
        },
    ]
}

fn demo_notifications() -> Vec<Notification> {
    let notification = |kind, user: &str, action: &str, time: &str, img| Notification {
        kind,
        user: user.to_string(),
        action: action.to_string(),
        time: time.to_string(),
        avatar: pravatar(img),
    };

    vec![
        notification(
            NotificationKind::Like,
            "Анна Петрова",
            "оценила ваш пост",
            "5 мин назад",
            25,
        ),
        notification(
            NotificationKind::Comment,
            "Максим Иванов",
            "прокомментировал",
            "1 час назад",
            33,
        ),
        notification(
            NotificationKind::Follow,
            "Елена Крылова",
            "подписалась на вас",
            "3 часа назад",
            41,
        ),
    ]
}

fn demo_profile() -> Profile {
    let stat = |label: &str, value| ProfileStat {
        label: label.to_string(),
        value,
    };
    let item = |icon, text: &str| SettingsItem {
        icon,
        text: text.to_string(),
    };

    Profile {
        cover: cdn("6f6dc682-deaf-4ee8-86b3-92ffce04a8f5.jpg"),
        avatar: cdn(ANNA_AVATAR),
        name: "Анна Петрова".to_string(),
        handle: "anna_petrova".to_string(),
        bio: "Люблю путешествия и фотографию 📸✨".to_string(),
        stats: vec![
            stat("Постов", 234),
            stat("Друзей", 1_200),
            stat("Подписчиков", 3_400),
        ],
        settings: vec![
            item(Icon::Settings, "Настройки аккаунта"),
            item(Icon::Lock, "Приватность"),
            item(Icon::Bell, "Уведомления"),
            item(Icon::HelpCircle, "Помощь"),
        ],
    }
}
