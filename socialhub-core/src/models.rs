use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
/// Иконки интерфейса. Имена совпадают с набором lucide.
pub enum Icon {
    /// Дом (лента).
    Home,
    /// Люди (друзья).
    Users,
    /// Плюс в круге (создать).
    PlusCircle,
    /// Колокольчик (уведомления).
    Bell,
    /// Пользователь (профиль).
    User,
    /// Лупа.
    Search,
    /// Три точки.
    MoreVertical,
    /// Сердце (лайк).
    Heart,
    /// Облачко (комментарий).
    MessageCircle,
    /// Поделиться.
    Share2,
    /// Закладка.
    Bookmark,
    /// Картинка.
    Image,
    /// Смайлик.
    Smile,
    /// Новый подписчик.
    UserPlus,
    /// Шестерёнка.
    Settings,
    /// Замок.
    Lock,
    /// Знак вопроса.
    HelpCircle,
}

impl Icon {
    /// Однострочное текстовое представление для терминала и CSS-less вывода.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Home => "⌂",
            Icon::Users => "👥",
            Icon::PlusCircle => "⊕",
            Icon::Bell => "🔔",
            Icon::User => "👤",
            Icon::Search => "🔍",
            Icon::MoreVertical => "⋮",
            Icon::Heart => "♥",
            Icon::MessageCircle => "💬",
            Icon::Share2 => "↗",
            Icon::Bookmark => "🔖",
            Icon::Image => "🖼",
            Icon::Smile => "☺",
            Icon::UserPlus => "➕",
            Icon::Settings => "⚙",
            Icon::Lock => "🔒",
            Icon::HelpCircle => "?",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Пост в ленте.
pub struct Post {
    /// Уникальный идентификатор.
    pub id: i64,
    /// Имя автора.
    pub author: String,
    /// URL аватара автора.
    pub avatar: String,
    /// Относительное время для отображения ("2 часа назад").
    pub time: String,
    /// Текст поста.
    pub content: String,
    /// URL картинки, если есть.
    pub image: Option<String>,
    /// Количество лайков, включая лайк текущего зрителя.
    pub likes: u32,
    /// Количество комментариев.
    pub comments: u32,
    /// Количество репостов.
    pub shares: u32,
    /// Лайкнул ли пост текущий зритель.
    pub liked: bool,
}

impl Post {
    /// Возвращает копию поста с переключённым лайком.
    ///
    /// Счётчик меняется ровно на 1 в сторону нового значения флага и не
    /// уходит ниже нуля.
    pub fn toggled_like(self) -> Self {
        let liked = !self.liked;
        let likes = if liked {
            self.likes.saturating_add(1)
        } else {
            self.likes.saturating_sub(1)
        };
        Self {
            liked,
            likes,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Декоративный градиент: рамка истории, бейдж уведомления.
pub struct Gradient {
    /// Начальный цвет (имя палитры, например `purple-500`).
    pub from: &'static str,
    /// Конечный цвет.
    pub to: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// История в ленте. Не меняется в течение сессии.
pub struct Story {
    /// Идентификатор.
    pub id: i64,
    /// Подпись под аватаром.
    pub author: String,
    /// URL аватара.
    pub avatar: String,
    /// Градиент рамки.
    pub gradient: Gradient,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "since", rename_all = "snake_case")]
/// Статус друга.
pub enum FriendStatus {
    /// Сейчас в сети.
    Online,
    /// Был в сети; строка для отображения ("5 мин назад").
    LastSeen(String),
}

impl FriendStatus {
    /// Текст статуса для отображения.
    pub fn label(&self) -> &str {
        match self {
            FriendStatus::Online => "В сети",
            FriendStatus::LastSeen(since) => since,
        }
    }

    /// Показывать ли зелёную точку на аватаре.
    pub fn is_online(&self) -> bool {
        matches!(self, FriendStatus::Online)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Запись в списке друзей.
pub struct Friend {
    /// Имя.
    pub name: String,
    /// URL аватара.
    pub avatar: String,
    /// Количество общих друзей.
    pub mutual: u32,
    /// Статус присутствия.
    pub status: FriendStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
/// Тип уведомления.
pub enum NotificationKind {
    /// Кто-то оценил пост.
    Like,
    /// Кто-то прокомментировал.
    Comment,
    /// Новый подписчик.
    Follow,
}

impl NotificationKind {
    /// Иконка в бейдже уведомления.
    pub fn icon(self) -> Icon {
        match self {
            NotificationKind::Like => Icon::Heart,
            NotificationKind::Comment => Icon::MessageCircle,
            NotificationKind::Follow => Icon::UserPlus,
        }
    }

    /// Градиент бейджа уведомления.
    pub fn gradient(self) -> Gradient {
        match self {
            NotificationKind::Like => Gradient {
                from: "red-500",
                to: "pink-500",
            },
            NotificationKind::Comment => Gradient {
                from: "blue-500",
                to: "purple-500",
            },
            NotificationKind::Follow => Gradient {
                from: "green-500",
                to: "teal-500",
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Уведомление. Только для отображения, никуда не доставляется.
pub struct Notification {
    /// Тип.
    pub kind: NotificationKind,
    /// Кто совершил действие.
    pub user: String,
    /// Фраза действия ("оценила ваш пост").
    pub action: String,
    /// Относительное время.
    pub time: String,
    /// URL аватара.
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Числовой показатель профиля.
pub struct ProfileStat {
    /// Подпись ("Постов").
    pub label: String,
    /// Значение.
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Пункт меню настроек профиля. Ничего не делает.
pub struct SettingsItem {
    /// Иконка.
    pub icon: Icon,
    /// Текст пункта.
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Профиль текущего пользователя.
pub struct Profile {
    /// URL обложки.
    pub cover: String,
    /// URL аватара.
    pub avatar: String,
    /// Отображаемое имя.
    pub name: String,
    /// Никнейм без `@`.
    pub handle: String,
    /// Короткое описание.
    pub bio: String,
    /// Показатели: посты, друзья, подписчики.
    pub stats: Vec<ProfileStat>,
    /// Пункты меню настроек.
    pub settings: Vec<SettingsItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post(likes: u32, liked: bool) -> Post {
        Post {
            id: 7,
            author: "Автор".to_string(),
            avatar: "https://example.com/a.jpg".to_string(),
            time: "только что".to_string(),
            content: "текст".to_string(),
            image: None,
            likes,
            comments: 1,
            shares: 2,
            liked,
        }
    }

    #[test]
    fn toggled_like_increments_when_liking() {
        let post = sample_post(10, false).toggled_like();
        assert!(post.liked);
        assert_eq!(post.likes, 11);
    }

    #[test]
    fn toggled_like_decrements_when_unliking() {
        let post = sample_post(10, true).toggled_like();
        assert!(!post.liked);
        assert_eq!(post.likes, 9);
    }

    #[test]
    fn toggled_like_keeps_other_fields() {
        let before = sample_post(3, false);
        let after = before.clone().toggled_like();
        assert_eq!(after.id, before.id);
        assert_eq!(after.comments, before.comments);
        assert_eq!(after.shares, before.shares);
        assert_eq!(after.content, before.content);
    }

    #[test]
    fn toggled_like_never_underflows() {
        let post = sample_post(0, true).toggled_like();
        assert!(!post.liked);
        assert_eq!(post.likes, 0);
    }

    #[test]
    fn friend_status_labels() {
        assert_eq!(FriendStatus::Online.label(), "В сети");
        assert!(FriendStatus::Online.is_online());

        let away = FriendStatus::LastSeen("5 мин назад".to_string());
        assert_eq!(away.label(), "5 мин назад");
        assert!(!away.is_online());
    }

    #[test]
    fn notification_kinds_have_distinct_icons() {
        assert_eq!(NotificationKind::Like.icon(), Icon::Heart);
        assert_eq!(NotificationKind::Comment.icon(), Icon::MessageCircle);
        assert_eq!(NotificationKind::Follow.icon(), Icon::UserPlus);
    }

    #[test]
    fn notification_kinds_have_badge_gradients() {
        assert_eq!(
            NotificationKind::Like.gradient(),
            Gradient {
                from: "red-500",
                to: "pink-500"
            }
        );
        assert_eq!(
            NotificationKind::Comment.gradient(),
            Gradient {
                from: "blue-500",
                to: "purple-500"
            }
        );
        assert_eq!(
            NotificationKind::Follow.gradient(),
            Gradient {
                from: "green-500",
                to: "teal-500"
            }
        );
    }
}
