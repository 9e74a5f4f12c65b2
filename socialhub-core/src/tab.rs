use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::models::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
/// Вкладка верхнего уровня. Переходы между вкладками не ограничены.
pub enum Tab {
    /// Лента: истории и посты.
    #[default]
    Feed,
    /// Список друзей.
    Friends,
    /// Форма создания поста.
    Create,
    /// Уведомления.
    Notifications,
    /// Профиль текущего пользователя.
    Profile,
}

impl Tab {
    /// Все вкладки в порядке нижней навигации.
    pub const ALL: [Tab; 5] = [
        Tab::Feed,
        Tab::Friends,
        Tab::Create,
        Tab::Notifications,
        Tab::Profile,
    ];

    /// Машинное имя вкладки (используется в CLI и JSON).
    pub fn slug(self) -> &'static str {
        match self {
            Tab::Feed => "feed",
            Tab::Friends => "friends",
            Tab::Create => "create",
            Tab::Notifications => "notifications",
            Tab::Profile => "profile",
        }
    }

    /// Подпись в нижней навигации.
    pub fn label(self) -> &'static str {
        match self {
            Tab::Feed => "Лента",
            Tab::Friends => "Друзья",
            Tab::Create => "Создать",
            Tab::Notifications => "Уведомления",
            Tab::Profile => "Профиль",
        }
    }

    /// Иконка в нижней навигации.
    pub fn icon(self) -> Icon {
        match self {
            Tab::Feed => Icon::Home,
            Tab::Friends => Icon::Users,
            Tab::Create => Icon::PlusCircle,
            Tab::Notifications => Icon::Bell,
            Tab::Profile => Icon::User,
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Tab {
    type Err = CoreError;

    fn from_str(raw: &str) -> CoreResult<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        Tab::ALL
            .into_iter()
            .find(|tab| tab.slug() == normalized)
            .ok_or_else(|| CoreError::UnknownTab(raw.trim().to_string()))
    }
}
