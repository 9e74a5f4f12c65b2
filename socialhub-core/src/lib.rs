//! Ядро SocialHub: модель данных, демо-данные и контроллер представления.
//!
//! Всё состояние живёт в памяти и создаётся из литеральных данных при старте:
//! - [`ViewController`] владеет активной вкладкой и списком постов;
//! - [`reduce`] — чистая функция перехода `(state, action) -> state`;
//! - [`ViewController::render`] строит [`Screen`], который рисуют фронтенды
//!   (`socialhub-wasm` в браузере, `socialhub-cli` в терминале).
#![warn(missing_docs)]

mod error;
mod models;
mod render;
mod seed;
mod state;
mod tab;

pub use error::{CoreError, CoreResult};
pub use models::{
    Friend, FriendStatus, Gradient, Icon, Notification, NotificationKind, Post, Profile,
    ProfileStat, SettingsItem, Story,
};
pub use render::{
    ComposerButton, CreateView, FeedView, FriendsView, Header, NavItem, NotificationsView, Panel,
    ProfileView, Screen, avatar_initial, format_compact,
};
pub use seed::Catalog;
pub use state::{Action, ViewController, ViewState, reduce};
pub use tab::Tab;
