use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::models::Post;
use crate::render::Screen;
use crate::seed::{Catalog, seed_posts};
use crate::tab::Tab;

/// Изменяемая часть сессии: активная вкладка и посты.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    /// Выбранная вкладка.
    pub active_tab: Tab,
    /// Посты ленты в порядке отображения.
    pub posts: Vec<Post>,
}

impl ViewState {
    /// Начальное состояние: лента и два демо-поста.
    pub fn initial() -> Self {
        Self {
            active_tab: Tab::Feed,
            posts: seed_posts(),
        }
    }
}

/// Действие пользователя.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Action {
    /// Переключиться на вкладку.
    SelectTab(Tab),
    /// Переключить лайк поста с данным id.
    ToggleLike(i64),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::SelectTab(tab) => write!(f, "tab={tab}"),
            Action::ToggleLike(id) => write!(f, "like={id}"),
        }
    }
}

impl FromStr for Action {
    type Err = CoreError;

    /// Разбирает `tab=<slug>` или `like=<id>`.
    fn from_str(raw: &str) -> CoreResult<Self> {
        let invalid = |message| CoreError::InvalidAction {
            input: raw.to_string(),
            message,
        };

        let (key, value) = raw
            .trim()
            .split_once('=')
            .ok_or_else(|| invalid("expected 'tab=<slug>' or 'like=<id>'"))?;

        match key.trim() {
            "tab" => Ok(Action::SelectTab(value.parse()?)),
            "like" => value
                .trim()
                .parse::<i64>()
                .map(Action::ToggleLike)
                .map_err(|_| invalid("post id must be an integer")),
            _ => Err(invalid("unknown action, expected 'tab' or 'like'")),
        }
    }
}

/// Чистая функция перехода состояния.
///
/// Не меняет `state`: возвращает новое состояние. Лайк неизвестного поста
/// возвращает копию исходного состояния.
pub fn reduce(state: &ViewState, action: Action) -> ViewState {
    match action {
        Action::SelectTab(tab) => ViewState {
            active_tab: tab,
            posts: state.posts.clone(),
        },
        Action::ToggleLike(post_id) => {
            if !state.posts.iter().any(|post| post.id == post_id) {
                debug!(post_id, "like ignored: post not found");
                return state.clone();
            }

            let posts = state
                .posts
                .iter()
                .cloned()
                .map(|post| {
                    if post.id == post_id {
                        post.toggled_like()
                    } else {
                        post
                    }
                })
                .collect();

            ViewState {
                active_tab: state.active_tab,
                posts,
            }
        }
    }
}

/// Единственный владелец состояния экрана.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewController {
    catalog: Catalog,
    state: ViewState,
}

impl ViewController {
    /// Контроллер с демо-данными в начальном состоянии.
    pub fn new() -> Self {
        Self::with_state(Catalog::demo(), ViewState::initial())
    }

    /// Контроллер с произвольными данными.
    pub fn with_state(catalog: Catalog, state: ViewState) -> Self {
        Self { catalog, state }
    }

    /// Применяет действие через [`reduce`].
    pub fn dispatch(&mut self, action: Action) {
        debug!(%action, "dispatch");
        self.state = reduce(&self.state, action);
    }

    /// Переключает вкладку. Всегда успешно.
    pub fn select_tab(&mut self, tab: Tab) {
        self.dispatch(Action::SelectTab(tab));
    }

    /// Переключает лайк. Неизвестный id игнорируется.
    pub fn toggle_like(&mut self, post_id: i64) {
        self.dispatch(Action::ToggleLike(post_id));
    }

    /// Строит экран для текущего состояния.
    pub fn render(&self) -> Screen {
        Screen::build(&self.catalog, &self.state)
    }

    /// Текущее состояние.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Неизменяемые данные сессии.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Активная вкладка.
    pub fn active_tab(&self) -> Tab {
        self.state.active_tab
    }

    /// Посты в порядке отображения.
    pub fn posts(&self) -> &[Post] {
        &self.state.posts
    }

    /// Пост по id, если есть.
    pub fn post(&self, post_id: i64) -> Option<&Post> {
        self.state.posts.iter().find(|post| post.id == post_id)
    }
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new()
    }
}
