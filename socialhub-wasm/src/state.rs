use leptos::prelude::*;
use socialhub_core::{Action, Screen, Tab, ViewController};

/// Реактивная обёртка над контроллером. Копируется в обработчики событий.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AppState {
    controller: RwSignal<ViewController>,
}

impl AppState {
    pub(crate) fn new() -> Self {
        Self {
            controller: RwSignal::new(ViewController::new()),
        }
    }

    pub(crate) fn dispatch(&self, action: Action) {
        self.controller.update(|controller| controller.dispatch(action));
    }

    pub(crate) fn select_tab(&self, tab: Tab) {
        self.dispatch(Action::SelectTab(tab));
    }

    pub(crate) fn toggle_like(&self, post_id: i64) {
        self.dispatch(Action::ToggleLike(post_id));
    }

    /// Экран пересчитывается только при изменении контроллера.
    pub(crate) fn screen(&self) -> Memo<Screen> {
        let controller = self.controller;
        Memo::new(move |_| controller.with(ViewController::render))
    }
}
