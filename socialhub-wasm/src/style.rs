//! CSS-классы и inline-стили, которые компоненты вычисляют из данных экрана.
//!
//! Модуль собирается на любой платформе, поэтому его тесты идут на хосте.
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

use socialhub_core::Gradient;

pub(crate) fn nav_item_class(active: bool) -> &'static str {
    if active { "nav-item active" } else { "nav-item" }
}

pub(crate) fn like_button_class(liked: bool) -> &'static str {
    if liked { "action like liked" } else { "action like" }
}

pub(crate) fn story_class(own: bool) -> &'static str {
    if own { "story fade-in" } else { "story" }
}

pub(crate) fn avatar_class(size: &str) -> String {
    format!("avatar avatar-{size}")
}

/// Фон-градиент из переменных палитры `style.css`.
pub(crate) fn gradient_style(gradient: Gradient) -> String {
    format!(
        "background: linear-gradient(135deg, var(--{}), var(--{}));",
        gradient.from, gradient.to
    )
}

/// Задержка анимации появления для i-й карточки списка.
pub(crate) fn stagger_style(idx: usize) -> String {
    format!("animation-delay: {:.1}s;", idx as f32 * 0.1)
}

#[cfg(test)]
mod tests {
    use socialhub_core::NotificationKind;

    use super::*;

    #[test]
    fn nav_item_class_marks_active() {
        assert_eq!(nav_item_class(true), "nav-item active");
        assert_eq!(nav_item_class(false), "nav-item");
    }

    #[test]
    fn like_button_class_reflects_flag() {
        assert_eq!(like_button_class(true), "action like liked");
        assert_eq!(like_button_class(false), "action like");
    }

    #[test]
    fn only_own_story_is_animated() {
        assert_eq!(story_class(true), "story fade-in");
        assert_eq!(story_class(false), "story");
    }

    #[test]
    fn avatar_class_includes_size() {
        assert_eq!(avatar_class("lg"), "avatar avatar-lg");
    }

    #[test]
    fn gradient_style_uses_palette_variables() {
        let style = gradient_style(Gradient {
            from: "purple-500",
            to: "pink-500",
        });
        assert_eq!(
            style,
            "background: linear-gradient(135deg, var(--purple-500), var(--pink-500));"
        );
    }

    #[test]
    fn notification_badges_get_kind_gradient() {
        assert_eq!(
            gradient_style(NotificationKind::Like.gradient()),
            "background: linear-gradient(135deg, var(--red-500), var(--pink-500));"
        );
        assert_eq!(
            gradient_style(NotificationKind::Comment.gradient()),
            "background: linear-gradient(135deg, var(--blue-500), var(--purple-500));"
        );
        assert_eq!(
            gradient_style(NotificationKind::Follow.gradient()),
            "background: linear-gradient(135deg, var(--green-500), var(--teal-500));"
        );
    }

    #[test]
    fn stagger_style_grows_with_index() {
        assert_eq!(stagger_style(0), "animation-delay: 0.0s;");
        assert_eq!(stagger_style(2), "animation-delay: 0.2s;");
    }
}
