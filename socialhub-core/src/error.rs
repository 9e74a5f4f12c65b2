use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Ошибки разбора пользовательского ввода.
///
/// Операции контроллера не падают: неизвестный id поста при `toggle_like`
/// молча игнорируется. Ошибки возникают только при разборе строк.
pub enum CoreError {
    /// Строка не соответствует ни одной вкладке.
    #[error("unknown tab '{0}', expected one of: feed, friends, create, notifications, profile")]
    UnknownTab(String),

    /// Строка действия не в формате `tab=<slug>` или `like=<id>`.
    #[error("invalid action '{input}': {message}")]
    InvalidAction {
        /// Исходная строка.
        input: String,
        /// Что именно не так.
        message: &'static str,
    },
}

/// Результат операций разбора `socialhub-core`.
pub type CoreResult<T> = Result<T, CoreError>;
