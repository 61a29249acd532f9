use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём вызывающему приложению).
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные на уровне формата (например, битый JSON).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Вход разобран, но не прошёл валидацию движка.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Внутренняя ошибка (например, не удалось сериализовать ответ).
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        ApiError::InvalidInput(err.to_string())
    }
}
