//! Внешний API гольф-ядра.
//!
//! Здесь описываются:
//! - команды (commands.rs) — полный вход одного расчёта;
//! - DTO (dto.rs) — удобные структуры для карточки счёта и расчёта ставок;
//! - ошибки (errors.rs) — то, что видит вызывающее приложение;
//! - обработчик (handler.rs) — `execute` / `execute_json`.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod handler;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use handler::*;
