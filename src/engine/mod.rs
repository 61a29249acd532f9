//! Правила гольф-ядра: распределение ударов гандикапа и ставки 30-10-10.
//!
//! Основные операции:
//!   - `allocate_strokes` – план ударов для двух игроков по сегментам раунда
//!   - `evaluate_thirty_ten_ten` – три ставки по исходам девятки
//!   - `settle_thirty_ten_ten` – перевод исхода в очки
//!
//! Всё здесь – чистые функции без I/O и общего состояния.

pub mod allocator;
pub mod errors;
pub mod frame;
pub mod settlement;
pub mod validation;

pub use allocator::{allocate_strokes, distribute_in_segment, split_pool, stroke_pool};
pub use errors::EngineError;
pub use frame::{evaluate_thirty_ten_ten, mini_match, FrameState, FRAME_HOLES};
pub use settlement::{settle_thirty_ten_ten, Settlement, StakeResult};
