//! Доменная модель гольф-ядра: игроки, стороны, сегменты, план гандикапа,
//! исходы лунок и ставки формата 30-10-10.

pub mod outcome;
pub mod plan;
pub mod player;
pub mod segment;
pub mod side;
pub mod stakes;

// Базовые идентификаторы
pub type PlayerId = u64;
pub type SegmentId = u64;
pub type HoleNumber = u8;
/// Ранг сложности лунки: чем меньше, тем сложнее.
pub type StrokeIndex = u32;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Side и т.п.
pub use outcome::*;
pub use plan::*;
pub use player::*;
pub use segment::*;
pub use side::*;
pub use stakes::*;
