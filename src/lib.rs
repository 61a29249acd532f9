//! Гольф-ядро: распределение ударов гандикапа и ставки матч-плей 30-10-10.
//!
//! Две независимые чистые части:
//! - аллокатор ударов (`engine::allocator`) — по course handicap двух игроков
//!   и сегментам раунда считает, сколько ударов получает слабая сторона на каждой лунке;
//! - оценщик девятки (`engine::frame`) — по исходам 9 лунок считает ставки
//!   Main, Dormie и Bye.
//!
//! Ядро не делает I/O: данные раунда, ввод карточки и показ расчёта
//! живут во внешнем приложении.

pub mod api;
pub mod domain;
pub mod engine;

pub use domain::{
    FrameOutcome, HandicapPlan, HoleOutcome, Player, Segment, Side, Stake, StakeConfig,
    ThirtyTenTenOutcome,
};
pub use engine::{
    allocate_strokes, evaluate_thirty_ten_ten, settle_thirty_ten_ten, EngineError, Settlement,
};
