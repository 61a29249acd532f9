use serde::{Deserialize, Serialize};

use crate::domain::player::Player;
use crate::domain::segment::Segment;
use crate::domain::stakes::StakeConfig;

/// Команда верхнего уровня.
///
/// Каждая команда – один полный расчёт: целый вход внутрь, целый результат наружу.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Распределить удары гандикапа по лункам.
    AllocateStrokes(AllocateStrokesCommand),

    /// Посчитать ставки 30-10-10 по исходам девятки.
    EvaluateThirtyTenTen(EvaluateThirtyTenTenCommand),
}

/// Вход для распределения ударов.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AllocateStrokesCommand {
    /// Ровно два игрока, по одному на сторону.
    pub players: Vec<Player>,
    /// Сегменты в значимом порядке: остаток пула достаётся первым.
    pub segments: Vec<Segment>,
}

/// Вход для оценки 30-10-10.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EvaluateThirtyTenTenCommand {
    /// Коды исходов: "A", "B", "H" (или "A-wins", "B-wins", "Halve").
    pub outcomes: Vec<String>,
    /// Стоимость ставок. Если не указана – 30 / 10 / 10.
    #[serde(default)]
    pub stakes: Option<StakeConfig>,
}
