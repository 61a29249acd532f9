use crate::domain::{HoleNumber, PlayerId, SegmentId, Side, StrokeIndex};

use thiserror::Error;

/// Ошибки валидации входа гольф-ядра.
///
/// Любая из них означает, что расчёт не выполнялся и частичного результата нет.
/// Void-исходы ставок (ничья в мини-матче, нет досрочной победы) сюда не относятся.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Нужно ровно 2 игрока, передано {0}")]
    WrongPlayerCount(usize),

    #[error("Оба игрока на стороне {0}")]
    SameSide(Side),

    #[error("Отрицательный course handicap {course_handicap} у игрока {player_id}")]
    NegativeHandicap {
        player_id: PlayerId,
        course_handicap: i32,
    },

    #[error("Список сегментов пуст")]
    NoSegments,

    #[error("В сегменте {0} нет лунок")]
    EmptySegment(SegmentId),

    #[error("Лунка {0} встречается больше одного раза")]
    DuplicateHole(HoleNumber),

    #[error("Дыра в покрытии лунок: после {after} идёт {next}")]
    HoleGap { after: HoleNumber, next: HoleNumber },

    #[error("У лунки {hole} в сегменте {segment_id} нет stroke index")]
    MissingStrokeIndex {
        segment_id: SegmentId,
        hole: HoleNumber,
    },

    #[error("Stroke index {stroke_index} повторяется в сегменте {segment_id}")]
    DuplicateStrokeIndex {
        segment_id: SegmentId,
        stroke_index: StrokeIndex,
    },

    #[error("Отрицательный пул ударов: {0}")]
    NegativePool(i64),

    #[error("Нужно ровно {expected} исходов лунок, передано {found}")]
    WrongOutcomeCount { expected: usize, found: usize },

    #[error("Недопустимый исход лунки: {0}")]
    InvalidOutcome(String),

    #[error("Недопустимый конфиг ставок: {0}")]
    InvalidConfig(String),
}
