use serde::{Deserialize, Serialize};

use crate::domain::side::Side;
use crate::domain::PlayerId;

/// Игрок в контексте одного раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Course handicap для конкретного поля/ти. Должен быть >= 0.
    pub course_handicap: i32,
    pub side: Side,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, course_handicap: i32, side: Side) -> Self {
        Self {
            id,
            name: name.into(),
            course_handicap,
            side,
        }
    }
}
