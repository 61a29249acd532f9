use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::side::Side;
use crate::domain::HoleNumber;

/// Исход одной лунки в матч-плей.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum HoleOutcome {
    AWins,
    BWins,
    Halve,
}

impl HoleOutcome {
    /// Выигрыш стороны `side`.
    pub fn win_for(side: Side) -> Self {
        match side {
            Side::A => HoleOutcome::AWins,
            Side::B => HoleOutcome::BWins,
        }
    }

    /// Кто взял лунку. `None` для ничьей.
    pub fn winner(self) -> Option<Side> {
        match self {
            HoleOutcome::AWins => Some(Side::A),
            HoleOutcome::BWins => Some(Side::B),
            HoleOutcome::Halve => None,
        }
    }

    /// Тот же исход с переставленными метками A/B.
    pub fn swapped(self) -> Self {
        match self {
            HoleOutcome::AWins => HoleOutcome::BWins,
            HoleOutcome::BWins => HoleOutcome::AWins,
            HoleOutcome::Halve => HoleOutcome::Halve,
        }
    }
}

impl fmt::Display for HoleOutcome {
    /// Короткий код: `A`, `B`, `H`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            HoleOutcome::AWins => 'A',
            HoleOutcome::BWins => 'B',
            HoleOutcome::Halve => 'H',
        };
        write!(f, "{ch}")
    }
}

/// Парсинг кода исхода: "A" / "B" / "H" или "A-wins" / "B-wins" / "Halve".
impl FromStr for HoleOutcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "a-wins" => Ok(HoleOutcome::AWins),
            "b" | "b-wins" => Ok(HoleOutcome::BWins),
            "h" | "halve" => Ok(HoleOutcome::Halve),
            _ => Err(format!("Invalid hole outcome: {s}")),
        }
    }
}

/// Парсинг компактной строки вида "AAHBAAABB" (пробелы и запятые игнорируются).
pub fn parse_outcomes(s: &str) -> Result<Vec<HoleOutcome>, String> {
    s.chars()
        .filter(|ch| !ch.is_whitespace() && *ch != ',')
        .map(|ch| ch.to_string().parse())
        .collect()
}

/// Итог одной ставки.
///
/// `winner = None` означает void: ставка не сработала или мини-матч сыгран вничью.
/// `trigger_hole` отличает эти два случая: для Main это лунка досрочной победы,
/// для Dormie/Bye – лунка, на которой стартовал мини-матч.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FrameOutcome {
    pub winner: Option<Side>,
    pub trigger_hole: Option<HoleNumber>,
}

impl FrameOutcome {
    pub const VOID: FrameOutcome = FrameOutcome {
        winner: None,
        trigger_hole: None,
    };

    pub fn is_void(&self) -> bool {
        self.winner.is_none()
    }

    pub fn was_triggered(&self) -> bool {
        self.trigger_hole.is_some()
    }
}

/// Результат формата 30-10-10 по одной девятке.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThirtyTenTenOutcome {
    pub main: FrameOutcome,
    pub dormie: FrameOutcome,
    pub bye: FrameOutcome,
}
