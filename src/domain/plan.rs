use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::side::Side;
use crate::domain::HoleNumber;

/// План гандикапа: сколько ударов получает каждая сторона на каждой лунке.
///
/// Инварианты (обеспечивает аллокатор):
/// - у scratch-стороны все значения нулевые;
/// - сумма у второй стороны равна разнице course handicap.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandicapPlan {
    pub a: BTreeMap<HoleNumber, u32>,
    pub b: BTreeMap<HoleNumber, u32>,
}

impl HandicapPlan {
    /// План, где обе стороны получают 0 на всех указанных лунках.
    pub fn zero(holes: impl IntoIterator<Item = HoleNumber>) -> Self {
        let a: BTreeMap<HoleNumber, u32> = holes.into_iter().map(|hole| (hole, 0)).collect();
        let b = a.clone();
        Self { a, b }
    }

    pub fn strokes(&self, side: Side) -> &BTreeMap<HoleNumber, u32> {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }

    pub fn strokes_mut(&mut self, side: Side) -> &mut BTreeMap<HoleNumber, u32> {
        match side {
            Side::A => &mut self.a,
            Side::B => &mut self.b,
        }
    }

    /// Удары стороны на лунке (0, если лунки нет в плане).
    pub fn strokes_on(&self, side: Side, hole: HoleNumber) -> u32 {
        self.strokes(side).get(&hole).copied().unwrap_or(0)
    }

    pub fn total(&self, side: Side) -> u32 {
        self.strokes(side).values().sum()
    }

    /// Сторона без ударов. `None`, если ударов нет ни у кого (равные гандикапы).
    pub fn scratch_side(&self) -> Option<Side> {
        match (self.total(Side::A), self.total(Side::B)) {
            (0, 0) => None,
            (0, _) => Some(Side::A),
            _ => Some(Side::B),
        }
    }
}
