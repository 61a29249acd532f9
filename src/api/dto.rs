use serde::{Deserialize, Serialize};

use crate::domain::outcome::{FrameOutcome, ThirtyTenTenOutcome};
use crate::domain::plan::HandicapPlan;
use crate::domain::side::Side;
use crate::domain::HoleNumber;
use crate::engine::settlement::Settlement;

/// Удары обеих сторон на одной лунке.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HoleStrokesDto {
    pub hole: HoleNumber,
    pub strokes_a: u32,
    pub strokes_b: u32,
}

/// DTO плана гандикапа для карточки счёта.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandicapPlanDto {
    pub holes: Vec<HoleStrokesDto>,
    pub total_a: u32,
    pub total_b: u32,
    /// Кто получает удары (`None`, если гандикапы равны).
    pub receiving_side: Option<Side>,
    /// Сам план, как его вернул движок.
    pub plan: HandicapPlan,
}

/// DTO результата 30-10-10 вместе с расчётом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThirtyTenTenDto {
    pub main: FrameOutcome,
    pub dormie: FrameOutcome,
    pub bye: FrameOutcome,
    pub settlement: Settlement,
    pub net_a: i64,
    pub net_b: i64,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    Plan(HandicapPlanDto),
    ThirtyTenTen(ThirtyTenTenDto),
}

/// Помощник: план движка -> DTO.
pub fn map_plan_to_dto(plan: HandicapPlan) -> HandicapPlanDto {
    let holes = plan
        .a
        .keys()
        .chain(plan.b.keys())
        .copied()
        .collect::<std::collections::BTreeSet<HoleNumber>>()
        .into_iter()
        .map(|hole| HoleStrokesDto {
            hole,
            strokes_a: plan.strokes_on(Side::A, hole),
            strokes_b: plan.strokes_on(Side::B, hole),
        })
        .collect();

    let receiving_side = plan.scratch_side().map(Side::opponent);

    HandicapPlanDto {
        holes,
        total_a: plan.total(Side::A),
        total_b: plan.total(Side::B),
        receiving_side,
        plan,
    }
}

/// Помощник: исход + расчёт -> DTO.
pub fn map_thirty_ten_ten_to_dto(
    outcome: ThirtyTenTenOutcome,
    settlement: Settlement,
) -> ThirtyTenTenDto {
    ThirtyTenTenDto {
        main: outcome.main,
        dormie: outcome.dormie,
        bye: outcome.bye,
        net_a: settlement.net_for(Side::A),
        net_b: settlement.net_for(Side::B),
        settlement,
    }
}
