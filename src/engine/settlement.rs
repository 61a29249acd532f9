use log::debug;
use serde::{Deserialize, Serialize};

use crate::domain::outcome::{FrameOutcome, ThirtyTenTenOutcome};
use crate::domain::side::Side;
use crate::domain::stakes::{Stake, StakeConfig};
use crate::engine::errors::EngineError;

/// Итог одной ставки в очках.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StakeResult {
    pub stake: Stake,
    pub winner: Option<Side>,
    /// Сколько очков переходит к победителю (0 для void).
    pub points: u32,
}

/// Расчёт по всем трём ставкам: Main, Dormie, Bye (именно в этом порядке).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settlement {
    pub results: Vec<StakeResult>,
}

impl Settlement {
    pub fn result(&self, stake: Stake) -> Option<&StakeResult> {
        self.results.iter().find(|r| r.stake == stake)
    }

    /// Чистый итог стороны: выигранные очки минус проигранные.
    pub fn net_for(&self, side: Side) -> i64 {
        self.results
            .iter()
            .map(|r| match r.winner {
                Some(winner) if winner == side => i64::from(r.points),
                Some(_) => -i64::from(r.points),
                None => 0,
            })
            .sum()
    }
}

/// Перевести исход 30-10-10 в очки по конфигу ставок.
pub fn settle_thirty_ten_ten(
    outcome: &ThirtyTenTenOutcome,
    config: &StakeConfig,
) -> Result<Settlement, EngineError> {
    config.validate().map_err(EngineError::InvalidConfig)?;

    let results = Stake::ALL
        .iter()
        .map(|stake| {
            let frame = frame_for(outcome, *stake);
            StakeResult {
                stake: *stake,
                winner: frame.winner,
                points: if frame.is_void() { 0 } else { config.points(*stake) },
            }
        })
        .collect();

    let settlement = Settlement { results };

    debug!(
        "settlement: A {:+}, B {:+}",
        settlement.net_for(Side::A),
        settlement.net_for(Side::B)
    );

    Ok(settlement)
}

fn frame_for(outcome: &ThirtyTenTenOutcome, stake: Stake) -> FrameOutcome {
    match stake {
        Stake::Main => outcome.main,
        Stake::Dormie => outcome.dormie,
        Stake::Bye => outcome.bye,
    }
}
