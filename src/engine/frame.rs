use log::{debug, trace};

use crate::domain::outcome::{FrameOutcome, HoleOutcome, ThirtyTenTenOutcome};
use crate::domain::side::Side;
use crate::domain::HoleNumber;
use crate::engine::errors::EngineError;
use crate::engine::validation::validate_outcomes;

/// Длина девятки, на которой определён формат 30-10-10.
pub const FRAME_HOLES: usize = 9;

/// Состояние прохода по девятке слева направо.
///
/// Триггеры защёлкиваются: каждый срабатывает не больше одного раза,
/// на первой лунке, где выполнено условие.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameState {
    holes_played: u8,
    wins_a: u8,
    wins_b: u8,
    clinch_hole: Option<HoleNumber>,
    dormie_hole: Option<HoleNumber>,
}

impl FrameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Применить исход следующей лунки и вернуть новое состояние.
    ///
    /// После девятой лунки состояние больше не меняется.
    pub fn apply(self, outcome: HoleOutcome) -> Self {
        if self.is_complete() {
            return self;
        }

        let mut next = self;
        next.holes_played += 1;

        match outcome.winner() {
            Some(Side::A) => next.wins_a += 1,
            Some(Side::B) => next.wins_b += 1,
            None => {}
        }

        let hole = next.holes_played;
        let lead = next.lead().unsigned_abs();
        let remaining = u32::from(next.remaining());

        // На последней лунке триггеры уже не срабатывают.
        if remaining > 0 {
            if next.clinch_hole.is_none() && lead > remaining {
                next.clinch_hole = Some(hole);
            }
            if next.dormie_hole.is_none() && lead != 0 && lead == remaining {
                next.dormie_hole = Some(hole);
            }
        }

        trace!(
            "hole {hole}: {outcome}, lead {}, remaining {remaining}",
            next.lead()
        );

        next
    }

    /// Разница побед: > 0 в пользу A, < 0 в пользу B.
    pub fn lead(&self) -> i32 {
        i32::from(self.wins_a) - i32::from(self.wins_b)
    }

    /// Сколько лунок осталось после последней сыгранной.
    pub fn remaining(&self) -> u8 {
        (FRAME_HOLES as u8).saturating_sub(self.holes_played)
    }

    /// Сыграны все девять лунок.
    pub fn is_complete(&self) -> bool {
        usize::from(self.holes_played) >= FRAME_HOLES
    }

    pub fn holes_played(&self) -> u8 {
        self.holes_played
    }

    pub fn wins(&self, side: Side) -> u8 {
        match side {
            Side::A => self.wins_a,
            Side::B => self.wins_b,
        }
    }

    /// Кто ведёт. `None` при равенстве.
    pub fn leader(&self) -> Option<Side> {
        leader_of(self.lead())
    }

    /// Лунка досрочной победы в основном матче (она же триггер Bye).
    pub fn clinch_hole(&self) -> Option<HoleNumber> {
        self.clinch_hole
    }

    /// Лунка, на которой лидер стал dormie.
    pub fn dormie_hole(&self) -> Option<HoleNumber> {
        self.dormie_hole
    }
}

fn leader_of(lead: i32) -> Option<Side> {
    match lead {
        l if l > 0 => Some(Side::A),
        l if l < 0 => Some(Side::B),
        _ => None,
    }
}

/// Посчитать три ставки 30-10-10 по исходам девяти лунок.
///
/// - Main платится, только если матч решён досрочно (хотя бы одна лунка в запасе).
/// - Dormie и Bye – мини-матчи от лунки после триггера до девятой.
pub fn evaluate_thirty_ten_ten(
    outcomes: &[HoleOutcome],
) -> Result<ThirtyTenTenOutcome, EngineError> {
    let outcomes = validate_outcomes(outcomes)?;

    let state = outcomes
        .iter()
        .fold(FrameState::new(), |state, outcome| state.apply(*outcome));

    let main = match state.clinch_hole() {
        Some(hole) => FrameOutcome {
            winner: state.leader(),
            trigger_hole: Some(hole),
        },
        None => FrameOutcome::VOID,
    };

    let result = ThirtyTenTenOutcome {
        main,
        dormie: mini_match(outcomes, state.dormie_hole()),
        bye: mini_match(outcomes, state.clinch_hole()),
    };

    debug!(
        "30-10-10: main {:?}, dormie {:?}, bye {:?}",
        result.main.winner, result.dormie.winner, result.bye.winner
    );

    Ok(result)
}

/// Мини-матч с лунки `trigger + 1` до конца девятки.
///
/// Сама лунка-триггер в счёт не идёт. Ничья (в том числе 0:0) и
/// несработавший триггер дают `winner = None`.
pub fn mini_match(outcomes: &[HoleOutcome], trigger: Option<HoleNumber>) -> FrameOutcome {
    let Some(trigger) = trigger else {
        return FrameOutcome::VOID;
    };

    let tail = outcomes.get(usize::from(trigger)..).unwrap_or(&[]);
    let lead = tail.iter().fold(0i32, |lead, outcome| match outcome.winner() {
        Some(Side::A) => lead + 1,
        Some(Side::B) => lead - 1,
        None => lead,
    });

    FrameOutcome {
        winner: leader_of(lead),
        trigger_hole: Some(trigger),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::outcome::parse_outcomes;

    fn replay(codes: &str) -> FrameState {
        parse_outcomes(codes)
            .unwrap()
            .into_iter()
            .fold(FrameState::new(), FrameState::apply)
    }

    #[test]
    fn fresh_state_has_nine_remaining() {
        let state = FrameState::new();
        assert_eq!(state.lead(), 0);
        assert_eq!(state.remaining(), 9);
        assert_eq!(state.holes_played(), 0);
        assert_eq!(state.leader(), None);
    }

    #[test]
    fn state_tracks_lead_hole_by_hole() {
        let mut state = FrameState::new();
        let expected_leads = [1, 2, 2, 1, 2, 3];
        let outcomes = parse_outcomes("AAHBAA").unwrap();

        for (outcome, expected) in outcomes.into_iter().zip(expected_leads) {
            state = state.apply(outcome);
            assert_eq!(state.lead(), expected);
        }

        assert_eq!(state.holes_played(), 6);
        assert_eq!(state.remaining(), 3);
        assert_eq!(state.wins(Side::A), 4);
        assert_eq!(state.wins(Side::B), 1);
    }

    #[test]
    fn dormie_and_clinch_latch_at_first_hole() {
        // 3 up с 3 в запасе на 6-й, 4 up с 2 в запасе на 7-й.
        let state = replay("AAHBAAABB");
        assert_eq!(state.dormie_hole(), Some(6));
        assert_eq!(state.clinch_hole(), Some(7));
    }

    #[test]
    fn no_trigger_on_last_hole() {
        // 1 up с 1 в запасе на 8-й – dormie; на 9-й условий уже не проверяем.
        let state = replay("HBHAHAHHA");
        assert_eq!(state.dormie_hole(), Some(8));
        assert_eq!(state.clinch_hole(), None);

        let all_halved = replay("HHHHHHHHH");
        assert_eq!(all_halved.dormie_hole(), None);
        assert_eq!(all_halved.clinch_hole(), None);
    }

    #[test]
    fn clinch_can_skip_dormie() {
        // 4 up с 5 в запасе, затем 5 up с 4 в запасе: равенства не было.
        let state = replay("AAAAA");
        assert_eq!(state.clinch_hole(), Some(5));
        assert_eq!(state.dormie_hole(), None);
    }

    #[test]
    fn state_stops_after_ninth_hole() {
        let nine = replay("AAAAAAAAA");
        assert!(nine.is_complete());

        let mut state = FrameState::new();
        for _ in 0..300 {
            state = state.apply(HoleOutcome::AWins);
        }
        assert_eq!(state, nine);
        assert_eq!(state.holes_played(), 9);
        assert_eq!(state.wins(Side::A), 9);
        assert_eq!(state.remaining(), 0);
    }

    #[test]
    fn mini_match_excludes_trigger_hole() {
        let outcomes = parse_outcomes("AAHBAAABB").unwrap();
        // С 8-й по 9-ю: B, B.
        assert_eq!(mini_match(&outcomes, Some(7)).winner, Some(Side::B));
        // С 7-й по 9-ю: A, B, B.
        assert_eq!(mini_match(&outcomes, Some(6)).winner, Some(Side::B));
        // Пустой хвост – ничья.
        let at_nine = mini_match(&outcomes, Some(9));
        assert_eq!(at_nine.winner, None);
        assert_eq!(at_nine.trigger_hole, Some(9));
        assert_eq!(mini_match(&outcomes, None), FrameOutcome::VOID);
    }
}
