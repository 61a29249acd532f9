use std::collections::BTreeSet;

use crate::domain::outcome::HoleOutcome;
use crate::domain::player::Player;
use crate::domain::segment::Segment;
use crate::domain::side::Side;
use crate::domain::HoleNumber;
use crate::engine::errors::EngineError;
use crate::engine::frame::FRAME_HOLES;

/// Проверка пары игроков. Возвращает (игрок стороны A, игрок стороны B).
pub fn validate_players(players: &[Player]) -> Result<(&Player, &Player), EngineError> {
    let [first, second] = players else {
        return Err(EngineError::WrongPlayerCount(players.len()));
    };

    if first.side == second.side {
        return Err(EngineError::SameSide(first.side));
    }

    for player in [first, second] {
        if player.course_handicap < 0 {
            return Err(EngineError::NegativeHandicap {
                player_id: player.id,
                course_handicap: player.course_handicap,
            });
        }
    }

    match first.side {
        Side::A => Ok((first, second)),
        Side::B => Ok((second, first)),
    }
}

/// Проверка разбиения раунда на сегменты.
///
/// - сегментов хотя бы один, в каждом есть лунки;
/// - каждая лунка встречается ровно один раз во всём раунде;
/// - лунки покрывают непрерывный диапазон номеров;
/// - у каждой лунки есть stroke index, и внутри сегмента они уникальны.
pub fn validate_segments(segments: &[Segment]) -> Result<(), EngineError> {
    if segments.is_empty() {
        return Err(EngineError::NoSegments);
    }

    let mut covered: BTreeSet<HoleNumber> = BTreeSet::new();

    for segment in segments {
        if segment.holes.is_empty() {
            return Err(EngineError::EmptySegment(segment.id));
        }

        let mut seen_indexes = BTreeSet::new();
        for &hole in &segment.holes {
            if !covered.insert(hole) {
                return Err(EngineError::DuplicateHole(hole));
            }

            let Some(stroke_index) = segment.stroke_index(hole) else {
                return Err(EngineError::MissingStrokeIndex {
                    segment_id: segment.id,
                    hole,
                });
            };

            if !seen_indexes.insert(stroke_index) {
                return Err(EngineError::DuplicateStrokeIndex {
                    segment_id: segment.id,
                    stroke_index,
                });
            }
        }
    }

    // Дыры в покрытии: соседние номера лунок должны идти подряд.
    let holes: Vec<HoleNumber> = covered.into_iter().collect();
    for pair in holes.windows(2) {
        if pair[1] != pair[0] + 1 {
            return Err(EngineError::HoleGap {
                after: pair[0],
                next: pair[1],
            });
        }
    }

    Ok(())
}

/// Проверка последовательности исходов девятки.
pub fn validate_outcomes(
    outcomes: &[HoleOutcome],
) -> Result<&[HoleOutcome; FRAME_HOLES], EngineError> {
    outcomes.try_into().map_err(|_| EngineError::WrongOutcomeCount {
        expected: FRAME_HOLES,
        found: outcomes.len(),
    })
}

/// Разбор кодов исходов (API-слой): каждый код должен быть A / B / H.
pub fn parse_outcome_codes<S: AsRef<str>>(
    codes: &[S],
) -> Result<Vec<HoleOutcome>, EngineError> {
    codes
        .iter()
        .map(|code| {
            code.as_ref()
                .parse::<HoleOutcome>()
                .map_err(|_| EngineError::InvalidOutcome(code.as_ref().to_string()))
        })
        .collect()
}
