use std::collections::BTreeMap;

use log::debug;

use crate::domain::plan::HandicapPlan;
use crate::domain::player::Player;
use crate::domain::segment::Segment;
use crate::domain::HoleNumber;
use crate::engine::errors::EngineError;
use crate::engine::validation::{validate_players, validate_segments};

/// Распределить удары гандикапа между лунками.
///
/// Алгоритм:
///   1. Scratch-сторона – игрок с меньшим course handicap.
///      При равных гандикапах все лунки обеих сторон получают 0.
///   2. Пул = CH(получающий) - CH(scratch).
///   3. Пул делится поровну между сегментами, остаток по одному удару
///      получают первые сегменты в переданном порядке.
///   4. Внутри сегмента удары идут по лункам от самой сложной,
///      по кругу, если ударов больше, чем лунок.
///
/// Функция чистая: одинаковый вход всегда даёт одинаковый план.
pub fn allocate_strokes(
    players: &[Player],
    segments: &[Segment],
) -> Result<HandicapPlan, EngineError> {
    let (player_a, player_b) = validate_players(players)?;
    validate_segments(segments)?;

    let mut plan = HandicapPlan::zero(
        segments
            .iter()
            .flat_map(|segment| segment.holes.iter().copied()),
    );

    if player_a.course_handicap == player_b.course_handicap {
        debug!(
            "equal course handicaps ({}), no strokes allocated",
            player_a.course_handicap
        );
        return Ok(plan);
    }

    let (scratch, receiver) = if player_a.course_handicap < player_b.course_handicap {
        (player_a, player_b)
    } else {
        (player_b, player_a)
    };

    let pool = stroke_pool(receiver, scratch)?;
    let shares = split_pool(pool, segments.len());

    let strokes = plan.strokes_mut(receiver.side);
    for (segment, share) in segments.iter().zip(shares) {
        for (hole, count) in distribute_in_segment(segment, share) {
            strokes.insert(hole, count);
        }
    }

    debug!(
        "allocated {} strokes to side {} across {} segments (scratch: player {})",
        pool,
        receiver.side,
        segments.len(),
        scratch.id
    );

    Ok(plan)
}

/// Пул ударов: разница course handicap получающего и scratch-игрока.
pub fn stroke_pool(receiver: &Player, scratch: &Player) -> Result<u32, EngineError> {
    let diff = i64::from(receiver.course_handicap) - i64::from(scratch.course_handicap);
    u32::try_from(diff).map_err(|_| EngineError::NegativePool(diff))
}

/// Разделить пул между сегментами.
///
/// Каждый сегмент получает `pool / n`, первые `pool % n` сегментов – ещё по одному.
pub fn split_pool(pool: u32, segment_count: usize) -> Vec<u32> {
    if segment_count == 0 {
        return Vec::new();
    }

    let count = segment_count as u32;
    let base = pool / count;
    let remainder = pool % count;

    (0..count)
        .map(|i| base + u32::from(i < remainder))
        .collect()
}

/// Раздать `strokes` ударов по лункам сегмента.
///
/// Удары идут от самой сложной лунки (минимальный stroke index) к самой лёгкой,
/// затем снова с самой сложной. Ни одна лунка не получает второй удар,
/// пока все лунки сегмента не получили по одному.
pub fn distribute_in_segment(segment: &Segment, strokes: u32) -> BTreeMap<HoleNumber, u32> {
    let ranked = segment.ranked_holes();
    if ranked.is_empty() {
        return BTreeMap::new();
    }

    // Полные круги достаются всем лункам, остаток – самым сложным.
    let count = ranked.len() as u32;
    let base = strokes / count;
    let remainder = strokes % count;

    ranked
        .iter()
        .enumerate()
        .map(|(rank, hole)| (*hole, base + u32::from((rank as u32) < remainder)))
        .collect()
}
