use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{HoleNumber, SegmentId, StrokeIndex};

/// Сегмент раунда: набор лунок, внутри которого пул гандикапа делится отдельно.
///
/// Сегменты покрывают лунки раунда без дыр и пересечений.
/// `stroke_index_by_hole` – ранжирование сложности внутри сегмента:
/// значения уникальны в сегменте, но не обязаны идти подряд.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Segment {
    pub id: SegmentId,
    pub holes: Vec<HoleNumber>,
    pub stroke_index_by_hole: BTreeMap<HoleNumber, StrokeIndex>,
}

impl Segment {
    pub fn new(
        id: SegmentId,
        holes: Vec<HoleNumber>,
        stroke_index_by_hole: BTreeMap<HoleNumber, StrokeIndex>,
    ) -> Self {
        Self {
            id,
            holes,
            stroke_index_by_hole,
        }
    }

    /// Удобный конструктор из пар (лунка, stroke index) в порядке лунок.
    pub fn from_pairs(id: SegmentId, pairs: &[(HoleNumber, StrokeIndex)]) -> Self {
        Self {
            id,
            holes: pairs.iter().map(|(hole, _)| *hole).collect(),
            stroke_index_by_hole: pairs.iter().copied().collect(),
        }
    }

    pub fn stroke_index(&self, hole: HoleNumber) -> Option<StrokeIndex> {
        self.stroke_index_by_hole.get(&hole).copied()
    }

    /// Лунки сегмента от самой сложной к самой лёгкой.
    ///
    /// Лунки без stroke index уходят в конец (валидация их не пропускает).
    pub fn ranked_holes(&self) -> Vec<HoleNumber> {
        let mut ranked = self.holes.clone();
        ranked.sort_by_key(|hole| (self.stroke_index(*hole).unwrap_or(StrokeIndex::MAX), *hole));
        ranked
    }
}
