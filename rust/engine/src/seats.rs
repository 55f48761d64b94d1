use std::collections::BTreeMap;

use crate::model::Player;

/// Maps the source's sparse seat numbers onto a dense `1..=N` numbering,
/// ordered by ascending source seat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeatMap {
    dense: BTreeMap<u32, u32>,
}

impl SeatMap {
    pub fn from_seats<I: IntoIterator<Item = u32>>(seats: I) -> Self {
        let mut dense: BTreeMap<u32, u32> = seats.into_iter().map(|s| (s, 0)).collect();
        for (idx, slot) in dense.values_mut().enumerate() {
            *slot = idx as u32 + 1;
        }
        Self { dense }
    }

    pub fn from_players(players: &[Player]) -> Self {
        Self::from_seats(players.iter().map(|p| p.seat))
    }

    pub fn renumber(&self, original: u32) -> Option<u32> {
        self.dense.get(&original).copied()
    }

    /// Button seat in the dense numbering. A dealer outside the observed
    /// seats passes through unchanged.
    pub fn dealer(&self, original: u32) -> u32 {
        self.renumber(original).unwrap_or(original)
    }

    pub fn len(&self) -> usize {
        self.dense.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dense.is_empty()
    }

    /// `(original, dense)` pairs in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.dense.iter().map(|(&o, &d)| (o, d))
    }
}
