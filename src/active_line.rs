//! The sweep-line ordered set of currently-open edges (§2 component 4,
//! §4.3). Backed by a sorted `Vec` rather than a balanced tree — the same
//! choice `geo`'s `old_sweep::vec_set::VecSet` makes — since the scale this
//! crate targets doesn't justify a red-black tree dependency, and binary
//! search keeps the comparator (which needs the geometry oracle) a plain
//! captured closure rather than global state (§9).
//!
//! Only left events are ever stored here: a right event looks up its twin's
//! position instead of inserting itself (§4.4).

use crate::event::{EventArena, EventId};
use crate::oracle::{orientation, Orientation};
use crate::scalar::Scalar;
use std::cmp::Ordering;

/// Total order over two currently-open edges at the sweep line's current
/// position (§4.3). Self-contained given arena access — no persistent
/// sweep-x state is needed because the comparator only ever consults edges
/// that have both been inserted and not yet removed, which is exactly the
/// invariant the active line maintains.
fn compare_active<S: Scalar>(arena: &EventArena<S>, a: EventId, b: EventId) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    let ea = arena.get(a);
    let eb = arena.get(b);
    let (start, end) = (ea.point, ea.other_point);
    let (other_start, other_end) = (eb.point, eb.other_point);

    let other_start_orientation = orientation(end, start, other_start);
    let other_end_orientation = orientation(end, start, other_end);

    if other_start_orientation == other_end_orientation {
        if other_start_orientation != Orientation::Collinear {
            return if other_start_orientation == Orientation::CounterClockwise {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }
        // Collinear: fall back to a lexicographic comparison of endpoints.
        return if start.x != other_start.x {
            start.x.cmp(&other_start.x)
        } else if start.y != other_start.y {
            start.y.cmp(&other_start.y)
        } else if end.y != other_end.y {
            end.y.cmp(&other_end.y)
        } else {
            end.x.cmp(&other_end.x)
        };
    }

    let start_orientation = orientation(other_end, other_start, start);
    let end_orientation = orientation(other_end, other_start, end);

    if start_orientation == end_orientation {
        return if start_orientation == Orientation::Clockwise {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }
    if other_start_orientation == Orientation::Collinear {
        return if other_end_orientation == Orientation::CounterClockwise {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }
    if start_orientation == Orientation::Collinear {
        return if end_orientation == Orientation::Clockwise {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }
    if end_orientation == Orientation::Collinear {
        return if start_orientation == Orientation::Clockwise {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }
    if other_start_orientation == Orientation::CounterClockwise {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

#[derive(Default)]
pub struct ActiveLine {
    data: Vec<EventId>,
}

impl ActiveLine {
    pub fn new() -> Self {
        ActiveLine { data: Vec::new() }
    }

    pub fn contains<S: Scalar>(&self, arena: &EventArena<S>, id: EventId) -> bool {
        self.index_of(arena, id).is_some()
    }

    pub fn index_of<S: Scalar>(&self, arena: &EventArena<S>, id: EventId) -> Option<usize> {
        self.data
            .binary_search_by(|probe| compare_active(arena, *probe, id))
            .ok()
    }

    pub fn insert<S: Scalar>(&mut self, arena: &EventArena<S>, id: EventId) -> usize {
        match self
            .data
            .binary_search_by(|probe| compare_active(arena, *probe, id))
        {
            Ok(idx) | Err(idx) => {
                self.data.insert(idx, id);
                idx
            }
        }
    }

    pub fn remove<S: Scalar>(&mut self, arena: &EventArena<S>, id: EventId) {
        if let Some(idx) = self.index_of(arena, id) {
            self.data.remove(idx);
        }
    }

    pub fn above_of(&self, idx: usize) -> Option<EventId> {
        self.data.get(idx + 1).copied()
    }

    pub fn below_of(&self, idx: usize) -> Option<EventId> {
        if idx == 0 {
            None
        } else {
            self.data.get(idx - 1).copied()
        }
    }

    pub fn above<S: Scalar>(&self, arena: &EventArena<S>, id: EventId) -> Option<EventId> {
        self.index_of(arena, id).and_then(|idx| self.above_of(idx))
    }

    pub fn below<S: Scalar>(&self, arena: &EventArena<S>, id: EventId) -> Option<EventId> {
        self.index_of(arena, id).and_then(|idx| self.below_of(idx))
    }
}
