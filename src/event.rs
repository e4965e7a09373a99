//! The event arena (§3, §9 "Event graph with twin links").
//!
//! Events are never linked by pointer (as the teacher's `*const SweepEvent`
//! does) or by `Rc` (as ported implementations elsewhere in the corpus do).
//! They live in one `Vec<EventRecord<S>>` per running [`crate::operation::Operation`],
//! addressed by the `EventId` handle below, so splits are plain
//! vector pushes and twins are plain index rewrites — no reference counting,
//! no unsafe aliasing.

use crate::oracle::{self, Orientation};
use crate::point::{Point, Segment};
use crate::scalar::Scalar;
use std::cmp::Ordering;

/// Handle into an event arena. Stable for the arena's lifetime: splitting a
/// segment never invalidates an existing `EventId`, it only appends new ones.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct EventId(pub u32);

/// Which input operand contributed an edge (§3 `operand_id`).
pub type OperandId = u32;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EdgeType {
    Normal,
    NonContributing,
    SameTransition,
    DifferentTransition,
}

/// A half-edge endpoint (§3 "Event"). `point` is this endpoint; `other_point`
/// is a redundant copy of the twin's point, kept so that event comparisons
/// (§4.2, §4.3) never need to dereference into the arena — only mutable
/// label fields ever change after creation, so the copy never goes stale.
#[derive(Debug, Clone)]
pub struct EventRecord<S: Scalar> {
    pub is_right_endpoint: bool,
    pub point: Point<S>,
    pub other_point: Point<S>,
    pub twin: EventId,
    pub operand_id: OperandId,
    pub edge_type: EdgeType,
    pub in_out: bool,
    pub other_in_out: bool,
    pub in_result: bool,
    pub below_in_result_event: Option<EventId>,
    /// Assembly-time: index of this event in the filtered, sorted
    /// contributing-event list built by the assembler (§4.6).
    pub position: Option<usize>,
    pub contour_id: Option<usize>,
    pub result_in_out: bool,
}

impl<S: Scalar> EventRecord<S> {
    /// The segment this event is one endpoint of, canonicalized
    /// (`start <= end`).
    pub fn segment(&self) -> Segment<S> {
        if self.is_right_endpoint {
            Segment::new(self.other_point, self.point)
        } else {
            Segment::new(self.point, self.other_point)
        }
        .expect("event endpoints are never equal")
    }

    pub fn is_vertical(&self) -> bool {
        self.point.x == self.other_point.x
    }

    /// §4.2's event ordering key, as a value usable with `Ord`/`BinaryHeap`.
    pub fn key(&self) -> EventKey<S> {
        EventKey {
            point: self.point,
            is_right_endpoint: self.is_right_endpoint,
            other_point: self.other_point,
            operand_id: self.operand_id,
        }
    }
}

/// The total order over events described in §4.2. Self-contained (it needs
/// only the fields captured in the key, not arena access), so it can back
/// both the event priority queue and the `start_min`/`start_max` comparisons
/// used while resolving overlaps (§4.4).
#[derive(Copy, Clone, Debug)]
pub struct EventKey<S: Scalar> {
    pub point: Point<S>,
    pub is_right_endpoint: bool,
    pub other_point: Point<S>,
    pub operand_id: OperandId,
}

impl<S: Scalar> EventKey<S> {
    fn segment_start_end(&self) -> (Point<S>, Point<S>) {
        if self.is_right_endpoint {
            (self.other_point, self.point)
        } else {
            (self.point, self.other_point)
        }
    }
}

impl<S: Scalar> PartialEq for EventKey<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<S: Scalar> Eq for EventKey<S> {}

impl<S: Scalar> PartialOrd for EventKey<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: Scalar> Ord for EventKey<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.point
            .x
            .cmp(&other.point.x)
            .then_with(|| self.point.y.cmp(&other.point.y))
            .then_with(|| self.is_right_endpoint.cmp(&other.is_right_endpoint))
            .then_with(|| {
                // Same point, same endpoint-kind (guaranteed by the prior
                // comparisons having been `Equal`): the event whose other
                // endpoint lies below (in orientation terms) sorts first.
                let (start, end) = self.segment_start_end();
                match oracle::orientation(start, end, other.other_point) {
                    Orientation::CounterClockwise => Ordering::Less,
                    Orientation::Clockwise => Ordering::Greater,
                    Orientation::Collinear => Ordering::Equal,
                }
            })
            .then_with(|| self.operand_id.cmp(&other.operand_id))
    }
}

/// Owns every event created while computing one operation.
#[derive(Default)]
pub struct EventArena<S: Scalar> {
    events: Vec<EventRecord<S>>,
}

impl<S: Scalar> EventArena<S> {
    pub fn new() -> Self {
        EventArena { events: Vec::new() }
    }

    pub fn get(&self, id: EventId) -> &EventRecord<S> {
        &self.events[id.0 as usize]
    }

    pub fn get_mut(&mut self, id: EventId) -> &mut EventRecord<S> {
        &mut self.events[id.0 as usize]
    }

    /// Registers a segment's two endpoints as a twinned pair of events.
    pub fn push_segment(&mut self, segment: Segment<S>, operand_id: OperandId) -> (EventId, EventId) {
        let start_id = EventId(self.events.len() as u32);
        let end_id = EventId(start_id.0 + 1);
        self.events.push(EventRecord {
            is_right_endpoint: false,
            point: segment.start,
            other_point: segment.end,
            twin: end_id,
            operand_id,
            edge_type: EdgeType::Normal,
            in_out: false,
            other_in_out: false,
            in_result: false,
            below_in_result_event: None,
            position: None,
            contour_id: None,
            result_in_out: false,
        });
        self.events.push(EventRecord {
            is_right_endpoint: true,
            point: segment.end,
            other_point: segment.start,
            twin: start_id,
            operand_id,
            edge_type: EdgeType::Normal,
            in_out: false,
            other_in_out: false,
            in_result: false,
            below_in_result_event: None,
            position: None,
            contour_id: None,
            result_in_out: false,
        });
        (start_id, end_id)
    }

    /// Splits the segment ending at `right_of`'s twin, at `point` (§4.4
    /// "Splitting creates two new events"). `event` is the left endpoint of
    /// the segment being divided; `point` becomes the new shared vertex.
    ///
    /// Rewires `event`'s twin to a fresh right event at `point`, and pushes
    /// a fresh left event at `point` twinned with the original right event,
    /// matching `clipping/core/operation.py`'s `divide_segment`.
    pub fn divide_segment(&mut self, event: EventId, point: Point<S>) -> (EventId, EventId) {
        let original_right = self.get(event).twin;
        let operand_id = self.get(event).operand_id;

        let new_right_id = EventId(self.events.len() as u32);
        self.events.push(EventRecord {
            is_right_endpoint: true,
            point,
            other_point: self.get(event).point,
            twin: event,
            operand_id,
            edge_type: EdgeType::Normal,
            in_out: false,
            other_in_out: false,
            in_result: false,
            below_in_result_event: None,
            position: None,
            contour_id: None,
            result_in_out: false,
        });

        let new_left_id = EventId(self.events.len() as u32);
        self.events.push(EventRecord {
            is_right_endpoint: false,
            point,
            other_point: self.get(original_right).point,
            twin: original_right,
            operand_id,
            edge_type: EdgeType::Normal,
            in_out: false,
            other_in_out: false,
            in_result: false,
            below_in_result_event: None,
            position: None,
            contour_id: None,
            result_in_out: false,
        });

        self.get_mut(event).twin = new_right_id;
        self.get_mut(original_right).twin = new_left_id;

        (new_right_id, new_left_id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}
