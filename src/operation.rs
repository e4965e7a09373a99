//! The sweep engine (§2 component 6, §4.4–§4.5): fills the event queue from
//! input edges, sweeps left to right, detects and resolves intersections,
//! and propagates inside/outside labels. Generalizes the teacher's
//! (stubbed) `algorithm.rs`; control flow matches
//! `clipping/core/operation.py`'s `Operation` class and its per-kind
//! subclasses.

use crate::active_line::ActiveLine;
use crate::assembler;
use crate::bbox::BoundingBox;
use crate::error::Error;
use crate::event::{EdgeType, EventArena, EventId, OperandId};
use crate::model::{Mix, Multipolygon, Multisegment};
use crate::oracle::{self, SegmentsRelationship};
use crate::point::{Point, Segment};
use crate::queue::EventQueue;
use crate::scalar::Scalar;

/// Which Boolean operation is being computed — the only axis the engine
/// varies on (§9 "Polymorphism over operations": a tagged variant rather
/// than an inheritance hierarchy).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OperationKind {
    Union,
    Intersection,
    Difference,
    SymmetricDifference,
    CompleteIntersection,
}

pub struct Operation<S: Scalar> {
    kind: OperationKind,
    arena: EventArena<S>,
    queue: EventQueue<S>,
}

impl<S: Scalar> Operation<S> {
    pub fn new(kind: OperationKind) -> Self {
        Operation {
            kind,
            arena: EventArena::new(),
            queue: EventQueue::new(),
        }
    }

    pub fn arena(&self) -> &EventArena<S> {
        &self.arena
    }

    /// Runs a complete polygon operation: fill, sweep, assemble (§4.4's
    /// "Early termination" table plus §4.6). `operands` must already be past
    /// the facade's degenerate-case shortcuts (§4.7), i.e. every operand is
    /// non-empty.
    pub fn compute_multipolygons(
        kind: OperationKind,
        operands: &[Multipolygon<S>],
    ) -> Result<Multipolygon<S>, Error> {
        let mut op = Operation::new(kind);
        op.fill_from_multipolygons(operands);
        let x_maxes: Vec<S> = operands
            .iter()
            .map(|mp| {
                BoundingBox::from_multipolygon(mp)
                    .expect("facade guarantees non-empty operands")
                    .x_max
            })
            .collect();
        let processed = op.sweep(early_termination_x(kind, &x_maxes))?;
        Ok(assembler::assemble(&mut op.arena, processed))
    }

    /// The multisegment-operand counterpart of [`Self::compute_multipolygons`].
    pub fn compute_multisegments(
        kind: OperationKind,
        operands: &[Multisegment<S>],
    ) -> Result<Multisegment<S>, Error> {
        let mut op = Operation::new(kind);
        op.fill_from_multisegments(operands);
        let x_maxes: Vec<S> = operands
            .iter()
            .map(|ms| multisegment_x_max(ms).expect("facade guarantees non-empty operands"))
            .collect();
        let processed = op.sweep(early_termination_x(kind, &x_maxes))?;
        // Multisegment operands are open polylines, not closed regions:
        // the result is just the surviving contributing edges, not a
        // stitched contour.
        Ok(assembler::collect_segments(&op.arena, &processed))
    }

    /// `complete_intersect`'s entry point (§6), always run as
    /// [`OperationKind::CompleteIntersection`].
    pub fn compute_mix(operands: &[Multipolygon<S>]) -> Result<Mix<S>, Error> {
        let mut op = Operation::new(OperationKind::CompleteIntersection);
        op.fill_from_multipolygons(operands);
        let x_maxes: Vec<S> = operands
            .iter()
            .map(|mp| {
                BoundingBox::from_multipolygon(mp)
                    .expect("facade guarantees non-empty operands")
                    .x_max
            })
            .collect();
        let processed = op.sweep(early_termination_x(OperationKind::CompleteIntersection, &x_maxes))?;
        Ok(assembler::assemble_mix(&mut op.arena, processed))
    }

    /// §4.4 "Queue filling", for polygon operands.
    pub fn fill_from_multipolygons(&mut self, operands: &[Multipolygon<S>]) {
        for (operand_id, operand) in operands.iter().enumerate() {
            for polygon in operand {
                for contour in polygon.contours() {
                    for segment in contour.edges() {
                        self.register_segment(segment, operand_id as OperandId);
                    }
                }
            }
        }
    }

    /// §4.4 "Queue filling", for raw multisegment operands.
    pub fn fill_from_multisegments(&mut self, operands: &[Multisegment<S>]) {
        for (operand_id, operand) in operands.iter().enumerate() {
            for &segment in operand {
                self.register_segment(segment, operand_id as OperandId);
            }
        }
    }

    fn register_segment(&mut self, segment: Segment<S>, operand_id: OperandId) {
        let (start, end) = self.arena.push_segment(segment, operand_id);
        let key_start = self.arena.get(start).key();
        let key_end = self.arena.get(end).key();
        self.queue.push(start, key_start);
        self.queue.push(end, key_end);
    }

    /// Runs the sweep to completion (or to the early-termination bound,
    /// §4.4), returning the list of events the loop visited in priority
    /// order — the raw material the assembler filters down to contributing
    /// edges.
    pub fn sweep(&mut self, early_termination_x: Option<S>) -> Result<Vec<EventId>, Error> {
        let mut processed = Vec::new();
        let mut line = ActiveLine::new();
        while let Some(key) = self.queue.peek_key() {
            if let Some(limit) = early_termination_x {
                if key.point.x > limit {
                    break;
                }
            }
            let id = self.queue.pop().expect("just peeked a non-empty queue");
            log::trace!("processing event at ({:?}, {:?})", key.point.x, key.point.y);
            self.process_event(id, &mut processed, &mut line)?;
        }
        Ok(processed)
    }

    fn process_event(
        &mut self,
        id: EventId,
        processed: &mut Vec<EventId>,
        line: &mut ActiveLine,
    ) -> Result<(), Error> {
        if self.arena.get(id).is_right_endpoint {
            processed.push(id);
            let left = self.arena.get(id).twin;
            if let Some(idx) = line.index_of(&self.arena, left) {
                let above = line.above_of(idx);
                let below = line.below_of(idx);
                line.remove(&self.arena, left);
                if let (Some(above), Some(below)) = (above, below) {
                    self.detect_intersection(below, above)?;
                }
            }
        } else if !line.contains(&self.arena, id) {
            processed.push(id);
            line.insert(&self.arena, id);
            let idx = line.index_of(&self.arena, id).expect("just inserted");
            let above = line.above_of(idx);
            let below = line.below_of(idx);
            self.compute_fields(id, below);
            if let Some(above) = above {
                if self.detect_intersection(id, above)? {
                    self.compute_fields(id, below);
                    self.compute_fields(above, Some(id));
                }
            }
            if let Some(below) = below {
                if self.detect_intersection(below, id)? {
                    let idx = line.index_of(&self.arena, below).expect("still active");
                    let below_below = line.below_of(idx);
                    self.compute_fields(below, below_below);
                    self.compute_fields(id, Some(below));
                }
            }
        }
        Ok(())
    }

    /// Label propagation (§4.5).
    fn compute_fields(&mut self, event: EventId, below: Option<EventId>) {
        match below {
            None => {
                let e = self.arena.get_mut(event);
                e.in_out = false;
                e.other_in_out = true;
            }
            Some(below_id) => {
                let below_snapshot = {
                    let below_event = self.arena.get(below_id);
                    (
                        below_event.operand_id,
                        below_event.in_out,
                        below_event.other_in_out,
                        below_event.is_vertical(),
                        below_event.in_result,
                        below_event.below_in_result_event,
                    )
                };
                let (
                    below_operand,
                    below_in_out,
                    below_other_in_out,
                    below_is_vertical,
                    below_in_result,
                    below_below_in_result_event,
                ) = below_snapshot;
                let event_operand = self.arena.get(event).operand_id;

                let (in_out, other_in_out) = if event_operand == below_operand {
                    (!below_in_out, below_other_in_out)
                } else {
                    (
                        !below_other_in_out,
                        if below_is_vertical {
                            !below_in_out
                        } else {
                            below_in_out
                        },
                    )
                };
                let below_in_result_event = if !below_in_result || below_is_vertical {
                    below_below_in_result_event
                } else {
                    Some(below_id)
                };

                let e = self.arena.get_mut(event);
                e.in_out = in_out;
                e.other_in_out = other_in_out;
                e.below_in_result_event = below_in_result_event;
            }
        }
        let in_result = self.in_result(event);
        self.arena.get_mut(event).in_result = in_result;
    }

    /// §4.5's per-operation `in_result` table.
    fn in_result(&self, event: EventId) -> bool {
        let e = self.arena.get(event);
        match self.kind {
            OperationKind::Union => {
                (e.edge_type == EdgeType::Normal && e.other_in_out)
                    || e.edge_type == EdgeType::SameTransition
            }
            OperationKind::Intersection | OperationKind::CompleteIntersection => {
                (e.edge_type == EdgeType::Normal && !e.other_in_out)
                    || e.edge_type == EdgeType::SameTransition
            }
            OperationKind::Difference => {
                (e.edge_type == EdgeType::Normal && (e.operand_id == 0) == e.other_in_out)
                    || e.edge_type == EdgeType::DifferentTransition
            }
            OperationKind::SymmetricDifference => e.edge_type == EdgeType::Normal,
        }
    }

    /// Splits the segment starting at the left event `event` at `point`,
    /// pushing both freshly created events onto the queue (§4.4).
    fn split(&mut self, event: EventId, point: Point<S>) {
        let (new_right, new_left) = self.arena.divide_segment(event, point);
        let key_right = self.arena.get(new_right).key();
        let key_left = self.arena.get(new_left).key();
        self.queue.push(new_right, key_right);
        self.queue.push(new_left, key_left);
    }

    /// §4.4 "Intersection handling". `below` and `curr` are always the left
    /// events of two currently-open edges. Returns `true` when an overlap
    /// with a shared start point was resolved (signalling the caller to
    /// recompute both events' propagated labels).
    fn detect_intersection(&mut self, below: EventId, curr: EventId) -> Result<bool, Error> {
        let below_segment = self.arena.get(below).segment();
        let curr_segment = self.arena.get(curr).segment();
        let relationship = oracle::segments_relationship(below_segment, curr_segment);

        if relationship == SegmentsRelationship::Overlap {
            let (below_operand, below_point, below_other, below_in_out) = {
                let b = self.arena.get(below);
                (b.operand_id, b.point, b.other_point, b.in_out)
            };
            let (curr_operand, curr_point, curr_other, curr_in_out) = {
                let c = self.arena.get(curr);
                (c.operand_id, c.point, c.other_point, c.in_out)
            };
            if below_operand == curr_operand {
                return Err(Error::SelfOverlap);
            }

            let starts_equal = below_point == curr_point;
            let start_min_max = if starts_equal {
                None
            } else if self.arena.get(curr).key() < self.arena.get(below).key() {
                Some((curr, below))
            } else {
                Some((below, curr))
            };

            let ends_equal = curr_other == below_other;
            let end_min_max = if ends_equal {
                None
            } else {
                let curr_twin = self.arena.get(curr).twin;
                let below_twin = self.arena.get(below).twin;
                if self.arena.get(curr_twin).key() < self.arena.get(below_twin).key() {
                    Some((curr_twin, below_twin))
                } else {
                    Some((below_twin, curr_twin))
                }
            };

            if starts_equal {
                self.arena.get_mut(below).edge_type = EdgeType::NonContributing;
                self.arena.get_mut(curr).edge_type = if curr_in_out == below_in_out {
                    EdgeType::SameTransition
                } else {
                    EdgeType::DifferentTransition
                };
                if !ends_equal {
                    let (end_min, end_max) = end_min_max.expect("ends differ");
                    let split_point = self.arena.get(end_min).point;
                    let left_of_longer = self.arena.get(end_max).twin;
                    self.split(left_of_longer, split_point);
                }
                return Ok(true);
            } else if ends_equal {
                let (start_min, start_max) = start_min_max.expect("starts differ");
                let split_point = self.arena.get(start_max).point;
                self.split(start_min, split_point);
            } else {
                let (start_min, start_max) = start_min_max.expect("starts differ");
                let (end_min, end_max) = end_min_max.expect("ends differ");
                let end_max_left = self.arena.get(end_max).twin;
                if start_min == end_max_left {
                    // One segment contains the other: split the container at
                    // both inner boundaries, farther point first so the
                    // second split still lands inside the still-open event.
                    let far = self.arena.get(end_min).point;
                    let near = self.arena.get(start_max).point;
                    self.split(start_min, far);
                    self.split(start_min, near);
                } else {
                    let p1 = self.arena.get(end_min).point;
                    self.split(start_max, p1);
                    let p2 = self.arena.get(start_max).point;
                    self.split(start_min, p2);
                }
            }
            return Ok(false);
        }

        if relationship != SegmentsRelationship::None
            && self.arena.get(curr).point != self.arena.get(below).point
            && self.arena.get(curr).other_point != self.arena.get(below).other_point
        {
            let point = oracle::segments_intersection(below_segment, curr_segment)?;
            let (below_point, below_other) = {
                let b = self.arena.get(below);
                (b.point, b.other_point)
            };
            if point != below_point && point != below_other {
                self.split(below, point);
            }
            let (curr_point, curr_other) = {
                let c = self.arena.get(curr);
                (c.point, c.other_point)
            };
            if point != curr_point && point != curr_other {
                self.split(curr, point);
            }
        }
        Ok(false)
    }
}

fn multisegment_x_max<S: Scalar>(ms: &Multisegment<S>) -> Option<S> {
    ms.iter().fold(None, |acc, seg| {
        let end_x = if seg.start.x > seg.end.x {
            seg.start.x
        } else {
            seg.end.x
        };
        Some(match acc {
            Some(a) if a > end_x => a,
            _ => end_x,
        })
    })
}

/// §4.4 "Early termination".
fn early_termination_x<S: Scalar>(kind: OperationKind, x_maxes: &[S]) -> Option<S> {
    match kind {
        OperationKind::Difference => x_maxes.first().copied(),
        OperationKind::Intersection | OperationKind::CompleteIntersection => x_maxes
            .iter()
            .copied()
            .fold(None, |acc, x| Some(match acc {
                Some(a) if a < x => a,
                _ => x,
            })),
        OperationKind::Union | OperationKind::SymmetricDifference => None,
    }
}
