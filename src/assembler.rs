//! Turns the sweep's processed events into polygons (§2 component 7, §4.6).
//! Has no counterpart in the teacher (`connector.rs`/`point_chain.rs` there
//! only chain *unlabeled* segments); ported from
//! `clipping/core/operation.py`'s `events_to_multipolygon`, `_collect_events`,
//! `_events_to_contours`, `_shrink_collinear_vertices` and `_to_next_position`,
//! which is the only place these exact semantics are grounded in this corpus.

use crate::event::{EventArena, EventId, OperandId};
use crate::model::{Contour, Mix, Multipolygon, Multipoint, Multisegment, Polygon};
use crate::oracle::{self, Orientation};
use crate::point::Point;
use crate::scalar::Scalar;
use std::collections::HashMap;

/// Filters `events` down to the edges that belong in the result, sorts them
/// by the event ordering, and cross-links each event's `position` field to
/// its twin's index in the filtered array — the position-linked graph
/// `events_to_contours` walks to trace contours without any recursion or
/// adjacency structure beyond this array.
fn collect_events<S: Scalar>(arena: &mut EventArena<S>, events: &[EventId]) -> Vec<EventId> {
    let mut result: Vec<EventId> = events
        .iter()
        .copied()
        .filter(|&id| {
            let e = arena.get(id);
            if e.is_right_endpoint {
                arena.get(e.twin).in_result
            } else {
                e.in_result
            }
        })
        .collect();
    result.sort_by(|&a, &b| arena.get(a).key().cmp(&arena.get(b).key()));

    for (index, &id) in result.iter().enumerate() {
        arena.get_mut(id).position = Some(index);
    }
    for &id in &result {
        if arena.get(id).is_right_endpoint {
            let twin = arena.get(id).twin;
            let own_position = arena.get(id).position;
            let twin_position = arena.get(twin).position;
            arena.get_mut(id).position = twin_position;
            arena.get_mut(twin).position = own_position;
        }
    }
    result
}

/// `events[position]`'s own point, scanning forward for an unvisited event
/// sharing it, falling back to the nearest unvisited event behind `position`
/// (but never before `original_index`) when no such forward neighbor exists.
fn to_next_position<S: Scalar>(
    position: isize,
    events: &[EventId],
    processed: &[bool],
    original_index: isize,
    arena: &EventArena<S>,
) -> isize {
    let point = arena.get(events[position as usize]).point;

    let mut result = position + 1;
    while (result as usize) < events.len() && arena.get(events[result as usize]).point == point {
        if !processed[result as usize] {
            return result;
        }
        result += 1;
    }

    let mut result = position - 1;
    while result >= original_index && processed[result as usize] {
        result -= 1;
    }
    result
}

/// Removes vertices that don't change direction (collinear with both
/// neighbors), treating the contour as circular and leaving any vertex that
/// repeats elsewhere in the contour (a self-intersection point) untouched —
/// collapsing through one of those would merge two loops into one.
fn shrink_collinear_vertices<S: Scalar>(contour: &mut Vec<Point<S>>) {
    let mut visited: Vec<Point<S>> = Vec::new();
    let mut self_intersections: Vec<Point<S>> = Vec::new();
    for &v in contour.iter() {
        if visited.contains(&v) {
            if !self_intersections.contains(&v) {
                self_intersections.push(v);
            }
        } else {
            visited.push(v);
        }
    }

    let at = |c: &[Point<S>], idx: isize| -> Point<S> {
        let len = c.len() as isize;
        c[idx.rem_euclid(len) as usize]
    };
    let del_at = |c: &mut Vec<Point<S>>, idx: isize| {
        let len = c.len() as isize;
        c.remove(idx.rem_euclid(len) as usize);
    };

    let mut index: isize = -(contour.len() as isize) + 1;
    while index < 0 {
        while std::cmp::max(2, -index) < contour.len() as isize
            && !self_intersections.contains(&at(contour, index + 1))
            && oracle::orientation(
                at(contour, index + 2),
                at(contour, index + 1),
                at(contour, index),
            ) == Orientation::Collinear
        {
            del_at(contour, index + 1);
        }
        index += 1;
    }
    while index < contour.len() as isize {
        while std::cmp::max(2, index) < contour.len() as isize
            && !self_intersections.contains(&at(contour, index - 1))
            && oracle::orientation(
                at(contour, index - 2),
                at(contour, index - 1),
                at(contour, index),
            ) == Orientation::Collinear
        {
            del_at(contour, index - 1);
        }
        index += 1;
    }
}

type AreInternal = HashMap<usize, bool>;
type Holes = HashMap<usize, Vec<usize>>;

/// Walks the collected, position-linked events into closed point loops,
/// recording each contour's hole parentage along the way (§4.6's
/// `below_in_result_event` rule: a contour is a hole of whatever contributing
/// edge sits immediately below its first vertex, unless that edge is itself
/// internal, in which case the new contour belongs to its grandparent).
fn events_to_contours<S: Scalar>(
    arena: &mut EventArena<S>,
    events: &[EventId],
) -> (Vec<Vec<Point<S>>>, AreInternal, Holes) {
    let mut depths: HashMap<usize, usize> = HashMap::new();
    let mut parents: HashMap<usize, usize> = HashMap::new();
    let mut are_internal: AreInternal = HashMap::new();
    let mut holes: Holes = HashMap::new();
    let mut processed = vec![false; events.len()];
    let mut contours: Vec<Vec<Point<S>>> = Vec::new();

    for index in 0..events.len() {
        if processed[index] {
            continue;
        }

        let event = events[index];
        let initial = arena.get(event).point;
        let mut contour = vec![initial];
        let mut steps = vec![event];
        let mut position = index as isize;

        while position >= index as isize {
            let step = events[position as usize];
            if arena.get(step).other_point == initial {
                break;
            }
            processed[position as usize] = true;
            steps.push(step);
            position = arena
                .get(step)
                .position
                .expect("collected event carries a cross-linked position") as isize;
            processed[position as usize] = true;
            contour.push(arena.get(events[position as usize]).point);
            position = to_next_position(position, events, &processed, index as isize, arena);
        }
        let position = if position == -1 { index as isize } else { position };
        let last_event = events[position as usize];
        processed[position as usize] = true;
        let last_position = arena
            .get(last_event)
            .position
            .expect("collected event carries a cross-linked position");
        processed[last_position] = true;

        shrink_collinear_vertices(&mut contour);
        if contour.len() < 3 {
            continue;
        }

        let contour_id = contours.len();
        let mut is_internal = false;
        if let Some(below_id) = arena.get(event).below_in_result_event {
            let below_contour_id = arena
                .get(below_id)
                .contour_id
                .expect("a below-in-result event was assembled earlier in sorted order");
            if !arena.get(below_id).result_in_out {
                holes.entry(below_contour_id).or_default().push(contour_id);
                parents.insert(contour_id, below_contour_id);
                let depth = depths.get(&below_contour_id).copied().unwrap_or(0) + 1;
                depths.insert(contour_id, depth);
                is_internal = true;
            } else if *are_internal.get(&below_contour_id).unwrap_or(&false) {
                let below_parent_id = *parents
                    .get(&below_contour_id)
                    .expect("an internal contour always has a recorded parent");
                holes.entry(below_parent_id).or_default().push(contour_id);
                parents.insert(contour_id, below_parent_id);
                let depth = depths.get(&below_contour_id).copied().unwrap_or(0);
                depths.insert(contour_id, depth);
                is_internal = true;
            }
        }
        are_internal.insert(contour_id, is_internal);

        for &step in &steps {
            if arena.get(step).is_right_endpoint {
                let twin = arena.get(step).twin;
                arena.get_mut(twin).result_in_out = true;
                arena.get_mut(twin).contour_id = Some(contour_id);
            } else {
                arena.get_mut(step).result_in_out = false;
                arena.get_mut(step).contour_id = Some(contour_id);
            }
        }
        let last_twin = arena.get(last_event).twin;
        arena.get_mut(last_twin).result_in_out = true;
        arena.get_mut(last_twin).contour_id = Some(contour_id);

        if depths.get(&contour_id).copied().unwrap_or(0) % 2 == 1 {
            contour.reverse();
        }
        contours.push(contour);
    }
    (contours, are_internal, holes)
}

fn contours_to_multipolygon<S: Scalar>(
    contours: Vec<Vec<Point<S>>>,
    are_internal: &AreInternal,
    holes: &Holes,
) -> Multipolygon<S> {
    let mut result = Vec::new();
    for index in 0..contours.len() {
        if !*are_internal.get(&index).unwrap_or(&false) {
            let border = Contour::from_validated(contours[index].clone());
            let hole_contours = holes
                .get(&index)
                .map(|ids| {
                    ids.iter()
                        .map(|&h| Contour::from_validated(contours[h].clone()))
                        .collect()
                })
                .unwrap_or_default();
            result.push(Polygon::new(border, hole_contours));
        } else if let Some(hole_ids) = holes.get(&index) {
            // A hole of a hole is itself an external polygon.
            for &hole_index in hole_ids {
                let border = Contour::from_validated(contours[hole_index].clone());
                let hole_hole_contours = holes
                    .get(&hole_index)
                    .map(|ids| {
                        ids.iter()
                            .map(|&hh| Contour::from_validated(contours[hh].clone()))
                            .collect()
                    })
                    .unwrap_or_default();
                result.push(Polygon::new(border, hole_hole_contours));
            }
        }
    }
    result
}

/// Extracts the contributing edges of a multisegment operation directly,
/// with no contour stitching — open polylines have no closure to trace.
pub fn collect_segments<S: Scalar>(
    arena: &EventArena<S>,
    events: &[EventId],
) -> Multisegment<S> {
    events
        .iter()
        .filter(|&&id| {
            let e = arena.get(id);
            !e.is_right_endpoint && e.in_result
        })
        .map(|&id| arena.get(id).segment())
        .collect()
}

/// Assembles the processed events of a plain Boolean operation into a
/// multipolygon (§4.6).
pub fn assemble<S: Scalar>(arena: &mut EventArena<S>, events: Vec<EventId>) -> Multipolygon<S> {
    let collected = collect_events(arena, &events);
    let (contours, are_internal, holes) = events_to_contours(arena, &collected);
    contours_to_multipolygon(contours, &are_internal, &holes)
}

/// Assembles `complete_intersect`'s richer result (§3 `Mix`): every point
/// where operands meet without sharing a segment, every shared segment, and
/// the ordinary polygonal intersection, ported from
/// `CompleteIntersection.compute`.
pub fn assemble_mix<S: Scalar>(arena: &mut EventArena<S>, events: Vec<EventId>) -> Mix<S> {
    let mut sorted = events;
    sorted.sort_by(|&a, &b| arena.get(a).key().cmp(&arena.get(b).key()));

    let mut multipoint: Multipoint<S> = Vec::new();
    let mut multisegment: Multisegment<S> = Vec::new();

    let mut i = 0;
    while i < sorted.len() {
        let start = arena.get(sorted[i]).point;
        let mut j = i;
        while j < sorted.len() && arena.get(sorted[j]).point == start {
            j += 1;
        }
        let group = &sorted[i..j];

        let all_right_or_not_in_result = group.iter().all(|&id| {
            let e = arena.get(id);
            e.is_right_endpoint || !e.in_result
        });
        let first_operand: OperandId = arena.get(group[0]).operand_id;
        let not_all_same_operand = group
            .iter()
            .any(|&id| arena.get(id).operand_id != first_operand);

        if all_right_or_not_in_result && not_all_same_operand {
            let mut no_segment_found = true;
            for pair in group.windows(2) {
                let (e0, e1) = (pair[0], pair[1]);
                let (operand0, is_right0) = {
                    let ev = arena.get(e0);
                    (ev.operand_id, ev.is_right_endpoint)
                };
                let (operand1, segment0, segment1) = {
                    (arena.get(e1).operand_id, arena.get(e0).segment(), arena.get(e1).segment())
                };
                if operand0 != operand1 && segment0 == segment1 {
                    no_segment_found = false;
                    if !is_right0 {
                        multisegment.push(segment1);
                    }
                }
            }
            if no_segment_found {
                multipoint.push(start);
            }
        }
        i = j;
    }

    let collected = collect_events(arena, &sorted);
    let (contours, are_internal, holes) = events_to_contours(arena, &collected);
    let polygons = contours_to_multipolygon(contours, &are_internal, &holes);

    Mix {
        points: multipoint,
        segments: multisegment,
        polygons,
    }
}
