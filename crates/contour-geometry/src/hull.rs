//! Gift-wrapping convex hull over index space.
//!
//! Returns hull vertices as indices into the input slice so callers can
//! keep drawing attributes attached to the original points. The walk
//! selects each next vertex by polar angle: among all unconfirmed points,
//! pick the one whose direction from the current vertex has the smallest
//! `atan2` angle strictly greater than the angle used to reach the
//! current vertex; collinear candidates tie on angle and the farthest
//! one wins, so interior points of a shared edge never become vertices.
//! The start vertex (maximum y, ties broken by minimum x) is always on
//! the hull and is the only confirmed vertex that remains a valid
//! target, closing the polygon.
//!
//! O(N·H) for N input points and H hull vertices — one full scan per
//! hull edge. Fine for the tens-of-points sets this engine feeds it
//! every frame.

use contour_types::{ContourError, ContourResult};
use glam::Vec2;

/// Sentinel below any value `atan2` can produce (range is [-π, π]),
/// so the first step of the walk accepts any candidate.
const ANGLE_FLOOR: f32 = -100.0;

/// Sentinel above any reachable angle, used as the initial "best so far".
const ANGLE_CEIL: f32 = 100.0;

/// Computes the convex hull of `points`, returned as an ordered index
/// sequence describing a closed polygon (the last index implicitly
/// connects back to the first).
///
/// Degenerate sizes are handled explicitly: an empty set yields an empty
/// hull, a single point is its own hull, and two points form a closed
/// two-vertex loop. A fully collinear set collapses to its two extreme
/// points. Duplicate points are tolerated inside larger sets,
/// but a set that collapses to a single location leaves the angular scan
/// with no admissible candidate and fails with
/// [`ContourError::DegenerateHull`] rather than looping.
pub fn giftwrap(points: &[Vec2]) -> ContourResult<Vec<usize>> {
    match points.len() {
        0 => return Ok(Vec::new()),
        1 => return Ok(vec![0]),
        2 => return Ok(vec![0, 1]),
        _ => {}
    }

    let start = start_index(points);
    let mut hull = vec![start];
    let mut current = start;
    let mut prev_angle = ANGLE_FLOOR;

    loop {
        let mut best_angle = ANGLE_CEIL;
        let mut best_dist = 0.0f32;
        let mut best: Option<usize> = None;

        for (i, p) in points.iter().enumerate() {
            if i == current {
                continue;
            }
            // Confirmed hull vertices are off-limits, except the start,
            // which is the valid target that closes the loop.
            if i != start && hull.contains(&i) {
                continue;
            }
            let d = *p - points[current];
            let angle = d.y.atan2(d.x);
            if prev_angle >= angle {
                continue;
            }
            // Equal angles mean collinear candidates; the farthest one
            // is the true hull vertex, the rest sit on its edge.
            let dist = d.length_squared();
            if angle < best_angle || (angle == best_angle && dist > best_dist) {
                best_angle = angle;
                best_dist = dist;
                best = Some(i);
            }
        }

        let next = best.ok_or(ContourError::DegenerateHull {
            point_count: points.len(),
        })?;
        if next == start {
            break;
        }
        prev_angle = best_angle;
        hull.push(next);
        current = next;
    }

    Ok(hull)
}

/// Start vertex: maximum y-coordinate, ties broken by minimum x.
/// Such a point is always on the hull.
///
/// The tie-break direction matters. From the unique topmost point the
/// walk's first edge points down-left, just above the -π end of the
/// `atan2` range, so every later edge clears the threshold in turn. A
/// co-topmost point sits at direction exactly π — the one angle the
/// threshold can never admit as a *first* step. Starting from the
/// leftmost of the tied points turns that π edge into the closing edge
/// of the walk, where it is admissible, instead of an unreachable
/// opening edge.
fn start_index(points: &[Vec2]) -> usize {
    let mut index = 0;
    for (i, p) in points.iter().enumerate().skip(1) {
        if p.y > points[index].y || (p.y == points[index].y && p.x < points[index].x) {
            index = i;
        }
    }
    index
}

/// Tests whether `q` lies inside or on the convex polygon described by
/// `hull` indices over `points`, within `tolerance`.
///
/// Winding-agnostic: accepts hulls produced in either rotational order.
/// Used to check the hull's enclosing invariant. A two-vertex hull
/// encloses its segment; a single vertex encloses only itself.
pub fn encloses(points: &[Vec2], hull: &[usize], q: Vec2, tolerance: f32) -> bool {
    match hull {
        [] => return false,
        [i] => return (points[*i] - q).length_squared() <= tolerance * tolerance,
        [i, j] => {
            let a = points[*i];
            let ab = points[*j] - a;
            let t = if ab.length_squared() > 0.0 {
                ((q - a).dot(ab) / ab.length_squared()).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let nearest = a + ab * t;
            return (nearest - q).length_squared() <= tolerance * tolerance;
        }
        _ => {}
    }

    let mut has_pos = false;
    let mut has_neg = false;
    for (k, &i) in hull.iter().enumerate() {
        let j = hull[(k + 1) % hull.len()];
        let edge = points[j] - points[i];
        let to_q = q - points[i];
        let cross = edge.perp_dot(to_q);
        if cross > tolerance {
            has_pos = true;
        } else if cross < -tolerance {
            has_neg = true;
        }
    }
    !(has_pos && has_neg)
}
