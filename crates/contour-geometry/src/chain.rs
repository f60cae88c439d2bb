//! Andrew's monotone chain hull — the reference algorithm.
//!
//! The production path is the angular scan in [`crate::hull`], whose
//! behavior near the ±π discontinuity of `atan2` is validated against
//! this implementation in the test suite rather than assumed correct.

use glam::Vec2;

/// Computes the convex hull of `points` via monotone chain, returned as
/// counter-clockwise index order (in a y-up coordinate system).
///
/// Collinear points on the boundary are dropped. Sets of two or fewer
/// points are returned as-is, matching [`crate::hull::giftwrap`]'s
/// degenerate handling.
pub fn monotone_chain(points: &[Vec2]) -> Vec<usize> {
    let n = points.len();
    if n <= 2 {
        return (0..n).collect();
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        points[a]
            .x
            .total_cmp(&points[b].x)
            .then(points[a].y.total_cmp(&points[b].y))
    });

    let mut hull: Vec<usize> = Vec::with_capacity(n + 1);

    // Lower hull.
    for &i in &order {
        while hull.len() >= 2 && turns_right(points, hull[hull.len() - 2], hull[hull.len() - 1], i)
        {
            hull.pop();
        }
        hull.push(i);
    }

    // Upper hull.
    let lower_len = hull.len() + 1;
    for &i in order.iter().rev().skip(1) {
        while hull.len() >= lower_len
            && turns_right(points, hull[hull.len() - 2], hull[hull.len() - 1], i)
        {
            hull.pop();
        }
        hull.push(i);
    }

    // Last point duplicates the first.
    hull.pop();
    hull
}

/// True when a→b→c is a clockwise (or collinear) turn.
fn turns_right(points: &[Vec2], a: usize, b: usize, c: usize) -> bool {
    let ab = points[b] - points[a];
    let ac = points[c] - points[a];
    ab.perp_dot(ac) <= 0.0
}
