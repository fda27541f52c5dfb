//! Chains loose wire segments into connected polylines.
//!
//! Footprint libraries draw outlines and silkscreen as bags of unordered
//! two-point wires. Merging stitches them back into paths so they can be
//! stroked or emitted as closed board outlines.

use cavalier_contours::polyline::{PlineVertex, Polyline};

use crate::point::Point;

/// Endpoint snap distance for segment merging, in millimeters.
pub const MERGE_TOLERANCE: f64 = 1e-3;

fn near(a: Point, b: Point, tolerance: f64) -> bool {
    a.distance(b) <= tolerance
}

/// Stitch segments into maximal chains, joining endpoints that fall within
/// `tolerance` of each other. Segment direction is ignored.
///
/// A chain whose two ends meet is returned closed, with the duplicate end
/// vertex dropped. O(n^2) pairwise scan; footprint outlines are tiny.
#[must_use]
pub fn merge_segments(segments: &[(Point, Point)], tolerance: f64) -> Vec<Polyline<f64>> {
    let mut pool: Vec<(Point, Point)> = segments.to_vec();
    let mut chains = Vec::new();

    while !pool.is_empty() {
        let (a, b) = pool.remove(0);
        let mut chain = vec![a, b];

        loop {
            // Endpoints move as the chain grows, so re-read them every pass.
            let head = chain[0];
            let tail = *chain.last().unwrap();

            let mut attach = None;
            for (i, &(p, q)) in pool.iter().enumerate() {
                attach = if near(p, tail, tolerance) {
                    Some((i, q, true))
                } else if near(q, tail, tolerance) {
                    Some((i, p, true))
                } else if near(p, head, tolerance) {
                    Some((i, q, false))
                } else if near(q, head, tolerance) {
                    Some((i, p, false))
                } else {
                    None
                };
                if attach.is_some() {
                    break;
                }
            }

            match attach {
                Some((i, point, at_tail)) => {
                    pool.swap_remove(i);
                    if at_tail {
                        chain.push(point);
                    } else {
                        chain.insert(0, point);
                    }
                }
                None => break,
            }
        }

        let closes = chain.len() > 3 && near(chain[0], *chain.last().unwrap(), tolerance);
        if closes {
            chain.pop();
        }

        let mut pl = if closes {
            Polyline::new_closed()
        } else {
            Polyline::new()
        };
        for p in chain {
            pl.vertex_data.push(PlineVertex::new(p.x, p.y, 0.0));
        }
        chains.push(pl);
    }

    chains
}
