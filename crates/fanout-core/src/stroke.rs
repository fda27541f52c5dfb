//! Widens straight-segment centerlines into filled outlines.

use cavalier_contours::polyline::{PlineSource, PlineVertex, Polyline};

use crate::point::Point;

const COINCIDENT_EPS: f64 = 1e-9;
const PARALLEL_EPS: f64 = 1e-9;

fn unit(from: Point, to: Point) -> Point {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let len = dx.hypot(dy);
    Point::new(dx / len, dy / len)
}

/// Perpendicular offset of `at` for a segment running along `dir`. Positive
/// offsets fall on the right-hand side.
fn end_offset(at: Point, dir: Point, offset: f64) -> Point {
    Point::new(at.x + dir.y * offset, at.y - dir.x * offset)
}

/// Miter corner: intersection of the two adjacent offset lines. Falls back to
/// the plain offset of the incoming segment when they are near parallel.
fn miter(prev: Point, at: Point, next: Point, offset: f64) -> Point {
    let da = unit(prev, at);
    let db = unit(at, next);
    let a0 = end_offset(at, da, offset);
    let b0 = end_offset(at, db, offset);

    let denom = da.x * db.y - da.y * db.x;
    if denom.abs() < PARALLEL_EPS {
        return a0;
    }
    let t = ((b0.x - a0.x) * db.y - (b0.y - a0.y) * db.x) / denom;
    Point::new(a0.x + t * da.x, a0.y + t * da.y)
}

fn offset_ring(points: &[Point], offset: f64) -> Polyline<f64> {
    let n = points.len();
    let mut pl = Polyline::new_closed();
    for i in 0..n {
        let prev = points[(i + n - 1) % n];
        let next = points[(i + 1) % n];
        let p = miter(prev, points[i], next, offset);
        pl.vertex_data.push(PlineVertex::new(p.x, p.y, 0.0));
    }
    pl
}

/// Expand a centerline into the closed outline(s) of its stroked shape.
///
/// Open paths become a single capsule with mitered corners and semicircular
/// end caps. Closed paths become two rings, the outer and inner boundary of
/// the stroked band. Bulges on the input are ignored; merged wire chains are
/// straight segments only.
///
/// # Panics
///
/// Panics when `width` is not strictly positive.
#[must_use]
pub fn stroke(path: &Polyline<f64>, width: f64) -> Vec<Polyline<f64>> {
    assert!(width > 0.0, "stroke needs a positive width, got {width}");
    let h = width / 2.0;

    let mut points: Vec<Point> = Vec::with_capacity(path.vertex_count());
    for v in &path.vertex_data {
        let p = Point::new(v.x, v.y);
        if points.last().map_or(true, |last| last.distance(p) > COINCIDENT_EPS) {
            points.push(p);
        }
    }

    if path.is_closed() {
        if points.len() > 1
            && points[0].distance(*points.last().unwrap()) <= COINCIDENT_EPS
        {
            points.pop();
        }
        if points.len() < 3 {
            return Vec::new();
        }
        return vec![offset_ring(&points, h), offset_ring(&points, -h)];
    }

    let n = points.len();
    if n < 2 {
        return Vec::new();
    }

    let mut right = Vec::with_capacity(n);
    let mut left = Vec::with_capacity(n);
    for i in 0..n {
        let (r, l) = if i == 0 {
            let d = unit(points[0], points[1]);
            (end_offset(points[0], d, h), end_offset(points[0], d, -h))
        } else if i == n - 1 {
            let d = unit(points[n - 2], points[n - 1]);
            (end_offset(points[i], d, h), end_offset(points[i], d, -h))
        } else {
            (
                miter(points[i - 1], points[i], points[i + 1], h),
                miter(points[i - 1], points[i], points[i + 1], -h),
            )
        };
        right.push(r);
        left.push(l);
    }

    // Walk out on the right side, cap, walk back on the left, cap. Bulge 1 on
    // the vertex before each cap draws the semicircle.
    let mut pl = Polyline::new_closed();
    for (i, p) in right.iter().enumerate() {
        let bulge = if i == n - 1 { 1.0 } else { 0.0 };
        pl.vertex_data.push(PlineVertex::new(p.x, p.y, bulge));
    }
    for (i, p) in left.iter().rev().enumerate() {
        let bulge = if i == n - 1 { 1.0 } else { 0.0 };
        pl.vertex_data.push(PlineVertex::new(p.x, p.y, bulge));
    }
    vec![pl]
}
