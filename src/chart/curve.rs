//! Monotone cubic interpolation in X.
//!
//! Tangents follow Steffen's method as used by d3's `curveMonotoneX`, so the
//! curve never overshoots between two samples.

use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

fn sign(v: f64) -> f64 {
    if v < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Tangent at `p1` given its neighbours.
fn interior_slope(p0: Point, p1: Point, p2: Point) -> f64 {
    let h0 = p1.x - p0.x;
    let h1 = p2.x - p1.x;
    let s0 = if h0 != 0.0 { (p1.y - p0.y) / h0 } else { 0.0 };
    let s1 = if h1 != 0.0 { (p2.y - p1.y) / h1 } else { 0.0 };
    let p = if h0 + h1 != 0.0 { (s0 * h1 + s1 * h0) / (h0 + h1) } else { 0.0 };
    let slope = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if slope.is_finite() {
        slope
    } else {
        0.0
    }
}

/// Tangent at an end point from the secant and the neighbour's tangent.
fn end_slope(from: Point, to: Point, neighbour: f64) -> f64 {
    let h = to.x - from.x;
    if h != 0.0 {
        (3.0 * (to.y - from.y) / h - neighbour) / 2.0
    } else {
        neighbour
    }
}

fn tangents(points: &[Point]) -> Vec<f64> {
    let n = points.len();
    let mut t = vec![0.0; n];
    for i in 1..n - 1 {
        t[i] = interior_slope(points[i - 1], points[i], points[i + 1]);
    }
    t[0] = end_slope(points[0], points[1], t[1]);
    t[n - 1] = end_slope(points[n - 2], points[n - 1], t[n - 2]);
    t
}

/// SVG path data through `points`: `M` only for one point, a straight `L`
/// for two, cubic `C` segments otherwise.
pub fn monotone_path(points: &[Point]) -> String {
    let mut d = String::new();
    let Some(first) = points.first() else {
        return d;
    };
    let _ = write!(d, "M{:.2},{:.2}", first.x, first.y);

    match points.len() {
        1 => {}
        2 => {
            let _ = write!(d, "L{:.2},{:.2}", points[1].x, points[1].y);
        }
        _ => {
            let t = tangents(points);
            for i in 0..points.len() - 1 {
                let (a, b) = (points[i], points[i + 1]);
                let dx = (b.x - a.x) / 3.0;
                let _ = write!(
                    d,
                    "C{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
                    a.x + dx,
                    a.y + dx * t[i],
                    b.x - dx,
                    b.y - dx * t[i + 1],
                    b.x,
                    b.y
                );
            }
        }
    }
    d
}
