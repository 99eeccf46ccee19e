// File: crates/timegraph-core/src/curve.rs
// Summary: Curve generators converting screen-space points into SVG-style path strings.

use crate::types::PlotPoint;

// Math.round semantics without "-0" leaking into path text.
#[inline]
fn round_px(v: f64) -> f64 {
    let r = v.round();
    if r == 0.0 { 0.0 } else { r }
}

/// Path for a straight polyline between the points, in caller order.
/// No rounding is applied; a single point yields just the move-to.
pub fn linear(points: &[PlotPoint]) -> String {
    let mut d = String::new();
    for (i, p) in points.iter().enumerate() {
        if i == 0 {
            d.push_str(&format!("M{},{}", p.x, p.y));
        } else {
            d.push_str(&format!(" {},{}", p.x, p.y));
        }
    }
    d
}

/// Uniform (alpha = 0) Catmull-Rom spline through the points.
///
/// Uses the fixed Catmull-Rom to cubic Bezier conversion matrix with 1/6
/// normalization; the virtual control points at the boundaries duplicate the
/// nearest real point. Coordinates are rounded to integer pixels to keep the
/// path string small.
///
/// Conversion matrix:
/// ```text
///    0       1       0       0
///  -1/6      1      1/6      0
///    0      1/6      1     -1/6
///    0       0       1       0
/// ```
pub fn catmull_rom_uniform(points: &[PlotPoint]) -> String {
    let length = points.len();
    if length == 0 {
        return String::new();
    }
    let normalization = 1.0 / 6.0;
    let mut d = format!("M{},{}", round_px(points[0].x), round_px(points[0].y));
    for i in 0..length.saturating_sub(1) {
        let p0 = if i == 0 { points[0] } else { points[i - 1] };
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = if i + 2 < length { points[i + 2] } else { p2 };

        let bp1 = PlotPoint::new(
            (-p0.x + 6.0 * p1.x + p2.x) * normalization,
            (-p0.y + 6.0 * p1.y + p2.y) * normalization,
        );
        let bp2 = PlotPoint::new(
            (p1.x + 6.0 * p2.x - p3.x) * normalization,
            (p1.y + 6.0 * p2.y - p3.y) * normalization,
        );

        d.push_str(&format!(
            " C{},{} {},{} {},{}",
            round_px(bp1.x),
            round_px(bp1.y),
            round_px(bp2.x),
            round_px(bp2.y),
            round_px(p2.x),
            round_px(p2.y),
        ));
    }
    d
}

/// Non-uniform Catmull-Rom spline (chordal alpha = 1.0, centripetal 0.5).
///
/// `alpha == 0` delegates to [`catmull_rom_uniform`] and produces identical
/// output. The non-uniform blend needs the distances between each window of
/// four control points raised to alpha and 2*alpha, so it is noticeably
/// heavier per segment than the uniform path; prefer uniform or linear for
/// very large point counts.
pub fn catmull_rom(points: &[PlotPoint], alpha: f64) -> String {
    if alpha == 0.0 {
        return catmull_rom_uniform(points);
    }

    let length = points.len();
    if length == 0 {
        return String::new();
    }
    let mut d = format!("M{},{}", round_px(points[0].x), round_px(points[0].y));
    for i in 0..length.saturating_sub(1) {
        let p0 = if i == 0 { points[0] } else { points[i - 1] };
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = if i + 2 < length { points[i + 2] } else { p2 };

        let d1 = p0.distance(&p1);
        let d2 = p1.distance(&p2);
        let d3 = p2.distance(&p3);

        // Catmull-Rom to cubic Bezier conversion matrix:
        //
        // A = 2d1^2a + 3d1^a * d2^a + d2^2a
        // B = 2d3^2a + 3d3^a * d2^a + d2^2a
        //
        // [   0             1            0          0          ]
        // [   -d2^2a/N      A/N          d1^2a/N    0          ]
        // [   0             d3^2a/M      B/M        -d2^2a/M   ]
        // [   0             0            1          0          ]
        let d3_pow_a = d3.powf(alpha);
        let d3_pow_2a = d3.powf(2.0 * alpha);
        let d2_pow_a = d2.powf(alpha);
        let d2_pow_2a = d2.powf(2.0 * alpha);
        let d1_pow_a = d1.powf(alpha);
        let d1_pow_2a = d1.powf(2.0 * alpha);

        let a = 2.0 * d1_pow_2a + 3.0 * d1_pow_a * d2_pow_a + d2_pow_2a;
        let b = 2.0 * d3_pow_2a + 3.0 * d3_pow_a * d2_pow_a + d2_pow_2a;
        let mut n = 3.0 * d1_pow_a * (d1_pow_a + d2_pow_a);
        if n > 0.0 {
            n = 1.0 / n;
        }
        let mut m = 3.0 * d3_pow_a * (d3_pow_a + d2_pow_a);
        if m > 0.0 {
            m = 1.0 / m;
        }

        let mut bp1 = PlotPoint::new(
            (-d2_pow_2a * p0.x + a * p1.x + d1_pow_2a * p2.x) * n,
            (-d2_pow_2a * p0.y + a * p1.y + d1_pow_2a * p2.y) * n,
        );
        let mut bp2 = PlotPoint::new(
            (d3_pow_2a * p1.x + b * p2.x - d2_pow_2a * p3.x) * m,
            (d3_pow_2a * p1.y + b * p2.y - d2_pow_2a * p3.y) * m,
        );

        // Degenerate control points collapse to the origin when the blend
        // coefficients zero out; substitute the nearest real point instead of
        // emitting a malformed curve.
        if bp1.x == 0.0 && bp1.y == 0.0 {
            bp1 = p1;
        }
        if bp2.x == 0.0 && bp2.y == 0.0 {
            bp2 = p2;
        }

        d.push_str(&format!(
            " C{},{} {},{} {},{}",
            round_px(bp1.x),
            round_px(bp1.y),
            round_px(bp2.x),
            round_px(bp2.y),
            round_px(p2.x),
            round_px(p2.y),
        ));
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_zero_rounds_to_plain_zero() {
        let d = catmull_rom_uniform(&[PlotPoint::new(-0.2, 0.0)]);
        assert_eq!(d, "M0,0");
    }
}
