//! Monotone cubic interpolation (Fritsch-Carlson tangents). The sampled
//! curve passes through every control point and never overshoots beyond the
//! values of adjacent points, which is what keeps a price trend line honest.

/// Sample a smooth path through `points`, producing `samples_per_segment`
/// points per control-point pair plus the final control point. `points` must
/// be ordered by x; fewer than two points are returned as-is.
pub fn monotone_path(points: &[(f64, f64)], samples_per_segment: usize) -> Vec<(f64, f64)> {
    if points.len() < 2 || samples_per_segment == 0 {
        return points.to_vec();
    }
    let tangents = monotone_tangents(points);
    let mut path = Vec::with_capacity((points.len() - 1) * samples_per_segment + 1);
    for k in 0..points.len() - 1 {
        let (x0, y0) = points[k];
        let (x1, y1) = points[k + 1];
        let h = x1 - x0;
        for s in 0..samples_per_segment {
            let t = s as f64 / samples_per_segment as f64;
            let t2 = t * t;
            let t3 = t2 * t;
            let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
            let h10 = t3 - 2.0 * t2 + t;
            let h01 = -2.0 * t3 + 3.0 * t2;
            let h11 = t3 - t2;
            let y = h00 * y0 + h10 * h * tangents[k] + h01 * y1 + h11 * h * tangents[k + 1];
            path.push((x0 + t * h, y));
        }
    }
    if let Some(last) = points.last() {
        path.push(*last);
    }
    path
}

fn monotone_tangents(points: &[(f64, f64)]) -> Vec<f64> {
    let n = points.len();
    let mut deltas = Vec::with_capacity(n - 1);
    for k in 0..n - 1 {
        let h = points[k + 1].0 - points[k].0;
        if h.abs() < f64::EPSILON {
            deltas.push(0.0);
        } else {
            deltas.push((points[k + 1].1 - points[k].1) / h);
        }
    }

    let mut tangents = Vec::with_capacity(n);
    tangents.push(deltas[0]);
    for k in 1..n - 1 {
        if deltas[k - 1] * deltas[k] <= 0.0 {
            // local extremum, flatten to avoid a bump
            tangents.push(0.0);
        } else {
            tangents.push((deltas[k - 1] + deltas[k]) / 2.0);
        }
    }
    tangents.push(deltas[n - 2]);

    // Fritsch-Carlson: clamp tangents so each segment stays monotone.
    for k in 0..n - 1 {
        if deltas[k] == 0.0 {
            tangents[k] = 0.0;
            tangents[k + 1] = 0.0;
            continue;
        }
        let alpha = tangents[k] / deltas[k];
        let beta = tangents[k + 1] / deltas[k];
        let norm = alpha * alpha + beta * beta;
        if norm > 9.0 {
            let tau = 3.0 / norm.sqrt();
            tangents[k] = tau * alpha * deltas[k];
            tangents[k + 1] = tau * beta * deltas[k];
        }
    }
    tangents
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indexed(values: &[f64]) -> Vec<(f64, f64)> {
        values
            .iter()
            .enumerate()
            .map(|(i, &y)| (i as f64, y))
            .collect()
    }

    #[test]
    fn passes_through_control_points() {
        let points = indexed(&[2400.0, 2210.0, 2290.0, 2000.0, 2181.0, 2500.0]);
        let path = monotone_path(&points, 16);
        for point in &points {
            assert!(
                path.iter()
                    .any(|(x, y)| (x - point.0).abs() < 1e-9 && (y - point.1).abs() < 1e-9),
                "missing control point {:?}",
                point
            );
        }
    }

    #[test]
    fn never_overshoots_adjacent_values() {
        let points = indexed(&[0.0, 10.0, 10.0, 0.0, 5.0]);
        let path = monotone_path(&points, 32);
        for (x, y) in path {
            let k = (x.floor() as usize).min(points.len() - 2);
            let lo = points[k].1.min(points[k + 1].1);
            let hi = points[k].1.max(points[k + 1].1);
            assert!(
                y >= lo - 1e-9 && y <= hi + 1e-9,
                "overshoot at x={x}: y={y} outside [{lo}, {hi}]"
            );
        }
    }

    #[test]
    fn monotone_input_stays_monotone() {
        let points = indexed(&[0.0, 2.0, 8.0, 10.0, 11.0]);
        let path = monotone_path(&points, 32);
        for pair in path.windows(2) {
            assert!(pair[1].1 >= pair[0].1 - 1e-9);
        }
    }

    #[test]
    fn flat_input_stays_flat() {
        let points = indexed(&[3.0, 3.0, 3.0]);
        let path = monotone_path(&points, 8);
        assert!(path.iter().all(|(_, y)| (y - 3.0).abs() < 1e-12));
    }

    #[test]
    fn degenerate_inputs_pass_through() {
        assert!(monotone_path(&[], 8).is_empty());
        assert_eq!(monotone_path(&[(0.0, 1.0)], 8), vec![(0.0, 1.0)]);
    }
}
