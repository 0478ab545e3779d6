/// Multipliers a tick step is rounded up to, per power of ten.
const NICE_STEPS: [f64; 11] = [1.0, 1.2, 1.5, 2.0, 2.5, 3.0, 4.0, 5.0, 6.0, 8.0, 10.0];

/// Smallest "nice" number that is at least `raw`.
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let base = 10f64.powi(raw.log10().floor() as i32);
    let fraction = raw / base;
    let nice = NICE_STEPS
        .iter()
        .copied()
        .find(|&n| fraction <= n + 1e-9)
        .unwrap_or(10.0);
    nice * base
}

/// Exactly `count` evenly spaced values starting at zero whose last value
/// covers `max`.
pub fn value_ticks(max: f64, count: usize) -> Vec<f64> {
    if count < 2 {
        return vec![0.0];
    }
    let step = if max.is_finite() && max > 0.0 {
        nice_step(max / (count - 1) as f64)
    } else {
        1.0
    };
    (0..count).map(|i| i as f64 * step).collect()
}
