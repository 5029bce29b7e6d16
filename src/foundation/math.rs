/// Clamp into `[0, 1]`. NaN collapses to 0 so downstream style values stay finite.
pub fn clamp01(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// Round to a fixed number of decimals; keeps emitted style strings stable across platforms.
pub(crate) fn round_to(v: f64, decimals: i32) -> f64 {
    let k = 10f64.powi(decimals);
    let r = (v * k).round() / k;
    if r == 0.0 { 0.0 } else { r }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
