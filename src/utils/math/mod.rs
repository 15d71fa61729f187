use crate::config::MAX_DISPLAY_DECIMALS;

/// Round to a fixed number of decimals, half away from zero
/// Display only, never feed the result back into a computation.
///
/// # Arguments
/// * `value` - value to round
/// * `decimals` - number of decimals to keep, clamped to [`MAX_DISPLAY_DECIMALS`]
#[inline]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(decimals.min(MAX_DISPLAY_DECIMALS) as i32);
    let rounded = (value * scale).round() / scale;
    // avoid printing "-0"
    if rounded == 0.0 { 0.0 } else { rounded }
}
