//! Step quantization

/// Round `value` to the nearest multiple of `step`, preserving sign
///
/// Computes `round(|x| / step) * step * sign(x)`, so halves round away
/// from zero for both signs. A non-positive or non-finite step leaves the
/// value untouched. Zero stays zero (never `-0.0` promoted to a step).
#[inline]
pub fn quantize(value: f64, step: f64) -> f64 {
    if !(step.is_finite() && step > 0.0) || value == 0.0 {
        return value;
    }
    let multiplier = 1.0 / step;
    ((value.abs() * multiplier).round() / multiplier).copysign(value)
}
