use crate::error::GeometryError;

/// Approximate the integral of `func` over `[start, end]` with `num_segments`
/// equal segments: interior samples at full weight, the two endpoints at half.
pub fn approximate_integral<F>(
    func: F,
    start: f64,
    end: f64,
    num_segments: usize,
) -> Result<f64, GeometryError>
where
    F: Fn(f64) -> f64,
{
    if num_segments == 0 {
        return Err(GeometryError::NoSegments);
    }

    let step = (end - start) / num_segments as f64;
    let interior: f64 = (1..num_segments)
        .map(|i| func(start + i as f64 * step))
        .sum();

    Ok(step * (interior + (func(start) + func(end)) / 2.0))
}
