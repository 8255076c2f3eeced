use sldreader_style::Rule;

/// The standardized rendering pixel size, 0.28mm, in meters.
pub const STANDARD_PIXEL_SIZE: f64 = 0.00028;

/// Converts a map resolution in meters per pixel to a scale denominator.
pub fn scale_denominator(resolution: f64) -> f64 {
    resolution / STANDARD_PIXEL_SIZE
}

/// Whether `rule` applies at `resolution`. Both bounds are exclusive; a
/// missing bound does not constrain.
pub fn in_scale(rule: &Rule, resolution: f64) -> bool {
    let denominator = scale_denominator(resolution);
    let above_min = rule
        .min_scale_denominator
        .is_none_or(|min| denominator > min);
    let below_max = rule
        .max_scale_denominator
        .is_none_or(|max| denominator < max);
    above_min && below_max
}
