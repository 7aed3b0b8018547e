//! Snapping of dial angles to discrete value steps.

/// Angular distance between two neighbouring steps, or `None` for a
/// continuous dial (`step == 0`).
pub fn angle_step(min: f64, max: f64, step: f64) -> Option<f64> {
    if step == 0.0 {
        return None;
    }
    let steps_count = (max - min) / step;
    Some(360.0 / steps_count)
}

/// Snap an angle to the nearest multiple of the dial's angle step.
///
/// A zero `step` leaves the angle untouched. The result may be exactly 360
/// when the angle is closer to the end of the dial than to the last step.
pub fn snap_to_step(angle: f64, min: f64, max: f64, step: f64) -> f64 {
    match angle_step(min, max, step) {
        Some(increment) => (angle / increment).round() * increment,
        None => angle,
    }
}

/// Whether `step` divides `max - min` into a whole number of steps.
pub fn divides_evenly(min: f64, max: f64, step: f64) -> bool {
    if step == 0.0 {
        return true;
    }
    let steps_count = (max - min) / step;
    let nearest = steps_count.round();
    nearest >= 1.0 && (steps_count - nearest).abs() <= 1e-9 * nearest.max(1.0)
}
