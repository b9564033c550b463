use std::f64::consts::TAU;

/// Map any angle onto `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle % TAU;
    if wrapped >= 0.0 {
        return wrapped;
    }

    // Tiny negative remainders round up to exactly TAU.
    let shifted = wrapped + TAU;
    if shifted >= TAU { 0.0 } else { shifted }
}

/// Width of one segment in radians.
pub fn segment_angle(total_segments: usize) -> f64 {
    TAU / total_segments as f64
}

/// Index of the segment containing `angle`, in `0..total_segments`.
pub fn segment_for_angle(angle: f64, total_segments: usize) -> usize {
    let normalized = normalize_angle(angle);
    (normalized / segment_angle(total_segments)).floor() as usize % total_segments
}
