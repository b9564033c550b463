/// Coordinate transformation matrix (row-major: [x_new, y_new, z_new])
/// Default: Y flip. Source files are Y-up, the render space is Y-down.
pub const COORDINATE_TRANSFORM: [[f64; 3]; 3] = [
    [1.0, 0.0, 0.0],  // X = X
    [0.0, -1.0, 0.0], // Y = -Y
    [0.0, 0.0, 1.0],  // Z = Z
];

/// Apply coordinate transformation matrix to ensure consistency.
/// Transforms input coordinates using predefined transformation matrix.
pub fn transform_coordinates(x: f64, y: f64, z: f64) -> (f64, f64, f64) {
    let input = [x, y, z];
    let mut output = [0.0; 3];

    for (row, out) in COORDINATE_TRANSFORM.iter().zip(output.iter_mut()) {
        for (weight, value) in row.iter().zip(input.iter()) {
            // Skip zero weights so NaN inputs only reach their own axis.
            if *weight != 0.0 {
                *out += weight * value;
            }
        }
    }

    (output[0], output[1], output[2])
}
