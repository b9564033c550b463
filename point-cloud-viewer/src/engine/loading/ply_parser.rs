use bevy::math::Vec3;
use constants::coordinate_system::transform_coordinates;
use constants::point_cloud::{END_HEADER_TOKEN, POINT_COLOUR};

/// Single render point in render space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub position: Vec3,
    pub colour: Vec3,
}

/// Line accounting for one parse, used for load logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseSummary {
    /// Lines up to and including `end_header`, plus any later sentinel lines.
    pub header_lines: usize,
    /// Lines after the header that were considered as points.
    pub data_lines: usize,
    /// Data lines dropped because a coordinate was not numeric.
    pub malformed_lines: usize,
    /// The input ended without a newline and its last line was not parsed.
    pub unterminated_tail: bool,
}

impl ParseSummary {
    pub fn accepted(&self) -> usize {
        self.data_lines - self.malformed_lines
    }
}

/// Parsed point cloud. Immutable after parsing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloud {
    points: Vec<Point>,
    summary: ParseSummary,
}

impl PointCloud {
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn summary(&self) -> ParseSummary {
        self.summary
    }

    /// Flat `3×N` position array in input order.
    pub fn positions(&self) -> Vec<f32> {
        self.points
            .iter()
            .flat_map(|point| point.position.to_array())
            .collect()
    }

    /// Flat `3×N` colour array parallel to [`PointCloud::positions`].
    pub fn colours(&self) -> Vec<f32> {
        self.points
            .iter()
            .flat_map(|point| point.colour.to_array())
            .collect()
    }
}

/// Parse PLY-style ASCII text into render-space points.
///
/// Everything up to the `end_header` line is skipped without inspection. Each
/// following line contributes one point from its first three space-separated
/// tokens, with Y inverted, then scaled and offset. Lines whose coordinates do
/// not parse are dropped. The text after the last `\n` is never read, so a
/// final row without a trailing newline is discarded.
pub fn parse_point_cloud(text: &str, scale: f32, offset: Vec3) -> PointCloud {
    let mut points = Vec::new();
    let mut summary = ParseSummary::default();
    let mut in_header = true;

    let mut lines = text.split('\n').peekable();
    while let Some(line) = lines.next() {
        if lines.peek().is_none() {
            summary.unterminated_tail = !line.is_empty();
            break;
        }

        if line.contains(END_HEADER_TOKEN) {
            in_header = false;
            summary.header_lines += 1;
            continue;
        }

        if in_header {
            summary.header_lines += 1;
            continue;
        }

        summary.data_lines += 1;
        match parse_point(line, scale as f64, offset) {
            Some(point) => points.push(point),
            None => summary.malformed_lines += 1,
        }
    }

    PointCloud { points, summary }
}

fn parse_point(line: &str, scale: f64, offset: Vec3) -> Option<Point> {
    let mut tokens = line.split(' ');
    let mut next_value = || tokens.next().map_or(f64::NAN, parse_leading_float);
    let (raw_x, raw_y, raw_z) = (next_value(), next_value(), next_value());

    let (x, y, z) = transform_coordinates(raw_x, raw_y, raw_z);
    if x.is_nan() || y.is_nan() || z.is_nan() {
        return None;
    }

    Some(Point {
        position: Vec3::new(
            (x * scale + offset.x as f64) as f32,
            (y * scale + offset.y as f64) as f32,
            (z * scale + offset.z as f64) as f32,
        ),
        colour: Vec3::from_array(POINT_COLOUR),
    })
}

/// Read the longest numeric prefix of a token, NaN when there is none.
/// Leading whitespace and trailing garbage (e.g. `\r`) are ignored.
fn parse_leading_float(token: &str) -> f64 {
    let trimmed = token.trim_start();
    let end = numeric_prefix_len(trimmed);
    if end == 0 {
        return f64::NAN;
    }
    trimmed[..end].parse().unwrap_or(f64::NAN)
}

fn numeric_prefix_len(text: &str) -> usize {
    const INFINITY: &str = "Infinity";

    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if text[end..].starts_with(INFINITY) {
        return end + INFINITY.len();
    }

    let integer_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - integer_start;

    if bytes.get(end) == Some(&b'.') {
        let fraction_start = end + 1;
        let mut fraction_end = fraction_start;
        while bytes.get(fraction_end).is_some_and(u8::is_ascii_digit) {
            fraction_end += 1;
        }
        digits += fraction_end - fraction_start;
        if digits > 0 {
            end = fraction_end;
        }
    }

    if digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let exponent_start = exponent_end;
        while bytes.get(exponent_end).is_some_and(u8::is_ascii_digit) {
            exponent_end += 1;
        }
        if exponent_end > exponent_start {
            end = exponent_end;
        }
    }

    end
}
