//! Path string encoding and decoding.
//!
//! The wire form is the move/line/close subset of SVG path data:
//! `M10.0,20.0L30.0,40.0`. Coordinates are written with exactly one decimal
//! digit; the quantization is deliberately lossy and callers must not expect
//! sub-0.1-unit fidelity to survive a round trip.

use crate::error::{SketchError, SketchResult};
use crate::types::Point;

fn coords_to_string(point: Point) -> String {
    format!("{:.1},{:.1}", point.x, point.y)
}

/// Encode an ordered point sequence as a path string.
///
/// Empty input yields the empty string; a single point yields the
/// move-and-close form `M{x},{y}Z`; two or more points yield a move followed
/// by a line to each subsequent point.
pub fn encode(points: &[Point]) -> String {
    match points {
        [] => String::new(),
        [only] => format!("M{}Z", coords_to_string(*only)),
        _ => {
            let mut out = String::with_capacity(points.len() * 12);
            for (index, point) in points.iter().enumerate() {
                out.push(if index == 0 { 'M' } else { 'L' });
                out.push_str(&coords_to_string(*point));
            }
            out
        }
    }
}

fn is_command(c: char) -> bool {
    matches!(c, 'M' | 'L' | 'C' | 'Z')
}

fn parse_coord(token: &str, fragment: &str) -> SketchResult<f64> {
    let value: f64 = token
        .parse()
        .map_err(|_| SketchError::malformed(format!("non-numeric coordinate {token:?}"), fragment))?;
    if !value.is_finite() {
        return Err(SketchError::malformed(
            format!("non-finite coordinate {token:?}"),
            fragment,
        ));
    }
    Ok(value)
}

/// Decode a path string back into its point sequence.
///
/// Splits on the `M`/`L`/`C`/`Z` command markers and parses two comma or
/// space delimited floats per move/line command. `Z` contributes no
/// coordinates. `C` is accepted syntactically but its control points are not
/// reconstructed: only the final anchor pair is kept, a known limitation of
/// this decoder. Malformed input (unknown command, wrong token count,
/// non-numeric coordinate) fails with [`SketchError::MalformedPath`].
pub fn decode(path: &str) -> SketchResult<Vec<Point>> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let mut points = Vec::new();
    let mut start = 0;
    let mut bounds: Vec<usize> = trimmed
        .char_indices()
        .skip(1)
        .filter_map(|(i, c)| is_command(c).then_some(i))
        .collect();
    bounds.push(trimmed.len());

    for end in bounds {
        let fragment = trimmed[start..end].trim();
        start = end;
        if fragment.is_empty() {
            continue;
        }

        let command = fragment.chars().next().unwrap_or_default();
        if !is_command(command) {
            return Err(SketchError::malformed(
                format!("expected a path command, found {command:?}"),
                fragment,
            ));
        }

        let tokens: Vec<&str> = fragment[command.len_utf8()..]
            .split([' ', ','])
            .filter(|t| !t.is_empty())
            .collect();

        match (command, tokens.len()) {
            ('Z', 0) => {}
            ('Z', _) => {
                return Err(SketchError::malformed(
                    "close command takes no coordinates",
                    fragment,
                ));
            }
            ('M' | 'L', 2) => {
                points.push(Point::new(
                    parse_coord(tokens[0], fragment)?,
                    parse_coord(tokens[1], fragment)?,
                ));
            }
            // Curves carry three coordinate pairs; only the anchor survives.
            ('C', 6) => {
                points.push(Point::new(
                    parse_coord(tokens[4], fragment)?,
                    parse_coord(tokens[5], fragment)?,
                ));
            }
            (_, n) => {
                return Err(SketchError::malformed(
                    format!("wrong coordinate count {n} for {command:?}"),
                    fragment,
                ));
            }
        }
    }

    Ok(points)
}
