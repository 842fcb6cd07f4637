//! Decoding of the packed layout strings GraphViz writes back into DOT
//! (`pos`, `bb`, `width`, `height`).
//!
//! Every function here is total: malformed numbers decode to `NaN` and are
//! propagated rather than reported. GraphViz's y axis grows upward, so all
//! decoded y coordinates are negated.

use crate::label::{Geometry, Point};
use once_cell::sync::Lazy;
use regex::Regex;

/// Points per inch; default multiplier for GraphViz inch sizes.
pub const DEFAULT_UNIT_SCALE: f64 = 64.0;
/// Multiplier applied to a node's `height`.
pub const NODE_HEIGHT_SCALE: f64 = 48.0;
/// Divisor applied to the height component of a `bb` value.
pub const BOUNDS_HEIGHT_DIVISOR: f64 = 64.0;

const LINE_CONTINUATION: &str = "\\\n";

static FLOAT_PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)").unwrap()
});

/// Parses the longest numeric prefix of `raw`, `NaN` when there is none.
///
/// `"12.5pt"` is `12.5`, `"  -3"` is `-3`, `"abc"` and `""` are `NaN`.
pub fn parse_float(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let Some(found) = FLOAT_PREFIX_RE.find(trimmed) else {
        return f64::NAN;
    };
    let text = found.as_str();
    if let Some(rest) = text.strip_suffix("Infinity") {
        return if rest == "-" {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }
    text.parse::<f64>().unwrap_or(f64::NAN)
}

/// Decodes `"x,y"` into a point with y flipped.
pub fn parse_point(raw: &str) -> Point {
    let mut parts = raw.split(',');
    let x = parts.next().map(parse_float).unwrap_or(f64::NAN);
    let y = parts.next().map(parse_float).unwrap_or(f64::NAN);
    Point { x, y: -y }
}

/// Decodes an edge spline `pos` such as `"e,52,36 27,71 27,63\\\n 27,54"`.
///
/// The two-character end/start marker is dropped, the remainder is split on
/// single spaces and each token is decoded as a point after removing line
/// continuation markers.
pub fn parse_spline(raw: &str) -> Vec<Point> {
    let body: String = raw.chars().skip(2).collect();
    body.split(' ')
        .map(|token| parse_point(&token.replace(LINE_CONTINUATION, "")))
        .collect()
}

/// Decodes `"x,y,width,height"`; height is divided by `height_divisor`.
pub fn parse_bounding_box(raw: &str, height_divisor: f64) -> Geometry {
    let mut parts = raw.split(',').map(parse_float);
    let mut next = || parts.next().unwrap_or(f64::NAN);
    let x = next();
    let y = next();
    let width = next();
    let height = next();
    Geometry {
        x,
        y: -y,
        width,
        height: height / height_divisor,
    }
}

/// Scales a GraphViz inch value; a missing value scales to `NaN`.
pub fn scale(raw: Option<&str>, multiplier: f64) -> f64 {
    raw.map(parse_float).unwrap_or(f64::NAN) * multiplier
}
