//! Per-character gradient generation.
//!
//! The ratio formulas below are exact, including the center tie-break and the
//! truncating interpolation. Tests pin them character-for-character.

use super::{GradientDirection, Rgb};

/// Linear per-channel interpolation, truncated toward zero.
///
/// `channel = start + (end - start) * ratio`
pub fn interpolate(start: Rgb, end: Rgb, ratio: f64) -> Rgb {
    let [sr, sg, sb] = start.channels();
    let [er, eg, eb] = end.channels();

    let channel = |s: u8, e: u8| -> u8 {
        let value = f64::from(s) + (f64::from(e) - f64::from(s)) * ratio;
        // `as` truncates toward zero and saturates, so out-of-range ratios clamp.
        value as u8
    };

    Rgb::new(channel(sr, er), channel(sg, eg), channel(sb, eb))
}

/// Generates exactly `length` colors from `start` to `end` along `direction`.
pub fn generate(start: Rgb, end: Rgb, length: usize, direction: GradientDirection) -> Vec<Rgb> {
    (0..length)
        .map(|index| interpolate(start, end, ratio(index, length, direction)))
        .collect()
}

/// Interpolation ratio for position `index` of a run of `length` characters.
///
/// - `LeftToRight`: `i / (n-1)`
/// - `RightToLeft`: `(n-1-i) / (n-1)`
/// - `CenterToEnds`: center `c = n/2` (lower index on even lengths); `i/c` up
///   to the center, `(n-1-i)/(n-1-c)` after it. The ratio peaks at the center,
///   so the center takes `end` and both outer characters take `start`.
/// - `EndsToCenter`: `1 - CenterToEnds`
///
/// Runs of one character have no span to divide; they take ratio 0 for
/// `LeftToRight`/`RightToLeft` and follow the center rule otherwise.
pub fn ratio(index: usize, length: usize, direction: GradientDirection) -> f64 {
    match direction {
        GradientDirection::LeftToRight => {
            if length <= 1 {
                0.0
            } else {
                index as f64 / (length - 1) as f64
            }
        }
        GradientDirection::RightToLeft => {
            if length <= 1 {
                0.0
            } else {
                (length - 1 - index) as f64 / (length - 1) as f64
            }
        }
        GradientDirection::CenterToEnds => center_ratio(index, length),
        GradientDirection::EndsToCenter => 1.0 - center_ratio(index, length),
    }
}

fn center_ratio(index: usize, length: usize) -> f64 {
    let center = length / 2;
    if index <= center {
        if center == 0 {
            0.0
        } else {
            index as f64 / center as f64
        }
    } else {
        // index > center implies length - 1 > center, so the divisor is non-zero.
        (length - 1 - index) as f64 / (length - 1 - center) as f64
    }
}
