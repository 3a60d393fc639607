// SPDX-License-Identifier: MIT
//
// Significant-digit rounding.
//
// The position of the most significant digit is `floor(log10(|n|))`. The
// chosen rounding function is applied after shifting that many digits to
// the right of the decimal point, then the shift is undone. The shift uses
// an exact power of ten rather than a fractional unit, so `1.23` to two
// digits comes back as `1.2` and not `1.2000000000000002`.
//
// The shifted value can still land an ulp off an integer (`0.07 * 100` is
// `7.000000000000001`). Such values are snapped to the integer before the
// policy runs, otherwise `ceil(0.07, 1)` would climb to `0.08`.
//
// The decision is made on |n| and the sign reapplied afterwards, so
// `floor(-123, 1)` is `-100`, mirroring `floor(123, 1)`.

/// Shifted values within this many ulps of an integer count as that integer.
const SNAP_ULPS: f64 = 4.0;

/// Beyond this many digits every f64 is already exact.
const MAX_DIGITS: u32 = 400;

/// How to resolve the digits beyond the requested precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rounding {
    /// Nearest, halves away from zero.
    #[default]
    Round,
    /// Toward zero (on the magnitude).
    Floor,
    /// Away from zero (on the magnitude).
    Ceil,
}

impl Rounding {
    /// Look up a policy by its lowercase name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "round" => Self::Round,
            "floor" => Self::Floor,
            "ceil" => Self::Ceil,
            _ => return None,
        })
    }

    #[inline]
    fn apply(self, x: f64) -> f64 {
        let nearest = x.round();
        if (x - nearest).abs() <= SNAP_ULPS * f64::EPSILON * nearest.abs().max(1.0) {
            return nearest;
        }
        match self {
            Self::Round => x.round(),
            Self::Floor => x.floor(),
            Self::Ceil => x.ceil(),
        }
    }
}

/// Round `number` to `digits` significant digits.
///
/// Zero (and any non-finite value) is returned unchanged. `digits` of 0 is
/// treated as 1; very large `digits` leave the number as is.
///
/// ```
/// use glint_units::precision::{round_to_precision, Rounding};
///
/// assert_eq!(round_to_precision(123.0, 2, Rounding::Round), 120.0);
/// assert_eq!(round_to_precision(123.0, 2, Rounding::Ceil), 130.0);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn round_to_precision(number: f64, digits: u32, policy: Rounding) -> f64 {
    if number == 0.0 || !number.is_finite() {
        return number;
    }

    let magnitude = number.abs();
    // log10 of a finite non-zero f64 lies within ±324.
    let exponent = magnitude.log10().floor() as i32;
    let digits = digits.clamp(1, MAX_DIGITS) as i32;
    let shift = digits - 1 - exponent;

    let scale = 10f64.powi(shift.abs());
    if !scale.is_finite() {
        // More digits than an f64 can hold at this exponent.
        return number;
    }
    let rounded = if shift >= 0 {
        policy.apply(magnitude * scale) / scale
    } else {
        policy.apply(magnitude / scale) * scale
    };

    rounded.copysign(number)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
