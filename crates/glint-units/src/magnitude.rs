// SPDX-License-Identifier: MIT
//
// Human-readable magnitudes: 1234567 → "1.2M", 74449000 (base 1024) → "71M".
//
// The tier is found by stepping a divisor up by `base` while the number is
// still at least the next step, rather than by taking a logarithm. Powers
// of 1000 and 1024 are exact in f64, so values sitting exactly on a tier
// boundary (1024 in base 1024) always land on the upper tier.
//
// Single-digit results keep one decimal; anything wider is rounded to an
// integer. A trailing ".0" is never printed. The ladder stops at E, so very
// large values produce three or more digits there ("100E").

/// Unit suffixes in tier order.
pub const SUFFIXES: [&str; 7] = ["", "K", "M", "G", "T", "P", "E"];

/// Highest tier index.
const MAX_TIER: usize = SUFFIXES.len() - 1;

/// The base used by [`magnitude_default`].
pub const DEFAULT_BASE: f64 = 1000.0;

/// Format `number` with a unit suffix in `base` (typically 1000 or 1024).
///
/// Negative numbers are formatted on their absolute value with a leading
/// `-`, dropped when the result rounds to zero. Non-finite numbers and bases not greater than 1 fall back to the
/// plain `Display` form of `number`.
///
/// ```
/// use glint_units::magnitude::magnitude;
///
/// assert_eq!(magnitude(1234567.0, 1024.0), "1.2M");
/// assert_eq!(magnitude(999.0, 1000.0), "999");
/// ```
#[must_use]
pub fn magnitude(number: f64, base: f64) -> String {
    if number == 0.0 {
        return "0".to_owned();
    }
    if !number.is_finite() || base.is_nan() || base <= 1.0 {
        return number.to_string();
    }

    let abs = number.abs();
    let (tier, divisor) = tier_of(abs, base);
    let scaled = round_scaled(abs / divisor);

    let sign = if number < 0.0 && scaled != 0.0 { "-" } else { "" };
    format!("{sign}{scaled}{}", SUFFIXES[tier])
}

/// [`magnitude`] in base 1000.
#[must_use]
pub fn magnitude_default(number: f64) -> String {
    magnitude(number, DEFAULT_BASE)
}

/// Largest tier whose threshold `base^tier` does not exceed `abs`, with the
/// matching divisor.
fn tier_of(abs: f64, base: f64) -> (usize, f64) {
    let mut tier = 0;
    let mut divisor = 1.0;
    while tier < MAX_TIER && abs >= divisor * base {
        divisor *= base;
        tier += 1;
    }
    (tier, divisor)
}

/// One decimal below 10, whole numbers from 10 up.
fn round_scaled(scaled: f64) -> f64 {
    if scaled < 10.0 {
        (scaled * 10.0).round() / 10.0
    } else {
        scaled.round()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── Below base ──────────────────────────────────────────────────────

    #[test]
    fn small_numbers_have_no_suffix() {
        assert_eq!(magnitude_default(0.0), "0");
        assert_eq!(magnitude_default(1.0), "1");
        assert_eq!(magnitude_default(109.0), "109");
        assert_eq!(magnitude_default(999.0), "999");
    }

    #[test]
    fn below_base_1024() {
        assert_eq!(magnitude(1000.0, 1024.0), "1000");
        assert_eq!(magnitude(1001.0, 1024.0), "1001");
    }

    #[test]
    fn small_fractions_keep_one_decimal() {
        assert_eq!(magnitude_default(1.25), "1.3");
        assert_eq!(magnitude_default(12.4), "12");
    }

    // ── Base 1024 ───────────────────────────────────────────────────────

    #[test]
    fn kilo_boundary_1024() {
        assert_eq!(magnitude(1024.0, 1024.0), "1K");
        assert_eq!(magnitude(1075.0, 1024.0), "1K");
        assert_eq!(magnitude(1076.0, 1024.0), "1.1K");
    }

    #[test]
    fn base_1024_ladder() {
        assert_eq!(magnitude(9999.0, 1024.0), "9.8K");
        assert_eq!(magnitude(12345.0, 1024.0), "12K");
        assert_eq!(magnitude(123_456.0, 1024.0), "121K");
        assert_eq!(magnitude(1_024_000.0, 1024.0), "1000K");
        assert_eq!(magnitude(1_234_567.0, 1024.0), "1.2M");
        assert_eq!(magnitude(74_449_000.0, 1024.0), "71M");
    }

    #[test]
    fn powers_of_two() {
        assert_eq!(magnitude(2f64.powi(32), 1024.0), "4G");
        assert_eq!(magnitude(2f64.powi(64), 1024.0), "16E");
    }

    // ── Base 1000 ───────────────────────────────────────────────────────

    #[test]
    fn kilo_boundary_1000() {
        assert_eq!(magnitude_default(1000.0), "1K");
        assert_eq!(magnitude_default(1024.0), "1K");
        assert_eq!(magnitude_default(1075.0), "1.1K");
    }

    #[test]
    fn large_powers_of_ten() {
        assert_eq!(magnitude_default(1e10), "10G");
        assert_eq!(magnitude_default(1e20), "100E");
    }

    #[test]
    fn top_tier_is_capped() {
        assert_eq!(magnitude_default(1e18), "1E");
        assert_eq!(magnitude_default(1e24), "1000000E");
    }

    #[test]
    fn rounding_up_to_ten_drops_decimal() {
        assert_eq!(magnitude_default(9960.0), "10K");
    }

    // ── Edges ───────────────────────────────────────────────────────────

    #[test]
    fn negative_numbers_keep_sign() {
        assert_eq!(magnitude(-1_234_567.0, 1024.0), "-1.2M");
        assert_eq!(magnitude_default(-5.0), "-5");
    }

    #[test]
    fn negative_zero_is_zero() {
        assert_eq!(magnitude_default(-0.0), "0");
    }

    #[test]
    fn tiny_negatives_round_to_unsigned_zero() {
        assert_eq!(magnitude_default(-0.04), "0");
        assert_eq!(magnitude_default(0.04), "0");
        assert_eq!(magnitude_default(-0.05), "-0.1");
    }

    #[test]
    fn non_finite_and_bad_base() {
        assert_eq!(magnitude_default(f64::INFINITY), "inf");
        assert_eq!(magnitude_default(f64::NAN), "NaN");
        assert_eq!(magnitude(5000.0, 1.0), "5000");
    }

    #[test]
    fn suffix_table() {
        assert_eq!(SUFFIXES.len(), 7);
        assert_eq!(SUFFIXES[0], "");
        assert_eq!(SUFFIXES[MAX_TIER], "E");
    }
}
