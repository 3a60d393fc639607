// SPDX-License-Identifier: MIT
//
// glint-units — small numeric formatters for terminal output.
//
//   precision  round to N significant digits (round / floor / ceil)
//   magnitude  1234567 → "1.2M", with a 1000 or 1024 unit base
//
// Both are pure functions over f64 with no allocation beyond the returned
// string.

pub mod magnitude;
pub mod precision;

pub use magnitude::{magnitude, magnitude_default};
pub use precision::{Rounding, round_to_precision};
