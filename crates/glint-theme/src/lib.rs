//! # glint-theme — style alias tables
//!
//! Maps symbolic style names (`"error"`, `"warning"`, `"dim"`) to concrete
//! color tokens that `glint_term::color` understands.
//!
//! # Resolution
//!
//! ```text
//! "error"
//!     │
//!     ▼
//! sheet.rs:   alias table lookup (one step, names pass through)
//!     │
//!     ▼
//! "c00"
//!     │
//!     ▼
//! glint_term::color:  token → SGR escape (ESC[38;5;160m)
//! ```
//!
//! Sheets come from a builtin preset, optionally layered with overrides
//! from code or a TOML file. They are not mutated once built.

pub mod builtin;
pub mod error;
pub mod sheet;

pub use builtin::{builtin_names, builtin_sheet};
pub use error::{Result, ThemeError};
pub use sheet::StyleSheet;
