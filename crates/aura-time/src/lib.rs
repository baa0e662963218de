//! Aura Time - Absolute dates and relative durations
//!
//! Dates are 128-bit fixed-point atoms: the high 64 bits count seconds
//! from a proleptic Gregorian epoch far enough in the past that every
//! historical year is positive internally, the low 64 bits hold four
//! 16-bit sub-second fragments, most significant first.
//!
//! - `calendar`: atom <-> calendar field conversion
//! - `text`: the `@da` and `@dr` literal grammars
//! - `unix`: Unix time conversion

pub mod calendar;
pub mod text;
pub mod unix;

pub use calendar::*;
pub use text::*;
pub use unix::*;
