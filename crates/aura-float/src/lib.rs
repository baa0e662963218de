//! Aura Float - IEEE-754 shaped floats on arbitrary-precision integers
//!
//! No native float is touched: decimal literals become exact rationals
//! that are rounded into a bit pattern, and bit patterns are rendered
//! with Dragon4 on big integers.
//!
//! - `layout`: exponent/mantissa layouts and the four float auras
//! - `construct`: decimal literal -> bits
//! - `dragon4`: shortest (or cut-off) digit generation
//! - `format`: bits -> deconstructed parts -> literal text

pub mod config;
pub mod construct;
pub mod dragon4;
pub mod format;
pub mod layout;

pub use config::*;
pub use construct::*;
pub use dragon4::*;
pub use format::*;
pub use layout::*;
