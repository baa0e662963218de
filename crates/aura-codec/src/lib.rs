//! Aura Codec - Parse and render every atom literal
//!
//! Typed entry points take an aura and work on one atom:
//! - `slaw` / `try_parse`: parse, `None` on failure
//! - `slav` / `parse`: parse, with a descriptive error on failure
//! - `scot` / `render`: render
//!
//! Untyped entry points work on coins: `nuck` / `classify` parse any
//! literal, `rend` renders any coin.
//!
//! The per-aura codecs live in their own modules and are usable directly.

pub mod integer;
pub mod ip;
pub mod parser;
pub mod phonetic;
pub mod renderer;
pub mod shape;
pub mod ship;
pub mod syllables;
pub mod text;

pub use integer::*;
pub use ip::*;
pub use parser::*;
pub use phonetic::*;
pub use renderer::*;
pub use shape::*;
pub use ship::*;
pub use syllables::*;
pub use text::*;

pub use aura_core::{Atom, Aura, AuraError, AuraResult, Coin, Dime};
pub use aura_float::RenderConfig;

pub use parser::slav as parse;
pub use parser::slaw as try_parse;
pub use renderer::scot as render;
