//! Aura Ob - Ship-number obfuscation
//!
//! A format-preserving permutation of 32-bit ship numbers, so that
//! adjacent planets get unrelated names:
//! - `muk`: MurmurHash3 round function
//! - `Feistel`: generalized Feistel network on `[0, a*b)` with cycle walking
//! - `conceal` / `reveal`: the permutation and its inverse over atoms

pub mod feistel;
pub mod muk;
pub mod ob;

pub use feistel::*;
pub use muk::*;
pub use ob::*;
