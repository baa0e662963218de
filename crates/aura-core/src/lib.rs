//! Aura Core - Fundamental types for atom literals
//!
//! This crate defines the types shared by every codec in the workspace:
//! - Atoms (arbitrary-precision unsigned integers)
//! - Auras (type tags selecting a literal grammar)
//! - Dimes and coins (typed parse results)
//! - Bit and byte helpers over atoms

pub mod aura;
pub mod bits;
pub mod coin;
pub mod error;

pub use aura::*;
pub use bits::*;
pub use coin::*;
pub use error::*;
