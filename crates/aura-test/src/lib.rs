//! Aura Test Harness - Round-trip fuzzing and cross-crate scenarios
//!
//! This crate provides:
//! - A seeded round-trip fuzzer over random atoms of every aura
//! - Property helpers shared by the fuzzer and the fuzz targets
//! - End-to-end literal scenarios across the codec crates

pub mod integration;
pub mod literal_fuzzer;

pub use integration::*;
pub use literal_fuzzer::*;
