//! Structured (aura, bytes) inputs survive render then parse.

#![no_main]

use arbitrary::Arbitrary;
use aura_core::{end, Atom, Aura};
use aura_test::check_round_trip;
use libfuzzer_sys::fuzz_target;

/// Auras that can render any atom of their width without loss
const AURAS: [Aura; 20] = [
    Aura::C,
    Aura::Da,
    Aura::Dr,
    Aura::If,
    Aura::Is,
    Aura::P,
    Aura::Q,
    Aura::Sb,
    Aura::Sd,
    Aura::Si,
    Aura::Sv,
    Aura::Sw,
    Aura::Sx,
    Aura::Ub,
    Aura::Ud,
    Aura::Ui,
    Aura::Uv,
    Aura::Uw,
    Aura::Ux,
    Aura::F,
];

#[derive(Arbitrary, Debug)]
struct Input {
    aura: u8,
    bytes: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let aura = AURAS[usize::from(input.aura) % AURAS.len()];
    let mut atom = Atom::from_bytes_le(&input.bytes);
    if let Some(width) = aura.bit_width() {
        atom = end(0, u64::from(width), &atom);
    }
    if let Some(failure) = check_round_trip(aura, &atom) {
        panic!("{failure:?}");
    }
});
