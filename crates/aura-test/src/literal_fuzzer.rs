//! Literal Fuzzer - Seeded round-trip testing for every aura
//!
//! Tests:
//! - `parse(aura, render(aura, n)) == n` for random atoms of every width
//! - Text auras over random strings from their alphabets
//! - Floats across all four layouts, NaN payloads excluded

use aura_codec::{scot, slaw};
use aura_core::{cord_from_str, end, Atom, Aura};
use aura_float::Precision;
use num_traits::Zero;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const TAS_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789-";
/// `@ta` text is written raw, so it only draws from its own alphabet
const TA_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789-._~";

/// Fuzzer configuration
#[derive(Clone, Debug)]
pub struct FuzzerConfig {
    /// Number of atoms tried per aura
    pub iterations: usize,
    /// Widest random atom, in bits; fixed-width auras cap it further
    pub max_bits: u32,
    /// Auras to exercise
    pub auras: Vec<Aura>,
    /// Random seed
    pub seed: u64,
}

impl Default for FuzzerConfig {
    fn default() -> Self {
        FuzzerConfig {
            iterations: 500,
            max_bits: 128,
            auras: Aura::ALL.to_vec(),
            seed: 42,
        }
    }
}

impl FuzzerConfig {
    /// Light fuzzing for quick tests
    pub fn light() -> Self {
        FuzzerConfig {
            iterations: 100,
            max_bits: 64,
            ..Default::default()
        }
    }

    /// Heavy fuzzing for thorough testing
    pub fn heavy() -> Self {
        FuzzerConfig {
            iterations: 5000,
            max_bits: 512,
            ..Default::default()
        }
    }
}

/// An atom that did not survive a render/parse round trip
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundTripFailure {
    pub aura: Aura,
    pub atom: Atom,
    pub rendered: String,
    pub parsed: Option<Atom>,
}

/// Round-trip fuzzer
pub struct LiteralFuzzer {
    config: FuzzerConfig,
    rng: StdRng,
}

impl LiteralFuzzer {
    /// Create a new fuzzer
    pub fn new(config: FuzzerConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        LiteralFuzzer { config, rng }
    }

    /// Random atom of at most `bits` bits; the width itself is random too
    /// so that short atoms are as common as long ones
    pub fn random_atom(&mut self, bits: u32) -> Atom {
        if bits == 0 {
            return Atom::zero();
        }
        let width = self.rng.gen_range(1..=bits);
        let bytes: Vec<u8> = (0..width.div_ceil(8)).map(|_| self.rng.gen()).collect();
        end(0, u64::from(width), &Atom::from_bytes_le(&bytes))
    }

    fn random_float(&mut self, precision: Precision) -> Atom {
        let layout = precision.layout();
        let mut bits = self.random_atom(layout.width());
        let exponent = end(
            0,
            u64::from(layout.exponent_bits),
            &(&bits >> layout.mantissa_bits),
        );
        if exponent == Atom::from(layout.max_exponent()) {
            // Clear the low exponent bit so NaN payloads never come up
            bits ^= Atom::from(1u32) << layout.mantissa_bits;
        }
        bits
    }

    fn random_text(&mut self, max_len: usize) -> String {
        let len = self.rng.gen_range(0..=max_len);
        (0..len)
            .map(|_| {
                if self.rng.gen_bool(0.75) {
                    char::from(self.rng.gen_range(0x20u8..0x7f))
                } else {
                    self.rng.gen::<char>()
                }
            })
            .collect()
    }

    fn random_word(&mut self, lead: &[u8], tail: &[u8], max_len: usize) -> String {
        let mut word = String::new();
        if !lead.is_empty() {
            word.push(char::from(lead[self.rng.gen_range(0..lead.len())]));
        }
        for _ in 0..self.rng.gen_range(0..max_len) {
            word.push(char::from(tail[self.rng.gen_range(0..tail.len())]));
        }
        word
    }

    /// Random atom that `aura` can render without loss
    pub fn sample(&mut self, aura: Aura) -> Atom {
        match aura {
            Aura::F => Atom::from(self.rng.gen_range(0u32..2)),
            Aura::N => Atom::zero(),
            Aura::T => {
                let text = self.random_text(16);
                cord_from_str(&text)
            }
            Aura::Ta => {
                let knot = self.random_word(b"", TA_CHARS, 16);
                cord_from_str(&knot)
            }
            Aura::Tas => {
                let symbol = self.random_word(LOWERCASE, TAS_CHARS, 16);
                cord_from_str(&symbol)
            }
            _ => match Precision::from_aura(aura) {
                Some(precision) => self.random_float(precision),
                None => {
                    let bits = aura
                        .bit_width()
                        .map_or(self.config.max_bits, |width| width.min(self.config.max_bits));
                    self.random_atom(bits)
                }
            },
        }
    }

    /// Run the fuzzer
    pub fn run(&mut self) -> FuzzResult {
        let mut result = FuzzResult::new();
        let auras = self.config.auras.clone();

        for aura in auras {
            for _ in 0..self.config.iterations {
                let atom = self.sample(aura);
                result.cases += 1;
                if let Some(failure) = check_round_trip(aura, &atom) {
                    result.failures.push(failure);
                }
            }
        }

        result
    }
}

/// Render then parse `atom`; `None` when it comes back unchanged
pub fn check_round_trip(aura: Aura, atom: &Atom) -> Option<RoundTripFailure> {
    let rendered = scot(aura, atom);
    let parsed = slaw(aura, &rendered);
    if parsed.as_ref() == Some(atom) {
        return None;
    }
    Some(RoundTripFailure {
        aura,
        atom: atom.clone(),
        rendered,
        parsed,
    })
}

/// Fuzzing result
#[derive(Debug)]
pub struct FuzzResult {
    pub cases: u64,
    pub failures: Vec<RoundTripFailure>,
}

impl FuzzResult {
    pub fn new() -> Self {
        FuzzResult {
            cases: 0,
            failures: Vec::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }
}

impl Default for FuzzResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Property-based test helpers
pub mod properties {
    use super::*;
    use aura_codec::{nuck, rend, scot_with};
    use aura_core::Coin;
    use aura_float::RenderConfig;

    /// Property: rendering then parsing gives the atom back
    pub fn round_trips(aura: Aura, atom: &Atom) -> bool {
        check_round_trip(aura, atom).is_none()
    }

    /// Property: a canonical literal re-renders to itself
    pub fn canonical(aura: Aura, text: &str) -> bool {
        slaw(aura, text).is_some_and(|atom| scot(aura, &atom) == text)
    }

    /// Property: untyped parsing recovers any rendered coin
    pub fn coin_round_trips(coin: &Coin) -> bool {
        nuck(&rend(coin)).as_ref() == Some(coin)
    }

    /// Significant digits in a rendered float, `None` for `nan`/`inf`
    pub fn significant_digits(literal: &str) -> Option<usize> {
        let body = literal.trim_start_matches(['.', '~']).trim_start_matches('-');
        if body == "nan" || body == "inf" {
            return None;
        }
        let mantissa = body.split('e').next().unwrap_or(body);
        let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
        Some(digits.trim_start_matches('0').len())
    }

    /// Property: the shortest rendering of `bits` round-trips, and one
    /// digit fewer does not
    pub fn float_minimal(precision: Precision, bits: &Atom) -> bool {
        let aura = precision.aura();
        let shortest = scot(aura, bits);
        if slaw(aura, &shortest).as_ref() != Some(bits) {
            return false;
        }
        match significant_digits(&shortest) {
            Some(digits) if digits > 1 => {
                let config = RenderConfig::significant(digits as u32 - 1);
                let shorter = scot_with(aura, bits, &config);
                slaw(aura, &shorter).as_ref() != Some(bits)
            }
            _ => true,
        }
    }
}
