//! Float layouts

use aura_core::{mask, Atom, Aura};
use num_traits::One;

/// Exponent and mantissa widths of an IEEE-754 shaped float
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Layout {
    pub exponent_bits: u32,
    pub mantissa_bits: u32,
}

impl Layout {
    pub const HALF: Layout = Layout::new(5, 10);
    pub const SINGLE: Layout = Layout::new(8, 23);
    pub const DOUBLE: Layout = Layout::new(11, 52);
    pub const QUAD: Layout = Layout::new(15, 112);

    pub const fn new(exponent_bits: u32, mantissa_bits: u32) -> Self {
        Layout {
            exponent_bits,
            mantissa_bits,
        }
    }

    /// Total width including the sign bit
    pub fn width(&self) -> u32 {
        1 + self.exponent_bits + self.mantissa_bits
    }

    /// Exponent bias
    pub fn bias(&self) -> i64 {
        (1i64 << (self.exponent_bits - 1)) - 1
    }

    /// Biased exponent of infinities and NaNs
    pub fn max_exponent(&self) -> u64 {
        (1u64 << self.exponent_bits) - 1
    }

    /// Canonical quiet NaN
    pub fn nan(&self) -> Atom {
        mask(u64::from(self.exponent_bits) + 1) << (self.mantissa_bits - 1)
    }

    pub fn infinity(&self, negative: bool) -> Atom {
        mask(u64::from(self.exponent_bits) + u64::from(negative)) << self.mantissa_bits
    }

    pub fn sign_bit(&self) -> Atom {
        Atom::one() << (self.exponent_bits + self.mantissa_bits)
    }
}

/// The four float auras
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Precision {
    /// `@rh`, prefix `.~~`
    Half,
    /// `@rs`, prefix `.`
    Single,
    /// `@rd`, prefix `.~`
    Double,
    /// `@rq`, prefix `.~~~`
    Quad,
}

impl Precision {
    pub fn from_aura(aura: Aura) -> Option<Self> {
        match aura {
            Aura::Rh => Some(Precision::Half),
            Aura::Rs => Some(Precision::Single),
            Aura::Rd => Some(Precision::Double),
            Aura::Rq => Some(Precision::Quad),
            _ => None,
        }
    }

    /// Precision selected by the number of `~` after the leading `.`
    pub fn from_tildes(count: usize) -> Option<Self> {
        match count {
            0 => Some(Precision::Single),
            1 => Some(Precision::Double),
            2 => Some(Precision::Half),
            3 => Some(Precision::Quad),
            _ => None,
        }
    }

    pub fn aura(self) -> Aura {
        match self {
            Precision::Half => Aura::Rh,
            Precision::Single => Aura::Rs,
            Precision::Double => Aura::Rd,
            Precision::Quad => Aura::Rq,
        }
    }

    pub fn layout(self) -> Layout {
        match self {
            Precision::Half => Layout::HALF,
            Precision::Single => Layout::SINGLE,
            Precision::Double => Layout::DOUBLE,
            Precision::Quad => Layout::QUAD,
        }
    }

    /// Literal prefix
    pub fn prefix(self) -> &'static str {
        match self {
            Precision::Half => ".~~",
            Precision::Single => ".",
            Precision::Double => ".~",
            Precision::Quad => ".~~~",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_values() {
        assert_eq!(Layout::HALF.nan(), Atom::from(0x7e00u32));
        assert_eq!(Layout::HALF.infinity(false), Atom::from(0x7c00u32));
        assert_eq!(Layout::HALF.infinity(true), Atom::from(0xfc00u32));
        assert_eq!(Layout::SINGLE.nan(), Atom::from(0x7fc0_0000u32));
        assert_eq!(Layout::DOUBLE.infinity(true), Atom::from(0xfff0_0000_0000_0000u64));
        assert_eq!(Layout::QUAD.nan(), Atom::from(0x7fff_8u128 << 108));
        assert_eq!(Layout::DOUBLE.sign_bit(), Atom::from(1u64 << 63));
    }

    #[test]
    fn test_widths() {
        assert_eq!(Layout::HALF.width(), 16);
        assert_eq!(Layout::SINGLE.width(), 32);
        assert_eq!(Layout::DOUBLE.width(), 64);
        assert_eq!(Layout::QUAD.width(), 128);
        assert_eq!(Layout::DOUBLE.bias(), 1023);
    }

    #[test]
    fn test_precision_mapping() {
        for precision in [
            Precision::Half,
            Precision::Single,
            Precision::Double,
            Precision::Quad,
        ] {
            assert_eq!(Precision::from_aura(precision.aura()), Some(precision));
            let tildes = precision.prefix().len() - 1;
            assert_eq!(Precision::from_tildes(tildes), Some(precision));
        }
        assert_eq!(Precision::from_aura(Aura::Ud), None);
        assert_eq!(Precision::from_tildes(4), None);
    }
}
