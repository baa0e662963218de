//! Bit-block and byte helpers over atoms
//!
//! Blocks are `2^bloq` bits wide: bloq 3 is bytes, bloq 4 is 16-bit words.

use num_traits::{One, Zero};

use crate::Atom;

/// Number of `2^bloq`-bit blocks needed to hold `atom`
pub fn met(bloq: u32, atom: &Atom) -> u64 {
    atom.bits().div_ceil(1u64 << bloq)
}

/// The low `n` blocks of `atom`
pub fn end(bloq: u32, n: u64, atom: &Atom) -> Atom {
    atom & mask(n << bloq)
}

/// `atom` with its low `n` blocks dropped
pub fn rsh(bloq: u32, n: u64, atom: &Atom) -> Atom {
    atom >> (n << bloq)
}

/// An atom of `bits` one-bits
pub fn mask(bits: u64) -> Atom {
    (Atom::one() << bits) - 1u32
}

/// Little-endian bytes; zero has none
pub fn atom_to_bytes_le(atom: &Atom) -> Vec<u8> {
    if atom.is_zero() {
        Vec::new()
    } else {
        atom.to_bytes_le()
    }
}

/// Pack UTF-8 text into a cord (first byte least significant)
pub fn cord_from_str(text: &str) -> Atom {
    Atom::from_bytes_le(text.as_bytes())
}

/// Unpack a cord, replacing invalid UTF-8
pub fn cord_to_string(atom: &Atom) -> String {
    String::from_utf8_lossy(&atom_to_bytes_le(atom)).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_met() {
        assert_eq!(met(3, &Atom::zero()), 0);
        assert_eq!(met(3, &Atom::from(0xffu32)), 1);
        assert_eq!(met(3, &Atom::from(0x100u32)), 2);
        assert_eq!(met(4, &Atom::from(0x1_0000u32)), 2);
        assert_eq!(met(0, &Atom::from(5u32)), 3);
    }

    #[test]
    fn test_end_rsh() {
        let atom = Atom::from(0x1234_5678u32);
        assert_eq!(end(3, 1, &atom), Atom::from(0x78u32));
        assert_eq!(end(4, 1, &atom), Atom::from(0x5678u32));
        assert_eq!(rsh(4, 1, &atom), Atom::from(0x1234u32));
        assert_eq!(end(5, 1, &atom), atom);
    }

    #[test]
    fn test_cord() {
        assert_eq!(cord_from_str(""), Atom::zero());
        assert_eq!(cord_from_str("abc"), Atom::from(0x63_6261u32));
        assert_eq!(cord_to_string(&Atom::from(0x63_6261u32)), "abc");
        assert_eq!(cord_to_string(&Atom::zero()), "");
        assert_eq!(cord_to_string(&Atom::from(0xffu32)), "\u{fffd}");
    }

    proptest! {
        #[test]
        fn prop_cord_roundtrip(text in "[^\\x00]*") {
            prop_assert_eq!(cord_to_string(&cord_from_str(&text)), text);
        }
    }
}
