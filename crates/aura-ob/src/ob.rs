//! Ship-number concealment
//!
//! Galaxies and stars (below `0x10000`) keep their numbers. Planets are
//! permuted within `[0x10000, 2^32)`. Moons permute their low 32 bits and
//! keep their parent's high half. Anything wider passes through.

use aura_core::Atom;
use num_traits::ToPrimitive;

use crate::Feistel;

const STAR_END: u64 = 0x1_0000;
const PLANET_END: u64 = 0xffff_ffff;
const HIGH_HALF: u64 = 0xffff_ffff_0000_0000;

/// Conceal a 64-bit ship number
pub fn fein(pyn: u64) -> u64 {
    match pyn {
        STAR_END..=PLANET_END => STAR_END + Feistel::SHIP.encrypt(pyn - STAR_END),
        0x1_0000_0000..=u64::MAX => (pyn & HIGH_HALF) | fein(pyn & PLANET_END),
        _ => pyn,
    }
}

/// Reveal a concealed 64-bit ship number
pub fn fynd(cry: u64) -> u64 {
    match cry {
        STAR_END..=PLANET_END => STAR_END + Feistel::SHIP.decrypt(cry - STAR_END),
        0x1_0000_0000..=u64::MAX => (cry & HIGH_HALF) | fynd(cry & PLANET_END),
        _ => cry,
    }
}

/// Conceal an atom; atoms wider than 64 bits are unchanged
pub fn conceal(atom: &Atom) -> Atom {
    match atom.to_u64() {
        Some(pyn) => Atom::from(fein(pyn)),
        None => atom.clone(),
    }
}

/// Inverse of [`conceal`]
pub fn reveal(atom: &Atom) -> Atom {
    match atom.to_u64() {
        Some(cry) => Atom::from(fynd(cry)),
        None => atom.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fein_vectors() {
        assert_eq!(fein(0x1_0000), 1_111_384_255);
        assert_eq!(fein(0x1234_5678), 3_569_093_710);
        assert_eq!(fein(0xffff_ffff), 3_148_143_822);
        assert_eq!(fein(0xdead_beef), 2_426_127_529);
        assert_eq!(fein(0x1234_5678_9abc_def0), 1_311_768_465_613_388_396);
    }

    #[test]
    fn test_fynd_vectors() {
        assert_eq!(fynd(0x1_0000), 2_890_239_458);
        assert_eq!(fynd(0x1234_5678), 2_222_391_847);
        assert_eq!(fynd(0xffff_ffff), 3_963_655_025);
        assert_eq!(fynd(0xdead_beef), 1_439_244_695);
    }

    #[test]
    fn test_small_ships_unchanged() {
        for n in [0u64, 1, 0xff, 0x100, 0xffff] {
            assert_eq!(fein(n), n);
            assert_eq!(fynd(n), n);
        }
    }

    #[test]
    fn test_moon_keeps_parent() {
        let moon = 0x1234_5678_0001_0000u64;
        assert_eq!(fein(moon) & HIGH_HALF, moon & HIGH_HALF);
        assert_eq!(fein(moon) & PLANET_END, fein(0x1_0000));
    }

    #[test]
    fn test_wide_atoms_pass_through() {
        let wide = Atom::from(u64::MAX) + 1u32;
        assert_eq!(conceal(&wide), wide);
        assert_eq!(reveal(&wide), wide);
        assert_eq!(conceal(&Atom::from(0x1_0000u32)), Atom::from(1_111_384_255u32));
    }

    proptest! {
        #[test]
        fn prop_involution(x in any::<u64>()) {
            prop_assert_eq!(fynd(fein(x)), x);
            prop_assert_eq!(fein(fynd(x)), x);
        }

        #[test]
        fn prop_identity_below_stars(x in 0u64..0x1_0000) {
            prop_assert_eq!(fein(x), x);
        }

        #[test]
        fn prop_planets_stay_planets(x in 0x1_0000u64..=0xffff_ffff) {
            let c = fein(x);
            prop_assert!((0x1_0000..=0xffff_ffff).contains(&c));
        }
    }
}
