//! Generalized Feistel cipher over arbitrary finite domains
//!
//! Black and Rogaway, "Ciphers with Arbitrary Finite Domains" (2002),
//! with the equal-halves tweak in the final combination. The domain is
//! `[0, a*b)`; outputs at or above `k` are walked once more through the
//! network so results stay under `k`.

use crate::muk;

/// Round seeds of the ship cipher, one per round
pub const RAKU: [u32; 4] = [0xb76d_5eed, 0xee28_1300, 0x85bc_ae01, 0x4b38_7af7];

/// Feistel network parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feistel {
    a: u64,
    b: u64,
    k: u64,
    keys: &'static [u32],
}

impl Feistel {
    /// The 32-bit ship permutation: 4 rounds over `65535 * 65536`
    pub const SHIP: Feistel = Feistel::new(0xffff, 0x1_0000, 0xffff_ffff, &RAKU);

    pub const fn new(a: u64, b: u64, k: u64, keys: &'static [u32]) -> Self {
        Feistel { a, b, k, keys }
    }

    /// Number of rounds (one per key)
    pub fn rounds(&self) -> u32 {
        self.keys.len() as u32
    }

    /// Permute `m`
    pub fn encrypt(&self, m: u64) -> u64 {
        let c = self.fe(m);
        if c < self.k {
            c
        } else {
            self.fe(c)
        }
    }

    /// Invert `encrypt`
    pub fn decrypt(&self, m: u64) -> u64 {
        let c = self.fen(m);
        if c < self.k {
            c
        } else {
            self.fen(c)
        }
    }

    #[inline]
    fn round(&self, j: u32, arg: u64) -> u64 {
        u64::from(muk(self.keys[j as usize], arg as u32))
    }

    fn fe(&self, m: u64) -> u64 {
        let (a, b) = (self.a, self.b);
        let r = self.rounds();
        let mut ell = m % a;
        let mut arr = m / a;

        for j in 1..=r {
            let eff = self.round(j - 1, arr);
            let tmp = if j % 2 == 1 {
                (ell + eff) % a
            } else {
                (ell + eff) % b
            };
            ell = arr;
            arr = tmp;
        }

        if r % 2 == 1 || arr == a {
            a * arr + ell
        } else {
            a * ell + arr
        }
    }

    fn fen(&self, m: u64) -> u64 {
        let (a, b) = (self.a, self.b);
        let r = self.rounds();
        let (ahh, ale) = if r % 2 == 1 {
            (m / a, m % a)
        } else {
            (m % a, m / a)
        };
        let (mut ell, mut arr) = if ale == a { (ahh, ale) } else { (ale, ahh) };

        for j in (1..=r).rev() {
            let eff = self.round(j - 1, ell);
            // add the modulus before subtracting; operands are unsigned
            let tmp = if j % 2 == 1 {
                (arr + a - eff % a) % a
            } else {
                (arr + b - eff % b) % b
            };
            arr = ell;
            ell = tmp;
        }

        a * arr + ell
    }
}
