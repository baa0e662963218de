//! MurmurHash3 (x86, 32-bit) and the keyed round hash built on it

const C1: u32 = 0xcc9e_2d51;
const C2: u32 = 0x1b87_3593;

/// MurmurHash3 x86_32 of `data`
pub fn murmur3_32(data: &[u8], seed: u32) -> u32 {
    let mut h = seed;

    let mut blocks = data.chunks_exact(4);
    for block in &mut blocks {
        let k = u32::from_le_bytes([block[0], block[1], block[2], block[3]]);
        h ^= mix_key(k);
        h = h.rotate_left(13).wrapping_mul(5).wrapping_add(0xe654_6b64);
    }

    let tail = blocks.remainder();
    if !tail.is_empty() {
        let k = tail
            .iter()
            .enumerate()
            .fold(0u32, |k, (i, b)| k | (u32::from(*b) << (8 * i)));
        h ^= mix_key(k);
    }

    h ^= data.len() as u32;
    fmix(h)
}

/// Round hash: `murmur3_32` over the two low bytes of `key`, little-endian
#[inline]
pub fn muk(seed: u32, key: u32) -> u32 {
    murmur3_32(&[key as u8, (key >> 8) as u8], seed)
}

#[inline]
fn mix_key(k: u32) -> u32 {
    k.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2)
}

#[inline]
fn fmix(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_murmur3_vectors() {
        assert_eq!(murmur3_32(b"", 0), 0);
        assert_eq!(murmur3_32(b"", 1), 0x514e_28b7);
        assert_eq!(murmur3_32(b"hello", 0), 613_153_351);
        assert_eq!(murmur3_32(b"test", 0), 0xba6b_d213);
    }

    #[test]
    fn test_muk_ignores_high_bytes() {
        let seed = 0xb76d_5eed;
        assert_eq!(muk(seed, 0x1234), muk(seed, 0xab_1234));
        assert_eq!(muk(seed, 0x1234), murmur3_32(&[0x34, 0x12], seed));
    }
}
