//! Integer auras: `@ub`, `@ud`, `@ui`, `@uv`, `@uw`, `@ux` and signed twins
//!
//! Digits are grouped from the right with `.` separators (4 for binary and
//! hex, 3 for decimal, 5 for base32 and base64, none for `@ui`).

use aura_core::{Atom, Aura, AuraError, AuraResult};
use num_traits::{One, Zero};

/// `@uw` digit alphabet, 6 bits per digit
pub const UW_ALPHABET: &[u8; 64] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ-~";

/// Radix layout of an unsigned integer aura
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Radix {
    pub prefix: &'static str,
    pub base: u32,
    /// Digits per `.`-separated group, 0 for ungrouped
    pub group: usize,
}

impl Radix {
    pub const BINARY: Radix = Radix::new("0b", 2, 4);
    pub const DECIMAL: Radix = Radix::new("", 10, 3);
    pub const INDEX: Radix = Radix::new("0i", 10, 0);
    pub const BASE32: Radix = Radix::new("0v", 32, 5);
    pub const BASE64: Radix = Radix::new("0w", 64, 5);
    pub const HEX: Radix = Radix::new("0x", 16, 4);

    const fn new(prefix: &'static str, base: u32, group: usize) -> Self {
        Radix {
            prefix,
            base,
            group,
        }
    }

    /// Layout of an integer aura, signed or unsigned
    pub fn of(aura: Aura) -> Option<Self> {
        match aura.to_unsigned().unwrap_or(aura) {
            Aura::Ub => Some(Radix::BINARY),
            Aura::Ud => Some(Radix::DECIMAL),
            Aura::Ui => Some(Radix::INDEX),
            Aura::Uv => Some(Radix::BASE32),
            Aura::Uw => Some(Radix::BASE64),
            Aura::Ux => Some(Radix::HEX),
            _ => None,
        }
    }

    /// Ungrouped digits, most significant first
    pub fn digits(&self, atom: &Atom) -> String {
        if self.base == 64 {
            atom.to_radix_be(64)
                .into_iter()
                .map(|d| UW_ALPHABET[d as usize] as char)
                .collect()
        } else {
            atom.to_str_radix(self.base)
        }
    }

    /// Prefix plus grouped digits
    pub fn render(&self, atom: &Atom) -> String {
        format!("{}{}", self.prefix, group(&self.digits(atom), self.group))
    }

    /// Value of prefix-free digits, `.` separators ignored
    pub fn value(&self, digits: &str) -> Option<Atom> {
        let digits: Vec<u8> = digits.bytes().filter(|&b| b != b'.').collect();
        if digits.is_empty() {
            return None;
        }
        if self.base == 64 {
            let values = digits
                .iter()
                .map(|b| UW_ALPHABET.iter().position(|a| a == b).map(|p| p as u8))
                .collect::<Option<Vec<u8>>>()?;
            Atom::from_radix_be(&values, 64)
        } else if digits.iter().all(|&b| (b as char).is_digit(self.base)) {
            Atom::parse_bytes(&digits, self.base)
        } else {
            None
        }
    }
}

/// Insert `.` every `size` characters counting from the right
pub fn group(digits: &str, size: usize) -> String {
    if size == 0 || digits.len() <= size {
        return digits.to_string();
    }
    let lead = digits.len() % size;
    let mut out = String::with_capacity(digits.len() + digits.len() / size);
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + size - lead) % size == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Render an unsigned integer aura
pub fn render_unsigned(aura: Aura, atom: &Atom) -> String {
    Radix::of(aura).unwrap_or(Radix::HEX).render(atom)
}

/// Parse an unsigned literal whose shape is already known to be `aura`
pub fn parse_unsigned(aura: Aura, input: &str) -> AuraResult<Atom> {
    let shape = || AuraError::shape(aura, input);
    let radix = Radix::of(aura).ok_or_else(shape)?;
    let digits = input.strip_prefix(radix.prefix).ok_or_else(shape)?;
    radix.value(digits).ok_or_else(shape)
}

/// Zig-zag encode a sign and magnitude
///
/// Non-negative values double, negative ones become `2 * (m - 1) + 1`.
pub fn encode_signed(negative: bool, magnitude: &Atom) -> Atom {
    if !negative {
        magnitude << 1u32
    } else if magnitude.is_zero() {
        Atom::zero()
    } else {
        ((magnitude - 1u32) << 1u32) + 1u32
    }
}

/// Split a zig-zag atom into sign and magnitude
pub fn decode_signed(atom: &Atom) -> (bool, Atom) {
    let negative = atom.bit(0);
    let magnitude = (atom >> 1u32) + if negative { Atom::one() } else { Atom::zero() };
    (negative, magnitude)
}

/// Render a signed integer aura: `-` for negative, `--` otherwise
pub fn render_signed(aura: Aura, atom: &Atom) -> String {
    let (negative, magnitude) = decode_signed(atom);
    let sign = if negative { "-" } else { "--" };
    format!("{}{}", sign, render_unsigned(aura.to_unsigned().unwrap_or(aura), &magnitude))
}

/// Render an opaque blob as `~0` plus base32 digits
pub fn render_blob(atom: &Atom) -> String {
    format!("~0{}", atom.to_str_radix(32))
}

/// Parse a blob literal
pub fn parse_blob(input: &str) -> Option<Atom> {
    let digits = input.strip_prefix("~0")?;
    if digits.is_empty() || !digits.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'v')) {
        return None;
    }
    Atom::parse_bytes(digits.as_bytes(), 32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(text: &str) -> Atom {
        text.parse().unwrap()
    }

    #[test]
    fn test_group() {
        assert_eq!(group("123", 3), "123");
        assert_eq!(group("1234", 3), "1.234");
        assert_eq!(group("7827527286", 3), "7.827.527.286");
        assert_eq!(group("ffa0e2", 4), "ff.a0e2");
        assert_eq!(group("12345678", 4), "1234.5678");
        assert_eq!(group("123456", 0), "123456");
    }

    #[test]
    fn test_decimal() {
        let big = "927570172527456683282759587841913712910138850310449267827527286";
        let cases = [
            ("123", atom("123")),
            ("7.827.527.286", atom("7827527286")),
            (
                "927.570.172.527.456.683.282.759.587.841.913.712.910.138.850.310.449.267.827.527.286",
                atom(big),
            ),
        ];
        for (text, value) in cases {
            assert_eq!(render_unsigned(Aura::Ud, &value), text);
            assert_eq!(parse_unsigned(Aura::Ud, text).unwrap(), value);
        }
    }

    #[test]
    fn test_hex_and_binary() {
        assert_eq!(render_unsigned(Aura::Ux, &Atom::zero()), "0x0");
        assert_eq!(render_unsigned(Aura::Ux, &Atom::from(0xff_a0e2u32)), "0xff.a0e2");
        assert_eq!(parse_unsigned(Aura::Ux, "0xff.a0e2").unwrap(), Atom::from(0xff_a0e2u32));
        assert_eq!(render_unsigned(Aura::Ub, &Atom::from(0b10110u32)), "0b1.0110");
        assert_eq!(parse_unsigned(Aura::Ub, "0b1.0110").unwrap(), Atom::from(0b10110u32));
        assert_eq!(render_unsigned(Aura::Ui, &Atom::from(1_234_567u32)), "0i1234567");
    }

    #[test]
    fn test_base32_and_base64() {
        assert_eq!(render_unsigned(Aura::Uv, &Atom::from(1234u32)), "0v16i");
        assert_eq!(render_unsigned(Aura::Uw, &Atom::from(1234u32)), "0wji");
        assert_eq!(parse_unsigned(Aura::Uw, "0wji").unwrap(), Atom::from(1234u32));
        assert_eq!(render_unsigned(Aura::Uw, &Atom::zero()), "0w0");

        let uv = atom("4715838753694475992579249794985609354876653107513376869107585916141874120351297535898666953377988719385257642282348313095587079274499396365843215360500554");
        let uv_text = "0v1d0.l2h7n.mo1ro.s3r8e.4f6gd.dfsp1.hc5en.a0k8j.1v7vk.16jqd.oog39.5ool7.mrkdp.vvofi.gd2d6.vnmi9.a1dlt.7lbbm.iq76k.u5ivc.pp8qa";
        assert_eq!(render_unsigned(Aura::Uv, &uv), uv_text);
        assert_eq!(parse_unsigned(Aura::Uv, uv_text).unwrap(), uv);

        let uw = atom("9729869760580312915057700420931106632029212932045019789366559593013069886734510969807231346927570172527456683282759587841913712910138850310449267827527286");
        let uw_text = "0w2.VNFPq.zLWXr.mHG98.cOSaU.jD-HK.WOAEW.icKX-.-UOti.RrLxM.BEdKI.U8j~T.rgqLe.HuVVm.m5aDi.FcUj0.z-9H9.PWYVS";
        assert_eq!(render_unsigned(Aura::Uw, &uw), uw_text);
        assert_eq!(parse_unsigned(Aura::Uw, uw_text).unwrap(), uw);
    }

    #[test]
    fn test_zigzag() {
        assert_eq!(encode_signed(false, &Atom::zero()), Atom::zero());
        assert_eq!(encode_signed(true, &Atom::zero()), Atom::zero());
        assert_eq!(encode_signed(false, &Atom::from(5u32)), Atom::from(10u32));
        assert_eq!(encode_signed(true, &Atom::from(1u32)), Atom::from(1u32));
        assert_eq!(encode_signed(true, &Atom::from(2u32)), Atom::from(3u32));

        for n in 0u32..64 {
            let (negative, magnitude) = decode_signed(&Atom::from(n));
            assert_eq!(encode_signed(negative, &magnitude), Atom::from(n));
        }
    }

    #[test]
    fn test_signed_render() {
        assert_eq!(render_signed(Aura::Sd, &Atom::zero()), "--0");
        assert_eq!(render_signed(Aura::Sd, &Atom::from(1u32)), "-1");
        assert_eq!(render_signed(Aura::Sd, &Atom::from(2u32)), "--1");
        assert_eq!(render_signed(Aura::Sx, &Atom::from(0x2_0000u32)), "--0x1.0000");
    }

    #[test]
    fn test_blob() {
        assert_eq!(render_blob(&Atom::from(2u32)), "~02");
        assert_eq!(render_blob(&atom("325350265702017")), "~097su1g7hk1");
        assert_eq!(parse_blob("~097su1g7hk1"), Some(atom("325350265702017")));
        assert_eq!(parse_blob("~0"), None);
        assert_eq!(parse_blob("~0w"), None);
    }

    #[test]
    fn test_malformed_digits() {
        assert!(parse_unsigned(Aura::Ux, "0x").is_err());
        assert!(parse_unsigned(Aura::Ux, "12").is_err());
        assert!(Radix::BASE64.value("0!").is_none());
    }
}
