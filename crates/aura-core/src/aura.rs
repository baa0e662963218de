//! Aura tags
//!
//! An aura names the literal grammar of an atom. The set is closed:
//! - Text: `c`, `t`, `ta`, `tas`
//! - Time: `da`, `dr`
//! - Flags and null: `f`, `n`
//! - Addresses: `if`, `is`
//! - Phonetic: `p`, `q`
//! - Floats: `rd`, `rh`, `rq`, `rs`
//! - Integers: `ub`, `ud`, `ui`, `uv`, `uw`, `ux` and their signed `s*` twins

use std::fmt;
use std::str::FromStr;

use crate::AuraError;

/// An arbitrary-precision non-negative integer
pub type Atom = num_bigint::BigUint;

/// Literal type tag
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Aura {
    /// Single unicode code point
    C,
    /// Absolute date
    Da,
    /// Relative duration
    Dr,
    /// Loobean flag
    F,
    /// IPv4 address
    If,
    /// IPv6 address
    Is,
    /// Null
    N,
    /// Ship name
    P,
    /// Unscrambled phonetic bytes
    Q,
    /// 64-bit float
    Rd,
    /// 16-bit float
    Rh,
    /// 128-bit float
    Rq,
    /// 32-bit float
    Rs,
    Sb,
    Sd,
    Si,
    Sv,
    Sw,
    Sx,
    /// UTF-8 text
    T,
    /// URL-safe text
    Ta,
    /// Symbol
    Tas,
    Ub,
    Ud,
    Ui,
    Uv,
    Uw,
    Ux,
}

impl Aura {
    /// Every aura, in tag order
    pub const ALL: [Aura; 28] = [
        Aura::C,
        Aura::Da,
        Aura::Dr,
        Aura::F,
        Aura::If,
        Aura::Is,
        Aura::N,
        Aura::P,
        Aura::Q,
        Aura::Rd,
        Aura::Rh,
        Aura::Rq,
        Aura::Rs,
        Aura::Sb,
        Aura::Sd,
        Aura::Si,
        Aura::Sv,
        Aura::Sw,
        Aura::Sx,
        Aura::T,
        Aura::Ta,
        Aura::Tas,
        Aura::Ub,
        Aura::Ud,
        Aura::Ui,
        Aura::Uv,
        Aura::Uw,
        Aura::Ux,
    ];

    /// Parse from tag text, with or without the leading `@`
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.strip_prefix('@').unwrap_or(tag);
        Self::ALL.iter().copied().find(|a| a.tag() == tag)
    }

    /// Tag text without the leading `@`
    pub fn tag(self) -> &'static str {
        match self {
            Aura::C => "c",
            Aura::Da => "da",
            Aura::Dr => "dr",
            Aura::F => "f",
            Aura::If => "if",
            Aura::Is => "is",
            Aura::N => "n",
            Aura::P => "p",
            Aura::Q => "q",
            Aura::Rd => "rd",
            Aura::Rh => "rh",
            Aura::Rq => "rq",
            Aura::Rs => "rs",
            Aura::Sb => "sb",
            Aura::Sd => "sd",
            Aura::Si => "si",
            Aura::Sv => "sv",
            Aura::Sw => "sw",
            Aura::Sx => "sx",
            Aura::T => "t",
            Aura::Ta => "ta",
            Aura::Tas => "tas",
            Aura::Ub => "ub",
            Aura::Ud => "ud",
            Aura::Ui => "ui",
            Aura::Uv => "uv",
            Aura::Uw => "uw",
            Aura::Ux => "ux",
        }
    }

    /// Is this a signed integer aura?
    pub fn is_signed(self) -> bool {
        self.to_unsigned().is_some()
    }

    /// Is this an unsigned integer aura?
    pub fn is_unsigned(self) -> bool {
        self.to_signed().is_some()
    }

    /// Is this a float aura?
    pub fn is_float(self) -> bool {
        matches!(self, Aura::Rd | Aura::Rh | Aura::Rq | Aura::Rs)
    }

    /// Signed twin of an unsigned integer aura
    pub fn to_signed(self) -> Option<Self> {
        match self {
            Aura::Ub => Some(Aura::Sb),
            Aura::Ud => Some(Aura::Sd),
            Aura::Ui => Some(Aura::Si),
            Aura::Uv => Some(Aura::Sv),
            Aura::Uw => Some(Aura::Sw),
            Aura::Ux => Some(Aura::Sx),
            _ => None,
        }
    }

    /// Unsigned twin of a signed integer aura
    pub fn to_unsigned(self) -> Option<Self> {
        match self {
            Aura::Sb => Some(Aura::Ub),
            Aura::Sd => Some(Aura::Ud),
            Aura::Si => Some(Aura::Ui),
            Aura::Sv => Some(Aura::Uv),
            Aura::Sw => Some(Aura::Uw),
            Aura::Sx => Some(Aura::Ux),
            _ => None,
        }
    }

    /// Fixed bit width of the rendering target, if the aura has one
    pub fn bit_width(self) -> Option<u32> {
        match self {
            Aura::F => Some(1),
            Aura::N => Some(0),
            Aura::If => Some(32),
            Aura::Is => Some(128),
            Aura::Rh => Some(16),
            Aura::Rs => Some(32),
            Aura::Rd => Some(64),
            Aura::Rq => Some(128),
            _ => None,
        }
    }
}

impl fmt::Display for Aura {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.tag())
    }
}

impl FromStr for Aura {
    type Err = AuraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Aura::from_tag(s).ok_or_else(|| AuraError::Unrecognized(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_roundtrip() {
        for aura in Aura::ALL {
            assert_eq!(Aura::from_tag(aura.tag()), Some(aura));
            assert_eq!(aura.to_string().parse::<Aura>().unwrap(), aura);
        }
        assert_eq!(Aura::from_tag("uc"), None);
        assert_eq!(Aura::from_tag(""), None);
    }

    #[test]
    fn test_signed_twins() {
        assert_eq!(Aura::Ux.to_signed(), Some(Aura::Sx));
        assert_eq!(Aura::Sx.to_unsigned(), Some(Aura::Ux));
        assert!(Aura::Sd.is_signed());
        assert!(!Aura::Ud.is_signed());
        assert!(Aura::Ud.is_unsigned());
        assert_eq!(Aura::P.to_signed(), None);

        let signed = Aura::ALL.iter().filter(|a| a.is_signed()).count();
        let unsigned = Aura::ALL.iter().filter(|a| a.is_unsigned()).count();
        assert_eq!(signed, 6);
        assert_eq!(unsigned, 6);
    }

    #[test]
    fn test_display() {
        assert_eq!(Aura::Tas.to_string(), "@tas");
        assert!(Aura::Rq.is_float());
        assert_eq!(Aura::Rh.bit_width(), Some(16));
    }
}
