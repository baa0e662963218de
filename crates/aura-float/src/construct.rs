//! Decimal literal to bit pattern

use aura_core::{Atom, AuraError, AuraResult};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::{Layout, Precision};

/// Parse a float literal of the given precision, prefix included
///
/// Magnitudes beyond the layout clamp to infinity and nonzero magnitudes
/// below half the smallest subnormal flush to zero, both with a warning.
pub fn parse(precision: Precision, input: &str) -> AuraResult<Atom> {
    let shape = || AuraError::shape(precision.aura(), input);
    let layout = precision.layout();

    let body = input.strip_prefix(precision.prefix()).ok_or_else(shape)?;
    match body {
        "nan" => return Ok(layout.nan()),
        "inf" => return Ok(layout.infinity(false)),
        "-inf" => return Ok(layout.infinity(true)),
        _ => {}
    }

    let (negative, body) = match body.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, body),
    };
    let (mantissa, exponent) = match body.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (body, None),
    };
    let (integer, fraction) = match mantissa.split_once('.') {
        Some((integer, fraction)) if is_digits(fraction) => (integer, fraction),
        Some(_) => return Err(shape()),
        None => (mantissa, ""),
    };
    if !is_digits(integer) {
        return Err(shape());
    }
    let exponent = match exponent {
        Some(text) => parse_exponent(text).ok_or_else(shape)?,
        None => 0,
    };

    let digits = format!("{integer}{fraction}");
    let exponent = exponent.saturating_sub(fraction.len() as i64);
    Ok(from_decimal(layout, negative, &digits, exponent))
}

/// Bits for `digits * 10^exponent`, `digits` being ASCII decimal
pub fn from_decimal(layout: Layout, negative: bool, digits: &str, exponent: i64) -> Atom {
    let digits = digits.trim_start_matches('0');
    let signed_zero = || {
        if negative {
            layout.sign_bit()
        } else {
            Atom::zero()
        }
    };
    if digits.is_empty() {
        return signed_zero();
    }

    // order of magnitude, clear of both ends of every layout
    let magnitude = exponent.saturating_add(digits.len() as i64);
    let limit = 2 * (layout.bias() + i64::from(layout.mantissa_bits));
    if magnitude > limit {
        warn_overflow(layout);
        return layout.infinity(negative);
    }
    if magnitude < -limit {
        warn_underflow(layout);
        return signed_zero();
    }

    let Some(value) = Atom::parse_bytes(digits.as_bytes(), 10) else {
        return signed_zero();
    };
    let ten = Atom::from(10u32);
    let (num, den) = if exponent >= 0 {
        (value * ten.pow(exponent as u32), Atom::one())
    } else {
        (value, ten.pow(exponent.unsigned_abs() as u32))
    };
    construct(layout, negative, &num, &den)
}

/// Round `num / den` to the nearest representable value, ties to even
pub fn construct(layout: Layout, negative: bool, num: &Atom, den: &Atom) -> Atom {
    let sign = if negative {
        layout.sign_bit()
    } else {
        Atom::zero()
    };
    if num.is_zero() {
        return sign;
    }

    let p = i64::from(layout.mantissa_bits);
    let scaled = |e: i64| -> (Atom, Atom) {
        if e < 0 {
            (num << e.unsigned_abs(), den.clone())
        } else {
            (num.clone(), den << e as u64)
        }
    };

    // find e with 2^p <= num / (den * 2^e) < 2^(p+1)
    let mut e = num.bits() as i64 - den.bits() as i64 - p;
    let (n, d) = scaled(e);
    if n < (d << p as u64) {
        e -= 1;
    }
    let emin = 1 - layout.bias() - p;
    if e < emin {
        e = emin;
    }

    let (n, d) = scaled(e);
    let (mut q, r) = n.div_rem(&d);
    let twice = r << 1u32;
    if twice > d || (twice == d && q.is_odd()) {
        q += 1u32;
    }
    if q == Atom::one() << (p as u64 + 1) {
        q >>= 1u32;
        e += 1;
    }

    let hidden = Atom::one() << p as u64;
    if q < hidden {
        if q.is_zero() {
            warn_underflow(layout);
        }
        return sign | q;
    }

    let biased = e + p + layout.bias();
    if biased >= layout.max_exponent() as i64 {
        warn_overflow(layout);
        return layout.infinity(negative);
    }
    sign | (Atom::from(biased as u64) << p as u64) | (q - hidden)
}

fn warn_overflow(layout: Layout) {
    tracing::warn!(
        "float literal overflows {}-bit layout, clamping to infinity",
        layout.width()
    );
}

fn warn_underflow(layout: Layout) {
    tracing::warn!(
        "float literal underflows {}-bit layout, flushing to zero",
        layout.width()
    );
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Decimal exponent, saturating far beyond any layout's range
fn parse_exponent(text: &str) -> Option<i64> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, text),
    };
    if !is_digits(digits) {
        return None;
    }
    let value = digits.parse::<i64>().unwrap_or(i64::MAX / 4).min(i64::MAX / 4);
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(precision: Precision, input: &str) -> Atom {
        parse(precision, input).unwrap()
    }

    #[test]
    fn test_half() {
        let cases: [(&str, u32); 11] = [
            (".~~1", 0x3c00),
            (".~~0.5", 0x3800),
            (".~~65504", 0x7bff),
            (".~~1e-3", 0x1419),
            (".~~-2.5", 0xc100),
            (".~~5.96e-8", 0x0001),
            (".~~0.1", 0x2e66),
            (".~~3.14", 0x4248),
            (".~~1e4", 0x70e2),
            (".~~nan", 0x7e00),
            (".~~-inf", 0xfc00),
        ];
        for (input, expected) in cases {
            assert_eq!(bits(Precision::Half, input), Atom::from(expected), "{input}");
        }
    }

    #[test]
    fn test_single() {
        let cases: [(&str, u32); 11] = [
            (".1", 0x3f80_0000),
            (".0.1", 0x3dcc_cccd),
            (".3.14159", 0x4049_0fd0),
            (".-0", 0x8000_0000),
            (".1e10", 0x5015_02f9),
            (".1.5e-5", 0x377b_a882),
            (".123456", 0x47f1_2000),
            (".1e-45", 0x0000_0001),
            (".3.4028235e38", 0x7f7f_ffff),
            (".0.001", 0x3a83_126f),
            (".inf", 0x7f80_0000),
        ];
        for (input, expected) in cases {
            assert_eq!(bits(Precision::Single, input), Atom::from(expected), "{input}");
        }
    }

    #[test]
    fn test_double() {
        let cases: [(&str, u64); 9] = [
            (".~1", 0x3ff0_0000_0000_0000),
            (".~0.1", 0x3fb9_9999_9999_999a),
            (".~-1.5", 0xbff8_0000_0000_0000),
            (".~1e100", 0x54b2_49ad_2594_c37d),
            (".~5e-324", 0x0000_0000_0000_0001),
            (".~1.7976931348623157e308", 0x7fef_ffff_ffff_ffff),
            (".~2.5e-7", 0x3e90_c6f7_a0b5_ed8d),
            (".~123.456", 0x405e_dd2f_1a9f_be77),
            (".~0.01", 0x3f84_7ae1_47ae_147b),
        ];
        for (input, expected) in cases {
            assert_eq!(bits(Precision::Double, input), Atom::from(expected), "{input}");
        }
    }

    #[test]
    fn test_quad() {
        let cases: [(&str, u128); 5] = [
            (".~~~1", 0x3fff_0000_0000_0000_0000_0000_0000_0000),
            (".~~~0.1", 0x3ffb_9999_9999_9999_9999_9999_9999_999a),
            (".~~~-3.5", 0xc000_c000_0000_0000_0000_0000_0000_0000),
            (".~~~1e4000", 0x73e6_a375_0647_fcab_18c2_1ab9_0545_0cc3),
            (".~~~6.5e-4966", 0x0000_0000_0000_0000_0000_0000_0000_0001),
        ];
        for (input, expected) in cases {
            assert_eq!(bits(Precision::Quad, input), Atom::from(expected), "{input}");
        }
    }

    #[test]
    fn test_overflow_clamps() {
        assert_eq!(bits(Precision::Double, ".~1e309"), Layout::DOUBLE.infinity(false));
        assert_eq!(bits(Precision::Single, ".1e39"), Layout::SINGLE.infinity(false));
        assert_eq!(bits(Precision::Half, ".~~1e5"), Layout::HALF.infinity(false));
        assert_eq!(bits(Precision::Half, ".~~-1e5"), Layout::HALF.infinity(true));
        assert_eq!(
            bits(Precision::Double, ".~1e99999999999999999999"),
            Layout::DOUBLE.infinity(false)
        );
    }

    #[test]
    fn test_underflow_flushes() {
        assert_eq!(bits(Precision::Half, ".~~1e-9"), Atom::zero());
        assert_eq!(bits(Precision::Half, ".~~-1e-9"), Layout::HALF.sign_bit());
        assert_eq!(bits(Precision::Single, ".1e-99999999999"), Atom::zero());
    }

    #[test]
    fn test_zero_forms() {
        assert_eq!(bits(Precision::Double, ".~0"), Atom::zero());
        assert_eq!(bits(Precision::Double, ".~0.000e5"), Atom::zero());
        assert_eq!(bits(Precision::Double, ".~0e999999999999999999999"), Atom::zero());
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(parse(Precision::Single, ".~1").is_err());
        assert!(parse(Precision::Single, ".1.").is_err());
        assert!(parse(Precision::Single, ".1e").is_err());
        assert!(parse(Precision::Double, "1").is_err());
        assert!(parse(Precision::Double, ".~.5").is_err());
    }
}
