//! Dragon4 digit generation
//!
//! Steele and White's algorithm as laid out by Ryan Juckett, on big
//! integers throughout. The value `mantissa * 2^exponent` and its
//! rounding margins are scaled into an integer ratio, then digits are
//! peeled off with divmod-by-scale until the remainder falls inside a
//! margin (unique mode) or the cutoff is reached.

use std::cmp::Ordering;

use aura_core::Atom;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

/// Where digit generation stops
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CutoffMode {
    /// As many digits as it takes to identify the value uniquely
    #[default]
    Unique,
    /// At most this many significant digits
    TotalLength(u32),
    /// At most this many digits after the decimal point
    FractionLength(u32),
}

/// Decimal digits with the exponent of the first digit
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Digits {
    pub digits: String,
    pub exponent: i64,
}

/// `ceil(log10(2^log2) - 0.69)`: the digit exponent, or one less
///
/// Fixed point with eighteen decimals in place of float logarithms.
fn estimate_digit_exponent(log2: i64) -> i64 {
    const LOG10_2: i128 = 301_029_995_663_981_195;
    const SLACK: i128 = 690_000_000_000_000_000;
    const ONE: i128 = 1_000_000_000_000_000_000;

    let scaled = i128::from(log2) * LOG10_2 - SLACK;
    -((-scaled).div_euclid(ONE)) as i64
}

/// Digits of `mantissa * 2^exponent`
///
/// `high_bit` is the index of the mantissa's top set bit.
/// `unequal_margins` is set when the value sits on a power of two with a
/// lower exponent available, so the gap below is half the gap above.
/// `buffer_size` bounds the number of digits produced.
pub fn dragon4(
    mantissa: &Atom,
    exponent: i64,
    high_bit: i64,
    unequal_margins: bool,
    cutoff: CutoffMode,
    buffer_size: usize,
) -> Digits {
    if mantissa.is_zero() {
        return Digits {
            digits: "0".to_string(),
            exponent: 0,
        };
    }
    let even = mantissa.is_even();

    // value, scale and low margin, all doubled (quadrupled when unequal)
    let shift = if unequal_margins { 2 } else { 1 };
    let (mut value, mut scale, mut margin_low) = if exponent > 0 {
        (
            mantissa << (exponent as u64 + shift),
            Atom::from(1u32 << shift),
            Atom::from(1u32) << exponent as u64,
        )
    } else {
        (
            mantissa << shift,
            Atom::from(1u32) << (shift + exponent.unsigned_abs()),
            Atom::from(1u32),
        )
    };

    let mut digit_exponent = estimate_digit_exponent(high_bit + exponent);
    if let CutoffMode::FractionLength(n) = cutoff {
        let n = i64::from(n);
        if digit_exponent <= -n {
            digit_exponent = -n + 1;
        }
    }

    let ten = Atom::from(10u32);
    match digit_exponent.cmp(&0) {
        Ordering::Greater => scale *= ten.pow(digit_exponent as u32),
        Ordering::Less => {
            let power = ten.pow(digit_exponent.unsigned_abs() as u32);
            value *= &power;
            margin_low *= power;
        }
        Ordering::Equal => {}
    }
    let mut margin_high = if unequal_margins {
        &margin_low << 1u32
    } else {
        margin_low.clone()
    };

    // the estimate may be one low
    if value >= scale {
        digit_exponent += 1;
    } else {
        value *= 10u32;
        margin_low *= 10u32;
        margin_high *= 10u32;
    }

    let mut cutoff_exponent = digit_exponent - buffer_size as i64;
    match cutoff {
        CutoffMode::Unique => {}
        CutoffMode::TotalLength(n) => {
            cutoff_exponent = cutoff_exponent.max(digit_exponent - i64::from(n.max(1)));
        }
        CutoffMode::FractionLength(n) => {
            cutoff_exponent = cutoff_exponent.max(-i64::from(n));
        }
    }

    let mut out_exponent = digit_exponent - 1;
    let mut out: Vec<u8> = Vec::with_capacity(buffer_size);
    let (low, high, digit) = loop {
        digit_exponent -= 1;
        let (digit, rest) = value.div_rem(&scale);
        value = rest;
        // value < 10 * scale, so the quotient is one digit
        let digit = digit.to_u8().unwrap_or(9);

        let (low, high) = match cutoff {
            CutoffMode::Unique => {
                let upper = &value + &margin_high;
                if even {
                    (value <= margin_low, upper >= scale)
                } else {
                    (value < margin_low, upper > scale)
                }
            }
            _ => (false, false),
        };
        let exhausted = cutoff != CutoffMode::Unique && value.is_zero();
        if low || high || exhausted || digit_exponent == cutoff_exponent {
            break (low, high, digit);
        }

        out.push(digit);
        value *= 10u32;
        margin_low *= 10u32;
        margin_high *= 10u32;
    };

    // round the final digit: toward whichever margin was hit, else nearest
    let mut round_down = low;
    if low == high {
        value <<= 1u32;
        round_down = match value.cmp(&scale) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => digit & 1 == 0,
        };
    }

    if round_down {
        out.push(digit);
    } else if digit == 9 {
        loop {
            match out.pop() {
                None => {
                    out.push(1);
                    out_exponent += 1;
                    break;
                }
                Some(9) => continue,
                Some(last) => {
                    out.push(last + 1);
                    break;
                }
            }
        }
    } else {
        out.push(digit + 1);
    }

    Digits {
        digits: out.iter().map(|d| char::from(b'0' + d)).collect(),
        exponent: out_exponent,
    }
}
