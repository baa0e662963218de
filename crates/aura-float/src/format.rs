//! Bit pattern to literal text

use aura_core::{mask, Atom};
use num_integer::Integer;
use num_traits::{One, ToPrimitive};

use crate::{dragon4, Layout, Precision, RenderConfig};

/// A float taken apart for printing
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FloatParts {
    Nan,
    Infinity {
        negative: bool,
    },
    Finite {
        negative: bool,
        /// Decimal exponent of the first digit
        exponent: i64,
        digits: String,
    },
}

/// Render a float literal of the given precision, prefix included
pub fn render(precision: Precision, bits: &Atom) -> String {
    render_with(precision, bits, &RenderConfig::default())
}

/// Render with an explicit digit cutoff
pub fn render_with(precision: Precision, bits: &Atom, config: &RenderConfig) -> String {
    let parts = deconstruct(precision.layout(), bits, config);
    format!("{}{}", precision.prefix(), format_parts(&parts))
}

/// Split `bits` into sign, exponent and mantissa and generate digits
///
/// Bits above the layout's width are ignored.
pub fn deconstruct(layout: Layout, bits: &Atom, config: &RenderConfig) -> FloatParts {
    let p = u64::from(layout.mantissa_bits);
    let w = u64::from(layout.exponent_bits);

    let mantissa = bits & mask(p);
    // masked to at most 15 bits
    let biased = ((bits >> p) & mask(w)).to_u64().unwrap_or(0);
    let negative = (bits >> (w + p)).is_odd();

    if biased == layout.max_exponent() {
        return if mantissa.bits() == 0 {
            FloatParts::Infinity { negative }
        } else {
            FloatParts::Nan
        };
    }

    let p = i64::from(layout.mantissa_bits);
    let (mantissa, exponent, high_bit, unequal_margins) = if biased != 0 {
        let unequal = biased != 1 && mantissa.bits() == 0;
        (
            mantissa | (Atom::one() << p as u64),
            biased as i64 - layout.bias() - p,
            p,
            unequal,
        )
    } else {
        let high_bit = mantissa.bits() as i64 - 1;
        (mantissa, 1 - layout.bias() - p, high_bit, false)
    };

    // enough digits for any value of this width
    let buffer_size = (Atom::one() << (p as u64 + 1)).to_string().len() + 2;
    let digits = dragon4(
        &mantissa,
        exponent,
        high_bit,
        unequal_margins,
        config.cutoff,
        buffer_size,
    );

    FloatParts::Finite {
        negative,
        exponent: digits.exponent,
        digits: digits.digits,
    }
}

/// Print parts: fixed notation for exponents in `[-2, 4]`, else scientific
pub fn format_parts(parts: &FloatParts) -> String {
    match parts {
        FloatParts::Nan => "nan".to_string(),
        FloatParts::Infinity { negative: false } => "inf".to_string(),
        FloatParts::Infinity { negative: true } => "-inf".to_string(),
        FloatParts::Finite {
            negative,
            exponent,
            digits,
        } => {
            let sign = if *negative { "-" } else { "" };
            if *exponent > 4 || *exponent < -2 {
                format!("{sign}{}e{exponent}", place_point(1, digits))
            } else {
                format!("{sign}{}", place_point(exponent + 1, digits))
            }
        }
    }
}

/// Put the decimal point after `integer` digits, padding with zeros
fn place_point(integer: i64, digits: &str) -> String {
    let count = integer.unsigned_abs() as usize;
    if integer <= 0 {
        format!("0.{}{digits}", "0".repeat(count))
    } else if count >= digits.len() {
        format!("{digits}{}", "0".repeat(count - digits.len()))
    } else {
        format!("{}.{}", &digits[..count], &digits[count..])
    }
}
