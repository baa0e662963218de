//! Untyped and typed literal parsing
//!
//! `classify` looks at the first character, then tries each candidate
//! grammar in a fixed order; the first shape that matches commits, so a
//! value error after a shape match fails the whole parse.

use aura_core::{cord_from_str, Atom, Aura, AuraError, AuraResult, Coin, Dime};
use aura_float::Precision;
use aura_time::{parse_da, parse_dr};

use crate::{
    encode_signed, is_blob, is_many, matches, parse_blob, parse_c, parse_if, parse_is, parse_p,
    parse_q, parse_t, parse_ta, parse_unsigned, wick,
};

/// Parse any literal into a coin
pub fn classify(input: &str) -> AuraResult<Coin> {
    let unrecognized = || AuraError::Unrecognized(input.to_string());
    match input.bytes().next().ok_or_else(unrecognized)? {
        b'a'..=b'z' => {
            if matches(Aura::Tas, input) {
                Ok(Coin::dime(Aura::Tas, cord_from_str(input)))
            } else {
                Err(AuraError::shape(Aura::Tas, input))
            }
        }
        b'0'..=b'9' => unsigned(input).map(Coin::Dime),
        b'-' => signed(input).map(Coin::Dime),
        b'.' => dotted(input),
        b'~' => sigged(input),
        _ => Err(unrecognized()),
    }
}

/// [`classify`], discarding the failure reason
pub fn nuck(input: &str) -> Option<Coin> {
    match classify(input) {
        Ok(coin) => Some(coin),
        Err(err @ (AuraError::Invalid { .. } | AuraError::NonCanonical { .. })) => {
            tracing::debug!("Literal {:?} matched a grammar but failed: {}", input, err);
            None
        }
        Err(_) => None,
    }
}

/// Parse `input` as `aura`, or `None`
pub fn slaw(aura: Aura, input: &str) -> Option<Atom> {
    parse_as(aura, input).ok()
}

/// Parse `input` as `aura`, failing with the aura, the input and the cause
pub fn slav(aura: Aura, input: &str) -> AuraResult<Atom> {
    parse_as(aura, input).map_err(|cause| {
        tracing::debug!("Failed to parse {} from {:?}: {}", aura, input, cause);
        AuraError::Parse {
            aura,
            input: input.to_string(),
            cause: Box::new(cause),
        }
    })
}

/// Does `input` parse as `aura`?
pub fn valid(aura: Aura, input: &str) -> bool {
    parse_as(aura, input).is_ok()
}

fn parse_as(aura: Aura, input: &str) -> AuraResult<Atom> {
    if !matches(aura, input) {
        return Err(AuraError::shape(aura, input));
    }
    match classify(input)? {
        Coin::Dime(dime) if dime.aura == aura => Ok(dime.atom),
        Coin::Dime(dime) => Err(AuraError::AuraMismatch {
            expected: aura,
            found: dime.aura,
            input: input.to_string(),
        }),
        _ => Err(AuraError::shape(aura, input)),
    }
}

/// Unsigned integers, chosen by radix prefix
fn unsigned(input: &str) -> AuraResult<Dime> {
    let aura = match input.get(..2) {
        Some("0b") => Aura::Ub,
        Some("0c") => {
            tracing::warn!("@uc literals are not supported: {:?}", input);
            return Err(AuraError::Unsupported("@uc base58check literals"));
        }
        Some("0i") => Aura::Ui,
        Some("0v") => Aura::Uv,
        Some("0w") => Aura::Uw,
        Some("0x") => Aura::Ux,
        _ => Aura::Ud,
    };
    if !matches(aura, input) {
        return Err(AuraError::shape(aura, input));
    }
    Ok(Dime {
        aura,
        atom: parse_unsigned(aura, input)?,
    })
}

/// `-` or `--` in front of an unsigned literal
fn signed(input: &str) -> AuraResult<Dime> {
    let (negative, magnitude) = match input.strip_prefix("--") {
        Some(rest) => (false, rest),
        None => (true, &input[1..]),
    };
    let dime = unsigned(magnitude)?;
    let aura = dime
        .aura
        .to_signed()
        .ok_or_else(|| AuraError::Unrecognized(input.to_string()))?;
    Ok(Dime {
        aura,
        atom: encode_signed(negative, &dime.atom),
    })
}

/// Flags, addresses, floats, `@q` and lists
fn dotted(input: &str) -> AuraResult<Coin> {
    match input {
        ".y" => return Ok(Coin::dime(Aura::F, 0u32)),
        ".n" => return Ok(Coin::dime(Aura::F, 1u32)),
        _ => {}
    }
    let second = input.as_bytes().get(1).copied();

    if matches(Aura::Is, input) {
        return Ok(Coin::dime(Aura::Is, parse_is(input)?));
    }
    if matches(Aura::If, input) {
        return Ok(Coin::dime(Aura::If, parse_if(input)?));
    }
    let wide_float = second == Some(b'~')
        && [Aura::Rd, Aura::Rh, Aura::Rq]
            .iter()
            .any(|&aura| matches(aura, input));
    if wide_float || matches(Aura::Rs, input) {
        let tildes = input[1..].bytes().take_while(|&b| b == b'~').count();
        let precision = Precision::from_tildes(tildes)
            .ok_or_else(|| AuraError::Unrecognized(input.to_string()))?;
        return Ok(Coin::dime(precision.aura(), aura_float::parse(precision, input)?));
    }
    if second == Some(b'~') && matches(Aura::Q, input) {
        return Ok(Coin::dime(Aura::Q, parse_q(input)?));
    }
    if second == Some(b'_') && is_many(input) {
        let body = &input[1..input.len() - 2];
        let coins = body
            .split('_')
            .skip(1)
            .map(|element| {
                let element = wick(element).ok_or_else(|| AuraError::Unrecognized(input.to_string()))?;
                classify(&element)
            })
            .collect::<AuraResult<Vec<Coin>>>()?;
        return Ok(Coin::Many(coins));
    }
    Err(AuraError::Unrecognized(input.to_string()))
}

/// Null, dates, durations, ship names, text, characters and blobs
fn sigged(input: &str) -> AuraResult<Coin> {
    if input == "~" {
        return Ok(Coin::dime(Aura::N, 0u32));
    }
    let second = input.as_bytes().get(1).copied();

    if matches(Aura::Da, input) {
        return Ok(Coin::dime(Aura::Da, parse_da(input)?));
    }
    if matches(Aura::Dr, input) {
        return Ok(Coin::dime(Aura::Dr, parse_dr(input)?));
    }
    if matches(Aura::P, input) {
        return Ok(Coin::dime(Aura::P, parse_p(input)?));
    }
    match second {
        Some(b'.') if matches(Aura::Ta, input) => {
            return Ok(Coin::dime(Aura::Ta, parse_ta(input)?));
        }
        Some(b'~') if matches(Aura::T, input) => {
            return Ok(Coin::dime(Aura::T, parse_t(input)?));
        }
        Some(b'-') if matches(Aura::C, input) => {
            return Ok(Coin::dime(Aura::C, parse_c(input)?));
        }
        Some(b'0') if is_blob(input) => {
            if let Some(jam) = parse_blob(input) {
                return Ok(Coin::Blob(jam));
            }
        }
        _ => {}
    }
    Err(AuraError::Unrecognized(input.to_string()))
}
