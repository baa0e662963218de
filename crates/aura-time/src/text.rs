//! `@da` and `@dr` literal grammars
//!
//! `~2022.5.2..15.50.20..b4cb` is an absolute date; `~d1.h1.m1.s1..8000`
//! is a duration. Both carry sub-second fragments after a `..`.

use aura_core::{Atom, Aura, AuraError, AuraResult};
use num_traits::Zero;

use crate::{fragments_to_atom, Date, Tarp, DAY, HOUR, MAX_FRAGMENTS, MINUTE};

/// Render an absolute date
pub fn render_da(atom: &Atom) -> String {
    let date = Date::from_atom(atom);
    let time = &date.time;

    let mut out = format!(
        "~{}{}.{}.{}",
        date.year,
        if date.ad { "" } else { "-" },
        date.month,
        time.day
    );
    if !time.fragments.is_empty() || time.hour != 0 || time.minute != 0 || time.second != 0 {
        out.push_str(&format!(
            "..{:02}.{:02}.{:02}",
            time.hour, time.minute, time.second
        ));
    }
    out.push_str(&render_fragments(&time.fragments));
    out
}

/// Parse an absolute date
pub fn parse_da(input: &str) -> AuraResult<Atom> {
    let shape = || AuraError::shape(Aura::Da, input);
    let invalid = |reason| AuraError::invalid(Aura::Da, input, reason);

    let body = input.strip_prefix('~').ok_or_else(shape)?;
    let (date, clock) = match body.split_once("..") {
        Some((date, clock)) => (date, Some(clock)),
        None => (body, None),
    };

    let mut fields = date.split('.');
    let (year, month, day) = match (fields.next(), fields.next(), fields.next(), fields.next()) {
        (Some(year), Some(month), Some(day), None) => (year, month, day),
        _ => return Err(shape()),
    };
    let (year, ad) = match year.strip_suffix('-') {
        Some(year) => (year, false),
        None => (year, true),
    };

    let mut time = Tarp {
        day: decimal(day).ok_or_else(shape)?,
        ..Default::default()
    };
    if let Some(clock) = clock {
        let (hms, fragments) = match clock.split_once("..") {
            Some((hms, fragments)) => (hms, Some(fragments)),
            None => (clock, None),
        };
        let mut hms = hms.split('.');
        match (hms.next(), hms.next(), hms.next(), hms.next()) {
            (Some(h), Some(m), Some(s), None) => {
                time.hour = small(h).ok_or_else(|| invalid("hour out of range"))?;
                time.minute = small(m).ok_or_else(|| invalid("minute out of range"))?;
                time.second = small(s).ok_or_else(|| invalid("second out of range"))?;
            }
            _ => return Err(shape()),
        }
        if let Some(fragments) = fragments {
            time.fragments = parse_fragments(fragments).ok_or_else(shape)?;
        }
    }
    if time.fragments.len() > MAX_FRAGMENTS {
        return Err(invalid("more than four sub-second fragments"));
    }

    let date = Date {
        ad,
        year: decimal(year).ok_or_else(shape)?,
        month: small(month)
            .and_then(|m| u8::try_from(m).ok())
            .ok_or_else(shape)?,
        time,
    };
    date.to_atom().ok_or_else(|| invalid("date outside the calendar"))
}

/// Render a relative duration
pub fn render_dr(atom: &Atom) -> String {
    let span = Tarp::from_atom(atom);
    let fragments = render_fragments(&span.fragments);
    if span.is_whole_zero() {
        return format!("~s0{fragments}");
    }

    let mut fields = Vec::with_capacity(4);
    if !span.day.is_zero() {
        fields.push(format!("d{}", span.day));
    }
    for (unit, value) in [('h', span.hour), ('m', span.minute), ('s', span.second)] {
        if value != 0 {
            fields.push(format!("{unit}{value}"));
        }
    }
    format!("~{}{}", fields.join("."), fragments)
}

/// Parse a relative duration; fields may repeat and come in any order
pub fn parse_dr(input: &str) -> AuraResult<Atom> {
    let shape = || AuraError::shape(Aura::Dr, input);

    let body = input.strip_prefix('~').ok_or_else(shape)?;
    let (fields, fragments) = match body.split_once("..") {
        Some((fields, fragments)) => (fields, parse_fragments(fragments).ok_or_else(shape)?),
        None => (body, Vec::new()),
    };

    let mut seconds = Atom::zero();
    for field in fields.split('.') {
        let mut chars = field.chars();
        let unit = match chars.next() {
            Some('d') => DAY,
            Some('h') => HOUR,
            Some('m') => MINUTE,
            Some('s') => 1,
            _ => return Err(shape()),
        };
        seconds += decimal(chars.as_str()).ok_or_else(shape)? * unit;
    }

    let fraction = fragments_to_atom(&fragments)
        .ok_or_else(|| AuraError::invalid(Aura::Dr, input, "more than four sub-second fragments"))?;
    Ok(fraction | (seconds << 64u32))
}

fn render_fragments(fragments: &[u16]) -> String {
    if fragments.is_empty() {
        return String::new();
    }
    let mut out = String::from(".");
    for fragment in fragments {
        out.push_str(&format!(".{fragment:04x}"));
    }
    out
}

/// `xxxx.xxxx...` in lowercase hex
fn parse_fragments(text: &str) -> Option<Vec<u16>> {
    text.split('.')
        .map(|group| {
            let hex = group.len() == 4
                && group
                    .bytes()
                    .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
            if hex {
                u16::from_str_radix(group, 16).ok()
            } else {
                None
            }
        })
        .collect()
}

fn decimal(text: &str) -> Option<Atom> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Atom::parse_bytes(text.as_bytes(), 10)
}

fn small(text: &str) -> Option<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn atom(s: &str) -> Atom {
        s.parse().unwrap()
    }

    #[test]
    fn test_render_da() {
        let cases = [
            ("170141184492615420181573981275213004800", "~2000.1.1"),
            ("170141183328369385600900416699944140800", "~1-.1.1"),
            ("170141184475152167957503069145530368000", "~1970.1.1"),
            (
                "170141184505617087925707667943685357568",
                "~2022.5.2..15.50.20..b4cb",
            ),
            (
                "170141184505617289618704043249403016227",
                "~2022.5.2..18.52.34..8166.240c.0635.b423",
            ),
            ("170141184492615892916284358229892268032", "~2000.1.1..07.07.07"),
        ];
        for (value, text) in cases {
            assert_eq!(render_da(&atom(value)), text);
            assert_eq!(parse_da(text), Ok(atom(value)));
        }
    }

    #[test]
    fn test_parse_da_lenient_fields() {
        let seven = atom("170141184492615892916284358229892268032");
        assert_eq!(parse_da("~2000.1.1..7.7.7"), Ok(seven.clone()));
        assert_eq!(parse_da("~2000.1.1..007.007.007"), Ok(seven));
        assert_eq!(
            parse_da("~2000.1.1..99.99.99..abcd"),
            Ok(atom("170141184492622106013428863442102517760"))
        );
        assert_eq!(
            parse_da("~2000.1.1..11.11.11..0000"),
            Ok(atom("170141184492616163050404573632566132736"))
        );
        assert_eq!(
            parse_da("~2000.1.1..11.11.11..aabb.0000"),
            Ok(atom("170141184492616163062707000439658774528"))
        );
        assert_eq!(parse_da("~0.1.1"), parse_da("~1-.1.1"));
    }

    #[test]
    fn test_parse_da_rejects() {
        assert!(matches!(parse_da("~2000.1"), Err(AuraError::ShapeMismatch { .. })));
        assert!(matches!(parse_da("2000.1.1"), Err(AuraError::ShapeMismatch { .. })));
        assert!(matches!(
            parse_da("~2025.13.1"),
            Err(AuraError::Invalid { .. })
        ));
        assert!(matches!(
            parse_da("~2000.1.1..0.0.0..0001.0002.0003.0004.0005"),
            Err(AuraError::Invalid { .. })
        ));
        assert!(parse_da("~2000.1.1..1.1.1..abc").is_err());
        assert!(parse_da("~2000.1.1..1.1").is_err());
    }

    #[test]
    fn test_render_dr() {
        assert_eq!(render_dr(&Atom::zero()), "~s0");
        assert_eq!(render_dr(&(Atom::from(1u32) << 63u32)), "~s0..8000");
        assert_eq!(render_dr(&atom("9979688543876867424256")), "~m9.s1");
        let span = (Atom::from(90_061u32) << 64u32) | Atom::from(0x8000u64 << 48);
        assert_eq!(render_dr(&span), "~d1.h1.m1.s1..8000");
    }

    #[test]
    fn test_parse_dr() {
        let one = atom("18446744073709551616");
        assert_eq!(parse_dr("~s1"), Ok(one.clone()));
        assert_eq!(parse_dr("~s1..0000"), Ok(one.clone()));
        assert_eq!(parse_dr("~s1..0000.0000"), Ok(one.clone()));
        assert_eq!(parse_dr("~d0.h0.s1.m0"), Ok(one));
        assert_eq!(
            parse_dr("~m1.m5.s1.m3"),
            Ok(atom("9979688543876867424256"))
        );
        assert_eq!(
            parse_dr("~d1.h999.m999.s999"),
            Ok(atom("69059795211765323057332224"))
        );
        assert_eq!(parse_dr("~s0..8000"), Ok(Atom::from(1u32) << 63u32));
        assert!(parse_dr("~x1").is_err());
        assert!(parse_dr("~s").is_err());
    }

    proptest! {
        #[test]
        fn prop_da_roundtrip(value in any::<u128>()) {
            let value = Atom::from(value);
            prop_assert_eq!(parse_da(&render_da(&value)), Ok(value));
        }

        #[test]
        fn prop_dr_roundtrip(value in any::<u128>()) {
            let value = Atom::from(value);
            prop_assert_eq!(parse_dr(&render_dr(&value)), Ok(value));
        }
    }
}
