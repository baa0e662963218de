//! Text auras and the ta-safe escape
//!
//! ta-safe keeps `[a-z0-9-]`, writes space as `.`, `.` as `~.`, `~` as
//! `~~` and every other code point as `~<hex>.`.

use aura_core::{cord_from_str, cord_to_string, Atom, Aura, AuraError, AuraResult};

/// Escape text into the ta-safe alphabet
pub fn encode_ta_safe(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            ' ' => out.push('.'),
            '.' => out.push_str("~."),
            '~' => out.push_str("~~"),
            'a'..='z' | '0'..='9' | '-' => out.push(c),
            _ => out.push_str(&format!("~{:x}.", c as u32)),
        }
    }
    out
}

/// Undo [`encode_ta_safe`]; `None` on a dangling or unknown escape
pub fn decode_ta_safe(text: &str) -> Option<String> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '.' => out.push(' '),
            '~' => match chars.next()? {
                '~' => out.push('~'),
                '.' => out.push('.'),
                first => {
                    let mut code = first.to_digit(16)?;
                    loop {
                        match chars.next()? {
                            '.' => break,
                            digit => {
                                code = code.checked_mul(16)?.checked_add(digit.to_digit(16)?)?;
                            }
                        }
                    }
                    out.push(char::from_u32(code)?);
                }
            },
            _ => out.push(c),
        }
    }
    Some(out)
}

/// Escape `~` and `_` so a literal can sit inside a `many` list
pub fn wack(text: &str) -> String {
    text.replace('~', "~~").replace('_', "~-")
}

/// Undo [`wack`]; `None` on any other `~` escape
pub fn wick(text: &str) -> Option<String> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '~' {
            match chars.next()? {
                '~' => out.push('~'),
                '-' => out.push('_'),
                _ => return None,
            }
        } else {
            out.push(c);
        }
    }
    Some(out)
}

/// `@t`: `~~` plus escaped text
pub fn render_t(atom: &Atom) -> String {
    format!("~~{}", encode_ta_safe(&cord_to_string(atom)))
}

pub fn parse_t(input: &str) -> AuraResult<Atom> {
    let body = input
        .strip_prefix("~~")
        .ok_or_else(|| AuraError::shape(Aura::T, input))?;
    decode_ta_safe(body)
        .map(|text| cord_from_str(&text))
        .ok_or_else(|| AuraError::invalid(Aura::T, input, "bad escape"))
}

/// `@ta`: `~.` plus the raw text
pub fn render_ta(atom: &Atom) -> String {
    format!("~.{}", cord_to_string(atom))
}

pub fn parse_ta(input: &str) -> AuraResult<Atom> {
    input
        .strip_prefix("~.")
        .map(cord_from_str)
        .ok_or_else(|| AuraError::shape(Aura::Ta, input))
}

/// `@tas`: the raw symbol
pub fn render_tas(atom: &Atom) -> String {
    cord_to_string(atom)
}

/// `@c`: one code point
///
/// Below `0x7f` the character is ta-safe escaped; anything else, and NUL,
/// is written as its hex code point.
pub fn render_c(atom: &Atom) -> String {
    let ascii = u32::try_from(atom)
        .ok()
        .filter(|&code| code != 0 && code < 0x7f)
        .and_then(char::from_u32);
    match ascii {
        Some(c) => format!("~-{}", encode_ta_safe(c.encode_utf8(&mut [0; 4]))),
        None => format!("~-~{}.", atom.to_str_radix(16)),
    }
}

/// Parse `@c`; a lone lowercase hex escape is the code point itself,
/// other bodies decode to text packed as a cord
pub fn parse_c(input: &str) -> AuraResult<Atom> {
    let body = input
        .strip_prefix("~-")
        .ok_or_else(|| AuraError::shape(Aura::C, input))?;
    let hex = body
        .strip_prefix('~')
        .and_then(|rest| rest.strip_suffix('.'))
        .filter(|hex| !hex.is_empty() && hex.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));
    if let Some(hex) = hex {
        return Atom::parse_bytes(hex.as_bytes(), 16)
            .ok_or_else(|| AuraError::invalid(Aura::C, input, "bad code point"));
    }
    decode_ta_safe(body)
        .map(|text| cord_from_str(&text))
        .ok_or_else(|| AuraError::invalid(Aura::C, input, "bad escape"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAIRS: [(&str, &str); 7] = [
        ("#fine()", "~23.fine~28.~29."),
        ("fine here", "fine.here"),
        ("fine.", "fine~."),
        ("~fine", "~~fine"),
        ("Fine", "~46.ine"),
        ("fine-123", "fine-123"),
        ("~. F .~Yes", "~~~..~46..~.~~~59.es"),
    ];

    #[test]
    fn test_ta_safe_pairs() {
        for (text, safe) in PAIRS {
            assert_eq!(encode_ta_safe(text), safe);
            assert_eq!(decode_ta_safe(safe).as_deref(), Some(text));
        }
    }

    #[test]
    fn test_decode_wide_code_points() {
        assert_eq!(decode_ta_safe("a~62.c").as_deref(), Some("abc"));
        assert_eq!(decode_ta_safe("a~0a.c").as_deref(), Some("a\nc"));
        assert_eq!(
            decode_ta_safe("~2605.~1f920.yeehaw~1f468.~200d.~1f467.~200d.~1f466.").as_deref(),
            Some("\u{2605}\u{1f920}yeehaw\u{1f468}\u{200d}\u{1f467}\u{200d}\u{1f466}")
        );
    }

    #[test]
    fn test_decode_rejects_bad_escapes() {
        assert_eq!(decode_ta_safe("~"), None);
        assert_eq!(decode_ta_safe("~41"), None);
        assert_eq!(decode_ta_safe("~zz."), None);
        assert_eq!(decode_ta_safe("~d800."), None);
        assert_eq!(decode_ta_safe("~fffffffff."), None);
    }

    #[test]
    fn test_wack_wick() {
        assert_eq!(wack("~zod"), "~~zod");
        assert_eq!(wack(".__"), ".~-~-");
        assert_eq!(wick("~~~~a~~42.c").as_deref(), Some("~~a~42.c"));
        assert_eq!(wick(".~-1~-2~-~-").as_deref(), Some("._1_2__"));
        assert_eq!(wick("~~-").as_deref(), Some("~-"));
        assert_eq!(wick("~zod"), None);
        for text in ["", "~", "_", "~_~", "a~-b"] {
            assert_eq!(wick(&wack(text)).as_deref(), Some(text));
        }
    }

    #[test]
    fn test_text_auras() {
        let abc = cord_from_str("aBc");
        assert_eq!(render_t(&abc), "~~a~42.c");
        assert_eq!(parse_t("~~a~42.c").unwrap(), abc);
        assert_eq!(render_ta(&cord_from_str("hi")), "~.hi");
        assert_eq!(parse_ta("~.hi").unwrap(), cord_from_str("hi"));
        assert_eq!(render_tas(&cord_from_str("foo-bar")), "foo-bar");
        assert!(parse_t("~~~").is_err());
    }

    #[test]
    fn test_char() {
        assert_eq!(render_c(&Atom::from(0x61u32)), "~-a");
        assert_eq!(render_c(&Atom::from(0x20u32)), "~-.");
        assert_eq!(render_c(&Atom::from(0x41u32)), "~-~41.");
        assert_eq!(render_c(&Atom::from(0x7fu32)), "~-~7f.");
        assert_eq!(render_c(&Atom::from(0x1f920u32)), "~-~1f920.");
        assert_eq!(render_c(&Atom::from(0u32)), "~-~0.");

        assert_eq!(parse_c("~-a").unwrap(), Atom::from(0x61u32));
        assert_eq!(parse_c("~-.").unwrap(), Atom::from(0x20u32));
        assert_eq!(parse_c("~-~41.").unwrap(), Atom::from(0x41u32));
        assert_eq!(parse_c("~-~1f920.").unwrap(), Atom::from(0x1f920u32));
        assert_eq!(parse_c("~-~0.").unwrap(), Atom::from(0u32));
        assert_eq!(parse_c("~-~2E.").unwrap(), Atom::from(0x2eu32));
    }
}
