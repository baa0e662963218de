//! Literal shapes
//!
//! One regular expression per aura, compiled once on first use. A shape
//! match only says the text is laid out like the aura; values are checked
//! by the aura's own parser.

use std::collections::HashMap;
use std::sync::LazyLock;

use aura_core::Aura;
use regex::Regex;

static SHAPES: LazyLock<HashMap<Aura, Regex>> = LazyLock::new(|| {
    Aura::ALL
        .iter()
        .filter_map(|&aura| Regex::new(&pattern(aura)).ok().map(|re| (aura, re)))
        .collect()
});

static BLOB: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(BLOB_PATTERN).ok());
static MANY: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(MANY_PATTERN).ok());

const BLOB_PATTERN: &str = r"^~0[0-9a-v]+$";
const MANY_PATTERN: &str = r"^\.(_([0-9a-zA-Z.-]|~-|~~)+)*__$";

const TEXT_BODY: &str = r"((~[0-9a-fA-F]+\.)|(~[~.])|[0-9a-z._-])*";

/// `prefix` then `0` or a `lead` digit followed by `digit`s grouped by
/// `group` (0 for ungrouped), optionally behind a `-` or `--` sign
fn integer_pattern(prefix: &str, lead: &str, digit: &str, group: usize, signed: bool) -> String {
    let (head, tail) = if group == 0 {
        (lead.to_string(), format!("{digit}*"))
    } else {
        (
            format!("{lead}{digit}{{0,{}}}", group - 1),
            format!(r"(\.{digit}{{{group}}})*"),
        )
    };
    let sign = if signed { "--?" } else { "" };
    format!("^{sign}{prefix}(0|{head}{tail})$")
}

fn float_pattern(tildes: usize) -> String {
    format!(
        r"^\.~{{{tildes}}}(nan|-?(inf|(0|[1-9][0-9]*)(\.[0-9]+)?(e-?(0|[1-9][0-9]*))?))$"
    )
}

/// Source text of an aura's shape
pub fn pattern(aura: Aura) -> String {
    let signed = aura.is_signed();
    match aura {
        Aura::C => format!("^~-{TEXT_BODY}$"),
        Aura::Da => concat!(
            r"^~(0|[1-9][0-9]*)-?\.([1-9]|1[0-2])\.([1-9]|[1-3][0-9])",
            r"(\.\.([0-9]+)\.([0-9]+)\.([0-9]+)(\.(\.[0-9a-f]{4})+)?)?$"
        )
        .to_string(),
        Aura::Dr => concat!(
            r"^~((d|h|m|s)(0|[1-9][0-9]*))(\.(d|h|m|s)(0|[1-9][0-9]*))*",
            r"(\.(\.[0-9a-f]{4})+)?$"
        )
        .to_string(),
        Aura::F => r"^\.(y|n)$".to_string(),
        Aura::If => r"^(\.(0|[1-9][0-9]{0,2})){4}$".to_string(),
        Aura::Is => r"^(\.(0|[1-9a-fA-F][0-9a-fA-F]{0,3})){8}$".to_string(),
        Aura::N => r"^~$".to_string(),
        Aura::P => r"^~([a-z]{3}|[a-z]{6}(-[a-z]{6}){0,3}(--[a-z]{6}(-[a-z]{6}){3})*)$".to_string(),
        Aura::Q => r"^\.~(([a-z]{3}|[a-z]{6})(-[a-z]{6})*)$".to_string(),
        Aura::Rd => float_pattern(1),
        Aura::Rh => float_pattern(2),
        Aura::Rq => float_pattern(3),
        Aura::Rs => float_pattern(0),
        Aura::Sb | Aura::Ub => integer_pattern("0b", "1", "[01]", 4, signed),
        Aura::Sd | Aura::Ud => integer_pattern("", "[1-9]", "[0-9]", 3, signed),
        Aura::Si | Aura::Ui => integer_pattern("0i", "[1-9]", "[0-9]", 0, signed),
        Aura::Sv | Aura::Uv => integer_pattern("0v", "[1-9a-v]", "[0-9a-v]", 5, signed),
        Aura::Sw | Aura::Uw => {
            integer_pattern("0w", "[1-9a-zA-Z~-]", "[0-9a-zA-Z~-]", 5, signed)
        }
        Aura::Sx | Aura::Ux => integer_pattern("0x", "[1-9a-f]", "[0-9a-f]", 4, signed),
        Aura::T => format!("^~~{TEXT_BODY}$"),
        Aura::Ta => r"^~\.[0-9a-z.~_-]*$".to_string(),
        Aura::Tas => r"^[a-z][a-z0-9-]*$".to_string(),
    }
}

/// Compiled shape of an aura
pub fn shape(aura: Aura) -> Option<&'static Regex> {
    SHAPES.get(&aura)
}

/// Is `input` laid out like an `aura` literal?
pub fn matches(aura: Aura, input: &str) -> bool {
    shape(aura).is_some_and(|re| re.is_match(input))
}

/// Is `input` laid out like a blob literal?
pub fn is_blob(input: &str) -> bool {
    BLOB.as_ref().is_some_and(|re| re.is_match(input))
}

/// Is `input` laid out like a `many` list?
pub fn is_many(input: &str) -> bool {
    MANY.as_ref().is_some_and(|re| re.is_match(input))
}
