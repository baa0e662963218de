//! Phonetic auras: `@p` ship names and `@q` phonetic bytes
//!
//! Both spell 16-bit words as prefix+suffix syllable pairs. `@p` conceals
//! the atom first and breaks long names with `--` every four words; `@q`
//! spells the big-endian bytes as they are.

use aura_core::{atom_to_bytes_le, Atom, Aura, AuraError, AuraResult};
use aura_ob::{conceal, reveal};

use crate::{prefix_index, suffix_index, PREFIXES, SUFFIXES};

/// Render a ship name
pub fn render_p(atom: &Atom) -> String {
    let bytes = atom_to_bytes_le(&conceal(atom));
    if bytes.len() <= 1 {
        return format!("~{}", SUFFIXES[bytes.first().copied().unwrap_or(0) as usize]);
    }

    let words = bytes.len().div_ceil(2);
    let mut out = String::with_capacity(1 + words * 7);
    out.push('~');
    for i in (0..words).rev() {
        let low = bytes[2 * i];
        let high = bytes.get(2 * i + 1).copied().unwrap_or(0);
        out.push_str(PREFIXES[high as usize]);
        out.push_str(SUFFIXES[low as usize]);
        if i != 0 {
            out.push_str(if i % 4 == 0 { "--" } else { "-" });
        }
    }
    out
}

/// Parse a ship name
///
/// The name must be exactly what [`render_p`] produces for its value, so
/// `~dozzod` (a padded `~zod`) and misplaced separators are rejected.
pub fn parse_p(input: &str) -> AuraResult<Atom> {
    let body = input
        .strip_prefix('~')
        .ok_or_else(|| AuraError::shape(Aura::P, input))?;
    let bytes = syllable_bytes(Aura::P, input, &body.replace('-', ""))?;
    let atom = reveal(&Atom::from_bytes_be(&bytes));
    if render_p(&atom) != input {
        return Err(AuraError::NonCanonical {
            aura: Aura::P,
            input: input.to_string(),
        });
    }
    Ok(atom)
}

/// Render phonetic bytes, `.~` prefix included
pub fn render_q(atom: &Atom) -> String {
    let mut bytes = atom.to_bytes_be();
    if bytes.is_empty() {
        bytes.push(0);
    }
    format!(".{}", render_q_bytes(&bytes))
}

/// Spell bytes as `~`-prefixed `@q` syllables, leading zero bytes kept
///
/// Words pair up from the low end, so an odd leading byte stands alone
/// as a suffix.
pub fn render_q_bytes(bytes: &[u8]) -> String {
    let (head, rest) = match bytes {
        [] => return format!("~{}", SUFFIXES[0]),
        _ if bytes.len() % 2 == 1 => (Some(bytes[0]), &bytes[1..]),
        _ => (None, bytes),
    };
    let mut words: Vec<String> = Vec::with_capacity(bytes.len().div_ceil(2));
    if let Some(byte) = head {
        words.push(SUFFIXES[byte as usize].to_string());
    }
    for pair in rest.chunks(2) {
        words.push(format!("{}{}", PREFIXES[pair[0] as usize], SUFFIXES[pair[1] as usize]));
    }
    format!("~{}", words.join("-"))
}

/// Parse `@q`; leading zero words are accepted
pub fn parse_q(input: &str) -> AuraResult<Atom> {
    let body = input
        .strip_prefix('.')
        .ok_or_else(|| AuraError::shape(Aura::Q, input))?;
    Ok(Atom::from_bytes_be(&parse_q_bytes(body)?))
}

/// Bytes spelled by a `~`-prefixed `@q` name, leading zero bytes kept
pub fn parse_q_bytes(name: &str) -> AuraResult<Vec<u8>> {
    let shape = || AuraError::shape(Aura::Q, name);
    let body = name.strip_prefix('~').ok_or_else(shape)?;

    let mut bytes = Vec::with_capacity(body.len() / 3);
    for (i, chunk) in body.split('-').enumerate() {
        match chunk.len() {
            3 if i == 0 => bytes.extend(syllable_bytes(Aura::Q, name, chunk)?),
            6 => bytes.extend(syllable_bytes(Aura::Q, name, chunk)?),
            _ => return Err(shape()),
        }
    }
    Ok(bytes)
}

/// Big-endian bytes of concatenated syllables: a lone syllable is a
/// suffix, otherwise they alternate prefix, suffix
fn syllable_bytes(aura: Aura, input: &str, syllables: &str) -> AuraResult<Vec<u8>> {
    let shape = || AuraError::shape(aura, input);
    if syllables.is_empty()
        || syllables.len() % 3 != 0
        || !syllables.bytes().all(|b| b.is_ascii_lowercase())
    {
        return Err(shape());
    }

    let count = syllables.len() / 3;
    if count > 1 && count % 2 != 0 {
        return Err(shape());
    }
    (0..count)
        .map(|i| {
            let syllable = &syllables[3 * i..3 * i + 3];
            let byte = if count > 1 && i % 2 == 0 {
                prefix_index(syllable)
            } else {
                suffix_index(syllable)
            };
            byte.ok_or_else(|| AuraError::invalid(aura, input, "unknown syllable"))
        })
        .collect()
}
