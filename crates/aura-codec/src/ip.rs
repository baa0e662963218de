//! Address auras: `@if` (IPv4) and `@is` (IPv6)
//!
//! Fields are summed into place rather than range-checked, so an
//! oversized field carries into its neighbour; rendering keeps only the
//! low 32 or 128 bits.

use aura_core::{end, Atom, Aura, AuraError, AuraResult};

fn parse_fields(aura: Aura, input: &str, count: usize, radix: u32, width: u32) -> AuraResult<Atom> {
    let shape = || AuraError::shape(aura, input);
    let body = input.strip_prefix('.').ok_or_else(shape)?;
    let fields: Vec<&str> = body.split('.').collect();
    if fields.len() != count {
        return Err(shape());
    }

    let mut atom = Atom::default();
    for (i, field) in fields.iter().enumerate() {
        if field.is_empty() || !field.chars().all(|c| c.is_digit(radix)) {
            return Err(shape());
        }
        let value = Atom::parse_bytes(field.as_bytes(), radix).ok_or_else(shape)?;
        atom += value << (width * (count - 1 - i) as u32);
    }
    Ok(atom)
}

/// Parse `.a.b.c.d`
pub fn parse_if(input: &str) -> AuraResult<Atom> {
    parse_fields(Aura::If, input, 4, 10, 8)
}

/// Render the low 32 bits as four decimal octets
pub fn render_if(atom: &Atom) -> String {
    let bytes = end(5, 1, atom).to_bytes_le();
    (0..4)
        .rev()
        .map(|i| format!(".{}", bytes.get(i).copied().unwrap_or(0)))
        .collect()
}

/// Parse eight `.`-led hex groups
pub fn parse_is(input: &str) -> AuraResult<Atom> {
    parse_fields(Aura::Is, input, 8, 16, 16)
}

/// Render the low 128 bits as eight unpadded hex groups
pub fn render_is(atom: &Atom) -> String {
    let words = end(7, 1, atom).to_u32_digits();
    (0..8)
        .rev()
        .map(|i| {
            let word = words.get(i / 2).copied().unwrap_or(0);
            format!(".{:x}", (word >> (16 * (i % 2))) & 0xffff)
        })
        .collect()
}
