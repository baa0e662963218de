//! Typed parse results: dimes and coins

use crate::{Atom, Aura};

/// An atom tagged with its aura
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Dime {
    pub aura: Aura,
    pub atom: Atom,
}

impl Dime {
    pub fn new(aura: Aura, atom: impl Into<Atom>) -> Self {
        Dime {
            aura,
            atom: atom.into(),
        }
    }
}

/// Result of untyped parsing
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Coin {
    /// A single typed atom
    Dime(Dime),
    /// Opaque payload (a serialized noun, never decoded here)
    Blob(Atom),
    /// Ordered, possibly nested, list of coins
    Many(Vec<Coin>),
}

impl Coin {
    /// Shorthand for `Coin::Dime(Dime::new(..))`
    pub fn dime(aura: Aura, atom: impl Into<Atom>) -> Self {
        Coin::Dime(Dime::new(aura, atom))
    }

    pub fn blob(atom: impl Into<Atom>) -> Self {
        Coin::Blob(atom.into())
    }

    pub fn as_dime(&self) -> Option<&Dime> {
        match self {
            Coin::Dime(dime) => Some(dime),
            _ => None,
        }
    }

    pub fn into_dime(self) -> Option<Dime> {
        match self {
            Coin::Dime(dime) => Some(dime),
            _ => None,
        }
    }
}

impl From<Dime> for Coin {
    fn from(dime: Dime) -> Self {
        Coin::Dime(dime)
    }
}
