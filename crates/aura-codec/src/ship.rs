//! Ship classes, parents and short display names

use std::fmt;

use aura_core::{end, met, Atom, AuraResult};
use num_traits::Zero;

use crate::{parse_p, render_p};

/// Ship class by width
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Size {
    Galaxy,
    Star,
    Planet,
    Moon,
    Comet,
}

/// Ship class by rank title
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rank {
    Czar,
    King,
    Duke,
    Earl,
    Pawn,
}

impl Size {
    /// Class of a ship number, by its byte width
    pub fn of(ship: &Atom) -> Self {
        match met(3, ship) {
            0..=1 => Size::Galaxy,
            2 => Size::Star,
            3..=4 => Size::Planet,
            5..=8 => Size::Moon,
            _ => Size::Comet,
        }
    }
}

impl Rank {
    pub fn of(ship: &Atom) -> Self {
        Size::of(ship).into()
    }
}

impl From<Size> for Rank {
    fn from(size: Size) -> Self {
        match size {
            Size::Galaxy => Rank::Czar,
            Size::Star => Rank::King,
            Size::Planet => Rank::Duke,
            Size::Moon => Rank::Earl,
            Size::Comet => Rank::Pawn,
        }
    }
}

impl From<Rank> for Size {
    fn from(rank: Rank) -> Self {
        match rank {
            Rank::Czar => Size::Galaxy,
            Rank::King => Size::Star,
            Rank::Duke => Size::Planet,
            Rank::Earl => Size::Moon,
            Rank::Pawn => Size::Comet,
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Size::Galaxy => "galaxy",
            Size::Star => "star",
            Size::Planet => "planet",
            Size::Moon => "moon",
            Size::Comet => "comet",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rank::Czar => "czar",
            Rank::King => "king",
            Rank::Duke => "duke",
            Rank::Earl => "earl",
            Rank::Pawn => "pawn",
        };
        f.write_str(name)
    }
}

/// Class of a ship name
pub fn clan(ship: &str) -> AuraResult<Size> {
    parse_p(ship).map(|who| Size::of(&who))
}

/// Rank of a ship name
pub fn kind(ship: &str) -> AuraResult<Rank> {
    parse_p(ship).map(|who| Rank::of(&who))
}

/// Parent ship number; galaxies are their own parent, comets answer `~zod`
pub fn sein_atom(ship: &Atom) -> Atom {
    match Size::of(ship) {
        Size::Galaxy => ship.clone(),
        Size::Star => end(3, 1, ship),
        Size::Planet => end(4, 1, ship),
        Size::Moon => end(5, 1, ship),
        Size::Comet => Atom::zero(),
    }
}

/// Parent of a ship name
pub fn sein(ship: &str) -> AuraResult<String> {
    parse_p(ship).map(|who| render_p(&sein_atom(&who)))
}

/// Abbreviated display name
///
/// Moons show their last two words joined by `^`, comets their first and
/// last words joined by `_`; shorter names are returned whole. The
/// leading `~` is optional on input and always present on output.
pub fn cite(ship: &str) -> Option<String> {
    let name = ship.trim();
    let name = name.strip_prefix('~').unwrap_or(name);
    if name.is_empty() || !name.is_ascii() {
        return None;
    }
    let short = match name.len() {
        56 => format!("{}_{}", &name[..6], &name[50..]),
        27 => format!("{}^{}", &name[14..20], &name[21..]),
        _ => name.to_string(),
    };
    Some(format!("~{short}"))
}
