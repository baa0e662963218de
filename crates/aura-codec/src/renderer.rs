//! Literal rendering
//!
//! Rendering never fails: every aura has a form for every atom, and
//! fixed-width auras quietly drop the bits they cannot show.

use aura_core::{Atom, Aura, Coin};
use aura_float::{Precision, RenderConfig};
use aura_time::{render_da, render_dr};
use num_traits::{One, Zero};

use crate::{
    render_blob, render_c, render_if, render_is, render_p, render_q, render_signed, render_t,
    render_ta, render_tas, render_unsigned, wack,
};

/// Render `atom` as `aura`
pub fn scot(aura: Aura, atom: &Atom) -> String {
    scot_with(aura, atom, &RenderConfig::default())
}

/// [`scot`] with float digit generation set by `config`
pub fn scot_with(aura: Aura, atom: &Atom, config: &RenderConfig) -> String {
    match aura {
        Aura::C => render_c(atom),
        Aura::Da => render_da(atom),
        Aura::Dr => render_dr(atom),
        Aura::F if atom.is_zero() => ".y".to_string(),
        Aura::F if atom.is_one() => ".n".to_string(),
        Aura::F => render_unsigned(Aura::Ux, atom),
        Aura::If => render_if(atom),
        Aura::Is => render_is(atom),
        Aura::N => "~".to_string(),
        Aura::P => render_p(atom),
        Aura::Q => render_q(atom),
        Aura::Rd => aura_float::render_with(Precision::Double, atom, config),
        Aura::Rh => aura_float::render_with(Precision::Half, atom, config),
        Aura::Rq => aura_float::render_with(Precision::Quad, atom, config),
        Aura::Rs => aura_float::render_with(Precision::Single, atom, config),
        Aura::Sb | Aura::Sd | Aura::Si | Aura::Sv | Aura::Sw | Aura::Sx => render_signed(aura, atom),
        Aura::T => render_t(atom),
        Aura::Ta => render_ta(atom),
        Aura::Tas => render_tas(atom),
        Aura::Ub | Aura::Ud | Aura::Ui | Aura::Uv | Aura::Uw | Aura::Ux => render_unsigned(aura, atom),
    }
}

/// Render a coin; list elements are escaped with [`wack`]
pub fn rend(coin: &Coin) -> String {
    match coin {
        Coin::Dime(dime) => scot(dime.aura, &dime.atom),
        Coin::Blob(jam) => render_blob(jam),
        Coin::Many(coins) => {
            let mut out = String::from(".");
            for coin in coins {
                out.push('_');
                out.push_str(&wack(&rend(coin)));
            }
            out.push_str("__");
            out
        }
    }
}
