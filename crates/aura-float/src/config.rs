//! Float rendering configuration

use crate::CutoffMode;

/// Float rendering configuration
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderConfig {
    /// Where digit generation stops
    pub cutoff: CutoffMode,
}

impl RenderConfig {
    /// Shortest digits that parse back to the same bits (the literal default)
    pub fn shortest() -> Self {
        RenderConfig {
            cutoff: CutoffMode::Unique,
        }
    }

    /// At most `digits` significant digits
    pub fn significant(digits: u32) -> Self {
        RenderConfig {
            cutoff: CutoffMode::TotalLength(digits.max(1)),
        }
    }

    /// At most `digits` digits after the decimal point
    pub fn fixed(digits: u32) -> Self {
        RenderConfig {
            cutoff: CutoffMode::FractionLength(digits),
        }
    }
}
