//! Calendar arithmetic

use aura_core::{mask, Atom};
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

/// Internal year of 1 AD minus one
pub const EPOCH: u64 = 292_277_024_400;

/// Seconds per day
pub const DAY: u64 = 86_400;
/// Seconds per hour
pub const HOUR: u64 = 3_600;
/// Seconds per minute
pub const MINUTE: u64 = 60;

/// Days in a 400-year era
const ERA_DAYS: u64 = 146_097;
/// Days in a century that does not start with a leap year
const CENTURY_DAYS: u64 = 36_524;

const MONTHS: [u64; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
const LEAP_MONTHS: [u64; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Maximum number of sub-second fragments
pub const MAX_FRAGMENTS: usize = 4;

/// Gregorian leap rule for `year mod 400`
fn is_leap(year_in_era: u64) -> bool {
    (year_in_era % 4 == 0 && year_in_era % 100 != 0) || year_in_era % 400 == 0
}

fn month_lengths(leap: bool) -> &'static [u64; 12] {
    if leap {
        &LEAP_MONTHS
    } else {
        &MONTHS
    }
}

/// A span of days, hours, minutes, seconds and sub-second fragments
///
/// Inside a [`Date`], `day` is the day of the month.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tarp {
    pub day: Atom,
    pub hour: u64,
    pub minute: u64,
    pub second: u64,
    /// 16-bit fractions of a second, most significant first
    pub fragments: Vec<u16>,
}

impl Tarp {
    /// Split a fixed-point atom into a span, dropping trailing zero fragments
    pub fn from_atom(atom: &Atom) -> Self {
        let fragments = fragments_from_atom(&(atom & mask(64)));
        let seconds = atom >> 64u32;

        let (day, rest) = seconds.div_rem(&Atom::from(DAY));
        // rest < DAY
        let rest = rest.to_u64().unwrap_or(0);

        Tarp {
            day,
            hour: rest / HOUR,
            minute: rest % HOUR / MINUTE,
            second: rest % MINUTE,
            fragments,
        }
    }

    /// Pack into a fixed-point atom; `None` with more than four fragments
    pub fn to_atom(&self) -> Option<Atom> {
        let fraction = fragments_to_atom(&self.fragments)?;
        Some(fraction | (self.total_seconds(&self.day) << 64u32))
    }

    /// Whole seconds of the span, counting `days` for its day field
    fn total_seconds(&self, days: &Atom) -> Atom {
        days * DAY
            + Atom::from(self.hour) * HOUR
            + Atom::from(self.minute) * MINUTE
            + Atom::from(self.second)
    }

    /// No whole-second fields set
    pub fn is_whole_zero(&self) -> bool {
        self.day.is_zero() && self.hour == 0 && self.minute == 0 && self.second == 0
    }
}

/// A calendar date and time of day
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Date {
    /// Anno Domini (false for years before 1 AD)
    pub ad: bool,
    /// Year magnitude
    pub year: Atom,
    /// Month, 1 through 12
    pub month: u8,
    /// Day of month, clock and fragments
    pub time: Tarp,
}

impl Date {
    /// Date at midnight
    pub fn new(ad: bool, year: impl Into<Atom>, month: u8, day: u64) -> Self {
        Date {
            ad,
            year: year.into(),
            month,
            time: Tarp {
                day: Atom::from(day),
                ..Default::default()
            },
        }
    }

    /// Decode an absolute date atom
    pub fn from_atom(atom: &Atom) -> Self {
        let span = Tarp::from_atom(atom);
        let (internal, month, day) = civil_from_days(&span.day);

        let epoch = Atom::from(EPOCH);
        let (ad, year) = if internal > epoch {
            (true, internal - epoch)
        } else {
            (false, epoch + 1u32 - internal)
        };

        Date {
            ad,
            year,
            month,
            time: Tarp {
                day: Atom::from(day),
                ..span
            },
        }
    }

    /// Encode as an absolute date atom
    ///
    /// Day, hour, minute and second fields carry forward when they
    /// overflow. `None` when the month is outside 1..=12, the day is zero,
    /// the year precedes the epoch, or there are more than four fragments.
    pub fn to_atom(&self) -> Option<Atom> {
        if !(1..=12).contains(&self.month) || self.time.day.is_zero() {
            return None;
        }

        let internal = if self.ad {
            Atom::from(EPOCH) + &self.year
        } else if self.year.is_zero() {
            Atom::from(EPOCH + 1)
        } else {
            let back = &self.year - 1u32;
            let epoch = Atom::from(EPOCH);
            if back > epoch {
                return None;
            }
            epoch - back
        };

        let days = days_from_civil(&internal, self.month, &self.time.day);
        let fraction = fragments_to_atom(&self.time.fragments)?;
        Some(fraction | (self.time.total_seconds(&days) << 64u32))
    }
}

/// Days since the epoch for an internal year, month and day of month
fn days_from_civil(year: &Atom, month: u8, day: &Atom) -> Atom {
    let (eras, in_era) = year.div_rem(&Atom::from(400u32));
    // in_era < 400
    let mut yy = in_era.to_u64().unwrap_or(0);

    let lengths = month_lengths(is_leap(yy));
    let mut days = day - 1u32;
    for len in &lengths[..usize::from(month) - 1] {
        days += *len;
    }

    loop {
        if yy % 4 != 0 {
            yy -= 1;
            days += if is_leap(yy) { 366u32 } else { 365 };
        } else if yy % 100 != 0 {
            yy -= 4;
            days += if is_leap(yy) { 1461u32 } else { 1460 };
        } else if yy % 400 != 0 {
            yy -= 100;
            days += if is_leap(yy) { 36_525u32 } else { 36_524 };
        } else {
            break;
        }
    }

    days + eras * ERA_DAYS
}

/// Internal year, month and day of month for a count of days
fn civil_from_days(days: &Atom) -> (Atom, u8, u64) {
    let (era, rest) = days.div_rem(&Atom::from(ERA_DAYS));
    // rest < ERA_DAYS
    let mut day = rest.to_u64().unwrap_or(0);

    let (mut leap, century) = if day < CENTURY_DAYS + 1 {
        (true, 0)
    } else {
        day -= CENTURY_DAYS + 1;
        let century = 1 + day / CENTURY_DAYS;
        day %= CENTURY_DAYS;
        (false, century)
    };

    let mut year = century * 100;
    loop {
        let len = if leap { 366 } else { 365 };
        if day < len {
            break;
        }
        year += 1;
        day -= len;
        leap = year % 4 == 0;
    }

    let mut month = 0;
    for len in month_lengths(leap) {
        if day < *len {
            break;
        }
        day -= len;
        month += 1;
    }

    (era * 400u32 + year, month + 1, day + 1)
}

/// Split the low 64 bits into 16-bit groups, dropping trailing zeros
pub fn fragments_from_atom(fraction: &Atom) -> Vec<u16> {
    let mut raw = fraction.to_u64().unwrap_or(0);
    let mut fragments = Vec::with_capacity(MAX_FRAGMENTS);
    let mut shift = 64;
    while raw != 0 && shift != 0 {
        shift -= 16;
        fragments.push((raw >> shift) as u16);
        raw &= (1u64 << shift).wrapping_sub(1);
    }
    fragments
}

/// Pack up to four 16-bit groups, most significant first
pub fn fragments_to_atom(fragments: &[u16]) -> Option<Atom> {
    if fragments.len() > MAX_FRAGMENTS {
        return None;
    }
    let raw = fragments
        .iter()
        .enumerate()
        .fold(0u64, |acc, (i, f)| acc | (u64::from(*f) << (16 * (3 - i))));
    Some(Atom::from(raw))
}
