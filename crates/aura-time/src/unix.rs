//! Conversion between absolute dates and Unix time

use std::time::{SystemTime, UNIX_EPOCH};

use aura_core::Atom;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, ToPrimitive};

/// Whole seconds from the calendar epoch to `~1970.1.1`
pub const UNIX_EPOCH_SECONDS: u64 = 9_223_372_091_860_848_000;

/// `~1970.1.1` as an absolute date atom
pub fn da_unix_epoch() -> Atom {
    Atom::from(UNIX_EPOCH_SECONDS) << 64u32
}

/// One second in fixed-point date units (2^64)
pub fn da_second() -> Atom {
    Atom::one() << 64u32
}

/// Milliseconds since 1970, rounded to the nearest millisecond
///
/// `None` when the result does not fit an `i64`.
pub fn to_unix_millis(da: &Atom) -> Option<i64> {
    let second = BigInt::from(da_second());
    let offset = BigInt::from(da.clone()) - BigInt::from(da_unix_epoch());
    let scaled: BigInt = offset * 1000 + (&second >> 1u32);
    scaled.div_floor(&second).to_i64()
}

/// Absolute date for milliseconds since 1970
pub fn from_unix_millis(millis: i64) -> Atom {
    let offset = (Atom::from(millis.unsigned_abs()) << 64u32) / 1000u32;
    if millis < 0 {
        da_unix_epoch() - offset
    } else {
        da_unix_epoch() + offset
    }
}

/// Absolute date for a system time, keeping sub-millisecond precision
pub fn from_system_time(time: SystemTime) -> Atom {
    let (after, elapsed) = match time.duration_since(UNIX_EPOCH) {
        Ok(elapsed) => (true, elapsed),
        Err(err) => (false, err.duration()),
    };
    let offset = (Atom::from(elapsed.as_secs()) << 64u32)
        + (Atom::from(elapsed.subsec_nanos()) << 64u32) / 1_000_000_000u32;
    if after {
        da_unix_epoch() + offset
    } else {
        da_unix_epoch() - offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse_da, render_da};
    use std::time::Duration;

    #[test]
    fn test_epoch() {
        assert_eq!(
            da_unix_epoch(),
            "170141184475152167957503069145530368000".parse::<Atom>().unwrap()
        );
        assert_eq!(render_da(&da_unix_epoch()), "~1970.1.1");
        assert_eq!(to_unix_millis(&da_unix_epoch()), Some(0));
    }

    #[test]
    fn test_millis_roundtrip() {
        let y2k = parse_da("~2000.1.1").unwrap();
        assert_eq!(to_unix_millis(&y2k), Some(946_684_800_000));
        assert_eq!(from_unix_millis(946_684_800_000), y2k);

        let before = parse_da("~1969.12.31..23.59.59").unwrap();
        assert_eq!(to_unix_millis(&before), Some(-1000));
        assert_eq!(from_unix_millis(-1000), before);
    }

    #[test]
    fn test_millis_rounds_to_nearest() {
        let half_ms = parse_da("~2000.1.1..00.00.00..0083").unwrap();
        assert_eq!(to_unix_millis(&half_ms), Some(946_684_800_002));
    }

    #[test]
    fn test_system_time() {
        let time = UNIX_EPOCH + Duration::from_millis(946_684_800_000);
        assert_eq!(render_da(&from_system_time(time)), "~2000.1.1");

        let time = UNIX_EPOCH - Duration::from_secs(1);
        assert_eq!(render_da(&from_system_time(time)), "~1969.12.31..23.59.59");
    }
}
