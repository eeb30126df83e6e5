use core::fmt;
use core::time::Duration;
use std::time::{SystemTime, UNIX_EPOCH};

/// A point in time, stored as seconds and nanoseconds since the Unix epoch.
///
/// Unlike [`SystemTime`], a `Date` has a public, platform independent layout,
/// so it can be compared, hashed and copied into generic values freely.
///
/// `nanos` is always below one second; dates before the epoch have negative
/// `secs` and a positive `nanos` offset.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, UNIX_EPOCH};
/// use vmc_schema::Date;
///
/// let date = Date::from(UNIX_EPOCH + Duration::from_millis(1500));
/// assert_eq!(date, Date::new(1, 500_000_000));
/// assert_eq!(date.to_system_time(), UNIX_EPOCH + Duration::from_millis(1500));
///
/// let before = Date::from(UNIX_EPOCH - Duration::from_millis(1500));
/// assert_eq!(before, Date::new(-2, 500_000_000));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    secs: i64,
    nanos: u32,
}

const NANOS_PER_SEC: u32 = 1_000_000_000;

impl Date {
    /// The Unix epoch, `1970-01-01T00:00:00Z`.
    pub const UNIX_EPOCH: Self = Self { secs: 0, nanos: 0 };

    /// Creates a date from seconds and nanoseconds since the epoch.
    ///
    /// Nanoseconds beyond one second carry into `secs`.
    pub const fn new(secs: i64, nanos: u32) -> Self {
        Self {
            secs: secs + (nanos / NANOS_PER_SEC) as i64,
            nanos: nanos % NANOS_PER_SEC,
        }
    }

    /// Creates a date from whole seconds since the epoch.
    #[inline]
    pub const fn from_secs(secs: i64) -> Self {
        Self { secs, nanos: 0 }
    }

    /// Returns the current system time.
    pub fn now() -> Self {
        Self::from(SystemTime::now())
    }

    /// Whole seconds since the epoch, rounded towards negative infinity.
    #[inline]
    pub const fn secs(&self) -> i64 {
        self.secs
    }

    /// Sub-second nanoseconds, always in `0..1_000_000_000`.
    #[inline]
    pub const fn nanos(&self) -> u32 {
        self.nanos
    }

    /// Converts back to a [`SystemTime`].
    pub fn to_system_time(&self) -> SystemTime {
        let nanos = Duration::from_nanos(u64::from(self.nanos));
        if self.secs >= 0 {
            UNIX_EPOCH + Duration::from_secs(self.secs.unsigned_abs()) + nanos
        } else {
            UNIX_EPOCH - Duration::from_secs(self.secs.unsigned_abs()) + nanos
        }
    }
}

impl From<SystemTime> for Date {
    fn from(time: SystemTime) -> Self {
        match time.duration_since(UNIX_EPOCH) {
            Ok(after) => Self::new(after.as_secs() as i64, after.subsec_nanos()),
            Err(err) => {
                let before = err.duration();
                let secs = -(before.as_secs() as i64);
                match before.subsec_nanos() {
                    0 => Self::from_secs(secs),
                    nanos => Self::new(secs - 1, NANOS_PER_SEC - nanos),
                }
            }
        }
    }
}

impl From<Date> for SystemTime {
    #[inline]
    fn from(date: Date) -> Self {
        date.to_system_time()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:09}s", self.secs, self.nanos)
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, UNIX_EPOCH};

    use super::Date;

    #[test]
    fn normalizes_nanos() {
        assert_eq!(Date::new(1, 2_500_000_000), Date::new(3, 500_000_000));
    }

    #[test]
    fn system_time_conversion() {
        for millis in [0_u64, 1, 999, 1000, 86_400_123] {
            let after = UNIX_EPOCH + Duration::from_millis(millis);
            assert_eq!(Date::from(after).to_system_time(), after);

            let before = UNIX_EPOCH - Duration::from_millis(millis);
            assert_eq!(Date::from(before).to_system_time(), before);
        }
    }

    #[test]
    fn ordering_follows_time() {
        let a = Date::from(UNIX_EPOCH - Duration::from_millis(10));
        let b = Date::UNIX_EPOCH;
        let c = Date::from_secs(5);
        assert!(a < b && b < c);
    }
}
