//! Clock and entropy service traits with the desktop implementation.

use std::cell::Cell;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Clock
// ---------------------------------------------------------------------------

/// A simple wall-clock timestamp (UTC, no timezone handling).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SystemTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl SystemTime {
    /// Time-of-day portion, `HH:MM:SS`.
    pub fn hms(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl std::fmt::Display for SystemTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second,
        )
    }
}

/// Abstraction over wall-clock and uptime queries.
pub trait Clock {
    /// Current wall-clock time.
    fn now(&self) -> SystemTime;

    /// Seconds since the process started.
    fn uptime_secs(&self) -> u64;
}

// ---------------------------------------------------------------------------
// Entropy
// ---------------------------------------------------------------------------

/// Abstraction over a pseudo-random number stream.
///
/// Takes `&self` so handlers can draw values through a shared reference;
/// implementations use interior mutability for their state.
pub trait Entropy {
    /// Next raw value from the stream.
    fn next_u32(&self) -> u32;

    /// A value in `[0, bound)`. `bound` of zero yields zero.
    fn below(&self, bound: u32) -> u32 {
        if bound == 0 {
            0
        } else {
            self.next_u32() % bound
        }
    }
}

// ---------------------------------------------------------------------------
// Desktop implementation
// ---------------------------------------------------------------------------

/// Default platform implementation using `std` facilities.
pub struct DesktopPlatform {
    start_time: std::time::Instant,
    rng_state: Cell<u32>,
}

impl DesktopPlatform {
    pub fn new() -> Self {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .subsec_nanos()
            | 1;
        Self {
            start_time: std::time::Instant::now(),
            rng_state: Cell::new(seed),
        }
    }
}

impl Default for DesktopPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for DesktopPlatform {
    fn now(&self) -> SystemTime {
        use std::time::SystemTime as StdTime;
        let dur = StdTime::now()
            .duration_since(StdTime::UNIX_EPOCH)
            .unwrap_or_default();
        let secs = dur.as_secs();

        let days = secs / 86400;
        let time_of_day = secs % 86400;
        let hour = (time_of_day / 3600) as u8;
        let minute = ((time_of_day % 3600) / 60) as u8;
        let second = (time_of_day % 60) as u8;

        let (year, month, day) = days_to_ymd(days);

        SystemTime {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

impl Entropy for DesktopPlatform {
    fn next_u32(&self) -> u32 {
        // Xorshift32.
        let mut x = self.rng_state.get();
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.rng_state.set(x);
        x
    }
}

/// Convert days since 1970-01-01 to a calendar date.
fn days_to_ymd(days: u64) -> (u16, u8, u8) {
    let mut year: u16 = 1970;
    let mut remaining = days;
    loop {
        let len = if is_leap(year) { 366 } else { 365 };
        if remaining < len {
            break;
        }
        remaining -= len;
        year += 1;
    }

    let month_lengths = [
        31,
        if is_leap(year) { 29 } else { 28 },
        31,
        30,
        31,
        30,
        31,
        31,
        30,
        31,
        30,
        31,
    ];
    let mut month: u8 = 1;
    for len in month_lengths {
        if remaining < len {
            break;
        }
        remaining -= len;
        month += 1;
    }

    (year, month, (remaining + 1) as u8)
}

fn is_leap(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

// ---------------------------------------------------------------------------
// Deterministic fakes for tests
// ---------------------------------------------------------------------------

/// A clock frozen at a fixed instant.
pub struct FixedClock {
    time: SystemTime,
    uptime: u64,
}

impl FixedClock {
    pub fn new(time: SystemTime, uptime: u64) -> Self {
        Self { time, uptime }
    }

    /// 2024-01-15 10:00:00, up one hour. Matches the fixture timestamps
    /// embedded in the canned command output.
    pub fn default_fixture() -> Self {
        Self::new(
            SystemTime {
                year: 2024,
                month: 1,
                day: 15,
                hour: 10,
                minute: 0,
                second: 0,
            },
            3600,
        )
    }
}

impl Clock for FixedClock {
    fn now(&self) -> SystemTime {
        self.time
    }

    fn uptime_secs(&self) -> u64 {
        self.uptime
    }
}

/// An entropy source that replays a fixed sequence, cycling at the end.
pub struct FixedEntropy {
    values: Vec<u32>,
    pos: Cell<usize>,
}

impl FixedEntropy {
    pub fn new(values: Vec<u32>) -> Self {
        Self {
            values,
            pos: Cell::new(0),
        }
    }

    /// A constant stream of one value.
    pub fn constant(value: u32) -> Self {
        Self::new(vec![value])
    }
}

impl Entropy for FixedEntropy {
    fn next_u32(&self) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let i = self.pos.get();
        self.pos.set((i + 1) % self.values.len());
        self.values[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_time_display() {
        let t = SystemTime {
            year: 2024,
            month: 1,
            day: 15,
            hour: 9,
            minute: 5,
            second: 3,
        };
        assert_eq!(format!("{t}"), "2024-01-15 09:05:03");
        assert_eq!(t.hms(), "09:05:03");
    }

    #[test]
    fn days_to_ymd_epoch() {
        assert_eq!(days_to_ymd(0), (1970, 1, 1));
        assert_eq!(days_to_ymd(31), (1970, 2, 1));
        assert_eq!(days_to_ymd(365), (1971, 1, 1));
    }

    #[test]
    fn days_to_ymd_leap_year() {
        // 1972 is a leap year: Feb 29 exists.
        // Days from 1970-01-01 to 1972-02-29: 365 + 365 + 31 + 28 = 789.
        assert_eq!(days_to_ymd(789), (1972, 2, 29));
        assert_eq!(days_to_ymd(790), (1972, 3, 1));
    }

    #[test]
    fn fixed_clock_is_frozen() {
        let c = FixedClock::default_fixture();
        assert_eq!(c.now(), c.now());
        assert_eq!(c.uptime_secs(), 3600);
    }

    #[test]
    fn fixed_entropy_cycles() {
        let e = FixedEntropy::new(vec![1, 2, 3]);
        assert_eq!(e.next_u32(), 1);
        assert_eq!(e.next_u32(), 2);
        assert_eq!(e.next_u32(), 3);
        assert_eq!(e.next_u32(), 1);
    }

    #[test]
    fn below_bounds_values() {
        let e = FixedEntropy::new(vec![10, 11, 12]);
        for _ in 0..6 {
            assert!(e.below(5) < 5);
        }
        assert_eq!(e.below(0), 0);
    }

    #[test]
    fn desktop_entropy_advances() {
        let p = DesktopPlatform::new();
        let a = p.next_u32();
        let b = p.next_u32();
        assert_ne!(a, b);
    }
}
