//! Address ranges, memory sizes and clock frequencies.
//!
//! This module defines the strongly typed quantities that appear in option
//! strings. It provides the following:
//! 1. **Sizes:** `MemSize` parses `16kB`, `1024MB`, `1GiB` style strings into bytes.
//! 2. **Ranges:** `AddrRange` describes a contiguous physical address window.
//! 3. **Clocks:** `Frequency` parses `2.66GHz` style strings and converts to a tick period.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Simulation ticks per second (one tick is one picosecond).
pub const TICKS_PER_SECOND: u64 = 1_000_000_000_000;

/// A size in bytes, parsed from a human-readable string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MemSize(pub u64);

impl MemSize {
    /// Returns the raw byte count.
    #[inline(always)]
    pub const fn bytes(self) -> u64 {
        self.0
    }
}

impl FromStr for MemSize {
    type Err = String;

    /// Binary multiples throughout: `kB`, `KiB` and `k` all mean 1024 bytes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(s.len());
        let (num, unit) = s.split_at(split);

        let scale: u64 = match unit.trim().to_ascii_lowercase().as_str() {
            "" | "b" => 1,
            "k" | "kb" | "kib" => 1 << 10,
            "m" | "mb" | "mib" => 1 << 20,
            "g" | "gb" | "gib" => 1 << 30,
            "t" | "tb" | "tib" => 1 << 40,
            other => return Err(format!("unknown size unit '{other}'")),
        };

        // Integral counts stay in u64 so values past 2^53 keep every bit.
        if !num.contains('.') {
            let value: u64 = num.parse().map_err(|_| format!("bad size '{s}'"))?;
            return value
                .checked_mul(scale)
                .map(Self)
                .ok_or_else(|| format!("size '{s}' does not fit in 64 bits"));
        }

        let value: f64 = num.parse().map_err(|_| format!("bad size '{s}'"))?;
        let bytes = value * scale as f64;
        if !bytes.is_finite() || bytes.fract() != 0.0 {
            return Err(format!("size '{s}' is not a whole number of bytes"));
        }
        if bytes >= u64::MAX as f64 {
            return Err(format!("size '{s}' does not fit in 64 bits"));
        }
        Ok(Self(bytes as u64))
    }
}

impl fmt::Display for MemSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const UNITS: [(u64, &str); 4] = [(1 << 40, "TB"), (1 << 30, "GB"), (1 << 20, "MB"), (1 << 10, "kB")];
        for (scale, unit) in UNITS {
            if self.0 >= scale && self.0 % scale == 0 {
                return write!(f, "{}{unit}", self.0 / scale);
            }
        }
        write!(f, "{}B", self.0)
    }
}

/// A contiguous physical address window `[start, start + size)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AddrRange {
    /// First byte of the range.
    pub start: u64,
    /// Length in bytes.
    pub size: u64,
}

impl AddrRange {
    /// Creates a range starting at zero, the way a bare `AddrRange('1024MB')` does.
    pub const fn from_size(size: MemSize) -> Self {
        Self {
            start: 0,
            size: size.bytes(),
        }
    }

    /// One past the last byte of the range.
    pub const fn end(&self) -> u64 {
        self.start + self.size
    }

    /// Returns `true` if `addr` falls inside the range.
    pub const fn contains(&self, addr: u64) -> bool {
        addr >= self.start && addr < self.end()
    }
}

/// A clock frequency in hertz.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Frequency(pub u64);

impl Frequency {
    /// Clock period in simulation ticks, rounded to the nearest tick.
    pub fn period_ticks(self) -> u64 {
        if self.0 == 0 {
            return 0;
        }
        (TICKS_PER_SECOND as f64 / self.0 as f64).round() as u64
    }
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(s.len());
        let (num, unit) = s.split_at(split);
        let value: f64 = num.parse().map_err(|_| format!("bad frequency '{s}'"))?;

        let scale = match unit.trim().to_ascii_lowercase().as_str() {
            "hz" | "" => 1.0,
            "khz" => 1e3,
            "mhz" => 1e6,
            "ghz" => 1e9,
            other => return Err(format!("unknown frequency unit '{other}'")),
        };

        let hz = (value * scale).round();
        if !hz.is_finite() || hz <= 0.0 {
            return Err(format!("frequency '{s}' must be positive"));
        }
        Ok(Self(hz as u64))
    }
}
