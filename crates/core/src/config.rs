//! Option Set for topology assembly.
//!
//! This module defines the recognized configuration surface. It provides:
//! 1. **Defaults:** The sample workload, core structure sizes, cache sizes and system clock.
//! 2. **Structures:** The flat `Options` record and the cache-only `CacheOptions` projection.
//! 3. **Enums:** The CPU mode tag.
//!
//! Options are supplied as JSON (see `--config` on the CLI) or use `Options::default()`;
//! individual command-line flags override whatever was loaded.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::Isa;
use crate::common::error::ConfigError;

/// Default option values.
mod defaults {
    /// Sample program executed when no binary is given.
    pub const BINARY: &str = "tests/test-progs/hello/bin/x86/linux/hello";

    /// Argument string for the sample program.
    pub const BINARY_ARGS: &str = "600000";

    /// Reorder buffer entries.
    pub const ROB_SIZE: usize = 192;

    /// Precise Register Deallocation Queue entries.
    pub const PRDQ_ENTRIES: usize = 192;

    /// Stalling Slice Table entries.
    pub const SST_ENTRIES: usize = 128;

    /// L1 instruction cache capacity.
    pub const L1I_SIZE: &str = "16kB";

    /// L1 data cache capacity.
    pub const L1D_SIZE: &str = "64kB";

    /// Unified L2 capacity.
    pub const L2_SIZE: &str = "256kB";

    /// System clock.
    pub const CLOCK: &str = "2.66GHz";

    /// Size of the single physical memory range.
    pub const MEM_SIZE: &str = "1024MB";
}

/// Which out-of-order core implementation to instantiate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ModeTag {
    /// The stock O3 core.
    #[default]
    #[serde(rename = "baseline")]
    Baseline,
    /// Runahead execution on long-latency stalls.
    #[serde(rename = "runahead")]
    Runahead,
    /// Precise runahead execution (PRE).
    #[serde(rename = "pre", alias = "precise-runahead")]
    PreciseRunahead,
}

impl ModeTag {
    /// Every mode, in declaration order.
    pub const ALL: [Self; 3] = [Self::Baseline, Self::Runahead, Self::PreciseRunahead];

    /// Tag as accepted on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::Runahead => "runahead",
            Self::PreciseRunahead => "pre",
        }
    }
}

impl fmt::Display for ModeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModeTag {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "baseline" => Ok(Self::Baseline),
            "runahead" => Ok(Self::Runahead),
            "pre" | "precise-runahead" => Ok(Self::PreciseRunahead),
            other => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }
}

/// Every recognized option, resolved to a value.
///
/// # Examples
///
/// ```
/// use rasim_core::config::{ModeTag, Options};
///
/// let opts: Options = serde_json::from_str(r#"{ "mode": "pre", "sst_entries": 64 }"#).unwrap();
/// assert_eq!(opts.mode, ModeTag::PreciseRunahead);
/// assert_eq!(opts.sst_entries, 64);
/// assert_eq!(opts.rob_size, 192);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Options {
    /// Workload binary
    #[serde(default = "Options::default_binary")]
    pub binary: String,

    /// Comma-delimited arguments for the workload
    #[serde(default = "Options::default_binary_args")]
    pub binary_args: String,

    /// Core implementation
    #[serde(default)]
    pub mode: ModeTag,

    /// Reorder buffer entries
    #[serde(default = "Options::default_rob_size")]
    pub rob_size: usize,

    /// PRE: use the Stalling Slice Table
    #[serde(default = "Options::default_true")]
    pub sst_enabled: bool,

    /// PRE: use register reuse (precise register deallocation)
    #[serde(default = "Options::default_true")]
    pub rrr_enabled: bool,

    /// PRE: leave runahead mode when the ROB squashes
    #[serde(default, rename = "exit_PRE_when_squash")]
    pub exit_pre_when_squash: bool,

    /// PRE: Precise Register Deallocation Queue entries
    #[serde(default = "Options::default_prdq_entries")]
    pub prdq_entries: usize,

    /// PRE: Stalling Slice Table entries
    #[serde(default = "Options::default_sst_entries")]
    pub sst_entries: usize,

    /// L1 instruction cache size
    #[serde(default = "Options::default_l1i_size")]
    pub l1i_size: String,

    /// L1 data cache size
    #[serde(default = "Options::default_l1d_size")]
    pub l1d_size: String,

    /// L2 cache size
    #[serde(default = "Options::default_l2_size")]
    pub l2_size: String,

    /// Target ISA
    #[serde(default)]
    pub isa: Isa,

    /// System clock frequency
    #[serde(default = "Options::default_clock")]
    pub clock: String,

    /// Physical memory size
    #[serde(default = "Options::default_mem_size")]
    pub mem_size: String,
}

impl Options {
    fn default_binary() -> String {
        defaults::BINARY.to_string()
    }

    fn default_binary_args() -> String {
        defaults::BINARY_ARGS.to_string()
    }

    const fn default_rob_size() -> usize {
        defaults::ROB_SIZE
    }

    const fn default_true() -> bool {
        true
    }

    const fn default_prdq_entries() -> usize {
        defaults::PRDQ_ENTRIES
    }

    const fn default_sst_entries() -> usize {
        defaults::SST_ENTRIES
    }

    fn default_l1i_size() -> String {
        defaults::L1I_SIZE.to_string()
    }

    fn default_l1d_size() -> String {
        defaults::L1D_SIZE.to_string()
    }

    fn default_l2_size() -> String {
        defaults::L2_SIZE.to_string()
    }

    fn default_clock() -> String {
        defaults::CLOCK.to_string()
    }

    fn default_mem_size() -> String {
        defaults::MEM_SIZE.to_string()
    }

    /// The subset of options that size the cache hierarchy.
    ///
    /// The cache factory only ever sees this projection, so cache geometry
    /// cannot depend on the core mode.
    pub fn caches(&self) -> CacheOptions {
        CacheOptions {
            l1i_size: self.l1i_size.clone(),
            l1d_size: self.l1d_size.clone(),
            l2_size: self.l2_size.clone(),
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            binary: Self::default_binary(),
            binary_args: Self::default_binary_args(),
            mode: ModeTag::default(),
            rob_size: defaults::ROB_SIZE,
            sst_enabled: true,
            rrr_enabled: true,
            exit_pre_when_squash: false,
            prdq_entries: defaults::PRDQ_ENTRIES,
            sst_entries: defaults::SST_ENTRIES,
            l1i_size: Self::default_l1i_size(),
            l1d_size: Self::default_l1d_size(),
            l2_size: Self::default_l2_size(),
            isa: Isa::default(),
            clock: Self::default_clock(),
            mem_size: Self::default_mem_size(),
        }
    }
}

/// Cache sizing options, independent of the core mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheOptions {
    /// L1 instruction cache size string.
    pub l1i_size: String,
    /// L1 data cache size string.
    pub l1d_size: String,
    /// L2 cache size string.
    pub l2_size: String,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Options::default().caches()
    }
}
