//! Cache factory.
//!
//! Produces the three cache descriptors of the two-level hierarchy. It provides:
//! 1. **Geometry:** Size from the option set; associativity, latencies and MSHRs per level.
//! 2. **Ports:** Every cache exposes an unconnected `cpu_side` responder and `mem_side` requestor.
//!
//! The factory is built from [`CacheOptions`] alone, so nothing it produces can
//! vary with the core mode.

use serde::Serialize;

use crate::common::MemSize;
use crate::common::error::ConfigError;
use crate::config::CacheOptions;
use crate::soc::graph::{ComponentId, ComponentKind, PortRole, PortSpec, SystemGraph};

/// Cache line size in bytes, shared by every level.
pub const LINE_BYTES: u64 = 64;

/// Ports exposed by every cache.
pub const CACHE_PORTS: &[PortSpec] = &[
    PortSpec::scalar("cpu_side", PortRole::Responder),
    PortSpec::scalar("mem_side", PortRole::Requestor),
];

/// Position of a cache in the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CacheKind {
    /// Private L1 instruction cache.
    L1Instruction,
    /// Private L1 data cache.
    L1Data,
    /// Shared L2.
    L2,
}

impl CacheKind {
    /// Returns `true` for either L1.
    pub const fn is_l1(self) -> bool {
        matches!(self, Self::L1Instruction | Self::L1Data)
    }
}

/// A cache level's parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheComponent {
    /// Hierarchy position.
    pub kind: CacheKind,
    /// Capacity.
    pub size: MemSize,
    /// Ways per set.
    pub assoc: u64,
    /// Tag lookup latency in cycles.
    pub tag_latency: u64,
    /// Data array latency in cycles.
    pub data_latency: u64,
    /// Miss response latency in cycles.
    pub response_latency: u64,
    /// Miss status holding registers.
    pub mshrs: u64,
    /// Outstanding targets per MSHR.
    pub tgts_per_mshr: u64,
}

impl CacheComponent {
    /// Number of sets implied by size, line size and associativity.
    pub const fn num_sets(&self) -> u64 {
        self.size.bytes() / (LINE_BYTES * self.assoc)
    }
}

/// Builds L1I, L1D and L2 descriptors from cache options.
#[derive(Debug, Clone)]
pub struct CacheFactory {
    l1i_size: MemSize,
    l1d_size: MemSize,
    l2_size: MemSize,
}

impl CacheFactory {
    /// Parses and validates the three cache sizes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSize`] if a size does not parse or does not
    /// divide into whole sets of that level's associativity.
    pub fn new(opts: &CacheOptions) -> Result<Self, ConfigError> {
        Ok(Self {
            l1i_size: parse_size("l1i_size", &opts.l1i_size, L1_ASSOC)?,
            l1d_size: parse_size("l1d_size", &opts.l1d_size, L1_ASSOC)?,
            l2_size: parse_size("l2_size", &opts.l2_size, L2_ASSOC)?,
        })
    }

    /// L1 instruction cache.
    pub const fn make_l1_instruction(&self) -> CacheComponent {
        l1(CacheKind::L1Instruction, self.l1i_size)
    }

    /// L1 data cache.
    pub const fn make_l1_data(&self) -> CacheComponent {
        l1(CacheKind::L1Data, self.l1d_size)
    }

    /// Shared L2 cache.
    pub const fn make_l2(&self) -> CacheComponent {
        CacheComponent {
            kind: CacheKind::L2,
            size: self.l2_size,
            assoc: L2_ASSOC,
            tag_latency: 20,
            data_latency: 20,
            response_latency: 20,
            mshrs: 20,
            tgts_per_mshr: 12,
        }
    }
}

const L1_ASSOC: u64 = 2;
const L2_ASSOC: u64 = 8;

const fn l1(kind: CacheKind, size: MemSize) -> CacheComponent {
    CacheComponent {
        kind,
        size,
        assoc: L1_ASSOC,
        tag_latency: 2,
        data_latency: 2,
        response_latency: 2,
        mshrs: 4,
        tgts_per_mshr: 20,
    }
}

fn parse_size(option: &'static str, value: &str, assoc: u64) -> Result<MemSize, ConfigError> {
    let invalid = || ConfigError::InvalidSize {
        option,
        value: value.to_string(),
    };
    let size: MemSize = value.parse().map_err(|_| invalid())?;
    let set_bytes = LINE_BYTES * assoc;
    if size.bytes() == 0 || size.bytes() % set_bytes != 0 {
        return Err(invalid());
    }
    Ok(size)
}

/// Connection operations offered by cache components.
impl SystemGraph {
    /// Binds an L1 cache's `cpu_side` to the matching core port
    /// (`icache_port` or `dcache_port`).
    ///
    /// # Errors
    ///
    /// [`ConfigError::WrongComponent`] if `cache` is not an L1; otherwise as
    /// [`SystemGraph::connect`].
    pub fn connect_cpu(&mut self, cache: ComponentId, core: ComponentId) -> Result<(), ConfigError> {
        let core_port = match self.cache_kind(cache)? {
            CacheKind::L1Instruction => "icache_port",
            CacheKind::L1Data => "dcache_port",
            CacheKind::L2 => return Err(self.wrong_component(cache, "an L1 cache")),
        };
        self.connect(core, core_port, cache, "cpu_side")
    }

    /// Binds an L1 cache's `mem_side` to a crossbar's CPU-side ports.
    ///
    /// # Errors
    ///
    /// [`ConfigError::WrongComponent`] if `cache` is not an L1; otherwise as
    /// [`SystemGraph::connect`].
    pub fn connect_bus(&mut self, cache: ComponentId, bus: ComponentId) -> Result<(), ConfigError> {
        if !self.cache_kind(cache)?.is_l1() {
            return Err(self.wrong_component(cache, "an L1 cache"));
        }
        self.connect(cache, "mem_side", bus, "cpu_side_ports")
    }

    /// Binds a cache's `cpu_side` to a crossbar's memory-side ports.
    ///
    /// # Errors
    ///
    /// As [`SystemGraph::connect`], or [`ConfigError::WrongComponent`] if `cache` is not a cache.
    pub fn connect_cpu_side_bus(&mut self, cache: ComponentId, bus: ComponentId) -> Result<(), ConfigError> {
        let _ = self.cache_kind(cache)?;
        self.connect(bus, "mem_side_ports", cache, "cpu_side")
    }

    /// Binds a cache's `mem_side` to a crossbar's CPU-side ports.
    ///
    /// # Errors
    ///
    /// As [`SystemGraph::connect`], or [`ConfigError::WrongComponent`] if `cache` is not a cache.
    pub fn connect_mem_side_bus(&mut self, cache: ComponentId, bus: ComponentId) -> Result<(), ConfigError> {
        let _ = self.cache_kind(cache)?;
        self.connect(cache, "mem_side", bus, "cpu_side_ports")
    }

    fn cache_kind(&self, id: ComponentId) -> Result<CacheKind, ConfigError> {
        match self.component(id).map(|c| &c.kind) {
            Some(ComponentKind::Cache(cache)) => Ok(cache.kind),
            _ => Err(self.wrong_component(id, "a cache")),
        }
    }

    fn wrong_component(&self, id: ComponentId, expected: &'static str) -> ConfigError {
        ConfigError::WrongComponent {
            component: self
                .component(id)
                .map_or_else(|| format!("component #{}", id.0), |c| c.name.clone()),
            expected,
        }
    }
}
