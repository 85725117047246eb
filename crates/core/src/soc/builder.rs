//! System construction from options.
//!
//! This module builds the complete graph from an option set. It performs:
//! 1. **Mode selection:** Picks the core variant and its structure sizes.
//! 2. **Cache creation:** Builds L1I, L1D and L2 from the cache-only options.
//! 3. **Topology:** Runs every assembler stage in order, including conditional interrupt wiring.
//! 4. **Workload:** Binds `[binary, args...]` to the core.

use crate::common::error::ConfigError;
use crate::common::{AddrRange, Frequency, MemSize};
use crate::config::Options;
use crate::core::mode;
use crate::sim::workload;
use crate::soc::assembler::TopologyAssembler;
use crate::soc::cache::CacheFactory;
use crate::soc::graph::{ClockDomain, SystemGraph};
use crate::soc::interconnect::Bus;
use crate::soc::memory::DramModel;

/// Builds a ready-to-run system graph from `opts`.
///
/// # Errors
///
/// Any [`ConfigError`]: unknown or invalid option values, a missing binary, or
/// a structural error raised by the assembler.
pub fn build_system(opts: &Options) -> Result<SystemGraph, ConfigError> {
    let core = mode::select(opts)?;
    let caches = CacheFactory::new(&opts.caches())?;
    let process = workload::process_for(&opts.binary, &opts.binary_args)?;

    let clock: Frequency = opts
        .clock
        .parse()
        .ok()
        .filter(|clock: &Frequency| clock.period_ticks() > 0)
        .ok_or_else(|| ConfigError::InvalidSize {
            option: "clock",
            value: opts.clock.clone(),
        })?;
    let mem_size: MemSize = opts
        .mem_size
        .parse()
        .ok()
        .filter(|size: &MemSize| size.bytes() > 0)
        .ok_or_else(|| ConfigError::InvalidSize {
            option: "mem_size",
            value: opts.mem_size.clone(),
        })?;

    let mut asm = TopologyAssembler::new(
        opts.isa,
        ClockDomain::new(clock),
        vec![AddrRange::from_size(mem_size)],
    );
    asm.create_core(core)?;
    asm.attach_l1(caches.make_l1_instruction(), caches.make_l1_data())?;
    asm.wire_l2_bus(Bus::l2_xbar())?;
    asm.attach_l2(caches.make_l2())?;
    asm.wire_system_bus(Bus::system_xbar())?;
    asm.wire_interrupts()?;
    asm.attach_memory(DramModel::ddr3_1600_8x8())?;
    asm.bind_workload(process)?;
    asm.finish()
}
