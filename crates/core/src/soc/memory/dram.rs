//! DRAM technology presets.
//!
//! Only the parameters the engine needs to pick a timing model are recorded
//! here; the timing behaviour itself belongs to the engine.

use serde::Serialize;

use crate::common::MemSize;

/// Device geometry and core timings of one DRAM technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DramModel {
    /// Technology name as known to the engine.
    pub technology: &'static str,
    /// Capacity of a single device.
    pub device_size: MemSize,
    /// Data pins per device.
    pub device_bus_width: u64,
    /// Beats per burst.
    pub burst_length: u64,
    /// Devices ganged into one rank.
    pub devices_per_rank: u64,
    /// Ranks on the channel.
    pub ranks_per_channel: u64,
    /// Banks per rank.
    pub banks_per_rank: u64,
    /// Clock period, picoseconds.
    pub t_ck_ps: u64,
    /// CAS latency, picoseconds.
    pub t_cl_ps: u64,
    /// RAS-to-CAS delay, picoseconds.
    pub t_rcd_ps: u64,
    /// Row precharge, picoseconds.
    pub t_rp_ps: u64,
    /// Row active time, picoseconds.
    pub t_ras_ps: u64,
}

impl DramModel {
    /// DDR3-1600, x8 devices, 8 devices per rank.
    pub const fn ddr3_1600_8x8() -> Self {
        Self {
            technology: "DDR3_1600_8x8",
            device_size: MemSize(512 << 20),
            device_bus_width: 8,
            burst_length: 8,
            devices_per_rank: 8,
            ranks_per_channel: 2,
            banks_per_rank: 8,
            t_ck_ps: 1250,
            t_cl_ps: 13_750,
            t_rcd_ps: 13_750,
            t_rp_ps: 13_750,
            t_ras_ps: 35_000,
        }
    }

    /// Total bytes addressable on the channel.
    pub const fn capacity(&self) -> u64 {
        self.device_size.bytes() * self.devices_per_rank * self.ranks_per_channel
    }

    /// Bytes delivered by one burst on the channel.
    pub const fn burst_bytes(&self) -> u64 {
        self.device_bus_width * self.devices_per_rank * self.burst_length / 8
    }
}
