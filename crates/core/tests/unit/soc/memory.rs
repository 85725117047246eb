//! # Memory Tests
//!
//! DRAM preset geometry and the controller's address range.

use rasim_core::common::{AddrRange, MemSize};
use rasim_core::soc::graph::ComponentId;
use rasim_core::soc::memory::{DramModel, MEM_CTRL_PORTS, MemoryController};

#[test]
fn test_ddr3_preset() {
    let dram = DramModel::ddr3_1600_8x8();
    assert_eq!(dram.technology, "DDR3_1600_8x8");
    assert_eq!(dram.device_size, MemSize(512 << 20));
    assert_eq!(dram.t_ck_ps, 1250);
    assert_eq!((dram.t_cl_ps, dram.t_rcd_ps, dram.t_rp_ps), (13_750, 13_750, 13_750));
    assert_eq!(dram.t_ras_ps, 35_000);
}

#[test]
fn test_ddr3_capacity_and_burst() {
    let dram = DramModel::ddr3_1600_8x8();
    assert_eq!(dram.capacity(), 8 << 30);
    assert_eq!(dram.burst_bytes(), 64);
}

#[test]
fn test_controller_serves_its_range() {
    let ctrl = MemoryController::new(AddrRange::from_size(MemSize(1024 << 20)), ComponentId(8));
    assert_eq!(ctrl.dram, ComponentId(8));
    assert!(ctrl.serves(0));
    assert!(ctrl.serves((1 << 30) - 1));
    assert!(!ctrl.serves(1 << 30));
}

#[test]
fn test_controller_single_responder_port() {
    assert_eq!(MEM_CTRL_PORTS.len(), 1);
    assert_eq!(MEM_CTRL_PORTS[0].name, "port");
    assert!(!MEM_CTRL_PORTS[0].vector);
}
