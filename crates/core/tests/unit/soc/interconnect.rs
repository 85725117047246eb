//! # Crossbar Tests

use rasim_core::soc::graph::PortRole;
use rasim_core::soc::interconnect::{BUS_PORTS, Bus, XBarKind};

#[test]
fn test_l2_xbar_parameters() {
    let bus = Bus::l2_xbar();
    assert_eq!(bus.kind, XBarKind::L2XBar);
    assert_eq!(bus.width, 32);
    assert_eq!(
        (bus.frontend_latency, bus.forward_latency, bus.response_latency, bus.snoop_response_latency),
        (1, 0, 1, 1)
    );
}

#[test]
fn test_system_xbar_parameters() {
    let bus = Bus::system_xbar();
    assert_eq!(bus.kind, XBarKind::SystemXBar);
    assert_eq!(bus.width, 16);
    assert_eq!(
        (bus.frontend_latency, bus.forward_latency, bus.response_latency, bus.snoop_response_latency),
        (3, 4, 2, 4)
    );
}

#[test]
fn test_transit_cycles_rounds_up_beats() {
    let l2 = Bus::l2_xbar();
    assert_eq!(l2.transit_cycles(0), 1);
    assert_eq!(l2.transit_cycles(1), 2);
    assert_eq!(l2.transit_cycles(32), 2);
    assert_eq!(l2.transit_cycles(64), 3);

    let sys = Bus::system_xbar();
    assert_eq!(sys.transit_cycles(64), 7);
    assert_eq!(sys.transit_cycles(65), 8);
}

#[test]
fn test_bus_ports_are_vectors() {
    assert!(BUS_PORTS.iter().all(|p| p.vector));
    let roles: Vec<_> = BUS_PORTS.iter().map(|p| (p.name, p.role)).collect();
    assert_eq!(
        roles,
        [("cpu_side_ports", PortRole::Responder), ("mem_side_ports", PortRole::Requestor)]
    );
}
