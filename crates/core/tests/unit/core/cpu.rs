//! # Core Descriptor Tests

use rasim_core::common::{AddrRange, Isa};
use rasim_core::config::ModeTag;
use rasim_core::core::cpu::{IQ_ENTRIES, LQ_ENTRIES, SQ_ENTRIES};
use rasim_core::core::{CoreVariant, InterruptController, O3Core, PreParams};
use rasim_core::sim::workload;
use rasim_core::soc::graph::PortRole;
use serde_json::json;

fn pre_params() -> PreParams {
    PreParams {
        sst_enabled: true,
        rrr_enabled: false,
        exit_on_squash: true,
        prdq_entries: 96,
        sst_entries: 64,
    }
}

#[test]
fn test_variant_names_and_banners() {
    let pre = CoreVariant::PreciseRunahead(pre_params());
    assert_eq!(CoreVariant::Baseline.type_name(), "O3CPU");
    assert_eq!(CoreVariant::Runahead.type_name(), "RunaheadO3CPU");
    assert_eq!(pre.type_name(), "PreO3CPU");

    assert_eq!(CoreVariant::Baseline.banner(), "----------------baseline----------------");
    assert_eq!(CoreVariant::Runahead.banner(), "----------------runahead----------------");
    assert_eq!(pre.banner(), "----------------PRE----------------");
}

#[test]
fn test_variant_mode_tags() {
    assert_eq!(CoreVariant::Baseline.mode(), ModeTag::Baseline);
    assert_eq!(CoreVariant::Runahead.mode(), ModeTag::Runahead);
    assert_eq!(CoreVariant::PreciseRunahead(pre_params()).mode(), ModeTag::PreciseRunahead);
}

#[test]
fn test_variant_serializes_with_type_tag() {
    assert_eq!(
        serde_json::to_value(CoreVariant::Runahead).unwrap(),
        json!({ "type": "RunaheadO3CPU" })
    );
    assert_eq!(
        serde_json::to_value(CoreVariant::PreciseRunahead(pre_params())).unwrap(),
        json!({
            "type": "PreO3CPU",
            "sst_enabled": true,
            "rrr_enabled": false,
            "exit_on_squash": true,
            "prdq_entries": 96,
            "sst_entries": 64,
        })
    );
}

#[test]
fn test_new_core_defaults() {
    let core = O3Core::new(CoreVariant::Baseline, 192);
    assert_eq!(core.rob_entries, 192);
    assert_eq!(core.lq_entries, LQ_ENTRIES);
    assert_eq!(core.sq_entries, SQ_ENTRIES);
    assert_eq!(core.iq_entries, IQ_ENTRIES);
    assert_eq!(core.num_threads, 1);
    assert!(!core.has_workload());
    assert!(core.threads().is_empty());
    assert!(core.pre_params().is_none());
}

#[test]
fn test_pre_params_only_on_pre_variant() {
    let core = O3Core::new(CoreVariant::PreciseRunahead(pre_params()), 192);
    assert_eq!(core.pre_params(), Some(&pre_params()));
    assert!(O3Core::new(CoreVariant::Runahead, 192).pre_params().is_none());
}

#[test]
fn test_process_command() {
    let process = workload::process_for("randacc", "600000").unwrap();
    assert_eq!(process.executable(), "randacc");
    assert_eq!(process.cmd(), ["randacc", "600000"]);
}

#[test]
fn test_interrupt_ports_x86() {
    let ports = InterruptController::new(Isa::X86).ports();
    let names: Vec<_> = ports.iter().map(|p| (p.name, p.role)).collect();
    assert_eq!(
        names,
        [
            ("pio", PortRole::Responder),
            ("int_requestor", PortRole::Requestor),
            ("int_responder", PortRole::Responder),
        ]
    );
}

#[test]
fn test_interrupt_ports_internal_isas() {
    for isa in Isa::ALL.into_iter().filter(|&i| i != Isa::X86) {
        assert!(InterruptController::new(isa).ports().is_empty(), "{isa}");
    }
}

#[test]
fn test_thread_context_range_follows_memory() {
    let graph = rasim_core::build_system(&rasim_core::Options::default()).unwrap();
    let core = graph.core().unwrap();
    assert!(core.has_workload());
    assert_eq!(core.threads().len(), 1);
    assert_eq!(core.threads()[0].thread_id, 0);
    assert_eq!(
        core.threads()[0].addr_range,
        AddrRange {
            start: 0,
            size: 1 << 30
        }
    );
}
