//! # Mode Selector Tests

use rasim_core::common::ConfigError;
use rasim_core::config::{ModeTag, Options};
use rasim_core::core::mode::{select, select_by_tag};
use rasim_core::core::{CoreVariant, PreParams};
use rstest::rstest;

use crate::common::harness::init_tracing;

#[rstest]
fn test_select_matches_tag(#[values(ModeTag::Baseline, ModeTag::Runahead, ModeTag::PreciseRunahead)] mode: ModeTag) {
    init_tracing();
    let core = select(&Options { mode, ..Options::default() }).unwrap();
    assert_eq!(core.variant.mode(), mode);
    assert_eq!(core.rob_entries, 192);
}

#[test]
fn test_select_pre_carries_options() {
    let opts = Options {
        mode: ModeTag::PreciseRunahead,
        sst_enabled: false,
        rrr_enabled: true,
        exit_pre_when_squash: true,
        prdq_entries: 100,
        sst_entries: 32,
        ..Options::default()
    };
    let core = select(&opts).unwrap();
    assert_eq!(
        core.variant,
        CoreVariant::PreciseRunahead(PreParams {
            sst_enabled: false,
            rrr_enabled: true,
            exit_on_squash: true,
            prdq_entries: 100,
            sst_entries: 32,
        })
    );
}

#[rstest]
#[case(ModeTag::Baseline)]
#[case(ModeTag::Runahead)]
fn test_non_pre_modes_ignore_pre_options(#[case] mode: ModeTag) {
    let opts = Options {
        mode,
        prdq_entries: 0,
        sst_entries: 0,
        ..Options::default()
    };
    let core = select(&opts).unwrap();
    assert!(core.pre_params().is_none());
}

#[test]
fn test_zero_rob_rejected() {
    let err = select(&Options {
        rob_size: 0,
        ..Options::default()
    })
    .unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidSize {
            option: "rob_size",
            value: "0".into()
        }
    );
}

#[rstest]
#[case::prdq(Options { mode: ModeTag::PreciseRunahead, prdq_entries: 0, ..Options::default() }, "prdq_entries")]
#[case::sst(Options { mode: ModeTag::PreciseRunahead, sst_entries: 0, ..Options::default() }, "sst_entries")]
fn test_zero_pre_structures_rejected(#[case] opts: Options, #[case] option: &str) {
    match select(&opts).unwrap_err() {
        ConfigError::InvalidSize { option: got, .. } => assert_eq!(got, option),
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_select_by_tag_unknown() {
    assert_eq!(
        select_by_tag("turbo", &Options::default()).unwrap_err(),
        ConfigError::UnknownMode("turbo".into())
    );
}

#[test]
fn test_select_by_tag_overrides_mode() {
    let core = select_by_tag("pre", &Options::default()).unwrap();
    assert_eq!(core.variant.mode(), ModeTag::PreciseRunahead);
    assert_eq!(core.pre_params().map(|p| p.sst_entries), Some(128));
}
