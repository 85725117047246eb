//! # Option Set Tests
//!
//! Defaults, JSON loading and the mode tag.

use pretty_assertions::assert_eq;
use rasim_core::common::{ConfigError, Isa};
use rasim_core::config::{CacheOptions, ModeTag, Options};
use rstest::rstest;

#[test]
fn test_options_default() {
    let opts = Options::default();
    assert_eq!(opts.binary, "tests/test-progs/hello/bin/x86/linux/hello");
    assert_eq!(opts.binary_args, "600000");
    assert_eq!(opts.mode, ModeTag::Baseline);
    assert_eq!(opts.rob_size, 192);
    assert!(opts.sst_enabled);
    assert!(opts.rrr_enabled);
    assert!(!opts.exit_pre_when_squash);
    assert_eq!(opts.prdq_entries, 192);
    assert_eq!(opts.sst_entries, 128);
    assert_eq!(opts.l1i_size, "16kB");
    assert_eq!(opts.l1d_size, "64kB");
    assert_eq!(opts.l2_size, "256kB");
    assert_eq!(opts.isa, Isa::X86);
    assert_eq!(opts.clock, "2.66GHz");
    assert_eq!(opts.mem_size, "1024MB");
}

#[test]
fn test_empty_json_is_default() {
    let opts: Options = serde_json::from_str("{}").unwrap();
    assert_eq!(opts, Options::default());
}

#[test]
fn test_json_overrides() {
    let opts: Options = serde_json::from_str(
        r#"{
            "binary": "randacc",
            "binary_args": "1,2",
            "mode": "runahead",
            "rob_size": 256,
            "exit_PRE_when_squash": true,
            "l2_size": "1MB",
            "isa": "riscv"
        }"#,
    )
    .unwrap();
    assert_eq!(opts.binary, "randacc");
    assert_eq!(opts.binary_args, "1,2");
    assert_eq!(opts.mode, ModeTag::Runahead);
    assert_eq!(opts.rob_size, 256);
    assert!(opts.exit_pre_when_squash);
    assert_eq!(opts.l2_size, "1MB");
    assert_eq!(opts.isa, Isa::Riscv);
    assert_eq!(opts.sst_entries, 128);
}

#[test]
fn test_json_rejects_unknown_fields() {
    assert!(serde_json::from_str::<Options>(r#"{ "rob": 10 }"#).is_err());
}

#[test]
fn test_json_rejects_unknown_mode() {
    assert!(serde_json::from_str::<Options>(r#"{ "mode": "turbo" }"#).is_err());
}

#[test]
fn test_json_serialized_names_round_trip() {
    let opts = Options {
        mode: ModeTag::PreciseRunahead,
        exit_pre_when_squash: true,
        ..Options::default()
    };
    let json = serde_json::to_value(&opts).unwrap();
    assert_eq!(json["mode"], "pre");
    assert_eq!(json["exit_PRE_when_squash"], true);
    assert_eq!(serde_json::from_value::<Options>(json).unwrap(), opts);
}

#[rstest]
#[case("baseline", ModeTag::Baseline)]
#[case("runahead", ModeTag::Runahead)]
#[case("pre", ModeTag::PreciseRunahead)]
#[case("precise-runahead", ModeTag::PreciseRunahead)]
fn test_mode_tag_parse(#[case] input: &str, #[case] mode: ModeTag) {
    assert_eq!(input.parse::<ModeTag>().unwrap(), mode);
}

#[rstest]
#[case("Baseline")]
#[case("PRE")]
#[case("")]
fn test_mode_tag_is_case_sensitive(#[case] input: &str) {
    assert_eq!(
        input.parse::<ModeTag>().unwrap_err(),
        ConfigError::UnknownMode(input.to_string())
    );
}

#[test]
fn test_mode_tag_display_round_trips() {
    for mode in ModeTag::ALL {
        assert_eq!(mode.to_string().parse::<ModeTag>().unwrap(), mode);
    }
}

#[test]
fn test_cache_projection() {
    let opts = Options {
        l1i_size: "32kB".into(),
        ..Options::default()
    };
    let caches = opts.caches();
    assert_eq!(caches.l1i_size, "32kB");
    assert_eq!(caches.l1d_size, "64kB");
    assert_eq!(caches.l2_size, "256kB");
    assert_eq!(CacheOptions::default(), Options::default().caches());
}

#[test]
fn test_cache_projection_ignores_mode() {
    let projections: Vec<CacheOptions> = ModeTag::ALL
        .iter()
        .map(|&mode| Options { mode, ..Options::default() }.caches())
        .collect();
    assert!(projections.windows(2).all(|w| w[0] == w[1]));
}
