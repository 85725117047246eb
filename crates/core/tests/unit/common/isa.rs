//! # ISA Tests

use rasim_core::common::{ConfigError, Isa};
use rstest::rstest;

#[rstest]
#[case("x86", Isa::X86)]
#[case("X86_64", Isa::X86)]
#[case("arm", Isa::Arm)]
#[case("aarch64", Isa::Arm)]
#[case("riscv", Isa::Riscv)]
#[case("riscv64", Isa::Riscv)]
#[case("mips", Isa::Mips)]
#[case("ppc", Isa::Power)]
#[case("sparc", Isa::Sparc)]
fn test_isa_parse(#[case] input: &str, #[case] isa: Isa) {
    assert_eq!(input.parse::<Isa>().unwrap(), isa);
}

#[test]
fn test_isa_unknown_tag() {
    assert_eq!(
        "vax".parse::<Isa>().unwrap_err(),
        ConfigError::UnknownIsa("vax".to_string())
    );
}

#[test]
fn test_isa_display_round_trips() {
    for isa in Isa::ALL {
        assert_eq!(isa.to_string().parse::<Isa>().unwrap(), isa);
    }
}

#[test]
fn test_only_x86_routes_interrupts_externally() {
    for isa in Isa::ALL {
        assert_eq!(isa.routes_interrupts_externally(), isa == Isa::X86, "{isa}");
    }
}

#[test]
fn test_isa_default_and_serde() {
    assert_eq!(Isa::default(), Isa::X86);
    assert_eq!(serde_json::to_string(&Isa::Riscv).unwrap(), "\"riscv\"");
    assert_eq!(serde_json::from_str::<Isa>("\"arm\"").unwrap(), Isa::Arm);
}
