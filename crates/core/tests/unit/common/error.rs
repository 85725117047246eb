//! # Error Tests
//!
//! Display text and conversions into the umbrella error.

use rasim_core::common::{ConfigError, DriverError, Error, Isa, ResolutionError};
use rasim_core::soc::AssemblyState;

#[test]
fn test_out_of_order_message_names_states() {
    let err = ConfigError::OutOfOrder {
        step: "attach L2 cache",
        expected: AssemblyState::L2BusWired,
        found: AssemblyState::L1Attached,
    };
    assert_eq!(
        err.to_string(),
        "cannot attach L2 cache: assembler is in state L1Attached, expected L2BusWired"
    );
}

#[test]
fn test_config_error_messages() {
    assert!(ConfigError::UnknownMode("turbo".into()).to_string().contains("'turbo'"));
    assert_eq!(
        ConfigError::InvalidSize {
            option: "rob_size",
            value: "0".into()
        }
        .to_string(),
        "invalid value '0' for rob_size"
    );
    assert_eq!(
        ConfigError::PortInUse {
            component: "system.cpu".into(),
            port: "icache_port".into()
        }
        .to_string(),
        "port system.cpu.icache_port is already connected"
    );
}

#[test]
fn test_umbrella_conversions() {
    assert!(matches!(
        Error::from(ConfigError::MissingBinary),
        Error::Config(ConfigError::MissingBinary)
    ));
    assert!(matches!(
        Error::from(ResolutionError::UnsupportedIsa(Isa::Arm)),
        Error::Resolution(ResolutionError::UnsupportedIsa(Isa::Arm))
    ));
    assert!(matches!(
        Error::from(DriverError::NotInstantiated),
        Error::Driver(DriverError::NotInstantiated)
    ));
}

#[test]
fn test_driver_error_is_transparent() {
    let inner = DriverError::Workload {
        path: "hello".into(),
        reason: "not found".into(),
    };
    let text = inner.to_string();
    assert_eq!(Error::from(inner).to_string(), text);
}

#[test]
fn test_resolution_error_names_isa() {
    let err: Error = ResolutionError::UnsupportedIsa(Isa::Sparc).into();
    assert_eq!(err.to_string(), "resolution error: run driver does not support ISA sparc");
}
